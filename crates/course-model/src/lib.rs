pub mod category;
pub mod course;
pub mod error;
pub mod ids;
pub mod status;

pub use category::CourseCategory;
pub use course::Course;
pub use error::{ModelError, Result};
pub use ids::CourseId;
pub use status::{
    CreditBounds, CreditStatus, DEFAULT_MAX_CREDITS, DEFAULT_MIN_CREDITS, StatusSeverity,
};
