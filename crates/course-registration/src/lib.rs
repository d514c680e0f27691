//! Course registration state derivation.
//!
//! The form keeps a catalog of [`course_model::Course`] records with
//! selection flags. Toggling a course recomputes the credit total, the
//! selected count and a status with a severity and a registration verdict.

pub mod error;
pub mod search;
pub mod state;
pub mod submit;
pub mod summary;

pub use error::{RegistrationError, Result, SinkError};
pub use search::filter_courses;
pub use state::RegistrationState;
pub use submit::{
    Confirmation, RecordingSink, RegistrationSink, SubmissionKind, SubmissionRequest,
};
pub use summary::RegistrationSummary;
