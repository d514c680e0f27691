use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid course id: {0:?}")]
    InvalidCourseId(String),
    #[error("course {course} must carry at least one credit hour")]
    ZeroCreditHours { course: String },
    #[error("invalid credit bounds: minimum {min} exceeds maximum {max}")]
    InvalidBounds { min: u32, max: u32 },
    #[error("unknown course category: {0}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
