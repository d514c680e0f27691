use thiserror::Error;

use course_model::CreditStatus;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("registration refused at {total_credits} credits: {status}")]
    NotEligible {
        total_credits: u32,
        status: CreditStatus,
    },
    #[error("submission failed: {0}")]
    Sink(#[from] SinkError),
}

/// Failure reported by a [`crate::RegistrationSink`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SinkError {
    message: String,
}

impl SinkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistrationError>;
