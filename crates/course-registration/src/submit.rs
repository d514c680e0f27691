//! Hand-off of a selection to whatever records registrations.
//!
//! The registration form never stores anything itself. A
//! [`RegistrationSink`] receives a [`SubmissionRequest`] and the form shows
//! the resulting [`Confirmation`].

use std::fmt;

use serde::Serialize;

use course_model::CourseId;

use crate::error::SinkError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Registration,
    Draft,
}

impl SubmissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionKind::Registration => "registration",
            SubmissionKind::Draft => "draft",
        }
    }
}

impl fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the selected courses handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    pub kind: SubmissionKind,
    /// Selected course ids in catalog order.
    pub course_ids: Vec<CourseId>,
    pub total_credits: u32,
}

impl SubmissionRequest {
    pub fn course_count(&self) -> usize {
        self.course_ids.len()
    }

    pub fn confirmation(&self) -> Confirmation {
        let count = self.course_count();
        let message = match self.kind {
            SubmissionKind::Registration => format!(
                "{count} courses registered ({} credits).",
                self.total_credits
            ),
            SubmissionKind::Draft => format!("Draft saved with {count} course(s)."),
        };
        Confirmation {
            kind: self.kind,
            message,
        }
    }
}

/// Human-readable acknowledgement shown after a registration or draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub kind: SubmissionKind,
    pub message: String,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Receiver of registrations and drafts.
pub trait RegistrationSink {
    fn submit(&mut self, request: &SubmissionRequest) -> Result<(), SinkError>;
}

/// Keeps every submission in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    requests: Vec<SubmissionRequest>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[SubmissionRequest] {
        &self.requests
    }

    pub fn last(&self) -> Option<&SubmissionRequest> {
        self.requests.last()
    }
}

impl RegistrationSink for RecordingSink {
    fn submit(&mut self, request: &SubmissionRequest) -> Result<(), SinkError> {
        self.requests.push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(kind: SubmissionKind, ids: &[&str], total_credits: u32) -> SubmissionRequest {
        SubmissionRequest {
            kind,
            course_ids: ids.iter().map(|id| CourseId::new(*id).unwrap()).collect(),
            total_credits,
        }
    }

    #[test]
    fn registration_confirmation_text() {
        let confirmation =
            request(SubmissionKind::Registration, &["A-01", "B-01", "C-01"], 9).confirmation();
        assert_eq!(confirmation.message, "3 courses registered (9 credits).");
    }

    #[test]
    fn draft_confirmation_text() {
        let confirmation = request(SubmissionKind::Draft, &["A-01"], 3).confirmation();
        assert_eq!(confirmation.to_string(), "Draft saved with 1 course(s).");
    }

    #[test]
    fn recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.submit(&request(SubmissionKind::Draft, &["A-01"], 3))
            .unwrap();
        sink.submit(&request(SubmissionKind::Registration, &["A-01", "B-01"], 6))
            .unwrap();
        assert_eq!(sink.requests().len(), 2);
        assert_eq!(sink.last().unwrap().kind, SubmissionKind::Registration);
    }
}
