use serde::Serialize;

use course_model::{Course, CreditBounds, CreditStatus, StatusSeverity};

/// Values derived from the catalog selection and the credit bounds.
///
/// Only [`RegistrationSummary::derive`] builds one, so a summary always
/// agrees with the courses it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationSummary {
    total_credits: u32,
    selected_count: usize,
    total_count: usize,
    status: CreditStatus,
}

impl RegistrationSummary {
    pub fn derive(courses: &[Course], bounds: CreditBounds) -> Self {
        let (total_credits, selected_count) = courses
            .iter()
            .filter(|course| course.selected)
            .fold((0u32, 0usize), |(credits, count), course| {
                (credits.saturating_add(course.credit_hours), count + 1)
            });
        Self {
            total_credits,
            selected_count,
            total_count: courses.len(),
            status: CreditStatus::evaluate(total_credits, bounds),
        }
    }

    pub fn total_credits(&self) -> u32 {
        self.total_credits
    }

    pub fn selected_count(&self) -> usize {
        self.selected_count
    }

    /// Number of courses in the catalog, selected or not.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn status(&self) -> CreditStatus {
        self.status
    }

    pub fn status_message(&self) -> String {
        self.status.message()
    }

    pub fn status_severity(&self) -> StatusSeverity {
        self.status.severity()
    }

    pub fn can_register(&self) -> bool {
        self.status.can_register()
    }
}
