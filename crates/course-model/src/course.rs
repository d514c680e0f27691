use serde::{Deserialize, Serialize};

use crate::{CourseCategory, CourseId, ModelError};

/// A catalog entry: one offered class section with fixed credit hours and a
/// selection flag owned by the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    /// Subject code shared by every section of the course (e.g. "BCS3013").
    pub code: String,
    pub name: String,
    pub lecturer: String,
    /// Free-form meeting times, e.g. "Mon 8:00–11:00, Wed 2:00–4:00".
    pub schedule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub credit_hours: u32,
    pub category: CourseCategory,
    #[serde(default)]
    pub selected: bool,
}

impl Course {
    /// Build an unselected course, rejecting zero credit hours.
    pub fn new(
        id: CourseId,
        code: impl Into<String>,
        name: impl Into<String>,
        lecturer: impl Into<String>,
        schedule: impl Into<String>,
        credit_hours: u32,
        category: CourseCategory,
    ) -> Result<Self, ModelError> {
        let course = Self {
            id,
            code: code.into(),
            name: name.into(),
            lecturer: lecturer.into(),
            schedule: schedule.into(),
            section: None,
            credit_hours,
            category,
            selected: false,
        };
        course.validate()?;
        Ok(course)
    }

    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.credit_hours == 0 {
            return Err(ModelError::ZeroCreditHours {
                course: self.id.to_string(),
            });
        }
        Ok(())
    }

    /// Case-sensitive substring match against code, name and lecturer.
    ///
    /// An empty query matches every course.
    pub fn matches_query(&self, query: &str) -> bool {
        self.code.contains(query) || self.name.contains(query) || self.lecturer.contains(query)
    }
}
