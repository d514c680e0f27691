use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use course_model::{Course, CreditBounds};

use crate::error::CatalogError;

/// The offered courses together with the credit bounds they are registered
/// against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub bounds: CreditBounds,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Catalog {
    /// Build a catalog, checking every course and id uniqueness.
    pub fn new(bounds: CreditBounds, courses: Vec<Course>) -> Result<Self, CatalogError> {
        let catalog = Self { bounds, courses };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = BTreeSet::new();
        for course in &self.courses {
            course.validate()?;
            if !seen.insert(course.id.as_str()) {
                return Err(CatalogError::DuplicateCourse {
                    id: course.id.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Course>, CreditBounds) {
        (self.courses, self.bounds)
    }
}
