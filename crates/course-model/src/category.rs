//! Course categories.
//!
//! A category decides how a course counts towards the programme: core
//! courses are mandatory for the programme, electives are chosen from the
//! faculty pool, and university courses are campus-wide requirements.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Serialized as its label; any label accepted by [`FromStr`] deserializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CourseCategory {
    /// Mandatory programme course.
    Core,
    /// Course chosen from the faculty elective pool.
    Elective,
    /// University-wide requirement (languages, co-curriculum).
    University,
}

impl CourseCategory {
    pub const ALL: [CourseCategory; 3] = [Self::Core, Self::Elective, Self::University];

    /// Returns the label shown in catalog listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseCategory::Core => "Core",
            CourseCategory::Elective => "Elective",
            CourseCategory::University => "University",
        }
    }
}

impl fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CourseCategory {
    type Err = ModelError;

    /// Parse a category label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "CORE" => Ok(CourseCategory::Core),
            "ELECTIVE" => Ok(CourseCategory::Elective),
            "UNIVERSITY" | "UNI" => Ok(CourseCategory::University),
            _ => Err(ModelError::UnknownCategory(s.to_string())),
        }
    }
}

impl TryFrom<String> for CourseCategory {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CourseCategory> for String {
    fn from(category: CourseCategory) -> Self {
        category.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "Core".parse::<CourseCategory>().unwrap(),
            CourseCategory::Core
        );
        assert_eq!(
            " elective ".parse::<CourseCategory>().unwrap(),
            CourseCategory::Elective
        );
        assert_eq!(
            "UNI".parse::<CourseCategory>().unwrap(),
            CourseCategory::University
        );
        assert!("Lab".parse::<CourseCategory>().is_err());
    }

    #[test]
    fn test_category_display_round_trips() {
        for category in CourseCategory::ALL {
            assert_eq!(
                category.to_string().parse::<CourseCategory>().unwrap(),
                category
            );
        }
    }

    #[test]
    fn test_category_serde_uses_labels() {
        let category: CourseCategory = serde_json::from_str("\"core\"").unwrap();
        assert_eq!(category, CourseCategory::Core);
        assert_eq!(
            serde_json::to_string(&CourseCategory::University).unwrap(),
            "\"University\""
        );
        assert!(serde_json::from_str::<CourseCategory>("\"Lab\"").is_err());
    }
}
