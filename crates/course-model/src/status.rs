//! Credit-hour bounds and the status derived from a credit total.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ModelError;

/// Minimum credit load used by the sample catalog.
pub const DEFAULT_MIN_CREDITS: u32 = 9;
/// Maximum credit load used by the sample catalog.
pub const DEFAULT_MAX_CREDITS: u32 = 21;

/// Qualitative classification of the current total, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusSeverity {
    Information,
    Warning,
    Success,
}

impl StatusSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusSeverity::Information => "Information",
            StatusSeverity::Warning => "Warning",
            StatusSeverity::Success => "Success",
        }
    }
}

impl fmt::Display for StatusSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive credit-hour range a registration must fall in.
///
/// A minimum above the maximum is refused: no total could ever register
/// against it, so it is reported as a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct CreditBounds {
    min: u32,
    max: u32,
}

/// Either bound may be omitted and takes its default.
#[derive(Deserialize)]
struct RawBounds {
    #[serde(default = "default_min")]
    min: u32,
    #[serde(default = "default_max")]
    max: u32,
}

fn default_min() -> u32 {
    DEFAULT_MIN_CREDITS
}

fn default_max() -> u32 {
    DEFAULT_MAX_CREDITS
}

impl TryFrom<RawBounds> for CreditBounds {
    type Error = ModelError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl CreditBounds {
    pub fn new(min: u32, max: u32) -> Result<Self, ModelError> {
        if min > max {
            return Err(ModelError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, total: u32) -> bool {
        (self.min..=self.max).contains(&total)
    }
}

impl Default for CreditBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_CREDITS,
            max: DEFAULT_MAX_CREDITS,
        }
    }
}

impl fmt::Display for CreditBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.min, self.max)
    }
}

/// Status of a credit total against a set of bounds.
///
/// Exactly one variant holds for any total, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CreditStatus {
    Empty,
    BelowMinimum { min: u32 },
    AboveMaximum { max: u32 },
    WithinRange,
}

impl CreditStatus {
    pub fn evaluate(total: u32, bounds: CreditBounds) -> Self {
        if total == 0 {
            CreditStatus::Empty
        } else if total < bounds.min() {
            CreditStatus::BelowMinimum { min: bounds.min() }
        } else if total > bounds.max() {
            CreditStatus::AboveMaximum { max: bounds.max() }
        } else {
            CreditStatus::WithinRange
        }
    }

    pub fn message(&self) -> String {
        match self {
            CreditStatus::Empty => {
                "No courses selected. Please select courses to register.".to_string()
            }
            CreditStatus::BelowMinimum { min } => {
                format!("Insufficient credit hours. Minimum required is {min}.")
            }
            CreditStatus::AboveMaximum { max } => {
                format!("Credit hours exceeded. Maximum allowed is {max}.")
            }
            CreditStatus::WithinRange => "Credit hours within allowed range.".to_string(),
        }
    }

    pub fn severity(&self) -> StatusSeverity {
        match self {
            CreditStatus::Empty => StatusSeverity::Information,
            CreditStatus::BelowMinimum { .. } | CreditStatus::AboveMaximum { .. } => {
                StatusSeverity::Warning
            }
            CreditStatus::WithinRange => StatusSeverity::Success,
        }
    }

    pub fn can_register(&self) -> bool {
        matches!(self, CreditStatus::WithinRange)
    }
}

impl fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
