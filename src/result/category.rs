//! Status category classification

use super::status::ResultStatusCode;
use serde::{Deserialize, Serialize};

/// Status category classification based on status code ranges
///
/// Categories are determined by the band of the numeric code:
/// - 0xxx: General outcomes
/// - 1xxx: Authentication failures
/// - 2xxx: Business rule failures
/// - 9xxx: System failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    /// General outcomes (0xxx)
    General,
    /// Authentication failures (1xxx)
    Auth,
    /// Business rule failures (2xxx)
    Business,
    /// System failures (9xxx and unmapped bands)
    System,
}

impl StatusCategory {
    /// Determine category from a numeric status code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Business,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Business => "business",
            Self::System => "system",
        }
    }
}

impl ResultStatusCode {
    /// Get the category for this status code
    pub fn category(&self) -> StatusCategory {
        StatusCategory::from_code(self.code())
    }
}
