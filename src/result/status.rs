//! Status codes for service results
//!
//! This module defines the outcome classifiers carried by every
//! [`ServiceResult`](super::ServiceResult). Codes are organized by category:
//! - 0xxx: General outcomes
//! - 1xxx: Authentication failures
//! - 2xxx: Business rule failures
//! - 9xxx: System failures

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Outcome classifier for a service result
///
/// All status codes are represented as u16 values for efficient serialization.
/// `Ok` is the sole success tag; every other code denotes a distinct failure
/// category. New domain-specific codes are added by extending the enum within
/// the appropriate band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ResultStatusCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Ok = 0,
    /// Unclassified failure
    GenericFailure = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// Caller is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials
    InvalidCredentials = 1002,
    /// Permission denied
    PermissionDenied = 1003,

    // ==================== 2xxx: Business ====================
    /// Business rule violation
    BusinessRule = 2001,
    /// Precondition not met
    PreconditionFailed = 2002,
    /// Quota or limit exceeded
    QuotaExceeded = 2003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ResultStatusCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is the success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ResultStatusCode::Ok)
    }

    /// Get the developer-facing English message for this status code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ResultStatusCode::Ok => "Operation completed successfully",
            ResultStatusCode::GenericFailure => "Operation failed",
            ResultStatusCode::ValidationFailed => "Validation failed",
            ResultStatusCode::NotFound => "Resource not found",
            ResultStatusCode::AlreadyExists => "Resource already exists",
            ResultStatusCode::InvalidRequest => "Invalid request",

            // Auth
            ResultStatusCode::NotAuthenticated => "Caller is not authenticated",
            ResultStatusCode::InvalidCredentials => "Invalid credentials",
            ResultStatusCode::PermissionDenied => "Permission denied",

            // Business
            ResultStatusCode::BusinessRule => "Business rule violation",
            ResultStatusCode::PreconditionFailed => "Precondition not met",
            ResultStatusCode::QuotaExceeded => "Quota or limit exceeded",

            // System
            ResultStatusCode::InternalError => "Internal error",
            ResultStatusCode::DatabaseError => "Database error",
            ResultStatusCode::NetworkError => "Network error",
            ResultStatusCode::TimeoutError => "Operation timed out",
            ResultStatusCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ResultStatusCode> for u16 {
    #[inline]
    fn from(code: ResultStatusCode) -> Self {
        code.code()
    }
}

/// Error when converting from an unmapped u16 to [`ResultStatusCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid status code: {0}")]
pub struct InvalidStatusCode(pub u16);

impl TryFrom<u16> for ResultStatusCode {
    type Error = InvalidStatusCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ResultStatusCode::Ok),
            1 => Ok(ResultStatusCode::GenericFailure),
            2 => Ok(ResultStatusCode::ValidationFailed),
            3 => Ok(ResultStatusCode::NotFound),
            4 => Ok(ResultStatusCode::AlreadyExists),
            5 => Ok(ResultStatusCode::InvalidRequest),

            // Auth
            1001 => Ok(ResultStatusCode::NotAuthenticated),
            1002 => Ok(ResultStatusCode::InvalidCredentials),
            1003 => Ok(ResultStatusCode::PermissionDenied),

            // Business
            2001 => Ok(ResultStatusCode::BusinessRule),
            2002 => Ok(ResultStatusCode::PreconditionFailed),
            2003 => Ok(ResultStatusCode::QuotaExceeded),

            // System
            9001 => Ok(ResultStatusCode::InternalError),
            9002 => Ok(ResultStatusCode::DatabaseError),
            9003 => Ok(ResultStatusCode::NetworkError),
            9004 => Ok(ResultStatusCode::TimeoutError),
            9005 => Ok(ResultStatusCode::ConfigError),

            _ => Err(InvalidStatusCode(value)),
        }
    }
}

impl fmt::Display for ResultStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_values() {
        // General
        assert_eq!(ResultStatusCode::Ok.code(), 0);
        assert_eq!(ResultStatusCode::GenericFailure.code(), 1);
        assert_eq!(ResultStatusCode::ValidationFailed.code(), 2);
        assert_eq!(ResultStatusCode::NotFound.code(), 3);
        assert_eq!(ResultStatusCode::AlreadyExists.code(), 4);
        assert_eq!(ResultStatusCode::InvalidRequest.code(), 5);

        // Auth
        assert_eq!(ResultStatusCode::NotAuthenticated.code(), 1001);
        assert_eq!(ResultStatusCode::InvalidCredentials.code(), 1002);
        assert_eq!(ResultStatusCode::PermissionDenied.code(), 1003);

        // Business
        assert_eq!(ResultStatusCode::BusinessRule.code(), 2001);
        assert_eq!(ResultStatusCode::PreconditionFailed.code(), 2002);
        assert_eq!(ResultStatusCode::QuotaExceeded.code(), 2003);

        // System
        assert_eq!(ResultStatusCode::InternalError.code(), 9001);
        assert_eq!(ResultStatusCode::DatabaseError.code(), 9002);
        assert_eq!(ResultStatusCode::NetworkError.code(), 9003);
        assert_eq!(ResultStatusCode::TimeoutError.code(), 9004);
        assert_eq!(ResultStatusCode::ConfigError.code(), 9005);
    }

    #[test]
    fn test_is_success() {
        assert!(ResultStatusCode::Ok.is_success());
        assert!(!ResultStatusCode::GenericFailure.is_success());
        assert!(!ResultStatusCode::NotFound.is_success());
        assert!(!ResultStatusCode::InternalError.is_success());
    }

    #[test]
    fn test_try_from_roundtrip() {
        let codes = [
            ResultStatusCode::Ok,
            ResultStatusCode::GenericFailure,
            ResultStatusCode::ValidationFailed,
            ResultStatusCode::NotFound,
            ResultStatusCode::AlreadyExists,
            ResultStatusCode::InvalidRequest,
            ResultStatusCode::NotAuthenticated,
            ResultStatusCode::InvalidCredentials,
            ResultStatusCode::PermissionDenied,
            ResultStatusCode::BusinessRule,
            ResultStatusCode::PreconditionFailed,
            ResultStatusCode::QuotaExceeded,
            ResultStatusCode::InternalError,
            ResultStatusCode::DatabaseError,
            ResultStatusCode::NetworkError,
            ResultStatusCode::TimeoutError,
            ResultStatusCode::ConfigError,
        ];
        for code in codes {
            assert_eq!(ResultStatusCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(
            ResultStatusCode::try_from(12345),
            Err(InvalidStatusCode(12345))
        );
        assert_eq!(
            InvalidStatusCode(12345).to_string(),
            "invalid status code: 12345"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ResultStatusCode::Ok.to_string(), "0");
        assert_eq!(ResultStatusCode::NotFound.to_string(), "3");
        assert_eq!(ResultStatusCode::InternalError.to_string(), "9001");
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ResultStatusCode::Ok.message(),
            "Operation completed successfully"
        );
        assert_eq!(ResultStatusCode::NotFound.message(), "Resource not found");
        assert_eq!(ResultStatusCode::DatabaseError.message(), "Database error");
    }

    #[test]
    fn test_serialize_as_u16() {
        let json = serde_json::to_string(&ResultStatusCode::NotFound).unwrap();
        assert_eq!(json, "3");

        let json = serde_json::to_string(&ResultStatusCode::InternalError).unwrap();
        assert_eq!(json, "9001");
    }

    #[test]
    fn test_deserialize_from_u16() {
        let code: ResultStatusCode = serde_json::from_str("0").unwrap();
        assert_eq!(code, ResultStatusCode::Ok);

        let code: ResultStatusCode = serde_json::from_str("2001").unwrap();
        assert_eq!(code, ResultStatusCode::BusinessRule);

        let result: Result<ResultStatusCode, _> = serde_json::from_str("777");
        assert!(result.is_err());
    }
}
