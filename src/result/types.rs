//! The service result record and its factory

use super::category::StatusCategory;
use super::status::ResultStatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared handle to the causal error behind a failure result
///
/// Reference-counted so the same underlying error can be carried across
/// re-packaged results of different value types without cloning the error
/// itself.
pub type SourceError = Arc<dyn std::error::Error + Send + Sync>;

/// Outcome of a service-layer operation
///
/// An immutable record holding a status code, an optional payload, an optional
/// human-readable message, and an optional causal error. Failures are returned,
/// never thrown: service operations construct one of these instead of
/// propagating an error to the caller.
///
/// The status code is the single source of truth for success/failure: a
/// success may carry no value, and a failure may carry a partial or fallback
/// value. Fields are only set at construction; converting diagnostics to a
/// different value type produces a new instance (see
/// [`pass_through_fail`](Self::pass_through_fail)).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResult<T> {
    /// Status code (0 for success, non-zero for failures)
    status_code: ResultStatusCode,
    /// Payload (typically, not exclusively, present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<T>,
    /// Causal error behind the failure, if one exists
    #[serde(skip)]
    inner_error: Option<SourceError>,
    /// Human-readable diagnostic message
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

/// Emit a tracing event for a newly constructed failure
///
/// System-band failures are logged at error level, everything else at debug.
fn trace_failure(status_code: ResultStatusCode, error_message: Option<&str>) {
    if status_code.category() == StatusCategory::System {
        tracing::error!(
            code = %status_code,
            message = error_message,
            "system failure result"
        );
    } else {
        tracing::debug!(
            code = %status_code,
            message = error_message,
            "failure result"
        );
    }
}

impl<T> ServiceResult<T> {
    // ==================== Factory constructors ====================

    /// Create a success result with an optional value
    ///
    /// An absent value is valid: "operation succeeded, nothing to return".
    pub fn success(value: Option<T>) -> Self {
        Self {
            status_code: ResultStatusCode::Ok,
            value,
            inner_error: None,
            error_message: None,
        }
    }

    /// Create a success result without a value
    pub fn ok() -> Self {
        Self::success(None)
    }

    /// Create a success result from a bare value
    pub fn from_value(value: T) -> Self {
        Self::success(Some(value))
    }

    /// Create a failure result with a message and the generic failure code
    pub fn failure(error_message: impl Into<String>) -> Self {
        Self::failure_with_code(ResultStatusCode::GenericFailure, error_message)
    }

    /// Create a failure result with an explicit status code and message
    ///
    /// Passing [`ResultStatusCode::Ok`] here is a programming error, not a
    /// runtime failure path.
    pub fn failure_with_code(
        status_code: ResultStatusCode,
        error_message: impl Into<String>,
    ) -> Self {
        debug_assert!(
            !status_code.is_success(),
            "failure result constructed with the success status code"
        );
        let error_message = error_message.into();
        trace_failure(status_code, Some(&error_message));
        Self {
            status_code,
            value: None,
            inner_error: None,
            error_message: Some(error_message),
        }
    }

    /// Create a failure result with only a status code
    ///
    /// Neither a message nor a causal error is required for a valid failure;
    /// the code alone classifies the outcome. Passing
    /// [`ResultStatusCode::Ok`] here is a programming error.
    pub fn failure_code(status_code: ResultStatusCode) -> Self {
        debug_assert!(
            !status_code.is_success(),
            "failure result constructed with the success status code"
        );
        trace_failure(status_code, None);
        Self {
            status_code,
            value: None,
            inner_error: None,
            error_message: None,
        }
    }

    /// Create a failure result from a causal error
    ///
    /// The status code defaults to [`ResultStatusCode::GenericFailure`] and no
    /// message is set; use [`with_status`](Self::with_status) and
    /// [`with_message`](Self::with_message) to refine.
    pub fn failure_from_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        trace_failure(ResultStatusCode::GenericFailure, None);
        Self {
            status_code: ResultStatusCode::GenericFailure,
            value: None,
            inner_error: Some(Arc::new(error)),
            error_message: None,
        }
    }

    /// Create a failure result from an existing result of a different value type
    ///
    /// The new result inherits the source's status code, error message, and
    /// inner error; `value` is the caller's replacement payload. Override the
    /// inherited message or code with [`with_message`](Self::with_message) /
    /// [`with_status`](Self::with_status). The inner error is always
    /// inherited.
    pub fn failure_from_result<S>(source: &ServiceResult<S>, value: Option<T>) -> Self {
        Self {
            status_code: source.status_code,
            value,
            inner_error: source.inner_error.clone(),
            error_message: source.error_message.clone(),
        }
    }

    // ==================== Builder-style overrides ====================

    /// Replace the status code
    ///
    /// Used to override the inherited code on a re-packaged failure.
    /// [`ResultStatusCode::Ok`] is a programming error here.
    pub fn with_status(mut self, status_code: ResultStatusCode) -> Self {
        debug_assert!(
            !status_code.is_success(),
            "failure result overridden with the success status code"
        );
        self.status_code = status_code;
        self
    }

    /// Replace the error message
    pub fn with_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = Some(error_message.into());
        self
    }

    /// Attach or replace the value
    ///
    /// Permits "failed, but here is a partial/fallback value".
    pub fn with_value(mut self, value: T) -> Self {
        self.value = Some(value);
        self
    }

    /// Attach or replace the causal error
    pub fn with_inner_error<E>(mut self, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.inner_error = Some(Arc::new(error));
        self
    }

    // ==================== Predicates and accessors ====================

    /// Check whether this result is a success
    ///
    /// Derived solely from the status code, independent of value presence.
    pub fn is_success(&self) -> bool {
        self.status_code.is_success()
    }

    /// Check whether this result is a failure
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Get the status code
    pub fn status_code(&self) -> ResultStatusCode {
        self.status_code
    }

    /// Get the error message, if any
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Get the causal error, if any
    pub fn inner_error(&self) -> Option<&SourceError> {
        self.inner_error.as_ref()
    }

    /// Get the value, panicking if absent
    ///
    /// Panics whenever the value is absent, regardless of status; a
    /// successful valueless result panics too. This is a precondition
    /// violation, not part of the failure channel; callers that cannot
    /// guarantee value presence use [`try_get`](Self::try_get).
    pub fn get(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => panic!("called `ServiceResult::get()` on a result without a value"),
        }
    }

    /// Get the value if present
    ///
    /// Returns `None` exactly when the value is absent, for both success and
    /// failure results. Like [`get`](Self::get), this does not consult the
    /// status code.
    pub fn try_get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consume the result, returning the value if present
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Re-package this result's diagnostics as a failure of a different value type
    ///
    /// Convenience over [`failure_from_result`](Self::failure_from_result):
    /// the new result carries this result's status code, message, and inner
    /// error, with `value` as the replacement payload.
    pub fn pass_through_fail<U>(&self, value: Option<U>) -> ServiceResult<U> {
        ServiceResult::failure_from_result(self, value)
    }
}

impl<T> From<T> for ServiceResult<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T: PartialEq> PartialEq for ServiceResult<T> {
    /// Structural equality; inner errors compare by `Arc` identity since
    /// `dyn Error` has no general equality.
    fn eq(&self, other: &Self) -> bool {
        self.status_code == other.status_code
            && self.value == other.value
            && self.error_message == other.error_message
            && match (&self.inner_error, &other.inner_error) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}
