//! Unified service result system
//!
//! This module provides a standardized way for service-layer operations to
//! report outcomes without throwing for expected failure paths:
//! - [`ResultStatusCode`]: Standardized outcome classifiers
//! - [`StatusCategory`]: Classification of status codes by band
//! - [`ServiceResult`]: Generic value-or-failure container with diagnostics
//!
//! # Status Code Ranges
//!
//! - 0xxx: General outcomes (`Ok` is 0)
//! - 1xxx: Authentication failures
//! - 2xxx: Business rule failures
//! - 9xxx: System failures
//!
//! # Example
//!
//! ```
//! use service_result::{ResultStatusCode, ServiceResult};
//!
//! fn find_username(id: u64) -> ServiceResult<String> {
//!     if id == 0 {
//!         return ServiceResult::failure_with_code(ResultStatusCode::NotFound, "user not found");
//!     }
//!     ServiceResult::from_value(format!("user-{id}"))
//! }
//!
//! // A failure detected while producing one value type can be re-packaged
//! // as a failure of another, keeping the diagnostic trail.
//! fn greeting(id: u64) -> ServiceResult<String> {
//!     let username = find_username(id);
//!     if username.is_failure() {
//!         return username.pass_through_fail(None);
//!     }
//!     ServiceResult::from_value(format!("hello, {}", username.get()))
//! }
//!
//! assert!(greeting(7).is_success());
//! assert_eq!(greeting(0).status_code(), ResultStatusCode::NotFound);
//! ```

mod category;
mod status;
mod types;

pub use category::StatusCategory;
pub use status::{InvalidStatusCode, ResultStatusCode};
pub use types::{ServiceResult, SourceError};
