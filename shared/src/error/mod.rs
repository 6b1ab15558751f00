//! Unified error system for the Pixell River API
//!
//! - [`ErrorCode`]: standardized error codes with HTTP status mapping
//! - [`AppError`]: rich error type with code, message, and details
//! - [`ApiResponse`]: the uniform response envelope
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! let err = AppError::not_found("Branch 3");
//! assert_eq!(err.code, ErrorCode::NotFound);
//!
//! let response = ApiResponse::<()>::error(&err);
//! ```

mod codes;
mod types;

pub use codes::ErrorCode;
pub use types::{ApiResponse, AppError, AppResult, ResponseStatus};
