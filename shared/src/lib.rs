//! Shared types for the Pixell River API
//!
//! Common types used by the server crate: entity models, record
//! identifiers, error types, and the uniform response envelope.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::RecordId;
