//! river-server — Pixell River branch/employee API
//!
//! A small CRUD service over two entity collections (branches and
//! employees), backed by either an in-process memory store or an
//! embedded document store, selected at startup.

pub mod api;
pub mod config;
pub mod services;
pub mod state;
pub mod store;
pub mod validation;

pub use config::{Config, StoreBackend};
pub use state::AppState;
