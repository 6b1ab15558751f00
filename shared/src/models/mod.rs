//! Entity models

pub mod branch;
pub mod employee;
mod id;

pub use branch::{Branch, BranchCreate, BranchUpdate};
pub use employee::{Employee, EmployeeCreate, EmployeeUpdate, RosterEntry};
pub use id::RecordId;
