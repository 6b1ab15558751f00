//! Entity services
//!
//! Business operations over the record store: list, create, get,
//! partial update, delete, and (for employees) the grouped roster
//! lookups. Services hold a store handle chosen at composition time and
//! never know which backend is behind it.
//!
//! Field-level validation happens before a service is invoked; the
//! typed update payloads only carry allow-listed fields, so an
//! out-of-allow-list write cannot be expressed here.

mod branch;
mod employee;

pub use branch::BranchService;
pub use employee::EmployeeService;
