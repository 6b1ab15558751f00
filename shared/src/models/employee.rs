//! Employee Model

use super::RecordId;
use serde::{Deserialize, Serialize};

/// An employee of the organization
///
/// `branch_id` references a [`super::branch::Branch`] but is not checked
/// against existing branches; that gap is part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: RecordId,
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone_number: u64,
    pub branch_id: RecordId,
}

/// Create employee payload (id is assigned by the store)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone_number: u64,
    pub branch_id: RecordId,
}

/// Update employee payload
///
/// `name` and `id` are never updatable; the update schema rejects them
/// before this type is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<RecordId>,
}

/// Read-only roster projection produced by the grouped lookups
/// (employees by branch, employees by department). Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub branch_id: RecordId,
    pub name: String,
    pub department: String,
}

impl From<&Employee> for RosterEntry {
    fn from(employee: &Employee) -> Self {
        Self {
            branch_id: employee.branch_id.clone(),
            name: employee.name.clone(),
            department: employee.department.clone(),
        }
    }
}
