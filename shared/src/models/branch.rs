//! Branch Model

use super::RecordId;
use serde::{Deserialize, Serialize};

/// A bank branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub phone_number: u64,
}

/// Create branch payload (id is assigned by the store)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchCreate {
    pub name: String,
    pub address: String,
    pub phone_number: u64,
}

/// Update branch payload
///
/// Only `address` and `phoneNumber` are updatable; `name` and `id` are
/// rejected by the update schema before this type is ever built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<u64>,
}
