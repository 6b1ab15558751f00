//! Record store layer
//!
//! The store owns the canonical copies of all records and hands out
//! owned clones only. Two interchangeable backends implement the same
//! contract:
//!
//! - [`MemoryStore`]: in-process ordered list, sequential integer ids
//!   with gap-filling assignment
//! - [`DocumentStore`]: embedded redb database, one table per
//!   collection, opaque uuid keys
//!
//! The backend is chosen once when the application state is built;
//! nothing above this layer knows which one is in play.

mod document;
mod memory;
pub mod seed;

pub use document::{DocumentStore, open_database, open_in_memory_database};
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};
use shared::models::{
    Branch, BranchCreate, Employee, EmployeeCreate, RecordId,
};
use thiserror::Error;

/// A storable entity type
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The create payload: every field except the id
    type Draft: Send + 'static;

    /// Collection (table) name in the document backend
    const COLLECTION: &'static str;

    fn id(&self) -> &RecordId;

    /// Build a full record from a store-assigned id and a draft
    fn with_id(id: RecordId, draft: Self::Draft) -> Self;
}

impl Entity for Branch {
    type Draft = BranchCreate;

    const COLLECTION: &'static str = "branches";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn with_id(id: RecordId, draft: BranchCreate) -> Self {
        Self {
            id,
            name: draft.name,
            address: draft.address,
            phone_number: draft.phone_number,
        }
    }
}

impl Entity for Employee {
    type Draft = EmployeeCreate;

    const COLLECTION: &'static str = "employees";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn with_id(id: RecordId, draft: EmployeeCreate) -> Self {
        Self {
            id,
            name: draft.name,
            position: draft.position,
            department: draft.department,
            email: draft.email,
            phone_number: draft.phone_number,
            branch_id: draft.branch_id,
        }
    }
}

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{collection} record {id} not found")]
    NotFound {
        collection: &'static str,
        id: String,
    },

    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    fn not_found<T: Entity>(id: &RecordId) -> Self {
        Self::NotFound {
            collection: T::COLLECTION,
            id: id.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => AppError::with_message(ErrorCode::NotFound, e.to_string()),
            other => AppError::store(other.to_string()),
        }
    }
}

/// Find / insert / replace / remove contract shared by both backends.
///
/// Every returned record is an owned, independent copy; callers may
/// mutate what they receive without touching stored state.
#[async_trait]
pub trait RecordStore<T: Entity>: Send + Sync {
    /// All records, in store order
    async fn list(&self) -> StoreResult<Vec<T>>;

    /// Insert a new record, assigning its id
    async fn insert(&self, draft: T::Draft) -> StoreResult<T>;

    /// Look up a record by id
    async fn find_by_id(&self, id: &RecordId) -> StoreResult<Option<T>>;

    /// Overwrite the record stored under `id`
    async fn replace(&self, id: &RecordId, record: T) -> StoreResult<()>;

    /// Remove the record stored under `id`, returning the removed record
    async fn remove(&self, id: &RecordId) -> StoreResult<T>;
}
