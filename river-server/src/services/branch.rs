//! Branch service

use crate::store::RecordStore;
use shared::error::{AppError, AppResult};
use shared::models::{Branch, BranchCreate, BranchUpdate, RecordId};
use std::sync::Arc;

/// Business operations over the branch collection
#[derive(Clone)]
pub struct BranchService {
    store: Arc<dyn RecordStore<Branch>>,
}

impl BranchService {
    pub fn new(store: Arc<dyn RecordStore<Branch>>) -> Self {
        Self { store }
    }

    /// All branches
    pub async fn list(&self) -> AppResult<Vec<Branch>> {
        Ok(self.store.list().await?)
    }

    /// Create a branch; the store assigns the id
    pub async fn create(&self, data: BranchCreate) -> AppResult<Branch> {
        Ok(self.store.insert(data).await?)
    }

    /// Get a branch by id
    pub async fn get(&self, id: &RecordId) -> AppResult<Branch> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Branch with id {id}")))
    }

    /// Partial update: only fields present in `data` change, everything
    /// else keeps its stored value. The merged record is persisted under
    /// the same id and returned.
    pub async fn update(&self, id: &RecordId, data: BranchUpdate) -> AppResult<Branch> {
        let mut branch = self.get(id).await?;

        if let Some(address) = data.address {
            branch.address = address;
        }
        if let Some(phone_number) = data.phone_number {
            branch.phone_number = phone_number;
        }

        self.store.replace(id, branch.clone()).await?;
        Ok(branch)
    }

    /// Delete a branch permanently, returning the pre-removal snapshot
    pub async fn delete(&self, id: &RecordId) -> AppResult<Branch> {
        Ok(self.store.remove(id).await?)
    }
}
