//! In-process memory store
//!
//! An ordered list behind an async RwLock. Intended for demo-grade,
//! low-concurrency deployments; there is no cross-request transaction.

use super::{Entity, RecordStore, StoreError, StoreResult};
use async_trait::async_trait;
use shared::models::RecordId;
use tokio::sync::RwLock;

/// Memory-backed record store
pub struct MemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Entity> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Build a store pre-populated with records that already carry ids
    /// (seed data).
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Smallest positive integer not already taken.
    ///
    /// Walks candidates from 1 upward against the sorted set of existing
    /// ids, so ids freed by deletions are reused before new ones are
    /// minted. A plain `len + 1` would hand out duplicates after a
    /// deletion.
    fn next_id(records: &[T]) -> u64 {
        let mut taken: Vec<u64> = records
            .iter()
            .filter_map(|r| match r.id() {
                RecordId::Seq(n) => Some(*n),
                RecordId::Key(_) => None,
            })
            .collect();
        taken.sort_unstable();

        let mut candidate = 1u64;
        for id in taken {
            if id == candidate {
                candidate += 1;
            } else if id > candidate {
                break;
            }
        }
        candidate
    }
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> RecordStore<T> for MemoryStore<T> {
    async fn list(&self) -> StoreResult<Vec<T>> {
        Ok(self.records.read().await.clone())
    }

    async fn insert(&self, draft: T::Draft) -> StoreResult<T> {
        let mut records = self.records.write().await;
        let id = RecordId::Seq(Self::next_id(&records));
        let record = T::with_id(id, draft);
        records.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: &RecordId) -> StoreResult<Option<T>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn replace(&self, id: &RecordId, record: T) -> StoreResult<()> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id() == id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(StoreError::not_found::<T>(id)),
        }
    }

    async fn remove(&self, id: &RecordId) -> StoreResult<T> {
        let mut records = self.records.write().await;
        match records.iter().position(|r| r.id() == id) {
            Some(index) => Ok(records.remove(index)),
            None => Err(StoreError::not_found::<T>(id)),
        }
    }
}
