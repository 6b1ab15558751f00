//! redb-backed document store
//!
//! One table per collection, key = opaque uuid string, value = the
//! JSON-serialized record. Key assignment is delegated to this layer
//! and surfaces as [`RecordId::Key`]; callers never see sequential ids
//! in this mode.
//!
//! redb commits with immediate durability by default (copy-on-write,
//! atomic pointer swap), so the database file stays consistent across
//! unclean shutdowns.

use super::{Entity, RecordStore, StoreError, StoreResult};
use async_trait::async_trait;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::models::RecordId;
use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// Open or create a document database at the given path.
///
/// Both collections live in the same file; the returned handle is shared
/// between the per-entity stores.
pub fn open_database(path: impl AsRef<Path>) -> StoreResult<Arc<Database>> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(Arc::new(Database::create(path)?))
}

/// Open a throwaway in-memory document database (tests, `DATABASE_PATH=":memory:"`).
pub fn open_in_memory_database() -> StoreResult<Arc<Database>> {
    let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
    Ok(Arc::new(db))
}

/// Document-backed record store for one collection
pub struct DocumentStore<T> {
    db: Arc<Database>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> DocumentStore<T> {
    /// Bind a store to its collection table, creating the table if the
    /// database has never seen it.
    pub fn new(db: Arc<Database>) -> StoreResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(Self::table())?;
        }
        write_txn.commit()?;

        Ok(Self {
            db,
            _entity: PhantomData,
        })
    }

    fn table() -> TableDefinition<'static, &'static str, &'static [u8]> {
        TableDefinition::new(T::COLLECTION)
    }
}

#[async_trait]
impl<T: Entity> RecordStore<T> for DocumentStore<T> {
    async fn list(&self) -> StoreResult<Vec<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(Self::table())?;

        let mut records = Vec::new();
        for entry in table.iter()? {
            let (_, value) = entry?;
            records.push(serde_json::from_slice(value.value())?);
        }
        Ok(records)
    }

    async fn insert(&self, draft: T::Draft) -> StoreResult<T> {
        let key = Uuid::new_v4().to_string();
        let record = T::with_id(RecordId::Key(key.clone()), draft);
        let bytes = serde_json::to_vec(&record)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(Self::table())?;
            table.insert(key.as_str(), bytes.as_slice())?;
        }
        write_txn.commit()?;

        Ok(record)
    }

    async fn find_by_id(&self, id: &RecordId) -> StoreResult<Option<T>> {
        let key = id.to_string();
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(Self::table())?;

        match table.get(key.as_str())? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    async fn replace(&self, id: &RecordId, record: T) -> StoreResult<()> {
        let key = id.to_string();
        let bytes = serde_json::to_vec(&record)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(Self::table())?;
            if table.get(key.as_str())?.is_none() {
                return Err(StoreError::not_found::<T>(id));
            }
            table.insert(key.as_str(), bytes.as_slice())?;
        }
        write_txn.commit()?;

        Ok(())
    }

    async fn remove(&self, id: &RecordId) -> StoreResult<T> {
        let key = id.to_string();

        let write_txn = self.db.begin_write()?;
        let removed: Option<T> = {
            let mut table = write_txn.open_table(Self::table())?;
            match table.remove(key.as_str())? {
                Some(value) => Some(serde_json::from_slice(value.value())?),
                None => None,
            }
        };
        write_txn.commit()?;

        removed.ok_or_else(|| StoreError::not_found::<T>(id))
    }
}
