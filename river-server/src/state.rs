//! Application state

use crate::config::{Config, StoreBackend};
use crate::services::{BranchService, EmployeeService};
use crate::store::{self, DocumentStore, MemoryStore, RecordStore, seed};
use crate::validation::Schemas;
use shared::models::{Branch, Employee};
use std::sync::Arc;
use std::time::Instant;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
///
/// Built once at process start. The record-store backend is chosen here
/// and injected into the services; nothing downstream branches on the
/// storage kind.
#[derive(Clone)]
pub struct AppState {
    /// Branch business operations
    pub branches: BranchService,
    /// Employee business operations
    pub employees: EmployeeService,
    /// Request-body schemas (email TLD list comes from config)
    pub schemas: Arc<Schemas>,
    /// Process start, for the health endpoint's uptime
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, BoxError> {
        let (branch_store, employee_store): (
            Arc<dyn RecordStore<Branch>>,
            Arc<dyn RecordStore<Employee>>,
        ) = match config.store_backend {
            StoreBackend::Memory => {
                tracing::info!(seed = config.seed_data, "Using memory record store");
                if config.seed_data {
                    (
                        Arc::new(MemoryStore::with_records(seed::branches())),
                        Arc::new(MemoryStore::with_records(seed::employees())),
                    )
                } else {
                    (
                        Arc::new(MemoryStore::new()),
                        Arc::new(MemoryStore::new()),
                    )
                }
            }
            StoreBackend::Document => {
                tracing::info!(path = %config.database_path, "Using document record store");
                let db = if config.database_path == ":memory:" {
                    store::open_in_memory_database()?
                } else {
                    store::open_database(&config.database_path)?
                };
                (
                    Arc::new(DocumentStore::new(db.clone())?),
                    Arc::new(DocumentStore::new(db)?),
                )
            }
        };

        Ok(Self {
            branches: BranchService::new(branch_store),
            employees: EmployeeService::new(employee_store),
            schemas: Arc::new(Schemas::new(&config.email_allowed_tlds)),
            started_at: Instant::now(),
        })
    }
}
