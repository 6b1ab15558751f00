//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Which record-store backend to use.
///
/// Selected once at startup; services never branch on the storage kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-process ordered list with sequential integer ids
    Memory,
    /// Embedded document store (redb) with opaque string keys
    Document,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP port
    pub port: u16,
    /// Record-store backend (env: STORE_BACKEND, "memory" | "document")
    pub store_backend: StoreBackend,
    /// Path of the document database file (document mode only)
    pub database_path: String,
    /// Load the sample branch/employee data at startup (memory mode only)
    pub seed_data: bool,
    /// Top-level domains accepted by the employee email validation rule
    pub email_allowed_tlds: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let store_backend = match std::env::var("STORE_BACKEND").as_deref() {
            Ok("document") => StoreBackend::Document,
            Ok("memory") | Err(_) => StoreBackend::Memory,
            Ok(other) => {
                return Err(format!(
                    "STORE_BACKEND must be \"memory\" or \"document\", got {other:?}"
                )
                .into());
            }
        };

        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            store_backend,
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/records.redb".into()),
            seed_data: std::env::var("SEED_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            email_allowed_tlds: std::env::var("EMAIL_ALLOWED_TLDS")
                .map(|v| {
                    v.split(',')
                        .map(|t| t.trim().to_string())
                        .filter(|t| !t.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| vec!["com".to_string()]),
        })
    }
}

impl Default for Config {
    /// Development defaults: memory backend, seeded, `.com`-only emails.
    fn default() -> Self {
        Self {
            port: 3000,
            store_backend: StoreBackend::Memory,
            database_path: "data/records.redb".into(),
            seed_data: true,
            email_allowed_tlds: vec!["com".to_string()],
        }
    }
}
