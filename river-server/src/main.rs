//! river-server — Pixell River branch/employee API
//!
//! Long-running HTTP service exposing CRUD over the branch and employee
//! collections plus the grouped roster lookups, backed by the record
//! store selected in configuration.

use river_server::{AppState, Config, api};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "river_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting river-server (backend: {:?})", config.store_backend);

    let state = AppState::new(&config)?;
    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("river-server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
