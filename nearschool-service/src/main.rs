//! nearschool Service - HTTP microservice listing schools by distance.
//!
//! ## Environment Variables
//!
//! A `.env` file in the working directory is loaded first, if present.
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `PORT` | HTTP server port | 4000 |
//! | `NEARSCHOOL_STORE` | `mysql` or `memory` | `mysql` |
//! | `NEARSCHOOL_STRICT_COORDINATES` | Reject out-of-range coordinates | false |
//! | `DATABASE_URL` | Full MySQL URL, overrides `DB_*` | None |
//! | `DB_HOST` / `DB_PORT` | MySQL server | `localhost` / 3306 |
//! | `DB_USER` / `DB_PASSWORD` | MySQL credentials | `root` / empty |
//! | `DB_NAME` | Database name | Required for `mysql` |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `POST /addSchool` - Store a school
//! - `GET /listSchools?latitude=X&longitude=Y` - Schools ordered by distance
//! - `GET /health` - Health check
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use std::net::SocketAddr;
use std::sync::Arc;

use nearschool::{MemorySchoolStore, MySqlSchoolStore, SchoolStore, StoreConfig};
use nearschool_service::{router, AppState, ServiceConfig, StoreKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nearschool_service=info,nearschool=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env()?;

    let store: Arc<dyn SchoolStore> = match config.store {
        StoreKind::MySql => {
            let store_config = StoreConfig::from_env()?;
            let store = match MySqlSchoolStore::connect(&store_config).await {
                Ok(store) => store,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to connect to database");
                    return Err(e.into());
                }
            };
            store.ensure_schema().await?;

            tracing::info!(
                host = %store_config.host,
                database = %store_config.database,
                url = store_config.url.is_some(),
                "Database connected"
            );
            Arc::new(store)
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory store, schools are lost on exit");
            Arc::new(MemorySchoolStore::new())
        }
    };

    tracing::info!(
        port = config.port,
        store = ?config.store,
        strict_coordinates = config.strict_coordinates,
        "Starting nearschool service"
    );

    let state = Arc::new(AppState::new(store).strict_coordinates(config.strict_coordinates));
    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolve on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Could not listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
