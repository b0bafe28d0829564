use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use catalog::{
    memory::MemCatalog,
    repository::{CatalogStorage, SeaOrmCatalog},
    service::Catalog,
};
use configs::{AppConfig, StorageBackendKind};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Pick and initialize the storage backend once, at startup.
///
/// The in-memory store is reseeded on every boot; the postgres store
/// requires a connection string and fails hard without one.
async fn build_catalog(cfg: &AppConfig) -> anyhow::Result<Catalog> {
    let storage: Arc<dyn CatalogStorage> = match cfg.storage.backend {
        StorageBackendKind::Memory => {
            info!(backend = "memory", "seeding in-memory catalog");
            Arc::new(MemCatalog::seeded().await)
        }
        StorageBackendKind::Postgres => {
            info!(backend = "postgres", "connecting to database catalog");
            let db = models::db::connect(&cfg.database.url).await?;
            Arc::new(SeaOrmCatalog { db })
        }
    };
    Ok(Catalog::new(storage))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    common::env::ensure_env("frontend").await?;

    let cfg = AppConfig::load_and_validate()?;
    let catalog = build_catalog(&cfg).await?;

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(catalog, cors);

    // Bind and serve
    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting content api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
