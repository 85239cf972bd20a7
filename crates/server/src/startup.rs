use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, AppState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: initialize the board store and run the HTTP server.
///
/// Startup is idempotent across restarts: migrations use `if_not_exists`
/// and seeding only touches empty tables.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    env_checks().await?;

    // Board store: connect, migrate, seed
    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    models::seed::seed_defaults(&db).await?;

    let state = AppState { db };

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(state, cors);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting corkboard server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn env_checks() -> anyhow::Result<()> {
    // The data dir must exist before SQLite can create the store file in it.
    common::env::ensure_env("frontend", "data").await
}
