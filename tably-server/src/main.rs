//! tably-server — restaurant/food-court ordering backend
//!
//! HTTP service that:
//! - Serves the public catalog (restaurants, tables, stalls, menus, reviews)
//! - Creates orders with snapshot pricing and a linear status lifecycle
//! - Maintains per-user wallets with an append-only transaction ledger
//! - Delivers per-user notifications with a read/unread flag

mod api;
mod auth;
mod config;
mod db;
mod state;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tably_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting tably-server (env: {})", config.environment);

    // Initialize application state (connects to Postgres, runs migrations)
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("tably-server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
