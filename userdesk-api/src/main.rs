//! # Userdesk API Server
//!
//! Serves create/read/update/delete for the User resource under `/users`.
//!
//! With `DATABASE_URL` set, users are stored in PostgreSQL and migrations
//! run at startup; without it they live in memory for the lifetime of the
//! process.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p userdesk-api
//! ```

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userdesk_api::{
    app::{build_router, AppState},
    config::Config,
};
use userdesk_shared::{
    db::{
        migrations::run_migrations,
        pool::{close_pool, create_pool},
    },
    store::{MemoryUserStore, PgUserStore, UserStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userdesk_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Userdesk API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let pool = match config.database.clone() {
        Some(database) => {
            let pool = create_pool(database).await?;
            run_migrations(&pool).await?;
            Some(pool)
        }
        None => None,
    };

    let store: Arc<dyn UserStore> = match &pool {
        Some(pool) => Arc::new(PgUserStore::new(pool.clone())),
        None => {
            tracing::warn!("DATABASE_URL not set, users will be kept in memory");
            Arc::new(MemoryUserStore::new())
        }
    };

    let bind_address = config.bind_address();
    let app = build_router(AppState::new(store, config));

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        close_pool(pool).await;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received, exiting...");
}
