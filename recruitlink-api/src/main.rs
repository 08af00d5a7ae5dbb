//! # RecruitLink API Server
//!
//! Serves the recruitment referral pages: key settings for stockists,
//! admin recruitment lists and leaderboards, and the public join flow.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p recruitlink-api
//! ```

use std::sync::Arc;

use recruitlink_api::{
    app::{build_router, AppState},
    config::Config,
    views::ViewEngine,
};
use recruitlink_shared::db::pool;
use recruitlink_shared::store::postgres::PgStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recruitlink_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "RecruitLink API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let db_config = pool::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
    };
    let db = pool::create_pool(&db_config).await?;
    pool::health_check(&db).await?;

    let store = Arc::new(PgStore::new(db));
    let views = ViewEngine::new()?;

    let state = AppState::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        views,
        config.clone(),
    );

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on http://{}", config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
