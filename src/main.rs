use axum::Router;
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

mod config;
mod data;
mod db;
mod features;
mod handlers;
mod schema;
mod utils;

#[cfg(test)]
mod test_support;

use config::Config;
use db::DbPool;

fn app(pool: DbPool) -> Router {
    // API routes
    let api_router = Router::new().nest(
        "/study-sessions",
        handlers::study_sessions::study_sessions_router(pool),
    );

    Router::new()
        .nest("/api", api_router)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(features::study_sessions::panic_response))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Database configuration
    let pool = db::build_pool(&config.database_url, config.pool_size)
        .map_err(|e| anyhow::anyhow!("Failed to create DB pool for {}: {}", config.database_url, e))?;
    {
        let mut conn = pool.get()?;
        db::init_schema(&mut conn)?;
    }

    let listener = TcpListener::bind(config.bind_addr).await.map_err(|e| {
        log::error!("Failed to bind to {}: {}", config.bind_addr, e);
        e
    })?;

    log::info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app(pool)).await?;
    Ok(())
}
