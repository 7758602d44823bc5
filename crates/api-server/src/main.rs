//! API Server for the task board
//!
//! Serves the board/list/task store as a JSON REST API.

mod config;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskboard_core::store::{EmbeddedFixture, FixtureSource, JsonFileFixture, MemoryStore};

use crate::config::ServerConfig;
use crate::state::AppState;

fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::board::router())
        .merge(routes::list::router())
        .merge(routes::task::router())
        .merge(routes::store::router())
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "taskboard_api=debug,taskboard_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(?config, "Loaded configuration");

    let source: Arc<dyn FixtureSource> = match &config.fixture_path {
        Some(path) => Arc::new(JsonFileFixture::new(path)),
        None => Arc::new(EmbeddedFixture),
    };
    let store = MemoryStore::new(source, config.store)
        .await
        .context("Failed to initialize store")?;

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    tracing::info!("REST API listening on {}", config.addr);

    axum::serve(listener, app(AppState::new(store))).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{seeded_state, send};

    #[tokio::test]
    async fn app_serves_every_router() {
        let app = super::app(seeded_state().await);

        for uri in ["/health", "/api/boards", "/api/lists", "/api/tasks", "/api/store"] {
            let (status, _) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::OK, "GET {}", uri);
        }
    }
}
