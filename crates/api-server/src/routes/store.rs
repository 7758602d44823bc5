//! Store lifecycle endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use taskboard_core::store::Fixture;

use super::{store_error, ApiError};
use crate::state::AppState;

/// GET /api/store - every board, list and task
async fn snapshot(State(state): State<AppState>) -> Json<Fixture> {
    Json(state.store().snapshot().await)
}

/// POST /api/store/reset - drop all changes and reload the fixture
async fn reset(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.store().reset().await.map_err(store_error)?;
    info!("store reset requested");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/store/save - write the current state back to the fixture
async fn save(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.store().save().await.map_err(store_error)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/store", get(snapshot))
        .route("/api/store/reset", post(reset))
        .route("/api/store/save", post(save))
}
