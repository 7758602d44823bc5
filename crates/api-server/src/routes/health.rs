//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use taskboard_core::id::IdPolicy;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: String,
    version: String,
    id_policy: IdPolicy,
    validate_references: bool,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let config = state.store().config();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        id_policy: config.id_policy,
        validate_references: config.validate_references,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
