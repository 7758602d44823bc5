//! List API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::info;

use taskboard_core::list::{List, ListId, ListPatch, ListRepository, NewList};
use taskboard_core::task::{Task, TaskRepository};

use super::{not_found, store_error, ApiError};
use crate::state::AppState;

/// GET /api/lists
async fn list_lists(State(state): State<AppState>) -> Json<Vec<List>> {
    Json(state.store().list_lists().await)
}

/// POST /api/lists
async fn create_list(
    State(state): State<AppState>,
    Json(req): Json<NewList>,
) -> Result<(StatusCode, Json<List>), ApiError> {
    let list = state.store().create_list(req).await.map_err(store_error)?;

    info!(list_id = list.id, board_id = list.board_id, "list created");
    Ok((StatusCode::CREATED, Json(list)))
}

/// GET /api/lists/{id}
async fn get_list(
    State(state): State<AppState>,
    Path(id): Path<ListId>,
) -> Result<Json<List>, ApiError> {
    state
        .store()
        .get_list(id)
        .await
        .map(Json)
        .ok_or_else(|| not_found("List", id))
}

/// PATCH /api/lists/{id}
async fn update_list(
    State(state): State<AppState>,
    Path(id): Path<ListId>,
    Json(patch): Json<ListPatch>,
) -> Result<Json<List>, ApiError> {
    state
        .store()
        .update_list(id, patch)
        .await
        .map_err(store_error)?
        .map(Json)
        .ok_or_else(|| not_found("List", id))
}

/// DELETE /api/lists/{id} - also removes the list's tasks
async fn delete_list(
    State(state): State<AppState>,
    Path(id): Path<ListId>,
) -> Result<StatusCode, ApiError> {
    if state.store().delete_list(id).await {
        info!(list_id = id, "list deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("List", id))
    }
}

/// GET /api/lists/{id}/tasks
async fn list_list_tasks(
    State(state): State<AppState>,
    Path(id): Path<ListId>,
) -> Result<Json<Vec<Task>>, ApiError> {
    if state.store().get_list(id).await.is_none() {
        return Err(not_found("List", id));
    }
    Ok(Json(state.store().tasks_by_list(id).await))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/lists", get(list_lists).post(create_list))
        .route(
            "/api/lists/{id}",
            get(get_list).patch(update_list).delete(delete_list),
        )
        .route("/api/lists/{id}/tasks", get(list_list_tasks))
}
