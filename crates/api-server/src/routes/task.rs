//! Task API endpoints
//!
//! RESTful API for task CRUD plus completion toggling and moving between lists.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use taskboard_core::list::ListId;
use taskboard_core::task::{NewTask, Task, TaskId, TaskPatch, TaskRepository};

use super::{not_found, store_error, ApiError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskRequest {
    pub list_id: ListId,
}

/// GET /api/tasks
async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.store().list_tasks().await)
}

/// POST /api/tasks
async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = state.store().create_task(req).await.map_err(store_error)?;

    info!(task_id = task.id, list_id = task.list_id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks/{id}
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<Json<Task>, ApiError> {
    state
        .store()
        .get_task(id)
        .await
        .map(Json)
        .ok_or_else(|| not_found("Task", id))
}

/// PATCH /api/tasks/{id}
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, ApiError> {
    state
        .store()
        .update_task(id, patch)
        .await
        .map_err(store_error)?
        .map(Json)
        .ok_or_else(|| not_found("Task", id))
}

/// POST /api/tasks/{id}/toggle
async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<Json<Task>, ApiError> {
    state
        .store()
        .toggle_completion(id)
        .await
        .map(Json)
        .ok_or_else(|| not_found("Task", id))
}

/// POST /api/tasks/{id}/move
async fn move_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
    Json(req): Json<MoveTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    let task = state
        .store()
        .move_to_list(id, req.list_id)
        .await
        .map_err(store_error)?
        .ok_or_else(|| not_found("Task", id))?;

    info!(task_id = id, list_id = req.list_id, "task moved");
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<StatusCode, ApiError> {
    if state.store().delete_task(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Task", id))
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task).patch(update_task).delete(delete_task),
        )
        .route("/api/tasks/{id}/toggle", post(toggle_task))
        .route("/api/tasks/{id}/move", post(move_task))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::{
        list,
        test_support::{seeded_state, send},
    };

    #[tokio::test]
    async fn create_task_defaults_to_unfinished() {
        let app = super::router().with_state(seeded_state().await);

        let (status, body) = send(
            &app,
            "POST",
            "/api/tasks",
            Some(json!({ "name": "Call electrician", "listId": 2 })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["isFinished"], false);
        assert_eq!(body["description"], "");
        assert_eq!(body["listId"], 2);
    }

    #[tokio::test]
    async fn toggle_twice_restores_state() {
        let app = super::router().with_state(seeded_state().await);
        let (_, original) = send(&app, "GET", "/api/tasks/1", None).await;

        let (status, first) = send(&app, "POST", "/api/tasks/1/toggle", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_ne!(first["isFinished"], original["isFinished"]);

        let (_, second) = send(&app, "POST", "/api/tasks/1/toggle", None).await;
        assert_eq!(second, original);
    }

    #[tokio::test]
    async fn patch_finished_leaves_other_fields() {
        let app = super::router().with_state(seeded_state().await);
        let (_, original) = send(&app, "GET", "/api/tasks/5", None).await;

        let (status, body) = send(
            &app,
            "PATCH",
            "/api/tasks/5",
            Some(json!({ "isFinished": true })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isFinished"], true);
        assert_eq!(body["name"], original["name"]);
        assert_eq!(body["description"], original["description"]);
        assert_eq!(body["listId"], original["listId"]);
    }

    #[tokio::test]
    async fn move_task_between_lists() {
        let app = super::router()
            .merge(list::router())
            .with_state(seeded_state().await);

        let (status, moved) = send(
            &app,
            "POST",
            "/api/tasks/1/move",
            Some(json!({ "listId": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(moved["id"], 1);
        assert_eq!(moved["listId"], 3);

        let (_, old_list) = send(&app, "GET", "/api/lists/1/tasks", None).await;
        assert!(old_list.as_array().unwrap().iter().all(|t| t["id"] != 1));
        let (_, new_list) = send(&app, "GET", "/api/lists/3/tasks", None).await;
        assert!(new_list.as_array().unwrap().iter().any(|t| t["id"] == 1));
    }

    #[tokio::test]
    async fn move_to_unknown_list_is_rejected() {
        let app = super::router().with_state(seeded_state().await);

        let (status, _) = send(
            &app,
            "POST",
            "/api/tasks/1/move",
            Some(json!({ "listId": 999 })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(
            &app,
            "POST",
            "/api/tasks/999/move",
            Some(json!({ "listId": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_task_twice() {
        let app = super::router().with_state(seeded_state().await);

        let (status, _) = send(&app, "DELETE", "/api/tasks/2", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "DELETE", "/api/tasks/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
