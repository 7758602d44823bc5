//! Board API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use taskboard_core::board::{
    Board, BoardId, BoardPatch, BoardRepository, BoardSummary, NewBoard, DEFAULT_THUMBNAIL,
};
use taskboard_core::list::{List, ListRepository};

use super::{not_found, store_error, ApiError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_photo: Option<String>,
}

impl From<CreateBoardRequest> for NewBoard {
    fn from(req: CreateBoardRequest) -> Self {
        // blank or missing thumbnails get the placeholder image
        let thumbnail = req
            .thumbnail_photo
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_THUMBNAIL.to_string());

        NewBoard::new(req.name, thumbnail).with_description(req.description.unwrap_or_default())
    }
}

/// GET /api/boards
async fn list_boards(State(state): State<AppState>) -> Json<Vec<Board>> {
    Json(state.store().list_boards().await)
}

/// POST /api/boards
async fn create_board(
    State(state): State<AppState>,
    Json(req): Json<CreateBoardRequest>,
) -> Result<(StatusCode, Json<Board>), ApiError> {
    let board = state
        .store()
        .create_board(req.into())
        .await
        .map_err(store_error)?;

    info!(board_id = board.id, "board created");
    Ok((StatusCode::CREATED, Json(board)))
}

/// GET /api/boards/{id}
async fn get_board(
    State(state): State<AppState>,
    Path(id): Path<BoardId>,
) -> Result<Json<Board>, ApiError> {
    state
        .store()
        .get_board(id)
        .await
        .map(Json)
        .ok_or_else(|| not_found("Board", id))
}

/// PATCH /api/boards/{id}
async fn update_board(
    State(state): State<AppState>,
    Path(id): Path<BoardId>,
    Json(patch): Json<BoardPatch>,
) -> Result<Json<Board>, ApiError> {
    state
        .store()
        .update_board(id, patch)
        .await
        .map_err(store_error)?
        .map(Json)
        .ok_or_else(|| not_found("Board", id))
}

/// DELETE /api/boards/{id} - also removes the board's lists and tasks
async fn delete_board(
    State(state): State<AppState>,
    Path(id): Path<BoardId>,
) -> Result<StatusCode, ApiError> {
    if state.store().delete_board(id).await {
        info!(board_id = id, "board deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Board", id))
    }
}

/// GET /api/boards/{id}/lists
async fn list_board_lists(
    State(state): State<AppState>,
    Path(id): Path<BoardId>,
) -> Result<Json<Vec<List>>, ApiError> {
    if state.store().get_board(id).await.is_none() {
        return Err(not_found("Board", id));
    }
    Ok(Json(state.store().lists_by_board(id).await))
}

/// GET /api/boards/{id}/summary
async fn board_summary(
    State(state): State<AppState>,
    Path(id): Path<BoardId>,
) -> Result<Json<BoardSummary>, ApiError> {
    state
        .store()
        .board_summary(id)
        .await
        .map(Json)
        .ok_or_else(|| not_found("Board", id))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/boards", get(list_boards).post(create_board))
        .route(
            "/api/boards/{id}",
            get(get_board).patch(update_board).delete(delete_board),
        )
        .route("/api/boards/{id}/lists", get(list_board_lists))
        .route("/api/boards/{id}/summary", get(board_summary))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::{
        list,
        test_support::{seeded_state, send},
    };
    use taskboard_core::board::DEFAULT_THUMBNAIL;

    #[tokio::test]
    async fn create_board_fills_in_thumbnail() {
        let app = super::router().with_state(seeded_state().await);

        let (status, body) = send(
            &app,
            "POST",
            "/api/boards",
            Some(json!({ "name": "  Garden ", "thumbnailPhoto": "  " })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 4);
        assert_eq!(body["name"], "Garden");
        assert_eq!(body["description"], "");
        assert_eq!(body["thumbnailPhoto"], DEFAULT_THUMBNAIL);
    }

    #[tokio::test]
    async fn create_board_requires_name() {
        let app = super::router().with_state(seeded_state().await);

        let (status, body) =
            send(&app, "POST", "/api/boards", Some(json!({ "name": "   " }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn patch_board_merges_fields() {
        let app = super::router().with_state(seeded_state().await);
        let (_, before) = send(&app, "GET", "/api/boards/1", None).await;

        let (status, body) = send(
            &app,
            "PATCH",
            "/api/boards/1",
            Some(json!({ "description": "New scope" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["description"], "New scope");
        assert_eq!(body["name"], before["name"]);
        assert_eq!(body["thumbnailPhoto"], before["thumbnailPhoto"]);
    }

    #[tokio::test]
    async fn missing_board_is_404() {
        let app = super::router().with_state(seeded_state().await);

        let (status, _) = send(&app, "GET", "/api/boards/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            "PATCH",
            "/api/boards/999",
            Some(json!({ "name": "x" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "DELETE", "/api/boards/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_board_removes_its_lists() {
        let app = super::router()
            .merge(list::router())
            .with_state(seeded_state().await);

        let (_, lists) = send(&app, "GET", "/api/boards/1/lists", None).await;
        let list_ids: Vec<u64> = lists
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l["id"].as_u64().unwrap())
            .collect();
        assert!(!list_ids.is_empty());

        let (status, _) = send(&app, "DELETE", "/api/boards/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        for id in list_ids {
            let (status, _) = send(&app, "GET", &format!("/api/lists/{}", id), None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn summary_counts_tasks() {
        let app = super::router().with_state(seeded_state().await);

        let (status, body) = send(&app, "GET", "/api/boards/1/summary", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["board"]["id"], 1);
        assert_eq!(body["listCount"], 3);
        assert_eq!(body["taskCount"], 4);
        assert_eq!(body["finishedCount"], 1);
    }
}
