//! Remote Handlers - 远程控制入口

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::{Command, ConnectionContextPort};
use crate::infrastructure::http::dto::{
    ApiResponse, CommandRequest, ConnectionRequest, Empty, StateResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// Dispatch
// ============================================================================

/// 分发命令
///
/// 命令被拒绝（无效标识、未知动作）时同样返回成功，拒绝原因只记录在日志中
pub async fn dispatch_command(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CommandRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let Json(req) = payload?;
    let command = Command::from(req);

    state.router.dispatch(command);

    Ok(Json(ApiResponse::ok()))
}

// ============================================================================
// Connection
// ============================================================================

pub async fn report_connection(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ConnectionRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let Json(req) = payload?;
    state
        .connection
        .set_rich_client_attached(req.rich_client_attached);
    Ok(Json(ApiResponse::ok()))
}

// ============================================================================
// State
// ============================================================================

pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<ApiResponse<StateResponse>> {
    let playback = state.playback_state.borrow().clone();
    Json(ApiResponse::success(StateResponse {
        playback,
        selected_book_id: state.selection.selected(),
        rich_client_attached: state.connection.is_rich_client_attached(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::domain::remote::SeekDirection;
    use crate::infrastructure::adapters::PlaybackRequest;
    use crate::infrastructure::http::state::test_support::{read_json, TestApp};

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_dispatch_play_by_id() {
        let app = TestApp::new();
        let response = app
            .router()
            .oneshot(post(
                "/api/remote/dispatch",
                r#"{"type":"play_by_id","media_id":"content://test.books/book/42"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(app.engine.calls(), vec![PlaybackRequest::Play]);
    }

    #[tokio::test]
    async fn test_declined_command_still_succeeds() {
        let app = TestApp::new();
        let response = app
            .router()
            .oneshot(post(
                "/api/remote/dispatch",
                r#"{"type":"custom_action","name":"SHUFFLE"}"#,
            ))
            .await
            .unwrap();

        let body = read_json(response).await;
        assert_eq!(body["errno"], 0);
        assert!(app.engine.calls().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_command_is_bad_request() {
        let app = TestApp::new();
        let response = app
            .router()
            .oneshot(post("/api/remote/dispatch", r#"{"type":"shuffle"}"#))
            .await
            .unwrap();

        let body = read_json(response).await;
        assert_eq!(body["errno"], 400);
        assert_eq!(body["data"], Value::Null);
        assert!(app.engine.calls().is_empty());
    }

    #[tokio::test]
    async fn test_connection_report_changes_next_track_routing() {
        let app = TestApp::new();

        app.router()
            .oneshot(post("/api/remote/dispatch", r#"{"type":"next_track"}"#))
            .await
            .unwrap();
        app.router()
            .oneshot(post(
                "/api/remote/connection",
                r#"{"rich_client_attached":true}"#,
            ))
            .await
            .unwrap();
        app.router()
            .oneshot(post("/api/remote/dispatch", r#"{"type":"next_track"}"#))
            .await
            .unwrap();

        assert_eq!(
            app.engine.calls(),
            vec![
                PlaybackRequest::Seek(SeekDirection::Forward),
                PlaybackRequest::AdvanceTrack {
                    to_next: true,
                    reset_progress: false
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_state_reports_selection_and_connection() {
        let app = TestApp::new();
        app.router()
            .oneshot(post(
                "/api/remote/dispatch",
                r#"{"type":"play_by_id","media_id":"content://test.books/book/7"}"#,
            ))
            .await
            .unwrap();

        let response = app
            .router()
            .oneshot(
                Request::builder()
                    .uri("/api/remote/state")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = read_json(response).await;
        assert_eq!(body["data"]["selected_book_id"], 7);
        assert_eq!(body["data"]["rich_client_attached"], false);
        assert_eq!(body["data"]["playback"]["status"], "stopped");
    }
}
