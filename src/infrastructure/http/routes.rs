//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                 GET   健康检查
//! - /api/remote/dispatch      POST  分发远程控制命令
//! - /api/remote/connection    POST  上报富客户端连接状态
//! - /api/remote/state         GET   播放状态快照
//! - /api/library              GET   列出书库（含媒体标识）
//! - /api/library/:book_id     GET   获取单本书

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/remote", remote_routes())
        .route("/library", get(handlers::list_books))
        .route("/library/:book_id", get(handlers::get_book))
}

/// Remote 路由
fn remote_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dispatch", post(handlers::dispatch_command))
        .route("/connection", post(handlers::report_connection))
        .route("/state", get(handlers::get_state))
}
