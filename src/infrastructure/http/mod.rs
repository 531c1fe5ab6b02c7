//! HTTP Layer - 远程控制传输适配器
//!
//! 把 HTTP 请求转换为 Command 后交给 CommandRouter

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
