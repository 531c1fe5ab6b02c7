//! Search Ports - 搜索解析与执行

use crate::domain::search::{SearchHints, SearchSpec};

/// Search Interpreter Port
///
/// 将自由文本和提示解析为结构化搜索条件
pub trait SearchInterpreterPort: Send + Sync {
    fn interpret(&self, query: Option<&str>, hints: &SearchHints) -> SearchSpec;
}

/// Search Handler Port
///
/// 执行搜索并启动播放。对调用方而言是 fire-and-forget
pub trait SearchHandlerPort: Send + Sync {
    fn handle(&self, spec: SearchSpec);
}
