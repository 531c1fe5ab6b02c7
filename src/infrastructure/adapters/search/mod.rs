//! Search Adapters
//!
//! - HintSearchInterpreter: 解析查询文本与提示
//! - LibrarySearchHandler: 在书库中匹配并启动播放

mod hint_interpreter;
mod library_search_handler;

pub use hint_interpreter::HintSearchInterpreter;
pub use library_search_handler::LibrarySearchHandler;
