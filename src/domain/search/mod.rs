//! Search Context - 语音/文本搜索播放
//!
//! 结构化搜索条件，由 SearchInterpreter 生成，交给 SearchHandler 执行

mod value_objects;

pub use value_objects::{MediaFocus, SearchHints, SearchSpec};
pub(crate) use value_objects::normalize;
