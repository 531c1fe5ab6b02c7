//! Book Context - 有声书标识限界上下文
//!
//! 职责:
//! - 书籍 ID 值对象
//! - 媒体标识分类结果

mod value_objects;

pub use value_objects::{BookId, MediaIdClass, MediaKind};
