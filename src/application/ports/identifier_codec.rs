//! Identifier Codec Port - 媒体标识编解码
//!
//! 将书籍 ID 编码为对外暴露的不透明标识，并反向解析

use thiserror::Error;

use crate::domain::book::{BookId, MediaIdClass};

/// 标识解析错误
#[derive(Debug, Error)]
pub enum IdentifierError {
    #[error("Not a book identifier: {0}")]
    NotABook(String),

    #[error("Malformed book id '{value}': {reason}")]
    MalformedId { value: String, reason: String },
}

/// Identifier Codec Port
pub trait IdentifierCodecPort: Send + Sync {
    /// 分类媒体标识
    fn classify(&self, media_id: &str) -> MediaIdClass;

    /// 提取书籍 ID（仅当 kind == Book 时有效）
    fn extract_book_id(&self, media_id: &str) -> Result<BookId, IdentifierError>;

    /// 编码书籍 ID
    fn book_media_id(&self, id: BookId) -> String;
}
