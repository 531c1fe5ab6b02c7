//! Book Library Port - 书库只读视图

use serde::{Deserialize, Serialize};

use crate::domain::book::BookId;

/// 书籍记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: BookId,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    /// 章节数，未知时为 None
    #[serde(default)]
    pub chapter_count: Option<u32>,
}

impl BookRecord {
    pub fn new(id: BookId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: None,
            chapter_count: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_chapters(mut self, chapter_count: u32) -> Self {
        self.chapter_count = Some(chapter_count);
        self
    }
}

/// Book Library Port
pub trait BookLibraryPort: Send + Sync {
    /// 按 ID 升序列出所有书
    fn list(&self) -> Vec<BookRecord>;

    fn get(&self, id: BookId) -> Option<BookRecord>;

    /// 插入或替换
    fn upsert(&self, book: BookRecord);
}
