//! Book Context - Value Objects

use serde::{Deserialize, Serialize};

/// 书籍唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 媒体标识的类别
///
/// 只有 `Book` 可以播放
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// 书库根节点（可浏览，不可播放）
    Root,
    /// 单本书
    Book,
    /// 无法识别
    Unrecognized,
}

impl MediaKind {
    pub fn is_playable(&self) -> bool {
        matches!(self, Self::Book)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Book => "book",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 媒体标识分类结果
///
/// `raw_value` 为 authority 之后的路径部分，例如 `book/42`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaIdClass {
    pub kind: MediaKind,
    pub raw_value: String,
}

impl MediaIdClass {
    pub fn new(kind: MediaKind, raw_value: impl Into<String>) -> Self {
        Self {
            kind,
            raw_value: raw_value.into(),
        }
    }

    pub fn unrecognized(raw_value: impl Into<String>) -> Self {
        Self::new(MediaKind::Unrecognized, raw_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_book_is_playable() {
        assert!(MediaKind::Book.is_playable());
        assert!(!MediaKind::Root.is_playable());
        assert!(!MediaKind::Unrecognized.is_playable());
    }

    #[test]
    fn test_book_id_serializes_as_number() {
        let json = serde_json::to_string(&BookId::new(42)).unwrap();
        assert_eq!(json, "42");
        let id: BookId = serde_json::from_str("7").unwrap();
        assert_eq!(id.value(), 7);
    }
}
