//! Search Context - Value Objects

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 搜索提示（键值对）
pub type SearchHints = BTreeMap<String, String>;

/// 搜索焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaFocus {
    /// 无结构的自由文本
    #[default]
    Unstructured,
    Artist,
    Album,
    Title,
    Playlist,
}

/// 结构化搜索条件
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchSpec {
    pub query: Option<String>,
    pub focus: MediaFocus,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub title: Option<String>,
    pub playlist: Option<String>,
}

impl SearchSpec {
    /// 自由文本搜索
    pub fn unstructured(query: Option<&str>) -> Self {
        Self {
            query: normalize(query),
            ..Self::default()
        }
    }

    /// 没有任何可用条件（"随便放点什么"）
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.title.is_none()
            && self.playlist.is_none()
    }
}

/// 去掉首尾空白，空字符串视为缺失
pub(crate) fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_is_empty() {
        assert!(SearchSpec::unstructured(Some("   ")).is_empty());
        assert!(SearchSpec::unstructured(None).is_empty());
    }

    #[test]
    fn test_query_is_trimmed() {
        let spec = SearchSpec::unstructured(Some("  dune "));
        assert_eq!(spec.query.as_deref(), Some("dune"));
        assert_eq!(spec.focus, MediaFocus::Unstructured);
    }
}
