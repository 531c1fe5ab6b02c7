//! Hint Search Interpreter
//!
//! 提示键：`focus` / `artist` / `album` / `title` / `playlist`，
//! 平台前缀 `android.intent.extra.` 会被去掉。
//! focus 取最后一个 `/` 之后的部分匹配，因此 `vnd.android.cursor.item/artist` 也能识别。

use crate::application::ports::SearchInterpreterPort;
use crate::domain::search::{normalize, MediaFocus, SearchHints, SearchSpec};

const PLATFORM_HINT_PREFIX: &str = "android.intent.extra.";

/// 基于提示的搜索解析器
#[derive(Debug, Default, Clone)]
pub struct HintSearchInterpreter;

impl HintSearchInterpreter {
    pub fn new() -> Self {
        Self
    }

    fn hint<'a>(hints: &'a SearchHints, key: &str) -> Option<&'a str> {
        hints.iter().find_map(|(k, v)| {
            let k = k.as_str();
            let k = k.strip_prefix(PLATFORM_HINT_PREFIX).unwrap_or(k);
            k.eq_ignore_ascii_case(key).then_some(v.as_str())
        })
    }

    fn parse_focus(value: &str) -> MediaFocus {
        let tail = value.rsplit('/').next().unwrap_or(value).trim();
        match tail.to_ascii_lowercase().as_str() {
            "artist" => MediaFocus::Artist,
            "album" => MediaFocus::Album,
            "audio" | "title" => MediaFocus::Title,
            "playlist" => MediaFocus::Playlist,
            _ => MediaFocus::Unstructured,
        }
    }
}

impl SearchInterpreterPort for HintSearchInterpreter {
    fn interpret(&self, query: Option<&str>, hints: &SearchHints) -> SearchSpec {
        let focus = Self::hint(hints, "focus")
            .map(Self::parse_focus)
            .unwrap_or_default();

        let spec = SearchSpec {
            focus,
            artist: normalize(Self::hint(hints, "artist")),
            album: normalize(Self::hint(hints, "album")),
            title: normalize(Self::hint(hints, "title")),
            playlist: normalize(Self::hint(hints, "playlist")),
            ..SearchSpec::unstructured(query)
        };

        tracing::debug!(spec = ?spec, "Search interpreted");
        spec
    }
}
