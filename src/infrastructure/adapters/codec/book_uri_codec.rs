//! Book URI Codec
//!
//! 标识格式：
//! - `content://{authority}`        书库根节点
//! - `content://{authority}/book`   书库根节点
//! - `content://{authority}/book/{id}` 单本书，id 为十进制数字

use crate::application::ports::{IdentifierCodecPort, IdentifierError};
use crate::domain::book::{BookId, MediaIdClass, MediaKind};

const SCHEME_PREFIX: &str = "content://";
const BOOK_SEGMENT: &str = "book";

/// 默认 authority
pub const DEFAULT_AUTHORITY: &str = "bookremote";

/// content:// 标识编解码器
#[derive(Debug, Clone)]
pub struct BookUriCodec {
    authority: String,
}

impl BookUriCodec {
    pub fn new(authority: impl Into<String>) -> Self {
        Self {
            authority: authority.into(),
        }
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// 返回 authority 之后的路径（不含首尾 `/`），authority 不匹配时返回 None
    fn path_of<'a>(&self, media_id: &'a str) -> Option<&'a str> {
        let rest = media_id.strip_prefix(SCHEME_PREFIX)?;
        let rest = rest.strip_prefix(self.authority.as_str())?;
        if rest.is_empty() {
            return Some("");
        }
        let path = rest.strip_prefix('/')?;
        Some(path.trim_end_matches('/'))
    }
}

impl Default for BookUriCodec {
    fn default() -> Self {
        Self::new(DEFAULT_AUTHORITY)
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

impl IdentifierCodecPort for BookUriCodec {
    fn classify(&self, media_id: &str) -> MediaIdClass {
        let Some(path) = self.path_of(media_id) else {
            return MediaIdClass::unrecognized(media_id);
        };

        let mut segments = path.split('/');
        let kind = match (segments.next(), segments.next(), segments.next()) {
            (Some(""), None, None) => MediaKind::Root,
            (Some(BOOK_SEGMENT), None, None) => MediaKind::Root,
            (Some(BOOK_SEGMENT), Some(id), None) if is_digits(id) => MediaKind::Book,
            _ => MediaKind::Unrecognized,
        };

        MediaIdClass::new(kind, path)
    }

    fn extract_book_id(&self, media_id: &str) -> Result<BookId, IdentifierError> {
        let class = self.classify(media_id);
        if class.kind != MediaKind::Book {
            return Err(IdentifierError::NotABook(media_id.to_string()));
        }

        let raw = class
            .raw_value
            .rsplit('/')
            .next()
            .unwrap_or_default();

        raw.parse::<u64>()
            .map(BookId::new)
            .map_err(|e| IdentifierError::MalformedId {
                value: raw.to_string(),
                reason: e.to_string(),
            })
    }

    fn book_media_id(&self, id: BookId) -> String {
        format!("{}{}/{}/{}", SCHEME_PREFIX, self.authority, BOOK_SEGMENT, id)
    }
}
