//! 应用层错误定义
//!
//! 远程命令分发的错误分类。全部属于用户输入类错误：
//! 记录日志后放弃执行，不会越过 dispatch 边界。

use thiserror::Error;

use crate::domain::book::MediaKind;

/// 分发错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// 标识属于书籍类别，但无法解析出 ID
    #[error("Invalid media id {media_id}: {reason}")]
    InvalidIdentifier { media_id: String, reason: String },

    /// 标识类别不可播放
    #[error("Invalid media id {media_id}: unrecognized kind '{kind}'")]
    UnrecognizedIdentifierKind { media_id: String, kind: MediaKind },

    /// 自定义动作名称不在动作表中
    #[error("Unrecognized custom action: {0}")]
    UnrecognizedCustomAction(String),
}

impl DispatchError {
    pub fn invalid_identifier(media_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            media_id: media_id.into(),
            reason: reason.into(),
        }
    }

    pub fn unrecognized_kind(media_id: impl Into<String>, kind: MediaKind) -> Self {
        Self::UnrecognizedIdentifierKind {
            media_id: media_id.into(),
            kind,
        }
    }

    /// 标识类错误（用于区分日志级别）
    pub fn is_identifier_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidIdentifier { .. } | Self::UnrecognizedIdentifierKind { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_error_message_names_the_kind() {
        let err = DispatchError::unrecognized_kind("content://x/chapter/7", MediaKind::Unrecognized);
        assert_eq!(
            err.to_string(),
            "Invalid media id content://x/chapter/7: unrecognized kind 'unrecognized'"
        );
        assert!(err.is_identifier_error());
    }

    #[test]
    fn test_custom_action_error_is_not_identifier_error() {
        let err = DispatchError::UnrecognizedCustomAction("SHUFFLE".into());
        assert!(!err.is_identifier_error());
    }
}
