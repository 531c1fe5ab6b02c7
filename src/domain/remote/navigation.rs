//! Remote Context - Navigation Decisions
//!
//! 纯函数：根据客户端能力决定 Next/Previous 的实际动作。
//! 富客户端能展示章节列表，走章节切换；基础遥控器降级为章节内快进/快退。

use serde::{Deserialize, Serialize};

/// 客户端能力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCapability {
    /// 支持章节级导航（如车机）
    Rich,
    /// 仅有传输按钮
    Basic,
}

impl ClientCapability {
    pub fn from_rich_attached(rich_client_attached: bool) -> Self {
        if rich_client_attached {
            Self::Rich
        } else {
            Self::Basic
        }
    }
}

/// Seek 方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeekDirection {
    Forward,
    Backward,
}

/// 导航决策结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    AdvanceTrack { to_next: bool, reset_progress: bool },
    Seek(SeekDirection),
}

/// Next 的决策
pub fn next_track_action(capability: ClientCapability) -> NavigationAction {
    match capability {
        ClientCapability::Rich => NavigationAction::AdvanceTrack {
            to_next: true,
            reset_progress: false,
        },
        ClientCapability::Basic => NavigationAction::Seek(SeekDirection::Forward),
    }
}

/// Previous 的决策
///
/// 富客户端路径上 reset_progress 恒为 true：
/// "上一曲" 表示重播当前章节或回到前一章节，由播放引擎决定
pub fn previous_track_action(capability: ClientCapability) -> NavigationAction {
    match capability {
        ClientCapability::Rich => NavigationAction::AdvanceTrack {
            to_next: false,
            reset_progress: true,
        },
        ClientCapability::Basic => NavigationAction::Seek(SeekDirection::Backward),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_from_flag() {
        assert_eq!(ClientCapability::from_rich_attached(true), ClientCapability::Rich);
        assert_eq!(ClientCapability::from_rich_attached(false), ClientCapability::Basic);
    }

    #[test]
    fn test_next_on_rich_client_changes_track() {
        assert_eq!(
            next_track_action(ClientCapability::Rich),
            NavigationAction::AdvanceTrack {
                to_next: true,
                reset_progress: false
            }
        );
    }

    #[test]
    fn test_next_on_basic_client_seeks_forward() {
        assert_eq!(
            next_track_action(ClientCapability::Basic),
            NavigationAction::Seek(SeekDirection::Forward)
        );
    }

    #[test]
    fn test_previous_on_rich_client_always_resets() {
        assert_eq!(
            previous_track_action(ClientCapability::Rich),
            NavigationAction::AdvanceTrack {
                to_next: false,
                reset_progress: true
            }
        );
    }

    #[test]
    fn test_previous_on_basic_client_seeks_backward() {
        assert_eq!(
            previous_track_action(ClientCapability::Basic),
            NavigationAction::Seek(SeekDirection::Backward)
        );
    }
}
