//! Remote Context - Custom Actions
//!
//! 车机端通过自定义动作名发送导航指令，名称精确匹配（区分大小写）

/// 已识别的自定义动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomAction {
    Next,
    Previous,
    FastForward,
    Rewind,
}

impl CustomAction {
    pub const NEXT: &'static str = "ANDROID_AUTO_ACTION_NEXT";
    pub const PREVIOUS: &'static str = "ANDROID_AUTO_ACTION_PREVIOUS";
    pub const FAST_FORWARD: &'static str = "ANDROID_AUTO_ACTION_FAST_FORWARD";
    pub const REWIND: &'static str = "ANDROID_AUTO_ACTION_REWIND";

    pub const ALL: [CustomAction; 4] = [
        CustomAction::Next,
        CustomAction::Previous,
        CustomAction::FastForward,
        CustomAction::Rewind,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            Self::NEXT => Some(Self::Next),
            Self::PREVIOUS => Some(Self::Previous),
            Self::FAST_FORWARD => Some(Self::FastForward),
            Self::REWIND => Some(Self::Rewind),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Next => Self::NEXT,
            Self::Previous => Self::PREVIOUS,
            Self::FastForward => Self::FAST_FORWARD,
            Self::Rewind => Self::REWIND,
        }
    }
}

impl std::fmt::Display for CustomAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
