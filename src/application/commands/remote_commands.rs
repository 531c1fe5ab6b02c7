//! Remote Commands - 远程控制命令
//!
//! 每个入站事件构造一次，不可变

use crate::domain::search::SearchHints;

/// 远程控制命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 按不透明媒体标识播放
    PlayById(String),
    /// 按搜索文本播放
    PlayFromSearch {
        query: Option<String>,
        hints: SearchHints,
    },
    /// 章节内快进
    SkipForward,
    /// 章节内快退
    SkipBackward,
    NextTrack,
    PreviousTrack,
    Stop,
    Pause,
    Play,
    CustomAction(String),
}

impl Command {
    /// 命令名称（用于日志）
    pub fn name(&self) -> &'static str {
        match self {
            Self::PlayById(_) => "play_by_id",
            Self::PlayFromSearch { .. } => "play_from_search",
            Self::SkipForward => "skip_forward",
            Self::SkipBackward => "skip_backward",
            Self::NextTrack => "next_track",
            Self::PreviousTrack => "previous_track",
            Self::Stop => "stop",
            Self::Pause => "pause",
            Self::Play => "play",
            Self::CustomAction(_) => "custom_action",
        }
    }
}
