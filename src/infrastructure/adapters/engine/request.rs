//! Playback Request - 播放引擎调用的消息形式

use crate::domain::remote::SeekDirection;

/// 一次播放引擎调用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackRequest {
    Play,
    Pause { allow_resume: bool },
    Stop,
    Seek(SeekDirection),
    AdvanceTrack { to_next: bool, reset_progress: bool },
}
