//! Playback Engine Port - 播放引擎抽象
//!
//! 定义播放传输操作，具体实现在 infrastructure/adapters 层。
//! 引擎自行负责内部串行化，调用方不等待实际的音频动作完成。

use crate::domain::remote::SeekDirection;

/// Playback Engine Port
pub trait PlaybackEnginePort: Send + Sync {
    /// 开始/恢复播放当前选中的书
    fn play(&self);

    /// 暂停；allow_resume 为 false 时等同于停止
    fn pause(&self, allow_resume: bool);

    fn stop(&self);

    /// 章节内快进/快退
    fn seek(&self, direction: SeekDirection);

    /// 切换章节
    ///
    /// - `to_next`: true 为下一章，false 为上一章
    /// - `reset_progress`: 是否重置章节内进度
    fn advance_track(&self, to_next: bool, reset_progress: bool);
}
