//! Playback Engine Adapters
//!
//! - ChannelPlaybackEngine: 投递到 PlaybackWorker 的队列
//! - RecordingPlaybackEngine: 按顺序记录调用，用于测试与诊断

mod channel_engine;
mod recording_engine;
mod request;

pub use channel_engine::ChannelPlaybackEngine;
pub use recording_engine::RecordingPlaybackEngine;
pub use request::PlaybackRequest;
