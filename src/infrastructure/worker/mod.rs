//! Worker Layer - 后台播放处理

mod playback_worker;

pub use playback_worker::{PlaybackSnapshot, PlaybackStatus, PlaybackWorker, PlaybackWorkerConfig};
