//! Recording Playback Engine - 用于测试的播放引擎
//!
//! 按调用顺序记录每一次请求，不产生实际播放

use std::sync::Mutex;

use super::PlaybackRequest;
use crate::application::ports::PlaybackEnginePort;
use crate::domain::remote::SeekDirection;

/// Recording Playback Engine
#[derive(Default)]
pub struct RecordingPlaybackEngine {
    calls: Mutex<Vec<PlaybackRequest>>,
}

impl RecordingPlaybackEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// 到目前为止的所有调用
    pub fn calls(&self) -> Vec<PlaybackRequest> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn clear(&self) {
        match self.calls.lock() {
            Ok(mut calls) => calls.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    fn record(&self, request: PlaybackRequest) {
        tracing::debug!(request = ?request, "RecordingPlaybackEngine: recorded");
        match self.calls.lock() {
            Ok(mut calls) => calls.push(request),
            Err(poisoned) => poisoned.into_inner().push(request),
        }
    }
}

impl PlaybackEnginePort for RecordingPlaybackEngine {
    fn play(&self) {
        self.record(PlaybackRequest::Play);
    }

    fn pause(&self, allow_resume: bool) {
        self.record(PlaybackRequest::Pause { allow_resume });
    }

    fn stop(&self) {
        self.record(PlaybackRequest::Stop);
    }

    fn seek(&self, direction: SeekDirection) {
        self.record(PlaybackRequest::Seek(direction));
    }

    fn advance_track(&self, to_next: bool, reset_progress: bool) {
        self.record(PlaybackRequest::AdvanceTrack {
            to_next,
            reset_progress,
        });
    }
}
