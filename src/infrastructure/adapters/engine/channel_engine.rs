//! Channel Playback Engine
//!
//! 将端口调用转换为 PlaybackRequest 并投递到有界队列，不阻塞调用方。
//! 队列满或已关闭时只记录日志。

use tokio::sync::mpsc;

use super::PlaybackRequest;
use crate::application::ports::PlaybackEnginePort;
use crate::domain::remote::SeekDirection;

/// 基于 mpsc 队列的播放引擎
pub struct ChannelPlaybackEngine {
    queue_sender: mpsc::Sender<PlaybackRequest>,
}

impl ChannelPlaybackEngine {
    pub fn new(queue_sender: mpsc::Sender<PlaybackRequest>) -> Self {
        Self { queue_sender }
    }

    fn enqueue(&self, request: PlaybackRequest) {
        if let Err(e) = self.queue_sender.try_send(request) {
            tracing::warn!(request = ?request, error = %e, "Failed to enqueue playback request");
        }
    }
}

impl PlaybackEnginePort for ChannelPlaybackEngine {
    fn play(&self) {
        self.enqueue(PlaybackRequest::Play);
    }

    fn pause(&self, allow_resume: bool) {
        self.enqueue(PlaybackRequest::Pause { allow_resume });
    }

    fn stop(&self) {
        self.enqueue(PlaybackRequest::Stop);
    }

    fn seek(&self, direction: SeekDirection) {
        self.enqueue(PlaybackRequest::Seek(direction));
    }

    fn advance_track(&self, to_next: bool, reset_progress: bool) {
        self.enqueue(PlaybackRequest::AdvanceTrack {
            to_next,
            reset_progress,
        });
    }
}
