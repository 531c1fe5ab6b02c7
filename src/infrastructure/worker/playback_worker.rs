//! Playback Worker - Background Playback Request Processor
//!
//! 按到达顺序消费 PlaybackRequest，维护传输状态并通过 watch 通道发布。
//! 不做音频解码，只追踪 状态/书/章节/进度。

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

use crate::application::ports::{BookLibraryPort, SelectionStorePort};
use crate::domain::book::BookId;
use crate::domain::remote::SeekDirection;
use crate::infrastructure::adapters::PlaybackRequest;

/// Worker 配置
#[derive(Debug, Clone)]
pub struct PlaybackWorkerConfig {
    /// 快进/快退步长（毫秒）
    pub seek_step_ms: u64,
    /// "上一章" 时超过该进度则重播当前章节（毫秒）
    pub restart_threshold_ms: u64,
}

impl Default for PlaybackWorkerConfig {
    fn default() -> Self {
        Self {
            seek_step_ms: 20_000,
            restart_threshold_ms: 2_000,
        }
    }
}

/// 传输状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// 播放状态快照
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PlaybackSnapshot {
    pub status: PlaybackStatus,
    pub book_id: Option<BookId>,
    pub track_index: u32,
    pub position_ms: u64,
}

/// 播放 Worker
pub struct PlaybackWorker {
    config: PlaybackWorkerConfig,
    queue_receiver: mpsc::Receiver<PlaybackRequest>,
    selection: Arc<dyn SelectionStorePort>,
    library: Arc<dyn BookLibraryPort>,
    state_sender: watch::Sender<PlaybackSnapshot>,
}

impl PlaybackWorker {
    pub fn new(
        config: PlaybackWorkerConfig,
        queue_receiver: mpsc::Receiver<PlaybackRequest>,
        selection: Arc<dyn SelectionStorePort>,
        library: Arc<dyn BookLibraryPort>,
    ) -> Self {
        let (state_sender, _) = watch::channel(PlaybackSnapshot::default());
        Self {
            config,
            queue_receiver,
            selection,
            library,
            state_sender,
        }
    }

    /// 订阅状态快照
    pub fn subscribe(&self) -> watch::Receiver<PlaybackSnapshot> {
        self.state_sender.subscribe()
    }

    /// 启动 Worker，队列关闭后退出
    pub async fn run(mut self) {
        tracing::info!(
            seek_step_ms = self.config.seek_step_ms,
            "PlaybackWorker started"
        );

        while let Some(request) = self.queue_receiver.recv().await {
            let current = self.state_sender.borrow().clone();
            let next = self.apply(&current, request);
            if next != current {
                tracing::debug!(request = ?request, state = ?next, "Playback state changed");
            }
            self.state_sender.send_replace(next);
        }

        tracing::info!("PlaybackWorker stopped");
    }

    /// 对当前快照应用一次请求
    fn apply(&self, current: &PlaybackSnapshot, request: PlaybackRequest) -> PlaybackSnapshot {
        let mut next = current.clone();

        match request {
            PlaybackRequest::Play => {
                let Some(book_id) = self.selection.selected() else {
                    tracing::warn!("Play requested but no book is selected");
                    return next;
                };
                if next.book_id != Some(book_id) {
                    next.book_id = Some(book_id);
                    next.track_index = 0;
                    next.position_ms = 0;
                }
                next.status = PlaybackStatus::Playing;
            }
            PlaybackRequest::Pause { allow_resume } => {
                if next.status != PlaybackStatus::Stopped {
                    next.status = if allow_resume {
                        PlaybackStatus::Paused
                    } else {
                        PlaybackStatus::Stopped
                    };
                }
            }
            PlaybackRequest::Stop => {
                next.status = PlaybackStatus::Stopped;
            }
            PlaybackRequest::Seek(direction) => {
                if next.book_id.is_none() {
                    return next;
                }
                next.position_ms = match direction {
                    SeekDirection::Forward => next.position_ms.saturating_add(self.config.seek_step_ms),
                    SeekDirection::Backward => {
                        next.position_ms.saturating_sub(self.config.seek_step_ms)
                    }
                };
            }
            PlaybackRequest::AdvanceTrack {
                to_next: true,
                reset_progress: _,
            } => {
                let Some(book_id) = next.book_id else {
                    return next;
                };
                let chapter_count = self.library.get(book_id).and_then(|b| b.chapter_count);
                if chapter_count.is_some_and(|count| next.track_index + 1 >= count) {
                    tracing::debug!(book_id = %book_id, "Already at last track");
                    return next;
                }
                next.track_index += 1;
                next.position_ms = 0;
            }
            PlaybackRequest::AdvanceTrack {
                to_next: false,
                reset_progress,
            } => {
                if next.book_id.is_none() {
                    return next;
                }
                let restart_current =
                    reset_progress && next.position_ms > self.config.restart_threshold_ms;
                if !restart_current && next.track_index > 0 {
                    next.track_index -= 1;
                }
                next.position_ms = 0;
            }
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{BookRecord, PlaybackEnginePort};
    use crate::infrastructure::adapters::ChannelPlaybackEngine;
    use crate::infrastructure::memory::{InMemoryBookLibrary, InMemorySelectionStore};

    fn worker(selected: Option<u64>) -> PlaybackWorker {
        let (_tx, rx) = mpsc::channel(8);
        let selection = match selected {
            Some(id) => InMemorySelectionStore::with_selected(BookId::new(id)),
            None => InMemorySelectionStore::new(),
        };
        let library = InMemoryBookLibrary::from_records(vec![
            BookRecord::new(BookId::new(1), "Dune").with_chapters(3),
            BookRecord::new(BookId::new(2), "Unknown length"),
        ]);
        PlaybackWorker::new(
            PlaybackWorkerConfig::default(),
            rx,
            Arc::new(selection),
            Arc::new(library),
        )
    }

    fn playing(book: u64, track_index: u32, position_ms: u64) -> PlaybackSnapshot {
        PlaybackSnapshot {
            status: PlaybackStatus::Playing,
            book_id: Some(BookId::new(book)),
            track_index,
            position_ms,
        }
    }

    #[test]
    fn test_play_without_selection_keeps_state() {
        let w = worker(None);
        let next = w.apply(&PlaybackSnapshot::default(), PlaybackRequest::Play);
        assert_eq!(next, PlaybackSnapshot::default());
    }

    #[test]
    fn test_play_new_book_starts_from_beginning() {
        let w = worker(Some(1));
        let next = w.apply(&playing(2, 4, 9_000), PlaybackRequest::Play);
        assert_eq!(next, playing(1, 0, 0));
    }

    #[test]
    fn test_play_same_book_resumes() {
        let w = worker(Some(1));
        let mut paused = playing(1, 2, 5_000);
        paused.status = PlaybackStatus::Paused;
        assert_eq!(w.apply(&paused, PlaybackRequest::Play), playing(1, 2, 5_000));
    }

    #[test]
    fn test_pause_variants() {
        let w = worker(Some(1));
        let paused = w.apply(&playing(1, 0, 0), PlaybackRequest::Pause { allow_resume: true });
        assert_eq!(paused.status, PlaybackStatus::Paused);

        let stopped = w.apply(&playing(1, 0, 0), PlaybackRequest::Pause { allow_resume: false });
        assert_eq!(stopped.status, PlaybackStatus::Stopped);

        let idle = w.apply(
            &PlaybackSnapshot::default(),
            PlaybackRequest::Pause { allow_resume: true },
        );
        assert_eq!(idle.status, PlaybackStatus::Stopped);
    }

    #[test]
    fn test_seek_moves_by_step_and_saturates() {
        let w = worker(Some(1));
        let fwd = w.apply(&playing(1, 0, 1_000), PlaybackRequest::Seek(SeekDirection::Forward));
        assert_eq!(fwd.position_ms, 21_000);

        let back = w.apply(&playing(1, 0, 1_000), PlaybackRequest::Seek(SeekDirection::Backward));
        assert_eq!(back.position_ms, 0);
    }

    #[test]
    fn test_next_stops_at_last_known_track() {
        let w = worker(Some(1));
        let next = PlaybackRequest::AdvanceTrack {
            to_next: true,
            reset_progress: false,
        };
        assert_eq!(w.apply(&playing(1, 1, 500), next), playing(1, 2, 0));
        assert_eq!(w.apply(&playing(1, 2, 500), next), playing(1, 2, 500));
        assert_eq!(w.apply(&playing(2, 40, 500), next), playing(2, 41, 0));
    }

    #[test]
    fn test_previous_restarts_or_goes_back() {
        let w = worker(Some(1));
        let previous = PlaybackRequest::AdvanceTrack {
            to_next: false,
            reset_progress: true,
        };
        assert_eq!(w.apply(&playing(1, 2, 30_000), previous), playing(1, 2, 0));
        assert_eq!(w.apply(&playing(1, 2, 1_000), previous), playing(1, 1, 0));
        assert_eq!(w.apply(&playing(1, 0, 1_000), previous), playing(1, 0, 0));

        let without_reset = PlaybackRequest::AdvanceTrack {
            to_next: false,
            reset_progress: false,
        };
        assert_eq!(w.apply(&playing(1, 2, 30_000), without_reset), playing(1, 1, 0));
    }

    #[tokio::test]
    async fn test_run_applies_requests_in_order() {
        let (tx, rx) = mpsc::channel(8);
        let selection = Arc::new(InMemorySelectionStore::with_selected(BookId::new(1)));
        let library = Arc::new(InMemoryBookLibrary::from_records(vec![
            BookRecord::new(BookId::new(1), "Dune").with_chapters(3),
        ]));
        let worker = PlaybackWorker::new(PlaybackWorkerConfig::default(), rx, selection, library);
        let state = worker.subscribe();
        let handle = tokio::spawn(worker.run());

        let engine = ChannelPlaybackEngine::new(tx);
        engine.play();
        engine.advance_track(true, false);
        engine.seek(SeekDirection::Forward);
        engine.pause(true);
        drop(engine);

        handle.await.unwrap();
        let snapshot = state.borrow().clone();
        assert_eq!(
            snapshot,
            PlaybackSnapshot {
                status: PlaybackStatus::Paused,
                book_id: Some(BookId::new(1)),
                track_index: 1,
                position_ms: 20_000,
            }
        );
    }
}
