//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{BookRecord, Command};
use crate::domain::book::BookId;
use crate::domain::search::SearchHints;
use crate::infrastructure::worker::PlaybackSnapshot;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self::success(Empty {})
    }
}

// ============================================================================
// Remote DTOs
// ============================================================================

/// 远程控制命令
///
/// `{"type": "play_by_id", "media_id": "content://bookremote/book/42"}`
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandRequest {
    PlayById {
        media_id: String,
    },
    PlayFromSearch {
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        hints: SearchHints,
    },
    SkipForward,
    SkipBackward,
    NextTrack,
    PreviousTrack,
    Stop,
    Pause,
    Play,
    CustomAction {
        name: String,
    },
}

impl From<CommandRequest> for Command {
    fn from(req: CommandRequest) -> Self {
        match req {
            CommandRequest::PlayById { media_id } => Command::PlayById(media_id),
            CommandRequest::PlayFromSearch { query, hints } => {
                Command::PlayFromSearch { query, hints }
            }
            CommandRequest::SkipForward => Command::SkipForward,
            CommandRequest::SkipBackward => Command::SkipBackward,
            CommandRequest::NextTrack => Command::NextTrack,
            CommandRequest::PreviousTrack => Command::PreviousTrack,
            CommandRequest::Stop => Command::Stop,
            CommandRequest::Pause => Command::Pause,
            CommandRequest::Play => Command::Play,
            CommandRequest::CustomAction { name } => Command::CustomAction(name),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ConnectionRequest {
    pub rich_client_attached: bool,
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub playback: PlaybackSnapshot,
    pub selected_book_id: Option<BookId>,
    pub rich_client_attached: bool,
}

// ============================================================================
// Library DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: BookId,
    pub media_id: String,
    pub title: String,
    pub author: Option<String>,
    pub chapter_count: Option<u32>,
}

impl BookResponse {
    pub fn from_record(record: BookRecord, media_id: String) -> Self {
        Self {
            id: record.id,
            media_id,
            title: record.title,
            author: record.author,
            chapter_count: record.chapter_count,
        }
    }
}
