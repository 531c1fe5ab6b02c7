//! Command Router - 远程控制命令分发
//!
//! 每条入站命令最多转换为一次播放引擎调用（或一次搜索交接）。
//! 所有失败都只记录日志并放弃执行，不会越过 dispatch 边界。

use std::sync::Arc;

use crate::application::commands::Command;
use crate::application::error::DispatchError;
use crate::application::ports::{
    ConnectionContextPort, IdentifierCodecPort, PlaybackEnginePort, SearchHandlerPort,
    SearchInterpreterPort, SelectionStorePort,
};
use crate::domain::remote::{
    next_track_action, previous_track_action, ClientCapability, CustomAction, NavigationAction,
    SeekDirection,
};
use crate::domain::search::SearchHints;

/// Command Router
pub struct CommandRouter {
    codec: Arc<dyn IdentifierCodecPort>,
    selection: Arc<dyn SelectionStorePort>,
    connection: Arc<dyn ConnectionContextPort>,
    engine: Arc<dyn PlaybackEnginePort>,
    interpreter: Arc<dyn SearchInterpreterPort>,
    search_handler: Arc<dyn SearchHandlerPort>,
}

impl CommandRouter {
    pub fn new(
        codec: Arc<dyn IdentifierCodecPort>,
        selection: Arc<dyn SelectionStorePort>,
        connection: Arc<dyn ConnectionContextPort>,
        engine: Arc<dyn PlaybackEnginePort>,
        interpreter: Arc<dyn SearchInterpreterPort>,
        search_handler: Arc<dyn SearchHandlerPort>,
    ) -> Self {
        Self {
            codec,
            selection,
            connection,
            engine,
            interpreter,
            search_handler,
        }
    }

    /// 唯一入口
    pub fn dispatch(&self, command: Command) {
        let name = command.name();
        if let Err(e) = self.try_dispatch(command) {
            if e.is_identifier_error() {
                tracing::error!(command = name, error = %e, "Command declined");
            } else {
                tracing::warn!(command = name, error = %e, "Command declined");
            }
        }
    }

    fn try_dispatch(&self, command: Command) -> Result<(), DispatchError> {
        match command {
            Command::PlayById(media_id) => self.play_by_id(&media_id)?,
            Command::PlayFromSearch { query, hints } => {
                self.play_from_search(query.as_deref(), &hints)
            }
            Command::SkipForward => self.fast_forward(),
            Command::SkipBackward => self.rewind(),
            Command::NextTrack => self.next_track(),
            Command::PreviousTrack => self.previous_track(),
            Command::Stop => self.stop(),
            Command::Pause => self.pause(),
            Command::Play => self.play(),
            Command::CustomAction(name) => self.custom_action(&name)?,
        }
        Ok(())
    }

    fn play_by_id(&self, media_id: &str) -> Result<(), DispatchError> {
        tracing::info!(media_id = %media_id, "Play from media id");

        let class = self.codec.classify(media_id);
        if !class.kind.is_playable() {
            return Err(DispatchError::unrecognized_kind(media_id, class.kind));
        }

        let book_id = self
            .codec
            .extract_book_id(media_id)
            .map_err(|e| DispatchError::invalid_identifier(media_id, e.to_string()))?;

        self.selection.select(book_id);
        tracing::debug!(book_id = %book_id, "Selected book");

        self.play();
        Ok(())
    }

    fn play_from_search(&self, query: Option<&str>, hints: &SearchHints) {
        tracing::info!(query = ?query, hint_count = hints.len(), "Play from search");
        let spec = self.interpreter.interpret(query, hints);
        self.search_handler.handle(spec);
    }

    fn next_track(&self) {
        let capability = self.capability();
        tracing::info!(capability = ?capability, "Skip to next");
        self.navigate(next_track_action(capability));
    }

    fn previous_track(&self) {
        let capability = self.capability();
        tracing::info!(capability = ?capability, "Skip to previous");
        self.navigate(previous_track_action(capability));
    }

    fn navigate(&self, action: NavigationAction) {
        match action {
            NavigationAction::AdvanceTrack {
                to_next,
                reset_progress,
            } => self.engine.advance_track(to_next, reset_progress),
            NavigationAction::Seek(SeekDirection::Forward) => self.fast_forward(),
            NavigationAction::Seek(SeekDirection::Backward) => self.rewind(),
        }
    }

    fn fast_forward(&self) {
        tracing::info!("Fast forward");
        self.engine.seek(SeekDirection::Forward);
    }

    fn rewind(&self) {
        tracing::info!("Rewind");
        self.engine.seek(SeekDirection::Backward);
    }

    fn stop(&self) {
        tracing::info!("Stop");
        self.engine.stop();
    }

    fn pause(&self) {
        tracing::info!("Pause");
        self.engine.pause(true);
    }

    fn play(&self) {
        tracing::info!("Play");
        self.engine.play();
    }

    fn custom_action(&self, name: &str) -> Result<(), DispatchError> {
        tracing::info!(action = %name, "Custom action");
        let action = CustomAction::from_name(name)
            .ok_or_else(|| DispatchError::UnrecognizedCustomAction(name.to_string()))?;

        match action {
            CustomAction::Next => self.next_track(),
            CustomAction::Previous => self.previous_track(),
            CustomAction::FastForward => self.fast_forward(),
            CustomAction::Rewind => self.rewind(),
        }
        Ok(())
    }

    /// 每次调用都重新读取连接状态
    fn capability(&self) -> ClientCapability {
        ClientCapability::from_rich_attached(self.connection.is_rich_client_attached())
    }
}
