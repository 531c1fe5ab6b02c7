//! Application State
//!
//! HTTP 处理器共享的端口与命令分发器

use std::sync::Arc;
use tokio::sync::watch;

use crate::application::{BookLibraryPort, CommandRouter, IdentifierCodecPort, SelectionStorePort};
use crate::infrastructure::memory::AtomicConnectionContext;
use crate::infrastructure::worker::PlaybackSnapshot;

/// 应用状态
pub struct AppState {
    // ========== Command Router ==========
    pub router: Arc<CommandRouter>,

    // ========== Ports ==========
    pub connection: Arc<AtomicConnectionContext>,
    pub selection: Arc<dyn SelectionStorePort>,
    pub library: Arc<dyn BookLibraryPort>,
    pub codec: Arc<dyn IdentifierCodecPort>,

    // ========== Playback ==========
    pub playback_state: watch::Receiver<PlaybackSnapshot>,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        router: Arc<CommandRouter>,
        connection: Arc<AtomicConnectionContext>,
        selection: Arc<dyn SelectionStorePort>,
        library: Arc<dyn BookLibraryPort>,
        codec: Arc<dyn IdentifierCodecPort>,
        playback_state: watch::Receiver<PlaybackSnapshot>,
    ) -> Self {
        Self {
            router,
            connection,
            selection,
            library,
            codec,
            playback_state,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{response::Response, Router};
    use serde_json::Value;
    use std::sync::Arc;
    use tokio::sync::watch;

    use super::AppState;
    use crate::application::{BookRecord, CommandRouter};
    use crate::domain::book::BookId;
    use crate::infrastructure::adapters::{
        BookUriCodec, HintSearchInterpreter, LibrarySearchHandler, RecordingPlaybackEngine,
    };
    use crate::infrastructure::http::create_routes;
    use crate::infrastructure::memory::{
        AtomicConnectionContext, InMemoryBookLibrary, InMemorySelectionStore,
    };
    use crate::infrastructure::worker::PlaybackSnapshot;

    /// 以 RecordingPlaybackEngine 组装的测试应用
    pub struct TestApp {
        pub state: Arc<AppState>,
        pub engine: Arc<RecordingPlaybackEngine>,
    }

    impl TestApp {
        pub fn new() -> Self {
            let engine = Arc::new(RecordingPlaybackEngine::new());
            let codec = Arc::new(BookUriCodec::new("test.books"));
            let selection = Arc::new(InMemorySelectionStore::new());
            let connection = Arc::new(AtomicConnectionContext::new(false));
            let library = Arc::new(InMemoryBookLibrary::from_records(vec![
                BookRecord::new(BookId::new(42), "Dune")
                    .with_author("Frank Herbert")
                    .with_chapters(48),
                BookRecord::new(BookId::new(7), "The Hobbit").with_author("J.R.R. Tolkien"),
            ]));
            let search_handler = Arc::new(LibrarySearchHandler::new(
                library.clone(),
                selection.clone(),
                engine.clone(),
            ));

            let router = Arc::new(CommandRouter::new(
                codec.clone(),
                selection.clone(),
                connection.clone(),
                engine.clone(),
                Arc::new(HintSearchInterpreter::new()),
                search_handler,
            ));

            let (_tx, playback_state) = watch::channel(PlaybackSnapshot::default());
            let state = Arc::new(AppState::new(
                router,
                connection,
                selection,
                library,
                codec,
                playback_state,
            ));

            Self { state, engine }
        }

        pub fn router(&self) -> Router {
            create_routes().with_state(self.state.clone())
        }
    }

    pub async fn read_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
