//! Library Search Handler
//!
//! 在书库中匹配搜索条件：
//! - Artist 焦点匹配作者
//! - Album / Title / Playlist 焦点匹配书名
//! - 自由文本匹配书名或作者
//!
//! 匹配为大小写不敏感的包含关系，多本命中时取 ID 最小者。
//! 命中则选中并播放；无条件或未命中时继续播放当前选中的书。

use std::sync::Arc;

use crate::application::ports::{
    BookLibraryPort, BookRecord, PlaybackEnginePort, SearchHandlerPort, SelectionStorePort,
};
use crate::domain::search::{MediaFocus, SearchSpec};

/// 书库搜索处理器
pub struct LibrarySearchHandler {
    library: Arc<dyn BookLibraryPort>,
    selection: Arc<dyn SelectionStorePort>,
    engine: Arc<dyn PlaybackEnginePort>,
}

impl LibrarySearchHandler {
    pub fn new(
        library: Arc<dyn BookLibraryPort>,
        selection: Arc<dyn SelectionStorePort>,
        engine: Arc<dyn PlaybackEnginePort>,
    ) -> Self {
        Self {
            library,
            selection,
            engine,
        }
    }

    /// 查找最匹配的书
    pub fn find(&self, spec: &SearchSpec) -> Option<BookRecord> {
        let (needle, by_title, by_author) = match spec.focus {
            MediaFocus::Artist => (spec.artist.as_ref().or(spec.query.as_ref()), false, true),
            MediaFocus::Album => (spec.album.as_ref().or(spec.query.as_ref()), true, false),
            MediaFocus::Title => (spec.title.as_ref().or(spec.query.as_ref()), true, false),
            MediaFocus::Playlist => (spec.playlist.as_ref().or(spec.query.as_ref()), true, false),
            MediaFocus::Unstructured => (spec.query.as_ref(), true, true),
        };
        let needle = needle?.to_lowercase();

        self.library.list().into_iter().find(|book| {
            let title_hit = by_title && book.title.to_lowercase().contains(&needle);
            let author_hit = by_author
                && book
                    .author
                    .as_ref()
                    .is_some_and(|a| a.to_lowercase().contains(&needle));
            title_hit || author_hit
        })
    }
}

impl SearchHandlerPort for LibrarySearchHandler {
    fn handle(&self, spec: SearchSpec) {
        if spec.is_empty() {
            tracing::info!("Empty search, resuming current selection");
            self.engine.play();
            return;
        }

        match self.find(&spec) {
            Some(book) => {
                tracing::info!(book_id = %book.id, title = %book.title, "Search matched book");
                self.selection.select(book.id);
                self.engine.play();
            }
            None => {
                tracing::info!(spec = ?spec, "Search matched nothing, resuming current selection");
                self.engine.play();
            }
        }
    }
}
