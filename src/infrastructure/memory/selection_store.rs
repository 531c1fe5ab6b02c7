//! In-Memory Selection Store Implementation

use std::sync::RwLock;

use crate::application::ports::SelectionStorePort;
use crate::domain::book::BookId;

/// 内存选中书籍存储
///
/// 锁的获取/释放保证写入对后续任意线程的读取可见
#[derive(Default)]
pub struct InMemorySelectionStore {
    selected: RwLock<Option<BookId>>,
}

impl InMemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selected(id: BookId) -> Self {
        Self {
            selected: RwLock::new(Some(id)),
        }
    }
}

impl SelectionStorePort for InMemorySelectionStore {
    fn selected(&self) -> Option<BookId> {
        match self.selected.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    fn select(&self, id: BookId) {
        match self.selected.write() {
            Ok(mut guard) => *guard = Some(id),
            Err(poisoned) => *poisoned.into_inner() = Some(id),
        }
        tracing::debug!(book_id = %id, "Book selected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_select_overwrites_previous() {
        let store = InMemorySelectionStore::new();
        assert_eq!(store.selected(), None);

        store.select(BookId::new(1));
        store.select(BookId::new(2));
        assert_eq!(store.selected(), Some(BookId::new(2)));
    }

    #[test]
    fn test_concurrent_writers_leave_one_of_their_values() {
        let store = Arc::new(InMemorySelectionStore::with_selected(BookId::new(0)));
        let handles: Vec<_> = (1..=8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || store.select(BookId::new(i)))
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let selected = store.selected().unwrap().value();
        assert!((1..=8).contains(&selected));
    }
}
