//! In-Memory Book Library Implementation

use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{BookLibraryPort, BookRecord};
use crate::domain::book::BookId;

/// 内存书库
pub struct InMemoryBookLibrary {
    books: DashMap<BookId, BookRecord>,
}

impl InMemoryBookLibrary {
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
        }
    }

    pub fn from_records(records: impl IntoIterator<Item = BookRecord>) -> Self {
        let library = Self::new();
        for record in records {
            library.upsert(record);
        }
        library
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for InMemoryBookLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl BookLibraryPort for InMemoryBookLibrary {
    fn list(&self) -> Vec<BookRecord> {
        let mut books: Vec<BookRecord> = self.books.iter().map(|e| e.value().clone()).collect();
        books.sort_by_key(|b| b.id);
        books
    }

    fn get(&self, id: BookId) -> Option<BookRecord> {
        self.books.get(&id).map(|b| b.clone())
    }

    fn upsert(&self, book: BookRecord) {
        tracing::debug!(book_id = %book.id, title = %book.title, "Book upserted");
        self.books.insert(book.id, book);
    }
}
