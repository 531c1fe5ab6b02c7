//! Memory Layer - In-Memory State Management
//!
//! 实现 SelectionStore、ConnectionContext 和 BookLibrary 的内存版本

mod book_library;
mod connection_context;
mod selection_store;

pub use book_library::InMemoryBookLibrary;
pub use connection_context::AtomicConnectionContext;
pub use selection_store::InMemorySelectionStore;
