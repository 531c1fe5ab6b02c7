//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod book_library;
mod connection_context;
mod identifier_codec;
mod playback_engine;
mod search;
mod selection_store;

pub use book_library::{BookLibraryPort, BookRecord};
pub use connection_context::ConnectionContextPort;
pub use identifier_codec::{IdentifierCodecPort, IdentifierError};
pub use playback_engine::PlaybackEnginePort;
pub use search::{SearchHandlerPort, SearchInterpreterPort};
pub use selection_store::SelectionStorePort;
