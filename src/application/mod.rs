//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（IdentifierCodec、PlaybackEngine、ConnectionContext、Search 等）
//! - commands: 远程控制命令及分发器
//! - error: 分发错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{handlers::CommandRouter, Command};

pub use error::DispatchError;

pub use ports::{
    // Book library
    BookLibraryPort,
    BookRecord,
    // Connection context
    ConnectionContextPort,
    // Identifier codec
    IdentifierCodecPort,
    IdentifierError,
    // Playback engine
    PlaybackEnginePort,
    // Search
    SearchHandlerPort,
    SearchInterpreterPort,
    // Selection store
    SelectionStorePort,
};
