//! BookRemote - 有声书远程控制命令分发
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book Context: 书籍标识
//! - Remote Context: 客户端能力与导航决策
//! - Search Context: 搜索条件
//!
//! 应用层 (application/):
//! - Ports: 端口定义（IdentifierCodec, PlaybackEngine, ConnectionContext, Search, SelectionStore, BookLibrary）
//! - Commands: Command 与 CommandRouter
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: BookUriCodec, ChannelPlaybackEngine, HintSearchInterpreter, LibrarySearchHandler
//! - Memory: 选中书籍、连接状态、书库
//! - Worker: PlaybackWorker 后台播放状态
//! - HTTP: 远程控制传输

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{Command, CommandRouter};
pub use config::{load_config, AppConfig};
