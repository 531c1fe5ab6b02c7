//! 应用层 - 命令
//!
//! 远程控制命令及其分发器

mod remote_commands;

pub mod handlers;

pub use remote_commands::*;
