//! Command Handlers 实现

mod command_router;

pub use command_router::*;
