//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Book Context: 书籍标识
//! - Remote Context: 远程控制导航决策
//! - Search Context: 搜索条件

pub mod book;
pub mod remote;
pub mod search;
