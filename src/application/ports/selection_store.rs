//! Selection Store Port - 当前选中的书
//!
//! 写入对之后的任意线程读取立即可见（acquire/release 语义）

use crate::domain::book::BookId;

/// Selection Store Port
pub trait SelectionStorePort: Send + Sync {
    /// 用户最近一次选择播放的书
    fn selected(&self) -> Option<BookId>;

    /// 记录新的选择，覆盖旧值
    fn select(&self, id: BookId);
}
