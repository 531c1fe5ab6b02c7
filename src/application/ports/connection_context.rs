//! Connection Context Port - 远程客户端连接状态

/// Connection Context Port
///
/// 每次调用都重新读取，不允许缓存
pub trait ConnectionContextPort: Send + Sync {
    /// 当前是否连接了支持章节导航的富客户端
    fn is_rich_client_attached(&self) -> bool;
}
