//! Atomic Connection Context Implementation

use std::sync::atomic::{AtomicBool, Ordering};

use crate::application::ports::ConnectionContextPort;

/// 基于 AtomicBool 的连接状态
///
/// 写入使用 Release，读取使用 Acquire
#[derive(Debug, Default)]
pub struct AtomicConnectionContext {
    rich_client_attached: AtomicBool,
}

impl AtomicConnectionContext {
    pub fn new(rich_client_attached: bool) -> Self {
        Self {
            rich_client_attached: AtomicBool::new(rich_client_attached),
        }
    }

    /// 由传输层上报富客户端的连接/断开
    pub fn set_rich_client_attached(&self, attached: bool) {
        let previous = self.rich_client_attached.swap(attached, Ordering::AcqRel);
        if previous != attached {
            tracing::info!(rich_client_attached = attached, "Connection state changed");
        }
    }
}

impl ConnectionContextPort for AtomicConnectionContext {
    fn is_rich_client_attached(&self) -> bool {
        self.rich_client_attached.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_defaults_to_detached() {
        assert!(!AtomicConnectionContext::default().is_rich_client_attached());
    }

    #[test]
    fn test_update_is_visible_from_other_thread() {
        let ctx = Arc::new(AtomicConnectionContext::new(false));
        {
            let ctx = ctx.clone();
            std::thread::spawn(move || ctx.set_rich_client_attached(true))
                .join()
                .unwrap();
        }
        assert!(ctx.is_rich_client_attached());

        ctx.set_rich_client_attached(false);
        assert!(!ctx.is_rich_client_attached());
    }
}
