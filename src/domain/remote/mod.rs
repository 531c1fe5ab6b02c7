//! Remote Context - 远程控制限界上下文
//!
//! 职责:
//! - 客户端能力（富客户端 / 基础遥控器）
//! - 上一曲/下一曲的降级决策
//! - 自定义动作名称表

mod custom_action;
mod navigation;

pub use custom_action::CustomAction;
pub use navigation::{
    next_track_action, previous_track_action, ClientCapability, NavigationAction, SeekDirection,
};
