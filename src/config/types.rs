//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::application::ports::BookRecord;
use crate::infrastructure::adapters::DEFAULT_AUTHORITY;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 媒体标识配置
    #[serde(default)]
    pub codec: CodecConfig,

    /// 播放配置
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// 书库配置
    #[serde(default)]
    pub library: LibraryConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5070
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 媒体标识配置
#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// content:// 标识的 authority
    #[serde(default = "default_authority")]
    pub authority: String,
}

fn default_authority() -> String {
    DEFAULT_AUTHORITY.to_string()
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            authority: default_authority(),
        }
    }
}

/// 播放配置
#[derive(Debug, Clone, Deserialize)]
pub struct PlaybackConfig {
    /// 快进/快退步长（秒）
    #[serde(default = "default_seek_step")]
    pub seek_step_secs: u64,

    /// "上一章" 时超过该进度则重播当前章节（毫秒）
    #[serde(default = "default_restart_threshold")]
    pub restart_threshold_ms: u64,

    /// 播放请求队列容量
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

fn default_seek_step() -> u64 {
    20
}

fn default_restart_threshold() -> u64 {
    2_000
}

fn default_queue_capacity() -> usize {
    256
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            seek_step_secs: default_seek_step(),
            restart_threshold_ms: default_restart_threshold(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

/// 书库配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LibraryConfig {
    /// 启动时载入的书
    #[serde(default)]
    pub books: Vec<BookRecord>,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
