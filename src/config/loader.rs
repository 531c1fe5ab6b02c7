//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `BOOKREMOTE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `BOOKREMOTE_SERVER__PORT=8080`
/// - `BOOKREMOTE_CODEC__AUTHORITY=de.example.books`
/// - `BOOKREMOTE_PLAYBACK__SEEK_STEP_SECS=30`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5070)?
        .set_default("codec.authority", crate::infrastructure::adapters::DEFAULT_AUTHORITY)?
        .set_default("playback.seek_step_secs", 20)?
        .set_default("playback.restart_threshold_ms", 2000)?
        .set_default("playback.queue_capacity", 256)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: BOOKREMOTE_SERVER__PORT=8080
    builder = builder.add_source(
        Environment::with_prefix("BOOKREMOTE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    let authority = config.codec.authority.trim();
    if authority.is_empty() || authority.contains('/') {
        return Err(ConfigError::ValidationError(format!(
            "Invalid codec authority: '{}'",
            config.codec.authority
        )));
    }

    if config.playback.seek_step_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Seek step cannot be 0".to_string(),
        ));
    }

    if config.playback.queue_capacity == 0 {
        return Err(ConfigError::ValidationError(
            "Playback queue capacity cannot be 0".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for book in &config.library.books {
        if !seen.insert(book.id) {
            return Err(ConfigError::ValidationError(format!(
                "Duplicate book id in library: {}",
                book.id
            )));
        }
        if book.title.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "Book {} has an empty title",
                book.id
            )));
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Codec Authority: {}", config.codec.authority);
    tracing::info!("Seek Step: {}s", config.playback.seek_step_secs);
    tracing::info!("Restart Threshold: {}ms", config.playback.restart_threshold_ms);
    tracing::info!("Playback Queue Capacity: {}", config.playback.queue_capacity);
    tracing::info!("Library Books: {}", config.library.books.len());
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
