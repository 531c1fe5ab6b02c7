//! BookRemote - 有声书远程控制服务

use std::sync::Arc;

use bookremote::application::CommandRouter;
use bookremote::config::{load_config, print_config};
use bookremote::infrastructure::adapters::{
    BookUriCodec, ChannelPlaybackEngine, HintSearchInterpreter, LibrarySearchHandler,
};
use bookremote::infrastructure::http::{AppState, HttpServer, ServerConfig};
use bookremote::infrastructure::memory::{
    AtomicConnectionContext, InMemoryBookLibrary, InMemorySelectionStore,
};
use bookremote::infrastructure::worker::{PlaybackWorker, PlaybackWorkerConfig};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},bookremote={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("BookRemote - 有声书远程控制服务");
    print_config(&config);

    // 内存状态
    let library = Arc::new(InMemoryBookLibrary::from_records(
        config.library.books.clone(),
    ));
    let selection = Arc::new(InMemorySelectionStore::new());
    let connection = Arc::new(AtomicConnectionContext::new(false));
    let codec = Arc::new(BookUriCodec::new(config.codec.authority.clone()));

    // 播放请求队列
    let (playback_tx, playback_rx) = mpsc::channel(config.playback.queue_capacity);
    let engine = Arc::new(ChannelPlaybackEngine::new(playback_tx));

    // 创建 PlaybackWorker
    let worker_config = PlaybackWorkerConfig {
        seek_step_ms: config.playback.seek_step_secs.saturating_mul(1000),
        restart_threshold_ms: config.playback.restart_threshold_ms,
    };
    let worker = PlaybackWorker::new(worker_config, playback_rx, selection.clone(), library.clone());
    let playback_state = worker.subscribe();
    tokio::spawn(worker.run());

    // 搜索
    let search_handler = Arc::new(LibrarySearchHandler::new(
        library.clone(),
        selection.clone(),
        engine.clone(),
    ));

    // 命令分发器
    let router = Arc::new(CommandRouter::new(
        codec.clone(),
        selection.clone(),
        connection.clone(),
        engine,
        Arc::new(HintSearchInterpreter::new()),
        search_handler,
    ));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(router, connection, selection, library, codec, playback_state);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
