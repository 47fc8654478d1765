use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn main() -> ExitCode {
    // 提前加载 .env，使得 RUST_LOG、CONFIG_PATH 等环境变量生效
    dotenv().ok();

    // 配置缺失时使用默认值，配置非法时直接退出
    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            common::utils::logging::init_logging_default();
            error!(service = "server", event = "config_invalid", error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    common::utils::logging::init_logging(&cfg.logging.format);
    info!(service = "server", event = "logger_init", format = %cfg.logging.format, "tracing subscriber initialized");

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panic 钩子：捕获异常并输出错误日志
    std::panic::set_hook(Box::new(move |info| {
        error!(service = "server", event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));

    // 构建 Tokio 运行时（允许根据配置调整线程数）
    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "directory service starting"
    );

    // 优雅停机由 server 内部监听 Ctrl+C 完成
    rt.block_on(async move {
        match server::run_with_config(cfg).await {
            Ok(()) => {
                info!(service = "server", event = "stop", %service_id, pid, "server stopped normally");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "server", event = "run_failed", error = %e, "server returned error");
                ExitCode::FAILURE
            }
        }
    })
}
