// ============================================================================
// FlowCLI - 日志工具
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: 用户提示输出和诊断日志初始化
// 边界:
//   - ✅ 控制台提示输出
//   - ✅ tracing 订阅器初始化
//   - ✅ 日志级别控制
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件日志写入
//
// ============================================================================

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use super::colors::{colors_enabled, Colors};
use super::constants::APP_NAME;

/// 已安装订阅器的过滤器句柄
static FILTER_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// 初始化诊断日志（输出到 stderr）
///
/// `RUST_LOG` 优先；否则 verbose 时为 debug，默认 warn。已初始化时只调整级别。
pub fn init_tracing(verbose: bool) {
    if FILTER_HANDLE.get().is_some() {
        set_tracing_verbose(verbose);
        return;
    }

    let (filter, handle) = reload::Layer::new(build_filter(verbose));
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(colors_enabled())
                .with_target(false),
        )
        .try_init();

    if installed.is_ok() {
        let _ = FILTER_HANDLE.set(handle);
    }
}

/// 配置合并后重新设置日志级别
pub fn set_tracing_verbose(verbose: bool) {
    if let Some(handle) = FILTER_HANDLE.get() {
        let _ = handle.reload(build_filter(verbose));
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flowcli={}", default_level)))
}

/// 简单的提示输出工具
pub struct Logger;

impl Logger {
    pub fn info<S: AsRef<str>>(msg: S) {
        println!("{}", Self::line(&Colors::info(&Self::tag()), msg.as_ref()));
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        println!("{}", Self::line(&Colors::warning("[WARN]"), msg.as_ref()));
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        eprintln!("{}", Self::line(&Colors::error("[ERROR]"), msg.as_ref()));
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        println!("{}", Self::line(&Colors::success(&Self::tag()), msg.as_ref()));
    }

    fn tag() -> String {
        format!("[{}]", APP_NAME)
    }

    fn line(tag: &str, msg: &str) -> String {
        format!("{} {}", tag, msg)
    }
}
