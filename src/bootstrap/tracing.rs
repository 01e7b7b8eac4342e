//! Tracing configuration for the placement binary
//!
//! ## Behavior / 行为
//!
//! - **Development**: debug level / 开发环境：debug 级别
//! - **Production**: info level / 生产环境：info 级别
//! - **Environment filter**: `RUST_LOG` wins over the defaults
//!
//! Logs go to stderr; stdout carries only the command result.
//! 日志输出到 stderr；stdout 只输出命令结果。

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        "hyper_util=info".to_string(), // Connection pool chatter
        "reqwest=info".to_string(),
        if is_dev { "pl_infra=debug" } else { "pl_infra=info" }.to_string(),
    ]
}

/// Initialize the tracing subscriber
/// 初始化 tracing 订阅者
///
/// Call once in `main.rs` before any use case runs.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
