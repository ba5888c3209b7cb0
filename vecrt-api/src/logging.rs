//! 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。

use std::io;

use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer, Registry,
};
use vecrt_config::{LogFormat, LogLevel, LoggingConfig, Phase};

use crate::error::VecrtError;

fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

/// 按阶段构建过滤器：`vecrt::install` / `vecrt::dispatch` / `vecrt::call`
pub fn build_targets(config: &LoggingConfig) -> Targets {
    Phase::all().into_iter().fold(
        Targets::new().with_default(level_filter(config.level)),
        |targets, phase| {
            targets.with_target(phase.target(), level_filter(config.level_for(phase)))
        },
    )
}

/// 初始化全局日志订阅者（输出到 stderr）
///
/// 已有全局订阅者时返回 [`VecrtError::Logging`]。
pub fn init_logging(config: &LoggingConfig) -> Result<(), VecrtError> {
    let layer =
        create_format_layer(config.format, io::stderr).with_filter(build_targets(config));
    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| VecrtError::Logging(e.to_string()))
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;
    use vecrt_config::LogTargets;

    #[test]
    fn test_build_targets_per_phase() {
        let config = LoggingConfig {
            level: LogLevel::Warn,
            format: LogFormat::Compact,
            targets: LogTargets {
                install: Some(LogLevel::Debug),
                dispatch: None,
                call: Some(LogLevel::Trace),
            },
        };
        let targets = build_targets(&config);

        assert!(targets.would_enable("vecrt::install", &Level::DEBUG));
        assert!(!targets.would_enable("vecrt::install", &Level::TRACE));
        assert!(!targets.would_enable("vecrt::dispatch", &Level::INFO));
        assert!(targets.would_enable("vecrt::dispatch", &Level::WARN));
        assert!(targets.would_enable("vecrt::call", &Level::TRACE));
        assert!(!targets.would_enable("other", &Level::INFO));
    }

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config);
        assert!(matches!(init_logging(&config), Err(VecrtError::Logging(_))));
    }
}
