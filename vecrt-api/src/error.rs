//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use serde::Serialize;
use thiserror::Error;

pub use vecrt_core::RuntimeError;

/// Vecrt 错误类型
#[derive(Error, Debug)]
pub enum VecrtError {
    /// 运行时错误（参数、索引、算术等）
    #[error("{0}")]
    Runtime(#[from] RuntimeError),

    /// 配置解析错误
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// 日志系统初始化失败
    #[error("Logging error: {0}")]
    Logging(String),

    /// 全局配置重复初始化
    #[error("Config already initialized")]
    AlreadyInitialized,
}

impl VecrtError {
    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            VecrtError::Runtime(_) => "runtime",
            VecrtError::Config(_) | VecrtError::AlreadyInitialized => "config",
            VecrtError::Logging(_) => "logging",
        }
    }

    /// 出错的参数位置（如果有）
    pub fn argument(&self) -> Option<usize> {
        match self {
            VecrtError::Runtime(e) => e.argument_position(),
            _ => None,
        }
    }

    /// 转换为结构化错误报告
    ///
    /// 宿主程序可以直接打印，也可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        let error_kind = match self {
            VecrtError::Runtime(e) => e.kind(),
            VecrtError::Config(_) => "ConfigError",
            VecrtError::Logging(_) => "LoggingError",
            VecrtError::AlreadyInitialized => "AlreadyInitialized",
        };
        let message = match self {
            VecrtError::Runtime(e) => e.to_string(),
            VecrtError::Config(e) => e.to_string(),
            VecrtError::Logging(msg) => msg.clone(),
            VecrtError::AlreadyInitialized => "config already initialized".to_string(),
        };
        ErrorReport {
            phase: self.phase(),
            error_kind,
            message,
            argument: self.argument(),
        }
    }
}

/// 结构化错误报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: runtime, config, logging
    pub phase: &'static str,
    /// 错误类型（可用于程序化处理）
    pub error_kind: &'static str,
    /// 人类可读的错误消息
    pub message: String,
    /// 出错的参数位置（1-based，如果有）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<usize>,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.argument {
            Some(pos) => write!(
                f,
                "[{} #{}] {}: {}",
                self.phase, pos, self.error_kind, self.message
            ),
            None => write!(f, "[{}] {}: {}", self.phase, self.error_kind, self.message),
        }
    }
}

impl ErrorReport {
    /// 转换为 JSON 格式
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// 简洁格式（适合终端）
    pub fn to_short(&self) -> String {
        format!("{}: {}", self.phase, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argument_error() -> VecrtError {
        VecrtError::Runtime(RuntimeError::ArgumentType {
            position: 2,
            function: "dot3".to_string(),
            message: "expected vector, got number".to_string(),
        })
    }

    #[test]
    fn test_runtime_error_report() {
        let report = argument_error().to_report();
        assert_eq!(report.phase, "runtime");
        assert_eq!(report.error_kind, "ArgumentTypeError");
        assert_eq!(report.argument, Some(2));
        assert_eq!(
            report.message,
            "invalid argument #2 to 'dot3' (expected vector, got number)"
        );
    }

    #[test]
    fn test_index_error_has_no_argument() {
        let err = VecrtError::from(RuntimeError::Index {
            type_name: "vector",
            key: "w".to_string(),
        });
        assert_eq!(err.argument(), None);
        assert_eq!(err.to_string(), "attempt to index vector with 'w'");
        assert_eq!(err.to_report().error_kind, "IndexError");
    }

    #[test]
    fn test_config_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = VecrtError::from(parse);
        assert_eq!(err.phase(), "config");
        assert!(err.to_string().starts_with("Config error: "));
        assert_eq!(err.to_report().error_kind, "ConfigError");
    }

    #[test]
    fn test_report_display() {
        let report = argument_error().to_report();
        let display = report.to_string();
        assert!(display.starts_with("[runtime #2] ArgumentTypeError: "));

        let report = VecrtError::Logging("no subscriber".to_string()).to_report();
        assert_eq!(report.to_string(), "[logging] LoggingError: no subscriber");
        assert_eq!(report.to_short(), "logging: no subscriber");
    }

    #[test]
    fn test_report_to_json() {
        let json = argument_error().to_report().to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["phase"], "runtime");
        assert_eq!(parsed["error_kind"], "ArgumentTypeError");
        assert_eq!(parsed["argument"], 2);

        let json = VecrtError::AlreadyInitialized.to_report().to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.get("argument").is_none());
    }
}
