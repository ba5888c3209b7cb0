//! 错误类型 (Core 层)
//!
//! 错误在检测点构造，通过 `Result` 中止当前宿主调用，库内部不捕获也不重试。

use thiserror::Error;

/// 统一的运行时错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// 参数类型错误，position 从 1 开始
    #[error("invalid argument #{position} to '{function}' ({message})")]
    ArgumentType {
        position: usize,
        function: String,
        message: String,
    },

    /// 非法索引键，key 原样回显
    #[error("attempt to index {type_name} with '{key}'")]
    Index { type_name: &'static str, key: String },

    /// 没有可用的算术实现（内建或元方法）
    #[error("attempt to perform arithmetic ({op}) on {operands}")]
    Arithmetic { op: &'static str, operands: String },

    /// 调用了非函数值
    #[error("attempt to call a {type_name} value")]
    NotCallable { type_name: &'static str },

    /// `__tostring` 返回了非字符串
    #[error("'__tostring' must return a string")]
    BadToString,

    /// 未定义的全局名
    #[error("undefined global '{0}'")]
    UndefinedGlobal(String),
}

impl RuntimeError {
    /// 出错的参数位置（仅 ArgumentType 有）
    pub fn argument_position(&self) -> Option<usize> {
        match self {
            RuntimeError::ArgumentType { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// 错误种类名（用于程序化处理和结构化报告）
    pub fn kind(&self) -> &'static str {
        match self {
            RuntimeError::ArgumentType { .. } => "ArgumentTypeError",
            RuntimeError::Index { .. } => "IndexError",
            RuntimeError::Arithmetic { .. } => "ArithmeticError",
            RuntimeError::NotCallable { .. } => "CallError",
            RuntimeError::BadToString => "ToStringError",
            RuntimeError::UndefinedGlobal(_) => "UndefinedGlobal",
        }
    }
}
