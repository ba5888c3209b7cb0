//! Vecrt Core - 值模型、三分量向量与元表分派（纯逻辑，无 IO）
//!
//! 向量是不可变的值类型，按值存放在 `Value` 中。运算符、字段访问和字符串
//! 转换由按种类共享的只读元表处理；向量元表在进程内只构建一次。
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod core;
pub mod runtime;

// Re-export common types
pub use crate::core::{ArithOp, Event, Metatable, RuntimeError, Value, ValueKind, Vec3};
pub use runtime::stdlib::veclib::{open_vec, vector_metatable};
pub use runtime::{Args, Runtime};

// Re-export config types from vecrt-config
pub use vecrt_config::{LibConfig, Phase};
