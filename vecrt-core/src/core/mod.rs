//! Core 模块 - Vecrt 运行时核心类型定义
//!
//! 本模块包含所有核心类型的纯定义，不依赖执行逻辑：
//! - Core 层：类型定义（本模块）
//! - Runtime 层：分派、参数绑定、标准库（runtime/ 目录）
//! - API 层：对外接口（vecrt-api）

// ==================== 基础类型 ====================

/// 值类型
pub mod value;
pub use value::{Value, ValueKind};

/// 三分量向量
pub mod vector;
pub use vector::Vec3;

/// 数字格式与转换
pub mod number;
pub use number::{format_number, parse_number};

// ==================== 对象类型 ====================

/// 表与原生函数
pub mod object;
pub use object::{NativeFn, NativeFunction, NativeKind, NativeRtFn, Table};

// ==================== 元表 ====================

/// 元事件与元表
pub mod metatable;
pub use metatable::{ArithOp, Event, Metatable, MetatableBuilder};

// ==================== 错误 ====================

/// 错误类型
pub mod error;
pub use error::RuntimeError;
