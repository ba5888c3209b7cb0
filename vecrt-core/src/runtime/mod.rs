//! Vecrt 运行时 (Runtime 层)
//!
//! 本模块为 core 层类型提供执行逻辑：
//! - `Args` 参数检查
//! - `Runtime` 全局变量、元表与运算符分派
//! - 标准库

/// 参数检查
pub mod args;

/// 运行时状态与分派
pub mod state;

/// 标准库
pub mod stdlib;

pub use args::Args;
pub use state::Runtime;
