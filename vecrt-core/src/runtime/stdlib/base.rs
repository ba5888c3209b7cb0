//! 基础库：`type` / `typeof` / `tostring` / `tonumber`
//!
//! 这些函数需要查询元表，因此是 Runtime-aware 原生函数，直接注册为全局变量。

use tracing::debug;

use crate::core::{NativeFunction, NativeRtFn, RuntimeError, Value};
use crate::runtime::args::Args;
use crate::runtime::state::Runtime;

const BASELIB: &[(&str, NativeRtFn)] = &[
    ("type", type_fn),
    ("typeof", typeof_fn),
    ("tostring", tostring_fn),
    ("tonumber", tonumber_fn),
];

/// 打开基础库
pub fn open_base(rt: &mut Runtime) {
    for &(name, func) in BASELIB {
        rt.set_global(name, Value::function(NativeFunction::runtime_aware(name, func)));
    }
    debug!(target: "vecrt::install", functions = BASELIB.len(), "base library registered");
}

/// 基础类型名，不看 `__type`
fn type_fn(_rt: &Runtime, args: &Args<'_>) -> Result<Value, RuntimeError> {
    let value = args.check_any(1)?;
    Ok(Value::from(value.type_name()))
}

fn typeof_fn(rt: &Runtime, args: &Args<'_>) -> Result<Value, RuntimeError> {
    let value = args.check_any(1)?;
    Ok(Value::from(rt.type_of(value)))
}

fn tostring_fn(rt: &Runtime, args: &Args<'_>) -> Result<Value, RuntimeError> {
    let value = args.check_any(1)?;
    Ok(Value::from(rt.tostring(value)?))
}

/// 无法转换时返回 nil
fn tonumber_fn(_rt: &Runtime, args: &Args<'_>) -> Result<Value, RuntimeError> {
    let value = args.check_any(1)?;
    Ok(value.to_number().map_or(Value::Nil, Value::Number))
}
