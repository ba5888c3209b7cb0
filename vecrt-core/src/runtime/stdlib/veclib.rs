//! 向量库
//!
//! - 自由函数 `float3` / `dot3` / `cross3` / `normalize3`，注册在函数命名空间下
//! - 向量元表：`__index` / `__tostring` / `__add` / `__sub` / `__mul` / `__unm` 以及
//!   `__type = "vector"`，进程内只构建一次，所有运行时共享同一个 `Arc`

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::core::{Event, Metatable, NativeFn, RuntimeError, Value, Vec3};
use crate::runtime::args::Args;
use crate::runtime::state::Runtime;

/// `__type` 标签
pub const VECTOR_TYPE_NAME: &str = "vector";

/// 默认命名空间
pub const DEFAULT_NAMESPACE: &str = "vec";

/// 自由函数表
const VECLIB: &[(&str, NativeFn)] = &[
    ("float3", vec_float3),
    ("dot3", vec_dot3),
    ("cross3", vec_cross3),
    ("normalize3", vec_normalize3),
];

/// 共享的向量元表，首次使用时构建，之后只读
static VECTOR_METATABLE: Lazy<Arc<Metatable>> = Lazy::new(|| {
    Arc::new(
        Metatable::builder()
            .type_name(VECTOR_TYPE_NAME)
            .handler(Event::Index, vec_index)
            .handler(Event::ToString, vec_tostring)
            .handler(Event::Add, vec_add)
            .handler(Event::Sub, vec_sub)
            .handler(Event::Mul, vec_mul)
            .handler(Event::Unm, vec_unm)
            .build(),
    )
});

/// 向量元表的共享引用
pub fn vector_metatable() -> Arc<Metatable> {
    Arc::clone(&VECTOR_METATABLE)
}

/// 打开向量库
///
/// 在 `namespace` 下注册自由函数，并把共享元表挂到向量种类上。
/// 返回函数表。
pub fn open_vec(rt: &mut Runtime, namespace: &str) -> Value {
    let library = rt.register_library(namespace, VECLIB);
    rt.set_metatable(&Value::Vector(Vec3::ZERO), vector_metatable());
    library
}

// ===== 自由函数 =====

fn vec_float3(args: &Args<'_>) -> Result<Value, RuntimeError> {
    let x = args.opt_number(1, 0.0)? as f32;
    let y = args.opt_number(2, 0.0)? as f32;
    let z = args.opt_number(3, 0.0)? as f32;
    Ok(Value::vector(x, y, z))
}

fn vec_dot3(args: &Args<'_>) -> Result<Value, RuntimeError> {
    let a = args.check_vector(1)?;
    let b = args.check_vector(2)?;
    Ok(Value::Number(a.dot(b) as f64))
}

fn vec_cross3(args: &Args<'_>) -> Result<Value, RuntimeError> {
    let a = args.check_vector(1)?;
    let b = args.check_vector(2)?;
    Ok(Value::Vector(a.cross(b)))
}

fn vec_normalize3(args: &Args<'_>) -> Result<Value, RuntimeError> {
    let v = args.check_vector(1)?;
    Ok(Value::Vector(v.normalize()))
}

// ===== 元方法 =====

fn vec_index(args: &Args<'_>) -> Result<Value, RuntimeError> {
    let v = args.check_vector(1)?;
    let key = args.check_string(2)?;
    match v.component(&key) {
        Some(c) => Ok(Value::Number(c as f64)),
        None => Err(RuntimeError::Index {
            type_name: VECTOR_TYPE_NAME,
            key: key.into_owned(),
        }),
    }
}

fn vec_tostring(args: &Args<'_>) -> Result<Value, RuntimeError> {
    let v = args.check_vector(1)?;
    Ok(Value::from(v.to_string()))
}

fn vec_add(args: &Args<'_>) -> Result<Value, RuntimeError> {
    let a = args.check_vector(1)?;
    let b = args.check_vector(2)?;
    Ok(Value::Vector(a + b))
}

fn vec_sub(args: &Args<'_>) -> Result<Value, RuntimeError> {
    let a = args.check_vector(1)?;
    let b = args.check_vector(2)?;
    Ok(Value::Vector(a - b))
}

/// `__mul` 的操作数分类
#[derive(Debug, Clone, Copy, PartialEq)]
enum MulOperand {
    Vector(Vec3),
    Number(f32),
    Other,
}

impl MulOperand {
    fn classify(args: &Args<'_>, pos: usize) -> Self {
        if let Some(v) = args.to_vector(pos) {
            MulOperand::Vector(v)
        } else if let Some(n) = args.to_number(pos) {
            MulOperand::Number(n as f32)
        } else {
            MulOperand::Other
        }
    }
}

/// 向量×向量 → 向量×数字 → 数字×向量，其余情况报第 2 个参数错误
fn vec_mul(args: &Args<'_>) -> Result<Value, RuntimeError> {
    match (MulOperand::classify(args, 1), MulOperand::classify(args, 2)) {
        (MulOperand::Vector(a), MulOperand::Vector(b)) => Ok(Value::Vector(a * b)),
        (MulOperand::Vector(a), MulOperand::Number(s)) => Ok(Value::Vector(a * s)),
        (MulOperand::Number(s), MulOperand::Vector(b)) => Ok(Value::Vector(s * b)),
        _ => Err(args.arg_error(2, "expected vector or number")),
    }
}

fn vec_unm(args: &Args<'_>) -> Result<Value, RuntimeError> {
    let v = args.check_vector(1)?;
    Ok(Value::Vector(-v))
}
