//! 测试辅助工具
//!
//! 提供构造运行时和向量的辅助函数

#![allow(dead_code)]

use vecrt_core::{LibConfig, Runtime, RuntimeError, Value, Vec3};

/// 默认配置的运行时（基础库 + `vec` 命名空间）
pub fn runtime() -> Runtime {
    Runtime::with_libs(&LibConfig::default())
}

/// 调用 `vec.float3`
pub fn float3(rt: &Runtime, x: f64, y: f64, z: f64) -> Value {
    rt.call_path("vec.float3", &[Value::from(x), Value::from(y), Value::from(z)])
        .expect("float3 should accept numbers")
}

/// 取出向量
pub fn unwrap_vector(value: &Value) -> Vec3 {
    value
        .as_vector()
        .unwrap_or_else(|| panic!("expected vector, got {}", value.type_name()))
}

/// 取出数字
pub fn unwrap_number(value: &Value) -> f64 {
    value
        .as_number()
        .unwrap_or_else(|| panic!("expected number, got {}", value.type_name()))
}

/// 近似相等
pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-6
}

/// 断言错误信息
pub fn assert_error_message(result: Result<Value, RuntimeError>, expected: &str) {
    match result {
        Ok(v) => panic!("expected error '{expected}', got value {v}"),
        Err(e) => assert_eq!(e.to_string(), expected),
    }
}
