//! 参数绑定与类型强制转换
//!
//! 原生函数通过 `Args` 读取参数。位置从 1 开始，所有错误都带上出错的参数位置。

use std::borrow::Cow;

use crate::core::{format_number, RuntimeError, Value, Vec3};

/// 一次原生调用的参数视图
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    /// 被调用函数名（用于错误信息）
    function: &'a str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub fn new(function: &'a str, values: &'a [Value]) -> Self {
        Self { function, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 第 pos 个参数，不存在时为 None
    #[inline]
    pub fn get(&self, pos: usize) -> Option<&'a Value> {
        pos.checked_sub(1).and_then(|i| self.values.get(i))
    }

    /// 参数缺失或为 nil
    pub fn is_none_or_nil(&self, pos: usize) -> bool {
        self.get(pos).map_or(true, Value::is_nil)
    }

    // ==================== 错误构造 ====================

    /// 带位置的参数错误
    pub fn arg_error(&self, pos: usize, message: impl Into<String>) -> RuntimeError {
        RuntimeError::ArgumentType {
            position: pos,
            function: self.function.to_string(),
            message: message.into(),
        }
    }

    /// `expected <kind>, got <kind>` 形式的类型错误
    pub fn type_error(&self, pos: usize, expected: &str) -> RuntimeError {
        let got = self.get(pos).map_or("no value", Value::type_name);
        self.arg_error(pos, format!("expected {expected}, got {got}"))
    }

    // ==================== 向量 ====================

    pub fn to_vector(&self, pos: usize) -> Option<Vec3> {
        self.get(pos).and_then(Value::as_vector)
    }

    pub fn check_vector(&self, pos: usize) -> Result<Vec3, RuntimeError> {
        self.to_vector(pos).ok_or_else(|| self.type_error(pos, "vector"))
    }

    // ==================== 数字 ====================

    /// 按宿主规则转换为数字（数字或数字字符串）
    pub fn to_number(&self, pos: usize) -> Option<f64> {
        self.get(pos).and_then(Value::to_number)
    }

    pub fn check_number(&self, pos: usize) -> Result<f64, RuntimeError> {
        self.to_number(pos).ok_or_else(|| self.type_error(pos, "number"))
    }

    /// 可选数字参数：缺失或 nil 时取默认值
    pub fn opt_number(&self, pos: usize, default: f64) -> Result<f64, RuntimeError> {
        if self.is_none_or_nil(pos) {
            Ok(default)
        } else {
            self.check_number(pos)
        }
    }

    // ==================== 其他 ====================

    /// 字符串参数；数字按宿主数字格式转换为字符串
    pub fn check_string(&self, pos: usize) -> Result<Cow<'a, str>, RuntimeError> {
        match self.get(pos) {
            Some(Value::String(s)) => Ok(Cow::Borrowed(&**s)),
            Some(Value::Number(n)) => Ok(Cow::Owned(format_number(*n))),
            _ => Err(self.type_error(pos, "string")),
        }
    }

    /// 任意值参数（nil 也可以，但必须存在）
    pub fn check_any(&self, pos: usize) -> Result<&'a Value, RuntimeError> {
        self.get(pos).ok_or_else(|| self.type_error(pos, "value"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_are_one_based() {
        let values = [Value::from(1.0), Value::from("two")];
        let args = Args::new("f", &values);
        assert_eq!(args.len(), 2);
        assert_eq!(args.get(0), None);
        assert_eq!(args.get(1), Some(&Value::from(1.0)));
        assert_eq!(args.get(2), Some(&Value::from("two")));
        assert_eq!(args.get(3), None);
    }

    #[test]
    fn test_opt_number() {
        let values = [Value::from(2.0), Value::Nil, Value::from("4"), Value::from(true)];
        let args = Args::new("f", &values);
        assert_eq!(args.opt_number(1, 0.0), Ok(2.0));
        assert_eq!(args.opt_number(2, 7.0), Ok(7.0));
        assert_eq!(args.opt_number(3, 0.0), Ok(4.0));
        assert_eq!(args.opt_number(5, 9.0), Ok(9.0));

        let err = args.opt_number(4, 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument #4 to 'f' (expected number, got boolean)"
        );
    }

    #[test]
    fn test_check_vector() {
        let values = [Value::vector(1.0, 2.0, 3.0), Value::from(5.0)];
        let args = Args::new("dot3", &values);
        assert_eq!(args.check_vector(1), Ok(Vec3::new(1.0, 2.0, 3.0)));

        let err = args.check_vector(2).unwrap_err();
        assert_eq!(err.argument_position(), Some(2));
        assert_eq!(
            err.to_string(),
            "invalid argument #2 to 'dot3' (expected vector, got number)"
        );

        let err = args.check_vector(3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument #3 to 'dot3' (expected vector, got no value)"
        );
    }

    #[test]
    fn test_check_string_accepts_numbers() {
        let values = [Value::from("x"), Value::from(1.0), Value::Nil];
        let args = Args::new("__index", &values);
        assert_eq!(args.check_string(1).unwrap(), "x");
        assert_eq!(args.check_string(2).unwrap(), "1");
        assert!(args.check_string(3).is_err());
    }

    #[test]
    fn test_check_any() {
        let values = [Value::Nil];
        let args = Args::new("type", &values);
        assert_eq!(args.check_any(1), Ok(&Value::Nil));
        assert_eq!(
            args.check_any(2).unwrap_err().to_string(),
            "invalid argument #2 to 'type' (expected value, got no value)"
        );
    }
}
