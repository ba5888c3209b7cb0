//! 引用类型对象定义：表与原生函数

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::error::RuntimeError;
use super::value::Value;
use crate::runtime::args::Args;
use crate::runtime::state::Runtime;

/// 原生函数指针类型
pub type NativeFn = fn(&Args<'_>) -> Result<Value, RuntimeError>;

/// Runtime-aware 原生函数指针类型（需要查询元表等宿主状态）
pub type NativeRtFn = fn(&Runtime, &Args<'_>) -> Result<Value, RuntimeError>;

/// 原生函数实体
#[derive(Clone, Copy)]
pub enum NativeKind {
    Plain(NativeFn),
    RuntimeAware(NativeRtFn),
}

/// 原生函数对象
pub struct NativeFunction {
    /// 函数名（用于错误信息）
    pub name: String,
    pub kind: NativeKind,
}

impl NativeFunction {
    pub fn new(name: impl Into<String>, func: NativeFn) -> Self {
        Self {
            name: name.into(),
            kind: NativeKind::Plain(func),
        }
    }

    pub fn runtime_aware(name: impl Into<String>, func: NativeRtFn) -> Self {
        Self {
            name: name.into(),
            kind: NativeKind::RuntimeAware(func),
        }
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            NativeKind::Plain(_) => "plain",
            NativeKind::RuntimeAware(_) => "runtime",
        };
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("kind", &kind)
            .finish()
    }
}

/// 字符串键的表（库命名空间）
///
/// 表在放入 `Value` 之前构建完毕，共享后不再修改。
#[derive(Debug, Clone, Default)]
pub struct Table {
    fields: HashMap<Arc<str>, Value>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: HashMap::with_capacity(capacity),
        }
    }

    /// 读取字段
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// 写入字段，返回旧值
    pub fn insert(&mut self, key: impl Into<Arc<str>>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// 字段名（无序）
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(_args: &Args<'_>) -> Result<Value, RuntimeError> {
        Ok(Value::Number(42.0))
    }

    #[test]
    fn test_table_insert_get() {
        let mut table = Table::new();
        assert!(table.is_empty());
        assert!(table.insert("a", Value::Number(1.0)).is_none());
        let old = table.insert("a", Value::Number(2.0));
        assert_eq!(old, Some(Value::Number(1.0)));
        assert_eq!(table.get("a"), Some(&Value::Number(2.0)));
        assert_eq!(table.get("b"), None);
        assert_eq!(table.len(), 1);
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_native_function_debug() {
        let f = NativeFunction::new("answer", answer);
        let debug_str = format!("{f:?}");
        assert!(debug_str.contains("answer"));
        assert!(debug_str.contains("plain"));
    }
}
