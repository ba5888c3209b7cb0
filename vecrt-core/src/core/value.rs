//! 宿主值表示（Core 层）
//!
//! 标签联合：向量与数字、字符串一样是内联的原始类型，
//! 表和函数通过 `Arc` 共享。

use std::fmt;
use std::sync::Arc;

use super::number::{format_number, parse_number};
use super::object::{NativeFunction, Table};
use super::vector::Vec3;

/// 值的种类标签（用于按种类查找元表以及类型名）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Nil,
    Boolean,
    Number,
    Vector,
    String,
    Function,
    Table,
}

impl ValueKind {
    /// 基础类型名
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Nil => "nil",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::Vector => "vector",
            ValueKind::String => "string",
            ValueKind::Function => "function",
            ValueKind::Table => "table",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 宿主值
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Nil,
    Boolean(bool),
    Number(f64),
    Vector(Vec3),
    String(Arc<str>),
    Function(Arc<NativeFunction>),
    Table(Arc<Table>),
}

impl Value {
    // ==================== 构造方法 ====================

    #[inline]
    pub fn vector(x: f32, y: f32, z: f32) -> Self {
        Value::Vector(Vec3::new(x, y, z))
    }

    pub fn function(f: NativeFunction) -> Self {
        Value::Function(Arc::new(f))
    }

    pub fn table(t: Table) -> Self {
        Value::Table(Arc::new(t))
    }

    // ==================== 类型判断 ====================

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Nil => ValueKind::Nil,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::Vector(_) => ValueKind::Vector,
            Value::String(_) => ValueKind::String,
            Value::Function(_) => ValueKind::Function,
            Value::Table(_) => ValueKind::Table,
        }
    }

    /// 基础类型名（不查询 `__type`）
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// 只有 nil 和 false 为假
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Boolean(false))
    }

    // ==================== 取值 ====================

    #[inline]
    pub fn as_vector(&self) -> Option<Vec3> {
        match self {
            Value::Vector(v) => Some(*v),
            _ => None,
        }
    }

    /// 严格取数字（不做字符串转换）
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// 宿主数字强制转换：数字本身，或可解析为数字的字符串
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::String(s) => parse_number(s),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }
}

/// 函数和表按引用比较，其余按值比较
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Vector(a), Value::Vector(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(a, b),
            (Value::Table(a), Value::Table(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Vector(v) => write!(f, "vector({v})"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Function(func) => write!(f, "function({})", func.name),
            Value::Table(t) => write!(f, "table({} fields)", t.len()),
        }
    }
}

/// 默认渲染（不经过 `__tostring`）
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Vector(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Function(func) => write!(f, "function: builtin: {}", func.name),
            Value::Table(t) => write!(f, "table: {:p}", Arc::as_ptr(t)),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self {
        Value::Vector(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}
