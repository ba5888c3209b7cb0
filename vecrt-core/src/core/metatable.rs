//! 元表定义
//!
//! 定义宿主可委托的元事件，以及按种类共享的只读元表。

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::object::{NativeFn, NativeFunction};
use super::value::Value;

/// 可委托给元表的事件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    // ===== 二元算术 =====
    /// 加法: `a + b`
    Add,
    /// 减法: `a - b`
    Sub,
    /// 乘法: `a * b`
    Mul,
    /// 除法: `a / b`
    Div,
    /// 取模: `a % b`
    Mod,

    // ===== 一元 =====
    /// 一元负号: `-a`
    Unm,

    // ===== 访问与转换 =====
    /// 字段读取: `a.k`
    Index,
    /// 字符串转换: `tostring(a)`
    ToString,
}

impl Event {
    /// 元方法名
    pub fn method_name(&self) -> &'static str {
        match self {
            Event::Add => "__add",
            Event::Sub => "__sub",
            Event::Mul => "__mul",
            Event::Div => "__div",
            Event::Mod => "__mod",
            Event::Unm => "__unm",
            Event::Index => "__index",
            Event::ToString => "__tostring",
        }
    }

    /// 从元方法名解析事件
    pub fn from_method_name(name: &str) -> Option<Self> {
        match name {
            "__add" => Some(Event::Add),
            "__sub" => Some(Event::Sub),
            "__mul" => Some(Event::Mul),
            "__div" => Some(Event::Div),
            "__mod" => Some(Event::Mod),
            "__unm" => Some(Event::Unm),
            "__index" => Some(Event::Index),
            "__tostring" => Some(Event::ToString),
            _ => None,
        }
    }
}

/// 二元算术运算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl ArithOp {
    /// 对应的元事件
    pub fn event(&self) -> Event {
        match self {
            ArithOp::Add => Event::Add,
            ArithOp::Sub => Event::Sub,
            ArithOp::Mul => Event::Mul,
            ArithOp::Div => Event::Div,
            ArithOp::Mod => Event::Mod,
        }
    }

    /// 错误信息中的运算名（`attempt to perform arithmetic (add) ...`）
    pub fn name(&self) -> &'static str {
        match self {
            ArithOp::Add => "add",
            ArithOp::Sub => "sub",
            ArithOp::Mul => "mul",
            ArithOp::Div => "div",
            ArithOp::Mod => "mod",
        }
    }

    /// 内建数字运算；除零遵循浮点语义，取模向下取整
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            ArithOp::Add => a + b,
            ArithOp::Sub => a - b,
            ArithOp::Mul => a * b,
            ArithOp::Div => a / b,
            ArithOp::Mod => a - (a / b).floor() * b,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

/// 只读元表
///
/// 由 [`MetatableBuilder`] 一次性构建，之后以 `Arc` 共享，不再修改。
#[derive(Debug)]
pub struct Metatable {
    /// `__type` 标签
    type_name: Option<Arc<str>>,
    handlers: HashMap<Event, Arc<NativeFunction>>,
}

impl Metatable {
    pub fn builder() -> MetatableBuilder {
        MetatableBuilder::default()
    }

    /// 事件处理函数
    pub fn handler(&self, event: Event) -> Option<&Arc<NativeFunction>> {
        self.handlers.get(&event)
    }

    /// `__type` 字段
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// 按字段名读取（脚本视角）：`__type` 返回字符串，元方法返回函数值
    pub fn get(&self, name: &str) -> Value {
        if name == "__type" {
            return match &self.type_name {
                Some(t) => Value::String(t.clone()),
                None => Value::Nil,
            };
        }
        Event::from_method_name(name)
            .and_then(|event| self.handlers.get(&event))
            .map(|f| Value::Function(f.clone()))
            .unwrap_or(Value::Nil)
    }

    /// 已注册的事件数量
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty() && self.type_name.is_none()
    }
}

/// 元表构建器
#[derive(Default)]
pub struct MetatableBuilder {
    type_name: Option<Arc<str>>,
    handlers: HashMap<Event, Arc<NativeFunction>>,
}

impl MetatableBuilder {
    /// 设置 `__type`
    pub fn type_name(mut self, name: &str) -> Self {
        self.type_name = Some(name.into());
        self
    }

    /// 注册事件处理函数，函数名取元方法名
    pub fn handler(mut self, event: Event, func: NativeFn) -> Self {
        let native = NativeFunction::new(event.method_name(), func);
        self.handlers.insert(event, Arc::new(native));
        self
    }

    pub fn build(self) -> Metatable {
        Metatable {
            type_name: self.type_name,
            handlers: self.handlers,
        }
    }
}
