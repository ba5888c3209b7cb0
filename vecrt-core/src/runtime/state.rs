//! 宿主运行时状态与通用分派
//!
//! 数字走内建路径；其他种类按值的种类查找元表，把运算委托给元方法。
//! 元表按种类共享（向量、数字等原始类型没有实例级元表）。

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use vecrt_config::LibConfig;

use super::args::Args;
use super::stdlib;
use crate::core::{
    ArithOp, Event, Metatable, NativeFn, NativeFunction, NativeKind, RuntimeError, Table, Value,
    ValueKind,
};

/// 宿主运行时
#[derive(Debug, Default)]
pub struct Runtime {
    /// 全局变量
    globals: HashMap<String, Value>,
    /// 按种类共享的元表
    metatables: HashMap<ValueKind, Arc<Metatable>>,
}

impl Runtime {
    /// 创建空运行时（不打开任何库）
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建运行时并按配置打开标准库
    pub fn with_libs(config: &LibConfig) -> Self {
        let mut rt = Self::new();
        stdlib::open_libs(&mut rt, config);
        rt
    }

    // ==================== 全局变量 ====================

    pub fn set_global(&mut self, name: impl Into<String>, value: Value) {
        self.globals.insert(name.into(), value);
    }

    /// 读取全局变量，未定义为 nil
    pub fn global(&self, name: &str) -> Value {
        self.globals.get(name).cloned().unwrap_or_default()
    }

    /// 在全局名 `name` 下注册函数表
    ///
    /// 已存在同名表时在其基础上追加，返回注册后的表。
    pub fn register_library(&mut self, name: &str, functions: &[(&str, NativeFn)]) -> Value {
        let mut table = match self.globals.get(name) {
            Some(Value::Table(existing)) => (**existing).clone(),
            _ => Table::with_capacity(functions.len()),
        };
        for &(fname, func) in functions {
            table.insert(fname, Value::function(NativeFunction::new(fname, func)));
        }

        let library = Value::table(table);
        self.globals.insert(name.to_string(), library.clone());
        debug!(
            target: "vecrt::install",
            library = name,
            functions = functions.len(),
            "library registered"
        );
        library
    }

    // ==================== 元表 ====================

    /// 为值所属的种类设置元表
    ///
    /// 同一种类的所有值（包括之后创建的）都通过这张表解析运算符。
    pub fn set_metatable(&mut self, value: &Value, metatable: Arc<Metatable>) {
        let kind = value.kind();
        debug!(
            target: "vecrt::install",
            kind = %kind,
            type_name = metatable.type_name().unwrap_or(""),
            events = metatable.len(),
            "metatable installed"
        );
        self.metatables.insert(kind, metatable);
    }

    pub fn metatable(&self, value: &Value) -> Option<&Arc<Metatable>> {
        self.metatables.get(&value.kind())
    }

    fn metamethod(&self, value: &Value, event: Event) -> Option<&Arc<NativeFunction>> {
        self.metatable(value).and_then(|mt| mt.handler(event))
    }

    /// 类型名，优先使用元表的 `__type`
    pub fn type_of(&self, value: &Value) -> &str {
        self.metatable(value)
            .and_then(|mt| mt.type_name())
            .unwrap_or_else(|| value.type_name())
    }

    // ==================== 调用 ====================

    /// 调用函数值
    pub fn call(&self, function: &Value, args: &[Value]) -> Result<Value, RuntimeError> {
        match function {
            Value::Function(native) => self.invoke(native, args),
            other => Err(RuntimeError::NotCallable {
                type_name: other.type_name(),
            }),
        }
    }

    /// 按点分路径调用，例如 `vec.float3`
    pub fn call_path(&self, path: &str, args: &[Value]) -> Result<Value, RuntimeError> {
        let mut segments = path.split('.');
        let head = segments.next().unwrap_or_default();
        let mut target = self
            .globals
            .get(head)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedGlobal(head.to_string()))?;
        for segment in segments {
            target = self.index(&target, &Value::from(segment))?;
        }
        self.call(&target, args)
    }

    fn invoke(&self, native: &NativeFunction, args: &[Value]) -> Result<Value, RuntimeError> {
        trace!(target: "vecrt::call", function = %native.name, argc = args.len(), "native call");
        let args = Args::new(&native.name, args);
        match native.kind {
            NativeKind::Plain(func) => func(&args),
            NativeKind::RuntimeAware(func) => func(self, &args),
        }
    }

    fn dispatch(
        &self,
        event: Event,
        handler: &NativeFunction,
        args: &[Value],
    ) -> Result<Value, RuntimeError> {
        trace!(target: "vecrt::dispatch", event = %event, "metatable dispatch");
        self.invoke(handler, args)
    }

    // ==================== 运算符 ====================

    /// 二元算术
    ///
    /// 两个操作数都能转换为数字时走内建路径；否则依次尝试左、右操作数的元方法，
    /// 元方法总是以 (a, b) 的原始顺序接收参数。
    pub fn arith(&self, op: ArithOp, a: &Value, b: &Value) -> Result<Value, RuntimeError> {
        if let (Some(x), Some(y)) = (a.to_number(), b.to_number()) {
            return Ok(Value::Number(op.apply(x, y)));
        }

        let event = op.event();
        let handler = self
            .metamethod(a, event)
            .or_else(|| self.metamethod(b, event));
        match handler {
            Some(handler) => self.dispatch(event, handler, &[a.clone(), b.clone()]),
            None => Err(self.arith_error(op.name(), a, Some(b))),
        }
    }

    /// 一元负号（元方法收到 (a, a)）
    pub fn unm(&self, a: &Value) -> Result<Value, RuntimeError> {
        if let Some(n) = a.to_number() {
            return Ok(Value::Number(-n));
        }
        match self.metamethod(a, Event::Unm) {
            Some(handler) => self.dispatch(Event::Unm, handler, &[a.clone(), a.clone()]),
            None => Err(self.arith_error("unm", a, None)),
        }
    }

    fn arith_error(&self, op: &'static str, a: &Value, b: Option<&Value>) -> RuntimeError {
        let left = self.type_of(a);
        let operands = match b.map(|b| self.type_of(b)) {
            Some(right) if right != left => format!("{left} and {right}"),
            _ => left.to_string(),
        };
        RuntimeError::Arithmetic { op, operands }
    }

    /// 索引 `obj[key]`
    ///
    /// 表先做原始查找；未命中或非表值再走 `__index`。
    pub fn index(&self, obj: &Value, key: &Value) -> Result<Value, RuntimeError> {
        if let Value::Table(table) = obj {
            if let Some(found) = key.as_str().and_then(|k| table.get(k)) {
                return Ok(found.clone());
            }
        }

        match self.metamethod(obj, Event::Index) {
            Some(handler) => self.dispatch(Event::Index, handler, &[obj.clone(), key.clone()]),
            None if matches!(obj, Value::Table(_)) => Ok(Value::Nil),
            None => Err(RuntimeError::Index {
                type_name: obj.type_name(),
                key: key.to_string(),
            }),
        }
    }

    /// 字段访问的便捷形式 `obj.name`
    pub fn field(&self, obj: &Value, name: &str) -> Result<Value, RuntimeError> {
        self.index(obj, &Value::from(name))
    }

    /// 字符串转换，优先使用 `__tostring`
    pub fn tostring(&self, value: &Value) -> Result<String, RuntimeError> {
        match self.metamethod(value, Event::ToString) {
            Some(handler) => match self.dispatch(Event::ToString, handler, &[value.clone()])? {
                Value::String(s) => Ok(s.to_string()),
                _ => Err(RuntimeError::BadToString),
            },
            None => Ok(value.to_string()),
        }
    }
}
