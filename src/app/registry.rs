use crate::core::FunctionSource;
use crate::domain::ports::ValueFn;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Named value mappers that flow configurations refer to.
#[derive(Clone)]
pub struct FunctionRegistry {
    functions: HashMap<String, ValueFn>,
}

impl FunctionRegistry {
    pub fn empty() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Registry preloaded with the built-in mappers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry
            .register("identity", |v| v.clone())
            .register("null", |_| Value::Null)
            .register("double", |v| scale(v, 2))
            .register("negate", negate)
            .register("increment", |v| offset(v, 1))
            .register("to_string", |v| match v {
                Value::String(s) => Value::String(s.clone()),
                other => Value::String(other.to_string()),
            })
            .register("length", length)
            .register("uppercase", |v| match v {
                Value::String(s) => Value::String(s.to_uppercase()),
                other => other.clone(),
            });
        registry
    }

    pub fn register<N, F>(&mut self, name: N, function: F) -> &mut Self
    where
        N: Into<String>,
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.functions.insert(name.into(), Arc::new(function));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .finish()
    }
}

impl FunctionSource for FunctionRegistry {
    fn lookup(&self, name: &str) -> Option<ValueFn> {
        self.functions.get(name).cloned()
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }
}

fn scale(value: &Value, factor: i64) -> Value {
    if let Some(n) = value.as_i64() {
        n.checked_mul(factor).map(Value::from).unwrap_or(Value::Null)
    } else if let Some(f) = value.as_f64() {
        Value::from(f * factor as f64)
    } else {
        Value::Null
    }
}

fn offset(value: &Value, delta: i64) -> Value {
    if let Some(n) = value.as_i64() {
        n.checked_add(delta).map(Value::from).unwrap_or(Value::Null)
    } else if let Some(f) = value.as_f64() {
        Value::from(f + delta as f64)
    } else {
        Value::Null
    }
}

fn negate(value: &Value) -> Value {
    match value {
        Value::Bool(b) => Value::Bool(!b),
        other => scale(other, -1),
    }
}

fn length(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::from(s.chars().count()),
        Value::Array(items) => Value::from(items.len()),
        Value::Object(map) => Value::from(map.len()),
        _ => Value::Null,
    }
}
