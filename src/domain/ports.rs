use crate::utils::error::Result;
use std::sync::Arc;

/// A named mapping over JSON values.
pub type ValueFn = Arc<dyn Fn(&serde_json::Value) -> serde_json::Value + Send + Sync>;

pub trait FunctionSource: Send + Sync {
    /// `None` when nothing is registered under `name`.
    fn lookup(&self, name: &str) -> Option<ValueFn>;
    fn names(&self) -> Vec<String>;
}

pub trait ReportSink: Send + Sync {
    fn write_report(&self, rendered: &str) -> Result<()>;
}
