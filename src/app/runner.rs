use crate::config::flow_config::{FlowConfig, MismatchPolicy, SingleConfig};
use crate::core::counted::SeqCounter;
use crate::core::single::ApplyOrTakeAction;
use crate::core::{FunctionSource, RunReport, SingleOutcome};
use crate::utils::error::{FlowError, Result};
use serde_json::Value;

/// Runs a configured flow over JSON input values.
pub struct FlowRunner<R: FunctionSource> {
    config: FlowConfig,
    functions: R,
}

impl<R: FunctionSource> FlowRunner<R> {
    pub fn new(config: FlowConfig, functions: R) -> Self {
        Self { config, functions }
    }

    pub fn run(&self, input: Vec<Value>) -> Result<RunReport> {
        let name = self.config.flow.name.clone();
        let branch = &self.config.branch;
        let predicate = branch.predicate;

        let results = input
            .into_iter()
            .counted()
            .inspect_count(|count| tracing::info!("🔢 {}: collected {} values", name, count))
            .try_size_satisfies(
                predicate.map(|p| p.into_fn()),
                self.mapper(branch.then.as_deref()),
            )?
            .try_or_else(self.mapper(branch.otherwise.as_deref()))?;

        tracing::info!(
            "🔀 {}: {} branch applied to {} values",
            name,
            results.branch(),
            results.len()
        );

        let single = match &self.config.single {
            Some(single) => Some(self.run_single(single, results.original())?),
            None => None,
        };

        let predicate = predicate.map(|p| p.to_string()).unwrap_or_default();
        Ok(RunReport::new(name, predicate, results, single))
    }

    fn run_single(&self, single: &SingleConfig, values: &[Value]) -> Result<SingleOutcome> {
        let target = ApplyOrTakeAction::try_apply(self.mapper(single.apply.as_deref()))?
            .if_single_element(values.iter().cloned());
        let matched = target.is_single();
        let count = target.count();

        let value = match single.mismatch_policy() {
            MismatchPolicy::Fallback => {
                let fallback = single.fallback.clone().map(|value| move || value.clone());
                target.try_or_else(fallback)?
            }
            MismatchPolicy::Fail => target.or_throw(|| FlowError::FallbackError {
                message: format!("expected exactly one element, got {}", count),
            })?,
        };

        tracing::debug!(matched, count, "single-element guard resolved");
        Ok(SingleOutcome { matched, value })
    }

    /// Resolves a configured function name; absent or unknown names yield `None`.
    fn mapper(&self, name: Option<&str>) -> Option<impl Fn(&Value) -> Value> {
        let function = name.and_then(|n| {
            let found = self.functions.lookup(n);
            if found.is_none() {
                tracing::warn!("No function registered under '{}'", n);
            }
            found
        })?;
        Some(move |value: &Value| (*function)(value))
    }
}
