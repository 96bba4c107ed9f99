use crate::core::branched::{Branch, CounterResults};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairRecord {
    pub index: usize,
    pub original: serde_json::Value,
    pub mapped: serde_json::Value,
}

/// Outcome of the single-element guard for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleOutcome {
    pub matched: bool,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub flow: String,
    pub predicate: String,
    pub count: usize,
    pub branch: Branch,
    pub pairs: Vec<PairRecord>,
    pub single: Option<SingleOutcome>,
    pub generated_at: DateTime<Utc>,
}

impl RunReport {
    pub fn new(
        flow: String,
        predicate: String,
        results: CounterResults<serde_json::Value, serde_json::Value>,
        single: Option<SingleOutcome>,
    ) -> Self {
        let branch = results.branch();
        let pairs: Vec<PairRecord> = results
            .into_pairs()
            .into_iter()
            .enumerate()
            .map(|(index, (original, mapped))| PairRecord {
                index,
                original,
                mapped,
            })
            .collect();

        Self {
            flow,
            predicate,
            count: pairs.len(),
            branch,
            pairs,
            single,
            generated_at: Utc::now(),
        }
    }

    pub fn mapped_values(&self) -> Vec<&serde_json::Value> {
        self.pairs.iter().map(|pair| &pair.mapped).collect()
    }
}
