use crate::core::counted::Counted;
use crate::utils::error::{FlowError, Result};
use serde::Serialize;
use std::fmt;

/// Which of the two mapping functions produced a [`CounterResults`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Then,
    Else,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Then => write!(f, "then"),
            Branch::Else => write!(f, "else"),
        }
    }
}

/// A counted sequence whose branch has already been decided.
///
/// `satisfied` is the predicate's answer at construction time. Nothing
/// re-evaluates it; [`or_else`](Self::or_else) only reads the stored flag.
pub struct BranchedCounter<T, F> {
    counted: Counted<T>,
    satisfied: bool,
    then_fn: F,
}

impl<T, F> BranchedCounter<T, F> {
    pub(crate) fn new<P>(counted: Counted<T>, predicate: P, then_fn: F) -> Self
    where
        P: FnOnce(usize) -> bool,
    {
        let satisfied = predicate(counted.count());
        tracing::debug!(count = counted.count(), satisfied, "branch decision frozen");
        Self {
            counted,
            satisfied,
            then_fn,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.satisfied
    }

    pub fn branch(&self) -> Branch {
        if self.satisfied {
            Branch::Then
        } else {
            Branch::Else
        }
    }

    pub fn count(&self) -> usize {
        self.counted.count()
    }

    /// Maps every element through `then_fn` if the decision holds, otherwise
    /// through `else_fn`. One function covers the whole sequence.
    pub fn or_else<U, G>(self, else_fn: G) -> CounterResults<T, U>
    where
        F: FnMut(&T) -> U,
        G: FnMut(&T) -> U,
    {
        let branch = self.branch();
        let original = self.counted.into_elements();
        let mapped: Vec<U> = match branch {
            Branch::Then => original.iter().map(self.then_fn).collect(),
            Branch::Else => original.iter().map(else_fn).collect(),
        };
        tracing::debug!(count = original.len(), %branch, "counted results materialized");

        CounterResults {
            original,
            mapped,
            branch,
        }
    }

    /// Fallible form of [`or_else`](Self::or_else): mapping stops at the
    /// first `Err`, which is returned unchanged.
    pub fn or_else_try<U, E, G>(self, else_fn: G) -> std::result::Result<CounterResults<T, U>, E>
    where
        F: FnMut(&T) -> std::result::Result<U, E>,
        G: FnMut(&T) -> std::result::Result<U, E>,
    {
        let branch = self.branch();
        let original = self.counted.into_elements();
        let mapped = match branch {
            Branch::Then => original
                .iter()
                .map(self.then_fn)
                .collect::<std::result::Result<Vec<U>, E>>()?,
            Branch::Else => original
                .iter()
                .map(else_fn)
                .collect::<std::result::Result<Vec<U>, E>>()?,
        };

        Ok(CounterResults {
            original,
            mapped,
            branch,
        })
    }

    pub fn try_or_else<U, G>(self, else_fn: Option<G>) -> Result<CounterResults<T, U>>
    where
        F: FnMut(&T) -> U,
        G: FnMut(&T) -> U,
    {
        let else_fn = else_fn.ok_or_else(|| FlowError::invalid_argument("else_fn"))?;
        Ok(self.or_else(else_fn))
    }
}

impl<T: fmt::Debug, F> fmt::Debug for BranchedCounter<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BranchedCounter")
            .field("counted", &self.counted)
            .field("satisfied", &self.satisfied)
            .finish_non_exhaustive()
    }
}

/// The original sequence and one mapped output per element, index-aligned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterResults<T, U> {
    original: Vec<T>,
    mapped: Vec<U>,
    branch: Branch,
}

impl<T, U> CounterResults<T, U> {
    pub fn original(&self) -> &[T] {
        &self.original
    }

    pub fn mapped(&self) -> &[U] {
        &self.mapped
    }

    pub fn branch(&self) -> Branch {
        self.branch
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    pub fn first_mapped(&self) -> Option<&U> {
        self.mapped.first()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&T, &U)> + '_ {
        self.original.iter().zip(self.mapped.iter())
    }

    pub fn into_pairs(self) -> Vec<(T, U)> {
        self.original.into_iter().zip(self.mapped).collect()
    }

    pub fn into_mapped(self) -> Vec<U> {
        self.mapped
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<U>) {
        (self.original, self.mapped)
    }
}
