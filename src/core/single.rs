//! "Exactly one element, else fallback" on top of the counted pipeline.
//!
//! ```
//! use counted_flow::ApplyOrTakeAction;
//!
//! let name = ApplyOrTakeAction::apply(|s: &&str| s.to_uppercase())
//!     .if_single_element(vec!["solo"])
//!     .or_else(|| "many".to_string());
//! assert_eq!(name, "SOLO");
//! ```

use crate::core::counted::{Counted, SeqCounter};
use crate::core::predicates::has_size;
use crate::utils::error::{FlowError, Result};

/// Stage one: holds the transform applied to a lone element.
#[derive(Debug, Clone)]
pub struct ApplyOrTakeAction<F> {
    apply_fn: F,
}

impl<F> ApplyOrTakeAction<F> {
    pub fn apply(apply_fn: F) -> Self {
        Self { apply_fn }
    }

    pub fn try_apply(apply_fn: Option<F>) -> Result<Self> {
        apply_fn
            .map(Self::apply)
            .ok_or_else(|| FlowError::invalid_argument("apply_fn"))
    }

    /// Stage two: binds the transform to a collection.
    pub fn if_single_element<T, I>(self, items: I) -> SingleElementTarget<T, F>
    where
        I: IntoIterator<Item = T>,
    {
        SingleElementTarget {
            counted: items.into_iter().counted(),
            apply_fn: self.apply_fn,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SingleElementTarget<T, F> {
    counted: Counted<T>,
    apply_fn: F,
}

impl<T, F> SingleElementTarget<T, F> {
    pub fn count(&self) -> usize {
        self.counted.count()
    }

    pub fn is_single(&self) -> bool {
        self.counted.count() == 1
    }

    /// Transformed element if there is exactly one, otherwise `fallback()`.
    ///
    /// With two or more elements the fallback runs once per element and the
    /// first value is returned.
    pub fn or_else<U, S>(self, mut fallback: S) -> U
    where
        F: FnMut(&T) -> U,
        S: FnMut() -> U,
    {
        let first = resolve(self.counted, self.apply_fn, &mut fallback);
        first.unwrap_or_else(fallback)
    }

    /// Like [`or_else`](Self::or_else), but `None` when nothing was produced.
    pub fn or_else_optional<U, S>(self, mut fallback: S) -> Option<U>
    where
        F: FnMut(&T) -> U,
        S: FnMut() -> U,
    {
        resolve(self.counted, self.apply_fn, &mut fallback)
    }

    pub fn try_or_else<U, S>(self, fallback: Option<S>) -> Result<U>
    where
        F: FnMut(&T) -> U,
        S: FnMut() -> U,
    {
        let fallback = fallback.ok_or_else(|| FlowError::invalid_argument("fallback"))?;
        Ok(self.or_else(fallback))
    }

    /// Fallback that may fail. The first `Err` ends the pass and is returned
    /// unchanged; later elements never reach the fallback.
    pub fn or_try_else<U, E, S>(self, mut fallback: S) -> std::result::Result<U, E>
    where
        F: FnMut(&T) -> U,
        S: FnMut() -> std::result::Result<U, E>,
    {
        if self.counted.is_empty() {
            tracing::debug!("empty collection, taking fallback action");
            return fallback();
        }

        let mut apply_fn = self.apply_fn;
        let first = self
            .counted
            .size_satisfies(has_size(1), |item: &T| Ok(apply_fn(item)))
            .or_else_try(|_| fallback())?
            .into_mapped()
            .into_iter()
            .next();

        match first {
            Some(value) => Ok(value),
            None => fallback(),
        }
    }

    /// Fails with `error()` unless there is exactly one element.
    pub fn or_throw<U, E, X>(self, mut error: X) -> std::result::Result<U, E>
    where
        F: FnMut(&T) -> U,
        X: FnMut() -> E,
    {
        self.or_try_else(move || Err(error()))
    }
}

fn resolve<T, U, F, S>(counted: Counted<T>, apply_fn: F, fallback: &mut S) -> Option<U>
where
    F: FnMut(&T) -> U,
    S: FnMut() -> U,
{
    if counted.is_empty() {
        tracing::debug!("empty collection, taking fallback action");
        return Some(fallback());
    }

    counted
        .size_satisfies(has_size(1), apply_fn)
        .or_else(|_| fallback())
        .into_mapped()
        .into_iter()
        .next()
}
