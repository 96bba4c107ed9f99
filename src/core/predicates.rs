//! Predicates over the element count of a sequence.
//!
//! The free functions build closures for direct use with
//! [`Counted::size_satisfies`](crate::core::counted::Counted::size_satisfies).
//! [`CountPredicate`] is the same vocabulary as data, so it can be loaded from
//! configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

pub fn has_size(expected: usize) -> impl Fn(usize) -> bool + Copy {
    move |count| count == expected
}

pub fn is_empty() -> impl Fn(usize) -> bool + Copy {
    |count| count == 0
}

pub fn not_empty() -> impl Fn(usize) -> bool + Copy {
    |count| count > 0
}

pub fn at_least(min: usize) -> impl Fn(usize) -> bool + Copy {
    move |count| count >= min
}

pub fn at_most(max: usize) -> impl Fn(usize) -> bool + Copy {
    move |count| count <= max
}

/// Inclusive on both ends.
pub fn between(min: usize, max: usize) -> impl Fn(usize) -> bool + Copy {
    move |count| (min..=max).contains(&count)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountPredicate {
    Any,
    IsEmpty,
    NotEmpty,
    HasSize(usize),
    AtLeast(usize),
    AtMost(usize),
    Between { min: usize, max: usize },
}

impl CountPredicate {
    pub fn test(&self, count: usize) -> bool {
        match *self {
            CountPredicate::Any => true,
            CountPredicate::IsEmpty => is_empty()(count),
            CountPredicate::NotEmpty => not_empty()(count),
            CountPredicate::HasSize(n) => has_size(n)(count),
            CountPredicate::AtLeast(n) => at_least(n)(count),
            CountPredicate::AtMost(n) => at_most(n)(count),
            CountPredicate::Between { min, max } => between(min, max)(count),
        }
    }

    pub fn into_fn(self) -> impl Fn(usize) -> bool + Copy {
        move |count| self.test(count)
    }
}

impl fmt::Display for CountPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountPredicate::Any => write!(f, "any size"),
            CountPredicate::IsEmpty => write!(f, "size == 0"),
            CountPredicate::NotEmpty => write!(f, "size > 0"),
            CountPredicate::HasSize(n) => write!(f, "size == {}", n),
            CountPredicate::AtLeast(n) => write!(f, "size >= {}", n),
            CountPredicate::AtMost(n) => write!(f, "size <= {}", n),
            CountPredicate::Between { min, max } => write!(f, "{} <= size <= {}", min, max),
        }
    }
}
