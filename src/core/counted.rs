use crate::core::branched::BranchedCounter;
use crate::utils::error::{FlowError, Result};

/// A finite sequence materialized once, together with its element count.
///
/// The count is taken when the sequence is collected and never recomputed;
/// the backing `Vec` is private and never handed out mutably, so the two
/// cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counted<T> {
    elements: Vec<T>,
    count: usize,
}

impl<T> Counted<T> {
    pub fn new(elements: Vec<T>) -> Self {
        let count = elements.len();
        Self { elements, count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }

    /// Runs `action` with the count and hands the sequence back untouched.
    pub fn inspect_count<A>(self, action: A) -> Self
    where
        A: FnOnce(usize),
    {
        action(self.count);
        self
    }

    /// Evaluates `predicate` against the count right now and keeps the answer
    /// for [`BranchedCounter::or_else`].
    pub fn size_satisfies<P, F, U>(self, predicate: P, then_fn: F) -> BranchedCounter<T, F>
    where
        P: FnOnce(usize) -> bool,
        F: FnMut(&T) -> U,
    {
        BranchedCounter::new(self, predicate, then_fn)
    }

    /// Like [`size_satisfies`](Self::size_satisfies) for callers whose
    /// functions may be absent, e.g. looked up by name.
    pub fn try_size_satisfies<P, F, U>(
        self,
        predicate: Option<P>,
        then_fn: Option<F>,
    ) -> Result<BranchedCounter<T, F>>
    where
        P: FnOnce(usize) -> bool,
        F: FnMut(&T) -> U,
    {
        let predicate = predicate.ok_or_else(|| FlowError::invalid_argument("predicate"))?;
        let then_fn = then_fn.ok_or_else(|| FlowError::invalid_argument("then_fn"))?;
        Ok(self.size_satisfies(predicate, then_fn))
    }
}

impl<T> FromIterator<T> for Counted<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for Counted<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T> IntoIterator for Counted<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

/// Terminal "collect and count" for any iterator.
pub trait SeqCounter: Iterator + Sized {
    fn counted(self) -> Counted<Self::Item> {
        self.collect()
    }
}

impl<I: Iterator> SeqCounter for I {}
