// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::{cmp::Ordering, sync::Arc};

/// This trait gives the possibility to model dominance relations between the
/// states of a specific problem. The dominance relation is evaluated only for
/// pairs of states that are mapped to the same key. The value reached by the
/// solver for each state can optionally be included in the comparison.
pub trait DominanceRule {
    type State;
    type Key;

    /// Takes a state and returns a key that maps it to comparable states.
    /// States without a key are never compared.
    fn key(&self, state: &Self::State) -> Option<Self::Key>;

    /// A scalar summary of the state. Greater means more likely to dominate:
    /// candidates of a layer are checked in decreasing order of this value.
    fn value(&self, state: &Self::State) -> isize;

    /// Compares two states having the same key:
    /// - `Greater` iff `a` dominates `b`,
    /// - `Less` iff `b` dominates `a`,
    /// - `Equal` iff both states are equivalent w.r.t. dominance,
    /// - `None` iff they are incomparable.
    fn check(&self, a: &Self::State, b: &Self::State) -> Option<Ordering>;

    /// Whether to include the value of the nodes in the dominance check
    fn use_value(&self) -> bool { false }
}

/// The outcome of a dominance check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DominanceCheckResult {
    /// True iff the checked state is dominated
    pub dominated: bool,
    /// When dominated, the greatest value the checked node could have had
    /// while still being dominated
    pub threshold: Option<isize>,
}
impl DominanceCheckResult {
    pub(crate) const NOT_DOMINATED: Self = Self { dominated: false, threshold: None };
}

/// The dominance checker is the table that remembers the non-dominated states
/// encountered so far during one search, grouped by key.
pub trait DominanceChecker {
    type State;

    /// Checks whether the state is dominated by a stored one. If it is not,
    /// the state is stored and all stored states it dominates are forgotten.
    fn is_dominated_or_insert(&mut self, state: Arc<Self::State>, value: isize) -> DominanceCheckResult;

    /// Comparator ordering the states by increasing dominance value, then by
    /// increasing value
    fn cmp(&self, a: &Self::State, val_a: isize, b: &Self::State, val_b: isize) -> Ordering;

    /// Number of states currently stored in the table
    fn len(&self) -> usize;

    /// Returns true iff no state is stored in the table
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets all stored states
    fn clear(&mut self);
}
