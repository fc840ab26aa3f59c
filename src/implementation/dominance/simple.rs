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

use std::{hash::Hash, cmp::Ordering, sync::Arc};

use fxhash::FxHashMap;

use crate::{bound_sub, DominanceCheckResult, DominanceChecker, DominanceRule, POS_INF};

/// Simple implementation of a dominance checker that stores a vector of non-dominated
/// states for each distinct key.
#[derive(Debug)]
struct DominanceEntry<T> {
    state: Arc<T>,
    value: isize,
}

#[derive(Debug)]
pub struct SimpleDominanceChecker<D>
where
    D: DominanceRule,
    D::Key: Eq + Hash,
{
    rule: D,
    data: FxHashMap<D::Key, Vec<DominanceEntry<D::State>>>,
}

impl<D> SimpleDominanceChecker<D>
where
    D: DominanceRule,
    D::Key: Eq + Hash,
{
    pub fn new(rule: D) -> Self {
        Self { rule, data: Default::default() }
    }

    fn dominated(threshold: isize) -> DominanceCheckResult {
        DominanceCheckResult { dominated: true, threshold: Some(threshold) }
    }
}

impl<D> DominanceChecker for SimpleDominanceChecker<D>
where
    D: DominanceRule,
    D::Key: Eq + Hash,
{
    type State = D::State;

    fn is_dominated_or_insert(&mut self, state: Arc<Self::State>, value: isize) -> DominanceCheckResult {
        let Some(key) = self.rule.key(state.as_ref()) else {
            return DominanceCheckResult::NOT_DOMINATED;
        };

        let use_value = self.rule.use_value();
        let entries = self.data.entry(key).or_default();

        let mut j = 0;
        while j < entries.len() {
            let other = &entries[j];
            match self.rule.check(state.as_ref(), other.state.as_ref()) {
                Some(Ordering::Equal) if use_value => {
                    if value > other.value {
                        entries.remove(j);
                        continue;
                    }
                    if value < other.value {
                        return Self::dominated(bound_sub(other.value, 1));
                    }
                },
                Some(Ordering::Greater) => {
                    if !use_value || value >= other.value {
                        entries.remove(j);
                        continue;
                    }
                },
                Some(Ordering::Less) => {
                    if !use_value {
                        return Self::dominated(POS_INF);
                    }
                    if value <= other.value {
                        return Self::dominated(other.value);
                    }
                },
                _ => {},
            }
            j += 1;
        }

        entries.push(DominanceEntry { state, value });
        DominanceCheckResult::NOT_DOMINATED
    }

    fn cmp(&self, a: &Self::State, val_a: isize, b: &Self::State, val_b: isize) -> Ordering {
        self.rule.value(a).cmp(&self.rule.value(b))
            .then_with(|| val_a.cmp(&val_b))
    }

    fn len(&self) -> usize {
        self.data.values().map(|v| v.len()).sum()
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}
