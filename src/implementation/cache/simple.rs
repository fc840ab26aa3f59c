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

use std::{sync::Arc, hash::Hash};

use fxhash::FxHashMap;

use crate::{Cache, Threshold};

/// Simple implementation of Cache using one hashmap for each layer.
#[derive(Debug)]
pub struct SimpleCache<State>
where State: Hash + Eq {
    thresholds_by_layer: Vec<FxHashMap<Arc<State>, Threshold>>,
}
impl <State> Default for SimpleCache<State>
where State: Hash + Eq {
    fn default() -> Self {
        Self { thresholds_by_layer: vec![] }
    }
}

impl<State> Cache for SimpleCache<State>
where State: Hash + Eq {
    type State = State;

    fn initialize(&mut self, nb_variables: usize) {
        self.thresholds_by_layer.clear();
        self.thresholds_by_layer.resize_with(nb_variables + 1, Default::default);
    }

    fn get_threshold(&self, state: &State, depth: usize) -> Option<Threshold> {
        self.thresholds_by_layer.get(depth)
            .and_then(|layer| layer.get(state))
            .copied()
    }

    fn update_threshold(&mut self, state: Arc<State>, depth: usize, threshold: Threshold) {
        if depth >= self.thresholds_by_layer.len() {
            self.thresholds_by_layer.resize_with(depth + 1, Default::default);
        }
        self.thresholds_by_layer[depth].entry(state)
            .and_modify(|e| *e = threshold.max(*e))
            .or_insert(threshold);
    }

    fn len(&self) -> usize {
        self.thresholds_by_layer.iter().map(|l| l.len()).sum()
    }

    fn clear(&mut self) {
        self.thresholds_by_layer.iter_mut().for_each(|l| l.clear());
    }
}
