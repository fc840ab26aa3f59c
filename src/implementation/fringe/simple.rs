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

//! This module provides the implementation of a simple solver fringe (priority queue)

use std::cmp::Ordering;

use binary_heap_plus::BinaryHeap;
use compare::Compare;

use crate::*;

/// A subproblem waiting on the fringe along with the rank of its insertion
struct Entry<T> {
    seq: usize,
    node: SubProblem<T>,
}

/// Orders the entries with the subproblem ranking. Ties go to the entry
/// that was pushed first.
struct CompareEntry<O>(O);
impl <O: SubProblemRanking> Compare<Entry<O::State>> for CompareEntry<O> {
    fn compare(&self, l: &Entry<O::State>, r: &Entry<O::State>) -> Ordering {
        self.0.compare(&l.node, &r.node)
            .then_with(|| r.seq.cmp(&l.seq))
    }
}

/// The simplest fringe implementation you can think of: is basically consists
/// of a binary heap that pushes and pops fringe nodes. Nodes that rank equal
/// are popped in the order they were pushed.
pub struct SimpleFringe<O: SubProblemRanking> {
    heap: BinaryHeap<Entry<O::State>, CompareEntry<O>>,
    pushed: usize,
}
impl <O> SimpleFringe<O> where O: SubProblemRanking {
    /// This creates a new simple fringe which uses a custom fringe order.
    pub fn new(o: O) -> Self {
        Self{ heap: BinaryHeap::from_vec_cmp(vec![], CompareEntry(o)), pushed: 0 }
    }
}
impl <O> Fringe for SimpleFringe<O> where O: SubProblemRanking {
    type State = O::State;

    fn push(&mut self, node: SubProblem<Self::State>) {
        let seq = self.pushed;
        self.pushed += 1;
        self.heap.push(Entry { seq, node })
    }

    fn pop(&mut self) -> Option<SubProblem<Self::State>> {
        self.heap.pop().map(|e| e.node)
    }

    fn clear(&mut self) {
        self.heap.clear()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
