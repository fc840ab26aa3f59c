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

//! This module provides the implementation of subproblem rankings that are used to
//! set the ordering of the solver fringe.

use std::{cmp::Ordering, marker::PhantomData};

use crate::{SubProblemRanking, SubProblem};

/// The MaxUB (maximum upper bound) strategy is one that always selects the node
/// having the highest upper bound in the fringe. Equalities are left to the
/// fringe, which breaks them by insertion order.
///
/// # Example
/// ```
/// # use std::sync::Arc;
/// # use ddbb::*;
/// #
/// let a = SubProblem {state: Arc::new('a'), value: 42, ub: 300, depth: 0, path: vec![]};
/// let b = SubProblem {state: Arc::new('b'), value:  2, ub: 100, depth: 0, path: vec![]};
/// let c = SubProblem {state: Arc::new('c'), value: 24, ub: 150, depth: 0, path: vec![]};
/// let d = SubProblem {state: Arc::new('d'), value: 13, ub:  60, depth: 0, path: vec![]};
/// let e = SubProblem {state: Arc::new('e'), value: 65, ub: 700, depth: 0, path: vec![]};
/// let f = SubProblem {state: Arc::new('f'), value: 19, ub: 100, depth: 0, path: vec![]};
///
/// let mut priority_q = SimpleFringe::new(MaxUB::default());
/// priority_q.push(a);
/// priority_q.push(b);
/// priority_q.push(c);
/// priority_q.push(d);
/// priority_q.push(e);
/// priority_q.push(f);
///
/// assert_eq!('e', *priority_q.pop().unwrap().state); // because 700 is the highest upper bound
/// assert_eq!('a', *priority_q.pop().unwrap().state); // because 300 is the next highest
/// assert_eq!('c', *priority_q.pop().unwrap().state); // idem, because of ub = 150
/// assert_eq!('b', *priority_q.pop().unwrap().state); // because ub = 100 and b was pushed before f
/// assert_eq!('f', *priority_q.pop().unwrap().state); // because ub = 100 and f was pushed after b
/// assert_eq!('d', *priority_q.pop().unwrap().state); // because ub = 60 which is the worst
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MaxUB<T>(PhantomData<T>);
impl <T> Default for MaxUB<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}
impl<T> SubProblemRanking for MaxUB<T> {
    type State = T;

    fn compare(&self, l: &SubProblem<T>, r: &SubProblem<T>) -> Ordering {
        l.ub.cmp(&r.ub)
    }
}
