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

use std::{cmp::Ordering, marker::PhantomData};

use crate::DominanceRule;

/// The rule to use when a problem has no dominance relation: no state ever
/// gets a key, hence no state is ever compared with another.
#[derive(Debug, Clone, Copy)]
pub struct NoDominance<T>(PhantomData<T>);
impl <T> Default for NoDominance<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}
impl <T> DominanceRule for NoDominance<T> {
    type State = T;
    type Key = ();

    fn key(&self, _: &T) -> Option<()> {
        None
    }
    fn value(&self, _: &T) -> isize {
        0
    }
    fn check(&self, _: &T, _: &T) -> Option<Ordering> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::*;

    #[test]
    fn no_state_is_ever_dominated() {
        let mut dominance = SimpleDominanceChecker::new(NoDominance::<isize>::default());
        assert!(!dominance.is_dominated_or_insert(Arc::new(3), 3).dominated);
        assert!(!dominance.is_dominated_or_insert(Arc::new(3), 2).dominated);
        assert!(dominance.is_empty());
    }
}
