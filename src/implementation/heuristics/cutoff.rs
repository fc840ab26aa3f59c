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

//! This module provides the implementation of various cutoff heuristics that can
//! be used to tune the behavior of a solver.

use std::{sync::{Arc, atomic::{AtomicBool, AtomicUsize, Ordering}}, time::Duration};

use crate::Cutoff;

/// _This is the default cutoff heuristic._ It imposes that the search goes
/// proves optimality before to stop.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCutoff;
impl Cutoff for NoCutoff {
    fn must_stop(&self) -> bool {false}
}
/// This cutoff allows one to specify a maximum time budget to solve the problem.
/// Once the time budget is elapsed, the optimization stops and the best solution
/// that has been found (so far) is returned.
///
/// # Example
/// ```no_run
/// # use ddbb::*;
/// use std::time::Duration;
///
/// let cutoff = TimeBudget::new(Duration::from_secs(10));
/// assert!(!cutoff.must_stop());
/// ```
#[derive(Debug, Clone)]
pub struct TimeBudget {
    stop  : Arc<AtomicBool>
}
impl TimeBudget {
    pub fn new(budget: Duration) -> Self {
        let stop   = Arc::new(AtomicBool::new(false));
        let t_flag = Arc::clone(&stop);

        // timer
        std::thread::spawn(move || {
            std::thread::sleep(budget);
            t_flag.store(true, Ordering::Relaxed);
        });

        TimeBudget { stop }
    }
}
impl Cutoff for TimeBudget {
    fn must_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

/// This cutoff stops the search once it has been consulted a given number of
/// times. The solver consults its cutoff once per explored subproblem and once
/// per compiled layer, so this is a deterministic budget on the work done.
///
/// # Example
/// ```
/// # use ddbb::*;
/// let cutoff = NodeBudget::new(2);
/// assert!(!cutoff.must_stop());
/// assert!(!cutoff.must_stop());
/// assert!(cutoff.must_stop());
/// ```
#[derive(Debug)]
pub struct NodeBudget {
    budget: usize,
    consumed: AtomicUsize,
}
impl NodeBudget {
    pub fn new(budget: usize) -> Self {
        NodeBudget { budget, consumed: AtomicUsize::new(0) }
    }
}
impl Cutoff for NodeBudget {
    fn must_stop(&self) -> bool {
        self.consumed.fetch_add(1, Ordering::Relaxed) >= self.budget
    }
}

#[cfg(test)]
mod test_cutoff {
    use std::time::Duration;

    use crate::*;

    #[test]
    fn no_cutoff_never_stops() {
        for _ in 0..1000 {
            assert!(!NoCutoff.must_stop());
        }
    }
    #[test]
    fn time_budget_stops_once_the_budget_is_elapsed() {
        let cutoff = TimeBudget::new(Duration::from_millis(10));
        std::thread::sleep(Duration::from_millis(200));
        assert!(cutoff.must_stop());
    }
    #[test]
    fn node_budget_of_zero_stops_immediately() {
        assert!(NodeBudget::new(0).must_stop());
    }
    #[test]
    fn node_budget_keeps_stopping_once_exhausted() {
        let cutoff = NodeBudget::new(1);
        assert!(!cutoff.must_stop());
        assert!(cutoff.must_stop());
        assert!(cutoff.must_stop());
    }
}
