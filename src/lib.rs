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

//! # DDBB
//! DDBB is a branch-and-bound solver for discrete optimization problems that
//! are described as dynamic programs. Each subproblem popped from the solver
//! fringe is compiled into a restricted decision diagram (which yields a
//! feasible solution and thus a lower bound) and into a relaxed decision
//! diagram (which yields an upper bound). Whenever the relaxed diagram is not
//! exact, the nodes of its cutset are pushed back on the fringe.
//!
//! Four optional filters help pruning the diagrams: dominance between
//! states, a cache of thresholds learned from previous compilations, rough
//! upper bounds and local bounds. All of them are turned on and off through
//! the `Settings`.
//!
//! ## Quick Example
//! The following implements a solver for the binary knapsack problem. The
//! state of a node is the pair (depth, remaining capacity) and merging two
//! states simply keeps the largest capacity.
//!
//! ```
//! # use ddbb::*;
//! #
//! struct Knapsack {
//!     capacity: usize,
//!     profit  : Vec<isize>,
//!     weight  : Vec<usize>,
//! }
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! struct KnapsackState {
//!     depth   : usize,
//!     capacity: usize,
//! }
//! impl Model for Knapsack {
//!     type State = KnapsackState;
//!
//!     fn nb_variables(&self) -> usize {
//!         self.profit.len()
//!     }
//!     fn root(&self) -> KnapsackState {
//!         KnapsackState { depth: 0, capacity: self.capacity }
//!     }
//!     fn for_each_in_domain(&self, var: Variable, state: &KnapsackState, f: &mut dyn DecisionCallback) {
//!         f.apply(Decision { variable: var, value: 0 });
//!         if self.weight[var.id()] <= state.capacity {
//!             f.apply(Decision { variable: var, value: 1 });
//!         }
//!     }
//!     fn successor(&self, state: &KnapsackState, d: Decision) -> Option<KnapsackState> {
//!         let used = self.weight[d.variable.id()] * d.value as usize;
//!         Some(KnapsackState { depth: state.depth + 1, capacity: state.capacity - used })
//!     }
//!     fn reward(&self, _: &KnapsackState, d: Decision) -> isize {
//!         self.profit[d.variable.id()] * d.value
//!     }
//!     fn merge(&self, a: &mut KnapsackState, b: &KnapsackState) {
//!         a.capacity = a.capacity.max(b.capacity);
//!     }
//! }
//!
//! let model = Knapsack {
//!     capacity: 50,
//!     profit  : vec![60, 100, 120],
//!     weight  : vec![10,  20,  30],
//! };
//! let settings = SettingsBuilder::default().width(2).build().unwrap();
//! let mut solver = SequentialSolver::new(&model, NoDominance::default(), settings);
//!
//! let Completion { is_exact, best_value } = solver.maximize();
//! assert!(is_exact);
//! assert_eq!(Some(220), best_value);
//! ```

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
