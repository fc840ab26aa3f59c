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

//! This module defines the basic abstraction one must implement in order to
//! solve some problem formulated as a dynamic program: the `Model` trait.

use crate::{Variable, Decision, POS_INF};

/// This trait defines the "contract" of what defines an optimization problem
/// solvable with the branch-and-bound with DD paradigm. An implementation of
/// this trait effectively defines a DP formulation of the problem being solved
/// together with the merge operator used to relax it.
///
/// The variables are assigned in a fixed order: the layer at depth `d` of any
/// diagram decides the value of `Variable(d)`.
pub trait Model {
    /// The DP model of the problem manipulates a state which is user-defined.
    /// Two nodes of the same layer reaching equal states are one same node.
    type State;
    /// Any problem bears on a number of variable $x_0, x_1, x_2, ... , x_{n-1}$
    /// This method returns the value of the number $n$
    fn nb_variables(&self) -> usize;
    /// This method returns the initial state of the problem (the state of $r$).
    fn root(&self) -> Self::State;
    /// This method returns the intial value $v_r$ of the problem
    fn root_value(&self) -> isize {
        0
    }
    /// This method calls the function `f` for any value in the domain of
    /// variable `var` when in state `state`. An empty domain is legal: the
    /// node simply has no successor.
    fn for_each_in_domain(&self, var: Variable, state: &Self::State, f: &mut dyn DecisionCallback);
    /// The transition function. It yields `None` when the decision is
    /// infeasible from the given state.
    fn successor(&self, state: &Self::State, decision: Decision) -> Option<Self::State>;
    /// The reward collected when applying `decision` in `state`.
    fn reward(&self, state: &Self::State, decision: Decision) -> isize;
    /// A heuristic score of the decision. It is only used to rank the nodes
    /// of a restricted layer when aggregation scores are enabled.
    fn score(&self, _state: &Self::State, _decision: Decision) -> isize {
        0
    }
    /// Widens the state `a` so that it covers everything that is feasible
    /// from `b`. This operator must be monotone and idempotent.
    fn merge(&self, a: &mut Self::State, b: &Self::State);
    /// Returns a very rough estimation (upper bound) of the optimal value that
    /// could be reached if state were the initial state
    fn rough_upper_bound(&self, _state: &Self::State) -> isize {
        POS_INF
    }
    /// An optional (and hopefully tighter) upper bound on the value reachable
    /// from the given state, typically derived from an aggregated version of
    /// the problem.
    fn aggregate_bound(&self, _state: &Self::State) -> Option<isize> {
        None
    }
}

/// This trait basically defines a callback which is passed on to the model
/// so as to let it efficiently enumerate the domain values of some given
/// variable.
pub trait DecisionCallback {
    /// executes the callback using the given decision
    fn apply(&mut self, decision: Decision);
}
/// The simplest and most natural callback implementation is to simply use
/// a closure.
impl <X: FnMut(Decision)> DecisionCallback for X {
    fn apply(&mut self, decision: Decision) {
        self(decision)
    }
}
