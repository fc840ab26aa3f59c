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

//! This module defines the abstraction of a decision diagram together with
//! the input it is compiled from.

use crate::{Cache, Completion, Cutoff, DominanceChecker, Model, Reason, Settings, Solution, SubProblem};

/// What type of cut-set are we using for relaxed DDs ?
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CutsetType {
    /// enqueue the last layer with only exact nodes
    #[default]
    LastExactLayer,
    /// enqueue all exact nodes that have at least a relaxed child node
    Frontier,
}

/// How are we to compile the decision diagram ?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilationType {
    /// If you want to compile a restricted DD which yields a lower bound on the objective
    Restricted,
    /// If you want to compile a relaxed DD which yields an upper bound on the objective
    Relaxed,
}

/// The tables that outlive a single compilation: they are shared by all the
/// diagrams compiled during one search and mutated in place by each of them.
pub struct SearchContext<'a, State> {
    /// Thresholds of the states that have already been explored
    pub cache: &'a mut dyn Cache<State = State>,
    /// Non-dominated states encountered so far
    pub dominance: &'a mut dyn DominanceChecker<State = State>,
}

/// The set of parameters used to tweak the compilation of a MDD
pub struct CompilationInput<'a, 'b, State> {
    /// How is the mdd being compiled ?
    pub comp_type: CompilationType,
    /// A reference to the original problem we try to maximize
    pub model: &'a dyn Model<State = State>,
    /// The cutoff used to decide when to stop trying to solve the problem
    pub cutoff: &'a dyn Cutoff,
    /// The width and the filters to use during this compilation
    pub settings: &'a Settings,
    /// The subproblem whose state space must be explored
    pub residual: &'a SubProblem<State>,
    /// The best known lower bound at the time when the dd is being compiled
    pub best_lb: isize,
    /// Data structures containing info about past compilations used to prune the search
    pub context: SearchContext<'b, State>,
}

/// This trait describes the operations that can be expected from an abstract
/// decision diagram regardless of the way it is implemented.
pub trait DecisionDiagram {
    /// This associated type corresponds to the `State` type of the problems
    /// that can be solved when using this DD.
    type State;

    /// This method provokes the compilation of the DD based on the given
    /// compilation input (compilation type, and root subproblem)
    fn compile(&mut self, input: &mut CompilationInput<Self::State>)
        -> Result<Completion, Reason>;
    /// Returns true iff the DD which has been compiled is an exact DD.
    fn is_exact(&self) -> bool;
    /// Returns the optimal value of the objective function or None when no
    /// feasible solution has been identified (no r-t path) either because
    /// the subproblem at the root of this DD is infeasible or because restriction
    /// or filtering has removed all feasible paths that could potentially have
    /// been found.
    fn best_value(&self) -> Option<isize>;
    /// Returns the best solution of this subproblem as a sequence of decision
    /// maximizing the objective value. When no feasible solution exists in the
    /// approximate DD, it returns the value None instead.
    fn best_solution(&self) -> Option<Solution>;
    /// Returns a snapshot of each node from the cut-set that was computed
    /// during the DD compilation, together with its upper bound.
    ///
    /// # Important:
    /// The cut-set is empty unless the DD was compiled in relaxed mode and
    /// turned out to be inexact.
    fn cutset(&self) -> Vec<SubProblem<Self::State>>;
}
