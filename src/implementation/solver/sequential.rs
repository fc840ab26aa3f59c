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

//! This module provides the implementation of the sequential branch-and-bound
//! solver. It repeatedly pops the most promising subproblem from its fringe,
//! compiles a restricted diagram to improve the incumbent and a relaxed
//! diagram to either close the subproblem or branch on its cutset.
use std::{hash::Hash, sync::Arc};

use log::{debug, info};

use crate::{Cache, CompilationInput, CompilationType, Completion, Cutoff, Decision, DecisionDiagram, Diagram, DominanceChecker, DominanceRule, Fringe, MaxUB, Model, NoCutoff, Reason, SearchContext, Settings, SimpleCache, SimpleDominanceChecker, SimpleFringe, Solution, Solver, SubProblem, NEG_INF, POS_INF};

/// The workload the solver can get from its fringe
enum WorkLoad<T> {
    /// There is no work left to be done: the problem is solved
    Complete,
    /// The work must stop because of an external cutoff
    Aborted,
    /// The item to process
    WorkItem { node: SubProblem<T> },
}

pub struct SequentialSolver<'a, State, D>
where
    State: Eq + Hash + Clone,
    D: DominanceRule<State = State>,
    D::Key: Eq + Hash,
{
    /// A reference to the problem being solved
    model: &'a dyn Model<State = State>,
    /// A cutoff heuristic meant to decide when to stop the resolution of
    /// a given problem.
    cutoff: &'a dyn Cutoff,
    /// The settings used for every subproblem unless a schedule is given
    settings: Settings,

    /// This is the fringe: the set of nodes that must still be explored before
    /// the problem can be considered 'solved'.
    ///
    /// # Note:
    /// This fringe orders the nodes by upper bound (so the highest ub is going
    /// to pop first). So, it is guaranteed that the upper bound of the first
    /// node being popped is an upper bound on the value reachable by exploring
    /// any of the nodes remaining on the fringe.
    fringe: SimpleFringe<MaxUB<State>>,
    /// The thresholds of the states that have already been explored
    cache: SimpleCache<State>,
    /// The non-dominated states met so far
    dominance: SimpleDominanceChecker<D>,

    /// This is a counter that tracks the number of nodes that have effectively
    /// been explored. That is, the number of nodes that have been popped from
    /// the fringe, and for which the diagrams have been compiled.
    explored: usize,
    /// This is the value of the best known lower bound.
    best_lb: isize,
    /// This is the value of the best known upper bound.
    best_ub: isize,
    /// If set, this keeps the info about the best solution so far.
    best_sol: Option<Vec<Decision>>,
    /// If we decide not to go through a complete proof of optimality, this is
    /// the reason why we took that decision.
    abort_proof: Option<Reason>,

    /// When set, every compiled diagram is kept for later inspection
    keep_diagrams: bool,
    diagrams: Vec<Diagram<State>>,
}

impl<'a, State, D> SequentialSolver<'a, State, D>
where
    State: Eq + Hash + Clone,
    D: DominanceRule<State = State>,
    D::Key: Eq + Hash,
{
    pub fn new(model: &'a dyn Model<State = State>, dominance: D, settings: Settings) -> Self {
        SequentialSolver {
            model,
            cutoff: &NoCutoff,
            settings,
            //
            fringe: SimpleFringe::new(MaxUB::default()),
            cache: SimpleCache::default(),
            dominance: SimpleDominanceChecker::new(dominance),
            //
            explored: 0,
            best_lb: NEG_INF,
            best_ub: POS_INF,
            best_sol: None,
            abort_proof: None,
            //
            keep_diagrams: false,
            diagrams: vec![],
        }
    }

    /// Uses the given cutoff to decide when to give up the proof of optimality
    pub fn with_cutoff(mut self, cutoff: &'a dyn Cutoff) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Keeps (or not) all the diagrams compiled while solving
    pub fn keep_diagrams(mut self, keep: bool) -> Self {
        self.keep_diagrams = keep;
        self
    }

    /// The diagrams compiled during the last search, in compilation order.
    /// It is empty unless the solver was told to keep them.
    pub fn diagrams(&self) -> &[Diagram<State>] {
        &self.diagrams
    }

    /// The number of subproblems explored during the last search
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Solves the problem using the same settings for every subproblem
    pub fn solve(&mut self) -> Completion {
        self.solve_with(&[])
    }

    /// Solves the problem where the i-th explored subproblem is compiled with
    /// the i-th settings of the schedule. The last settings are reused once
    /// the schedule is exhausted and the default settings of the solver are
    /// used when the schedule is empty.
    pub fn solve_with(&mut self, schedule: &[Settings]) -> Completion {
        self.initialize();

        loop {
            match self.get_workload() {
                WorkLoad::Complete => break,
                WorkLoad::Aborted => break,
                WorkLoad::WorkItem { node } => {
                    let settings = schedule.get(self.explored - 1)
                        .or(schedule.last())
                        .copied()
                        .unwrap_or(self.settings);

                    let outcome = self.process_one_node(node, &settings);
                    if let Err(reason) = outcome {
                        self.abort_search(reason);
                        break;
                    }
                }
            }
        }

        info!("explored {} subproblems, best value {:?}, bounds [{}, {}]",
            self.explored, self.best_value(), self.best_lb, self.best_ub);

        Completion { is_exact: self.abort_proof.is_none(), best_value: self.best_value() }
    }

    /// This method initializes the problem resolution. Put more simply, this
    /// method resets the tables of the previous search and posts the root
    /// node onto the fringe.
    fn initialize(&mut self) {
        self.fringe.clear();
        self.cache.initialize(self.model.nb_variables());
        self.dominance.clear();
        self.diagrams.clear();
        self.explored = 0;
        self.best_ub = POS_INF;
        self.abort_proof = None;

        let root = self.root_node();
        self.fringe.push(root);
    }

    fn root_node(&self) -> SubProblem<State> {
        SubProblem {
            state: Arc::new(self.model.root()),
            value: self.model.root_value(),
            path: vec![],
            ub: POS_INF,
            depth: 0,
        }
    }

    /// This method processes the given `node`. It expands a restricted and
    /// possibly a relaxed diagram rooted in `node`. If that is necessary,
    /// it stores cutset nodes onto the fringe for further processing.
    fn process_one_node(&mut self, node: SubProblem<State>, settings: &Settings) -> Result<(), Reason> {
        let node_ub = node.ub;
        if node_ub <= self.best_lb {
            return Ok(());
        }
        if self.cutoff.must_stop() {
            return Err(Reason::CutoffOccurred);
        }
        debug!("exploring subproblem at depth {} (value {}, ub {})", node.depth, node.value, node_ub);

        // 1. RESTRICTION
        if settings.restrict {
            let mdd = self.compile(&node, settings, CompilationType::Restricted)?;
            self.maybe_update_best(&mdd);
            let is_exact = mdd.is_exact();
            self.archive(mdd);
            if is_exact {
                return Ok(());
            }
        }

        // 2. RELAXATION
        let mdd = self.compile(&node, settings, CompilationType::Relaxed)?;
        if mdd.is_exact() {
            self.maybe_update_best(&mdd);
        } else {
            self.enqueue_cutset(&mdd, node_ub);
        }
        self.archive(mdd);

        Ok(())
    }

    fn compile(&mut self, node: &SubProblem<State>, settings: &Settings, comp_type: CompilationType) -> Result<Diagram<State>, Reason> {
        let mut input = CompilationInput {
            comp_type,
            model: self.model,
            cutoff: self.cutoff,
            settings,
            residual: node,
            best_lb: self.best_lb,
            context: SearchContext { cache: &mut self.cache, dominance: &mut self.dominance },
        };

        let mut mdd = Diagram::new();
        mdd.compile(&mut input)?;
        Ok(mdd)
    }

    /// This private method updates the best known node and lower bound in
    /// case the best value of the given diagram improves the current bounds.
    fn maybe_update_best(&mut self, mdd: &Diagram<State>) {
        let dd_best_value = mdd.best_value().unwrap_or(NEG_INF);
        if dd_best_value > self.best_lb {
            debug!("new incumbent {} (was {})", dd_best_value, self.best_lb);
            self.best_lb = dd_best_value;
            self.best_sol = mdd.best_solution();
        }
    }

    /// Thightens the bound of nodes in the cutset of `mdd` and then adds the
    /// relevant nodes to the fringe.
    fn enqueue_cutset(&mut self, mdd: &Diagram<State>, ub: isize) {
        for mut cutset_node in mdd.cutset() {
            cutset_node.ub = ub.min(cutset_node.ub);
            if cutset_node.ub > self.best_lb {
                self.fringe.push(cutset_node);
            }
        }
    }

    fn archive(&mut self, mdd: Diagram<State>) {
        if self.keep_diagrams {
            self.diagrams.push(mdd);
        }
    }

    fn abort_search(&mut self, reason: Reason) {
        info!("search aborted: {:?}", reason);
        self.abort_proof = Some(reason);
        self.fringe.clear();
    }

    /// Consults the fringe to fetch a workload. Depending on the current
    /// state, the workload can either be:
    ///
    ///   + Complete, when the problem is solved
    ///   + Aborted, when the search was stopped by the cutoff
    ///   + WorkItem, when a subproblem was popped from the fringe
    fn get_workload(&mut self) -> WorkLoad<State> {
        if self.abort_proof.is_some() {
            return WorkLoad::Aborted;
        }
        let Some(nn) = self.fringe.pop() else {
            self.best_ub = self.best_lb;
            return WorkLoad::Complete;
        };

        // Consume the current node and process it
        self.explored += 1;
        self.best_ub = nn.ub.max(self.best_lb);

        WorkLoad::WorkItem { node: nn }
    }
}

impl<'a, State, D> Solver for SequentialSolver<'a, State, D>
where
    State: Eq + Hash + Clone,
    D: DominanceRule<State = State>,
    D::Key: Eq + Hash,
{
    fn maximize(&mut self) -> Completion {
        self.solve()
    }

    /// Returns the best solution that has been identified for this problem.
    fn best_solution(&self) -> Option<Solution> {
        self.best_sol.clone()
    }
    /// Returns the value of the best solution that has been identified for
    /// this problem.
    fn best_value(&self) -> Option<isize> {
        self.best_sol.as_ref().map(|_sol| self.best_lb)
    }
    fn best_lower_bound(&self) -> isize {
        self.best_lb
    }
    fn best_upper_bound(&self) -> isize {
        self.best_ub
    }
    /// Sets a primal (best known value and solution) of the problem.
    fn set_primal(&mut self, value: isize, solution: Solution) {
        if value > self.best_lb {
            self.best_sol = Some(solution);
            self.best_lb = value;
        }
    }
}
