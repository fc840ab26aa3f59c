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

//! This module provides the layered decision diagram which is compiled for
//! each subproblem explored by the solver. It can be compiled either as a
//! restricted diagram (yielding a lower bound and a feasible solution) or as
//! a relaxed one (yielding an upper bound and a cutset).
//!
//! The nodes and edges of the diagram live in an arena. The diagram is kept
//! as is after compilation so that one can inspect how each filter impacted
//! each layer.

use std::hash::Hash;

use log::trace;

use crate::{bound_add, CompilationInput, CompilationType, Completion, CutsetType, Decision, DecisionDiagram, Edge, EdgeId, Layer, Node, NodeId, Reason, Solution, SubProblem, NEG_INF};

use super::{layer::rough_upper_bound, node::Arena};

/// A layered decision diagram compiled top-down from one subproblem
#[derive(Debug, Clone)]
pub struct Diagram<T> {
    arena: Arena<T>,
    layers: Vec<Layer<T>>,
    /// The decisions leading from the problem root to the root of this diagram
    path_to_root: Vec<Decision>,
    root_depth: usize,
    nb_variables: usize,
    comp_type: Option<CompilationType>,
    /// The depth of the last layer which is only made of exact nodes
    lel: usize,
    cutset: Vec<NodeId>,
    /// The terminal node
    best_node: Option<NodeId>,
    /// The edges of the best root-to-terminal path, from the root downwards
    best_path: Vec<EdgeId>,
    is_exact: bool,
    used_dominance: bool,
    used_cache: bool,
    used_rub: bool,
    used_locb: bool,
}

impl <T> Default for Diagram<T> where T: Eq + Hash + Clone {
    fn default() -> Self {
        Self::new()
    }
}

impl <T> DecisionDiagram for Diagram<T> where T: Eq + Hash + Clone {
    type State = T;

    fn compile(&mut self, input: &mut CompilationInput<T>) -> Result<Completion, Reason> {
        self._compile(input)
    }

    fn is_exact(&self) -> bool {
        self.is_exact
    }

    fn best_value(&self) -> Option<isize> {
        self.best_node.map(|id| get!(node id, self.arena).value_top)
    }

    fn best_solution(&self) -> Option<Solution> {
        self.best_node.map(|_| {
            let mut solution = self.path_to_root.clone();
            solution.extend(self.best_path.iter().map(|e| get!(edge e, self.arena).decision));
            solution
        })
    }

    fn cutset(&self) -> Vec<SubProblem<T>> {
        self.cutset.iter()
            .map(|&id| {
                let node = get!(node id, self.arena);
                SubProblem {
                    state: node.state.clone(),
                    value: node.value_top,
                    path: self._path_to(id),
                    ub: node.ub,
                    depth: node.depth,
                }
            })
            .collect()
    }
}

impl <T> Diagram<T> where T: Eq + Hash + Clone {
    pub fn new() -> Self {
        Diagram {
            arena: Arena::default(),
            layers: vec![],
            path_to_root: vec![],
            root_depth: 0,
            nb_variables: 0,
            comp_type: None,
            lel: 0,
            cutset: vec![],
            best_node: None,
            best_path: vec![],
            is_exact: true,
            used_dominance: false,
            used_cache: false,
            used_rub: false,
            used_locb: false,
        }
    }

    // ------------------------------------------------------------------------
    // --- INSPECTION ---------------------------------------------------------
    // ------------------------------------------------------------------------

    /// The layers of the diagram, from its root downwards
    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }
    /// The layer at the given depth (counted from the problem root)
    pub fn layer(&self, depth: usize) -> Option<&Layer<T>> {
        depth.checked_sub(self.root_depth).and_then(|i| self.layers.get(i))
    }
    pub fn node(&self, id: NodeId) -> &Node<T> {
        get!(node id, self.arena)
    }
    pub fn edge(&self, id: EdgeId) -> &Edge {
        get!(edge id, self.arena)
    }
    /// The terminal node, if any path reaches it
    pub fn terminal(&self) -> Option<NodeId> {
        self.best_node
    }
    /// The depth of the last exact layer
    pub fn lel(&self) -> usize {
        self.lel
    }
    pub fn root_depth(&self) -> usize {
        self.root_depth
    }
    /// The way this diagram was last compiled
    pub fn compilation_type(&self) -> Option<CompilationType> {
        self.comp_type
    }
    /// The identifiers of the cutset nodes
    pub fn cutset_nodes(&self) -> &[NodeId] {
        &self.cutset
    }
    /// True iff the dominance filter removed at least one node
    pub fn used_dominance(&self) -> bool {
        self.used_dominance
    }
    /// True iff the cache filter removed at least one node
    pub fn used_cache(&self) -> bool {
        self.used_cache
    }
    /// True iff the rough upper bound filter removed at least one node
    pub fn used_rub(&self) -> bool {
        self.used_rub
    }
    /// True iff the local bounds filter removed at least one cutset node
    pub fn used_locb(&self) -> bool {
        self.used_locb
    }

    // ------------------------------------------------------------------------
    // --- COMPILATION --------------------------------------------------------
    // ------------------------------------------------------------------------

    fn _clear(&mut self) {
        self.arena.clear();
        self.layers.clear();
        self.path_to_root.clear();
        self.cutset.clear();
        self.best_node = None;
        self.best_path.clear();
        self.is_exact = true;
        self.used_dominance = false;
        self.used_cache = false;
        self.used_rub = false;
        self.used_locb = false;
    }

    fn _compile(&mut self, input: &mut CompilationInput<T>) -> Result<Completion, Reason> {
        self._clear();

        let model = input.model;
        let settings = input.settings;
        self.nb_variables = model.nb_variables();
        self.root_depth = input.residual.depth;
        self.comp_type = Some(input.comp_type);
        self.lel = self.root_depth;
        self.path_to_root.extend_from_slice(&input.residual.path);
        self.layers.push(Layer::root(&mut self.arena, input.residual));

        let mut depth = self.root_depth;
        while depth < self.nb_variables {
            if input.cutoff.must_stop() {
                return Err(Reason::CutoffOccurred);
            }

            let mut next = match self.layers.last() {
                Some(layer) => layer.next(&mut self.arena, model),
                None => break,
            };

            // the first expanded layer and the terminal layer are never filtered
            let interior = depth > self.root_depth && depth + 1 < self.nb_variables;
            if interior {
                if settings.use_dominance {
                    self.used_dominance |= next.filter_with_dominance(&mut self.arena, &mut *input.context.dominance);
                }
                if settings.use_cache {
                    self.used_cache |= next.filter_with_cache(&mut self.arena, &*input.context.cache);
                }
                if settings.use_rub {
                    self.used_rub |= next.filter_with_rub(&mut self.arena, model, settings.use_aggregate_bound, input.best_lb);
                }
            }

            if interior && next.width() > settings.width {
                next.shrink(&mut self.arena, model, input.comp_type, settings);
            } else if self.lel == depth {
                self.lel = depth + 1;
            }

            trace!("depth {}: {} nodes, {} dominated, {} cached, {} rub, {} shrunk",
                next.depth, next.width(),
                next.deleted_by_dominance.len(), next.deleted_by_cache.len(),
                next.deleted_by_rub.len(), next.deleted_by_shrink.len());

            self.layers.push(next);
            depth += 1;
        }

        self._finalize(input);

        Ok(Completion { is_exact: self.is_exact, best_value: self.best_value() })
    }

    fn _finalize(&mut self, input: &mut CompilationInput<T>) {
        if let Some(last) = self.layers.last_mut() {
            self.best_node = last.finalize(&mut self.arena, input.model);
        }
        self._find_best_path();

        let relaxed = input.comp_type == CompilationType::Relaxed;
        self.is_exact = self.lel == self.nb_variables
            || (relaxed && self.best_node.is_some() && self._has_exact_best_path());

        if relaxed && !self.is_exact {
            match input.settings.cutset {
                CutsetType::LastExactLayer => self._compute_last_exact_layer_cutset(),
                CutsetType::Frontier => self._compute_frontier_cutset(),
            }
        }
        if relaxed || self.is_exact {
            self._compute_local_bounds(input);
            self._compute_thresholds(input);
        }
    }

    /// Walks the diagram upwards from the terminal, following the edges that
    /// realize the value of each node, and flags them as optimal
    fn _find_best_path(&mut self) {
        self.best_path.clear();

        let mut current = self.best_node;
        while let Some(id) = current {
            let node = get!(node id, self.arena);
            let value = node.value_top;
            let best = node.inbound.iter().copied().find(|e| {
                let edge = get!(edge e, self.arena);
                bound_add(get!(node edge.from, self.arena).value_top, edge.reward) == value
            });

            current = best.map(|e| {
                let edge = get!(mut edge e, self.arena);
                edge.opt = true;
                self.best_path.push(e);
                edge.from
            });
        }
        self.best_path.reverse();
    }

    fn _has_exact_best_path(&self) -> bool {
        self.best_path.iter().all(|e| get!(node get!(edge e, self.arena).from, self.arena).flags.is_exact())
    }

    /// The decisions leading from the problem root to the given node along
    /// its best inbound edges
    fn _path_to(&self, id: NodeId) -> Vec<Decision> {
        let mut decisions = vec![];
        let mut current = id;
        loop {
            let node = get!(node current, self.arena);
            let best = node.inbound.iter().copied().find(|e| {
                let edge = get!(edge e, self.arena);
                bound_add(get!(node edge.from, self.arena).value_top, edge.reward) == node.value_top
            });
            match best {
                Some(e) => {
                    let edge = get!(edge e, self.arena);
                    decisions.push(edge.decision);
                    current = edge.from;
                },
                None => break,
            }
        }
        decisions.reverse();

        let mut path = self.path_to_root.clone();
        path.extend(decisions);
        path
    }

    fn _compute_last_exact_layer_cutset(&mut self) {
        let lel = self.lel - self.root_depth;
        for (i, layer) in self.layers.iter().enumerate().take(lel + 1) {
            for &id in layer.nodes.iter() {
                let node = get!(mut node id, self.arena);
                if i < lel {
                    node.flags.set_above_cutset(true);
                } else {
                    node.flags.set_cutset(true);
                    self.cutset.push(id);
                }
            }
        }
    }

    fn _compute_frontier_cutset(&mut self) {
        for layer in self.layers.iter().rev() {
            for &id in layer.nodes.iter() {
                let node = get!(node id, self.arena);
                let relaxed = node.flags.is_relaxed();
                let marked = node.flags.is_cutset() || node.flags.is_above_cutset();

                if relaxed {
                    foreach!(edge of id, self.arena, |edge: Edge| {
                        let parent = get!(mut node edge.from, self.arena);
                        if parent.flags.is_exact() && !parent.flags.is_cutset() {
                            parent.flags.set_cutset(true);
                            self.cutset.push(edge.from);
                        }
                    });
                } else if marked {
                    foreach!(edge of id, self.arena, |edge: Edge| {
                        get!(mut node edge.from, self.arena).flags.set_above_cutset(true);
                    });
                }
            }
        }
        self.cutset.sort_unstable();
    }

    fn _compute_local_bounds(&mut self, input: &CompilationInput<T>) {
        let settings = input.settings;
        if let Some(terminal) = self.best_node {
            get!(mut node terminal, self.arena).value_bot = 0;
        }
        for layer in self.layers.iter().rev() {
            layer.local_bounds(&mut self.arena);
        }

        if settings.use_locb {
            for layer in self.layers.iter_mut() {
                self.used_locb |= layer.filter_with_local_bounds(&mut self.arena, input.best_lb);
            }
            let arena = &self.arena;
            self.cutset.retain(|id| !get!(node id, arena).flags.is_deleted());
        }

        let best = self.best_value().unwrap_or(NEG_INF);
        for &id in self.cutset.iter() {
            let node = get!(mut node id, self.arena);
            let mut ub = best;
            if settings.use_rub {
                node.rub = rough_upper_bound(input.model, node.state.as_ref(), settings.use_aggregate_bound);
                ub = ub.min(bound_add(node.value_top, node.rub));
            }
            if settings.use_locb {
                ub = ub.min(bound_add(node.value_top, node.value_bot));
            }
            node.ub = ub;
        }
    }

    fn _compute_thresholds(&mut self, input: &mut CompilationInput<T>) {
        if let Some(terminal) = self.best_node {
            let node = get!(mut node terminal, self.arena);
            node.theta = if self.is_exact {
                node.value_top.max(input.best_lb)
            } else {
                input.best_lb
            };
        }
        for layer in self.layers.iter().rev() {
            layer.thresholds(&mut self.arena);
        }

        if input.settings.use_cache {
            for layer in self.layers.iter() {
                layer.store_thresholds(&self.arena, &mut *input.context.cache, self.is_exact, self.lel);
            }
        }
    }
}

#[cfg(test)]
mod test_diagram {
    use std::sync::Arc;

    use crate::*;

    /// A tiny knapsack whose optimum (11) takes the last three items
    struct Knapsack {
        capacity: usize,
        profit: Vec<isize>,
        weight: Vec<usize>,
    }
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct KnapsackState {
        depth: usize,
        capacity: usize,
    }
    impl Model for Knapsack {
        type State = KnapsackState;

        fn nb_variables(&self) -> usize {
            self.profit.len()
        }
        fn root(&self) -> KnapsackState {
            KnapsackState { depth: 0, capacity: self.capacity }
        }
        fn for_each_in_domain(&self, var: Variable, state: &KnapsackState, f: &mut dyn DecisionCallback) {
            f.apply(Decision { variable: var, value: 0 });
            if self.weight[var.id()] <= state.capacity {
                f.apply(Decision { variable: var, value: 1 });
            }
        }
        fn successor(&self, state: &KnapsackState, d: Decision) -> Option<KnapsackState> {
            let taken = self.weight[d.variable.id()] * d.value as usize;
            Some(KnapsackState { depth: state.depth + 1, capacity: state.capacity - taken })
        }
        fn reward(&self, _: &KnapsackState, d: Decision) -> isize {
            self.profit[d.variable.id()] * d.value
        }
        fn merge(&self, a: &mut KnapsackState, b: &KnapsackState) {
            a.capacity = a.capacity.max(b.capacity);
        }
        fn rough_upper_bound(&self, state: &KnapsackState) -> isize {
            (state.depth..self.nb_variables())
                .filter(|&i| self.weight[i] <= state.capacity)
                .map(|i| self.profit[i])
                .sum()
        }
    }

    fn knapsack() -> Knapsack {
        Knapsack { capacity: 6, profit: vec![8, 5, 4, 2], weight: vec![5, 3, 2, 1] }
    }

    fn root(model: &Knapsack) -> SubProblem<KnapsackState> {
        SubProblem { state: Arc::new(model.root()), value: 0, path: vec![], ub: POS_INF, depth: 0 }
    }

    fn settings(width: usize) -> Settings {
        SettingsBuilder::default().width(width).build().unwrap()
    }

    struct Search {
        cache: SimpleCache<KnapsackState>,
        dominance: SimpleDominanceChecker<NoDominance<KnapsackState>>,
    }
    impl Search {
        fn new() -> Self {
            Search { cache: SimpleCache::default(), dominance: SimpleDominanceChecker::new(NoDominance::default()) }
        }
        fn compile(&mut self, model: &Knapsack, comp_type: CompilationType, settings: &Settings, residual: &SubProblem<KnapsackState>, best_lb: isize) -> (Diagram<KnapsackState>, Result<Completion, Reason>) {
            self.compile_with_cutoff(model, comp_type, settings, residual, best_lb, &NoCutoff)
        }
        fn compile_with_cutoff(&mut self, model: &Knapsack, comp_type: CompilationType, settings: &Settings, residual: &SubProblem<KnapsackState>, best_lb: isize, cutoff: &dyn Cutoff) -> (Diagram<KnapsackState>, Result<Completion, Reason>) {
            let mut input = CompilationInput {
                comp_type,
                model,
                cutoff,
                settings,
                residual,
                best_lb,
                context: SearchContext { cache: &mut self.cache, dominance: &mut self.dominance },
            };
            let mut diagram = Diagram::new();
            let result = diagram.compile(&mut input);
            (diagram, result)
        }
    }

    fn replay(model: &Knapsack, solution: &Solution) -> isize {
        let mut state = model.root();
        let mut value = model.root_value();
        for d in solution.iter().copied() {
            value += model.reward(&state, d);
            state = model.successor(&state, d).unwrap();
        }
        value
    }

    #[test]
    fn an_unbounded_diagram_is_exact_and_yields_the_optimum() {
        let model = knapsack();
        let (dd, result) = Search::new().compile(&model, CompilationType::Relaxed, &settings(usize::MAX), &root(&model), NEG_INF);

        assert_eq!(Ok(Completion { is_exact: true, best_value: Some(11) }), result);
        assert!(dd.is_exact());
        assert!(dd.cutset().is_empty());
        assert_eq!(4, dd.lel());

        let solution = dd.best_solution().unwrap();
        let values = solution.iter().map(|d| d.value).collect::<Vec<_>>();
        assert_eq!(vec![0, 1, 1, 1], values);
        assert_eq!(11, replay(&model, &solution));
    }

    #[test]
    fn the_optimal_edges_are_flagged() {
        let model = knapsack();
        let (dd, _) = Search::new().compile(&model, CompilationType::Relaxed, &settings(usize::MAX), &root(&model), NEG_INF);

        let nb_opt = dd.layers().iter()
            .flat_map(|l| l.nodes().iter())
            .flat_map(|n| dd.node(*n).inbound().iter())
            .filter(|e| dd.edge(**e).is_optimal())
            .count();
        assert_eq!(4, nb_opt);
    }

    #[test]
    fn a_restricted_diagram_of_width_one_keeps_the_best_prefix() {
        let model = knapsack();
        let (dd, result) = Search::new().compile(&model, CompilationType::Restricted, &settings(1), &root(&model), NEG_INF);

        assert_eq!(Ok(Completion { is_exact: false, best_value: Some(10) }), result);
        assert!(dd.cutset().is_empty());
        assert_eq!(1, dd.lel());

        let solution = dd.best_solution().unwrap();
        assert_eq!(10, replay(&model, &solution));
        assert_eq!(2, dd.layer(2).unwrap().deleted_by_shrink().len());
    }

    #[test]
    fn a_relaxed_diagram_of_width_one_overestimates_the_optimum() {
        let model = knapsack();
        let (dd, result) = Search::new().compile(&model, CompilationType::Relaxed, &settings(1), &root(&model), NEG_INF);

        assert_eq!(Ok(Completion { is_exact: false, best_value: Some(14) }), result);
        assert!(!dd.is_exact());
        assert_eq!(1, dd.lel());

        let merged = dd.layer(2).unwrap().nodes()[0];
        assert!(dd.node(merged).is_merged());
        assert_eq!(6, dd.node(merged).state().capacity);
        assert_eq!(8, dd.node(merged).value_top());
    }

    #[test]
    fn the_last_exact_layer_cutset_is_made_of_the_nodes_of_the_lel() {
        let model = knapsack();
        let (dd, _) = Search::new().compile(&model, CompilationType::Relaxed, &settings(1), &root(&model), NEG_INF);

        let cutset = dd.cutset();
        assert_eq!(2, cutset.len());
        for sub in cutset.iter() {
            assert_eq!(1, sub.depth);
            assert_eq!(1, sub.path.len());
            assert_eq!(14, sub.ub);
        }
        for &id in dd.layer(0).unwrap().nodes() {
            assert!(dd.node(id).is_above_cutset());
        }
    }

    #[test]
    fn every_frontier_cutset_node_has_a_relaxed_child() {
        let model = knapsack();
        let settings = SettingsBuilder::default().width(1).cutset(CutsetType::Frontier).build().unwrap();
        let (dd, _) = Search::new().compile(&model, CompilationType::Relaxed, &settings, &root(&model), NEG_INF);

        assert!(!dd.cutset_nodes().is_empty());
        for &id in dd.cutset_nodes() {
            let node = dd.node(id);
            assert!(node.is_exact());
            let has_relaxed_child = dd.layer(node.depth() + 1).unwrap().nodes().iter()
                .map(|c| dd.node(*c))
                .filter(|c| c.is_relaxed())
                .any(|c| c.inbound().iter().any(|e| dd.edge(*e).from() == id));
            assert!(has_relaxed_child);
        }
    }

    #[test]
    fn local_bounds_tighten_the_upper_bound_of_the_cutset_nodes() {
        let model = knapsack();
        let settings = SettingsBuilder::default().width(1).use_locb(true).build().unwrap();
        let (dd, _) = Search::new().compile(&model, CompilationType::Relaxed, &settings, &root(&model), NEG_INF);

        let mut ubs = dd.cutset().iter().map(|s| (s.state.capacity, s.ub)).collect::<Vec<_>>();
        ubs.sort_unstable();
        assert_eq!(vec![(1, 14), (6, 11)], ubs);
        assert!(!dd.used_locb());
    }

    #[test]
    fn local_bounds_discard_the_cutset_nodes_that_cannot_improve() {
        let model = knapsack();
        let settings = SettingsBuilder::default().width(1).use_locb(true).build().unwrap();
        let (dd, _) = Search::new().compile(&model, CompilationType::Relaxed, &settings, &root(&model), 11);

        assert!(dd.used_locb());
        let cutset = dd.cutset();
        assert_eq!(1, cutset.len());
        assert_eq!(1, cutset[0].state.capacity);
        assert_eq!(1, dd.layer(1).unwrap().deleted_by_local_bounds().len());
    }

    #[test]
    fn when_nothing_beats_the_incumbent_the_diagram_is_exact_but_empty() {
        let model = knapsack();
        let settings = SettingsBuilder::default().use_rub(true).build().unwrap();
        let (dd, result) = Search::new().compile(&model, CompilationType::Relaxed, &settings, &root(&model), 11);

        assert_eq!(Ok(Completion { is_exact: true, best_value: None }), result);
        assert!(dd.used_rub());
        assert_eq!(3, dd.layer(2).unwrap().deleted_by_rub().len());
        assert_eq!(None, dd.best_solution());
    }

    #[test]
    fn the_cache_prunes_the_nodes_explored_by_a_previous_exact_compilation() {
        let model = knapsack();
        let settings = SettingsBuilder::default().use_cache(true).build().unwrap();
        let mut search = Search::new();
        let (first, _) = search.compile(&model, CompilationType::Relaxed, &settings, &root(&model), NEG_INF);
        assert!(!first.used_cache());
        assert!(!search.cache.is_empty());

        let (second, result) = search.compile(&model, CompilationType::Relaxed, &settings, &root(&model), 11);
        assert!(second.used_cache());
        assert_eq!(Ok(Completion { is_exact: true, best_value: None }), result);
    }

    #[test]
    fn the_terminal_threshold_of_an_exact_diagram_is_its_best_value() {
        let model = knapsack();
        let (dd, _) = Search::new().compile(&model, CompilationType::Relaxed, &settings(usize::MAX), &root(&model), NEG_INF);
        let terminal = dd.terminal().unwrap();
        assert_eq!(11, dd.node(terminal).theta());

        let root = dd.layer(0).unwrap().nodes()[0];
        assert_eq!(0, dd.node(root).theta());
    }

    #[test]
    fn a_diagram_can_be_rooted_below_the_problem_root() {
        let model = knapsack();
        let residual = SubProblem {
            state: Arc::new(KnapsackState { depth: 1, capacity: 6 }),
            value: 0,
            path: vec![Decision { variable: Variable(0), value: 0 }],
            ub: POS_INF,
            depth: 1,
        };
        let (dd, result) = Search::new().compile(&model, CompilationType::Relaxed, &settings(usize::MAX), &residual, NEG_INF);

        assert_eq!(Ok(Completion { is_exact: true, best_value: Some(11) }), result);
        assert!(dd.layer(0).is_none());
        assert_eq!(1, dd.layer(1).unwrap().width());
        assert_eq!(4, dd.best_solution().unwrap().len());
    }

    #[test]
    fn the_compilation_stops_when_the_cutoff_says_so() {
        let model = knapsack();
        let (_, result) = Search::new().compile_with_cutoff(&model, CompilationType::Relaxed, &settings(usize::MAX), &root(&model), NEG_INF, &NodeBudget::new(0));
        assert_eq!(Err(Reason::CutoffOccurred), result);
    }
}
