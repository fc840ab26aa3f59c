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

//! A layer groups the nodes of the diagram which sit at the same depth. It
//! knows how to expand itself into the next layer, how to filter out the
//! nodes that cannot lead to an improvement and how to shrink itself back
//! to the maximum width.

use std::{hash::Hash, sync::Arc};

use fxhash::FxHashMap;

use crate::{bound_add, bound_sub, Cache, CompilationType, Decision, DominanceChecker, Edge, Model, Node, NodeFlags, NodeId, Pruning, Settings, SubProblem, Threshold, Variable, NEG_INF, POS_INF};

use super::node::Arena;

/// The nodes of one layer of the diagram
#[derive(Debug, Clone)]
pub struct Layer<T> {
    pub(crate) depth: usize,
    /// The nodes that are still part of the layer
    pub(crate) nodes: Vec<NodeId>,
    /// Maps the state of each retained node to its identifier
    index: FxHashMap<Arc<T>, NodeId>,
    pub(crate) deleted_by_dominance: Vec<NodeId>,
    pub(crate) deleted_by_cache: Vec<NodeId>,
    pub(crate) deleted_by_rub: Vec<NodeId>,
    pub(crate) deleted_by_shrink: Vec<NodeId>,
    pub(crate) deleted_by_local_bounds: Vec<NodeId>,
}

impl <T> Layer<T> {
    /// The depth of the layer, that is the number of decisions made on any
    /// path from the problem root to one of its nodes
    pub fn depth(&self) -> usize {
        self.depth
    }
    /// The nodes that survived the filters and the shrinking
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }
    pub fn width(&self) -> usize {
        self.nodes.len()
    }
    pub fn deleted_by_dominance(&self) -> &[NodeId] {
        &self.deleted_by_dominance
    }
    pub fn deleted_by_cache(&self) -> &[NodeId] {
        &self.deleted_by_cache
    }
    pub fn deleted_by_rub(&self) -> &[NodeId] {
        &self.deleted_by_rub
    }
    /// Nodes dropped by a restriction or folded into a merged node
    pub fn deleted_by_shrink(&self) -> &[NodeId] {
        &self.deleted_by_shrink
    }
    pub fn deleted_by_local_bounds(&self) -> &[NodeId] {
        &self.deleted_by_local_bounds
    }
}

impl <T> Layer<T> where T: Eq + Hash + Clone {
    pub(crate) fn new(depth: usize) -> Self {
        Layer {
            depth,
            nodes: vec![],
            index: Default::default(),
            deleted_by_dominance: vec![],
            deleted_by_cache: vec![],
            deleted_by_rub: vec![],
            deleted_by_shrink: vec![],
            deleted_by_local_bounds: vec![],
        }
    }

    /// Creates the first layer of a diagram rooted in the given subproblem
    pub(crate) fn root(arena: &mut Arena<T>, residual: &SubProblem<T>) -> Self {
        let mut layer = Layer::new(residual.depth);
        let node = Node::new(residual.state.clone(), residual.depth, residual.value, 0, NodeFlags::new_exact());
        let id = arena.add_node(node);
        layer.index.insert(residual.state.clone(), id);
        layer.nodes.push(id);
        layer
    }

    /// Expands all the nodes of this layer on the variable `x_depth` and
    /// returns the resulting layer. Transitions to infeasible states are
    /// silently skipped.
    pub(crate) fn next(&self, arena: &mut Arena<T>, model: &dyn Model<State = T>) -> Self {
        let mut next = Layer::new(self.depth + 1);
        let variable = Variable(self.depth);

        for &parent in self.nodes.iter() {
            let state = get!(node parent, arena).state.clone();
            model.for_each_in_domain(variable, state.as_ref(), &mut |decision: Decision| {
                if let Some(successor) = model.successor(state.as_ref(), decision) {
                    let reward = model.reward(state.as_ref(), decision);
                    let score = model.score(state.as_ref(), decision);
                    next.branch(arena, parent, Arc::new(successor), decision, reward, score);
                }
            });
        }
        next
    }

    /// Adds an edge from `parent` to the node holding `state`, creating that
    /// node when it does not exist yet
    fn branch(&mut self, arena: &mut Arena<T>, parent: NodeId, state: Arc<T>, decision: Decision, reward: isize, score: isize) {
        let from = get!(node parent, arena);
        let value_top = bound_add(from.value_top, reward);
        let score = from.score.saturating_add(score);
        let relaxed = from.flags.is_relaxed();

        let to = match self.index.get(&state) {
            Some(&id) => {
                let node = get!(mut node id, arena);
                node.value_top = node.value_top.max(value_top);
                node.score = node.score.max(score);
                if relaxed {
                    node.flags.set_relaxed(true);
                }
                id
            },
            None => {
                let node = Node::new(state.clone(), self.depth, value_top, score, NodeFlags::new(relaxed));
                let id = arena.add_node(node);
                self.index.insert(state, id);
                self.nodes.push(id);
                id
            }
        };
        arena.add_edge(Edge { from: parent, to, decision, reward, opt: false });
    }

    // ------------------------------------------------------------------------
    // --- FILTERS ------------------------------------------------------------
    // ------------------------------------------------------------------------

    /// Deletes the node from the layer and records why it was deleted
    fn prune(&mut self, arena: &mut Arena<T>, id: NodeId, theta: isize, pruning: Pruning) {
        let node = get!(mut node id, arena);
        node.theta = theta;
        node.pruning = Some(pruning);
        node.flags.set_deleted(true);
        self.index.remove(&node.state);

        match pruning {
            Pruning::Dominance { .. } => self.deleted_by_dominance.push(id),
            Pruning::Cache { .. } => self.deleted_by_cache.push(id),
            Pruning::RoughUpperBound { .. } => self.deleted_by_rub.push(id),
            Pruning::LocalBounds { .. } => self.deleted_by_local_bounds.push(id),
        }
    }

    fn drop_deleted(&mut self, arena: &Arena<T>) {
        self.nodes.retain(|id| !get!(node id, arena).flags.is_deleted());
    }

    /// Removes the exact nodes that are dominated by an exact node of this
    /// layer or by one met in a previous compilation. Relaxed nodes take no
    /// part in dominance: they are neither removed nor used as dominators.
    ///
    /// Returns true iff at least one node was removed.
    pub(crate) fn filter_with_dominance(&mut self, arena: &mut Arena<T>, dominance: &mut dyn DominanceChecker<State = T>) -> bool {
        let mut order = self.nodes.clone();
        order.sort_by(|a, b| {
            let a = get!(node a, arena);
            let b = get!(node b, arena);
            dominance.cmp(a.state.as_ref(), a.value_top, b.state.as_ref(), b.value_top).reverse()
        });

        let mut used = false;
        for id in order {
            let node = get!(node id, arena);
            if node.flags.is_relaxed() {
                continue;
            }

            let check = dominance.is_dominated_or_insert(node.state.clone(), node.value_top);
            if check.dominated {
                let threshold = check.threshold.unwrap_or(NEG_INF);
                self.prune(arena, id, threshold, Pruning::Dominance { threshold });
                used = true;
            }
        }
        self.drop_deleted(arena);
        used
    }

    /// Removes the nodes whose value does not exceed the threshold the cache
    /// holds for their state.
    ///
    /// Returns true iff at least one node was removed.
    pub(crate) fn filter_with_cache(&mut self, arena: &mut Arena<T>, cache: &dyn Cache<State = T>) -> bool {
        let mut used = false;
        for id in self.nodes.clone() {
            let node = get!(node id, arena);
            if let Some(threshold) = cache.get_threshold(node.state.as_ref(), self.depth) {
                if node.value_top <= threshold.theta {
                    let pruning = Pruning::Cache {
                        threshold,
                        loose: node.value_top > threshold.value_top,
                        chained: threshold.pruning,
                    };
                    self.prune(arena, id, threshold.theta, pruning);
                    used = true;
                }
            }
        }
        self.drop_deleted(arena);
        used
    }

    /// Removes the nodes whose value plus rough upper bound cannot beat the
    /// best known lower bound.
    ///
    /// Returns true iff at least one node was removed.
    pub(crate) fn filter_with_rub(&mut self, arena: &mut Arena<T>, model: &dyn Model<State = T>, use_aggregate: bool, best_lb: isize) -> bool {
        let mut used = false;
        for id in self.nodes.clone() {
            let node = get!(mut node id, arena);
            let rub = rough_upper_bound(model, node.state.as_ref(), use_aggregate);
            node.rub = rub;

            if bound_add(node.value_top, rub) <= best_lb {
                let theta = if rub == NEG_INF { POS_INF } else { bound_sub(best_lb, rub) };
                self.prune(arena, id, theta, Pruning::RoughUpperBound { rub });
                used = true;
            }
        }
        self.drop_deleted(arena);
        used
    }

    /// Removes the cutset nodes whose value plus local bound cannot beat the
    /// best known lower bound. It only makes sense once the local bounds
    /// have been computed.
    ///
    /// Returns true iff at least one node was removed.
    pub(crate) fn filter_with_local_bounds(&mut self, arena: &mut Arena<T>, best_lb: isize) -> bool {
        let mut used = false;
        for id in self.nodes.clone() {
            let node = get!(mut node id, arena);
            if !node.flags.is_cutset() {
                continue;
            }

            let value_bot = node.value_bot;
            if bound_add(node.value_top, value_bot) <= best_lb {
                let theta = if value_bot == NEG_INF { POS_INF } else { bound_sub(best_lb, value_bot) };
                node.flags.set_cutset(false);
                self.prune(arena, id, theta, Pruning::LocalBounds { value_bot });
                used = true;
            }
        }
        self.drop_deleted(arena);
        used
    }

    // ------------------------------------------------------------------------
    // --- SHRINKING ----------------------------------------------------------
    // ------------------------------------------------------------------------

    /// Brings the layer back to the maximum width. A restricted diagram
    /// simply forgets about the worst nodes, a relaxed one merges them.
    pub(crate) fn shrink(&mut self, arena: &mut Arena<T>, model: &dyn Model<State = T>, comp_type: CompilationType, settings: &Settings) {
        let by_score = comp_type == CompilationType::Restricted && settings.use_aggregate_score;

        let mut order = self.nodes.clone();
        order.sort_by(|a, b| {
            let a = get!(node a, arena);
            let b = get!(node b, arena);
            if by_score {
                a.score.cmp(&b.score)
                    .then_with(|| a.value_top.cmp(&b.value_top))
                    .reverse()
            } else {
                a.value_top.cmp(&b.value_top).reverse()
            }
        });

        match comp_type {
            CompilationType::Restricted => self.restrict(arena, &order, settings.width),
            CompilationType::Relaxed => {
                let width = settings.width.max(1);
                self.fold(arena, model, &order[width - 1..], true);
            },
        }
    }

    fn restrict(&mut self, arena: &mut Arena<T>, order: &[NodeId], width: usize) {
        for &id in order.iter().skip(width) {
            let node = get!(mut node id, arena);
            node.flags.set_deleted(true);
            self.index.remove(&node.state);
            self.deleted_by_shrink.push(id);
        }
        self.drop_deleted(arena);
    }

    /// Replaces the given nodes with a single one whose state is the merge of
    /// their states. The inbound edges of the folded nodes are redirected
    /// towards the new node. When the merged state is already held by a
    /// retained node, that node absorbs the folded ones.
    fn fold(&mut self, arena: &mut Arena<T>, model: &dyn Model<State = T>, folded: &[NodeId], relax: bool) -> NodeId {
        let mut state = get!(node folded[0], arena).state.as_ref().clone();
        let mut value_top = NEG_INF;
        let mut score = isize::MIN;
        let mut relaxed = false;
        let mut inbound = vec![];

        for &id in folded {
            let node = get!(mut node id, arena);
            model.merge(&mut state, node.state.as_ref());
            value_top = value_top.max(node.value_top);
            score = score.max(node.score);
            relaxed |= node.flags.is_relaxed();
            inbound.extend_from_slice(&node.inbound);

            node.flags.set_deleted(true);
            self.index.remove(&node.state);
            self.deleted_by_shrink.push(id);
        }
        self.drop_deleted(arena);

        let state = Arc::new(state);
        let id = match self.index.get(&state) {
            Some(&id) => {
                let node = get!(mut node id, arena);
                node.value_top = node.value_top.max(value_top);
                node.score = node.score.max(score);
                id
            },
            None => {
                let node = Node::new(state.clone(), self.depth, value_top, score, NodeFlags::new_exact());
                let id = arena.add_node(node);
                self.index.insert(state, id);
                self.nodes.push(id);
                id
            }
        };

        let node = get!(mut node id, arena);
        if relax {
            node.flags.set_merged(true);
        } else if relaxed {
            node.flags.set_relaxed(true);
        }

        for eid in inbound {
            let edge = *get!(edge eid, arena);
            arena.add_edge(Edge { to: id, opt: false, ..edge });
        }
        id
    }

    /// Folds all the nodes of the last layer into the terminal node which
    /// is returned. The terminal is relaxed iff one of the folded nodes was.
    pub(crate) fn finalize(&mut self, arena: &mut Arena<T>, model: &dyn Model<State = T>) -> Option<NodeId> {
        if self.nodes.len() > 1 {
            let all = self.nodes.clone();
            Some(self.fold(arena, model, &all, false))
        } else {
            self.nodes.first().copied()
        }
    }

    // ------------------------------------------------------------------------
    // --- BOTTOM-UP PASSES ---------------------------------------------------
    // ------------------------------------------------------------------------

    /// Propagates the value_bot of the retained nodes to their parents
    pub(crate) fn local_bounds(&self, arena: &mut Arena<T>) {
        for &id in self.nodes.iter() {
            let value_bot = get!(node id, arena).value_bot;
            if value_bot == NEG_INF {
                continue;
            }
            foreach!(edge of id, arena, |edge: Edge| {
                let parent = get!(mut node edge.from, arena);
                parent.value_bot = parent.value_bot.max(bound_add(value_bot, edge.reward));
            });
        }
    }

    /// Propagates the thresholds of the retained nodes and of the nodes
    /// pruned by a filter to their parents. The threshold of a cutset node
    /// is first capped by its own value since it will be explored later on.
    pub(crate) fn thresholds(&self, arena: &mut Arena<T>) {
        for &id in self.nodes.iter() {
            let node = get!(mut node id, arena);
            if node.flags.is_cutset() {
                node.theta = node.theta.min(node.value_top);
            }
            Self::push_theta(arena, id);
        }
        for &id in self.pruned() {
            Self::push_theta(arena, id);
        }
    }

    fn push_theta(arena: &mut Arena<T>, id: NodeId) {
        let theta = get!(node id, arena).theta;
        foreach!(edge of id, arena, |edge: Edge| {
            let parent = get!(mut node edge.from, arena);
            parent.theta = parent.theta.min(bound_sub(theta, edge.reward));
        });
    }

    /// Iterates over the nodes removed by one of the four filters
    fn pruned(&self) -> impl Iterator<Item = &NodeId> {
        self.deleted_by_dominance.iter()
            .chain(self.deleted_by_cache.iter())
            .chain(self.deleted_by_rub.iter())
            .chain(self.deleted_by_local_bounds.iter())
    }

    /// Records the thresholds of this layer in the cache. Only exact nodes
    /// get recorded. When the diagram is not exact, the retained nodes must
    /// be at or above the cutset and the pruned nodes must hang from the
    /// exact part of the diagram.
    pub(crate) fn store_thresholds(&self, arena: &Arena<T>, cache: &mut dyn Cache<State = T>, exact_diagram: bool, lel: usize) {
        for &id in self.nodes.iter() {
            let node = get!(node id, arena);
            let covered = exact_diagram || node.flags.is_cutset() || node.flags.is_above_cutset();
            if node.flags.is_exact() && covered && node.theta != NEG_INF {
                cache.update_threshold(node.state.clone(), self.depth, Threshold {
                    theta: node.theta,
                    value_top: node.value_top,
                    pruning: false,
                });
            }
        }

        let pruned = self.deleted_by_dominance.iter()
            .chain(self.deleted_by_rub.iter())
            .chain(self.deleted_by_local_bounds.iter());
        for &id in pruned {
            let node = get!(node id, arena);
            let covered = exact_diagram
                || self.depth <= lel
                || node.inbound.iter().any(|e| {
                    let parent = get!(node get!(edge e, arena).from, arena);
                    parent.flags.is_above_cutset() && !parent.flags.is_cutset()
                });
            if node.flags.is_exact() && covered && node.theta != NEG_INF {
                cache.update_threshold(node.state.clone(), self.depth, Threshold {
                    theta: node.theta,
                    value_top: node.value_top,
                    pruning: true,
                });
            }
        }
    }
}

/// The rough upper bound of a state, tightened by the aggregate bound when
/// requested and available
pub(crate) fn rough_upper_bound<T>(model: &dyn Model<State = T>, state: &T, use_aggregate: bool) -> isize {
    let rub = model.rough_upper_bound(state);
    match model.aggregate_bound(state) {
        Some(aggregate) if use_aggregate => rub.min(aggregate),
        _ => rub,
    }
}
