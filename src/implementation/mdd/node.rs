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

//! The graph primitives of a decision diagram: nodes, edges and the arena
//! that owns them for the lifetime of one diagram.

use std::sync::Arc;

use crate::{Decision, Threshold, NodeFlags, NEG_INF, POS_INF};

/// The identifier of a node: it indicates the position of the referenced node
/// in the 'nodes' vector of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// The identifier of an edge: it indicates the position of the referenced edge
/// in the 'edges' vector of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

/// Why a node was removed from its layer by one of the filters. Each variant
/// carries the witness that justified the deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pruning {
    /// The node was dominated. The threshold is the greatest value for which
    /// the node would still have been dominated.
    Dominance { threshold: isize },
    /// A threshold from the cache covered the node. `loose` tells whether the
    /// node was better than the one the threshold was derived from, and
    /// `chained` tells whether that threshold itself came from a pruned node.
    Cache { threshold: Threshold, loose: bool, chained: bool },
    /// The rough upper bound of the node could not beat the incumbent
    RoughUpperBound { rub: isize },
    /// The local bound of the (cutset) node could not beat the incumbent
    LocalBounds { value_bot: isize },
}

/// Represents an effective node from the decision diagram
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// The state associated to this node
    pub(crate) state: Arc<T>,
    /// The number of decisions that have been made since the problem root
    pub(crate) depth: usize,
    /// The length of the longest path between the problem root and this
    /// specific node
    pub(crate) value_top: isize,
    /// The length of the longest path between this node and the terminal node.
    ///
    /// ### Note
    /// This field is only ever populated after the MDD has been fully unrolled.
    pub(crate) value_bot: isize,
    /// The accumulated score of the best scoring path reaching this node
    pub(crate) score: isize,
    /// Any node reaching the same state with a value no greater than theta
    /// can be pruned
    pub(crate) theta: isize,
    /// The rough upper bound associated to this node
    pub(crate) rub: isize,
    /// The upper bound used to rank the node on the solver fringe
    pub(crate) ub: isize,
    /// The edges reaching this node
    pub(crate) inbound: Vec<EdgeId>,
    pub(crate) flags: NodeFlags,
    /// Set when the node was deleted by one of the filters
    pub(crate) pruning: Option<Pruning>,
}

impl <T> Node<T> {
    pub(crate) fn new(state: Arc<T>, depth: usize, value_top: isize, score: isize, flags: NodeFlags) -> Self {
        Node {
            state,
            depth,
            value_top,
            value_bot: NEG_INF,
            score,
            theta: POS_INF,
            rub: POS_INF,
            ub: POS_INF,
            inbound: vec![],
            flags,
            pruning: None,
        }
    }

    /// The state of the node
    pub fn state(&self) -> &T {
        self.state.as_ref()
    }
    pub fn depth(&self) -> usize {
        self.depth
    }
    pub fn value_top(&self) -> isize {
        self.value_top
    }
    /// `NEG_INF` unless the local bounds were computed and the node reaches
    /// the terminal
    pub fn value_bot(&self) -> isize {
        self.value_bot
    }
    pub fn score(&self) -> isize {
        self.score
    }
    pub fn theta(&self) -> isize {
        self.theta
    }
    pub fn rub(&self) -> isize {
        self.rub
    }
    pub fn ub(&self) -> isize {
        self.ub
    }
    pub fn inbound(&self) -> &[EdgeId] {
        &self.inbound
    }
    pub fn flags(&self) -> NodeFlags {
        self.flags
    }
    pub fn is_exact(&self) -> bool {
        self.flags.is_exact()
    }
    pub fn is_relaxed(&self) -> bool {
        self.flags.is_relaxed()
    }
    pub fn is_merged(&self) -> bool {
        self.flags.is_merged()
    }
    pub fn is_cutset(&self) -> bool {
        self.flags.is_cutset()
    }
    pub fn is_above_cutset(&self) -> bool {
        self.flags.is_above_cutset()
    }
    pub fn is_deleted(&self) -> bool {
        self.flags.is_deleted()
    }
    /// The reason why a filter deleted this node, if any
    pub fn pruning(&self) -> Option<Pruning> {
        self.pruning
    }
}

/// Materializes one edge a.k.a arc from the decision diagram. It logically
/// connects two nodes and annotates the link with a decision and a reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// The identifier of the node at the ∗∗source∗∗ of this edge.
    pub(crate) from: NodeId,
    /// The identifier of the node at the ∗∗destination∗∗ of this edge.
    pub(crate) to: NodeId,
    /// This is the decision label associated to this edge. It gives the
    /// information "what variable" is assigned to "what value".
    pub(crate) decision: Decision,
    /// This is the reward of making this decision from the state
    /// associated with the source node of this edge.
    pub(crate) reward: isize,
    /// True iff the edge lies on the best root-to-terminal path
    pub(crate) opt: bool,
}
impl Edge {
    pub fn from(&self) -> NodeId {
        self.from
    }
    pub fn to(&self) -> NodeId {
        self.to
    }
    pub fn decision(&self) -> Decision {
        self.decision
    }
    pub fn reward(&self) -> isize {
        self.reward
    }
    pub fn is_optimal(&self) -> bool {
        self.opt
    }
}

/// Owns all the nodes and edges of one diagram. Everything is dropped at once
/// when the diagram is cleared or dropped.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) edges: Vec<Edge>,
}
impl <T> Default for Arena<T> {
    fn default() -> Self {
        Self { nodes: vec![], edges: vec![] }
    }
}
impl <T> Arena<T> {
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
    pub(crate) fn add_node(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
    /// Creates an edge and appends it to the inbound list of its destination
    pub(crate) fn add_edge(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(edge);
        self.nodes[edge.to.0].inbound.push(id);
        id
    }
}
