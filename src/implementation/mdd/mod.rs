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

//! This module provides the decision diagram used by the branch-and-bound:
//! its nodes and edges, the layers it is made of and the diagram itself.

/// Shorthand to access the nodes and edges owned by an arena
macro_rules! get {
    (    node $id:expr, $arena:expr) => {&    $arena.nodes[$id.0]};
    (mut node $id:expr, $arena:expr) => {&mut $arena.nodes[$id.0]};
    (    edge $id:expr, $arena:expr) => {&    $arena.edges[$id.0]};
    (mut edge $id:expr, $arena:expr) => {&mut $arena.edges[$id.0]};
}

/// This macro performs an action for each inbound edge of a given node
macro_rules! foreach {
    (edge of $id:expr, $arena:expr, $action:expr) => {
        let nb_inbound = get!(node $id, $arena).inbound.len();
        for i in 0..nb_inbound {
            let edge = *get!(edge get!(node $id, $arena).inbound[i], $arena);
            $action(edge);
        }
    };
}

mod node_flags;
mod node;
mod layer;
mod diagram;

pub use node_flags::*;
pub use node::*;
pub use layer::*;
pub use diagram::*;
