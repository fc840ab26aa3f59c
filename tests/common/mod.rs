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

//! Models shared by the integration tests
#![allow(dead_code)]

pub mod knapsack;
pub mod srflp;

use ddbb::{Model, Solution};

/// Replays the decisions of a solution from the root of the model and
/// returns the value it reaches, or None if one of the transitions is
/// infeasible.
pub fn replay<M: Model>(model: &M, solution: &Solution) -> Option<isize> {
    let mut state = model.root();
    let mut value = model.root_value();
    for (i, d) in solution.iter().copied().enumerate() {
        if d.variable.id() != i {
            return None;
        }
        value += model.reward(&state, d);
        state = model.successor(&state, d)?;
    }
    if solution.len() == model.nb_variables() {
        Some(value)
    } else {
        None
    }
}
