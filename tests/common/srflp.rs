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

//! The single row facility layout problem: departments of various lengths
//! are placed one after the other on a line so as to minimize the weighted
//! sum of the distances between their centers. The i-th variable tells which
//! department occupies the i-th slot.

use smallbitset::Set32;

use ddbb::{Decision, DecisionCallback, Model, Variable};

#[derive(Debug, Clone)]
pub struct Srflp {
    pub lengths: Vec<isize>,
    pub flows: Vec<Vec<isize>>,
}

/// The departments that remain to be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SrflpState {
    pub must_place: Set32,
}

impl Srflp {
    fn nb_departments(&self) -> usize {
        self.lengths.len()
    }
    fn all(&self) -> Set32 {
        let mut all = Set32::empty();
        for i in 0..self.nb_departments() {
            all.add_inplace(i);
        }
        all
    }
}

impl Model for Srflp {
    type State = SrflpState;

    fn nb_variables(&self) -> usize {
        self.nb_departments()
    }
    fn root(&self) -> SrflpState {
        SrflpState { must_place: self.all() }
    }
    /// Half the length of each pair of departments is paid whatever the
    /// arrangement
    fn root_value(&self) -> isize {
        let n = self.nb_departments();
        let mut value = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                value += self.flows[i][j] * (self.lengths[i] + self.lengths[j]) / 2;
            }
        }
        -value
    }
    fn for_each_in_domain(&self, variable: Variable, state: &SrflpState, f: &mut dyn DecisionCallback) {
        for i in state.must_place.iter() {
            f.apply(Decision { variable, value: i as isize });
        }
    }
    fn successor(&self, state: &SrflpState, d: Decision) -> Option<SrflpState> {
        let mut must_place = state.must_place;
        must_place.remove_inplace(d.value as usize);
        Some(SrflpState { must_place })
    }
    /// Placing a department lengthens the distance between every placed
    /// department and every department that is still to be placed
    fn reward(&self, state: &SrflpState, d: Decision) -> isize {
        let placed = self.all().diff(state.must_place);
        let mut remaining = state.must_place;
        remaining.remove_inplace(d.value as usize);

        let mut cut = 0;
        for i in placed.iter() {
            for j in remaining.iter() {
                cut += self.flows[i][j];
            }
        }
        -cut * self.lengths[d.value as usize]
    }
    fn merge(&self, a: &mut SrflpState, b: &SrflpState) {
        a.must_place = a.must_place.inter(b.must_place);
    }
}

pub fn instance() -> Srflp {
    Srflp {
        lengths: vec![2, 4, 2, 6, 4],
        flows: vec![
            vec![0, 3, 1, 0, 2],
            vec![3, 0, 4, 1, 0],
            vec![1, 4, 0, 2, 5],
            vec![0, 1, 2, 0, 3],
            vec![2, 0, 5, 3, 0],
        ],
    }
}
pub const OPTIMUM: isize = -100;

/// The cost of arranging the departments in the given order
pub fn cost(model: &Srflp, order: &[usize]) -> isize {
    let mut center = vec![0; order.len()];
    let mut x = 0;
    for &d in order {
        center[d] = x + model.lengths[d] / 2;
        x += model.lengths[d];
    }
    let mut cost = 0;
    for i in 0..order.len() {
        for j in (i + 1)..order.len() {
            cost += model.flows[i][j] * (center[i] - center[j]).abs();
        }
    }
    cost
}

/// Enumerates all the arrangements and returns the value of the best one
pub fn brute_force(model: &Srflp) -> isize {
    fn permute(model: &Srflp, order: &mut Vec<usize>, k: usize, best: &mut isize) {
        if k == order.len() {
            *best = (*best).max(-cost(model, order));
            return;
        }
        for i in k..order.len() {
            order.swap(k, i);
            permute(model, order, k + 1, best);
            order.swap(k, i);
        }
    }
    let mut order = (0..model.lengths.len()).collect::<Vec<_>>();
    let mut best = isize::MIN;
    permute(model, &mut order, 0, &mut best);
    best
}
