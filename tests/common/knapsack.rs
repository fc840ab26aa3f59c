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

//! A bounded knapsack where the i-th variable tells how many copies of the
//! i-th item are put in the sack.

use std::cmp::Ordering;

use ddbb::{Decision, DecisionCallback, DominanceRule, Model, Variable};

#[derive(Debug, Clone)]
pub struct Knapsack {
    pub capacity: usize,
    pub profit: Vec<isize>,
    pub weight: Vec<usize>,
    pub quantity: Vec<isize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KnapsackState {
    pub depth: usize,
    pub capacity: usize,
}

impl Model for Knapsack {
    type State = KnapsackState;

    fn nb_variables(&self) -> usize {
        self.profit.len()
    }
    fn root(&self) -> KnapsackState {
        KnapsackState { depth: 0, capacity: self.capacity }
    }
    fn for_each_in_domain(&self, variable: Variable, _: &KnapsackState, f: &mut dyn DecisionCallback) {
        for value in 0..=self.quantity[variable.id()] {
            f.apply(Decision { variable, value });
        }
    }
    fn successor(&self, state: &KnapsackState, d: Decision) -> Option<KnapsackState> {
        let used = self.weight[d.variable.id()] * d.value as usize;
        state.capacity.checked_sub(used)
            .map(|capacity| KnapsackState { depth: state.depth + 1, capacity })
    }
    fn reward(&self, _: &KnapsackState, d: Decision) -> isize {
        self.profit[d.variable.id()] * d.value
    }
    fn merge(&self, a: &mut KnapsackState, b: &KnapsackState) {
        a.capacity = a.capacity.max(b.capacity);
        a.depth = a.depth.max(b.depth);
    }
    fn rough_upper_bound(&self, state: &KnapsackState) -> isize {
        (state.depth..self.nb_variables())
            .map(|i| self.profit[i] * self.quantity[i].min((state.capacity / self.weight[i]) as isize))
            .sum()
    }
    /// Items with a better profit per unit of weight score higher
    fn score(&self, _: &KnapsackState, d: Decision) -> isize {
        let i = d.variable.id();
        d.value * (10 * self.profit[i] / self.weight[i] as isize)
    }
    /// The bound of the linear relaxation: items are packed by decreasing
    /// profit per unit of weight and the first one that does not fit is
    /// taken fractionally
    fn aggregate_bound(&self, state: &KnapsackState) -> Option<isize> {
        let mut items = (state.depth..self.nb_variables()).collect::<Vec<_>>();
        items.sort_by(|&i, &j| {
            let ri = self.profit[i] * self.weight[j] as isize;
            let rj = self.profit[j] * self.weight[i] as isize;
            rj.cmp(&ri)
        });

        let mut capacity = state.capacity;
        let mut bound = 0;
        for i in items {
            let copies = self.quantity[i].min((capacity / self.weight[i]) as isize);
            bound += copies * self.profit[i];
            capacity -= self.weight[i] * copies as usize;
            if copies < self.quantity[i] {
                bound += self.profit[i] * capacity as isize / self.weight[i] as isize;
                break;
            }
        }
        Some(bound)
    }
}

/// A state dominates another one at the same depth when it has more room
/// left in the sack and was reached with a greater value.
pub struct KnapsackDominance;
impl DominanceRule for KnapsackDominance {
    type State = KnapsackState;
    type Key = usize;

    fn key(&self, state: &KnapsackState) -> Option<usize> {
        Some(state.depth)
    }
    fn value(&self, state: &KnapsackState) -> isize {
        state.capacity as isize
    }
    fn check(&self, a: &KnapsackState, b: &KnapsackState) -> Option<Ordering> {
        Some(a.capacity.cmp(&b.capacity))
    }
    fn use_value(&self) -> bool {
        true
    }
}

/// A 0-1 instance whose unique optimal solution takes items 1, 2, 4 and 6
pub fn instance() -> Knapsack {
    Knapsack {
        capacity: 15,
        profit: vec![2, 9, 8, 7, 10, 6, 5, 4, 3, 8],
        weight: vec![5, 4, 3, 6, 5, 4, 3, 2, 2, 5],
        quantity: vec![1; 10],
    }
}
pub const OPTIMUM: isize = 32;

/// A small instance where some items can be taken twice
pub fn bounded_instance() -> Knapsack {
    Knapsack {
        capacity: 15,
        profit: vec![2, 3, 6, 6, 1],
        weight: vec![4, 6, 4, 2, 5],
        quantity: vec![1, 1, 2, 2, 1],
    }
}
pub const BOUNDED_OPTIMUM: isize = 24;

/// Enumerates all the assignments and returns the best feasible value
pub fn brute_force(model: &Knapsack) -> isize {
    best_from(model, 0, model.capacity)
}

/// The best value that can still be collected from the item at `depth` on
/// when `capacity` is left in the sack
pub fn best_from(model: &Knapsack, depth: usize, capacity: usize) -> isize {
    if depth == model.nb_variables() {
        return 0;
    }
    (0..=model.quantity[depth])
        .take_while(|&k| model.weight[depth] * k as usize <= capacity)
        .map(|k| k * model.profit[depth] + best_from(model, depth + 1, capacity - model.weight[depth] * k as usize))
        .max()
        .unwrap_or(0)
}

/// A deterministic stream of small instances with 4 to 6 items
pub fn random_instances(count: usize, seed: u64) -> Vec<Knapsack> {
    let mut rng = Lcg(seed);
    (0..count)
        .map(|_| {
            let n = 4 + rng.below(3);
            Knapsack {
                capacity: 8 + rng.below(12),
                profit: (0..n).map(|_| 1 + rng.below(10) as isize).collect(),
                weight: (0..n).map(|_| 1 + rng.below(6)).collect(),
                quantity: (0..n).map(|_| 1 + rng.below(2) as isize).collect(),
            }
        })
        .collect()
}

struct Lcg(u64);
impl Lcg {
    fn below(&mut self, bound: usize) -> usize {
        self.0 = self.0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}
