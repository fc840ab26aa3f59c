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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client library is likely to work with.

use std::sync::Arc;

// ----------------------------------------------------------------------------
// --- VARIABLE ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes a variable from the dynamic program. Each layer of a
/// decision diagram is associated with exactly one variable: the variable at
/// depth `d` is `Variable(d)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Variable(pub usize);
impl Variable {
    #[inline]
    /// This function returns the id (numeric value) of the variable.
    ///
    /// # Examples:
    /// ```
    /// # use ddbb::Variable;
    /// assert_eq!(0, Variable(0).id());
    /// assert_eq!(1, Variable(1).id());
    /// assert_eq!(2, Variable(2).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- DECISION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This denotes a decision that was made during the search. It affects a given
/// `value` to the specified `variable`. Any given `Decision` should be
/// understood as ```[[ variable = value ]]````
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Decision {
    pub variable : Variable,
    pub value    : isize
}

/// A solution is the sequence of decisions leading from the problem root
/// to a terminal node.
pub type Solution = Vec<Decision>;

// ----------------------------------------------------------------------------
// --- SUBPROBLEM -------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A subproblem is a snapshot of an exact node taken from the cutset of a
/// relaxed decision diagram. It owns everything it needs: it never refers to
/// the diagram it was extracted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubProblem<T> {
    /// The root state of this sub problem
    pub state: Arc<T>,
    /// The root value of this sub problem
    pub value: isize,
    /// The path to traverse to reach this subproblem from the root
    /// of the original problem
    pub path: Vec<Decision>,
    /// An upper bound on the objective reachable in this subproblem
    pub ub: isize,
    /// The depth of the subproblem with respect to the root problem
    pub depth: usize,
}

// ----------------------------------------------------------------------------
// --- THRESHOLD --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A threshold is the information retained about one exact state after a
/// diagram has been compiled. Any future node reaching the same state with a
/// `value_top <= theta` can be pruned without losing optimality.
///
/// The field order matters: thresholds are compared on `theta` first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold {
    /// The minimal value a node must strictly exceed to be worth exploring
    pub theta: isize,
    /// The value of the node from which the threshold was derived
    pub value_top: isize,
    /// True iff the node from which this threshold was derived was itself
    /// pruned by one of the filters
    pub pruning: bool,
}

// ----------------------------------------------------------------------------
// --- RESULTS ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A reason explaining why the compilation or search stopped early
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reason {
    /// It stopped because the configured cutoff criterion was met
    CutoffOccurred
}

/// The outcome of a diagram compilation or of a complete search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// is the given solution exact (proved optimal for the given [sub-]problem)?
    /// or is it an approximation ?
    pub is_exact: bool,
    /// if present the value of the best solution derived from this mdd
    pub best_value: Option<isize>,
}

// ----------------------------------------------------------------------------
// --- BOUNDS -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The value standing for minus infinity in all bound computations
pub const NEG_INF: isize = isize::MIN;
/// The value standing for plus infinity in all bound computations
pub const POS_INF: isize = isize::MAX;

/// Adds two bounds following the semantics of the extended reals:
/// an infinite operand absorbs any finite one.
///
/// # Panics
/// When asked to compute `-inf + inf` or when a finite sum overflows. Both
/// situations denote a bug in the model or in the solver.
///
/// # Examples:
/// ```
/// # use ddbb::*;
/// assert_eq!(5, bound_add(2, 3));
/// assert_eq!(NEG_INF, bound_add(NEG_INF, 3));
/// assert_eq!(POS_INF, bound_add(-7, POS_INF));
/// ```
#[inline]
pub fn bound_add(a: isize, b: isize) -> isize {
    match (a, b) {
        (NEG_INF, POS_INF) | (POS_INF, NEG_INF) =>
            panic!("undefined bound arithmetic: -inf + inf"),
        (NEG_INF, _) | (_, NEG_INF) => NEG_INF,
        (POS_INF, _) | (_, POS_INF) => POS_INF,
        (a, b) => finite(a.checked_add(b)),
    }
}

/// Subtracts `b` from `a` following the semantics of the extended reals.
/// In particular, `best - inf == -inf`.
///
/// # Panics
/// When asked to compute `inf - inf` (either sign) or when a finite
/// difference overflows.
///
/// # Examples:
/// ```
/// # use ddbb::*;
/// assert_eq!(-1, bound_sub(2, 3));
/// assert_eq!(NEG_INF, bound_sub(10, POS_INF));
/// assert_eq!(POS_INF, bound_sub(10, NEG_INF));
/// ```
#[inline]
pub fn bound_sub(a: isize, b: isize) -> isize {
    match (a, b) {
        (NEG_INF, NEG_INF) | (POS_INF, POS_INF) =>
            panic!("undefined bound arithmetic: inf - inf"),
        (NEG_INF, _) | (_, POS_INF) => NEG_INF,
        (POS_INF, _) | (_, NEG_INF) => POS_INF,
        (a, b) => finite(a.checked_sub(b)),
    }
}

#[inline]
fn finite(x: Option<isize>) -> isize {
    match x {
        Some(v) if v != NEG_INF && v != POS_INF => v,
        _ => panic!("overflow in bound arithmetic"),
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_var {
    use crate::Variable;

    #[test]
    fn test_var_id() {
        assert_eq!(0, Variable(0).id());
        assert_eq!(1, Variable(1).id());
        assert_eq!(2, Variable(2).id());
        assert_eq!(3, Variable(3).id());
    }
}


#[cfg(test)]
mod test_bounds {
    use crate::*;

    #[test]
    fn finite_values_add_and_subtract_normally() {
        assert_eq!(7,  bound_add(3, 4));
        assert_eq!(-1, bound_sub(3, 4));
    }
    #[test]
    fn neg_inf_absorbs_finite_values() {
        assert_eq!(NEG_INF, bound_add(NEG_INF, 42));
        assert_eq!(NEG_INF, bound_add(42, NEG_INF));
        assert_eq!(NEG_INF, bound_sub(NEG_INF, 42));
    }
    #[test]
    fn pos_inf_absorbs_finite_values() {
        assert_eq!(POS_INF, bound_add(POS_INF, -42));
        assert_eq!(POS_INF, bound_sub(POS_INF, 42));
    }
    #[test]
    fn subtracting_an_infinity_flips_its_sign() {
        assert_eq!(NEG_INF, bound_sub(0, POS_INF));
        assert_eq!(POS_INF, bound_sub(0, NEG_INF));
    }
    #[test]
    #[should_panic]
    fn adding_opposite_infinities_panics() {
        bound_add(NEG_INF, POS_INF);
    }
    #[test]
    #[should_panic]
    fn subtracting_infinity_from_itself_panics() {
        bound_sub(POS_INF, POS_INF);
    }
    #[test]
    #[should_panic]
    fn finite_overflow_panics() {
        bound_add(POS_INF - 1, 1);
    }
}
