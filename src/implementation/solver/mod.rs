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

//! This module and its sub modules provide the actual implementations of the
//! exact solvers. The `dp` module provides the `Bellman` solver which fills a
//! dynamic programming table, and the `best_first` module provides the
//! `BestFirstSearch` branch-and-bound solver. Both structures implement the
//! `Solver` trait.

mod dp;
mod best_first;

pub use dp::*;
pub use best_first::*;

use crate::{AssignmentSolution, Instance, Solver};

/// Solves the given instance to optimality with dynamic programming. The
/// order of the items does not matter.
pub fn solve_dp(instance: &Instance) -> AssignmentSolution {
    Bellman.solve(instance)
}

/// Solves the given instance to optimality with a best-first branch-and-bound.
///
/// # Important:
/// The items of `instance` must be sorted by decreasing efficiency (see
/// `Instance::sort`). Otherwise, the returned solution is feasible but not
/// necessarily optimal.
pub fn solve_bb(instance: &Instance) -> AssignmentSolution {
    BestFirstSearch::new().solve(instance)
}
