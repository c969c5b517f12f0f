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

//! # KP
//! KP provides exact solvers for the 0/1 knapsack problem: given a set of
//! items, each having a profit and a weight, find the subset of items having
//! the largest total profit among those whose total weight does not exceed
//! the capacity of the sack.
//!
//! Two algorithms are provided. Both implement the `Solver` trait.
//!
//! * `Bellman` fills a dynamic programming table indexed by the residual
//!   capacity. Its complexity is pseudo polynomial (O(n·capacity)) and it
//!   works whatever the order of the items.
//! * `BestFirstSearch` is a best-first branch-and-bound which prunes the
//!   search tree with the linear relaxation of the problem (computed in
//!   logarithmic time thanks to `PrefixSums`) and with the suffix-minimum
//!   item weights. It requires the items to be sorted by decreasing
//!   efficiency (see `Instance::sort`).
//!
//! ## Quick Example
//! ```
//! # use kp::*;
//! // 1. Create an instance of the knapsack problem
//! let mut instance = Instance::new(15, vec![
//!     Item::new(6, 2), Item::new(5, 3), Item::new(8, 6), Item::new(9, 7),
//!     Item::new(6, 5), Item::new(7, 9), Item::new(3, 4),
//! ]);
//! // 2. Solve it with dynamic programming
//! let dp = solve_dp(&instance);
//! // 3. Or with branch-and-bound, once the items have been sorted
//! instance.sort();
//! let bb = solve_bb(&instance);
//!
//! // 4. Do whatever you like with the optimal solution.
//! assert_eq!(23, dp.profit);
//! assert_eq!(23, bb.profit);
//! assert!(check_solution(&instance, &bb).is_well_formed());
//! for item in bb.selected() {
//!     println!("{}", instance.items()[item]);
//! }
//! ```
//!
//! ## Going further
//! The `io_utils` module reads instances from text files and the `harness`
//! module runs the solvers over whole directories of instances whose optimum
//! is known. This is what the `kp` executable is made of.

mod common;
mod abstraction;
mod implementation;

pub mod io_utils;
pub mod harness;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
