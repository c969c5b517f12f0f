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

//! This module defines the `Solver` trait.

use crate::{AssignmentSolution, Error, Instance};

/// This is the solver abstraction. It is implemented by the structures that
/// know how to find an optimal solution to a 0/1 knapsack instance.
pub trait Solver {
    /// A human readable description of the algorithm
    fn name(&self) -> &str;

    /// Returns true iff this solver can only be used on instances whose items
    /// have been sorted by decreasing efficiency (see `Instance::sort`).
    fn requires_sorted_items(&self) -> bool {
        false
    }

    /// Checks that the given instance satisfies the preconditions of this
    /// solver. Calling `solve` on an instance that fails this check yields
    /// an unspecified (possibly suboptimal) solution.
    fn check(&self, instance: &Instance) -> Result<(), Error> {
        if self.requires_sorted_items() && !instance.is_sorted() {
            Err(Error::UnsortedItems)
        } else {
            Ok(())
        }
    }

    /// This method searches for the optimal solution among all possibilities.
    /// The returned assignment refers to the items in the order in which
    /// they appear in `instance`.
    fn solve(&self, instance: &Instance) -> AssignmentSolution;
}
