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

//! This module provides the dynamic programming solver (Bellman's recursion)
//! for the 0/1 knapsack.

use bit_vec::BitVec;

use crate::{AssignmentSolution, Error, Instance, Profit, Solver};

/// Solves the knapsack with Bellman's recursion. It keeps one row of
/// `capacity + 1` profits, where `max_profit[c]` is the best profit achievable
/// within a budget `c` with the items processed so far, and one indicator bit
/// per (item, budget) pair telling whether packing the item improved that
/// cell. The optimal assignment is rebuilt by walking the indicators backwards.
///
/// It runs in O(n·capacity) time and uses O(n·capacity) bits of memory. The
/// order of the items does not matter.
///
/// # Panics
/// The running time is pseudo-polynomial: the n·(capacity + 1) indicator table
/// must be addressable on the target. `Solver::check` fails with
/// `Error::TableTooLarge` when it is not, and `solve` panics in that case.
///
/// # Example
/// ```
/// # use kp::*;
/// let kp = Instance::new(50, vec![Item::new(60, 10), Item::new(100, 20), Item::new(120, 30)]);
/// let solution = Bellman.solve(&kp);
///
/// assert_eq!(220, solution.profit);
/// assert_eq!(vec![false, true, true], solution.assignment);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Bellman;

/// Returns the length of a row of the table (one cell per budget in
/// `0..=capacity`) and the number of indicator bits, if both fit in a `usize`.
fn table_size(instance: &Instance) -> Option<(usize, usize)> {
    let row_size = usize::try_from(instance.capacity()).ok()?.checked_add(1)?;
    let nb_bits = row_size.checked_mul(instance.n())?;
    Some((row_size, nb_bits))
}

impl Solver for Bellman {
    fn name(&self) -> &str {
        "Bellman (Dynamic Programming)"
    }

    fn check(&self, instance: &Instance) -> Result<(), Error> {
        match table_size(instance) {
            Some(_) => Ok(()),
            None => Err(Error::TableTooLarge { capacity: instance.capacity(), items: instance.n() }),
        }
    }

    fn solve(&self, instance: &Instance) -> AssignmentSolution {
        let Some((row_size, nb_bits)) = table_size(instance) else {
            panic!("capacity {} is too large for a dynamic programming table", instance.capacity());
        };
        let capacity = row_size - 1;
        let mut max_profit: Vec<Profit> = vec![0; row_size];
        let mut indicator = BitVec::from_elem(nb_bits, false);

        for (i, item) in instance.items().iter().enumerate() {
            if !item.fits(instance.capacity()) {
                continue;
            }
            let weight = item.weight as usize;
            let cell = i * row_size;
            // decreasing budgets, so that an item is never packed twice
            for d in (weight..=capacity).rev() {
                let new_profit = item.profit + max_profit[d - weight];
                if new_profit > max_profit[d] {
                    max_profit[d] = new_profit;
                    indicator.set(cell + d, true);
                }
            }
        }

        let mut solution = AssignmentSolution::new(instance.n());
        let mut budget = capacity;
        for (i, item) in instance.items().iter().enumerate().rev() {
            if indicator[i * row_size + budget] {
                solution.include(i, *item);
                budget -= item.weight as usize;
            }
        }
        debug_assert_eq!(max_profit[capacity], solution.profit);
        solution
    }
}
