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

//! This module provides the implementation of the solution validator. It
//! recomputes the profit and weight of a solution from scratch and reports
//! every discrepancy it finds.

use log::error;

use crate::{AssignmentSolution, Instance, Item, Profit, Weight};

/// A defect found in a solution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// The solution does not hold one flag per item
    #[error("solution's size is incorrect: {actual} flags for {expected} items")]
    SizeMismatch { expected: usize, actual: usize },
    /// The claimed profit is not the total profit of the packed items
    #[error("solution's profit is incorrect: claims {claimed} but the packed items are worth {actual}")]
    ProfitMismatch { claimed: Profit, actual: Profit },
    /// The claimed weight is not the total weight of the packed items
    #[error("solution's weight is incorrect: claims {claimed} but the packed items weigh {actual}")]
    WeightMismatch { claimed: Weight, actual: Weight },
    /// The packed items do not fit in the sack
    #[error("the solution violates the capacity constraint: {weight} > {capacity}")]
    CapacityExceeded { weight: Weight, capacity: Weight },
}

/// The verdict of the validator
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Validation {
    /// True iff the profit, the weight or the capacity check failed
    pub is_invalid: bool,
    /// One entry per failed check
    pub diagnostics: Vec<Violation>,
}
impl Validation {
    /// Returns true iff no check failed at all (including the size check)
    pub fn is_well_formed(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Checks the given solution against the instance it claims to solve. Each
/// failed check is logged and reported as a diagnostic.
///
/// # Note:
/// When the solution does not hold exactly one flag per item, the other
/// checks are meaningless: they are skipped and only the size mismatch is
/// reported. That case does not set `is_invalid`; use `is_well_formed`
/// to reject it.
///
/// # Example
/// ```
/// # use kp::*;
/// let kp = Instance::new(5, vec![Item::new(6, 2), Item::new(5, 3), Item::new(8, 6)]);
/// let mut solution = AssignmentSolution::new(3);
/// solution.include(0, Item::new(6, 2));
/// solution.include(1, Item::new(5, 3));
/// assert!(check_solution(&kp, &solution).is_well_formed());
///
/// solution.profit = 12;
/// let validation = check_solution(&kp, &solution);
/// assert!(validation.is_invalid);
/// assert_eq!(vec![Violation::ProfitMismatch { claimed: 12, actual: 11 }], validation.diagnostics);
/// ```
pub fn check_solution(instance: &Instance, solution: &AssignmentSolution) -> Validation {
    let mut diagnostics = vec![];

    if instance.n() != solution.assignment.len() {
        diagnostics.push(Violation::SizeMismatch { expected: instance.n(), actual: solution.assignment.len() });
    } else {
        let total: Item = instance.items().iter()
            .zip(solution.assignment.iter())
            .filter_map(|(item, packed)| if *packed { Some(*item) } else { None })
            .sum();

        if total.profit != solution.profit {
            diagnostics.push(Violation::ProfitMismatch { claimed: solution.profit, actual: total.profit });
        }
        if total.weight != solution.weight {
            diagnostics.push(Violation::WeightMismatch { claimed: solution.weight, actual: total.weight });
        }
        if total.weight > instance.capacity() {
            diagnostics.push(Violation::CapacityExceeded { weight: total.weight, capacity: instance.capacity() });
        }
    }

    for violation in diagnostics.iter() {
        error!("{violation}");
    }
    let is_invalid = diagnostics.iter().any(|v| !matches!(v, Violation::SizeMismatch { .. }));
    Validation { is_invalid, diagnostics }
}
