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

//! This module provides the implementation of the cutoff heuristics that can
//! be used to interrupt the branch-and-bound search.

use std::time::{Duration, Instant};

use crate::Cutoff;

/// _This is the default cutoff heuristic._ It imposes that the search proves
/// optimality before to stop.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCutoff;
impl Cutoff for NoCutoff {
    fn must_stop(&self) -> bool {
        false
    }
}

/// This cutoff allows one to specify a maximum time budget to solve the problem.
/// Once the time budget is elapsed, the search stops and the best solution
/// that has been found (so far) is returned.
///
/// # Note
/// The budget starts running when the cutoff is created, not when the search
/// begins.
///
/// # Example
/// ```
/// # use kp::*;
/// use std::time::Duration;
///
/// let kp     = Instance::new(15, vec![Item::new(6, 2), Item::new(5, 3), Item::new(8, 6)]);
/// let solver = BestFirstSearch::with_cutoff(TimeBudget::new(Duration::from_secs(10)));
/// let (solution, completion) = solver.maximize(&kp); // will run for maximum 10 seconds
///
/// assert!(completion.is_exact);
/// assert_eq!(19, solution.profit);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    deadline: Instant,
}
impl TimeBudget {
    pub fn new(budget: Duration) -> Self {
        Self { deadline: Instant::now() + budget }
    }
}
impl Cutoff for TimeBudget {
    fn must_stop(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

#[cfg(test)]
mod test_cutoff {
    use std::time::Duration;

    use crate::*;

    #[test]
    fn no_cutoff_never_stops() {
        assert!(!NoCutoff.must_stop());
    }
    #[test]
    fn time_budget_stops_once_elapsed() {
        assert!(TimeBudget::new(Duration::ZERO).must_stop());
        assert!(!TimeBudget::new(Duration::from_secs(3600)).must_stop());
    }
}
