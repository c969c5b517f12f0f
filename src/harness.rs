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

//! This module runs solvers over batches of instances whose optimum is known
//! and checks their answers. This is what the `kp` executable does when it is
//! given a directory.

use std::{path::Path, time::Instant};

use log::{error, info};

use crate::{check_solution, io_utils::{read_instances, SolvedInstance}, Bellman, BestFirstSearch,
    Error, Profit, Solver, Violation};

/// A run whose outcome is not the expected one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// The name of the solver that failed
    pub solver: String,
    /// The name of the instance it failed on
    pub instance: String,
    /// The known optimum of the instance
    pub expected: Profit,
    /// The profit of the solution returned by the solver
    pub found: Profit,
    /// What the validator had to say about the solution
    pub diagnostics: Vec<Violation>,
}

/// The outcome of a batch of runs
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// The number of (solver, instance) pairs which have been run
    pub runs: usize,
    pub failures: Vec<Failure>,
}
impl Report {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The solvers which are run by `test_directory`
pub fn default_solvers() -> Vec<Box<dyn Solver>> {
    vec![Box::new(Bellman), Box::new(BestFirstSearch::new())]
}

/// Solves the given instance with the given solver and checks the outcome.
/// The instance is sorted beforehand when the solver requires it; the time
/// it takes is accounted for in the logged duration.
pub fn run(solver: &dyn Solver, solved: &SolvedInstance) -> Result<Option<Failure>, Error> {
    let mut instance = solved.instance.clone();

    let start = Instant::now();
    if solver.requires_sorted_items() {
        instance.sort();
    }
    solver.check(&instance)?;
    let solution = solver.solve(&instance);
    let elapsed = start.elapsed();
    info!("{} : {:.3} ms", solved.name, elapsed.as_secs_f64() * 1000.0);

    let validation = check_solution(&instance, &solution);
    if solution.profit != solved.optimum || !validation.is_well_formed() {
        error!("fail on instance {} (expected {}, found {})", solved.name, solved.optimum, solution.profit);
        Ok(Some(Failure {
            solver: solver.name().to_string(),
            instance: solved.name.clone(),
            expected: solved.optimum,
            found: solution.profit,
            diagnostics: validation.diagnostics,
        }))
    } else {
        Ok(None)
    }
}

/// Runs every solver on every instance
pub fn test_instances(solvers: &[Box<dyn Solver>], instances: &[SolvedInstance]) -> Result<Report, Error> {
    let mut report = Report::default();
    for solver in solvers.iter() {
        info!("{}", solver.name());
        for solved in instances.iter() {
            report.runs += 1;
            if let Some(failure) = run(solver.as_ref(), solved)? {
                report.failures.push(failure);
            }
        }
    }
    Ok(report)
}

/// Runs the default solvers on all the instances of the given directory
/// (see `io_utils::read_instances`).
pub fn test_directory<P: AsRef<Path>>(dir: P) -> Result<Report, Error> {
    let dir = dir.as_ref();
    info!("testing instances from {}", dir.display());
    let instances = read_instances(dir)?;
    test_instances(&default_solvers(), &instances)
}

#[cfg(test)]
mod test_harness {
    use crate::*;
    use crate::harness::*;
    use crate::io_utils::SolvedInstance;

    fn solved(optimum: Profit) -> SolvedInstance {
        SolvedInstance {
            name: "minimal".to_string(),
            instance: Instance::new(15, vec![
                Item::new(3, 4), Item::new(7, 9), Item::new(9, 7), Item::new(6, 2),
                Item::new(6, 5), Item::new(8, 6), Item::new(5, 3),
            ]),
            optimum,
        }
    }

    /// A solver that always packs the first item, whether it fits or not
    struct Greedy;
    impl Solver for Greedy {
        fn name(&self) -> &str {
            "greedy"
        }
        fn solve(&self, instance: &Instance) -> AssignmentSolution {
            let mut solution = AssignmentSolution::new(instance.n());
            solution.include(0, instance.items()[0]);
            solution
        }
    }

    #[test]
    fn unsorted_instances_are_sorted_for_the_solvers_requiring_it() {
        let report = test_instances(&default_solvers(), &[solved(23)]).unwrap();
        assert_eq!(2, report.runs);
        assert!(report.is_success());
    }
    #[test]
    fn a_wrong_optimum_is_a_failure() {
        let failure = run(&Bellman, &solved(24)).unwrap().unwrap();
        assert_eq!("Bellman (Dynamic Programming)", failure.solver);
        assert_eq!("minimal", failure.instance);
        assert_eq!(24, failure.expected);
        assert_eq!(23, failure.found);
        assert!(failure.diagnostics.is_empty());
    }
    #[test]
    fn a_suboptimal_solver_fails() {
        let solvers: Vec<Box<dyn Solver>> = vec![Box::new(Greedy)];
        let report = test_instances(&solvers, &[solved(23)]).unwrap();
        assert_eq!(1, report.failures.len());
        assert_eq!(3, report.failures[0].found);
    }
}
