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

//! This executable solves knapsack instances to optimality. When given a
//! directory, it runs all the solvers on the instances of that directory and
//! checks their answers against the known optima. Otherwise, it solves a
//! minimal example and prints the solution.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{error, info, LevelFilter};

use kp::{harness::test_directory, solve_dp, Error, Instance, Item};

/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// A directory holding `.kp` instances and their optimum in `solution/<name>.sol`
    dir: Option<PathBuf>,
    /// Increases the verbosity of the logs (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn minimal_example() {
    // X* = {0, 2, 3} value = 23
    let instance = Instance::new(15, vec![
        Item::new(6, 2), Item::new(5, 3), Item::new(8, 6), Item::new(9, 7),
        Item::new(6, 5), Item::new(7, 9), Item::new(3, 4),
    ]);
    let solution = solve_dp(&instance);
    println!("Minimal example:\n{instance}\n{solution}");
}

/// This is your executable's entry point. It is the place where all the pieces
/// are put together.
fn main() -> Result<ExitCode, Error> {
    let args = Args::parse();
    init_logger(args.verbose);

    let Some(dir) = args.dir else {
        minimal_example();
        return Ok(ExitCode::SUCCESS);
    };

    let report = test_directory(&dir)?;
    for failure in report.failures.iter() {
        println!("[Error] {} failed on instance {}: expected {}, found {}",
            failure.solver, failure.instance, failure.expected, failure.found);
        for diagnostic in failure.diagnostics.iter() {
            println!("        {diagnostic}");
        }
    }
    println!("{} runs, {} failures", report.runs, report.failures.len());

    if report.is_success() {
        info!("all runs succeeded");
        Ok(ExitCode::SUCCESS)
    } else {
        error!("{} runs failed", report.failures.len());
        Ok(ExitCode::FAILURE)
    }
}
