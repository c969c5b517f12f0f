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

//! This module contains everything that is necessary to parse a knapsack
//! instance (and its known optimum) from file and turn it into structs usable
//! in Rust.
//!
//! An instance file starts with two integers: the number of items `n` and the
//! capacity of the sack. These are followed by `n` pairs `profit weight`,
//! conventionally one per line. A directory of instances holds `<name>.kp`
//! files along with their optimum in `solution/<name>.sol`.

use std::{ffi::OsStr, fs, path::Path};

use log::{debug, warn};

use crate::{Error, Instance, Item, Profit, Weight};

/// The extension of the instance files
pub const INSTANCE_EXT: &str = "kp";
/// The extension of the files holding the optimum of an instance
pub const SOLUTION_EXT: &str = "sol";

/// An instance whose optimal profit is known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedInstance {
    /// The name of the instance (stem of its file name)
    pub name: String,
    pub instance: Instance,
    /// The optimal profit of the instance
    pub optimum: Profit,
}

fn next_token<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<&'a str, Error> {
    tokens.next().ok_or_else(|| Error::Format(format!("missing {what}")))
}

/// Parses an instance from its textual representation.
///
/// # Example
/// ```
/// # use kp::*;
/// # use kp::io_utils::parse_instance;
/// let kp = parse_instance("3 10\n4 5\n3 4\n2 3\n").unwrap();
/// assert_eq!(3, kp.n());
/// assert_eq!(10, kp.capacity());
/// assert_eq!(Item::new(3, 4), kp.items()[1]);
/// ```
pub fn parse_instance(text: &str) -> Result<Instance, Error> {
    let mut tokens = text.split_whitespace();
    let n = next_token(&mut tokens, "number of items")?.parse::<usize>()?;
    let capacity = next_token(&mut tokens, "capacity")?.parse::<Weight>()?;

    let mut items = Vec::with_capacity(n);
    for i in 0..n {
        let profit = match tokens.next() {
            Some(token) => token.parse::<Profit>()?,
            None => return Err(Error::ItemCountMismatch { expected: n, actual: i }),
        };
        let weight = next_token(&mut tokens, "weight of the last item")?.parse::<Weight>()?;
        items.push(Item::new(profit, weight));
    }

    let trailing = tokens.count();
    if trailing > 0 {
        return Err(Error::ItemCountMismatch { expected: n, actual: n + (trailing + 1) / 2 });
    }
    Ok(Instance::new(capacity, items))
}

/// This function is used to read a knapsack instance from file. It returns
/// either the instance if everything went on well or an error describing the
/// problem.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Instance, Error> {
    parse_instance(&fs::read_to_string(fname)?)
}

/// Reads the optimal profit stored in a solution file: that is the first
/// integer of the file.
pub fn read_optimum<P: AsRef<Path>>(fname: P) -> Result<Profit, Error> {
    let text = fs::read_to_string(fname)?;
    let mut tokens = text.split_whitespace();
    Ok(next_token(&mut tokens, "optimal profit")?.parse::<Profit>()?)
}

/// Reads all the instances of a directory along with their optimum. The
/// instances lacking a solution file are skipped. The instances are returned
/// in the lexicographic order of their names.
pub fn read_instances<P: AsRef<Path>>(dir: P) -> Result<Vec<SolvedInstance>, Error> {
    let dir = dir.as_ref();
    let mut instances = vec![];

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension() != Some(OsStr::new(INSTANCE_EXT)) {
            continue;
        }
        let name = match path.file_stem().and_then(OsStr::to_str) {
            Some(name) => name.to_string(),
            None => continue,
        };
        let solution = dir.join("solution").join(format!("{name}.{SOLUTION_EXT}"));
        if !solution.exists() {
            warn!("the solution file of the instance {name} doesn't exist. Skipping it.");
            continue;
        }
        debug!("reading instance {name}");
        instances.push(SolvedInstance {
            instance: read_instance(&path)?,
            optimum: read_optimum(&solution)?,
            name,
        });
    }

    instances.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(instances)
}
