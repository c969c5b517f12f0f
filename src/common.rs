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
//! the code of our library: the items, the knapsack instances and the shapes
//! a solution can take. These are also the types your client code is likely
//! to work with.

use std::{cmp::Ordering, fmt, iter::Sum, num::ParseIntError, ops::{Add, AddAssign, Sub, SubAssign}};

/// The type used to represent the profit of an item (or of a whole solution)
pub type Profit = u64;
/// The type used to represent the weight of an item and the knapsack capacity
pub type Weight = u64;
/// Items are identified by their position in the instance
pub type ItemId = usize;

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An item that can be packed in the sack. Items double as (profit, weight)
/// accumulators: the sum of several items is an item whose profit and weight
/// are the totals of the summed items.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub profit: Profit,
    pub weight: Weight,
}
impl Item {
    pub const fn new(profit: Profit, weight: Weight) -> Self {
        Self { profit, weight }
    }
    /// Returns the profit to weight ratio of this item.
    ///
    /// An item which weighs nothing is infinitely efficient, unless it
    /// is also worth nothing (in which case its efficiency is zero).
    ///
    /// # Examples:
    /// ```
    /// # use kp::Item;
    /// assert_eq!(3.0, Item::new(6, 2).efficiency());
    /// assert_eq!(f64::INFINITY, Item::new(6, 0).efficiency());
    /// assert_eq!(0.0, Item::new(0, 0).efficiency());
    /// ```
    pub fn efficiency(self) -> f64 {
        match (self.profit, self.weight) {
            (0, 0) => 0.0,
            (_, 0) => f64::INFINITY,
            (p, w) => p as f64 / w as f64,
        }
    }
    /// Compares the efficiency of two items without any rounding: the ratios
    /// are compared by cross multiplication. Weightless items are considered
    /// more efficient than any other; among themselves the most profitable
    /// one is the most efficient.
    pub fn cmp_efficiency(&self, other: &Item) -> Ordering {
        match (self.weight, other.weight) {
            (0, 0) => self.profit.cmp(&other.profit),
            (0, _) => Ordering::Greater,
            (_, 0) => Ordering::Less,
            (w1, w2) => {
                let lhs = self.profit as u128 * w2 as u128;
                let rhs = other.profit as u128 * w1 as u128;
                lhs.cmp(&rhs)
            }
        }
    }
    /// Returns true iff the item can be packed in a sack with the given
    /// residual capacity.
    pub fn fits(self, capacity: Weight) -> bool {
        self.weight <= capacity
    }
}
impl AddAssign for Item {
    fn add_assign(&mut self, rhs: Self) {
        self.profit += rhs.profit;
        self.weight += rhs.weight;
    }
}
impl SubAssign for Item {
    fn sub_assign(&mut self, rhs: Self) {
        self.profit -= rhs.profit;
        self.weight -= rhs.weight;
    }
}
impl Add for Item {
    type Output = Item;
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}
impl Sub for Item {
    type Output = Item;
    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}
impl Sum for Item {
    fn sum<I: Iterator<Item = Item>>(iter: I) -> Self {
        iter.fold(Item::default(), Add::add)
    }
}
impl <'a> Sum<&'a Item> for Item {
    fn sum<I: Iterator<Item = &'a Item>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ----------------------------------------------------------------------------
// --- INSTANCE ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A 0/1 knapsack problem: a set of items and the capacity of the sack.
///
/// The number of items `n` is always the length of the item list. Once it has
/// been created, the only way to alter an instance is to `sort` its items.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Instance {
    items: Vec<Item>,
    capacity: Weight,
}
impl Instance {
    pub fn new(capacity: Weight, items: Vec<Item>) -> Self {
        Self { items, capacity }
    }
    pub fn items(&self) -> &[Item] {
        &self.items
    }
    /// The number of items in this instance
    pub fn n(&self) -> usize {
        self.items.len()
    }
    pub fn capacity(&self) -> Weight {
        self.capacity
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    /// Reorders the items by decreasing efficiency. The sort is stable: items
    /// having the same efficiency keep their relative order.
    ///
    /// # Note:
    /// The ids of the items change: any solution to the sorted instance
    /// refers to the items in their sorted order.
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| b.cmp_efficiency(a));
    }
    /// Returns true iff the items are ordered by non-increasing efficiency.
    pub fn is_sorted(&self) -> bool {
        self.items.windows(2)
            .all(|w| w[0].cmp_efficiency(&w[1]) != Ordering::Less)
    }
}

// ----------------------------------------------------------------------------
// --- SOLUTIONS --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A solution expressed as one inclusion flag per item of the instance (in the
/// order of the instance) along with the total profit and weight of the
/// included items.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct AssignmentSolution {
    pub assignment: Vec<bool>,
    pub profit: Profit,
    pub weight: Weight,
}
impl AssignmentSolution {
    /// Creates the empty solution for an instance having `n` items.
    pub fn new(n: usize) -> Self {
        Self { assignment: vec![false; n], profit: 0, weight: 0 }
    }
    /// Packs the item `id` whose profit and weight are those of `item`.
    pub fn include(&mut self, id: ItemId, item: Item) {
        self.assignment[id] = true;
        self.profit += item.profit;
        self.weight += item.weight;
    }
    /// Iterates over the ids of the packed items
    pub fn selected(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.assignment.iter().enumerate()
            .filter_map(|(i, x)| if *x { Some(i) } else { None })
    }
    /// The total profit and weight claimed by this solution
    pub fn total(&self) -> Item {
        Item::new(self.profit, self.weight)
    }
}

/// A sparse representation of a solution: the ids of the packed items.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct SetSolution {
    pub items: Vec<ItemId>,
    pub profit: Profit,
    pub weight: Weight,
}
impl SetSolution {
    /// Expands this solution into one flag per item of an instance having
    /// `n` items. Ids beyond `n` are ignored.
    pub fn to_assignment(&self, n: usize) -> AssignmentSolution {
        let mut assignment = vec![false; n];
        for id in self.items.iter().copied().filter(|id| *id < n) {
            assignment[id] = true;
        }
        AssignmentSolution { assignment, profit: self.profit, weight: self.weight }
    }
}
impl From<&AssignmentSolution> for SetSolution {
    fn from(s: &AssignmentSolution) -> Self {
        Self { items: s.selected().collect(), profit: s.profit, weight: s.weight }
    }
}

// ----------------------------------------------------------------------------
// --- NODE -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A node of the branch-and-bound search tree. It stands for the partial
/// assignment `state` in which the items `0..item` have been decided, and
/// caches an upper bound on the profit of any completion of that assignment.
///
/// # Note:
/// Nodes are instanciated by the branch-and-bound solver. Unless you write
/// your own frontier or node ranking, you don't need to create any yourself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The partial assignment (items `item..` are all unpacked)
    pub state: AssignmentSolution,
    /// The next item to branch on
    pub item: ItemId,
    /// An upper bound on the profit reachable from this node
    pub upperbound: Profit,
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a search
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Completion {
    /// is the returned solution proved optimal? It can only be false when
    /// the search has been interrupted by a cutoff.
    pub is_exact: bool,
    /// the number of search nodes which have been expanded
    pub explored: usize,
}

// ----------------------------------------------------------------------------
// --- ERRORS -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This enumeration groups the kind of errors that might occur when using this
/// library. There can be io errors (file unavailable ?), format errors (e.g.
/// the file is not an instance but contains the text of your next paper),
/// parse int errors (the parser expected an integer but got something else),
/// or an instance that does not satisfy the precondition of a solver.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read something that was an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The input is not laid out as expected
    #[error("format error: {0}")]
    Format(String),
    /// The header announces a number of items which is not the one being read
    #[error("the instance announces {expected} items but {actual} were found")]
    ItemCountMismatch { expected: usize, actual: usize },
    /// The solver requires the items to be sorted by decreasing efficiency
    #[error("the items are not sorted by decreasing efficiency")]
    UnsortedItems,
    /// The dynamic programming table of the instance cannot be addressed
    #[error("a table of {items} rows for a capacity of {capacity} does not fit in memory")]
    TableTooLarge { capacity: Weight, items: usize },
}

// ----------------------------------------------------------------------------
// --- DISPLAY ----------------------------------------------------------------
// ----------------------------------------------------------------------------
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.profit, self.weight)
    }
}
impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Items: [ ")?;
        for item in self.items.iter() {
            write!(f, "{item} ")?;
        }
        writeln!(f, "]")?;
        writeln!(f, "Capacity: {}", self.capacity)
    }
}
impl fmt::Display for AssignmentSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Solution: [ ")?;
        for x in self.assignment.iter() {
            write!(f, "{} ", u8::from(*x))?;
        }
        writeln!(f, "]")?;
        writeln!(f, "Profit: {}", self.profit)?;
        writeln!(f, "Weight: {}", self.weight)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################


#[cfg(test)]
mod test_instance {
    use crate::{Instance, Item};

    fn example() -> Instance {
        Instance::new(15, vec![
            Item::new(3, 4), Item::new(6, 2), Item::new(7, 9), Item::new(5, 3),
            Item::new(9, 7), Item::new(6, 5), Item::new(8, 6),
        ])
    }

    #[test]
    fn n_is_the_number_of_items() {
        assert_eq!(7, example().n());
        assert_eq!(0, Instance::new(10, vec![]).n());
    }
    #[test]
    fn sort_orders_by_decreasing_efficiency() {
        let mut kp = example();
        assert!(!kp.is_sorted());
        kp.sort();
        assert!(kp.is_sorted());
        assert_eq!(kp.items(), &[
            Item::new(6, 2), Item::new(5, 3), Item::new(8, 6), Item::new(9, 7),
            Item::new(6, 5), Item::new(7, 9), Item::new(3, 4),
        ]);
        assert_eq!(15, kp.capacity());
    }
    #[test]
    fn sort_is_stable() {
        let mut kp = Instance::new(10, vec![Item::new(2, 4), Item::new(5, 1), Item::new(1, 2)]);
        kp.sort();
        assert_eq!(kp.items(), &[Item::new(5, 1), Item::new(2, 4), Item::new(1, 2)]);
    }
    #[test]
    fn empty_instance_is_sorted() {
        assert!(Instance::new(3, vec![]).is_sorted());
    }
    #[test]
    fn display_lists_items_and_capacity() {
        let kp = Instance::new(5, vec![Item::new(1, 2), Item::new(3, 4)]);
        assert_eq!("Items: [ (1,2) (3,4) ]\nCapacity: 5\n", kp.to_string());
    }
}
