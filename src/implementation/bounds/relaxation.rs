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

//! This module implements the linear (LP) relaxation of the 0/1 knapsack. When
//! the items are sorted by decreasing efficiency, the optimum of the relaxation
//! is obtained by packing the items greedily and by packing a fraction of the
//! first item that does not fit. This value never underestimates the optimum
//! of the integral problem, which makes it an admissible upper bound.
//!
//! # Important:
//! All the functions of this module assume that the items are ordered by
//! non-increasing efficiency. This is *not* checked: the bounds computed on
//! an unsorted sequence are meaningless.

use crate::{Instance, Item, Profit, Weight};

/// Packs the given items greedily (in order) in a sack of the given capacity
/// and stops as soon as an item does not fit. It returns the position of that
/// item (or `items.len()` when they all fit) along with the total profit and
/// weight of the items which have been packed.
///
/// # Example
/// ```
/// # use kp::*;
/// let items = [Item::new(6, 2), Item::new(5, 3), Item::new(8, 6), Item::new(9, 7)];
/// assert_eq!((3, Item::new(19, 11)), split_item(&items, 15));
/// assert_eq!((4, Item::new(28, 18)), split_item(&items, 20));
/// ```
pub fn split_item(items: &[Item], capacity: Weight) -> (usize, Item) {
    let mut total = Item::default();
    for (i, item) in items.iter().enumerate() {
        if total.weight + item.weight > capacity {
            return (i, total);
        }
        total += *item;
    }
    (items.len(), total)
}

/// Returns the optimum of the linear relaxation of the whole instance. This
/// is a linear scan over the items: use `PrefixSums` when the relaxation of
/// many residual problems must be computed.
pub fn lkp(instance: &Instance) -> f64 {
    let capacity = instance.capacity();
    let (split, total) = split_item(instance.items(), capacity);
    match instance.items().get(split) {
        None => total.profit as f64,
        // the split item is heavier than the residual capacity, hence not weightless
        Some(item) => total.profit as f64 + (capacity - total.weight) as f64 * item.efficiency(),
    }
}

/// The cumulative profits and weights of a sequence of items: `Σ[0] = (0,0)`
/// and `Σ[k]` is the sum of the `k` first items. Because the cumulative weight
/// never decreases, the position of the item to split in a residual problem
/// can be found with a dichotomic search. This is how the linear relaxation
/// of any residual problem is computed in logarithmic time.
///
/// # Example
/// ```
/// # use kp::*;
/// let items = [Item::new(6, 2), Item::new(5, 3), Item::new(8, 6), Item::new(9, 7)];
/// let sums  = PrefixSums::new(&items);
///
/// // (6,2) + (5,3) + (8,6) fit, then 4/7 of (9,7)
/// assert!((sums.fractional(0, 15) - (19.0 + 36.0 / 7.0)).abs() < 1e-9);
/// assert_eq!(24, sums.upper_bound(0, 15));
/// // once the first item is decided, only (5,3) + (8,6) + 1/7 of (9,7) remain
/// assert_eq!(14, sums.upper_bound(1, 10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSums {
    sums: Vec<Item>,
}
impl PrefixSums {
    pub fn new(items: &[Item]) -> Self {
        let mut sums = Vec::with_capacity(items.len() + 1);
        let mut total = Item::default();
        sums.push(total);
        for item in items.iter() {
            total += *item;
            sums.push(total);
        }
        Self { sums }
    }
    /// The number of items these sums were computed from
    pub fn nb_items(&self) -> usize {
        self.sums.len() - 1
    }
    /// The cumulative sums, starting with `(0,0)`
    pub fn sums(&self) -> &[Item] {
        &self.sums
    }
    /// Locates the item which must be split when the items `i..` are packed
    /// greedily with the given residual capacity. It returns `None` when all
    /// the remaining items fit.
    fn split(&self, i: usize, capacity: Weight) -> Option<usize> {
        let w = capacity.saturating_add(self.sums[i].weight);
        let lb = i + 1 + self.sums[i + 1..].partition_point(|s| s.weight <= w);
        if lb == self.sums.len() {
            None
        } else {
            Some(lb - 1)
        }
    }
    /// Returns the optimum of the linear relaxation of the residual problem
    /// made of the items `i..` and of the given residual `capacity`. The value
    /// is relative: it does not account for the profit of the items `0..i`.
    ///
    /// # Panics
    /// if `i` is greater than the number of items.
    pub fn fractional(&self, i: usize, capacity: Weight) -> f64 {
        let offset = self.sums[i];
        match self.split(i, capacity) {
            None => (self.sums[self.nb_items()].profit - offset.profit) as f64,
            Some(plb) => {
                let base = self.sums[plb];
                let item = self.sums[plb + 1] - base;
                let room = capacity + offset.weight - base.weight;
                (base.profit - offset.profit) as f64 + room as f64 * item.efficiency()
            }
        }
    }
    /// Same as `fractional` but rounded down, using integer arithmetic only.
    /// Because the profit of any integral solution is an integer, rounding
    /// down preserves the admissibility of the bound.
    ///
    /// # Panics
    /// if `i` is greater than the number of items.
    pub fn upper_bound(&self, i: usize, capacity: Weight) -> Profit {
        let offset = self.sums[i];
        match self.split(i, capacity) {
            None => self.sums[self.nb_items()].profit - offset.profit,
            Some(plb) => {
                let base = self.sums[plb];
                let item = self.sums[plb + 1] - base;
                // room < item.weight, hence the fraction is less than item.profit
                let room = capacity + offset.weight - base.weight;
                let fraction = (room as u128 * item.profit as u128 / item.weight as u128) as Profit;
                base.profit - offset.profit + fraction
            }
        }
    }
}

#[cfg(test)]
mod test_relaxation {
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    use crate::*;

    fn example() -> Instance {
        Instance::new(15, vec![
            Item::new(6, 2), Item::new(5, 3), Item::new(8, 6), Item::new(9, 7),
            Item::new(6, 5), Item::new(7, 9), Item::new(3, 4),
        ])
    }

    fn assert_close(expected: f64, actual: f64) {
        assert!((expected - actual).abs() < 1e-9, "expected {expected} got {actual}");
    }

    #[test]
    fn prefix_sums_start_at_zero() {
        let sums = PrefixSums::new(example().items());
        assert_eq!(8, sums.sums().len());
        assert_eq!(7, sums.nb_items());
        assert_eq!(Item::new(0, 0), sums.sums()[0]);
        assert_eq!(Item::new(19, 11), sums.sums()[3]);
        assert_eq!(Item::new(44, 36), sums.sums()[7]);
    }
    #[test]
    fn prefix_sums_of_nothing() {
        let sums = PrefixSums::new(&[]);
        assert_eq!(0, sums.nb_items());
        assert_eq!(0, sums.upper_bound(0, 100));
        assert_close(0.0, sums.fractional(0, 100));
    }
    #[test]
    fn fractional_splits_the_first_item_that_does_not_fit() {
        let sums = PrefixSums::new(example().items());
        assert_close(19.0 + 36.0 / 7.0, sums.fractional(0, 15));
        assert_close(8.0 + 36.0 / 7.0, sums.fractional(2, 10));
    }
    #[test]
    fn fractional_is_the_remaining_profit_when_everything_fits() {
        let sums = PrefixSums::new(example().items());
        assert_close(44.0, sums.fractional(0, 100));
        assert_close(10.0, sums.fractional(5, 13));
        assert_close(0.0, sums.fractional(7, 5));
    }
    #[test]
    fn fractional_is_zero_without_capacity() {
        let sums = PrefixSums::new(example().items());
        assert_close(0.0, sums.fractional(0, 0));
        assert_close(0.0, sums.fractional(3, 0));
        assert_eq!(0, sums.upper_bound(3, 0));
    }
    #[test]
    fn upper_bound_is_the_rounded_down_fractional_value() {
        let sums = PrefixSums::new(example().items());
        for i in 0..=7 {
            for capacity in 0..40 {
                let expected = sums.fractional(i, capacity).floor() as Profit;
                assert_eq!(expected, sums.upper_bound(i, capacity), "i={i} capacity={capacity}");
            }
        }
    }
    #[test]
    fn exact_fits_use_the_next_item_for_the_fraction() {
        // 2 + 3 == 5: both items fit exactly, nothing of the third one does
        let sums = PrefixSums::new(&[Item::new(6, 2), Item::new(5, 3), Item::new(8, 6)]);
        assert_eq!(11, sums.upper_bound(0, 5));
        assert_close(11.0, sums.fractional(0, 5));
    }
    #[test]
    fn weightless_items_are_always_counted() {
        let mut kp = Instance::new(0, vec![Item::new(4, 1), Item::new(3, 0), Item::new(2, 0)]);
        kp.sort();
        let sums = PrefixSums::new(kp.items());
        assert_eq!(5, sums.upper_bound(0, 0));
        assert_eq!(5 + 4, sums.upper_bound(0, 1));
    }
    #[test]
    fn huge_capacities_do_not_overflow() {
        let sums = PrefixSums::new(example().items());
        assert_eq!(44, sums.upper_bound(3, Weight::MAX) + 19);
    }
    #[test]
    fn lkp_of_the_whole_instance_matches_the_prefix_sums() {
        let kp = example();
        let sums = PrefixSums::new(kp.items());
        assert_close(sums.fractional(0, kp.capacity()), lkp(&kp));
        assert_close(44.0, lkp(&Instance::new(50, kp.items().to_vec())));
        assert_close(0.0, lkp(&Instance::new(50, vec![])));
    }
    #[test]
    fn split_item_when_nothing_fits() {
        assert_eq!((0, Item::default()), split_item(&[Item::new(3, 4)], 3));
        assert_eq!((0, Item::default()), split_item(&[], 3));
    }
    #[test]
    fn relaxation_never_underestimates_the_integral_optimum() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let n = rng.gen_range(0..12);
            let items = (0..n)
                .map(|_| Item::new(rng.gen_range(0..30), rng.gen_range(1..20)))
                .collect::<Vec<_>>();
            let mut kp = Instance::new(0, items);
            kp.sort();
            let sums = PrefixSums::new(kp.items());
            for i in 0..=n {
                let capacity = rng.gen_range(0..60);
                let residual = Instance::new(capacity, kp.items()[i..].to_vec());
                let optimum = solve_dp(&residual).profit;
                assert!(sums.upper_bound(i, capacity) >= optimum);
                assert!(sums.fractional(i, capacity) + 1e-9 >= optimum as f64);
            }
        }
    }
}
