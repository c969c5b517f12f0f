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

//! This module computes the suffix-minimum item weights of an instance. The
//! branch-and-bound solver uses them as a cheap feasibility filter: when the
//! residual capacity of a node is smaller than the lightest of the items that
//! remain to be decided, no further item can be packed and the node needs not
//! be explored.

use crate::{Instance, Weight};

/// Returns a vector `w` such that `w[i]` is the minimum weight among the items
/// `i` to the last one. It is empty when the instance has no item.
///
/// # Example
/// ```
/// # use kp::*;
/// let kp = Instance::new(10, vec![Item::new(1, 4), Item::new(1, 7), Item::new(1, 2), Item::new(1, 5)]);
/// assert_eq!(vec![2, 2, 2, 5], minimum_weight_vec(&kp));
/// ```
pub fn minimum_weight_vec(instance: &Instance) -> Vec<Weight> {
    let mut min_weights = vec![0; instance.n()];
    let mut lightest = Weight::MAX;
    for (i, item) in instance.items().iter().enumerate().rev() {
        lightest = lightest.min(item.weight);
        min_weights[i] = lightest;
    }
    min_weights
}

#[cfg(test)]
mod test_min_weight {
    use crate::*;

    #[test]
    fn empty_instance_has_no_min_weight() {
        assert!(minimum_weight_vec(&Instance::new(10, vec![])).is_empty());
    }
    #[test]
    fn last_entry_is_the_weight_of_the_last_item() {
        let kp = Instance::new(10, vec![Item::new(1, 1), Item::new(9, 3)]);
        assert_eq!(vec![1, 3], minimum_weight_vec(&kp));
    }
    #[test]
    fn entries_never_decrease() {
        let kp = Instance::new(15, vec![
            Item::new(6, 2), Item::new(5, 3), Item::new(8, 6), Item::new(9, 7),
            Item::new(6, 5), Item::new(7, 9), Item::new(3, 4),
        ]);
        let min_weights = minimum_weight_vec(&kp);
        assert_eq!(vec![2, 3, 4, 4, 4, 4, 4], min_weights);
        assert!(min_weights.windows(2).all(|w| w[0] <= w[1]));
    }
    #[test]
    fn weightless_items_yield_zero() {
        let kp = Instance::new(15, vec![Item::new(6, 2), Item::new(5, 0), Item::new(8, 6)]);
        assert_eq!(vec![0, 0, 6], minimum_weight_vec(&kp));
    }
}
