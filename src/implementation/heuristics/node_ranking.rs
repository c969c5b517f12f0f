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

//! This module provides the implementation of node rankings that are used to
//! set the ordering of the solver frontier.

use std::cmp::Ordering;

use crate::{Node, NodeRanking};

/// The MaxUB (maximum upper bound) strategy is one that always selects the node
/// having the highest upper bound in the frontier. This is what makes the
/// branch-and-bound search a *best-first* search.
///
/// # Note
/// MaxUB considers all nodes having the same upper bound as equals. The
/// `SimpleFrontier` breaks these ties in insertion order.
///
/// # Example
/// ```
/// # use kp::*;
/// let node = |item, upperbound| Node { state: AssignmentSolution::new(3), item, upperbound };
///
/// let mut priority_q = SimpleFrontier::new(MaxUB);
/// priority_q.push(node(0, 300));
/// priority_q.push(node(1, 100));
/// priority_q.push(node(2, 700));
///
/// assert_eq!(700, priority_q.pop().unwrap().upperbound);
/// assert_eq!(300, priority_q.pop().unwrap().upperbound);
/// assert_eq!(100, priority_q.pop().unwrap().upperbound);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxUB;
impl NodeRanking for MaxUB {
    fn compare(&self, l: &Node, r: &Node) -> Ordering {
        l.upperbound.cmp(&r.upperbound)
    }
}

#[cfg(test)]
mod test_maxub {
    use std::cmp::Ordering;

    use crate::*;

    fn node(item: ItemId, upperbound: Profit) -> Node {
        Node { state: AssignmentSolution::new(4), item, upperbound }
    }

    #[test]
    fn gt_because_ub() {
        assert_eq!(Ordering::Greater, MaxUB.compare(&node(0, 300), &node(0, 100)));
    }
    #[test]
    fn lt_because_ub() {
        assert_eq!(Ordering::Less, MaxUB.compare(&node(0, 100), &node(0, 300)));
    }
    #[test]
    fn eq_whatever_the_depth() {
        assert_eq!(Ordering::Equal, MaxUB.compare(&node(0, 100), &node(3, 100)));
    }
}
