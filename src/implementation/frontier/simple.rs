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

//! This module provides the implementation of a simple solver frontier (priority queue)

use std::cmp::Ordering;

use binary_heap_plus::BinaryHeap;
use compare::Compare;

use crate::{Frontier, Node, NodeRanking};

/// A node along with the moment at which it entered the frontier
#[derive(Debug)]
struct Entry {
    seq: u64,
    node: Node,
}

/// Orders the entries with the node ranking and breaks ties in FIFO order:
/// among equally ranked nodes, the oldest one pops first.
#[derive(Debug, Clone, Copy)]
struct FifoTies<O: NodeRanking>(O);
impl <O: NodeRanking> Compare<Entry> for FifoTies<O> {
    fn compare(&self, l: &Entry, r: &Entry) -> Ordering {
        self.0.compare(&l.node, &r.node)
            .then_with(|| r.seq.cmp(&l.seq))
    }
}

/// The simplest frontier implementation you can think of: is basically consists
/// of a binary heap that pushes and pops frontier nodes
///
/// # Note
/// This is the type of frontier used by the best-first solver. Nodes which are
/// ranked equal by the node ranking pop in the order in which they were
/// pushed, which makes the search deterministic.
pub struct SimpleFrontier<O: NodeRanking> {
    heap: BinaryHeap<Entry, FifoTies<O>>,
    seq: u64,
}
impl <O> SimpleFrontier<O> where O: NodeRanking {
    /// This creates a new simple frontier which uses a custom node ranking.
    pub fn new(o: O) -> Self {
        Self { heap: BinaryHeap::from_vec_cmp(vec![], FifoTies(o)), seq: 0 }
    }
}
impl <O> Frontier for SimpleFrontier<O> where O: NodeRanking {
    fn push(&mut self, node: Node) {
        self.seq += 1;
        self.heap.push(Entry { seq: self.seq, node })
    }

    fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|e| e.node)
    }

    fn clear(&mut self) {
        self.heap.clear()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod test_simple_frontier {
    use crate::*;

    fn node(item: ItemId, upperbound: Profit) -> Node {
        Node { state: AssignmentSolution::new(4), item, upperbound }
    }

    // by default, it is empty
    #[test]
    fn by_default_it_is_empty() {
        let front = SimpleFrontier::new(MaxUB);
        assert!(front.is_empty())
    }

    // when the size is zero, then it is empty
    #[test]
    fn when_the_size_is_zero_then_it_is_empty() {
        let frontier = SimpleFrontier::new(MaxUB);
        assert_eq!(frontier.len(), 0);
        assert!(frontier.is_empty());
    }

    // when the size is greater than zero, it it not empty
    #[test]
    fn when_the_size_is_greater_than_zero_it_is_not_empty() {
        let mut frontier = SimpleFrontier::new(MaxUB);
        frontier.push(node(0, 10));
        assert_eq!(frontier.len(), 1);
        assert!(!frontier.is_empty());
    }

    // when I push a node onto the frontier then the length increases
    #[test]
    fn when_i_push_a_node_onto_the_frontier_then_the_length_increases() {
        let mut frontier = SimpleFrontier::new(MaxUB);
        frontier.push(node(0, 10));
        frontier.push(node(1, 20));
        assert_eq!(frontier.len(), 2);
    }

    // when I pop a node off the frontier then the length decreases
    #[test]
    fn when_i_pop_a_node_off_the_frontier_then_the_length_decreases() {
        let mut frontier = SimpleFrontier::new(MaxUB);
        frontier.push(node(0, 10));
        frontier.push(node(1, 20));
        frontier.pop();
        assert_eq!(frontier.len(), 1);
    }

    // when I try to pop a node off an empty frontier, I get none
    #[test]
    fn when_i_try_to_pop_a_node_off_an_empty_frontier_i_get_none() {
        let mut frontier = SimpleFrontier::new(MaxUB);
        assert_eq!(frontier.pop(), None);
    }

    // when I pop a node, it is always the one with the largest ub
    #[test]
    fn when_i_pop_a_node_it_is_always_the_one_with_the_largest_ub() {
        let mut frontier = SimpleFrontier::new(MaxUB);
        frontier.push(node(0, 13));
        frontier.push(node(1, 700));
        frontier.push(node(2, 150));
        frontier.push(node(3, 300));

        let ubs = std::iter::from_fn(|| frontier.pop())
            .map(|n| n.upperbound)
            .collect::<Vec<_>>();
        assert_eq!(vec![700, 300, 150, 13], ubs);
    }

    // when nodes share the same ub, they pop in insertion order
    #[test]
    fn when_nodes_share_the_same_ub_they_pop_in_insertion_order() {
        let mut frontier = SimpleFrontier::new(MaxUB);
        frontier.push(node(2, 100));
        frontier.push(node(0, 100));
        frontier.push(node(3, 200));
        frontier.push(node(1, 100));

        let items = std::iter::from_fn(|| frontier.pop())
            .map(|n| n.item)
            .collect::<Vec<_>>();
        assert_eq!(vec![3, 2, 0, 1], items);
    }

    // clearing the frontier removes all its nodes
    #[test]
    fn when_i_clear_the_frontier_it_becomes_empty() {
        let mut frontier = SimpleFrontier::new(MaxUB);
        frontier.push(node(0, 10));
        frontier.push(node(1, 20));
        frontier.clear();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
    }
}
