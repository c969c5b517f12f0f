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

//! This module provides the implementation of the best-first branch-and-bound
//! solver. That is a solver that explores a binary search tree (one level per
//! item, one branch per packing decision) by always expanding the open node
//! having the highest upper bound first.

use log::{debug, trace};

use crate::{AssignmentSolution, Completion, Cutoff, Frontier, Instance, MaxUB, Node, NoCutoff,
    NodeRanking, PrefixSums, Profit, SimpleFrontier, Solver, Weight, minimum_weight_vec};

/// Computes the upper bound of the search nodes: the profit of the items
/// which are already packed plus the (rounded down) optimum of the linear
/// relaxation of the residual problem.
struct Bounding {
    sums: PrefixSums,
    capacity: Weight,
}
impl Bounding {
    fn new(instance: &Instance) -> Self {
        Self { sums: PrefixSums::new(instance.items()), capacity: instance.capacity() }
    }
    /// Refreshes (and returns) the bound cached in the given node.
    /// The node must be feasible.
    fn update(&self, node: &mut Node) -> Profit {
        let residual = self.capacity - node.state.weight;
        node.upperbound = node.state.profit + self.sums.upper_bound(node.item, residual);
        node.upperbound
    }
}

/// The best-first branch-and-bound solver.
///
/// The search keeps track of an incumbent (the best feasible solution visited
/// so far), which serves as a global lower bound. It repeatedly pops the node
/// with the highest upper bound off the frontier and discards it when that
/// bound is no better than the incumbent; otherwise it branches on the next
/// item: the child leaving the item out, and the child packing it (when it
/// fits). Children whose bound cannot beat the incumbent are never pushed, and
/// neither is a child whose residual capacity is smaller than every remaining
/// item weight. The search ends when the frontier is empty: the incumbent is
/// then optimal.
///
/// # Important:
/// The bounds are only admissible when the items are sorted by decreasing
/// efficiency (see `Instance::sort`). This solver does not sort the items, use
/// `Solver::check` to verify the instance when in doubt.
///
/// # Example
/// ```
/// # use kp::*;
/// let mut kp = Instance::new(15, vec![
///     Item::new(3, 4), Item::new(7, 9), Item::new(9, 7), Item::new(6, 2),
///     Item::new(6, 5), Item::new(8, 6), Item::new(5, 3),
/// ]);
/// kp.sort();
///
/// let solver = BestFirstSearch::new();
/// assert!(solver.check(&kp).is_ok());
///
/// let (solution, completion) = solver.maximize(&kp);
/// assert!(completion.is_exact);
/// assert_eq!(23, solution.profit);
/// assert_eq!(15, solution.weight);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BestFirstSearch<C = NoCutoff, O = MaxUB> {
    /// A cutoff heuristic meant to decide when to stop the resolution
    cutoff: C,
    /// The order in which the nodes are popped off the frontier
    ranking: O,
}
impl BestFirstSearch<NoCutoff, MaxUB> {
    pub fn new() -> Self {
        Self { cutoff: NoCutoff, ranking: MaxUB }
    }
}
impl <C: Cutoff> BestFirstSearch<C, MaxUB> {
    pub fn with_cutoff(cutoff: C) -> Self {
        Self { cutoff, ranking: MaxUB }
    }
}
impl <C: Cutoff, O: NodeRanking + Clone> BestFirstSearch<C, O> {
    /// Replaces the node ranking of the frontier. Any ranking yields an
    /// optimal solution, but one that does not favor the highest bounds
    /// usually explores more nodes.
    pub fn with_ranking<OO: NodeRanking + Clone>(self, ranking: OO) -> BestFirstSearch<C, OO> {
        BestFirstSearch { cutoff: self.cutoff, ranking }
    }

    /// Searches for the optimal solution of the given instance. It returns
    /// the best solution found along with the outcome of the search, which
    /// is only inexact when the cutoff interrupted it.
    pub fn maximize(&self, instance: &Instance) -> (AssignmentSolution, Completion) {
        let mut frontier = SimpleFrontier::new(self.ranking.clone());
        self.explore(instance, &mut frontier)
    }

    /// Same as `maximize`, but the open nodes are stored in the given frontier
    /// instead of a `SimpleFrontier`. The frontier is cleared beforehand and
    /// is left empty.
    pub fn explore<F: Frontier>(&self, instance: &Instance, frontier: &mut F) -> (AssignmentSolution, Completion) {
        let n = instance.n();
        let capacity = instance.capacity();
        let bounding = Bounding::new(instance);
        let min_weights = minimum_weight_vec(instance);

        let mut best = AssignmentSolution::new(n);
        let mut explored = 0;
        let mut is_exact = true;

        let mut root = Node { state: best.clone(), item: 0, upperbound: 0 };
        bounding.update(&mut root);
        frontier.clear();
        frontier.push(root);

        while let Some(mut node) = frontier.pop() {
            if node.upperbound <= best.profit || node.item == n {
                continue;
            }
            if self.cutoff.must_stop() {
                is_exact = false;
                frontier.clear();
                break;
            }
            explored += 1;
            trace!("expand item {} ub {} (best {}, frontier {})",
                node.item, node.upperbound, best.profit, frontier.len());

            let i = node.item;
            let item = instance.items()[i];
            node.item += 1;

            // Branch x_i = 0 ; "don't pack the item"
            if node.item < n && bounding.update(&mut node) > best.profit {
                trace!("push item {} ub {}", node.item, node.upperbound);
                frontier.push(node.clone());
            }

            // Branch x_i = 1 ; "pack the item"
            if item.fits(capacity - node.state.weight) {
                node.state.include(i, item);
                if node.state.profit > best.profit {
                    best = node.state.clone();
                    trace!("new incumbent: profit {} weight {}", best.profit, best.weight);
                }
                if node.item < n
                    && capacity - node.state.weight >= min_weights[node.item]
                    && bounding.update(&mut node) > best.profit
                {
                    trace!("push item {} ub {}", node.item, node.upperbound);
                    frontier.push(node);
                }
            }
        }

        debug!("best first search: profit {} weight {} after {} nodes (exact: {})",
            best.profit, best.weight, explored, is_exact);
        (best, Completion { is_exact, explored })
    }
}

impl <C: Cutoff, O: NodeRanking + Clone> Solver for BestFirstSearch<C, O> {
    fn name(&self) -> &str {
        "Primal Branch and Bound (Best First Search)"
    }

    fn requires_sorted_items(&self) -> bool {
        true
    }

    fn solve(&self, instance: &Instance) -> AssignmentSolution {
        self.maximize(instance).0
    }
}

#[cfg(test)]
mod test_best_first {
    use std::{cmp::Ordering, time::Duration};

    use log::LevelFilter;

    use rand::{rngs::SmallRng, Rng, SeedableRng};

    use crate::*;

    fn example() -> Instance {
        Instance::new(15, vec![
            Item::new(6, 2), Item::new(5, 3), Item::new(8, 6), Item::new(9, 7),
            Item::new(6, 5), Item::new(7, 9), Item::new(3, 4),
        ])
    }

    fn random_instance(rng: &mut SmallRng, max_n: usize) -> Instance {
        let n = rng.gen_range(0..=max_n);
        let items = (0..n)
            .map(|_| Item::new(rng.gen_range(0..50), rng.gen_range(0..30)))
            .collect();
        Instance::new(rng.gen_range(0..150), items)
    }

    #[test]
    fn it_solves_the_minimal_example() {
        let (solution, completion) = BestFirstSearch::new().maximize(&example());
        assert!(completion.is_exact);
        assert_eq!(23, solution.profit);
        assert_eq!(15, solution.weight);
        assert_eq!(vec![0, 2, 3], solution.selected().collect::<Vec<_>>());
    }
    #[test]
    fn zero_capacity_yields_the_empty_solution() {
        let kp = Instance::new(0, example().items().to_vec());
        assert_eq!(AssignmentSolution::new(7), solve_bb(&kp));
    }
    #[test]
    fn empty_instance_yields_the_empty_solution() {
        let (solution, completion) = BestFirstSearch::new().maximize(&Instance::new(100, vec![]));
        assert_eq!(AssignmentSolution::new(0), solution);
        assert_eq!(0, completion.explored);
    }
    #[test]
    fn an_item_heavier_than_the_sack_is_never_packed() {
        let kp = Instance::new(5, vec![Item::new(100, 6)]);
        assert_eq!(AssignmentSolution::new(1), solve_bb(&kp));
    }
    #[test]
    fn a_heavy_last_item_does_not_wrap_the_residual_capacity() {
        // once (3,3) is packed, the residual capacity (1) is smaller than the
        // weight of the last item: computing 1 - 2 would underflow
        let mut kp = Instance::new(4, vec![Item::new(3, 3), Item::new(2, 2)]);
        kp.sort();
        let solution = solve_bb(&kp);
        assert_eq!(3, solution.profit);
        assert_eq!(vec![true, false], solution.assignment);
    }
    #[test]
    fn weightless_items_are_packed_when_sorted() {
        let mut kp = Instance::new(3, vec![Item::new(5, 4), Item::new(2, 3), Item::new(4, 0)]);
        kp.sort();
        let solution = solve_bb(&kp);
        assert_eq!(6, solution.profit);
        assert_eq!(3, solution.weight);
    }
    #[test]
    fn it_requires_sorted_items() {
        let solver = BestFirstSearch::new();
        assert!(solver.requires_sorted_items());
        let mut kp = Instance::new(15, vec![Item::new(3, 4), Item::new(6, 2)]);
        assert!(matches!(solver.check(&kp), Err(Error::UnsortedItems)));
        kp.sort();
        assert!(solver.check(&kp).is_ok());
    }
    #[test]
    fn an_elapsed_budget_interrupts_the_search() {
        let solver = BestFirstSearch::with_cutoff(TimeBudget::new(Duration::ZERO));
        let (solution, completion) = solver.maximize(&example());
        assert!(!completion.is_exact);
        assert_eq!(0, completion.explored);
        assert!(solution.weight <= 15);
    }
    /// Pops the deepest nodes first, whatever their bound
    #[derive(Debug, Clone, Copy)]
    struct DeepestFirst;
    impl NodeRanking for DeepestFirst {
        fn compare(&self, l: &Node, r: &Node) -> Ordering {
            l.item.cmp(&r.item)
        }
    }

    /// A plain LIFO stack, which turns the search into a depth-first search
    #[derive(Default)]
    struct Stack {
        nodes: Vec<Node>,
        pushed: usize,
    }
    impl Frontier for Stack {
        fn push(&mut self, node: Node) {
            self.pushed += 1;
            self.nodes.push(node)
        }
        fn pop(&mut self) -> Option<Node> {
            self.nodes.pop()
        }
        fn clear(&mut self) {
            self.nodes.clear()
        }
        fn len(&self) -> usize {
            self.nodes.len()
        }
    }

    #[test]
    fn a_custom_ranking_still_finds_the_optimum() {
        let solver = BestFirstSearch::new().with_ranking(DeepestFirst);
        let mut rng = SmallRng::seed_from_u64(0xbeef);
        for _ in 0..200 {
            let mut kp = random_instance(&mut rng, 12);
            kp.sort();
            let (solution, completion) = solver.maximize(&kp);
            assert!(completion.is_exact);
            assert_eq!(solve_dp(&kp).profit, solution.profit, "{kp}");
        }
    }
    #[test]
    fn a_custom_ranking_can_be_combined_with_a_cutoff() {
        let solver = BestFirstSearch::with_cutoff(TimeBudget::new(Duration::ZERO))
            .with_ranking(DeepestFirst);
        let (_, completion) = solver.maximize(&example());
        assert!(!completion.is_exact);
    }
    #[test]
    fn a_custom_frontier_is_used_and_left_empty() {
        let mut kp = example();
        kp.sort();
        let mut stack = Stack::default();
        let (solution, completion) = BestFirstSearch::new().explore(&kp, &mut stack);
        assert!(completion.is_exact);
        assert_eq!(23, solution.profit);
        assert!(stack.pushed > 0);
        assert!(stack.is_empty());
    }
    #[test]
    fn the_search_can_be_traced() {
        let _ = env_logger::builder().is_test(true).filter_level(LevelFilter::Trace).try_init();
        let mut kp = example();
        kp.sort();
        let (solution, _) = BestFirstSearch::new().maximize(&kp);
        assert_eq!(23, solution.profit);
    }
    #[test]
    fn it_agrees_with_dynamic_programming() {
        let mut rng = SmallRng::seed_from_u64(0xcafe);
        for _ in 0..500 {
            let mut kp = random_instance(&mut rng, 15);
            kp.sort();
            let expected = solve_dp(&kp);
            let (actual, completion) = BestFirstSearch::new().maximize(&kp);
            assert!(completion.is_exact);
            assert_eq!(expected.profit, actual.profit, "{kp}");
            assert!(!check_solution(&kp, &actual).is_invalid);
        }
    }
    #[test]
    fn bounds_are_admissible_and_shrink_along_any_path() {
        // walks down random root-to-leaf paths and compares the cached bounds
        // with the optimum of the residual problems
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut kp = random_instance(&mut rng, 12);
            kp.sort();
            let sums = PrefixSums::new(kp.items());
            let mut state = AssignmentSolution::new(kp.n());
            let mut previous = Profit::MAX;
            for i in 0..=kp.n() {
                let residual = kp.capacity() - state.weight;
                let ub = state.profit + sums.upper_bound(i, residual);
                let rest = Instance::new(residual, kp.items()[i..].to_vec());
                assert!(ub >= state.profit + solve_dp(&rest).profit);
                assert!(ub <= previous);
                previous = ub;

                if i < kp.n() && kp.items()[i].fits(residual) && rng.gen_bool(0.5) {
                    state.include(i, kp.items()[i]);
                }
            }
        }
    }
}
