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

//! This module defines the `Frontier` trait.

use crate::Node;

/// This trait abstracts away the implementation details of the solver frontier.
/// That is, a Frontier represents the priority queue which stores all the
/// nodes of the search tree that remain to be explored.
pub trait Frontier {
    /// This is how you push a node onto the frontier.
    fn push(&mut self, node: Node);
    /// This method yields the most promising node from the frontier.
    /// # Note:
    /// The solver remains exact whatever the order in which the nodes are
    /// popped. However, it only behaves as a *best-first* search when the
    /// frontier pops nodes in descending upper bound order.
    fn pop(&mut self) -> Option<Node>;
    /// This method clears the frontier: it removes all nodes from the queue.
    fn clear(&mut self);
    /// Yields the length of the queue.
    fn len(&self) -> usize;
    /// Returns true iff the frontier is empty (len == 0)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
