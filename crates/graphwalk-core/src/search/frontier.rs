//! The frontier: discovered vertices that have not been expanded yet.

use std::collections::VecDeque;

use super::Strategy;
use crate::graph::Vertex;

/// Double-ended work list whose removal end is chosen by a [`Strategy`].
///
/// Vertices are always pushed at the back. [`Strategy::BreadthFirst`] pops
/// from the front (FIFO) and [`Strategy::DepthFirst`] pops from the back
/// (LIFO), so the most recently discovered vertex is expanded next.
#[derive(Debug, Clone)]
pub struct Frontier {
    strategy: Strategy,
    items: VecDeque<Vertex>,
}

impl Frontier {
    /// Creates an empty frontier with the discipline of `strategy`.
    #[cfg(test)]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            items: VecDeque::new(),
        }
    }

    /// Creates an empty frontier with room for `capacity` vertices.
    pub fn with_capacity(strategy: Strategy, capacity: usize) -> Self {
        Self {
            strategy,
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Adds a newly discovered vertex at the back.
    pub fn push(&mut self, v: Vertex) {
        self.items.push_back(v);
    }

    /// Removes the next vertex to expand, or `None` when exhausted.
    pub fn pop(&mut self) -> Option<Vertex> {
        match self.strategy {
            Strategy::BreadthFirst => self.items.pop_front(),
            Strategy::DepthFirst => self.items.pop_back(),
        }
    }

    /// Number of vertices waiting to be expanded.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when no vertex is waiting.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breadth_first_is_fifo() {
        let mut f = Frontier::new(Strategy::BreadthFirst);
        f.push(1);
        f.push(2);
        f.push(3);
        assert_eq!(f.pop(), Some(1));
        assert_eq!(f.pop(), Some(2));
        f.push(4);
        assert_eq!(f.pop(), Some(3));
        assert_eq!(f.pop(), Some(4));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn depth_first_is_lifo() {
        let mut f = Frontier::with_capacity(Strategy::DepthFirst, 4);
        f.push(1);
        f.push(2);
        f.push(3);
        assert_eq!(f.len(), 3);
        assert_eq!(f.pop(), Some(3));
        f.push(4);
        assert_eq!(f.pop(), Some(4));
        assert_eq!(f.pop(), Some(2));
        assert_eq!(f.pop(), Some(1));
        assert!(f.is_empty());
        assert_eq!(f.pop(), None);
    }
}
