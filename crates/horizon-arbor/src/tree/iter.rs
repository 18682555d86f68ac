//! Lazy traversal iterators over a [`NodeTree`].
//!
//! Each iterator holds a shared borrow of the tree and computes the next
//! node from the current linkage, so the borrow checker rules out structural
//! mutation while one is live. Build a fresh iterator to restart.

use std::collections::VecDeque;

use super::node_tree::{NodeId, NodeTree};

/// Pre-order traversal: a node, then each child subtree in order.
pub struct DepthFirst<'a, T> {
    tree: &'a NodeTree<T>,
    start: NodeId,
    next: Option<NodeId>,
}

impl<'a, T> DepthFirst<'a, T> {
    pub(crate) fn new(tree: &'a NodeTree<T>, start: NodeId) -> Self {
        Self {
            tree,
            start,
            next: tree.contains(start).then_some(start),
        }
    }
}

impl<T> Iterator for DepthFirst<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.next_depth_first(current, self.start);
        Some(current)
    }
}

/// Reverse pre-order traversal, ending at the start node.
pub struct ReverseDepthFirst<'a, T> {
    tree: &'a NodeTree<T>,
    start: NodeId,
    next: Option<NodeId>,
}

impl<'a, T> ReverseDepthFirst<'a, T> {
    pub(crate) fn new(tree: &'a NodeTree<T>, start: NodeId) -> Self {
        Self {
            tree,
            start,
            next: tree.contains(start).then(|| tree.last_descendant(start)),
        }
    }
}

impl<T> Iterator for ReverseDepthFirst<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.prev_depth_first(current, self.start);
        Some(current)
    }
}

/// Walk from a node's parent up to its root.
pub struct Ancestors<'a, T> {
    tree: &'a NodeTree<T>,
    next: Option<NodeId>,
}

impl<'a, T> Ancestors<'a, T> {
    pub(crate) fn new(tree: &'a NodeTree<T>, id: NodeId) -> Self {
        Self {
            tree,
            next: tree.parent(id).ok().flatten(),
        }
    }
}

impl<T> Iterator for Ancestors<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current).ok().flatten();
        Some(current)
    }
}

/// Level-order traversal.
pub struct BreadthFirst<'a, T> {
    tree: &'a NodeTree<T>,
    queue: VecDeque<NodeId>,
}

impl<'a, T> BreadthFirst<'a, T> {
    pub(crate) fn new(tree: &'a NodeTree<T>, start: NodeId) -> Self {
        let mut queue = VecDeque::new();
        if tree.contains(start) {
            queue.push_back(start);
        }
        Self { tree, queue }
    }
}

impl<T> Iterator for BreadthFirst<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.queue.pop_front()?;
        if let Ok(children) = self.tree.children(current) {
            self.queue.extend(children.iter().copied());
        }
        Some(current)
    }
}
