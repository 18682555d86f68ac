//! Arena-backed parent/child trees.
//!
//! A [`NodeTree`] owns every node it creates. Nodes are addressed by
//! [`NodeId`] handles; a node's parent link is a plain handle, so there are
//! no reference cycles and parent lookup is O(1). A tree may hold several
//! detached roots at once (for example nodes that were created but not yet
//! inserted anywhere).
//!
//! All restructuring goes through [`NodeTree::set_parent`], which rejects
//! cycles before touching anything.

use slotmap::{SlotMap, new_key_type};

use horizon_arbor_core::logging::{DebugHierarchy, targets};

use super::iter::{Ancestors, BreadthFirst, DepthFirst, ReverseDepthFirst};
use crate::error::{TreeError, TreeResult};

new_key_type! {
    /// A stable handle to a node in a [`NodeTree`].
    ///
    /// Handles stay valid across any restructuring and become invalid only
    /// when the node is discarded.
    pub struct NodeId;
}

#[derive(Debug, Clone)]
struct NodeData<T> {
    name: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    payload: T,
}

/// An ordered tree of nodes carrying a payload of type `T`.
///
/// Invariants maintained by every operation:
/// - a node appears in its parent's children exactly when its parent link is set
/// - no node is its own ancestor
/// - child order changes only through insert, remove and move operations
///
/// # Example
///
/// ```
/// use horizon_arbor::tree::NodeTree;
///
/// let mut tree = NodeTree::new();
/// let root = tree.new_node(None, ());
/// let docs = tree.new_node(Some("docs"), ());
/// let readme = tree.new_node(Some("readme"), ());
///
/// tree.append_child(root, docs).unwrap();
/// tree.append_child(docs, readme).unwrap();
///
/// assert_eq!(tree.path(readme).unwrap(), "/docs/readme");
/// assert_eq!(tree.find(root, "docs/readme"), Some(readme));
/// ```
#[derive(Debug, Clone)]
pub struct NodeTree<T> {
    nodes: SlotMap<NodeId, NodeData<T>>,
}

impl<T> Default for NodeTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Number of live nodes, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `id` refers to a live node of this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Create a detached node.
    pub fn new_node(&mut self, name: Option<&str>, payload: T) -> NodeId {
        let id = self.nodes.insert(NodeData {
            name: name.map(str::to_owned),
            parent: None,
            children: Vec::new(),
            payload,
        });
        tracing::trace!(target: targets::TREE, ?id, ?name, "created node");
        id
    }

    fn node(&self, id: NodeId) -> TreeResult<&NodeData<T>> {
        self.nodes.get(id).ok_or(TreeError::InvalidNode)
    }

    fn node_mut(&mut self, id: NodeId) -> TreeResult<&mut NodeData<T>> {
        self.nodes.get_mut(id).ok_or(TreeError::InvalidNode)
    }

    /// Nodes without a parent, in arena order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .filter(|(_, data)| data.parent.is_none())
            .map(|(id, _)| id)
    }

    // =========================================================================
    // Payload and naming
    // =========================================================================

    /// Borrow a node's payload.
    pub fn payload(&self, id: NodeId) -> TreeResult<&T> {
        self.node(id).map(|data| &data.payload)
    }

    /// Mutably borrow a node's payload.
    pub fn payload_mut(&mut self, id: NodeId) -> TreeResult<&mut T> {
        self.node_mut(id).map(|data| &mut data.payload)
    }

    /// The explicitly assigned name, if any.
    pub fn raw_name(&self, id: NodeId) -> TreeResult<Option<&str>> {
        self.node(id).map(|data| data.name.as_deref())
    }

    /// The node's display name.
    ///
    /// Falls back to the node's sibling index formatted as a string when no
    /// name has been assigned.
    pub fn name(&self, id: NodeId) -> TreeResult<String> {
        match &self.node(id)?.name {
            Some(name) => Ok(name.clone()),
            None => Ok(self.sibling_index(id)?.to_string()),
        }
    }

    /// Assign or clear a node's name.
    pub fn set_name(&mut self, id: NodeId, name: Option<String>) -> TreeResult<()> {
        self.node_mut(id)?.name = name;
        Ok(())
    }

    // =========================================================================
    // Linkage queries
    // =========================================================================

    /// The node's parent, or `None` for a root.
    pub fn parent(&self, id: NodeId) -> TreeResult<Option<NodeId>> {
        self.node(id).map(|data| data.parent)
    }

    /// The node's children in display order.
    pub fn children(&self, id: NodeId) -> TreeResult<&[NodeId]> {
        self.node(id).map(|data| data.children.as_slice())
    }

    pub fn child_count(&self, id: NodeId) -> TreeResult<usize> {
        self.node(id).map(|data| data.children.len())
    }

    pub fn child_at(&self, id: NodeId, index: usize) -> TreeResult<Option<NodeId>> {
        self.node(id).map(|data| data.children.get(index).copied())
    }

    pub fn first_child(&self, id: NodeId) -> TreeResult<Option<NodeId>> {
        self.node(id).map(|data| data.children.first().copied())
    }

    pub fn last_child(&self, id: NodeId) -> TreeResult<Option<NodeId>> {
        self.node(id).map(|data| data.children.last().copied())
    }

    /// Position of the node among its siblings. Roots report `0`.
    pub fn sibling_index(&self, id: NodeId) -> TreeResult<usize> {
        match self.node(id)?.parent {
            Some(parent) => self
                .node(parent)?
                .children
                .iter()
                .position(|&child| child == id)
                .ok_or(TreeError::InvalidNode),
            None => Ok(0),
        }
    }

    /// All children of the node's parent, including the node itself.
    ///
    /// A root is its own only sibling.
    pub fn siblings(&self, id: NodeId) -> TreeResult<Vec<NodeId>> {
        match self.node(id)?.parent {
            Some(parent) => Ok(self.node(parent)?.children.clone()),
            None => Ok(vec![id]),
        }
    }

    pub fn first_sibling(&self, id: NodeId) -> TreeResult<NodeId> {
        match self.node(id)?.parent {
            Some(parent) => self
                .node(parent)?
                .children
                .first()
                .copied()
                .ok_or(TreeError::InvalidNode),
            None => Ok(id),
        }
    }

    pub fn last_sibling(&self, id: NodeId) -> TreeResult<NodeId> {
        match self.node(id)?.parent {
            Some(parent) => self
                .node(parent)?
                .children
                .last()
                .copied()
                .ok_or(TreeError::InvalidNode),
            None => Ok(id),
        }
    }

    pub fn next_sibling(&self, id: NodeId) -> TreeResult<Option<NodeId>> {
        let Some(parent) = self.node(id)?.parent else {
            return Ok(None);
        };
        let index = self.sibling_index(id)?;
        Ok(self.node(parent)?.children.get(index + 1).copied())
    }

    pub fn prev_sibling(&self, id: NodeId) -> TreeResult<Option<NodeId>> {
        let Some(parent) = self.node(id)?.parent else {
            return Ok(None);
        };
        let index = self.sibling_index(id)?;
        match index.checked_sub(1) {
            Some(prev) => Ok(self.node(parent)?.children.get(prev).copied()),
            None => Ok(None),
        }
    }

    /// The top-most ancestor of the node (the node itself for a root).
    pub fn root_of(&self, id: NodeId) -> TreeResult<NodeId> {
        self.node(id)?;
        Ok(self.ancestors(id).last().unwrap_or(id))
    }

    pub fn is_root(&self, id: NodeId) -> TreeResult<bool> {
        self.node(id).map(|data| data.parent.is_none())
    }

    pub fn is_leaf(&self, id: NodeId) -> TreeResult<bool> {
        self.node(id).map(|data| data.children.is_empty())
    }

    /// Returns `true` if `candidate` is `id` or lies on the chain from `id` to its root.
    ///
    /// A node counts as its own ancestor; this is the check that keeps the
    /// tree acyclic.
    pub fn has_ancestor(&self, id: NodeId, candidate: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == candidate {
                return true;
            }
            current = self.nodes.get(node).and_then(|data| data.parent);
        }
        false
    }

    /// Number of parent links between the node and its root.
    ///
    /// With `relative_to`, counting stops at that node instead.
    pub fn depth(&self, id: NodeId, relative_to: Option<NodeId>) -> TreeResult<usize> {
        self.node(id)?;
        let mut depth = 0;
        let mut current = id;
        while Some(current) != relative_to {
            match self.nodes.get(current).and_then(|data| data.parent) {
                Some(parent) => {
                    depth += 1;
                    current = parent;
                }
                None => break,
            }
        }
        Ok(depth)
    }

    /// Depth of the deepest descendant, measured from `id`.
    pub fn branch_max_depth(&self, id: NodeId) -> TreeResult<usize> {
        self.node(id)?;
        let mut max_depth = 0;
        for node in self.depth_first(id) {
            max_depth = max_depth.max(self.depth(node, Some(id))?);
        }
        Ok(max_depth)
    }

    /// Slash-joined chain of names from the root. A root's path is `/`.
    pub fn path(&self, id: NodeId) -> TreeResult<String> {
        self.node(id)?;
        let mut names = Vec::new();
        let mut current = id;
        while let Some(parent) = self.node(current)?.parent {
            names.push(self.name(current)?);
            current = parent;
        }
        names.reverse();
        Ok(format!("/{}", names.join("/")))
    }

    /// Resolve a slash-separated path of names.
    ///
    /// Paths starting with `/` resolve from the root of `from`, others from
    /// `from` itself. When several siblings share a name the first one wins.
    pub fn find(&self, from: NodeId, path: &str) -> Option<NodeId> {
        let mut current = if path.starts_with('/') {
            self.root_of(from).ok()?
        } else {
            self.node(from).ok().map(|_| from)?
        };
        for segment in path.split('/').filter(|segment| !segment.is_empty()) {
            current = self
                .node(current)
                .ok()?
                .children
                .iter()
                .copied()
                .find(|&child| self.name(child).is_ok_and(|name| name == segment))?;
        }
        Some(current)
    }

    // =========================================================================
    // Restructuring
    // =========================================================================

    /// Verify that `child` could be attached under `parent`.
    pub fn check_attach(&self, child: NodeId, parent: NodeId) -> TreeResult<()> {
        self.node(child)?;
        self.node(parent)?;
        if self.has_ancestor(parent, child) {
            return Err(TreeError::Cycle);
        }
        Ok(())
    }

    /// Move a node under a new parent, or detach it with `None`.
    ///
    /// The node is appended as the parent's last child. Setting the current
    /// parent again changes nothing.
    #[tracing::instrument(skip(self), target = "horizon_arbor::tree", level = "trace")]
    pub fn set_parent(&mut self, id: NodeId, new_parent: Option<NodeId>) -> TreeResult<()> {
        if self.node(id)?.parent == new_parent {
            return Ok(());
        }
        if let Some(parent) = new_parent {
            self.check_attach(id, parent)?;
        }

        self.detach(id);
        if let Some(parent) = new_parent {
            self.node_mut(parent)?.children.push(id);
        }
        self.node_mut(id)?.parent = new_parent;
        Ok(())
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.nodes.get_mut(id).and_then(|data| data.parent.take()) else {
            return;
        };
        if let Some(parent_data) = self.nodes.get_mut(parent) {
            parent_data.children.retain(|&child| child != id);
        }
    }

    /// Attach `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> TreeResult<()> {
        self.node(parent)?;
        self.set_parent(child, Some(parent))
    }

    /// Attach `child` under `parent` at position `index`.
    ///
    /// `index` may be at most the current child count. If `child` already
    /// belongs to `parent` it is moved; positions refer to the list with the
    /// child taken out, so `index == child_count` always means "last".
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> TreeResult<()> {
        let count = self.child_count(parent)?;
        if index > count {
            return Err(TreeError::IndexOutOfRange { index, len: count });
        }
        self.set_parent(child, Some(parent))?;
        self.reposition(parent, child, index)?;
        Ok(())
    }

    /// Move an existing child to `index`, returning its old and new positions.
    pub(crate) fn reposition(
        &mut self,
        parent: NodeId,
        child: NodeId,
        index: usize,
    ) -> TreeResult<(usize, usize)> {
        let children = &mut self.node_mut(parent)?.children;
        let from = children
            .iter()
            .position(|&id| id == child)
            .ok_or(TreeError::NotAChild)?;
        let to = index.min(children.len() - 1);
        if from != to {
            let moved = children.remove(from);
            children.insert(to, moved);
        }
        Ok((from, to))
    }

    /// Detach `child` from `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> TreeResult<()> {
        self.node(parent)?;
        if self.node(child)?.parent != Some(parent) {
            return Err(TreeError::NotAChild);
        }
        self.set_parent(child, None)
    }

    /// Detach a node and free it together with all of its descendants.
    ///
    /// Returns the node's own payload.
    pub fn discard(&mut self, id: NodeId) -> TreeResult<T> {
        self.node(id)?;
        self.detach(id);
        let descendants: Vec<NodeId> = self.depth_first(id).skip(1).collect();
        tracing::trace!(
            target: targets::TREE,
            ?id,
            descendant_count = descendants.len(),
            "discarding subtree"
        );
        for node in descendants {
            self.nodes.remove(node);
        }
        self.nodes
            .remove(id)
            .map(|data| data.payload)
            .ok_or(TreeError::InvalidNode)
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Pre-order traversal of the subtree rooted at `id`.
    ///
    /// The iterator borrows the tree, so the tree cannot change while it is live.
    /// An invalid `id` yields nothing.
    pub fn depth_first(&self, id: NodeId) -> DepthFirst<'_, T> {
        DepthFirst::new(self, id)
    }

    /// Exact reverse of [`depth_first`](Self::depth_first): descendants
    /// before ancestors, later siblings before earlier ones, `id` last.
    pub fn reverse_depth_first(&self, id: NodeId) -> ReverseDepthFirst<'_, T> {
        ReverseDepthFirst::new(self, id)
    }

    /// Leaf nodes of the subtree, in pre-order.
    pub fn leaves(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.depth_first(id)
            .filter(|&node| self.nodes.get(node).is_some_and(|data| data.children.is_empty()))
    }

    /// Ancestors from the immediate parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, T> {
        Ancestors::new(self, id)
    }

    /// Level-order traversal of the subtree rooted at `id`.
    pub fn breadth_first(&self, id: NodeId) -> BreadthFirst<'_, T> {
        BreadthFirst::new(self, id)
    }

    /// Successor of `id` in a pre-order walk that never leaves `stop_at`'s subtree.
    pub(crate) fn next_depth_first(&self, id: NodeId, stop_at: NodeId) -> Option<NodeId> {
        if let Some(&first) = self.nodes.get(id)?.children.first() {
            return Some(first);
        }
        let mut current = id;
        loop {
            if current == stop_at {
                return None;
            }
            let parent = self.nodes.get(current)?.parent?;
            let siblings = &self.nodes.get(parent)?.children;
            let index = siblings.iter().position(|&child| child == current)?;
            if let Some(&next) = siblings.get(index + 1) {
                return Some(next);
            }
            current = parent;
        }
    }

    /// Predecessor of `id` in a pre-order walk of `stop_at`'s subtree.
    pub(crate) fn prev_depth_first(&self, id: NodeId, stop_at: NodeId) -> Option<NodeId> {
        if id == stop_at {
            return None;
        }
        let parent = self.nodes.get(id)?.parent?;
        let siblings = &self.nodes.get(parent)?.children;
        match siblings.iter().position(|&child| child == id)? {
            0 => Some(parent),
            index => Some(self.last_descendant(siblings[index - 1])),
        }
    }

    /// The last node of `id`'s subtree in pre-order.
    pub(crate) fn last_descendant(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(&last) = self.nodes.get(current).and_then(|data| data.children.last()) {
            current = last;
        }
        current
    }
}

impl<T> DebugHierarchy for NodeTree<T> {
    type Id = NodeId;

    fn debug_roots(&self) -> Vec<NodeId> {
        self.roots().collect()
    }

    fn debug_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id).map(<[NodeId]>::to_vec).unwrap_or_default()
    }

    fn debug_label(&self, id: NodeId) -> String {
        self.name(id).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_arbor_core::logging::{TreeDebug, TreeFormatOptions, TreeStyle};

    /// root -> [a -> [a1, a2], b, c -> [c1]]
    fn sample() -> (NodeTree<u32>, NodeId, [NodeId; 6]) {
        let mut tree = NodeTree::new();
        let root = tree.new_node(None, 0);
        let a = tree.new_node(Some("a"), 1);
        let a1 = tree.new_node(Some("a1"), 2);
        let a2 = tree.new_node(Some("a2"), 3);
        let b = tree.new_node(Some("b"), 4);
        let c = tree.new_node(Some("c"), 5);
        let c1 = tree.new_node(None, 6);
        tree.append_child(root, a).unwrap();
        tree.append_child(a, a1).unwrap();
        tree.append_child(a, a2).unwrap();
        tree.append_child(root, b).unwrap();
        tree.append_child(root, c).unwrap();
        tree.append_child(c, c1).unwrap();
        (tree, root, [a, a1, a2, b, c, c1])
    }

    fn assert_linkage<T>(tree: &NodeTree<T>) {
        for (id, data) in &tree.nodes {
            if let Some(parent) = data.parent {
                assert!(tree.children(parent).unwrap().contains(&id));
            }
            for &child in &data.children {
                assert_eq!(tree.parent(child).unwrap(), Some(id));
            }
        }
    }

    #[test]
    fn test_names_and_paths() {
        let (tree, root, [_, a1, _, b, _, c1]) = sample();
        assert_eq!(tree.path(root).unwrap(), "/");
        assert_eq!(tree.path(a1).unwrap(), "/a/a1");
        assert_eq!(tree.path(b).unwrap(), "/b");
        // unnamed nodes fall back to their sibling index
        assert_eq!(tree.name(c1).unwrap(), "0");
        assert_eq!(tree.path(c1).unwrap(), "/c/0");
    }

    #[test]
    fn test_find() {
        let (tree, root, [a, a1, a2, _, _, c1]) = sample();
        assert_eq!(tree.find(root, "/a/a2"), Some(a2));
        assert_eq!(tree.find(a, "a1"), Some(a1));
        assert_eq!(tree.find(a1, "/c/0"), Some(c1));
        assert_eq!(tree.find(a, "/"), Some(root));
        assert_eq!(tree.find(root, "missing"), None);
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut tree = NodeTree::new();
        let root = tree.new_node(None, ());
        let first = tree.new_node(Some("dup"), ());
        let second = tree.new_node(Some("dup"), ());
        tree.append_child(root, first).unwrap();
        tree.append_child(root, second).unwrap();
        assert_eq!(tree.find(root, "dup"), Some(first));
    }

    #[test]
    fn test_sibling_navigation() {
        let (tree, root, [a, _, _, b, c, _]) = sample();
        assert_eq!(tree.sibling_index(c).unwrap(), 2);
        assert_eq!(tree.sibling_index(root).unwrap(), 0);
        assert_eq!(tree.next_sibling(a).unwrap(), Some(b));
        assert_eq!(tree.prev_sibling(a).unwrap(), None);
        assert_eq!(tree.prev_sibling(c).unwrap(), Some(b));
        assert_eq!(tree.first_sibling(c).unwrap(), a);
        assert_eq!(tree.last_sibling(a).unwrap(), c);
        assert_eq!(tree.siblings(root).unwrap(), vec![root]);
        assert_eq!(tree.first_child(root).unwrap(), Some(a));
        assert_eq!(tree.last_child(root).unwrap(), Some(c));
    }

    #[test]
    fn test_depth() {
        let (tree, root, [a, a1, _, _, _, _]) = sample();
        assert_eq!(tree.depth(root, None).unwrap(), 0);
        assert_eq!(tree.depth(a1, None).unwrap(), 2);
        assert_eq!(tree.depth(a1, Some(a)).unwrap(), 1);
        assert_eq!(tree.branch_max_depth(root).unwrap(), 2);
        assert_eq!(tree.branch_max_depth(a1).unwrap(), 0);
        assert_eq!(tree.root_of(a1).unwrap(), root);
    }

    #[test]
    fn test_set_parent_same_parent_is_noop() {
        let (mut tree, root, [a, _, _, b, c, _]) = sample();
        tree.set_parent(a, Some(root)).unwrap();
        assert_eq!(tree.children(root).unwrap(), &[a, b, c]);
    }

    #[test]
    fn test_set_parent_rejects_cycles() {
        let (mut tree, root, [a, a1, _, _, _, _]) = sample();
        assert_eq!(tree.set_parent(a, Some(a1)), Err(TreeError::Cycle));
        assert_eq!(tree.set_parent(a, Some(a)), Err(TreeError::Cycle));
        assert_eq!(tree.parent(a).unwrap(), Some(root));
        assert_linkage(&tree);
    }

    #[test]
    fn test_set_parent_moves_to_end() {
        let (mut tree, root, [a, a1, a2, b, c, _]) = sample();
        tree.set_parent(a1, Some(root)).unwrap();
        assert_eq!(tree.children(root).unwrap(), &[a, b, c, a1]);
        assert_eq!(tree.children(a).unwrap(), &[a2]);
        tree.set_parent(b, None).unwrap();
        assert!(tree.is_root(b).unwrap());
        assert_linkage(&tree);
    }

    #[test]
    fn test_insert_child_positions() {
        let (mut tree, root, [a, a1, _, b, c, _]) = sample();
        tree.insert_child(root, 1, a1).unwrap();
        assert_eq!(tree.children(root).unwrap(), &[a, a1, b, c]);

        // reorder within the same parent: index counts with the child taken out
        tree.insert_child(root, 4, a).unwrap();
        assert_eq!(tree.children(root).unwrap(), &[a1, b, c, a]);
        tree.insert_child(root, 0, c).unwrap();
        assert_eq!(tree.children(root).unwrap(), &[c, a1, b, a]);

        assert_eq!(
            tree.insert_child(root, 9, b),
            Err(TreeError::IndexOutOfRange { index: 9, len: 4 })
        );
        assert_linkage(&tree);
    }

    #[test]
    fn test_remove_child() {
        let (mut tree, root, [a, a1, _, _, _, _]) = sample();
        assert_eq!(tree.remove_child(root, a1), Err(TreeError::NotAChild));
        tree.remove_child(a, a1).unwrap();
        assert!(tree.is_root(a1).unwrap());
        assert_eq!(tree.child_count(a).unwrap(), 1);
    }

    #[test]
    fn test_discard_frees_subtree() {
        let (mut tree, root, [a, a1, a2, _, _, _]) = sample();
        let before = tree.len();
        assert_eq!(tree.discard(a).unwrap(), 1);
        assert_eq!(tree.len(), before - 3);
        assert!(!tree.contains(a1));
        assert!(!tree.contains(a2));
        assert_eq!(tree.child_count(root).unwrap(), 2);
        assert_eq!(tree.discard(a), Err(TreeError::InvalidNode));
    }

    #[test]
    fn test_payload_access() {
        let (mut tree, _, [a, ..]) = sample();
        *tree.payload_mut(a).unwrap() += 10;
        assert_eq!(*tree.payload(a).unwrap(), 11);
    }

    #[test]
    fn test_debug_render() {
        let (tree, _, _) = sample();
        let debug = TreeDebug::with_options(TreeFormatOptions {
            style: TreeStyle::Ascii,
            ..TreeFormatOptions::minimal()
        });
        let output = debug.format_all(&tree);
        assert_eq!(
            output,
            "0\n+-- a\n|   +-- a1\n|   `-- a2\n+-- b\n`-- c\n    `-- 0\n"
        );
    }
}
