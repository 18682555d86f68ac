//! Trees kept in lockstep with a nested document.
//!
//! A [`DocumentTree`] holds one node per value of a nested [`Value`]
//! document. Container values (lists and maps) get one child per entry, in
//! entry order. The document itself lives in the slot of each root node;
//! an attached node's value is the entry of its parent's container at the
//! node's key:
//!
//! - under a list, the key is the node's sibling index
//! - under a map, the key is the node's stored key
//!
//! Every public mutation updates the node linkage and the container entries
//! together, and either succeeds completely or leaves both untouched.
//!
//! # Example
//!
//! ```
//! use horizon_arbor::document::{DocumentTree, Value};
//! use serde_json::json;
//!
//! let mut doc = DocumentTree::new(Value::from(json!({"a": 1, "b": [1, 2, 3]})));
//! let node = doc.find("/b/1").unwrap();
//! let b = doc.find("/b").unwrap();
//! doc.remove_child(b, node).unwrap();
//!
//! assert_eq!(doc.to_obj(doc.root()).unwrap(), Value::from(json!({"a": 1, "b": [1, 3]})));
//! ```

use horizon_arbor_core::logging::{DebugHierarchy, targets};

use super::options::{DocumentOptions, unique_key};
use super::value::{NodeKey, Value, ValueMap};
use crate::error::{TreeError, TreeResult};
use crate::tree::{NodeId, NodeTree};

/// Per-node state of a [`DocumentTree`].
#[derive(Debug, Clone, Default)]
pub struct DocumentSlot {
    /// Key used while the parent is a map; kept across moves through lists.
    stored_key: Option<String>,
    /// The node's value while it has no parent.
    detached: Option<Value>,
}

impl DocumentSlot {
    /// The key this node uses (or last used) inside a map.
    pub fn stored_key(&self) -> Option<&str> {
        self.stored_key.as_deref()
    }
}

/// Result of walking from a root down to a node.
struct Located<'a> {
    root: NodeId,
    keys: Vec<NodeKey>,
    value: &'a Value,
}

fn key_path(keys: &[NodeKey]) -> String {
    let parts: Vec<String> = keys.iter().map(NodeKey::to_string).collect();
    format!("/{}", parts.join("/"))
}

fn out_of_sync(keys: &[NodeKey]) -> TreeError {
    TreeError::OutOfSync {
        path: key_path(keys),
    }
}

/// A node tree synchronized with a nested [`Value`] document.
#[derive(Debug, Clone)]
pub struct DocumentTree {
    nodes: NodeTree<DocumentSlot>,
    root: NodeId,
    options: DocumentOptions,
}

impl Default for DocumentTree {
    fn default() -> Self {
        Self::new(Value::map())
    }
}

impl From<Value> for DocumentTree {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl DocumentTree {
    /// Build a tree mirroring `value`.
    pub fn new(value: Value) -> Self {
        Self::with_options(value, DocumentOptions::default())
    }

    /// Build a tree mirroring `value` with custom key generation.
    pub fn with_options(value: Value, options: DocumentOptions) -> Self {
        let mut nodes = NodeTree::new();
        let root = nodes.new_node(None, DocumentSlot::default());
        let mut tree = Self {
            nodes,
            root,
            options,
        };
        tree.populate(root, value);
        tracing::debug!(
            target: targets::DOCUMENT,
            node_count = tree.nodes.len(),
            "built document tree"
        );
        tree
    }

    /// The node mirroring the whole document.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Read-only access to the underlying node tree.
    pub fn nodes(&self) -> &NodeTree<DocumentSlot> {
        &self.nodes
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    /// Create a detached node (with a subtree for container values).
    ///
    /// `key` is used when the node is later attached to a map.
    pub fn new_node(&mut self, key: Option<&str>, value: Value) -> NodeId {
        let id = self.nodes.new_node(
            key,
            DocumentSlot {
                stored_key: key.map(str::to_owned),
                detached: None,
            },
        );
        self.populate(id, value);
        id
    }

    /// Give a fresh root node its children and value.
    fn populate(&mut self, id: NodeId, value: Value) {
        self.spawn_children(id, &value);
        if let Ok(slot) = self.nodes.payload_mut(id) {
            slot.detached = Some(value);
        }
    }

    /// Create one child per container entry, linking only the node tree.
    fn spawn_children(&mut self, parent: NodeId, value: &Value) {
        let entries: Vec<(Option<&str>, &Value)> = match value {
            Value::List(items) => items.iter().map(|item| (None, item)).collect(),
            Value::Map(map) => map.iter().map(|(key, item)| (Some(key.as_str()), item)).collect(),
            _ => return,
        };
        for (key, item) in entries {
            let child = self.nodes.new_node(
                key,
                DocumentSlot {
                    stored_key: key.map(str::to_owned),
                    detached: None,
                },
            );
            // both ends are fresh nodes, linking cannot fail
            let _ = self.nodes.append_child(parent, child);
            self.spawn_children(child, item);
        }
    }

    // =========================================================================
    // Value access
    // =========================================================================

    fn slot(&self, id: NodeId) -> TreeResult<&DocumentSlot> {
        self.nodes.payload(id)
    }

    fn slot_mut(&mut self, id: NodeId) -> TreeResult<&mut DocumentSlot> {
        self.nodes.payload_mut(id)
    }

    /// Key of `child` inside `container`, its parent's value.
    fn step_key(&self, container: &Value, child: NodeId, keys: &[NodeKey]) -> TreeResult<NodeKey> {
        match container {
            Value::List(_) => Ok(NodeKey::Index(self.nodes.sibling_index(child)?)),
            Value::Map(_) => self
                .slot(child)?
                .stored_key
                .clone()
                .map(NodeKey::Name)
                .ok_or_else(|| out_of_sync(keys)),
            _ => Err(out_of_sync(keys)),
        }
    }

    fn locate(&self, id: NodeId) -> TreeResult<Located<'_>> {
        self.nodes.payload(id)?;
        let mut lineage: Vec<NodeId> = self.nodes.ancestors(id).collect();
        lineage.reverse();
        lineage.push(id);

        let root = lineage[0];
        let mut keys = Vec::with_capacity(lineage.len() - 1);
        let mut value = self.slot(root)?.detached.as_ref().ok_or_else(|| out_of_sync(&keys))?;
        for &child in &lineage[1..] {
            let key = self.step_key(value, child, &keys)?;
            keys.push(key);
            value = value
                .get(keys.last().ok_or(TreeError::InvalidNode)?)
                .ok_or_else(|| out_of_sync(&keys))?;
        }
        Ok(Located { root, keys, value })
    }

    fn value_mut(&mut self, id: NodeId) -> TreeResult<&mut Value> {
        let Located { root, keys, .. } = self.locate(id)?;
        let mut value = self
            .slot_mut(root)?
            .detached
            .as_mut()
            .ok_or_else(|| out_of_sync(&[]))?;
        for (depth, key) in keys.iter().enumerate() {
            value = value.get_mut(key).ok_or_else(|| out_of_sync(&keys[..=depth]))?;
        }
        Ok(value)
    }

    /// The node's current value.
    pub fn value(&self, id: NodeId) -> TreeResult<&Value> {
        self.locate(id).map(|located| located.value)
    }

    /// The whole document.
    pub fn document(&self) -> &Value {
        // the root always owns the document
        static NULL: Value = Value::Null;
        self.value(self.root).unwrap_or(&NULL)
    }

    /// The node's key in its parent container.
    ///
    /// Under a list this is the sibling index, under a map the stored key.
    /// A detached node reports the key it was created with.
    pub fn key(&self, id: NodeId) -> TreeResult<Option<NodeKey>> {
        let located = self.locate(id)?;
        Ok(match located.keys.last() {
            Some(key) => Some(key.clone()),
            None => self.slot(id)?.stored_key.clone().map(NodeKey::Name),
        })
    }

    /// Document path of the node, built from keys (`/` for a root).
    pub fn path(&self, id: NodeId) -> TreeResult<String> {
        self.nodes.path(id)
    }

    /// Resolve a path from the document root.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        self.nodes.find(self.root, path)
    }

    pub fn is_container(&self, id: NodeId) -> TreeResult<bool> {
        self.value(id).map(Value::is_container)
    }

    pub fn is_map(&self, id: NodeId) -> TreeResult<bool> {
        self.value(id).map(Value::is_map)
    }

    pub fn is_list(&self, id: NodeId) -> TreeResult<bool> {
        self.value(id).map(Value::is_list)
    }

    pub fn is_scalar(&self, id: NodeId) -> TreeResult<bool> {
        self.value(id).map(Value::is_scalar)
    }

    /// Rebuild a plain document from the subtree rooted at `id`.
    ///
    /// The result is assembled from the nodes themselves, so it also checks
    /// that the tree still describes the document.
    pub fn to_obj(&self, id: NodeId) -> TreeResult<Value> {
        let children = self.nodes.children(id)?;
        match self.value(id)? {
            Value::List(_) => children
                .iter()
                .map(|&child| self.to_obj(child))
                .collect::<TreeResult<Vec<_>>>()
                .map(Value::List),
            Value::Map(_) => children
                .iter()
                .map(|&child| {
                    let Some(key) = self.slot(child)?.stored_key.clone() else {
                        return Err(TreeError::OutOfSync {
                            path: self.path(child)?,
                        });
                    };
                    Ok((key, self.to_obj(child)?))
                })
                .collect::<TreeResult<ValueMap>>()
                .map(Value::Map),
            scalar => Ok(scalar.clone()),
        }
    }

    /// Verify that every container entry matches the node tree.
    pub fn check_sync(&self) -> TreeResult<()> {
        for root in self.nodes.roots() {
            for id in self.nodes.depth_first(root) {
                let children = self.nodes.children(id)?;
                let in_sync = match self.value(id)? {
                    Value::List(items) => items.len() == children.len(),
                    Value::Map(map) => {
                        map.len() == children.len()
                            && map.keys().zip(children).all(|(key, &child)| {
                                self.slot(child).is_ok_and(|slot| {
                                    slot.stored_key.as_deref() == Some(key.as_str())
                                })
                            })
                    }
                    _ => children.is_empty(),
                };
                let owns_value = self.slot(id)?.detached.is_some() == self.nodes.is_root(id)?;
                if !in_sync || !owns_value {
                    return Err(TreeError::OutOfSync {
                        path: self.path(id)?,
                    });
                }
            }
        }
        Ok(())
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Verify that `child` could be attached under `parent`.
    ///
    /// The document root never gets a parent.
    pub fn check_attach(&self, child: NodeId, parent: NodeId) -> TreeResult<()> {
        if child == self.root {
            return Err(TreeError::InvalidNode);
        }
        self.nodes.check_attach(child, parent)?;
        if !self.value(parent)?.is_container() {
            return Err(TreeError::InvalidContainer);
        }
        Ok(())
    }

    /// Move a node under a new parent (as its last child), or detach it.
    ///
    /// The node's value leaves the old container and enters the new one:
    /// appended to a list, or inserted into a map under its stored key
    /// (made unique with a numeric suffix if needed).
    #[tracing::instrument(skip(self), target = "horizon_arbor::document", level = "trace")]
    pub fn set_parent(&mut self, id: NodeId, new_parent: Option<NodeId>) -> TreeResult<()> {
        if self.nodes.parent(id)? == new_parent {
            return Ok(());
        }
        if let Some(parent) = new_parent
            && let Err(err) = self.check_attach(id, parent)
        {
            tracing::warn!(target: targets::DOCUMENT, ?id, ?parent, %err, "rejected reparent");
            return Err(err);
        }

        let value = self.take_value(id)?;
        self.nodes.set_parent(id, new_parent)?;
        self.place_value(id, value)
    }

    /// Remove the node's value from wherever it currently lives.
    fn take_value(&mut self, id: NodeId) -> TreeResult<Value> {
        let Some(parent) = self.nodes.parent(id)? else {
            return self.slot_mut(id)?.detached.take().ok_or_else(|| out_of_sync(&[]));
        };
        let Located { keys, .. } = self.locate(id)?;
        let removed = match (self.value_mut(parent)?, keys.last()) {
            (Value::List(items), Some(NodeKey::Index(index))) if *index < items.len() => {
                Some(items.remove(*index))
            }
            (Value::Map(map), Some(NodeKey::Name(key))) => map.shift_remove(key),
            _ => None,
        };
        removed.ok_or_else(|| out_of_sync(&keys))
    }

    /// Store a value for a node whose linkage was just updated.
    fn place_value(&mut self, id: NodeId, value: Value) -> TreeResult<()> {
        let Some(parent) = self.nodes.parent(id)? else {
            let slot = self.slot_mut(id)?;
            slot.detached = Some(value);
            let name = slot.stored_key.clone();
            return self.nodes.set_name(id, name);
        };

        let base = self
            .slot(id)?
            .stored_key
            .clone()
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| self.options.default_key.clone());
        let suffix_start = self.options.unique_suffix_start;

        let name = match self.value_mut(parent)? {
            Value::List(items) => {
                items.push(value);
                None
            }
            Value::Map(map) => {
                let key = unique_key(&base, suffix_start, |candidate| map.contains_key(candidate));
                if key != base {
                    tracing::debug!(
                        target: targets::DOCUMENT,
                        %base,
                        %key,
                        "renamed entry to avoid key collision"
                    );
                }
                map.insert(key.clone(), value);
                Some(key)
            }
            _ => return Err(TreeError::InvalidContainer),
        };
        if let Some(key) = &name {
            self.slot_mut(id)?.stored_key = Some(key.clone());
        }
        self.nodes.set_name(id, name)
    }

    /// Attach `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> TreeResult<()> {
        self.nodes.payload(parent)?;
        self.set_parent(child, Some(parent))
    }

    /// Attach `child` under `parent` at position `index`, moving its value to
    /// the matching container position.
    ///
    /// Positions follow [`NodeTree::insert_child`].
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> TreeResult<()> {
        let count = self.nodes.child_count(parent)?;
        if index > count {
            return Err(TreeError::IndexOutOfRange { index, len: count });
        }
        self.set_parent(child, Some(parent))?;

        let (from, to) = self.nodes.reposition(parent, child, index)?;
        if from != to {
            match self.value_mut(parent)? {
                Value::List(items) => {
                    let moved = items.remove(from);
                    items.insert(to, moved);
                }
                Value::Map(map) => map.move_index(from, to),
                _ => return Err(TreeError::InvalidContainer),
            }
        }
        Ok(())
    }

    /// Detach `child` from `parent`; the child keeps its value.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> TreeResult<()> {
        self.nodes.payload(parent)?;
        if self.nodes.parent(child)? != Some(parent) {
            return Err(TreeError::NotAChild);
        }
        self.set_parent(child, None)
    }

    /// Detach a node, free its subtree and return its value.
    pub fn discard(&mut self, id: NodeId) -> TreeResult<Value> {
        if id == self.root {
            return Err(TreeError::InvalidNode);
        }
        self.set_parent(id, None)?;
        self.nodes
            .discard(id)?
            .detached
            .ok_or_else(|| out_of_sync(&[]))
    }

    /// Rename a map entry, keeping its position.
    ///
    /// Does nothing for nodes whose parent is a list, and for roots.
    pub fn set_key(&mut self, id: NodeId, key: &str) -> TreeResult<()> {
        let Some(parent) = self.nodes.parent(id)? else {
            return Ok(());
        };
        let Value::Map(siblings) = self.value(parent)? else {
            return Ok(());
        };
        let current = self.slot(id)?.stored_key.clone().ok_or_else(|| out_of_sync(&[]))?;
        if current == key {
            return Ok(());
        }
        if siblings.contains_key(key) {
            tracing::warn!(target: targets::DOCUMENT, %current, %key, "rejected key rename");
            return Err(TreeError::KeyCollision { key: key.to_owned() });
        }

        let Value::Map(map) = self.value_mut(parent)? else {
            return Err(TreeError::InvalidContainer);
        };
        let (index, _, value) = map
            .shift_remove_full(&current)
            .ok_or_else(|| out_of_sync(&[NodeKey::Name(current.clone())]))?;
        map.shift_insert(index, key.to_owned(), value);

        self.slot_mut(id)?.stored_key = Some(key.to_owned());
        self.nodes.set_name(id, Some(key.to_owned()))
    }

    /// Replace the node's value and rebuild its subtree to match.
    #[tracing::instrument(skip(self, value), target = "horizon_arbor::document", level = "trace")]
    pub fn set_value(&mut self, id: NodeId, value: Value) -> TreeResult<()> {
        // fail before discarding anything
        self.locate(id)?;
        let children = self.nodes.children(id)?.to_vec();
        for child in children {
            self.nodes.discard(child)?;
        }
        self.spawn_children(id, &value);
        *self.value_mut(id)? = value;
        Ok(())
    }

    /// Replace the whole document.
    pub fn set_tree_value(&mut self, value: Value) -> TreeResult<()> {
        self.set_value(self.root, value)
    }
}

impl DebugHierarchy for DocumentTree {
    type Id = NodeId;

    fn debug_roots(&self) -> Vec<NodeId> {
        vec![self.root]
    }

    fn debug_children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes.children(id).map(<[NodeId]>::to_vec).unwrap_or_default()
    }

    fn debug_label(&self, id: NodeId) -> String {
        match self.key(id) {
            Ok(Some(key)) => key.to_string(),
            _ => "/".to_owned(),
        }
    }

    fn debug_detail(&self, id: NodeId) -> Option<String> {
        self.value(id).ok().map(|value| match value {
            Value::List(items) => format!("<list of {}>", items.len()),
            Value::Map(map) => format!("<map of {}>", map.len()),
            Value::String(s) => format!("{s:?}"),
            scalar => scalar.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_arbor_core::logging::{TreeDebug, TreeFormatOptions, TreeStyle};
    use serde_json::json;

    fn doc(value: serde_json::Value) -> DocumentTree {
        DocumentTree::new(Value::from(value))
    }

    fn snapshot(tree: &DocumentTree) -> serde_json::Value {
        tree.check_sync().unwrap();
        let rebuilt = tree.to_obj(tree.root()).unwrap();
        assert_eq!(&rebuilt, tree.document());
        serde_json::Value::from(rebuilt)
    }

    #[test]
    fn test_round_trip() {
        let source = json!({"a": 1, "b": [1, 2, 3], "c": {"d": null, "e": [true, "x"]}});
        let tree = doc(source.clone());
        assert_eq!(snapshot(&tree), source);
        assert_eq!(tree.nodes().len(), 11);
    }

    #[test]
    fn test_keys() {
        let tree = doc(json!({"a": 1, "b": [10, 20]}));
        let a = tree.find("/a").unwrap();
        let second = tree.find("/b/1").unwrap();
        assert_eq!(tree.key(a).unwrap(), Some(NodeKey::Name("a".into())));
        assert_eq!(tree.key(second).unwrap(), Some(NodeKey::Index(1)));
        assert_eq!(tree.key(tree.root()).unwrap(), None);
        assert_eq!(tree.value(second).unwrap(), &Value::Int(20));
        assert!(tree.is_list(tree.find("/b").unwrap()).unwrap());
        assert!(tree.is_scalar(a).unwrap());
    }

    #[test]
    fn test_remove_list_entry() {
        let mut tree = doc(json!({"a": 1, "b": [1, 2, 3]}));
        let b = tree.find("/b").unwrap();
        let node = tree.find("/b/1").unwrap();
        tree.remove_child(b, node).unwrap();
        assert_eq!(snapshot(&tree), json!({"a": 1, "b": [1, 3]}));
        // the detached node keeps its value
        assert_eq!(tree.value(node).unwrap(), &Value::Int(2));
        assert_eq!(tree.discard(node).unwrap(), Value::Int(2));
        assert!(!tree.nodes().contains(node));
    }

    #[test]
    fn test_move_between_containers() {
        let mut tree = doc(json!({"a": 1, "b": [4, 8], "c": {"d": {"e": 3}}}));
        let d = tree.find("/c/d").unwrap();
        let b = tree.find("/b").unwrap();

        tree.set_parent(d, Some(tree.root())).unwrap();
        assert_eq!(snapshot(&tree), json!({"a": 1, "b": [4, 8], "c": {}, "d": {"e": 3}}));

        tree.insert_child(b, 1, d).unwrap();
        assert_eq!(snapshot(&tree), json!({"a": 1, "b": [4, {"e": 3}, 8], "c": {}}));
        assert_eq!(tree.key(d).unwrap(), Some(NodeKey::Index(1)));

        // back into a map: the stored key survives the trip through the list
        let c = tree.find("/c").unwrap();
        tree.append_child(c, d).unwrap();
        assert_eq!(snapshot(&tree), json!({"a": 1, "b": [4, 8], "c": {"d": {"e": 3}}}));
    }

    #[test]
    fn test_implicit_insert_renames_on_collision() {
        let mut tree = doc(json!({"key": 0, "x": {"key": 1}}));
        let root = tree.root();
        let inner = tree.find("/x/key").unwrap();
        tree.set_parent(inner, Some(root)).unwrap();
        assert_eq!(tree.key(inner).unwrap(), Some(NodeKey::Name("key_2".into())));

        let fresh = tree.new_node(None, Value::Int(2));
        tree.append_child(root, fresh).unwrap();
        assert_eq!(tree.key(fresh).unwrap(), Some(NodeKey::Name("key_3".into())));
        assert_eq!(snapshot(&tree), json!({"key": 0, "x": {}, "key_2": 1, "key_3": 2}));
    }

    #[test]
    fn test_set_key() {
        let mut tree = doc(json!({"a": 1, "b": 2, "c": [5]}));
        let b = tree.find("/b").unwrap();
        tree.set_key(b, "z").unwrap();
        // renamed entry keeps its position
        assert_eq!(snapshot(&tree), json!({"a": 1, "z": 2, "c": [5]}));
        assert_eq!(tree.path(b).unwrap(), "/z");

        assert_eq!(
            tree.set_key(b, "a"),
            Err(TreeError::KeyCollision { key: "a".into() })
        );
        assert_eq!(snapshot(&tree), json!({"a": 1, "z": 2, "c": [5]}));

        // list entries and roots ignore renames
        let item = tree.find("/c/0").unwrap();
        tree.set_key(item, "q").unwrap();
        tree.set_key(tree.root(), "q").unwrap();
        assert_eq!(snapshot(&tree), json!({"a": 1, "z": 2, "c": [5]}));
    }

    #[test]
    fn test_reorder_map_entries() {
        let mut tree = doc(json!({"a": 1, "b": 2, "c": 3}));
        let root = tree.root();
        let a = tree.find("/a").unwrap();
        tree.insert_child(root, 3, a).unwrap();
        assert_eq!(snapshot(&tree), json!({"b": 2, "c": 3, "a": 1}));
        let keys: Vec<&String> = tree.document().as_map().unwrap().keys().collect();
        assert_eq!(keys, ["b", "c", "a"]);
    }

    #[test]
    fn test_reorder_list_entries() {
        let mut tree = doc(json!([0, 1, 2, 3]));
        let root = tree.root();
        let last = tree.find("/3").unwrap();
        tree.insert_child(root, 0, last).unwrap();
        assert_eq!(snapshot(&tree), json!([3, 0, 1, 2]));
        assert_eq!(tree.key(last).unwrap(), Some(NodeKey::Index(0)));
    }

    #[test]
    fn test_rejections_leave_everything_unchanged() {
        let source = json!({"x": {"y": {"z": 1}}, "s": "scalar"});
        let mut tree = doc(source.clone());
        let x = tree.find("/x").unwrap();
        let y = tree.find("/x/y").unwrap();
        let s = tree.find("/s").unwrap();

        assert_eq!(tree.set_parent(x, Some(y)), Err(TreeError::Cycle));
        assert_eq!(tree.set_parent(y, Some(s)), Err(TreeError::InvalidContainer));
        assert_eq!(
            tree.insert_child(x, 5, s),
            Err(TreeError::IndexOutOfRange { index: 5, len: 1 })
        );
        assert_eq!(tree.remove_child(y, s), Err(TreeError::NotAChild));
        assert_eq!(snapshot(&tree), source);
    }

    #[test]
    fn test_root_cannot_be_reparented() {
        let mut tree = doc(json!({"a": 1}));
        let root = tree.root();
        let holder = tree.new_node(Some("holder"), Value::from(json!([])));

        assert_eq!(tree.set_parent(root, Some(holder)), Err(TreeError::InvalidNode));
        assert_eq!(tree.append_child(holder, root), Err(TreeError::InvalidNode));
        assert_eq!(tree.nodes().parent(root).unwrap(), None);
        assert_eq!(tree.find("/a"), tree.nodes().child_at(root, 0).unwrap());
        assert_eq!(snapshot(&tree), json!({"a": 1}));
        assert_eq!(tree.to_obj(holder).unwrap(), Value::from(json!([])));
    }

    #[test]
    fn test_set_value_rebuilds_subtree() {
        let mut tree = doc(json!({"a": [1, 2], "b": 3}));
        let a = tree.find("/a").unwrap();
        let old_child = tree.find("/a/0").unwrap();

        tree.set_value(a, Value::from(json!({"k": [7]}))).unwrap();
        assert!(!tree.nodes().contains(old_child));
        assert_eq!(snapshot(&tree), json!({"a": {"k": [7]}, "b": 3}));
        assert!(tree.find("/a/k/0").is_some());

        let b = tree.find("/b").unwrap();
        tree.set_value(b, Value::from("text")).unwrap();
        assert_eq!(snapshot(&tree), json!({"a": {"k": [7]}, "b": "text"}));

        tree.set_tree_value(Value::from(json!([1]))).unwrap();
        assert_eq!(snapshot(&tree), json!([1]));
    }

    #[test]
    fn test_default_key_for_unnamed_nodes() {
        let mut tree = DocumentTree::with_options(
            Value::map(),
            DocumentOptions::new().with_default_key("item"),
        );
        let root = tree.root();
        let first = tree.new_node(None, Value::Int(1));
        let second = tree.new_node(None, Value::Int(2));
        tree.append_child(root, first).unwrap();
        tree.append_child(root, second).unwrap();
        assert_eq!(snapshot(&tree), json!({"item": 1, "item_2": 2}));
    }

    #[test]
    fn test_debug_render() {
        let tree = doc(json!({"a": 1, "b": ["x"]}));
        let output = TreeDebug::with_options(TreeFormatOptions {
            style: TreeStyle::Ascii,
            ..Default::default()
        })
        .format_all(&tree);
        assert_eq!(
            output,
            "/ = <map of 2>\n+-- a = 1\n`-- b = <list of 1>\n    `-- 0 = \"x\"\n"
        );
    }
}
