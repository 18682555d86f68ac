//! The tree side of a [`TreeModel`](super::TreeModel).
//!
//! A model owns one [`ItemTree`] and turns index-based requests into calls
//! on it. Two trees are provided: plain [`NodeTree`]s show one editable
//! `Name` column, and [`DocumentTree`]s show `Key` and `Value` columns.

use crate::document::{DocumentTree, Value};
use crate::error::{TreeError, TreeResult};
use crate::tree::{NodeId, NodeTree};

/// How far a cell edit reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// The value is already there; nothing changes.
    Unchanged,
    /// Only the edited cell changes.
    Cell,
    /// The node's subtree is rebuilt.
    Subtree,
}

/// Structural and cell operations a [`TreeModel`](super::TreeModel) needs.
///
/// Every check a mutation performs is also available up front
/// ([`plan_edit`](ItemTree::plan_edit), [`check_attach`](ItemTree::check_attach))
/// so the model can reject a request before announcing it.
pub trait ItemTree: Send + Sync {
    type Payload;

    /// The node structure.
    fn nodes(&self) -> &NodeTree<Self::Payload>;

    fn column_count(&self) -> usize {
        1
    }

    /// Default column header labels.
    fn column_labels(&self) -> Vec<String>;

    /// Cell contents, `None` for empty cells.
    fn data(&self, id: NodeId, column: usize) -> Option<Value>;

    /// Validate a cell edit without applying it.
    fn plan_edit(&self, id: NodeId, column: usize, value: &Value) -> TreeResult<EditKind>;

    /// Apply an edit accepted by [`plan_edit`](ItemTree::plan_edit).
    fn apply_edit(&mut self, id: NodeId, column: usize, value: Value) -> TreeResult<()>;

    /// Whether the node may have children at all.
    fn accepts_children(&self, id: NodeId) -> bool;

    /// Verify that `child` could be attached under `parent`.
    fn check_attach(&self, child: NodeId, parent: NodeId) -> TreeResult<()>;

    /// Move or attach `child` to position `index` of `parent`.
    fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> TreeResult<()>;

    /// Detach a node and free its subtree.
    fn discard(&mut self, id: NodeId) -> TreeResult<()>;
}

fn check_column(column: usize, count: usize) -> TreeResult<()> {
    if column < count {
        Ok(())
    } else {
        Err(TreeError::IndexOutOfRange {
            index: column,
            len: count,
        })
    }
}

impl<T: Send + Sync> ItemTree for NodeTree<T> {
    type Payload = T;

    fn nodes(&self) -> &NodeTree<T> {
        self
    }

    fn column_labels(&self) -> Vec<String> {
        vec!["Name".to_owned()]
    }

    fn data(&self, id: NodeId, column: usize) -> Option<Value> {
        if column != 0 {
            return None;
        }
        self.name(id).ok().map(Value::String)
    }

    fn plan_edit(&self, id: NodeId, column: usize, value: &Value) -> TreeResult<EditKind> {
        check_column(column, 1)?;
        let name = value.to_key_string().ok_or(TreeError::InvalidKey)?;
        if self.raw_name(id)? == Some(name.as_str()) {
            Ok(EditKind::Unchanged)
        } else {
            Ok(EditKind::Cell)
        }
    }

    fn apply_edit(&mut self, id: NodeId, column: usize, value: Value) -> TreeResult<()> {
        check_column(column, 1)?;
        let name = value.to_key_string().ok_or(TreeError::InvalidKey)?;
        self.set_name(id, Some(name))
    }

    fn accepts_children(&self, id: NodeId) -> bool {
        self.contains(id)
    }

    fn check_attach(&self, child: NodeId, parent: NodeId) -> TreeResult<()> {
        NodeTree::check_attach(self, child, parent)
    }

    fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> TreeResult<()> {
        NodeTree::insert_child(self, parent, index, child)
    }

    fn discard(&mut self, id: NodeId) -> TreeResult<()> {
        NodeTree::discard(self, id).map(drop)
    }
}

/// Column showing a node's key.
pub const KEY_COLUMN: usize = 0;
/// Column showing a scalar node's value.
pub const VALUE_COLUMN: usize = 1;

impl ItemTree for DocumentTree {
    type Payload = crate::document::DocumentSlot;

    fn nodes(&self) -> &NodeTree<Self::Payload> {
        DocumentTree::nodes(self)
    }

    fn column_count(&self) -> usize {
        2
    }

    fn column_labels(&self) -> Vec<String> {
        vec!["Key".to_owned(), "Value".to_owned()]
    }

    fn data(&self, id: NodeId, column: usize) -> Option<Value> {
        match column {
            KEY_COLUMN => self.key(id).ok().flatten().map(|key| key.to_value()),
            VALUE_COLUMN => self.value(id).ok().filter(|value| value.is_scalar()).cloned(),
            _ => None,
        }
    }

    fn plan_edit(&self, id: NodeId, column: usize, value: &Value) -> TreeResult<EditKind> {
        check_column(column, 2)?;
        let current = self.value(id)?;
        if column == VALUE_COLUMN {
            return Ok(if current == value {
                EditKind::Unchanged
            } else if current.is_container() || value.is_container() {
                EditKind::Subtree
            } else {
                EditKind::Cell
            });
        }

        let key = value.to_key_string().ok_or(TreeError::InvalidKey)?;
        let Some(parent) = self.nodes().parent(id)? else {
            return Ok(EditKind::Unchanged);
        };
        let Some(siblings) = self.value(parent)?.as_map() else {
            return Ok(EditKind::Unchanged);
        };
        let current_key = self.nodes().payload(id)?.stored_key();
        if current_key == Some(key.as_str()) {
            Ok(EditKind::Unchanged)
        } else if siblings.contains_key(&key) {
            Err(TreeError::KeyCollision { key })
        } else {
            Ok(EditKind::Cell)
        }
    }

    fn apply_edit(&mut self, id: NodeId, column: usize, value: Value) -> TreeResult<()> {
        check_column(column, 2)?;
        if column == VALUE_COLUMN {
            return self.set_value(id, value);
        }
        let key = value.to_key_string().ok_or(TreeError::InvalidKey)?;
        self.set_key(id, &key)
    }

    fn accepts_children(&self, id: NodeId) -> bool {
        self.is_container(id).unwrap_or(false)
    }

    fn check_attach(&self, child: NodeId, parent: NodeId) -> TreeResult<()> {
        DocumentTree::check_attach(self, child, parent)
    }

    fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> TreeResult<()> {
        DocumentTree::insert_child(self, parent, index, child)
    }

    fn discard(&mut self, id: NodeId) -> TreeResult<()> {
        DocumentTree::discard(self, id).map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_tree_name_column() {
        let mut tree = NodeTree::new();
        let root = tree.new_node(None, ());
        let child = tree.new_node(Some("a"), ());
        tree.append_child(root, child).unwrap();

        assert_eq!(ItemTree::data(&tree, child, 0), Some(Value::from("a")));
        assert_eq!(ItemTree::data(&tree, child, 1), None);
        assert_eq!(tree.plan_edit(child, 0, &Value::from("a")), Ok(EditKind::Unchanged));
        assert_eq!(tree.plan_edit(child, 0, &Value::Int(7)), Ok(EditKind::Cell));
        assert_eq!(tree.plan_edit(child, 0, &Value::list()), Err(TreeError::InvalidKey));
        assert_eq!(
            tree.plan_edit(child, 1, &Value::from("b")),
            Err(TreeError::IndexOutOfRange { index: 1, len: 1 })
        );

        tree.apply_edit(child, 0, Value::Int(7)).unwrap();
        assert_eq!(tree.name(child).unwrap(), "7");
    }

    #[test]
    fn test_document_columns() {
        let tree = DocumentTree::new(Value::from(json!({"a": 1, "b": [true]})));
        let a = tree.find("/a").unwrap();
        let b = tree.find("/b").unwrap();
        let item = tree.find("/b/0").unwrap();

        assert_eq!(ItemTree::data(&tree, a, KEY_COLUMN), Some(Value::from("a")));
        assert_eq!(ItemTree::data(&tree, a, VALUE_COLUMN), Some(Value::Int(1)));
        assert_eq!(ItemTree::data(&tree, b, VALUE_COLUMN), None);
        assert_eq!(ItemTree::data(&tree, item, KEY_COLUMN), Some(Value::Int(0)));
        assert!(tree.accepts_children(b));
        assert!(!tree.accepts_children(a));
    }

    #[test]
    fn test_document_edit_plans() {
        let tree = DocumentTree::new(Value::from(json!({"a": 1, "b": [true]})));
        let a = tree.find("/a").unwrap();
        let item = tree.find("/b/0").unwrap();

        assert_eq!(tree.plan_edit(a, KEY_COLUMN, &Value::from("z")), Ok(EditKind::Cell));
        assert_eq!(tree.plan_edit(a, KEY_COLUMN, &Value::from("a")), Ok(EditKind::Unchanged));
        assert_eq!(
            tree.plan_edit(a, KEY_COLUMN, &Value::from("b")),
            Err(TreeError::KeyCollision { key: "b".into() })
        );
        // list entries have no key to rename
        assert_eq!(tree.plan_edit(item, KEY_COLUMN, &Value::from("x")), Ok(EditKind::Unchanged));

        assert_eq!(tree.plan_edit(a, VALUE_COLUMN, &Value::Int(1)), Ok(EditKind::Unchanged));
        assert_eq!(tree.plan_edit(a, VALUE_COLUMN, &Value::Int(2)), Ok(EditKind::Cell));
        assert_eq!(tree.plan_edit(a, VALUE_COLUMN, &Value::list()), Ok(EditKind::Subtree));
    }
}
