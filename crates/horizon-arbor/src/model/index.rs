//! Model index for addressing items in hierarchical models.
//!
//! A `ModelIndex` names a cell by row and column under a parent index, and
//! carries the [`NodeId`] of the item it was built for.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::tree::NodeId;

/// A position within an [`ItemModel`](super::ItemModel).
///
/// # Index Validity
///
/// Indices are snapshots. Any insert, remove or move may change the row an
/// item sits on, so re-derive indices after a structural change instead of
/// storing them.
///
/// The invalid index stands for the model root when used as a parent.
///
/// # Example
///
/// ```
/// use horizon_arbor::model::{ItemModel, ModelIndex, TreeModel};
/// use horizon_arbor::document::Value;
/// use serde_json::json;
///
/// let model = TreeModel::from_value(Value::from(json!({"a": [1, 2]})));
/// let a = model.index(0, 0, &ModelIndex::invalid());
/// let second = model.index(1, 0, &a);
/// assert_eq!(second.parent(), a);
/// assert_eq!(second.depth(), 1);
/// ```
#[derive(Clone)]
pub struct ModelIndex {
    row: usize,
    column: usize,
    /// `None` for top-level items.
    parent: Option<Box<ModelIndex>>,
    /// The item this index was created for; `None` marks an invalid index.
    node: Option<NodeId>,
}

impl Default for ModelIndex {
    fn default() -> Self {
        Self::invalid()
    }
}

impl ModelIndex {
    /// Creates an invalid (null) model index.
    ///
    /// An invalid index represents:
    /// - the root of the model (as a parent reference)
    /// - a non-existent or out-of-bounds item
    #[inline]
    pub const fn invalid() -> Self {
        Self {
            row: 0,
            column: 0,
            parent: None,
            node: None,
        }
    }

    /// Creates a valid index for `node` at `(row, column)` under `parent`.
    ///
    /// Models call this; pass `ModelIndex::invalid()` for top-level items.
    #[inline]
    pub fn new(row: usize, column: usize, parent: ModelIndex, node: NodeId) -> Self {
        Self {
            row,
            column,
            parent: parent.is_valid().then(|| Box::new(parent)),
            node: Some(node),
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.node.is_some()
    }

    /// Row within the parent; 0 for invalid indices.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column within the parent; 0 for invalid indices.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// The parent index, or an invalid index for top-level items.
    #[inline]
    pub fn parent(&self) -> ModelIndex {
        match &self.parent {
            Some(parent) => (**parent).clone(),
            None => ModelIndex::invalid(),
        }
    }

    /// The node this index refers to.
    #[inline]
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Number of valid ancestors. Top-level items have depth 0.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent.as_deref();
        while let Some(index) = current {
            depth += 1;
            current = index.parent.as_deref();
        }
        depth
    }

}

impl std::fmt::Debug for ModelIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.node {
            Some(node) => f
                .debug_struct("ModelIndex")
                .field("row", &self.row)
                .field("column", &self.column)
                .field("depth", &self.depth())
                .field("node", &node)
                .finish(),
            None => write!(f, "ModelIndex(invalid)"),
        }
    }
}

impl PartialEq for ModelIndex {
    fn eq(&self, other: &Self) -> bool {
        // the node determines the parent chain
        self.node == other.node
            && (self.node.is_none() || (self.row == other.row && self.column == other.column))
    }
}

impl Eq for ModelIndex {}

impl Hash for ModelIndex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
        if self.node.is_some() {
            self.row.hash(state);
            self.column.hash(state);
        }
    }
}

impl PartialOrd for ModelIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ModelIndex {
    /// Invalid first, then shallower before deeper, then by row, column and node.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_valid(), other.is_valid()) {
            (false, false) => Ordering::Equal,
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => self
                .depth()
                .cmp(&other.depth())
                .then(self.row.cmp(&other.row))
                .then(self.column.cmp(&other.column))
                .then(self.node.cmp(&other.node)),
        }
    }
}
