//! Index-addressed model over an [`ItemTree`].
//!
//! `TreeModel` exposes the subtree below one root node as rows and columns.
//! Structural requests (insert, remove, move) and cell edits are validated
//! first, then applied between a matched pair of [`ModelSignals`]
//! notifications. A rejected request changes nothing and notifies no one.
//!
//! Rows may be given as negative numbers counted from the end: for rows
//! that must exist (`remove_rows`, the source of `move_rows`) `-1` is the
//! last row; for insertion positions `-1` means "append".

use std::collections::HashSet;

use parking_lot::RwLock;

use horizon_arbor_core::logging::targets;

use super::change::{ModelChange, MoveDestination};
use super::config::ModelConfig;
use super::index::ModelIndex;
use super::item_tree::{EditKind, ItemTree};
use super::traits::{ItemFlags, ItemModel, ModelSignals, Orientation};
use crate::document::{DocumentTree, Value};
use crate::error::{TreeError, TreeResult};
use crate::tree::{NodeId, NodeTree};

/// Resolve a row that must name an existing child.
fn resolve_row(row: isize, count: usize) -> Option<usize> {
    if row >= 0 {
        Some(row.unsigned_abs())
    } else {
        count.checked_sub(row.unsigned_abs())
    }
}

/// Resolve an insertion position, where `-1` means after the last child.
fn resolve_insert_row(row: isize, count: usize) -> Option<usize> {
    if row >= 0 {
        Some(row.unsigned_abs())
    } else {
        (count + 1).checked_sub(row.unsigned_abs())
    }
}

/// First and last differing position between two label lists.
fn changed_range(old: &[String], new: &[String]) -> Option<(usize, usize)> {
    let overlap = old.len().min(new.len());
    let first = (0..overlap).find(|&i| old[i] != new[i]).unwrap_or(overlap);
    let mut last = old.len().max(new.len()).checked_sub(1)?;
    if old.len() == new.len() {
        while last > first && old[last] == new[last] {
            last -= 1;
        }
    }
    (first <= last).then_some((first, last))
}

struct ModelState<S> {
    tree: S,
    root: NodeId,
    column_labels: Vec<String>,
    row_labels: Vec<String>,
}

impl<S: ItemTree> ModelState<S> {
    fn nodes(&self) -> &NodeTree<S::Payload> {
        self.tree.nodes()
    }

    /// Returns `true` for the root and its descendants.
    fn in_model(&self, id: NodeId) -> bool {
        self.nodes().contains(id) && self.nodes().has_ancestor(id, self.root)
    }

    fn child_count(&self, id: NodeId) -> usize {
        self.nodes().child_count(id).unwrap_or(0)
    }

    fn labels(&self, orientation: Orientation) -> &Vec<String> {
        match orientation {
            Orientation::Horizontal => &self.column_labels,
            Orientation::Vertical => &self.row_labels,
        }
    }

    fn labels_mut(&mut self, orientation: Orientation) -> &mut Vec<String> {
        match orientation {
            Orientation::Horizontal => &mut self.column_labels,
            Orientation::Vertical => &mut self.row_labels,
        }
    }

    fn index_for_node(&self, id: NodeId, column: usize) -> ModelIndex {
        if id == self.root || !self.in_model(id) {
            return ModelIndex::invalid();
        }
        let mut lineage = vec![id];
        lineage.extend(self.nodes().ancestors(id).take_while(|&node| node != self.root));

        let mut index = ModelIndex::invalid();
        for (depth, &node) in lineage.iter().rev().enumerate() {
            let row = self.nodes().sibling_index(node).unwrap_or(0);
            let col = if depth + 1 == lineage.len() { column } else { 0 };
            index = ModelIndex::new(row, col, index, node);
        }
        index
    }

    fn path_for_node(&self, id: NodeId) -> Option<String> {
        if !self.in_model(id) {
            return None;
        }
        let mut names = Vec::new();
        let mut current = id;
        while current != self.root {
            names.push(self.nodes().name(current).ok()?);
            current = self.nodes().parent(current).ok()??;
        }
        names.reverse();
        Some(format!("/{}", names.join("/")))
    }

    fn node_for_path(&self, path: &str) -> Option<NodeId> {
        self.nodes().find(self.root, path.trim_start_matches('/'))
    }

    /// Validate a move and return the source rows and the destination row.
    fn plan_move(
        &self,
        src_parent: NodeId,
        src_row: isize,
        count: usize,
        dst_parent: NodeId,
        dst_row: isize,
    ) -> Result<(Vec<NodeId>, usize, usize), &'static str> {
        if !self.in_model(src_parent) || !self.in_model(dst_parent) {
            return Err("parent outside the model");
        }
        if count == 0 {
            return Err("empty move");
        }
        let src_count = self.child_count(src_parent);
        let src = resolve_row(src_row, src_count)
            .filter(|&row| row.checked_add(count).is_some_and(|end| end <= src_count))
            .ok_or("source rows out of range")?;
        let dst = resolve_insert_row(dst_row, self.child_count(dst_parent))
            .filter(|&row| row <= self.child_count(dst_parent))
            .ok_or("destination row out of range")?;
        if src_parent == dst_parent && (src..=src + count).contains(&dst) {
            return Err("destination lies within the moved rows");
        }

        let items = self
            .nodes()
            .children(src_parent)
            .map_err(|_| "invalid parent")?[src..src + count]
            .to_vec();
        for &item in &items {
            if let Err(err) = self.tree.check_attach(item, dst_parent) {
                tracing::warn!(target: targets::MODEL, ?item, ?dst_parent, %err, "rejected move");
                return Err("destination rejects the rows");
            }
        }
        Ok((items, src, dst))
    }
}

/// An [`ItemModel`] over the subtree of an [`ItemTree`] below a root node.
///
/// The root itself has no index; the invalid index stands for it.
///
/// # Example
///
/// ```
/// use horizon_arbor::model::TreeModel;
/// use horizon_arbor::document::Value;
/// use serde_json::json;
///
/// let model = TreeModel::from_value(Value::from(json!(["A", "B", "C"])));
/// let root = model.root();
/// assert!(model.move_row(root, 0, root, 3));
/// assert_eq!(model.tree_value(), Value::from(json!(["B", "C", "A"])));
/// ```
pub struct TreeModel<S: ItemTree> {
    state: RwLock<ModelState<S>>,
    drag_enabled: bool,
    drop_enabled: bool,
    signals: ModelSignals,
}

impl<S: ItemTree> TreeModel<S> {
    /// Create a model showing the subtree below `root`.
    pub fn new(tree: S, root: NodeId) -> Self {
        Self::with_config(tree, root, ModelConfig::default())
    }

    pub fn with_config(tree: S, root: NodeId, config: ModelConfig) -> Self {
        let column_labels = config.column_labels.unwrap_or_else(|| tree.column_labels());
        Self {
            state: RwLock::new(ModelState {
                tree,
                root,
                column_labels,
                row_labels: config.row_labels,
            }),
            drag_enabled: config.drag_enabled,
            drop_enabled: config.drop_enabled,
            signals: ModelSignals::new(),
        }
    }

    pub fn drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    pub fn drop_enabled(&self) -> bool {
        self.drop_enabled
    }

    /// The node the model shows the children of.
    pub fn root(&self) -> NodeId {
        self.state.read().root
    }

    /// Show a different subtree. Returns `false` for unknown nodes.
    pub fn set_root(&self, root: NodeId) -> bool {
        if !self.state.read().nodes().contains(root) {
            tracing::debug!(target: targets::MODEL, ?root, "rejected unknown root");
            return false;
        }
        self.signals.emit_change(ModelChange::reset(), || {
            self.state.write().root = root;
        });
        true
    }

    /// Read the underlying tree.
    pub fn with_tree<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.state.read().tree)
    }

    /// Change the underlying tree arbitrarily inside a reset bracket.
    pub fn reset_with<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        self.signals
            .emit_change(ModelChange::reset(), || f(&mut self.state.write().tree))
    }

    pub fn into_tree(self) -> S {
        self.state.into_inner().tree
    }

    /// Depth of the deepest item below the root.
    pub fn max_depth(&self) -> usize {
        let state = self.state.read();
        state.nodes().branch_max_depth(state.root).unwrap_or(0)
    }

    // =========================================================================
    // Index <-> node
    // =========================================================================

    /// Index of `id` in `column`; invalid for the root and for nodes outside the model.
    pub fn index_for_node(&self, id: NodeId, column: usize) -> ModelIndex {
        self.state.read().index_for_node(id, column)
    }

    /// The node an index refers to; the invalid index maps to the root.
    pub fn node_for_index(&self, index: &ModelIndex) -> NodeId {
        index.node().unwrap_or_else(|| self.root())
    }

    pub fn row_count_of(&self, parent: NodeId) -> usize {
        let state = self.state.read();
        if state.in_model(parent) {
            state.child_count(parent)
        } else {
            0
        }
    }

    // =========================================================================
    // Cells
    // =========================================================================

    pub fn data_of(&self, id: NodeId, column: usize) -> Option<Value> {
        let state = self.state.read();
        if !state.in_model(id) {
            return None;
        }
        state.tree.data(id, column)
    }

    /// Edit a cell, reporting why an edit was rejected.
    ///
    /// Edits that change nothing succeed without notifying. Edits that
    /// rebuild a subtree, or edit the root, are bracketed as a reset; all
    /// others as a data change of the node's row.
    #[tracing::instrument(skip(self, value), target = "horizon_arbor::model", level = "trace")]
    pub fn try_set_data(&self, id: NodeId, column: usize, value: Value) -> TreeResult<()> {
        let change = {
            let state = self.state.read();
            if !state.in_model(id) {
                return Err(TreeError::InvalidNode);
            }
            match (state.tree.plan_edit(id, column, &value)?, state.nodes().parent(id)?) {
                (EditKind::Unchanged, _) => return Ok(()),
                (EditKind::Cell, Some(parent)) if id != state.root => {
                    let row = state.nodes().sibling_index(id)?;
                    ModelChange::data_changed(parent, row, row)
                }
                _ => ModelChange::reset(),
            }
        };
        self.signals.emit_change(change, || {
            self.state.write().tree.apply_edit(id, column, value)
        })
    }

    /// Edit a cell; `false` if the edit was rejected.
    pub fn set_data_of(&self, id: NodeId, column: usize, value: Value) -> bool {
        match self.try_set_data(id, column, value) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(target: targets::MODEL, ?id, column, %err, "rejected edit");
                false
            }
        }
    }

    // =========================================================================
    // Headers
    // =========================================================================

    pub fn header_label(&self, orientation: Orientation, section: usize) -> Option<String> {
        self.state.read().labels(orientation).get(section).cloned()
    }

    pub fn header_labels(&self, orientation: Orientation) -> Vec<String> {
        self.state.read().labels(orientation).clone()
    }

    /// Replace all labels of one header, notifying only the sections that differ.
    pub fn set_header_labels<I, L>(&self, orientation: Orientation, labels: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let range = changed_range(self.state.read().labels(orientation), &labels);
        let store = || *self.state.write().labels_mut(orientation) = labels;
        match range {
            Some((first, last)) => self
                .signals
                .emit_change(ModelChange::header_changed(orientation, first, last), store),
            None => store(),
        }
    }

    /// Set one label, padding the header with empty labels as needed.
    ///
    /// Returns `false` only for a section past the addressable range.
    pub fn set_header_label(&self, orientation: Orientation, section: usize, label: &str) -> bool {
        if self.header_label(orientation, section).as_deref() == Some(label) {
            return true;
        }
        let Some(len) = section.checked_add(1) else {
            tracing::debug!(target: targets::MODEL, section, "header section out of range");
            return false;
        };
        let change = ModelChange::header_changed(orientation, section, section);
        self.signals.emit_change(change, || {
            let mut state = self.state.write();
            let labels = state.labels_mut(orientation);
            if labels.len() < len {
                labels.resize(len, String::new());
            }
            labels[section] = label.to_owned();
        });
        true
    }

    // =========================================================================
    // Rows
    // =========================================================================

    /// Remove and discard `count` children of `parent` starting at `row`.
    #[tracing::instrument(skip(self), target = "horizon_arbor::model", level = "trace")]
    pub fn remove_rows(&self, row: isize, count: usize, parent: NodeId) -> bool {
        let first = {
            let state = self.state.read();
            if !state.in_model(parent) || count == 0 {
                tracing::debug!(target: targets::MODEL, ?parent, count, "rejected removal");
                return false;
            }
            let child_count = state.child_count(parent);
            let in_range =
                |first: usize| first.checked_add(count).is_some_and(|end| end <= child_count);
            match resolve_row(row, child_count).filter(|&first| in_range(first)) {
                Some(first) => first,
                None => {
                    tracing::debug!(
                        target: targets::MODEL,
                        row,
                        count,
                        child_count,
                        "removal out of range"
                    );
                    return false;
                }
            }
        };

        self.signals
            .emit_change(ModelChange::remove(parent, first, first + count - 1), || {
                let mut state = self.state.write();
                // last to first so earlier rows keep their position
                for row in (first..first + count).rev() {
                    let child = state.nodes().child_at(parent, row).ok().flatten();
                    if let Some(child) = child
                        && let Err(err) = state.tree.discard(child)
                    {
                        tracing::warn!(
                            target: targets::MODEL,
                            ?child,
                            %err,
                            "failed to discard row"
                        );
                    }
                }
            });
        true
    }

    /// Insert detached nodes as children of `parent`, starting at `row`.
    ///
    /// Every item must be a detached root that `parent` accepts.
    #[tracing::instrument(skip(self), target = "horizon_arbor::model", level = "trace")]
    pub fn insert_items(&self, row: isize, items: &[NodeId], parent: NodeId) -> bool {
        let first = {
            let state = self.state.read();
            if !state.in_model(parent) || items.is_empty() {
                return false;
            }
            let child_count = state.child_count(parent);
            let Some(first) =
                resolve_insert_row(row, child_count).filter(|&first| first <= child_count)
            else {
                tracing::debug!(target: targets::MODEL, row, child_count, "insertion out of range");
                return false;
            };
            let mut seen = HashSet::new();
            for &item in items {
                let detached = item != state.root && state.nodes().is_root(item).unwrap_or(false);
                if !detached || !seen.insert(item) {
                    tracing::debug!(
                        target: targets::MODEL,
                        ?item,
                        "only distinct detached nodes can be inserted"
                    );
                    return false;
                }
                if let Err(err) = state.tree.check_attach(item, parent) {
                    tracing::warn!(
                        target: targets::MODEL,
                        ?item,
                        ?parent,
                        %err,
                        "rejected insertion"
                    );
                    return false;
                }
            }
            first
        };

        let change = ModelChange::insert(parent, first, first + items.len() - 1);
        self.signals.emit_change(change, || {
            let mut state = self.state.write();
            for (offset, &item) in items.iter().enumerate() {
                if let Err(err) = state.tree.insert_child(parent, first + offset, item) {
                    tracing::warn!(target: targets::MODEL, ?item, %err, "failed to insert row");
                }
            }
        });
        true
    }

    /// Insert detached nodes after the last child of `parent`.
    pub fn append_items(&self, items: &[NodeId], parent: NodeId) -> bool {
        self.insert_items(-1, items, parent)
    }

    /// Move `count` children of `src_parent`, starting at `src_row`, so that
    /// they land before row `dst_row` of `dst_parent`.
    ///
    /// `dst_row` counts rows as they are before the move. Moves that would
    /// leave the rows where they are return `false`, as do moves into a
    /// moved row's own subtree and moves into a parent that cannot hold the
    /// rows.
    #[tracing::instrument(skip(self), target = "horizon_arbor::model", level = "trace")]
    pub fn move_rows(
        &self,
        src_parent: NodeId,
        src_row: isize,
        count: usize,
        dst_parent: NodeId,
        dst_row: isize,
    ) -> bool {
        let plan = self
            .state
            .read()
            .plan_move(src_parent, src_row, count, dst_parent, dst_row);
        let (items, src, dst) = match plan {
            Ok(plan) => plan,
            Err(reason) => {
                tracing::debug!(target: targets::MODEL, reason, "rejected move");
                return false;
            }
        };

        let destination = MoveDestination {
            parent: dst_parent,
            row: dst,
        };
        let change = ModelChange::moved(src_parent, src, src + count - 1, destination);
        self.signals.emit_change(change, || {
            let mut state = self.state.write();
            // moving forward within a parent: the rows ahead of dst shift up by one as each leaves
            let forward = src_parent == dst_parent && src < dst;
            for (offset, &item) in items.iter().enumerate() {
                let index = if forward { dst - 1 } else { dst + offset };
                if let Err(err) = state.tree.insert_child(dst_parent, index, item) {
                    tracing::warn!(target: targets::MODEL, ?item, %err, "failed to move row");
                }
            }
        });
        true
    }

    /// Move one row. See [`move_rows`](Self::move_rows).
    pub fn move_row(
        &self,
        src_parent: NodeId,
        src_row: isize,
        dst_parent: NodeId,
        dst_row: isize,
    ) -> bool {
        self.move_rows(src_parent, src_row, 1, dst_parent, dst_row)
    }

    /// Group nodes into runs of adjacent siblings.
    ///
    /// Groups come in reverse depth-first order, so removing or moving them
    /// one after another never shifts a group that is still pending. The
    /// root and nodes outside the model are ignored.
    pub fn group_items(&self, items: &[NodeId]) -> Vec<Vec<NodeId>> {
        let state = self.state.read();
        let wanted: HashSet<NodeId> = items
            .iter()
            .copied()
            .filter(|&id| id != state.root)
            .collect();
        let nodes = state.nodes();

        let mut groups: Vec<(NodeId, Vec<NodeId>)> = Vec::new();
        for id in nodes.reverse_depth_first(state.root).filter(|id| wanted.contains(id)) {
            let (Ok(Some(parent)), Ok(row)) = (nodes.parent(id), nodes.sibling_index(id)) else {
                continue;
            };
            let run = groups.iter_mut().find(|(group_parent, group)| {
                *group_parent == parent
                    && nodes
                        .sibling_index(group[0])
                        .is_ok_and(|first| first == row + 1)
            });
            match run {
                Some((_, group)) => group.insert(0, id),
                None => groups.push((parent, vec![id])),
            }
        }
        groups.into_iter().map(|(_, group)| group).collect()
    }

    /// Where a group currently sits: its parent and first row.
    fn group_position(&self, group: &[NodeId]) -> Option<(NodeId, usize)> {
        let state = self.state.read();
        let first = *group.first()?;
        let parent = state.nodes().parent(first).ok()??;
        let row = state.nodes().sibling_index(first).ok()?;
        Some((parent, row))
    }

    /// Remove nodes group by group. `true` only if every group was removed.
    pub fn remove_items(&self, items: &[NodeId]) -> bool {
        let groups = self.group_items(items);
        if groups.is_empty() {
            return false;
        }
        let mut all = true;
        for group in groups {
            all &= match self.group_position(&group) {
                Some((parent, row)) => self.remove_rows(row as isize, group.len(), parent),
                None => false,
            };
        }
        all
    }

    /// Move nodes group by group to `dst_row` of `dst_parent`.
    ///
    /// `true` only if every group moved.
    pub fn move_items(&self, items: &[NodeId], dst_parent: NodeId, dst_row: isize) -> bool {
        let groups = self.group_items(items);
        if groups.is_empty() {
            return false;
        }
        let mut all = true;
        for group in groups {
            all &= match self.group_position(&group) {
                Some((parent, row)) => {
                    self.move_rows(parent, row as isize, group.len(), dst_parent, dst_row)
                }
                None => false,
            };
        }
        all
    }

    // =========================================================================
    // Paths
    // =========================================================================

    /// Path of an item relative to the model root; `/` for the invalid index.
    pub fn path_for_index(&self, index: &ModelIndex) -> Option<String> {
        self.path_for_node(self.node_for_index(index))
    }

    pub fn path_for_node(&self, id: NodeId) -> Option<String> {
        self.state.read().path_for_node(id)
    }

    /// Index of the item at `path`; the invalid index for `/`.
    pub fn index_for_path(&self, path: &str) -> Option<ModelIndex> {
        let state = self.state.read();
        state.node_for_path(path).map(|id| state.index_for_node(id, 0))
    }

    pub fn node_for_path(&self, path: &str) -> Option<NodeId> {
        self.state.read().node_for_path(path)
    }

    pub fn is_valid_path(&self, path: &str) -> bool {
        self.node_for_path(path).is_some()
    }

    /// Path of the parent item; `None` for `/`.
    pub fn parent_path(path: &str) -> Option<String> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.rsplit_once('/') {
            Some((parent, _)) if !parent.is_empty() => Some(parent.to_owned()),
            _ => Some("/".to_owned()),
        }
    }

    /// Remove the items at `paths`; unknown paths are skipped.
    pub fn remove_paths(&self, paths: &[&str]) -> bool {
        let items: Vec<NodeId> = paths.iter().filter_map(|path| self.node_for_path(path)).collect();
        self.remove_items(&items)
    }

    /// Move the items at `paths` under the item at `dst_parent_path`.
    ///
    /// A `dst_row` outside the destination's rows appends.
    pub fn move_paths(&self, paths: &[&str], dst_parent_path: &str, dst_row: isize) -> bool {
        let Some(dst_parent) = self.node_for_path(dst_parent_path) else {
            return false;
        };
        let row_count = self.row_count_of(dst_parent);
        let dst_row = if dst_row < 0 || dst_row.unsigned_abs() > row_count {
            -1
        } else {
            dst_row
        };
        let items: Vec<NodeId> = paths.iter().filter_map(|path| self.node_for_path(path)).collect();
        self.move_items(&items, dst_parent, dst_row)
    }
}

impl TreeModel<DocumentTree> {
    /// A model over a fresh document tree built from `value`.
    pub fn from_value(value: Value) -> Self {
        Self::from_document(DocumentTree::new(value))
    }

    pub fn from_document(document: DocumentTree) -> Self {
        let root = document.root();
        Self::new(document, root)
    }

    /// The document below the model root.
    pub fn tree_value(&self) -> Value {
        let state = self.state.read();
        state.tree.value(state.root).cloned().unwrap_or_default()
    }

    /// Replace the document below the model root.
    pub fn set_tree_value(&self, value: Value) -> bool {
        let result = self.signals.emit_change(ModelChange::reset(), || {
            let mut state = self.state.write();
            let root = state.root;
            state.tree.set_value(root, value)
        });
        result.is_ok()
    }
}

impl<S: ItemTree> ItemModel for TreeModel<S> {
    fn row_count(&self, parent: &ModelIndex) -> usize {
        // only the first column has children
        if parent.column() != 0 {
            return 0;
        }
        self.row_count_of(self.node_for_index(parent))
    }

    fn column_count(&self, _parent: &ModelIndex) -> usize {
        self.state.read().tree.column_count()
    }

    fn data(&self, index: &ModelIndex) -> Option<Value> {
        self.data_of(index.node()?, index.column())
    }

    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex {
        let state = self.state.read();
        let parent_node = parent.node().unwrap_or(state.root);
        if column >= state.tree.column_count()
            || parent.column() != 0
            || !state.in_model(parent_node)
        {
            return ModelIndex::invalid();
        }
        match state.nodes().child_at(parent_node, row) {
            Ok(Some(child)) => ModelIndex::new(row, column, parent.clone(), child),
            _ => ModelIndex::invalid(),
        }
    }

    fn parent(&self, index: &ModelIndex) -> ModelIndex {
        let Some(id) = index.node() else {
            return ModelIndex::invalid();
        };
        let state = self.state.read();
        match state.nodes().parent(id) {
            Ok(Some(parent)) => state.index_for_node(parent, 0),
            _ => ModelIndex::invalid(),
        }
    }

    fn signals(&self) -> &ModelSignals {
        &self.signals
    }

    fn set_data(&self, index: &ModelIndex, value: Value) -> bool {
        match index.node() {
            Some(id) => self.set_data_of(id, index.column(), value),
            None => false,
        }
    }

    fn flags(&self, index: &ModelIndex) -> ItemFlags {
        let state = self.state.read();
        let Some(id) = index.node() else {
            return ItemFlags::disabled().with_drop(self.drop_enabled);
        };
        if !state.in_model(id) {
            return ItemFlags::disabled();
        }
        let container = state.tree.accepts_children(id);
        ItemFlags::editable()
            .with_drag(self.drag_enabled)
            .with_drop(self.drop_enabled && container)
            .with_never_has_children(!container)
    }

    fn header_data(&self, section: usize, orientation: Orientation) -> Option<String> {
        self.header_label(orientation, section)
    }

    fn set_header_data(&self, section: usize, orientation: Orientation, label: &str) -> bool {
        self.set_header_label(orientation, section, label)
    }
}
