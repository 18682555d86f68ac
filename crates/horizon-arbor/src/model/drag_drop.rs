//! Translating drop gestures into row moves.
//!
//! A view reports a drop as a source index, a target index and where the
//! pointer was relative to the target. [`resolve_drop`] turns that into a
//! destination parent and row; [`TreeModel::drop_rows`] then performs a
//! single [`move_row`](TreeModel::move_row), which does all the validation.

use horizon_arbor_core::logging::targets;

use super::change::MoveDestination;
use super::index::ModelIndex;
use super::item_tree::ItemTree;
use super::tree_model::TreeModel;
use crate::tree::{NodeId, NodeTree};

/// Where a drop landed relative to the item under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropPosition {
    /// Above the target: becomes its previous sibling.
    Before,
    /// Below the target: becomes its next sibling.
    After,
    /// On the target: becomes its last child.
    OnNode,
    /// Below all items: becomes the root's last child.
    OnEmptyArea,
}

/// Destination parent and row for a drop on `target`.
///
/// `None` as the target, or the root itself, means the drop landed outside
/// any item and appends to `root`. Returns `None` only when `target` is
/// not part of `nodes`.
pub fn resolve_drop<T>(
    nodes: &NodeTree<T>,
    root: NodeId,
    target: Option<NodeId>,
    position: DropPosition,
) -> Option<MoveDestination> {
    let append_to = |parent: NodeId| {
        nodes
            .child_count(parent)
            .ok()
            .map(|row| MoveDestination { parent, row })
    };

    let target = match target {
        Some(target) if target != root && position != DropPosition::OnEmptyArea => target,
        _ => return append_to(root),
    };
    match position {
        DropPosition::OnNode => append_to(target),
        DropPosition::Before | DropPosition::After => {
            let parent = nodes.parent(target).ok()??;
            let row = nodes.sibling_index(target).ok()?;
            let row = if position == DropPosition::After { row + 1 } else { row };
            Some(MoveDestination { parent, row })
        }
        DropPosition::OnEmptyArea => append_to(root),
    }
}

impl<S: ItemTree> TreeModel<S> {
    /// Where a drop on `target` would put the dragged rows.
    pub fn drop_destination(
        &self,
        target: &ModelIndex,
        position: DropPosition,
    ) -> Option<MoveDestination> {
        let root = self.root();
        self.with_tree(|tree| resolve_drop(tree.nodes(), root, target.node(), position))
    }

    /// Move the item at `source` to where it was dropped.
    ///
    /// Returns `false` if drops are disabled, `source` is the root, or the
    /// move itself is rejected.
    pub fn drop_rows(
        &self,
        source: &ModelIndex,
        target: &ModelIndex,
        position: DropPosition,
    ) -> bool {
        if !self.drop_enabled() {
            tracing::debug!(target: targets::MODEL, "drops are disabled");
            return false;
        }
        let Some(item) = source.node() else {
            return false;
        };
        let Some(destination) = self.drop_destination(target, position) else {
            return false;
        };
        let origin = self.with_tree(|tree| {
            let nodes = tree.nodes();
            Some((nodes.parent(item).ok()??, nodes.sibling_index(item).ok()?))
        });
        let Some((src_parent, src_row)) = origin else {
            return false;
        };

        tracing::debug!(target: targets::MODEL, ?item, ?position, ?destination, "drop");
        self.move_row(src_parent, src_row as isize, destination.parent, destination.row as isize)
    }

    /// Move several dropped items, group by group. See [`move_items`](TreeModel::move_items).
    pub fn drop_items(
        &self,
        items: &[NodeId],
        target: &ModelIndex,
        position: DropPosition,
    ) -> bool {
        if !self.drop_enabled() {
            return false;
        }
        match self.drop_destination(target, position) {
            Some(destination) => {
                self.move_items(items, destination.parent, destination.row as isize)
            }
            None => false,
        }
    }
}
