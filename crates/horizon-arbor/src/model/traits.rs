//! Core traits for index-addressed item models.
//!
//! Views talk to models only through [`ItemModel`] and subscribe to
//! [`ModelSignals`] to learn about changes.

use std::sync::Arc;

use horizon_arbor_core::{ConnectionId, Signal};

use super::change::ModelChange;
use super::index::ModelIndex;
use crate::document::Value;

/// Flags indicating what operations are allowed on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemFlags {
    /// Item can be selected.
    pub selectable: bool,
    /// Item can be edited.
    pub editable: bool,
    /// Item can be dragged.
    pub drag_enabled: bool,
    /// Item can receive drops.
    pub drop_enabled: bool,
    /// Item is enabled (can interact).
    pub enabled: bool,
    /// Item never has children (lets views skip expansion affordances).
    pub never_has_children: bool,
}

impl ItemFlags {
    /// Selectable and enabled.
    pub fn new() -> Self {
        Self {
            selectable: true,
            enabled: true,
            ..Default::default()
        }
    }

    /// No interaction at all.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Selectable, enabled and editable.
    pub fn editable() -> Self {
        Self {
            editable: true,
            ..Self::new()
        }
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_drag(mut self, enabled: bool) -> Self {
        self.drag_enabled = enabled;
        self
    }

    pub fn with_drop(mut self, enabled: bool) -> Self {
        self.drop_enabled = enabled;
        self
    }

    pub fn with_never_has_children(mut self, leaf: bool) -> Self {
        self.never_has_children = leaf;
        self
    }
}

/// Header orientation for [`ItemModel::header_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Column headers.
    Horizontal,
    /// Row headers.
    Vertical,
}

/// Read/write access to a hierarchical, index-addressed model.
///
/// # Implementation Requirements
///
/// At minimum, implement:
/// - [`row_count`](ItemModel::row_count)
/// - [`column_count`](ItemModel::column_count)
/// - [`data`](ItemModel::data)
/// - [`index`](ItemModel::index)
/// - [`parent`](ItemModel::parent)
/// - [`signals`](ItemModel::signals)
///
/// Editable models also override [`set_data`](ItemModel::set_data) and
/// [`flags`](ItemModel::flags).
pub trait ItemModel: Send + Sync {
    /// Number of rows under `parent` (the invalid index means the root).
    fn row_count(&self, parent: &ModelIndex) -> usize;

    fn column_count(&self, parent: &ModelIndex) -> usize;

    /// The value shown in a cell, or `None` if the cell is empty or invalid.
    fn data(&self, index: &ModelIndex) -> Option<Value>;

    /// Index of the cell at `(row, column)` under `parent`.
    ///
    /// Returns `ModelIndex::invalid()` if the position is out of bounds.
    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex;

    /// Parent of `index`; invalid for top-level items and invalid indices.
    fn parent(&self, index: &ModelIndex) -> ModelIndex;

    fn signals(&self) -> &ModelSignals;

    // -------------------------------------------------------------------------
    // Optional methods with default implementations
    // -------------------------------------------------------------------------

    /// Write a cell. The default model is read-only.
    fn set_data(&self, _index: &ModelIndex, _value: Value) -> bool {
        false
    }

    fn flags(&self, _index: &ModelIndex) -> ItemFlags {
        ItemFlags::new()
    }

    fn has_children(&self, parent: &ModelIndex) -> bool {
        self.row_count(parent) > 0
    }

    /// Label of a row or column header.
    fn header_data(&self, _section: usize, _orientation: Orientation) -> Option<String> {
        None
    }

    fn set_header_data(&self, _section: usize, _orientation: Orientation, _label: &str) -> bool {
        false
    }

    /// Index at `(row, column)` under the same parent as `index`.
    fn sibling(&self, index: &ModelIndex, row: usize, column: usize) -> ModelIndex {
        if !index.is_valid() {
            return ModelIndex::invalid();
        }
        self.index(row, column, &index.parent())
    }
}

/// Receives change notifications in begin/end pairs.
///
/// `on_begin` runs before the model changes and `on_end` right after, with
/// the same [`ModelChange`]. Observers may read the model from either
/// callback but must not mutate it.
pub trait ModelObserver: Send + Sync {
    fn on_begin(&self, change: &ModelChange);
    fn on_end(&self, change: &ModelChange);
}

/// Signals emitted by item models.
///
/// Every change is announced on `about_to_change`, applied, then announced
/// again on `changed`.
pub struct ModelSignals {
    /// Emitted just before a change is applied.
    pub about_to_change: Signal<ModelChange>,
    /// Emitted after a change has been applied.
    pub changed: Signal<ModelChange>,
}

impl Default for ModelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelSignals {
    pub fn new() -> Self {
        Self {
            about_to_change: Signal::new(),
            changed: Signal::new(),
        }
    }

    /// Emit `change` around `apply`, returning what `apply` returns.
    pub fn emit_change<R>(&self, change: ModelChange, apply: impl FnOnce() -> R) -> R {
        self.about_to_change.emit(change);
        let result = apply();
        self.changed.emit(change);
        result
    }

    /// Route both signals to `observer`.
    ///
    /// Returns the connection ids for `about_to_change` and `changed`.
    pub fn connect_observer<O>(&self, observer: Arc<O>) -> (ConnectionId, ConnectionId)
    where
        O: ModelObserver + 'static,
    {
        let begin = Arc::clone(&observer);
        let begin_id = self.about_to_change.connect(move |change| begin.on_begin(change));
        let end_id = self.changed.connect(move |change| observer.on_end(change));
        (begin_id, end_id)
    }

    /// Disconnect an observer connected with [`connect_observer`](Self::connect_observer).
    pub fn disconnect_observer(&self, (begin_id, end_id): (ConnectionId, ConnectionId)) {
        self.about_to_change.disconnect(begin_id);
        self.changed.disconnect(end_id);
    }
}
