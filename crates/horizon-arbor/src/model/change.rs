//! Change notifications emitted by item models.

use super::traits::Orientation;
use crate::tree::NodeId;

/// What kind of change a [`ModelChange`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Rows `first..=last` are inserted under `parent`.
    Insert,
    /// Rows `first..=last` are removed from `parent`.
    Remove,
    /// Rows `first..=last` of `parent` move to `destination`.
    Move,
    /// Cells in rows `first..=last` of `parent` change value.
    DataChanged,
    /// Header sections `first..=last` change label.
    HeaderChanged(Orientation),
    /// Anything may change; views should re-read the whole model.
    Reset,
}

/// Target of a move: the new parent and the row before which rows land,
/// counted before the move takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveDestination {
    pub parent: NodeId,
    pub row: usize,
}

/// One change, delivered once before and once after it is applied.
///
/// `parent` is `None` for header changes and resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelChange {
    pub kind: ChangeKind,
    pub parent: Option<NodeId>,
    pub first: usize,
    pub last: usize,
    /// Only set for [`ChangeKind::Move`].
    pub destination: Option<MoveDestination>,
}

impl ModelChange {
    pub fn insert(parent: NodeId, first: usize, last: usize) -> Self {
        Self::rows(ChangeKind::Insert, parent, first, last)
    }

    pub fn remove(parent: NodeId, first: usize, last: usize) -> Self {
        Self::rows(ChangeKind::Remove, parent, first, last)
    }

    pub fn data_changed(parent: NodeId, first: usize, last: usize) -> Self {
        Self::rows(ChangeKind::DataChanged, parent, first, last)
    }

    pub fn moved(parent: NodeId, first: usize, last: usize, destination: MoveDestination) -> Self {
        Self {
            destination: Some(destination),
            ..Self::rows(ChangeKind::Move, parent, first, last)
        }
    }

    pub fn header_changed(orientation: Orientation, first: usize, last: usize) -> Self {
        Self {
            kind: ChangeKind::HeaderChanged(orientation),
            parent: None,
            first,
            last,
            destination: None,
        }
    }

    pub fn reset() -> Self {
        Self {
            kind: ChangeKind::Reset,
            parent: None,
            first: 0,
            last: 0,
            destination: None,
        }
    }

    fn rows(kind: ChangeKind, parent: NodeId, first: usize, last: usize) -> Self {
        Self {
            kind,
            parent: Some(parent),
            first,
            last,
            destination: None,
        }
    }

    /// Number of rows or sections covered by the change.
    pub fn len(&self) -> usize {
        match self.kind {
            ChangeKind::Reset => 0,
            _ => self.last + 1 - self.first,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
