//! Prelude module for Horizon Arbor.
//!
//! ```ignore
//! use horizon_arbor::prelude::*;
//! ```

// ============================================================================
// Signals
// ============================================================================

pub use crate::{ConnectionId, Signal};

// ============================================================================
// Trees
// ============================================================================

pub use crate::tree::{NodeId, NodeTree};
pub use crate::{TreeError, TreeResult};

// ============================================================================
// Documents
// ============================================================================

pub use crate::document::{DocumentOptions, DocumentTree, NodeKey, Value};

// ============================================================================
// Models
// ============================================================================

pub use crate::model::{
    ChangeKind, DropPosition, ItemFlags, ItemModel, ItemTree, ModelChange, ModelConfig, ModelIndex,
    ModelObserver, Orientation, TreeModel,
};
