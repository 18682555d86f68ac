//! Model/View layer over node trees.
//!
//! Views address items by [`ModelIndex`] (row, column, parent) and learn
//! about changes through [`ModelSignals`]. [`TreeModel`] adapts any
//! [`ItemTree`] to this interface and is the only place structural edits
//! requested by a view are validated and announced.
//!
//! # Core Types
//!
//! - `ModelIndex`: Identifies an item's position in a model
//! - `ItemModel`: The trait views program against
//! - `ModelChange`: What a begin/end notification pair describes
//! - `ItemTree`: The tree side of a `TreeModel`
//! - `DropPosition`: Where a drag-and-drop gesture landed
//!
//! # Example
//!
//! ```
//! use horizon_arbor::model::{ItemModel, ModelIndex, TreeModel};
//! use horizon_arbor::document::Value;
//! use serde_json::json;
//!
//! let model = TreeModel::from_value(Value::from(json!({"fruit": ["apple", "pear"]})));
//!
//! model.signals().changed.connect(|change| {
//!     println!("{:?} rows {}..={}", change.kind, change.first, change.last);
//! });
//!
//! let fruit = model.index(0, 0, &ModelIndex::invalid());
//! assert_eq!(model.row_count(&fruit), 2);
//! assert!(model.remove_rows(0, 1, model.node_for_index(&fruit)));
//! assert_eq!(model.row_count(&fruit), 1);
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐   begin/end    ┌─────────────┐
//! │  TreeModel  │───────────────>│    View     │
//! │ (ItemModel) │<───────────────│             │
//! └─────────────┘  index, edits  └─────────────┘
//!       │
//!       v
//! ┌─────────────┐
//! │  ItemTree   │  NodeTree<T> or DocumentTree
//! └─────────────┘
//! ```

mod change;
mod config;
mod drag_drop;
mod index;
mod item_tree;
mod traits;
mod tree_model;

pub use change::{ChangeKind, ModelChange, MoveDestination};
pub use config::ModelConfig;
pub use drag_drop::{DropPosition, resolve_drop};
pub use index::ModelIndex;
pub use item_tree::{EditKind, ItemTree, KEY_COLUMN, VALUE_COLUMN};
pub use traits::{ItemFlags, ItemModel, ModelObserver, ModelSignals, Orientation};
pub use tree_model::TreeModel;
