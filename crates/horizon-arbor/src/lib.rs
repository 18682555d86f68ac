//! Horizon Arbor - hierarchical data models.
//!
//! Three layers, each usable on its own:
//!
//! - [`tree`]: [`NodeTree`](tree::NodeTree), an arena of ordered, named
//!   nodes with cycle-checked restructuring, traversal and path lookup.
//! - [`document`]: [`DocumentTree`](document::DocumentTree), a node tree
//!   kept in lockstep with a nested map/list/scalar [`Value`](document::Value).
//! - [`model`]: [`TreeModel`](model::TreeModel), a row/column model with
//!   begin/end change notifications and drag-and-drop translation.
//!
//! # Example
//!
//! ```
//! use horizon_arbor::prelude::*;
//! use serde_json::json;
//!
//! let model = TreeModel::from_value(Value::from(json!(["A", "B", "C"])));
//! let root = model.root();
//!
//! // move "A" to the end
//! assert!(model.move_row(root, 0, root, 3));
//! assert_eq!(model.tree_value(), Value::from(json!(["B", "C", "A"])));
//! ```

pub use horizon_arbor_core::*;

pub mod document;
mod error;
pub mod model;
pub mod prelude;
pub mod tree;

pub use error::{TreeError, TreeResult};
