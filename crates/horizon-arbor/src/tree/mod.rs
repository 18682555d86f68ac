//! Generic ordered trees.
//!
//! [`NodeTree`] stores nodes in an arena and links them by [`NodeId`].
//! It knows nothing about payload semantics; the document tree and the item
//! models build on top of it.

mod iter;
mod node_tree;

pub use iter::{Ancestors, BreadthFirst, DepthFirst, ReverseDepthFirst};
pub use node_tree::{NodeId, NodeTree};
