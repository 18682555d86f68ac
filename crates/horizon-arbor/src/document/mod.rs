//! Trees synchronized with nested documents.
//!
//! [`Value`] is the document data type; [`DocumentTree`] mirrors a document
//! as a node tree and keeps both sides consistent under every mutation.

mod document_tree;
mod options;
mod value;

pub use document_tree::{DocumentSlot, DocumentTree};
pub use options::DocumentOptions;
pub use value::{NodeKey, Value, ValueMap};
