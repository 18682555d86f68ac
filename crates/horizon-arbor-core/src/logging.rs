//! Logging and debugging facilities for Horizon Arbor.
//!
//! This module provides:
//! - Target names for filtering the `tracing` output of each subsystem
//! - A generic pretty-printer for anything shaped like a hierarchy
//!
//! # Tracing Integration
//!
//! Horizon Arbor uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_arbor::model=debug")
//!         .init();
//! }
//! ```
//!
//! # Debug Visualization
//!
//! Implement [`DebugHierarchy`] for a tree type and hand it to [`TreeDebug`]:
//!
//! ```ignore
//! use horizon_arbor_core::logging::TreeDebug;
//!
//! println!("{}", TreeDebug::new().format_all(&tree));
//! ```

use std::fmt::{Debug, Write as FmtWrite};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_arbor_core::signal";
    /// Generic node tree target.
    pub const TREE: &str = "horizon_arbor::tree";
    /// Document-synchronized tree target.
    pub const DOCUMENT: &str = "horizon_arbor::document";
    /// Item model adapter target.
    pub const MODEL: &str = "horizon_arbor::model";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact indented representation.
    Compact,
}

impl TreeStyle {
    /// Returns `(pipe, tee, corner)` glyphs for this style.
    fn glyphs(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Ascii => ("|", "+--", "`--"),
            Self::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            Self::Compact => ("", "-", "-"),
        }
    }
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show node IDs.
    pub show_ids: bool,
    /// Whether to show the per-node detail string, if the hierarchy has one.
    pub show_details: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: false,
            show_details: true,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_details: false,
            ..Default::default()
        }
    }
}

/// Read-only view of a hierarchy, as needed by [`TreeDebug`].
pub trait DebugHierarchy {
    /// Node handle type.
    type Id: Copy + Debug;

    /// Top-level nodes, in order.
    fn debug_roots(&self) -> Vec<Self::Id>;

    /// Ordered children of a node.
    fn debug_children(&self, id: Self::Id) -> Vec<Self::Id>;

    /// Short label of a node.
    fn debug_label(&self, id: Self::Id) -> String;

    /// Optional extra text printed after the label.
    fn debug_detail(&self, _id: Self::Id) -> Option<String> {
        None
    }
}

/// Debug utility for visualizing hierarchies.
#[derive(Debug, Clone, Default)]
pub struct TreeDebug {
    options: TreeFormatOptions,
}

impl TreeDebug {
    /// Create a new debug visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debug visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format every root of the hierarchy and its descendants.
    pub fn format_all<H: DebugHierarchy + ?Sized>(&self, hierarchy: &H) -> String {
        let roots = hierarchy.debug_roots();
        let mut output = String::new();
        if roots.is_empty() {
            output.push_str("(empty)\n");
        }
        for root in roots {
            self.format_subtree_into(hierarchy, root, &mut Vec::new(), &mut output);
        }
        output
    }

    /// Format a subtree starting from a specific node.
    pub fn format_subtree<H: DebugHierarchy + ?Sized>(&self, hierarchy: &H, root: H::Id) -> String {
        let mut output = String::new();
        self.format_subtree_into(hierarchy, root, &mut Vec::new(), &mut output);
        output
    }

    /// `lasts` holds, for each ancestor level below the root, whether that
    /// ancestor was the last of its siblings.
    fn format_subtree_into<H: DebugHierarchy + ?Sized>(
        &self,
        hierarchy: &H,
        id: H::Id,
        lasts: &mut Vec<bool>,
        output: &mut String,
    ) {
        output.push_str(&self.build_prefix(lasts));
        output.push_str(&hierarchy.debug_label(id));

        if self.options.show_ids {
            write!(output, " [{:?}]", id).expect("write to String");
        }
        if self.options.show_details
            && let Some(detail) = hierarchy.debug_detail(id)
        {
            write!(output, " = {}", detail).expect("write to String");
        }
        output.push('\n');

        if self.options.max_depth.is_some_and(|max| lasts.len() >= max) {
            return;
        }

        let children = hierarchy.debug_children(id);
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            lasts.push(i + 1 == count);
            self.format_subtree_into(hierarchy, child, lasts, output);
            lasts.pop();
        }
    }

    /// Build the prefix string for a node at `lasts.len()` levels below the root.
    fn build_prefix(&self, lasts: &[bool]) -> String {
        let Some((&is_last, ancestors)) = lasts.split_last() else {
            return String::new();
        };
        let (pipe, tee, corner) = self.options.style.glyphs();
        let mut prefix = String::new();

        for &ancestor_last in ancestors {
            if ancestor_last || self.options.style == TreeStyle::Compact {
                prefix.push_str(&" ".repeat(pipe.chars().count()));
            } else {
                prefix.push_str(pipe);
            }
            prefix.push_str(&" ".repeat(self.options.indent_size + 1));
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix.push(' ');
        prefix
    }
}
