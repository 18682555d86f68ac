//! Model configuration.

/// Behavior switches for a [`TreeModel`](super::TreeModel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// Items report [`ItemFlags::drag_enabled`](super::ItemFlags::drag_enabled).
    pub drag_enabled: bool,
    /// Containers accept drops and drop gestures are translated into moves.
    pub drop_enabled: bool,
    /// Column header labels; `None` uses the labels the tree provides.
    pub column_labels: Option<Vec<String>>,
    /// Row header labels.
    pub row_labels: Vec<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            drag_enabled: true,
            drop_enabled: true,
            column_labels: None,
            row_labels: Vec::new(),
        }
    }
}

impl ModelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drag_enabled(mut self, enabled: bool) -> Self {
        self.drag_enabled = enabled;
        self
    }

    pub fn with_drop_enabled(mut self, enabled: bool) -> Self {
        self.drop_enabled = enabled;
        self
    }

    pub fn with_column_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_row_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.row_labels = labels.into_iter().map(Into::into).collect();
        self
    }
}
