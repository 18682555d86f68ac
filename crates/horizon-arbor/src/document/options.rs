//! Configuration for implicit key generation.

/// Controls how a [`DocumentTree`](super::DocumentTree) names map entries it
/// has to create on its own.
///
/// When a node enters a map and its stored key is missing or already taken,
/// the tree picks `base`, then `base_N` for `N = unique_suffix_start, +1, ...`
/// until the key is free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Base key for nodes that enter a map without a key of their own.
    pub default_key: String,
    /// First numeric suffix tried when a key collides.
    pub unique_suffix_start: usize,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            default_key: "key".to_owned(),
            unique_suffix_start: 2,
        }
    }
}

impl DocumentOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base key for unnamed map entries.
    pub fn with_default_key(mut self, key: impl Into<String>) -> Self {
        self.default_key = key.into();
        self
    }

    /// Set the first suffix tried on collision.
    pub fn with_unique_suffix_start(mut self, start: usize) -> Self {
        self.unique_suffix_start = start;
        self
    }

    /// Pick a key derived from `base` for which `taken` returns `false`.
    pub fn unique_key(&self, base: &str, taken: impl Fn(&str) -> bool) -> String {
        unique_key(base, self.unique_suffix_start, taken)
    }
}

pub(crate) fn unique_key(base: &str, suffix_start: usize, taken: impl Fn(&str) -> bool) -> String {
    if !taken(base) {
        return base.to_owned();
    }
    (suffix_start..)
        .map(|n| format!("{base}_{n}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| base.to_owned())
}
