//! Attribute maps and string-or-node content.

use std::collections::BTreeMap;

/// Attribute names mapped to attribute values.
///
/// Attribute order carries no meaning in HTML; a `BTreeMap` keeps
/// application order deterministic anyway.
pub type Attributes = BTreeMap<String, String>;

/// Content appended to an element: literal text or an existing node.
///
/// Text is turned into a fresh text node at the moment it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content<N> {
    /// Literal text, wrapped in a new text node on append.
    Text(String),
    /// An existing node, appended as-is (and detached from its old parent).
    Node(N),
}

impl<N> Content<N> {
    /// Returns the text if this is a `Text` variant.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Node(_) => None,
        }
    }
}

impl<N> From<&str> for Content<N> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl<N> From<String> for Content<N> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Build an [`Attributes`] map from name/value pairs.
///
/// Later duplicates overwrite earlier ones.
#[must_use]
pub fn attributes<I, K, V>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
