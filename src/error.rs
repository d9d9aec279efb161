//! Error types for dom-elements.
//!
//! Building and reordering never fail; only markup rendering returns errors.

/// Error type for markup rendering.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The markup description was not valid JSON or did not match the schema.
    #[error("Invalid markup JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A tag or attribute name was rejected under strict name checking.
    #[error("Invalid {kind} name: {name:?}")]
    InvalidName {
        /// `"tag"` or `"attribute"`.
        kind: &'static str,
        /// The offending name.
        name: String,
    },

    /// The markup nests deeper than `Options::max_depth`.
    #[error("Markup nesting exceeds maximum depth of {max}")]
    TooDeep {
        /// The configured limit.
        max: usize,
    },
}

/// Result type alias for markup rendering.
pub type Result<T> = std::result::Result<T, Error>;
