//! Configuration options for markup rendering.
//!
//! The core builder functions take no options; `Options` only governs how
//! a [`Markup`](crate::Markup) description is checked before it is built.

/// Configuration options for markup rendering.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use dom_elements::Options;
///
/// let options = Options {
///     strict_names: true,
///     ..Options::default()
/// };
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Reject tag and attribute names outside `[A-Za-z_][A-Za-z0-9_.:-]*`.
    ///
    /// Empty names and names containing whitespace, quotes, `<`, `>`, `=` or
    /// `/` are rejected regardless of this setting.
    ///
    /// Default: `false`
    pub strict_names: bool,

    /// Maximum element nesting depth of a markup description.
    ///
    /// The root element is depth 1.
    ///
    /// Default: `64`
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict_names: false,
            max_depth: 64,
        }
    }
}
