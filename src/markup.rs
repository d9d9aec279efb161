//! Declarative Markup Descriptions
//!
//! A [`Markup`] value describes an element tree as plain data, typically
//! deserialized from JSON:
//!
//! ```json
//! { "tag": "ul", "attrs": { "class": "menu" }, "children": ["a", { "tag": "li", "children": ["b"] }] }
//! ```
//!
//! Rendering checks the whole description against [`Options`] first, then
//! builds it depth-first through [`create_container`], so an invalid
//! description never leaves a half-built tree behind.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::builder::create_container;
use crate::content::{Attributes, Content};
use crate::dom::{outer_html, parse, HtmlTree};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::tree::DocumentTree;

#[allow(clippy::expect_used)]
static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.:-]*$").expect("NAME regex"));

/// Description of one element and its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markup {
    /// Tag name of the element.
    pub tag: String,

    /// Attributes applied to the element.
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attrs: Attributes,

    /// Children in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MarkupChild>,
}

/// A child of a [`Markup`] element: a string or a nested element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkupChild {
    /// Text content.
    Text(String),
    /// A nested element.
    Element(Markup),
}

impl Markup {
    /// An element with no attributes or children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Add or overwrite an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(MarkupChild::Text(text.into()));
        self
    }

    /// Append an element child.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(MarkupChild::Element(child));
        self
    }

    /// Parse a description from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Nesting depth, counting this element as 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .filter_map(|child| match child {
                MarkupChild::Element(m) => Some(m.depth()),
                MarkupChild::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
    }
}

/// Check `markup` against `options` without building anything.
pub fn validate(markup: &Markup, options: &Options) -> Result<()> {
    validate_at(markup, options, 1)
}

fn validate_at(markup: &Markup, options: &Options, depth: usize) -> Result<()> {
    if depth > options.max_depth {
        return Err(Error::TooDeep {
            max: options.max_depth,
        });
    }
    check_name("tag", &markup.tag, options)?;
    for name in markup.attrs.keys() {
        check_name("attribute", name, options)?;
    }
    for child in &markup.children {
        if let MarkupChild::Element(m) = child {
            validate_at(m, options, depth + 1)?;
        }
    }
    Ok(())
}

/// Names that would break out of a tag when serialized are always rejected;
/// `strict_names` additionally enforces the name grammar.
fn check_name(kind: &'static str, name: &str, options: &Options) -> Result<()> {
    let breaks_markup = name.is_empty() || name.chars().any(is_markup_delimiter);
    if !breaks_markup && (!options.strict_names || NAME.is_match(name)) {
        Ok(())
    } else {
        Err(Error::InvalidName {
            kind,
            name: name.to_string(),
        })
    }
}

fn is_markup_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '<' | '>' | '=' | '"' | '\'' | '/')
}

/// Build `markup` in `tree`, optionally appending it to `parent`.
///
/// Returns the root element of the built subtree.
pub fn render<T: DocumentTree>(
    tree: &T,
    markup: &Markup,
    parent: Option<&T::Node>,
    options: &Options,
) -> Result<T::Node> {
    validate(markup, options)?;
    debug!("rendering <{}> ({} levels deep)", markup.tag, markup.depth());
    Ok(build(tree, markup, parent))
}

fn build<T: DocumentTree>(tree: &T, markup: &Markup, parent: Option<&T::Node>) -> T::Node {
    let children: Vec<Content<T::Node>> = markup
        .children
        .iter()
        .map(|child| match child {
            MarkupChild::Text(text) => Content::Text(text.clone()),
            MarkupChild::Element(m) => Content::Node(build(tree, m, None)),
        })
        .collect();
    let attrs = (!markup.attrs.is_empty()).then_some(&markup.attrs);
    create_container(tree, &markup.tag, attrs, children, parent)
}

/// Build `markup` in a fresh HTML document and serialize it.
pub fn render_html(markup: &Markup, options: &Options) -> Result<String> {
    let doc = parse("");
    let tree = HtmlTree::new(&doc);
    let node = render(&tree, markup, None, options)?;
    Ok(outer_html(&node).to_string())
}
