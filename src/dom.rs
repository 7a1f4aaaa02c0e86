//! DOM Locator
//!
//! Tag- and attribute-based lookups over a `dom_query` tree. Anchors on the
//! librarian view are found by `id`/`class` rather than by tree position, so
//! small changes to the surrounding markup do not break extraction.
//!
//! Every lookup takes an optional node and returns an optional node, so
//! lookups chain without checking each intermediate result.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Node Information ===

/// Whether `node` is an element with tag name `tag_name`.
#[must_use]
pub fn is_element_named(node: &NodeRef, tag_name: &str) -> bool {
    node.is_element() && node.node_name().is_some_and(|name| &*name == tag_name)
}

/// Whether `node` carries the attribute pair `(attr_name, attr_value)`.
///
/// Both sides compare as exact, case-sensitive strings: `class="tag"` does
/// not match a node with `class="tag other"`.
#[must_use]
pub fn has_attr_value(node: &NodeRef, attr_name: &str, attr_value: &str) -> bool {
    node.attrs()
        .iter()
        .any(|attr| &*attr.name.local == attr_name && &*attr.value == attr_value)
}

/// Text content of a node and its descendants.
///
/// For a text node this is the node's own text.
#[inline]
#[must_use]
pub fn text_of(node: &NodeRef) -> StrTendril {
    node.text()
}

// === Locator ===

/// First direct element child of `node` whose tag is `tag_name`.
#[must_use]
pub fn first_child_of_type<'a>(node: Option<&NodeRef<'a>>, tag_name: &str) -> Option<NodeRef<'a>> {
    node?
        .children()
        .into_iter()
        .find(|child| is_element_named(child, tag_name))
}

/// First direct child of `node` carrying the attribute pair `(attr_name, attr_value)`.
#[must_use]
pub fn first_child_with_attr<'a>(
    node: Option<&NodeRef<'a>>,
    attr_name: &str,
    attr_value: &str,
) -> Option<NodeRef<'a>> {
    node?
        .children()
        .into_iter()
        .find(|child| has_attr_value(child, attr_name, attr_value))
}

/// First node in the subtree rooted at `node` carrying `(attr_name, attr_value)`.
///
/// Pre-order depth-first: `node` itself is tested before its children, and a
/// child's whole subtree is searched before its next sibling.
#[must_use]
pub fn first_descendant_with_attr<'a>(
    node: Option<&NodeRef<'a>>,
    attr_name: &str,
    attr_value: &str,
) -> Option<NodeRef<'a>> {
    let root = node?;

    // Explicit stack keeps deeply nested wrappers from growing the call stack.
    let mut stack = vec![root.clone()];
    while let Some(current) = stack.pop() {
        if has_attr_value(&current, attr_name, attr_value) {
            return Some(current);
        }
        stack.extend(current.children().into_iter().rev());
    }
    None
}
