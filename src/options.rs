//! Configuration options for field extraction.
//!
//! The `Options` struct controls which fields end up on the card and which
//! subfield text is suppressed.

use crate::patterns::{LOCAL_DELIMITER, UNAUTHORIZED_PLACEHOLDER};
use crate::selector::TagRules;

/// Configuration options for field extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the catalog's standard card.
///
/// # Example
///
/// ```rust
/// use catalogue_card_scraper::{Options, TagRules};
///
/// // Use defaults
/// let options = Options::default();
///
/// // Show subject headings as well
/// let options = Options {
///     rules: TagRules::new(["245", "650"]),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Tag inclusion rules.
    ///
    /// Default: always `090, 100, 240, 245, 260, 264, 300, 590, 591`;
    /// `500` and `7XX` only with local data.
    pub rules: TagRules,

    /// Subfield text rendered in place of restricted content.
    ///
    /// Text children equal to this (after trimming) are dropped.
    ///
    /// Default: `"UNAUTHORIZED"`
    pub placeholder: String,

    /// Subfield code introducing local-institution-only data.
    ///
    /// Selects `500`/`7XX` fields and truncates every field's text.
    ///
    /// Default: `"5|"`
    pub local_delimiter: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rules: TagRules::default(),
            placeholder: UNAUTHORIZED_PLACEHOLDER.to_string(),
            local_delimiter: LOCAL_DELIMITER.to_string(),
        }
    }
}
