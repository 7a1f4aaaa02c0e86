//! # catalogue-card-scraper
//!
//! Builds a catalogue card from a library catalog's MARC "librarian view"
//! page.
//!
//! The librarian view renders every MARC field of a record as a row with a
//! tag indicator and a run of subfields. This crate finds those rows, keeps
//! the descriptive fields a card needs, and flattens each one into a line of
//! text.
//!
//! ## Quick Start
//!
//! ```rust
//! use catalogue_card_scraper::extract_fields_from_html;
//!
//! let html = r#"<html><body><div id="main-container"><div id="marc_view">
//!   <div class="field">
//!     <div class="tag_ind"><span class="tag">245</span></div>
//!     <div class="subfields"><span class="sub_code">a|</span> Walden.</div>
//!   </div>
//! </div></div></body></html>"#;
//!
//! let lines = extract_fields_from_html(html)?;
//! assert_eq!(lines, vec!["Walden."]);
//! # Ok::<(), catalogue_card_scraper::Error>(())
//! ```
//!
//! ## Which fields are kept
//!
//! - `090`, `100`, `240`, `245`, `260`, `264`, `300`, `590`, `591` always;
//! - `500` and any `7XX` only when a subfield is coded `5|` (local data).
//!
//! Text from the `5|` subfield onwards is never shown, nor is the
//! `UNAUTHORIZED` placeholder the catalog renders for restricted content.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Tag- and attribute-based lookups over the parsed page.
pub mod dom;

/// Field selection rules.
pub mod selector;

/// Subfield text reconstruction.
pub mod extractor;

/// Character encoding detection and decoding.
pub mod encoding;

/// Fetching librarian view pages from the catalog.
#[cfg(feature = "fetch")]
pub mod fetch;

// Public API - re-exports
pub use error::{Anchor, Error, Result};
pub use options::Options;
pub use result::{CatalogRecord, MarcField};
pub use selector::TagRules;

use dom::Document;

/// Extracts the card lines from a parsed librarian view page.
///
/// Returns one line per wanted field, in document order. The document is
/// only read, so repeated calls return the same lines.
///
/// # Errors
///
/// Returns [`Error::Traversal`] naming the first structural anchor
/// (`<html>`, `<body>`, `main-container`, `marc_view`) that is missing.
pub fn extract_fields(doc: &Document) -> Result<Vec<String>> {
    extract::extract_fields(doc, &Options::default())
}

/// Extracts the card lines with custom options.
///
/// # Errors
///
/// Returns [`Error::Traversal`] when a structural anchor is missing.
pub fn extract_fields_with_options(doc: &Document, options: &Options) -> Result<Vec<String>> {
    extract::extract_fields(doc, options)
}

/// Extracts the wanted fields together with their tags.
///
/// # Errors
///
/// Returns [`Error::Traversal`] when a structural anchor is missing.
pub fn extract_record(doc: &Document, options: &Options) -> Result<Vec<MarcField>> {
    extract::extract_record(doc, options)
}

/// Parses `html` and extracts the card lines.
///
/// # Errors
///
/// Returns [`Error::Traversal`] when a structural anchor is missing.
pub fn extract_fields_from_html(html: &str) -> Result<Vec<String>> {
    extract_fields(&dom::parse(html))
}

/// Decodes raw page bytes and extracts the card lines.
///
/// The charset is read from the page's `<meta>` declaration, falling back to
/// UTF-8.
///
/// # Example
///
/// ```rust
/// use catalogue_card_scraper::extract_fields_from_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>\
///   <div id=\"main-container\"><div id=\"marc_view\"><div class=\"field\">\
///   <div class=\"tag_ind\"><span class=\"tag\">100</span></div>\
///   <div class=\"subfields\">Bront\xEB, Emily</div>\
///   </div></div></div></body></html>";
///
/// assert_eq!(extract_fields_from_bytes(html)?, vec!["Brontë, Emily"]);
/// # Ok::<(), catalogue_card_scraper::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::Traversal`] when a structural anchor is missing.
pub fn extract_fields_from_bytes(html: &[u8]) -> Result<Vec<String>> {
    extract_fields_from_html(&encoding::decode_page(html, None))
}
