//! Character encoding detection and decoding of catalog pages.
//!
//! The charset is taken from the HTTP `Content-Type` header when the page was
//! fetched, otherwise from a `<meta>` declaration near the top of the page.
//! UTF-8 is assumed when neither names a known encoding.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// `charset=` parameter of a `Content-Type` value.
#[allow(clippy::expect_used)]
static CHARSET_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// `<meta charset>` or `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>/]+)"#).expect("valid regex")
});

/// How many leading bytes are searched for a `<meta>` declaration.
const META_SNIFF_LEN: usize = 1024;

/// Encoding named by the `charset` parameter of a `Content-Type` value.
#[must_use]
pub fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    let label = CHARSET_PARAM_RE.captures(content_type)?.get(1)?;
    Encoding::for_label(label.as_str().as_bytes())
}

/// Encoding declared by a `<meta>` tag in the first kilobyte of `html`.
#[must_use]
pub fn charset_from_meta(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(META_SNIFF_LEN)]);
    let label = META_CHARSET_RE.captures(&head)?.get(1)?;
    Encoding::for_label(label.as_str().as_bytes())
}

/// Pick the encoding of a page body.
///
/// The transport header wins over the document's own declaration.
#[must_use]
pub fn detect_encoding(html: &[u8], content_type: Option<&str>) -> &'static Encoding {
    content_type
        .and_then(charset_from_content_type)
        .or_else(|| charset_from_meta(html))
        .unwrap_or(UTF_8)
}

/// Decode a page body to UTF-8.
///
/// Malformed sequences become U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use catalogue_card_scraper::encoding::decode_page;
///
/// let html = b"<html><body>Caf\xE9</body></html>";
/// let text = decode_page(html, Some("text/html; charset=ISO-8859-1"));
/// assert!(text.contains("Café"));
/// ```
#[must_use]
pub fn decode_page(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(html, content_type);
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
