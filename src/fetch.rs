//! Librarian view retrieval.
//!
//! A thin blocking HTTP layer: build the page URL for a control number, fetch
//! it, reject non-success statuses, decode the body and hand it to the
//! extractor.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};
use url::Url;

use crate::dom;
use crate::encoding::decode_page;
use crate::extract;
use crate::options::Options;
use crate::result::CatalogRecord;

/// Catalog root used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://iucat.iu.edu/catalog/";

/// Path segment of the MARC view under a record.
const LIBRARIAN_VIEW: &str = "librarian_view";

/// Error type for fetching and extracting a record.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No control number was supplied.
    #[error("missing control number")]
    MissingControlNumber,

    /// The configured base URL cannot carry path segments.
    #[error("invalid catalog base URL: {0}")]
    InvalidBaseUrl(String),

    /// The request could not be completed.
    #[error("error fetching item: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("error fetching item: {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The page did not have the expected structure.
    #[error("error parsing item: {0}")]
    Extraction(#[from] crate::Error),
}

/// HTTP settings for the catalog client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Catalog root; record pages live at `<base>/<control number>/librarian_view`.
    ///
    /// Default: `https://iucat.iu.edu/catalog/`
    pub base_url: String,

    /// Whole-request timeout.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// `User-Agent` header sent with every request.
    ///
    /// Default: `catalogue-card-scraper/<version>`
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// URL of the librarian view for `control_number` under `base_url`.
///
/// The control number is appended as a single, percent-encoded path segment.
///
/// # Errors
///
/// Returns [`FetchError::MissingControlNumber`] for a blank control number and
/// [`FetchError::InvalidBaseUrl`] when `base_url` does not parse or cannot
/// have path segments.
pub fn librarian_view_url(base_url: &str, control_number: &str) -> Result<Url, FetchError> {
    let control_number = control_number.trim();
    if control_number.is_empty() {
        return Err(FetchError::MissingControlNumber);
    }

    let mut url = Url::parse(base_url).map_err(|e| FetchError::InvalidBaseUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| FetchError::InvalidBaseUrl(base_url.to_string()))?
        .pop_if_empty()
        .push(control_number)
        .push(LIBRARIAN_VIEW);
    Ok(url)
}

/// Blocking client for librarian view pages.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    config: FetchConfig,
}

impl CatalogClient {
    /// Create a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] when the HTTP client cannot be built.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    /// Settings this client was built with.
    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch the decoded librarian view page for `control_number`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] for non-success responses and
    /// [`FetchError::Request`] for transport failures.
    pub fn fetch_page(&self, control_number: &str) -> Result<String, FetchError> {
        let url = librarian_view_url(&self.config.base_url, control_number)?;
        debug!(url = %url, "fetching librarian view");

        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "catalog returned an error status");
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes()?;
        debug!(bytes = body.len(), "received page");

        Ok(decode_page(&body, content_type.as_deref()))
    }

    /// Fetch a record and extract its card.
    ///
    /// # Errors
    ///
    /// Returns any [`FetchError`]; a page without the expected structure
    /// yields [`FetchError::Extraction`].
    pub fn fetch_record(&self, control_number: &str, options: &Options) -> Result<CatalogRecord, FetchError> {
        let html = self.fetch_page(control_number)?;
        let doc = dom::parse(&html);
        let fields = extract::extract_record(&doc, options)?;
        Ok(CatalogRecord {
            control_number: Some(control_number.trim().to_string()),
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_librarian_view_url_default_base() {
        let url = librarian_view_url(DEFAULT_BASE_URL, "19858379").unwrap();
        assert_eq!(url.as_str(), "https://iucat.iu.edu/catalog/19858379/librarian_view");
    }

    #[test]
    fn test_librarian_view_url_without_trailing_slash() {
        let url = librarian_view_url("http://localhost:8080/catalog", " 42 ").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/catalog/42/librarian_view");
    }

    #[test]
    fn test_librarian_view_url_encodes_segment() {
        let url = librarian_view_url(DEFAULT_BASE_URL, "a/b c").unwrap();
        assert_eq!(url.as_str(), "https://iucat.iu.edu/catalog/a%2Fb%20c/librarian_view");
    }

    #[test]
    fn test_librarian_view_url_rejects_blank_control_number() {
        assert!(matches!(
            librarian_view_url(DEFAULT_BASE_URL, "  "),
            Err(FetchError::MissingControlNumber)
        ));
    }

    #[test]
    fn test_librarian_view_url_rejects_bad_base() {
        assert!(matches!(
            librarian_view_url("not a url", "1"),
            Err(FetchError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            librarian_view_url("mailto:someone@example.com", "1"),
            Err(FetchError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_default_config() {
        let config = FetchConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("catalogue-card-scraper/"));
    }

    #[test]
    fn test_extraction_error_message() {
        let err = FetchError::from(crate::Error::Traversal(crate::Anchor::MarcView));
        assert_eq!(
            err.to_string(),
            "error parsing item: unable to properly traverse page (failed to find marc_view)"
        );
    }
}
