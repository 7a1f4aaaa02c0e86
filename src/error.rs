//! Error types for catalogue-card-scraper.
//!
//! Extraction has a single failure mode: one of the structural anchors of the
//! librarian view page could not be located.

use std::fmt;

/// A structural anchor the extractor must find before it can read fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The top-level `<html>` element.
    Html,
    /// The `<body>` element under `<html>`.
    Body,
    /// The page's main content container (`id="main-container"`).
    MainContainer,
    /// The MARC view holding the field rows (`id="marc_view"`).
    MarcView,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => f.write_str("<html>"),
            Self::Body => f.write_str("<body>"),
            Self::MainContainer => f.write_str(crate::patterns::MAIN_CONTAINER_ID),
            Self::MarcView => f.write_str(crate::patterns::MARC_VIEW_ID),
        }
    }
}

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required anchor was missing from the page.
    #[error("unable to properly traverse page (failed to find {0})")]
    Traversal(Anchor),
}

impl Error {
    /// The anchor whose absence caused this error.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        match self {
            Self::Traversal(anchor) => *anchor,
        }
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
