//! Field extraction pipeline.
//!
//! Locates the MARC view on a librarian view page and turns every wanted
//! field row into a display line.

use tracing::debug;

use crate::dom::{self, Document, NodeRef};
use crate::error::{Anchor, Error, Result};
use crate::extractor::extract_text_with;
use crate::options::Options;
use crate::patterns::{BODY_TAG, HTML_TAG, ID_ATTR, MAIN_CONTAINER_ID, MARC_VIEW_ID};
use crate::result::MarcField;
use crate::selector::{select_with, subfields_of};

/// Find the element whose children are the field rows.
///
/// `<html>`, `<body>` and the main container are direct-child lookups; the
/// MARC view may sit at any depth inside the main container.
pub(crate) fn locate_marc_view(doc: &Document) -> Result<NodeRef<'_>> {
    let root = doc.root();

    let html = dom::first_child_of_type(Some(&root), HTML_TAG).ok_or(Error::Traversal(Anchor::Html))?;
    let body = dom::first_child_of_type(Some(&html), BODY_TAG).ok_or(Error::Traversal(Anchor::Body))?;
    let main_container = dom::first_child_with_attr(Some(&body), ID_ATTR, MAIN_CONTAINER_ID)
        .ok_or(Error::Traversal(Anchor::MainContainer))?;
    let marc_view = dom::first_descendant_with_attr(Some(&main_container), ID_ATTR, MARC_VIEW_ID)
        .ok_or(Error::Traversal(Anchor::MarcView))?;

    debug!("located {MARC_VIEW_ID}");
    Ok(marc_view)
}

/// Extract the wanted fields, with their tags, in document order.
pub(crate) fn extract_record(doc: &Document, options: &Options) -> Result<Vec<MarcField>> {
    let marc_view = locate_marc_view(doc)?;

    let mut fields = Vec::new();
    for row in marc_view.children() {
        let Some(tag) = select_with(&row, options) else {
            continue;
        };
        let text = extract_text_with(subfields_of(&row).as_ref(), options);
        debug!(tag = %tag, text = %text, "selected field");
        fields.push(MarcField { tag, text });
    }

    debug!(count = fields.len(), "extracted fields");
    Ok(fields)
}

/// Extract the display lines of the wanted fields in document order.
pub(crate) fn extract_fields(doc: &Document, options: &Options) -> Result<Vec<String>> {
    Ok(extract_record(doc, options)?
        .into_iter()
        .map(|field| field.text)
        .collect())
}
