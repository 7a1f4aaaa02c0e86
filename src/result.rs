//! Result types for extraction output.

use serde::{Deserialize, Serialize};

/// One field selected for the card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarcField {
    /// Three-digit MARC tag, e.g. `"245"`.
    pub tag: String,

    /// Display text reconstructed from the field's subfields.
    ///
    /// May be empty when no subfield text qualified.
    pub text: String,
}

/// A catalogue card: the record's control number and its selected fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Catalog control number, when the page was fetched by number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_number: Option<String>,

    /// Selected fields in document order.
    pub fields: Vec<MarcField>,
}

impl CatalogRecord {
    /// Display lines, one per field.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.text.as_str())
    }
}
