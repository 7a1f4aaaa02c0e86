//! Subfield Extractor
//!
//! Flattens a field's subfield container into one display line. The scan is
//! order preserving and lossy:
//!
//! - subfield-code markers and other inline elements are dropped,
//! - everything from the local-data delimiter onwards is dropped,
//! - placeholder text for restricted content is dropped.

use tracing::trace;

use crate::dom::{self, NodeRef};
use crate::options::Options;
use crate::selector::is_local_delimiter;

/// Space-joined text accumulator for one field.
#[derive(Debug, Default)]
struct Line {
    text: String,
}

impl Line {
    fn push(&mut self, token: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(token);
    }
}

/// Display text of a subfield container under the default options.
#[must_use]
pub fn extract_text(subfields: Option<&NodeRef>) -> String {
    extract_text_with(subfields, &Options::default())
}

/// Display text of a subfield container under `options`.
///
/// Only direct children are read. Absent input yields an empty string.
#[must_use]
pub fn extract_text_with(subfields: Option<&NodeRef>, options: &Options) -> String {
    let Some(container) = subfields else {
        return String::new();
    };

    let mut line = Line::default();

    for child in container.children() {
        if child.is_element() {
            if is_local_delimiter(&child, &options.local_delimiter) {
                trace!(kept = %line.text, "local data delimiter reached");
                break;
            }
            continue;
        }

        if !child.is_text() {
            continue;
        }

        let text = dom::text_of(&child);
        let token = text.trim();
        if token.is_empty() || token == options.placeholder {
            continue;
        }
        line.push(token);
    }

    line.text
}
