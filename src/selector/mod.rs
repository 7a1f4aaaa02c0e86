//! Field Selector
//!
//! Decides whether a field row of the MARC view belongs on the card. Each row
//! is judged on its own; nothing carries over between rows.

mod rules;

pub use rules::TagRules;

use tracing::trace;

use crate::dom::{self, NodeRef};
use crate::options::Options;
use crate::patterns::{CLASS_ATTR, SUBFIELDS_CLASS, SUB_CODE_CLASS, TAG_CLASS, TAG_INDICATOR_CLASS};

/// Trimmed tag number of a field row.
///
/// Returns `None` when the row has no tag indicator or the indicator has no
/// tag element, which is the case for whitespace between rows and for any
/// decorative markup in the view.
#[must_use]
pub fn tag_number(field: &NodeRef) -> Option<String> {
    let indicator = dom::first_child_with_attr(Some(field), CLASS_ATTR, TAG_INDICATOR_CLASS);
    let tag = dom::first_child_with_attr(indicator.as_ref(), CLASS_ATTR, TAG_CLASS)?;
    Some(dom::text_of(&tag).trim().to_string())
}

/// Subfield container of a field row.
#[must_use]
pub fn subfields_of<'a>(field: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    dom::first_child_with_attr(Some(field), CLASS_ATTR, SUBFIELDS_CLASS)
}

/// Whether `node` is a subfield-code marker reading exactly `delimiter`.
#[must_use]
pub fn is_local_delimiter(node: &NodeRef, delimiter: &str) -> bool {
    node.is_element()
        && dom::has_attr_value(node, CLASS_ATTR, SUB_CODE_CLASS)
        && &*dom::text_of(node) == delimiter
}

/// Whether any direct child of `subfields` is the local-data delimiter.
///
/// An absent container holds no delimiter.
#[must_use]
pub fn contains_local_delimiter(subfields: Option<&NodeRef>, delimiter: &str) -> bool {
    subfields.is_some_and(|container| {
        container
            .children()
            .into_iter()
            .any(|child| is_local_delimiter(&child, delimiter))
    })
}

/// Whether a field row belongs on the card under the default rules.
#[must_use]
pub fn is_wanted(field: &NodeRef) -> bool {
    is_wanted_with(field, &Options::default())
}

/// Whether a field row belongs on the card under `options`.
#[must_use]
pub fn is_wanted_with(field: &NodeRef, options: &Options) -> bool {
    select_with(field, options).is_some()
}

/// Tag number of a field row if the row belongs on the card.
#[must_use]
pub fn select_with(field: &NodeRef, options: &Options) -> Option<String> {
    let Some(tag) = tag_number(field) else {
        trace!("skipping row without a tag indicator");
        return None;
    };

    let wanted = options.rules.evaluate(&tag, || {
        contains_local_delimiter(subfields_of(field).as_ref(), &options.local_delimiter)
    });
    trace!(tag = %tag, wanted, "classified field");
    wanted.then_some(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{parse, Document};

    fn first_field(doc: &Document) -> NodeRef<'_> {
        dom::first_descendant_with_attr(Some(&doc.root()), "class", "field").unwrap()
    }

    fn field_html(tag: &str, subfields: &str) -> String {
        format!(
            r#"<html><body><div class="field"><div class="tag_ind"><span class="tag"> {tag} </span><span class="ind">1 0</span></div><div class="subfields">{subfields}</div></div></body></html>"#
        )
    }

    #[test]
    fn test_tag_number_is_trimmed() {
        let doc = parse(&field_html("245", "x"));
        assert_eq!(tag_number(&first_field(&doc)).as_deref(), Some("245"));
    }

    #[test]
    fn test_tag_number_missing_indicator() {
        let doc = parse(r#"<html><body><div class="field"><span class="tag">245</span></div></body></html>"#);
        assert_eq!(tag_number(&first_field(&doc)), None);
    }

    #[test]
    fn test_tag_number_missing_tag_element() {
        let doc = parse(r#"<html><body><div class="field"><div class="tag_ind">245</div></div></body></html>"#);
        assert_eq!(tag_number(&first_field(&doc)), None);
        assert!(!is_wanted(&first_field(&doc)));
    }

    #[test]
    fn test_static_tag_wanted_without_subfields() {
        let doc = parse(
            r#"<html><body><div class="field"><div class="tag_ind"><span class="tag">300</span></div></div></body></html>"#,
        );
        assert!(is_wanted(&first_field(&doc)));
    }

    #[test]
    fn test_general_note_with_delimiter() {
        let doc = parse(&field_html(
            "500",
            r#"<span class="sub_code">a|</span> Signed by author. <span class="sub_code">5|</span> IU"#,
        ));
        assert!(is_wanted(&first_field(&doc)));
    }

    #[test]
    fn test_general_note_without_delimiter() {
        let doc = parse(&field_html("500", r#"<span class="sub_code">a|</span> Includes index."#));
        assert!(!is_wanted(&first_field(&doc)));
    }

    #[test]
    fn test_added_entry_without_subfields_container() {
        let doc = parse(
            r#"<html><body><div class="field"><div class="tag_ind"><span class="tag">700</span></div></div></body></html>"#,
        );
        assert!(!is_wanted(&first_field(&doc)));
    }

    #[test]
    fn test_delimiter_text_must_match_exactly() {
        let doc = parse(&field_html("710", r#"<span class="sub_code">5| </span> IU"#));
        assert!(!is_wanted(&first_field(&doc)));

        let doc = parse(&field_html("710", r#"<span class="sub_code">5|</span> IU"#));
        assert!(is_wanted(&first_field(&doc)));
    }

    #[test]
    fn test_delimiter_must_be_sub_code_marker() {
        let doc = parse(&field_html("700", r#"<span class="code">5|</span> IU"#));
        assert!(!is_wanted(&first_field(&doc)));
    }

    #[test]
    fn test_nested_delimiter_is_not_a_direct_child() {
        let doc = parse(&field_html("700", r#"<em><span class="sub_code">5|</span></em> IU"#));
        assert!(!is_wanted(&first_field(&doc)));
    }

    #[test]
    fn test_subject_heading_never_wanted() {
        let doc = parse(&field_html("650", r#"<span class="sub_code">5|</span> IU"#));
        assert!(!is_wanted(&first_field(&doc)));
    }

    #[test]
    fn test_select_returns_tag() {
        let doc = parse(&field_html("264", "Boston"));
        assert_eq!(select_with(&first_field(&doc), &Options::default()).as_deref(), Some("264"));

        let doc = parse(&field_html("650", "Cats"));
        assert_eq!(select_with(&first_field(&doc), &Options::default()), None);
    }

    #[test]
    fn test_custom_options() {
        let options = Options {
            rules: TagRules::new(["650"]),
            ..Options::default()
        };
        let doc = parse(&field_html("650", "Cats"));
        assert!(is_wanted_with(&first_field(&doc), &options));
        assert!(!is_wanted(&first_field(&doc)));
    }
}
