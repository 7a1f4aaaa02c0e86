//! Tag inclusion rules.
//!
//! A field is wanted when its tag is in the always-wanted set, or when it is a
//! general note (`500`) or added entry (`7XX`) that carries local data. The
//! second branch is only evaluated when the first fails, and the local-data
//! check is passed in lazily so callers only scan subfields when they must.

use std::collections::BTreeSet;

use crate::patterns::{ALWAYS_WANTED_TAGS, GENERAL_NOTE_TAG};

/// The two-branch inclusion policy for MARC tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRules {
    always: BTreeSet<String>,
}

impl TagRules {
    /// Rules with a custom always-wanted set.
    ///
    /// The conditional `500`/`7XX` branch is fixed.
    pub fn new<I, S>(always: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            always: always.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `tag` is in the always-wanted set.
    #[must_use]
    pub fn is_always_wanted(&self, tag: &str) -> bool {
        self.always.contains(tag)
    }

    /// Whether `tag` is only wanted when its subfields carry local data.
    #[must_use]
    pub fn requires_local_data(tag: &str) -> bool {
        tag == GENERAL_NOTE_TAG || tag.as_bytes().first() == Some(&b'7')
    }

    /// Decide whether a field with `tag` is wanted.
    ///
    /// `has_local_data` is called at most once, and only for `500`/`7XX`.
    pub fn evaluate(&self, tag: &str, has_local_data: impl FnOnce() -> bool) -> bool {
        if self.is_always_wanted(tag) {
            return true;
        }
        Self::requires_local_data(tag) && has_local_data()
    }

    /// Always-wanted tags in ascending order.
    pub fn always_wanted(&self) -> impl Iterator<Item = &str> {
        self.always.iter().map(String::as_str)
    }
}

impl Default for TagRules {
    fn default() -> Self {
        Self::new(ALWAYS_WANTED_TAGS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_tags_ignore_local_data() {
        let rules = TagRules::default();
        for tag in ["090", "100", "240", "245", "260", "264", "300", "590", "591"] {
            assert!(rules.evaluate(tag, || false), "{tag} should be wanted");
        }
    }

    #[test]
    fn static_tags_never_scan_subfields() {
        let rules = TagRules::default();
        let wanted = rules.evaluate("245", || panic!("subfields scanned for 245"));
        assert!(wanted);
    }

    #[test]
    fn general_note_needs_local_data() {
        let rules = TagRules::default();
        assert!(!rules.evaluate("500", || false));
        assert!(rules.evaluate("500", || true));
    }

    #[test]
    fn added_entries_need_local_data() {
        let rules = TagRules::default();
        for tag in ["700", "710", "799"] {
            assert!(!rules.evaluate(tag, || false), "{tag} without 5|");
            assert!(rules.evaluate(tag, || true), "{tag} with 5|");
        }
    }

    #[test]
    fn other_tags_are_never_wanted() {
        let rules = TagRules::default();
        for tag in ["650", "020", "501", "800", ""] {
            assert!(!rules.evaluate(tag, || true), "{tag:?} should not be wanted");
        }
    }

    #[test]
    fn empty_tag_is_not_indexed() {
        assert!(!TagRules::requires_local_data(""));
        assert!(TagRules::requires_local_data("7"));
    }

    #[test]
    fn custom_rules_replace_static_set() {
        let rules = TagRules::new(["650"]);
        assert!(rules.evaluate("650", || false));
        assert!(!rules.evaluate("245", || false));
        assert!(rules.evaluate("700", || true));
        assert_eq!(rules.always_wanted().collect::<Vec<_>>(), vec!["650"]);
    }
}
