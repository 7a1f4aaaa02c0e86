//! Element identifiers and literal markers used by the librarian view.
//!
//! The catalog renders each MARC field as a row inside `#marc_view`:
//!
//! ```html
//! <div class="field">
//!   <div class="tag_ind"><span class="tag">245</span> ...</div>
//!   <div class="subfields">
//!     <span class="sub_code">a|</span> Title <span class="sub_code">5|</span> local note
//!   </div>
//! </div>
//! ```

/// Root element of the parsed page.
pub const HTML_TAG: &str = "html";

/// Body element under `<html>`.
pub const BODY_TAG: &str = "body";

pub const ID_ATTR: &str = "id";
pub const CLASS_ATTR: &str = "class";

/// `id` of the main content container, a direct child of `<body>`.
pub const MAIN_CONTAINER_ID: &str = "main-container";

/// `id` of the element whose children are the field rows.
pub const MARC_VIEW_ID: &str = "marc_view";

/// Class of a field row's tag indicator.
pub const TAG_INDICATOR_CLASS: &str = "tag_ind";

/// Class of the element holding the 3-digit tag number.
pub const TAG_CLASS: &str = "tag";

/// Class of a field row's subfield container.
pub const SUBFIELDS_CLASS: &str = "subfields";

/// Class of a subfield-code marker.
pub const SUB_CODE_CLASS: &str = "sub_code";

/// Subfield code introducing local-institution-only data.
pub const LOCAL_DELIMITER: &str = "5|";

/// Text rendered in place of content the requester may not see.
pub const UNAUTHORIZED_PLACEHOLDER: &str = "UNAUTHORIZED";

/// Tags shown on every card.
pub const ALWAYS_WANTED_TAGS: &[&str] = &[
    "090", "100", "240", "245", "260", "264", "300", "590", "591",
];

/// General note tag, shown only when it carries local data.
pub const GENERAL_NOTE_TAG: &str = "500";
