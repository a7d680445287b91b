//! HTML parsing and rewriting.
//!
//! - `dom`: basic DOM operations
//! - `headings`: year-heading normalization
//! - `details`: `sl-details` component expansion
//! - `shaper`: fragment/full-document shaping and stylesheet injection
//! - `metadata`: charset and title handling
//! - `serializer`: serialization back to bytes
//! - `stylesheet`: the embedded CSS constant

pub mod details;
pub mod dom;
pub mod headings;
pub mod metadata;
pub mod serializer;
pub mod shaper;
pub mod stylesheet;

// Re-export the main public API
pub use details::{
    expand_details_components, ComponentWarning, DETAILS_COMPONENT_TAG, FALLBACK_SUMMARY_TITLE,
};
pub use dom::{
    find_nodes, get_child_node_by_name, get_node_attr, get_node_name, get_text_content,
    html_to_dom, set_node_attr,
};
pub use headings::{normalize_headings, YEAR_HEADING_CLASS};
pub use metadata::{create_metadata_tag, get_charset, get_title, set_charset};
pub use serializer::serialize_document;
pub use shaper::{
    detect_document_kind, shape_document, DocumentKind, CONTAINER_CLASS, FRAGMENT_DOCUMENT_TITLE,
};
pub use stylesheet::STYLESHEET;
