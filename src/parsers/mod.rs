//! Parsers for the resources this tool rewrites.
//!
//! - `html` - HTML document parsing, DOM rewriting, metadata handling

pub mod html;

// Re-export commonly used items for convenience
pub use html::{
    expand_details_components, html_to_dom, normalize_headings, serialize_document, shape_document,
};
