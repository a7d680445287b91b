//! Rewrites decorated year headings into a single semantic class.

use markup5ever_rcdom::Handle;

use super::dom::{for_each_element, get_node_attr, get_node_name, set_node_attr};

/// Class applied to normalized headings; styled by the embedded stylesheet.
pub const YEAR_HEADING_CLASS: &str = "year-heading";

/// Utility-class token marking a large-title H3 in the source markup.
const LARGE_TITLE_MARKER: &str = "text-2xl";

/// True for H3 elements whose class list carries the large-title marker.
pub fn is_year_heading(node: &Handle) -> bool {
    if get_node_name(node) != Some("h3") {
        return false;
    }

    get_node_attr(node, "class").is_some_and(|class_value| {
        class_value
            .split_whitespace()
            .any(|token| token.contains(LARGE_TITLE_MARKER))
    })
}

/// Replaces the entire class list of every matching H3 with `year-heading`
/// and drops any inline STYLE attribute. Returns the number of headings
/// rewritten; zero matches is not an error.
pub fn normalize_headings(root: &Handle) -> usize {
    let mut normalized: usize = 0;

    for_each_element(root, &mut |node| {
        if is_year_heading(node) {
            set_node_attr(node, "class", Some(YEAR_HEADING_CLASS.to_string()));
            set_node_attr(node, "style", None);
            normalized += 1;
        }
    });

    normalized
}
