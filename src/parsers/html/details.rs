//! Expands `sl-details` component instances into native DETAILS/SUMMARY
//! widgets with the fixed wrapper structure used for animated collapse.
//!
//! Each component is replaced in place by:
//!
//! ```text
//! details
//! ├─ summary > span.summary-title (flattened slot text)
//! └─ div.details-content > div.details-inner > div.content-padding (body)
//! ```

use std::fmt;

use markup5ever_rcdom::{Handle, RcDom};

use super::dom::{
    append_child, get_node_attr, get_node_name, get_text_content, is_blank_text, make_element,
    make_text, remove_child, replace_child,
};

/// Tag name of the custom disclosure component.
pub const DETAILS_COMPONENT_TAG: &str = "sl-details";

/// Attribute name/value pair marking the clickable-title descendant.
const SUMMARY_SLOT_ATTR: &str = "slot";
const SUMMARY_SLOT_VALUE: &str = "summary";

/// Title used when a component carries no summary slot.
pub const FALLBACK_SUMMARY_TITLE: &str = "Details";

/// Non-fatal diagnostics emitted while expanding components.
///
/// Components are numbered in document order, starting at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentWarning {
    /// No summary slot found; the fallback title was used.
    MissingSummarySlot { index: usize },
    /// More than one summary slot found; the first one won and the rest
    /// were left in the body content.
    ExtraSummarySlots { index: usize, count: usize },
}

impl fmt::Display for ComponentWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComponentWarning::MissingSummarySlot { index } => write!(
                f,
                "details component #{index} has no summary slot; using fallback title \"{FALLBACK_SUMMARY_TITLE}\""
            ),
            ComponentWarning::ExtraSummarySlots { index, count } => write!(
                f,
                "details component #{index} has {count} summary slots; using the first"
            ),
        }
    }
}

/// Rewrites every component instance found anywhere under `root`.
///
/// Returns the diagnostics collected along the way; expansion itself never
/// fails. Components nested inside other components are left to the outer
/// instance (nesting is undefined behavior for the source markup).
pub fn expand_details_components(dom: &RcDom, root: &Handle) -> Vec<ComponentWarning> {
    let mut components: Vec<(Handle, Handle)> = Vec::new();
    collect_components(root, &mut components);

    let mut warnings: Vec<ComponentWarning> = Vec::new();

    for (index, (parent, component)) in components.iter().enumerate() {
        let title = take_summary_title(component, index, &mut warnings);
        let details = build_details(dom, component, &title);
        replace_child(parent, component, details);
    }

    warnings
}

fn collect_components(parent: &Handle, found: &mut Vec<(Handle, Handle)>) {
    for child_node in parent.children.borrow().iter() {
        let is_component = get_node_name(child_node)
            .is_some_and(|name| name.eq_ignore_ascii_case(DETAILS_COMPONENT_TAG));

        if is_component {
            found.push((parent.clone(), child_node.clone()));
        } else {
            collect_components(child_node, found);
        }
    }
}

fn collect_summary_slots(parent: &Handle, found: &mut Vec<(Handle, Handle)>) {
    for child_node in parent.children.borrow().iter() {
        if get_node_attr(child_node, SUMMARY_SLOT_ATTR).as_deref() == Some(SUMMARY_SLOT_VALUE) {
            found.push((parent.clone(), child_node.clone()));
        }

        collect_summary_slots(child_node, found);
    }
}

/// Extracts the title text from the first summary slot and removes that
/// slot from the tree. Falls back to a fixed title when no slot exists.
fn take_summary_title(
    component: &Handle,
    index: usize,
    warnings: &mut Vec<ComponentWarning>,
) -> String {
    let mut slots: Vec<(Handle, Handle)> = Vec::new();
    collect_summary_slots(component, &mut slots);

    match slots.len() {
        0 => warnings.push(ComponentWarning::MissingSummarySlot { index }),
        1 => {}
        count => warnings.push(ComponentWarning::ExtraSummarySlots { index, count }),
    }

    if let Some((slot_parent, slot_node)) = slots.first() {
        let title = get_text_content(slot_node);
        remove_child(slot_parent, slot_node);
        title
    } else {
        FALLBACK_SUMMARY_TITLE.to_string()
    }
}

fn build_details(dom: &RcDom, component: &Handle, title: &str) -> Handle {
    let details = make_element(dom, "details", &[]);

    let summary = make_element(dom, "summary", &[]);
    let title_span = make_element(dom, "span", &[("class", "summary-title")]);
    append_child(&title_span, make_text(title));
    append_child(&summary, title_span);
    append_child(&details, summary);

    let content = make_element(dom, "div", &[("class", "details-content")]);
    let inner = make_element(dom, "div", &[("class", "details-inner")]);
    let padding = make_element(dom, "div", &[("class", "content-padding")]);

    // Move the remaining body content as-is; an empty component simply
    // yields an empty padding DIV.
    for child_node in component.children.borrow_mut().drain(..) {
        if is_blank_text(&child_node) {
            continue;
        }
        append_child(&padding, child_node);
    }

    append_child(&inner, padding);
    append_child(&content, inner);
    append_child(&details, content);

    details
}
