//! Shapes the rewritten tree into a well-formed output document: responsive
//! container around the body content plus the embedded stylesheet, with a
//! minimal skeleton synthesized around fragment input.

use html5ever::tendril::{format_tendril, StrTendril};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};

use crate::core::ConvertError;

use super::dom::{
    append_child, get_child_node_by_name, is_blank_text, make_element, make_text, set_node_attr,
};
use super::stylesheet::STYLESHEET;

/// Class of the single wrapper applied to all body content.
pub const CONTAINER_CLASS: &str = "container-responsive";

/// Document title given to converted fragments.
pub const FRAGMENT_DOCUMENT_TITLE: &str = "変換済みドキュメント";

/// Whether the raw input was a bare fragment or a full document.
///
/// The parser synthesizes HTML/HEAD/BODY around any input, so the decision
/// has to be made on the input bytes, before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Fragment,
    FullDocument,
}

/// Detects whether the input carries its own BODY element.
pub fn detect_document_kind(data: &[u8]) -> DocumentKind {
    let body_tag = regex::bytes::Regex::new(r"<[bB][oO][dD][yY][\s/>]").unwrap();

    if body_tag.is_match(data) {
        DocumentKind::FullDocument
    } else {
        DocumentKind::Fragment
    }
}

/// Shapes the document in place.
///
/// Fragment mode dresses the synthesized skeleton up into a standalone
/// document (doctype, `lang`, charset/viewport META, title). Both modes wrap
/// the body content in one `div.container-responsive` and inject the
/// stylesheet into HEAD.
pub fn shape_document(dom: &RcDom, kind: DocumentKind) -> Result<(), ConvertError> {
    let html_node = get_child_node_by_name(&dom.document, "html").ok_or_else(|| {
        ConvertError::Structure("document has no HTML root element".to_string())
    })?;

    let head_node = match get_child_node_by_name(&html_node, "head") {
        Some(existing_head) => existing_head,
        None => {
            let new_head = make_element(dom, "head", &[]);
            html_node.children.borrow_mut().insert(0, new_head.clone());
            new_head
        }
    };

    let body_node = get_child_node_by_name(&html_node, "body").ok_or_else(|| {
        ConvertError::Structure("document has no BODY element".to_string())
    })?;

    if kind == DocumentKind::Fragment {
        ensure_doctype(dom);
        set_node_attr(&html_node, "lang", Some("ja".to_string()));

        append_child(&head_node, make_element(dom, "meta", &[("charset", "utf-8")]));
        append_child(
            &head_node,
            make_element(
                dom,
                "meta",
                &[
                    ("name", "viewport"),
                    ("content", "width=device-width, initial-scale=1.0"),
                ],
            ),
        );

        let title_node = make_element(dom, "title", &[]);
        append_child(&title_node, make_text(FRAGMENT_DOCUMENT_TITLE));
        append_child(&head_node, title_node);
    }

    let style_node = make_element(dom, "style", &[]);
    append_child(&style_node, make_text(STYLESHEET));
    append_child(&head_node, style_node);

    // Re-parent all body content under a single responsive container.
    let contents: Vec<Handle> = body_node.children.borrow_mut().drain(..).collect();
    let container = make_element(dom, "div", &[("class", CONTAINER_CLASS)]);
    for child_node in contents {
        if is_blank_text(&child_node) {
            continue;
        }
        append_child(&container, child_node);
    }
    append_child(&body_node, container);

    Ok(())
}

/// Prepends a `<!DOCTYPE html>` node unless the document already has one.
fn ensure_doctype(dom: &RcDom) {
    let has_doctype = dom
        .document
        .children
        .borrow()
        .iter()
        .any(|child| matches!(child.data, NodeData::Doctype { .. }));

    if !has_doctype {
        let doctype = Node::new(NodeData::Doctype {
            name: format_tendril!("html"),
            public_id: StrTendril::new(),
            system_id: StrTendril::new(),
        });
        dom.document.children.borrow_mut().insert(0, doctype);
    }
}
