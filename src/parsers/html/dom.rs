//! Basic DOM operations on the rcdom tree: lookup, attribute access,
//! node construction and parent-edge mutation.

use std::cell::RefCell;
use std::rc::Rc;

use encoding_rs::Encoding;
use html5ever::interface::{Attribute, QualName};
use html5ever::parse_document;
use html5ever::tendril::{format_tendril, TendrilSink};
use html5ever::tree_builder::create_element;
use html5ever::{namespace_url, ns, LocalName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};

/// Parses HTML bytes into a DOM, decoding them with the given charset label
/// first (falls back to lossy UTF-8 for unknown labels).
pub fn html_to_dom(data: &[u8], document_encoding: String) -> Result<RcDom, std::io::Error> {
    let s: String;

    if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
        let (string, _, _) = encoding.decode(data);
        s = string.to_string();
    } else {
        s = String::from_utf8_lossy(data).to_string();
    }

    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut s.as_bytes())
}

/// Finds DOM nodes along the given tag-name path (e.g. `["html", "head"]`).
pub fn find_nodes(node: &Handle, node_names: Vec<&str>) -> Vec<Handle> {
    assert!(!node_names.is_empty());

    let mut found_nodes = Vec::new();
    let node_name = node_names[0];

    if node_names.len() == 1 {
        if let NodeData::Element { ref name, .. } = node.data {
            if &*name.local == node_name {
                found_nodes.push(node.clone());
            }
        }

        for child_node in node.children.borrow().iter() {
            found_nodes.append(&mut find_nodes(child_node, node_names.clone()));
        }
    } else if let NodeData::Element { ref name, .. } = node.data {
        if &*name.local == node_name {
            let mut new_node_names = node_names;
            new_node_names.remove(0);
            found_nodes.append(&mut find_nodes(node, new_node_names));
        } else {
            for child_node in node.children.borrow().iter() {
                found_nodes.append(&mut find_nodes(child_node, node_names.clone()));
            }
        }
    } else {
        for child_node in node.children.borrow().iter() {
            found_nodes.append(&mut find_nodes(child_node, node_names.clone()));
        }
    }

    found_nodes
}

/// Returns the first direct child element with the given tag name.
pub fn get_child_node_by_name(parent: &Handle, node_name: &str) -> Option<Handle> {
    let children = parent.children.borrow();
    let matching_children = children.iter().find(|child| match child.data {
        NodeData::Element { ref name, .. } => &*name.local == node_name,
        _ => false,
    });
    matching_children.cloned()
}

/// Returns the value of the named attribute, if the node is an element and
/// carries it.
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => {
            for attr in attrs.borrow().iter() {
                if &*attr.name.local == attr_name {
                    return Some(attr.value.to_string());
                }
            }
            None
        }
        _ => None,
    }
}

/// Returns the element's tag name, or None for non-element nodes.
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Sets, replaces or (when `attr_value` is None) removes an attribute.
pub fn set_node_attr(node: &Handle, attr_name: &str, attr_value: Option<String>) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let attrs_mut = &mut attrs.borrow_mut();
        let mut i = 0;
        let mut found_existing_attr: bool = false;

        while i < attrs_mut.len() {
            if &attrs_mut[i].name.local == attr_name {
                found_existing_attr = true;

                if let Some(attr_value) = attr_value.clone() {
                    let _ = &attrs_mut[i].value.clear();
                    let _ = &attrs_mut[i].value.push_slice(attr_value.as_str());
                } else {
                    // Remove attr completely if attr_value is not defined
                    attrs_mut.remove(i);
                    continue;
                }
            }

            i += 1;
        }

        if !found_existing_attr {
            // Add new attribute (since originally the target node didn't have it)
            if let Some(attr_value) = attr_value.clone() {
                let name = LocalName::from(attr_name);

                attrs_mut.push(Attribute {
                    name: QualName::new(None, ns!(), name),
                    value: format_tendril!("{}", attr_value),
                });
            }
        }
    };
}

/// Creates a new element node in the HTML namespace.
///
/// The HTML namespace matters for serialization: text inside elements such as
/// STYLE is only written out unescaped for namespaced nodes.
pub fn make_element(dom: &RcDom, name: &str, attributes: &[(&str, &str)]) -> Handle {
    let attrs = attributes
        .iter()
        .map(|(attr_name, attr_value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(*attr_name)),
            value: format_tendril!("{}", attr_value),
        })
        .collect();

    create_element(dom, QualName::new(None, ns!(html), LocalName::from(name)), attrs)
}

/// Creates a new text node.
pub fn make_text(content: &str) -> Handle {
    Node::new(NodeData::Text {
        contents: RefCell::new(format_tendril!("{}", content)),
    })
}

/// Appends a child to the given parent node.
pub fn append_child(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

/// Swaps `old` for `new` at its exact position among the parent's children.
pub fn replace_child(parent: &Handle, old: &Handle, new: Handle) -> bool {
    let mut children = parent.children.borrow_mut();
    if let Some(i) = children.iter().position(|child| Rc::ptr_eq(child, old)) {
        children[i] = new;
        true
    } else {
        false
    }
}

/// Detaches a child from the given parent node.
pub fn remove_child(parent: &Handle, child: &Handle) -> bool {
    let mut children = parent.children.borrow_mut();
    if let Some(i) = children.iter().position(|c| Rc::ptr_eq(c, child)) {
        children.remove(i);
        true
    } else {
        false
    }
}

/// True for text nodes that contain nothing but whitespace.
pub fn is_blank_text(node: &Handle) -> bool {
    match &node.data {
        NodeData::Text { contents } => contents.borrow().trim().is_empty(),
        _ => false,
    }
}

/// Flattens the text content of a subtree: every descendant text node,
/// trimmed and concatenated in document order.
pub fn get_text_content(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        out.push_str(contents.borrow().trim());
    }

    for child_node in node.children.borrow().iter() {
        collect_text(child_node, out);
    }
}

/// Depth-first walk over every element node in the subtree.
pub fn for_each_element(node: &Handle, callback: &mut dyn FnMut(&Handle)) {
    if let NodeData::Element { .. } = node.data {
        callback(node);
    }

    for child_node in node.children.borrow().iter() {
        for_each_element(child_node, callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dom_from(html: &str) -> RcDom {
        html_to_dom(html.as_bytes(), "utf-8".to_string()).unwrap()
    }

    #[test]
    fn test_find_nodes_by_path() {
        let dom = dom_from("<html><head></head><body><p>a</p><p>b</p></body></html>");
        let paragraphs = find_nodes(&dom.document, vec!["html", "body", "p"]);
        assert_eq!(paragraphs.len(), 2);
    }

    #[test]
    fn test_get_and_set_node_attr() {
        let dom = dom_from("<body><div class=\"a b\"></div></body>");
        let div = find_nodes(&dom.document, vec!["html", "body", "div"])
            .first()
            .cloned()
            .unwrap();

        assert_eq!(get_node_attr(&div, "class"), Some("a b".to_string()));

        set_node_attr(&div, "class", Some("c".to_string()));
        assert_eq!(get_node_attr(&div, "class"), Some("c".to_string()));

        set_node_attr(&div, "class", None);
        assert_eq!(get_node_attr(&div, "class"), None);
    }

    #[test]
    fn test_set_node_attr_adds_missing_attribute() {
        let dom = dom_from("<body><div></div></body>");
        let div = find_nodes(&dom.document, vec!["html", "body", "div"])
            .first()
            .cloned()
            .unwrap();

        set_node_attr(&div, "lang", Some("ja".to_string()));
        assert_eq!(get_node_attr(&div, "lang"), Some("ja".to_string()));
    }

    #[test]
    fn test_get_text_content_flattens_and_trims() {
        let dom = dom_from("<body><div> <p class=\"x\"> hello </p><span>world</span> </div></body>");
        let div = find_nodes(&dom.document, vec!["html", "body", "div"])
            .first()
            .cloned()
            .unwrap();

        assert_eq!(get_text_content(&div), "helloworld");
    }

    #[test]
    fn test_replace_child_keeps_position() {
        let dom = dom_from("<body><i>1</i><b>2</b><i>3</i></body>");
        let body = find_nodes(&dom.document, vec!["html", "body"])
            .first()
            .cloned()
            .unwrap();
        let bold = get_child_node_by_name(&body, "b").unwrap();

        let replacement = make_element(&dom, "em", &[]);
        assert!(replace_child(&body, &bold, replacement));

        let children = body.children.borrow();
        assert_eq!(children.len(), 3);
        assert_eq!(get_node_name(&children[1]), Some("em"));
    }

    #[test]
    fn test_is_blank_text() {
        let dom = dom_from("<body><div>  \n </div><p>x</p></body>");
        let div = find_nodes(&dom.document, vec!["html", "body", "div"])
            .first()
            .cloned()
            .unwrap();
        let text = div.children.borrow().first().cloned().unwrap();
        assert!(is_blank_text(&text));

        let p = find_nodes(&dom.document, vec!["html", "body", "p"])
            .first()
            .cloned()
            .unwrap();
        let text = p.children.borrow().first().cloned().unwrap();
        assert!(!is_blank_text(&text));
    }
}
