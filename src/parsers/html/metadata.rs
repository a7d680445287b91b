//! Document metadata handling: charset declarations, titles, and the
//! comment recording when the conversion happened.

use chrono::{SecondsFormat, Utc};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::core::parse_content_type;

use super::dom::{append_child, find_nodes, get_node_attr, make_element, set_node_attr};

/// Returns the charset declared inside the document, if any.
///
/// Understands both `<meta charset="...">` and the legacy
/// `<meta http-equiv="content-type" content="text/html; charset=...">`.
pub fn get_charset(node: &Handle) -> Option<String> {
    for meta_node in find_nodes(node, vec!["html", "head", "meta"]).iter() {
        if let Some(meta_charset_node_attr_value) = get_node_attr(meta_node, "charset") {
            return Some(meta_charset_node_attr_value);
        }

        if get_node_attr(meta_node, "http-equiv")
            .unwrap_or_default()
            .eq_ignore_ascii_case("content-type")
        {
            if let Some(meta_content_type_node_attr_value) = get_node_attr(meta_node, "content") {
                let (_media_type, charset) =
                    parse_content_type(&meta_content_type_node_attr_value);
                return Some(charset);
            }
        }
    }

    None
}

/// Returns the text of the first TITLE element, if present.
pub fn get_title(node: &Handle) -> Option<String> {
    for title_node in find_nodes(node, vec!["html", "head", "title"]).iter() {
        for child_node in title_node.children.borrow().iter() {
            if let NodeData::Text { ref contents } = child_node.data {
                return Some(contents.borrow().to_string());
            }
        }
    }

    None
}

/// Sets the document charset declaration, updating an existing META node
/// where possible and appending a new one otherwise.
pub fn set_charset(dom: RcDom, charset: String) -> RcDom {
    for meta_node in find_nodes(&dom.document, vec!["html", "head", "meta"]).iter() {
        if get_node_attr(meta_node, "charset").is_some() {
            set_node_attr(meta_node, "charset", Some(charset));
            return dom;
        }

        if get_node_attr(meta_node, "http-equiv")
            .unwrap_or_default()
            .eq_ignore_ascii_case("content-type")
            && get_node_attr(meta_node, "content").is_some()
        {
            set_node_attr(
                meta_node,
                "content",
                Some(format!("text/html;charset={charset}")),
            );
            return dom;
        }
    }

    if let Some(head_node) = find_nodes(&dom.document, vec!["html", "head"]).first() {
        let meta_charset_node = make_element(&dom, "meta", &[("charset", charset.as_str())]);
        append_child(head_node, meta_charset_node);
    }

    dom
}

/// Creates an HTML comment recording when and by what the document was
/// converted. Prepended to the output unless metadata is disabled.
pub fn create_metadata_tag() -> String {
    let datetime: &str = &Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    format!(
        "<!-- Converted at {} using {} v{} -->",
        datetime,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::html::dom::html_to_dom;

    #[test]
    fn test_get_charset_html5_meta() {
        let dom = html_to_dom(
            b"<html><head><meta charset=\"Shift_JIS\"></head><body></body></html>",
            "utf-8".to_string(),
        )
        .unwrap();
        assert_eq!(get_charset(&dom.document), Some("Shift_JIS".to_string()));
    }

    #[test]
    fn test_get_charset_http_equiv_meta() {
        let dom = html_to_dom(
            b"<html><head><meta http-equiv=\"content-type\" content=\"text/html; charset=euc-jp\"></head><body></body></html>",
            "utf-8".to_string(),
        )
        .unwrap();
        assert_eq!(get_charset(&dom.document), Some("euc-jp".to_string()));
    }

    #[test]
    fn test_get_charset_absent() {
        let dom = html_to_dom(b"<html><head></head><body></body></html>", "utf-8".to_string())
            .unwrap();
        assert_eq!(get_charset(&dom.document), None);
    }

    #[test]
    fn test_get_title() {
        let dom = html_to_dom(
            b"<html><head><title>converted</title></head><body></body></html>",
            "utf-8".to_string(),
        )
        .unwrap();
        assert_eq!(get_title(&dom.document), Some("converted".to_string()));
    }

    #[test]
    fn test_set_charset_updates_existing_meta() {
        let dom = html_to_dom(
            b"<html><head><meta charset=\"utf-8\"></head><body></body></html>",
            "utf-8".to_string(),
        )
        .unwrap();
        let dom = set_charset(dom, "euc-jp".to_string());
        assert_eq!(get_charset(&dom.document), Some("euc-jp".to_string()));
    }

    #[test]
    fn test_set_charset_adds_meta_when_missing() {
        let dom = html_to_dom(b"<html><head></head><body></body></html>", "utf-8".to_string())
            .unwrap();
        let dom = set_charset(dom, "utf-8".to_string());
        assert_eq!(get_charset(&dom.document), Some("utf-8".to_string()));
    }

    #[test]
    fn test_create_metadata_tag() {
        let tag = create_metadata_tag();
        assert!(tag.starts_with("<!-- Converted at "));
        assert!(tag.contains("using declutter v"));
        assert!(tag.ends_with(" -->"));
    }
}
