use ego_tree::NodeRef;
use scraper::{Html, Node};
use tracing::debug;

/// Owned document tree, decoupled from the backing parser. The form
/// extractor only ever sees this representation, so it can be exercised
/// with hand-built trees and no parser or network in sight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomTree {
    roots: Vec<DomNode>,
}

/// A single node: a markup element with ordered attributes and children,
/// a text run, or a comment. Doctype and document markers are dropped
/// during conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomNode {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<DomNode>,
    },
    Text(String),
    Comment(String),
}

impl DomTree {
    pub fn new(roots: Vec<DomNode>) -> Self {
        Self { roots }
    }

    pub fn empty() -> Self {
        Self { roots: Vec::new() }
    }

    pub fn roots(&self) -> &[DomNode] {
        &self.roots
    }
}

impl DomNode {
    pub fn element(tag: &str, attrs: &[(&str, &str)], children: Vec<DomNode>) -> Self {
        DomNode::Element {
            tag: tag.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            children,
        }
    }

    pub fn text(contents: &str) -> Self {
        DomNode::Text(contents.to_string())
    }

    pub fn is_element(&self, name: &str) -> bool {
        matches!(self, DomNode::Element { tag, .. } if tag == name)
    }

    /// First-match attribute lookup, scanning in the order the parser
    /// reported the attributes. Case-sensitive on the key.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            DomNode::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Direct children, in document order. Empty for non-element nodes.
    pub fn children(&self) -> &[DomNode] {
        match self {
            DomNode::Element { children, .. } => children,
            _ => &[],
        }
    }
}

/// Parse an HTML document into an owned tree. Tag and attribute names come
/// out the way html5ever normalizes them (lowercased, first duplicate
/// attribute wins).
pub fn parse_document(html: &str) -> DomTree {
    let doc = Html::parse_document(html);
    let roots: Vec<DomNode> = doc.tree.root().children().filter_map(convert).collect();
    debug!(roots = roots.len(), "document parsed");
    DomTree::new(roots)
}

fn convert(node: NodeRef<'_, Node>) -> Option<DomNode> {
    match node.value() {
        Node::Element(el) => Some(DomNode::Element {
            tag: el.name().to_string(),
            attrs: el
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            children: node.children().filter_map(convert).collect(),
        }),
        Node::Text(t) => Some(DomNode::Text(t.text.to_string())),
        Node::Comment(c) => Some(DomNode::Comment(c.comment.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_elements_with_attributes_and_children() {
        let tree = parse_document(r#"<html><body><div id="main"><p>hi</p></div></body></html>"#);

        let html = &tree.roots()[0];
        assert!(html.is_element("html"));

        let body = html
            .children()
            .iter()
            .find(|n| n.is_element("body"))
            .unwrap();
        let div = body.children().iter().find(|n| n.is_element("div")).unwrap();
        assert_eq!(div.attr("id"), Some("main"));
        assert!(div.children().iter().any(|n| n.is_element("p")));
    }

    #[test]
    fn tag_names_are_normalized_lowercase() {
        let tree = parse_document("<html><body><FORM METHOD=\"POST\"></FORM></body></html>");

        let html = &tree.roots()[0];
        let body = html
            .children()
            .iter()
            .find(|n| n.is_element("body"))
            .unwrap();
        let form = body
            .children()
            .iter()
            .find(|n| n.is_element("form"))
            .unwrap();
        // Attribute values keep their case, names do not.
        assert_eq!(form.attr("method"), Some("POST"));
    }

    #[test]
    fn attr_lookup_is_first_match_and_case_sensitive() {
        let node = DomNode::element(
            "form",
            &[("method", "post"), ("method", "get"), ("Action", "/x")],
            vec![],
        );
        assert_eq!(node.attr("method"), Some("post"));
        assert_eq!(node.attr("action"), None);
    }

    #[test]
    fn non_element_nodes_have_no_children_or_attrs() {
        let text = DomNode::text("hello");
        assert!(text.children().is_empty());
        assert_eq!(text.attr("method"), None);
        assert!(!text.is_element("form"));
    }

    #[test]
    fn degenerate_document_converts_without_panicking() {
        // html5ever still synthesizes an html element for empty input; the
        // point is that conversion never panics on degenerate documents.
        let tree = parse_document("");
        for root in tree.roots() {
            assert!(root.is_element("html"));
        }
    }
}
