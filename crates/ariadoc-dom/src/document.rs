//! Document - High-level document API

use crate::{DomError, DomTree, ElementBuilder, ElementData, NodeId};

/// HTML Document
///
/// Owns the tree and answers document-scoped queries. Every lookup walks
/// from the document node, so references between sibling subtrees
/// (`label[for]`, `aria-labelledby`, `aria-describedby`) resolve no matter
/// where the referencing element sits.
#[derive(Debug, Clone, Default)]
pub struct Document {
    tree: DomTree,
    html_element: Option<NodeId>,
    body_element: Option<NodeId>,
}

impl Document {
    /// Create a document with an `html > head + body` skeleton
    pub fn new() -> Self {
        let mut doc = Self::empty();
        if let Err(err) = doc.build_skeleton() {
            tracing::error!("Failed to build document skeleton: {}", err);
        }
        doc
    }

    fn build_skeleton(&mut self) -> Result<(), DomError> {
        let html = self.tree.create_element("html");
        let head = self.tree.create_element("head");
        let body = self.tree.create_element("body");

        self.tree.append_child(NodeId::ROOT, html)?;
        self.tree.append_child(html, head)?;
        self.tree.append_child(html, body)?;

        self.html_element = Some(html);
        self.body_element = Some(body);
        Ok(())
    }

    /// Create an empty document (document node only)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Re-detect the `html` and `body` elements after the tree was
    /// built externally (e.g. by the HTML parser).
    pub fn finalize(&mut self) {
        self.html_element = self
            .tree
            .children(NodeId::ROOT)
            .find(|(_, n)| n.as_element().is_some_and(|e| e.is("html")))
            .map(|(id, _)| id);

        self.body_element = self.html_element.and_then(|html| {
            self.tree
                .children(html)
                .find(|(_, n)| n.as_element().is_some_and(|e| e.is("body")))
                .map(|(id, _)| id)
        });
    }

    pub fn document_element(&self) -> Option<NodeId> {
        self.html_element
    }

    pub fn body(&self) -> Option<NodeId> {
        self.body_element
    }

    /// First element in document order whose `id` attribute equals `id`
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        let found = self.find_element(|e| e.id() == Some(id));
        if found.is_none() {
            tracing::debug!("get_element_by_id: no element with id {:?}", id);
        }
        found
    }

    /// First `label` element whose `for` attribute equals `control_id`
    pub fn find_label_for(&self, control_id: &str) -> Option<NodeId> {
        if control_id.is_empty() {
            return None;
        }
        self.find_element(|e| e.is("label") && e.attr_is("for", control_id))
    }

    /// First element in document order matching `predicate`
    pub fn find_element(&self, predicate: impl Fn(&ElementData) -> bool) -> Option<NodeId> {
        self.tree
            .descendants(NodeId::ROOT)
            .find(|(_, n)| n.as_element().is_some_and(&predicate))
            .map(|(id, _)| id)
    }

    /// Element data shortcut
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.tree.element(id)
    }

    /// Build `builder` and append it under `parent`
    pub fn append(&mut self, parent: NodeId, builder: ElementBuilder) -> Result<NodeId, DomError> {
        builder.build_into(&mut self.tree, parent)
    }

    /// Build `builder` and append it to `<body>` (or the document node when
    /// there is no body)
    pub fn append_to_body(&mut self, builder: ElementBuilder) -> Result<NodeId, DomError> {
        let parent = self.body_element.unwrap_or(NodeId::ROOT);
        self.append(parent, builder)
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton() {
        let doc = Document::new();
        assert!(doc.document_element().is_some());
        assert!(doc.body().is_some());
        let html = doc.document_element().unwrap();
        let tags: Vec<&str> = doc
            .tree()
            .children(html)
            .filter_map(|(_, n)| n.as_element().map(|e| e.tag_name.as_str()))
            .collect();
        assert_eq!(tags, vec!["head", "body"]);
    }

    #[test]
    fn test_get_element_by_id_is_document_wide() {
        let mut doc = Document::new();
        let first = doc
            .append_to_body(ElementBuilder::new("div").child(ElementBuilder::new("span").id("deep")))
            .unwrap();
        doc.append_to_body(ElementBuilder::new("p").id("other")).unwrap();

        let deep = doc.get_element_by_id("deep").unwrap();
        assert_eq!(doc.tree().get(deep).unwrap().parent, first);
        assert!(doc.get_element_by_id("other").is_some());
        assert!(doc.get_element_by_id("missing").is_none());
        assert!(doc.get_element_by_id("").is_none());
    }

    #[test]
    fn test_first_duplicate_id_wins() {
        let mut doc = Document::new();
        let a = doc.append_to_body(ElementBuilder::new("span").id("dup")).unwrap();
        doc.append_to_body(ElementBuilder::new("span").id("dup")).unwrap();
        assert_eq!(doc.get_element_by_id("dup"), Some(a));
    }

    #[test]
    fn test_find_label_for() {
        let mut doc = Document::new();
        let label = doc
            .append_to_body(ElementBuilder::new("label").attr("for", "e1").text("メール"))
            .unwrap();
        doc.append_to_body(ElementBuilder::new("input").id("e1")).unwrap();

        assert_eq!(doc.find_label_for("e1"), Some(label));
        assert_eq!(doc.find_label_for("e2"), None);
    }
}
