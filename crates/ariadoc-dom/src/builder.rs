//! Element builder
//!
//! Declarative construction of element subtrees without going through the
//! HTML parser.
//!
//! ```rust,ignore
//! let mut doc = Document::new();
//! doc.append_to_body(
//!     ElementBuilder::new("button").attr("aria-pressed", "true").text("太字"),
//! )?;
//! ```

use crate::{DomError, DomTree, NodeId};

#[derive(Debug, Clone)]
enum BuilderChild {
    Element(ElementBuilder),
    Text(String),
}

/// Builder for an element and its subtree
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    tag_name: String,
    attrs: Vec<(String, String)>,
    children: Vec<BuilderChild>,
}

impl ElementBuilder {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Append a text child
    pub fn text(mut self, content: &str) -> Self {
        self.children.push(BuilderChild::Text(content.to_string()));
        self
    }

    /// Append an element child
    pub fn child(mut self, child: ElementBuilder) -> Self {
        self.children.push(BuilderChild::Element(child));
        self
    }

    /// Materialize under `parent`, returning the new element's id
    pub fn build_into(self, tree: &mut DomTree, parent: NodeId) -> Result<NodeId, DomError> {
        let id = tree.create_element(&self.tag_name);
        if let Some(elem) = tree.element_mut(id) {
            for (name, value) in &self.attrs {
                elem.set_attr(name, value);
            }
        }
        tree.append_child(parent, id)?;

        for child in self.children {
            match child {
                BuilderChild::Element(builder) => {
                    builder.build_into(tree, id)?;
                }
                BuilderChild::Text(content) => {
                    let text = tree.create_text(&content);
                    tree.append_child(id, text)?;
                }
            }
        }
        Ok(id)
    }
}
