//! Screen Reader Simulation
//!
//! Virtual buffer: the page linearized into the announcements a screen
//! reader would speak while arrowing through it, with quick navigation by
//! heading, landmark, link and form control.

use ariadoc_dom::{Document, ElementData, NodeId};

use crate::aria::{input_type, AriaRole};
use crate::name::{
    compute_accessible_text, compute_fieldset_accessible_text, explicit_name, is_aria_hidden,
    resolve_role, visible_text, LIST_SEPARATOR,
};

/// Buffer item type for quick navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferItemKind {
    Text,
    Heading,
    Link,
    Button,
    FormControl,
    Landmark,
    Group,
}

impl BufferItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BufferItemKind::Text => "text",
            BufferItemKind::Heading => "heading",
            BufferItemKind::Link => "link",
            BufferItemKind::Button => "button",
            BufferItemKind::FormControl => "form-control",
            BufferItemKind::Landmark => "landmark",
            BufferItemKind::Group => "group",
        }
    }
}

/// One announcement in reading order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualBufferItem {
    pub node: NodeId,
    pub kind: BufferItemKind,
    pub text: String,
}

/// Virtual buffer for non-visual navigation
#[derive(Debug, Default)]
pub struct VirtualBuffer {
    items: Vec<VirtualBufferItem>,
    cursor: usize,
    landmarks: Vec<usize>,
    headings: Vec<usize>,
    links: Vec<usize>,
    form_controls: Vec<usize>,
}

impl VirtualBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Linearize the subtree under `root` in document order.
    ///
    /// Hidden subtrees are skipped. Controls, links, buttons, headings and
    /// fieldsets are announced as a whole; text blocks are announced only
    /// when nothing inside them is announced on its own. Items that would be
    /// silent are dropped.
    pub fn from_document(doc: &Document, root: NodeId) -> Self {
        let mut buffer = Self::new();
        let mut walker = doc.tree().descendants(root);

        while let Some((id, node)) = walker.next() {
            if let Some(text) = node.as_text() {
                // Loose text next to announced items inside a block
                let text = text.trim();
                if !text.is_empty() {
                    buffer.add_item(VirtualBufferItem {
                        node: id,
                        kind: BufferItemKind::Text,
                        text: text.to_string(),
                    });
                }
                continue;
            }
            let Some(elem) = node.as_element() else {
                continue;
            };
            if is_aria_hidden(elem) || is_unrendered(elem) {
                walker.skip_subtree_of(id);
                continue;
            }

            let Some(kind) = classify(elem) else {
                continue;
            };
            let text = match kind {
                BufferItemKind::Group => {
                    walker.skip_subtree_of(id);
                    compute_fieldset_accessible_text(doc, id)
                }
                BufferItemKind::Landmark => landmark_text(doc, elem),
                BufferItemKind::Text => {
                    if contains_announced(doc, id) {
                        continue;
                    }
                    walker.skip_subtree_of(id);
                    visible_text(doc, id).trim().to_string()
                }
                BufferItemKind::Heading
                | BufferItemKind::Link
                | BufferItemKind::Button
                | BufferItemKind::FormControl => {
                    walker.skip_subtree_of(id);
                    compute_accessible_text(doc, id)
                }
            };

            if text.is_empty() {
                tracing::trace!("skipping silent {:?} <{}>", kind, elem.tag_name);
                continue;
            }
            buffer.add_item(VirtualBufferItem { node: id, kind, text });
        }

        tracing::debug!("virtual buffer built with {} items", buffer.len());
        buffer
    }

    pub fn add_item(&mut self, item: VirtualBufferItem) {
        let idx = self.items.len();
        match item.kind {
            BufferItemKind::Landmark => self.landmarks.push(idx),
            BufferItemKind::Heading => self.headings.push(idx),
            BufferItemKind::Link => self.links.push(idx),
            BufferItemKind::FormControl | BufferItemKind::Button | BufferItemKind::Group => {
                self.form_controls.push(idx)
            }
            BufferItemKind::Text => {}
        }
        self.items.push(item);
    }

    pub fn items(&self) -> &[VirtualBufferItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<&VirtualBufferItem> {
        self.items.get(self.cursor)
    }

    pub fn move_next(&mut self) -> Option<&VirtualBufferItem> {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
        self.current()
    }

    pub fn move_prev(&mut self) -> Option<&VirtualBufferItem> {
        self.cursor = self.cursor.saturating_sub(1);
        self.current()
    }

    pub fn next_heading(&mut self) -> Option<&VirtualBufferItem> {
        Self::jump(&self.headings, &mut self.cursor)?;
        self.current()
    }

    pub fn next_landmark(&mut self) -> Option<&VirtualBufferItem> {
        Self::jump(&self.landmarks, &mut self.cursor)?;
        self.current()
    }

    pub fn next_link(&mut self) -> Option<&VirtualBufferItem> {
        Self::jump(&self.links, &mut self.cursor)?;
        self.current()
    }

    pub fn next_form_control(&mut self) -> Option<&VirtualBufferItem> {
        Self::jump(&self.form_controls, &mut self.cursor)?;
        self.current()
    }

    fn jump(index: &[usize], cursor: &mut usize) -> Option<()> {
        let &idx = index.iter().find(|&&i| i > *cursor)?;
        *cursor = idx;
        Some(())
    }
}

fn classify(elem: &ElementData) -> Option<BufferItemKind> {
    if let Some(role) = resolve_role(elem) {
        match role {
            AriaRole::Link => return Some(BufferItemKind::Link),
            AriaRole::Button => return Some(BufferItemKind::Button),
            AriaRole::Heading => return Some(BufferItemKind::Heading),
            AriaRole::Group if elem.is("fieldset") => return Some(BufferItemKind::Group),
            r if r.is_landmark() => return Some(BufferItemKind::Landmark),
            r if r.is_widget() => return Some(BufferItemKind::FormControl),
            _ => {}
        }
    }

    match elem.tag_name.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some(BufferItemKind::Heading),
        "fieldset" => Some(BufferItemKind::Group),
        "input" if input_type(elem) == "hidden" => None,
        "input" | "select" | "textarea" => Some(BufferItemKind::FormControl),
        "p" | "li" | "dt" | "dd" | "td" | "th" | "caption" | "figcaption" | "blockquote"
        | "div" | "span" | "em" | "strong" | "b" | "i" | "small" | "code" => {
            Some(BufferItemKind::Text)
        }
        _ => None,
    }
}

fn is_unrendered(elem: &ElementData) -> bool {
    matches!(elem.tag_name.as_str(), "head" | "script" | "style" | "template" | "noscript")
}

fn contains_announced(doc: &Document, id: NodeId) -> bool {
    let mut walker = doc.tree().descendants(id);
    while let Some((child, node)) = walker.next() {
        let Some(elem) = node.as_element() else {
            continue;
        };
        if is_aria_hidden(elem) || is_unrendered(elem) {
            walker.skip_subtree_of(child);
            continue;
        }
        match classify(elem) {
            Some(BufferItemKind::Text) if is_inline(elem) => {}
            Some(_) => return true,
            None => {}
        }
    }
    false
}

fn is_inline(elem: &ElementData) -> bool {
    matches!(elem.tag_name.as_str(), "span" | "em" | "strong" | "b" | "i" | "small" | "code")
}

/// Landmarks announce their explicit name (if any) and role, never their
/// whole content.
fn landmark_text(doc: &Document, elem: &ElementData) -> String {
    let name = explicit_name(doc, elem).unwrap_or_default();
    let phrase = resolve_role(elem).and_then(|r| r.phrase()).unwrap_or_default();
    match (name.is_empty(), phrase.is_empty()) {
        (true, _) => phrase.to_string(),
        (false, true) => name,
        (false, false) => format!("{name}{LIST_SEPARATOR}{phrase}"),
    }
}
