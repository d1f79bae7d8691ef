//! Accessible text computation
//!
//! Approximates what a screen reader announces for an element: the
//! accessible name, then the role phrase, then the description, then the
//! states. Every lookup goes through the [`Document`] passed in, so
//! references across the page resolve and nothing depends on global state.
//!
//! Nothing here fails. Dangling id references and missing attributes just
//! drop the corresponding segment.

use ariadoc_dom::{Document, ElementData, NodeData, NodeId};

use crate::aria::{input_type, AriaRole, AriaState, PASSWORD_PHRASE};

/// Suffix appended to a fieldset's legend
pub const GROUP_SUFFIX: &str = "、グループ";

/// Connective between name, role phrase and states
pub const LIST_SEPARATOR: &str = "、";

/// Connective before the description and between fieldset segments
pub const SENTENCE_SEPARATOR: &str = "。";

/// Compute the full announcement for `element`.
///
/// Returns an empty string for hidden elements and for ids that are not
/// elements.
pub fn compute_accessible_text(doc: &Document, element: NodeId) -> String {
    let Some(elem) = doc.element(element) else {
        return String::new();
    };
    if is_aria_hidden(elem) {
        return String::new();
    }

    let mut text = compute_accessible_name(doc, element);

    if let Some(phrase) = role_phrase(elem) {
        push_segment(&mut text, LIST_SEPARATOR, phrase);
    }

    let description = compute_accessible_description(doc, element);
    if !description.is_empty() {
        push_segment(&mut text, SENTENCE_SEPARATOR, &description);
    }

    let states: Vec<_> = AriaState::from_element(elem).iter().map(AriaState::phrase).collect();
    if !states.is_empty() {
        push_segment(&mut text, LIST_SEPARATOR, &states.join(LIST_SEPARATOR));
    }

    tracing::trace!("accessible text for {:?} <{}>: {:?}", element, elem.tag_name, text);
    text
}

/// Announcement for a fieldset: the legend with the group marker, then
/// every `input`, `select`, `textarea` and `button` descendant in document
/// order, joined with `。`.
pub fn compute_fieldset_accessible_text(doc: &Document, fieldset: NodeId) -> String {
    let Some(elem) = doc.element(fieldset) else {
        return String::new();
    };
    if is_aria_hidden(elem) {
        return String::new();
    }

    let mut segments = Vec::new();
    if let Some(legend) = first_legend(doc, fieldset) {
        segments.push(format!("{}{}", visible_text(doc, legend).trim(), GROUP_SUFFIX));
    }

    for (id, node) in doc.tree().descendants(fieldset) {
        let is_control = node
            .as_element()
            .is_some_and(|e| matches!(e.tag_name.as_str(), "input" | "select" | "textarea" | "button"));
        if !is_control {
            continue;
        }
        let text = compute_accessible_text(doc, id);
        if !text.is_empty() {
            segments.push(text);
        }
    }

    segments.join(SENTENCE_SEPARATOR)
}

/// Accessible name with the usual precedence: `aria-label`, then
/// `aria-labelledby`, then label/placeholder for form controls or the
/// legend for fieldsets, then the element's own visible text.
pub fn compute_accessible_name(doc: &Document, element: NodeId) -> String {
    let Some(elem) = doc.element(element) else {
        return String::new();
    };

    if let Some(name) = explicit_name(doc, elem) {
        return name;
    }

    if is_form_control(elem) {
        let label = elem
            .id()
            .and_then(|id| doc.find_label_for(id))
            .map(|label| visible_text(doc, label).trim().to_string())
            .filter(|text| !text.is_empty());
        if let Some(label) = label {
            return label;
        }
        if let Some(placeholder) = non_blank(elem.attr("placeholder")) {
            return placeholder.trim().to_string();
        }
    } else if elem.is("fieldset") {
        if let Some(legend) = first_legend(doc, element) {
            return format!("{}{}", visible_text(doc, legend).trim(), GROUP_SUFFIX);
        }
    }

    visible_text(doc, element).trim().to_string()
}

/// Name coming from `aria-label` or `aria-labelledby`, if either is set
pub(crate) fn explicit_name(doc: &Document, elem: &ElementData) -> Option<String> {
    if let Some(label) = non_blank(elem.attr("aria-label")) {
        return Some(label.trim().to_string());
    }

    let ids = non_blank(elem.attr("aria-labelledby"))?;
    let parts: Vec<_> = resolve_id_refs(doc, ids)
        .map(|target| visible_text(doc, target).trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();
    Some(parts.join(" "))
}

/// `aria-describedby` targets' text content, joined with `。`.
///
/// Unlike names, descriptions use the raw text content of each target;
/// `aria-hidden` inside the target is not filtered.
pub fn compute_accessible_description(doc: &Document, element: NodeId) -> String {
    let Some(ids) = doc.element(element).and_then(|e| e.attr("aria-describedby")) else {
        return String::new();
    };

    let parts: Vec<_> = resolve_id_refs(doc, ids)
        .map(|target| doc.tree().text_content(target).trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();
    parts.join(SENTENCE_SEPARATOR)
}

/// Effective role: the first token of an explicit `role` wins, otherwise
/// the implicit role of the tag.
pub fn resolve_role(elem: &ElementData) -> Option<AriaRole> {
    match elem.attr("role").and_then(|r| r.split_whitespace().next()) {
        Some(token) => AriaRole::parse(token),
        None => AriaRole::from_element(elem),
    }
}

/// Role phrase for an element. Password inputs always get the password
/// phrase, whatever their `role` attribute says.
pub fn role_phrase(elem: &ElementData) -> Option<&'static str> {
    if elem.is("input") && input_type(elem) == "password" {
        return Some(PASSWORD_PHRASE);
    }
    resolve_role(elem)?.phrase()
}

/// Concatenated text of a subtree, skipping every element marked
/// `aria-hidden="true"` (the starting node included). Whitespace is kept
/// as authored.
pub fn visible_text(doc: &Document, node: NodeId) -> String {
    let tree = doc.tree();
    match tree.get(node).map(|n| &n.data) {
        Some(NodeData::Text(text)) => return text.content.clone(),
        Some(NodeData::Element(elem)) if is_aria_hidden(elem) => return String::new(),
        Some(_) => {}
        None => return String::new(),
    }

    let mut out = String::new();
    let mut walker = tree.descendants(node);
    while let Some((id, child)) = walker.next() {
        match &child.data {
            NodeData::Text(text) => out.push_str(&text.content),
            NodeData::Element(elem) if is_aria_hidden(elem) => walker.skip_subtree_of(id),
            _ => {}
        }
    }
    out
}

/// `aria-hidden="true"`
pub fn is_aria_hidden(elem: &ElementData) -> bool {
    elem.attr_is("aria-hidden", "true")
}

fn is_form_control(elem: &ElementData) -> bool {
    matches!(elem.tag_name.as_str(), "input" | "textarea" | "select")
}

fn first_legend(doc: &Document, fieldset: NodeId) -> Option<NodeId> {
    doc.tree()
        .children(fieldset)
        .find(|(_, n)| n.as_element().is_some_and(|e| e.is("legend")))
        .map(|(id, _)| id)
}

fn resolve_id_refs<'a>(doc: &'a Document, ids: &'a str) -> impl Iterator<Item = NodeId> + 'a {
    ids.split_whitespace().filter_map(|id| doc.get_element_by_id(id))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn push_segment(text: &mut String, connective: &str, segment: &str) {
    if !text.is_empty() {
        text.push_str(connective);
    }
    text.push_str(segment);
}
