//! ariadoc Accessibility
//!
//! Screen reader announcement simulation for the accessibility guide demos.
//!
//! Features:
//! - Accessible name / role / description / state text for an element
//! - Fieldset aggregation (legend group marker plus every control)
//! - Virtual buffer in reading order with quick navigation

pub mod aria;
pub mod name;
pub mod screen_reader;

pub use aria::{AriaRole, AriaState};
pub use name::{
    compute_accessible_description, compute_accessible_name, compute_accessible_text,
    compute_fieldset_accessible_text, resolve_role, visible_text,
};
pub use screen_reader::{BufferItemKind, VirtualBuffer, VirtualBufferItem};

use ariadoc_dom::Document;

/// Accessibility error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum A11yError {
    #[error("No element with id {0:?}")]
    UnknownElement(String),
}

/// Announce the element with the given `id` attribute.
///
/// `group` forces fieldset aggregation; a `fieldset` target is aggregated
/// either way. This is the lookup seam for callers that address elements
/// by id; the text computation itself never fails.
pub fn announce_by_id(doc: &Document, id: &str, group: bool) -> Result<String, A11yError> {
    let node = doc
        .get_element_by_id(id)
        .ok_or_else(|| A11yError::UnknownElement(id.to_string()))?;

    let is_fieldset = doc.element(node).is_some_and(|e| e.is("fieldset"));
    Ok(if group || is_fieldset {
        compute_fieldset_accessible_text(doc, node)
    } else {
        compute_accessible_text(doc, node)
    })
}
