//! ariadoc DOM - Document Object Model
//!
//! Arena-allocated element tree used by the accessible-text extractor.
//! Nodes are addressed by [`NodeId`]; the [`Document`] wraps the tree and
//! answers document-wide lookups such as `getElementById`.

mod attributes;
mod builder;
mod document;
mod node;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use builder::ElementBuilder;
pub use document::Document;
pub use node::{ElementData, Node, NodeData, TextData};
pub use tree::{Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Null link
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check whether this id points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// DOM error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Unknown node: {0:?}")]
    UnknownNode(NodeId),

    #[error("Hierarchy request error: cannot insert {child:?} under {parent:?}")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}
