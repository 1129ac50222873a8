//! Capability interface implemented by translatable UI nodes.

use std::fmt;
use std::rc::Rc;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// A named string display property of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextSlot {
    Text,
    Title,
    Header,
    Placeholder,
    Label,
    Content,
    Footer,
}

impl TextSlot {
    /// Slots probed on every node, in priority order.
    pub const PROBE_ORDER: [Self; 6] =
        [Self::Text, Self::Title, Self::Header, Self::Placeholder, Self::Label, Self::Content];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Title => "Title",
            Self::Header => "Header",
            Self::Placeholder => "Placeholder",
            Self::Label => "Label",
            Self::Content => "Content",
            Self::Footer => "Footer",
        }
    }
}

impl fmt::Display for TextSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure to read or write a slot on one node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    #[error("Property '{0}' is read-only")]
    ReadOnly(TextSlot),

    #[error("Property '{0}' does not exist")]
    Missing(TextSlot),

    #[error("Property '{slot}' is unavailable: {reason}")]
    Unavailable { slot: TextSlot, reason: String },
}

/// Shared handle to a node of a UI tree.
pub type NodeRef = Rc<dyn UiNode>;

/// How a node nests other nodes.
#[derive(Debug, Clone, Default)]
pub enum NodeShape {
    /// No nested nodes.
    #[default]
    Leaf,
    /// A content container with at most one child.
    SingleChild(Option<NodeRef>),
    /// A layout with ordered children.
    MultiChild(Vec<NodeRef>),
    /// An items view: `Header`/`Footer` slots plus a backing item collection.
    CollectionView(Vec<NodeRef>),
    /// Any other sequence of nodes.
    Enumerable(Vec<NodeRef>),
}

/// A UI node the tree translator can inspect and mutate.
///
/// Nodes are shared through [`NodeRef`] and mutate through `&self`, so
/// implementations keep their slot values behind interior mutability.
pub trait UiNode: fmt::Debug {
    /// Current value of `slot`.
    ///
    /// Returns `Ok(None)` when the node has no string property for `slot`.
    ///
    /// # Errors
    /// Returns [`PropertyError`] when the property exists but cannot be read.
    fn text(&self, slot: TextSlot) -> Result<Option<String>, PropertyError>;

    /// Replaces the value of `slot`.
    ///
    /// # Errors
    /// Returns [`PropertyError`] when the property is missing or not writable.
    fn set_text(&self, slot: TextSlot, value: &str) -> Result<(), PropertyError>;

    /// False when `slot` exists but cannot be written. Such slots are never
    /// read or translated.
    fn is_writable(&self, _slot: TextSlot) -> bool {
        true
    }

    /// True when the node shows a single display slot, so probing stops at the
    /// first writable slot holding text.
    fn single_slot(&self) -> bool {
        false
    }

    fn shape(&self) -> NodeShape {
        NodeShape::Leaf
    }

    /// Page-level auxiliary items such as toolbar shortcuts, translated
    /// through their `Text` slot after the rest of the node.
    fn auxiliary_items(&self) -> Vec<NodeRef> {
        Vec::new()
    }
}
