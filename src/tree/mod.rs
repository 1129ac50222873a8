//! Tree translator and restore engine.
//!
//! [`TreeTranslator::translate`] walks a tree of [`UiNode`]s, replaces the
//! text of every display slot with its translation and returns a
//! [`CaptureSet`]; [`restore`] writes the original values back.
mod capture;
mod element;
mod node;
mod translator;

pub use capture::{
    Capture,
    CaptureKind,
    CaptureSet,
    RestoreReport,
    restore,
};
pub use element::{
    Element,
    ElementDescription,
    Layout,
};
pub use node::{
    NodeRef,
    NodeShape,
    PropertyError,
    TextSlot,
    UiNode,
};
pub use translator::TreeTranslator;
