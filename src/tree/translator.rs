//! Depth-first translation of a UI tree.

use std::collections::HashSet;
use std::rc::Rc;

use super::capture::{
    CaptureKind,
    CaptureSet,
};
use super::node::{
    NodeRef,
    NodeShape,
    TextSlot,
};
use crate::language::Language;
use crate::lookup::Lookup;

/// Replaces the display text of UI trees with translations of one language.
#[derive(Debug, Clone, Copy)]
pub struct TreeTranslator<'a> {
    lookup: &'a Lookup,
    language: Language,
}

/// State of one translate pass.
struct Pass {
    captures: CaptureSet,
    /// Addresses of nodes already visited in this pass.
    visited: HashSet<*const ()>,
}

impl<'a> TreeTranslator<'a> {
    #[must_use]
    pub const fn new(lookup: &'a Lookup, language: Language) -> Self {
        Self { lookup, language }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Translate every text slot reachable from `root`.
    ///
    /// Each slot's current value is used as the canonical identifier. Slots
    /// whose translation equals the current value are left alone and not
    /// captured. Failures on individual nodes are logged and skipped.
    ///
    /// Only translate → restore cycles are supported: translating an already
    /// translated tree looks up the translated text, not the identifier.
    #[must_use]
    pub fn translate(&self, root: &NodeRef) -> CaptureSet {
        let mut pass = Pass { captures: CaptureSet::default(), visited: HashSet::new() };
        self.visit(root, &mut pass);
        tracing::debug!(
            language = %self.language,
            captured = pass.captures.len(),
            visited = pass.visited.len(),
            "Translated tree"
        );
        pass.captures
    }

    fn visit(&self, node: &NodeRef, pass: &mut Pass) {
        if !pass.visited.insert(Rc::as_ptr(node).cast::<()>()) {
            return;
        }

        self.translate_slots(node, pass);

        match node.shape() {
            NodeShape::Leaf | NodeShape::SingleChild(None) => {}
            NodeShape::SingleChild(Some(child)) => self.visit(&child, pass),
            NodeShape::MultiChild(children) | NodeShape::Enumerable(children) => {
                for child in &children {
                    self.visit(child, pass);
                }
            }
            NodeShape::CollectionView(items) => {
                self.translate_slot(node, TextSlot::Footer, CaptureKind::Property, pass);
                for item in &items {
                    self.visit(item, pass);
                }
            }
        }

        for item in node.auxiliary_items() {
            if pass.visited.insert(Rc::as_ptr(&item).cast::<()>()) {
                self.translate_slot(&item, TextSlot::Text, CaptureKind::AuxiliaryItem, pass);
            }
        }
    }

    /// Probes the display slots of `node` in priority order.
    fn translate_slots(&self, node: &NodeRef, pass: &mut Pass) {
        let single_slot = node.single_slot();
        for slot in TextSlot::PROBE_ORDER {
            let found = self.translate_slot(node, slot, CaptureKind::Property, pass);
            if found && single_slot {
                break;
            }
        }
    }

    /// Translates one slot. Returns true if the slot is writable and holds text,
    /// whether or not its translation differs.
    fn translate_slot(
        &self,
        node: &NodeRef,
        slot: TextSlot,
        kind: CaptureKind,
        pass: &mut Pass,
    ) -> bool {
        if !node.is_writable(slot) {
            return false;
        }
        let current = match node.text(slot) {
            Ok(Some(current)) if !current.is_empty() => current,
            Ok(_) => return false,
            Err(e) => {
                tracing::debug!(?node, "Failed to read {}: {}", slot, e);
                return false;
            }
        };

        let translated = self.lookup.resolve(self.language, &current);
        if translated == current {
            return true;
        }

        let translated = translated.to_string();
        match node.set_text(slot, &translated) {
            Ok(()) => pass.captures.record(node, slot, current, translated, kind),
            Err(e) => tracing::debug!(?node, "Failed to write {}: {}", slot, e),
        }
        true
    }
}
