//! Capture records of a translate pass and the restore engine.

use std::rc::{
    Rc,
    Weak,
};

use super::node::{
    NodeRef,
    TextSlot,
    UiNode,
};

/// Where a captured slot was found during the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureKind {
    /// A probed slot, or a collection view's header/footer.
    Property,
    /// The text of a page's auxiliary item.
    AuxiliaryItem,
}

/// The value a slot held before a translate pass replaced it.
///
/// Holds the node weakly: a capture never keeps a node alive.
#[derive(Debug, Clone)]
pub struct Capture {
    node: Weak<dyn UiNode>,
    slot: TextSlot,
    original: String,
    translated: String,
    kind: CaptureKind,
}

impl Capture {
    #[must_use]
    pub const fn slot(&self) -> TextSlot {
        self.slot
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn translated(&self) -> &str {
        &self.translated
    }

    #[must_use]
    pub const fn kind(&self) -> CaptureKind {
        self.kind
    }

    /// The captured node, if it is still alive.
    #[must_use]
    pub fn node(&self) -> Option<NodeRef> {
        self.node.upgrade()
    }

    /// True if this capture belongs to `node`.
    #[must_use]
    pub fn is_for(&self, node: &NodeRef) -> bool {
        self.node.ptr_eq(&Rc::downgrade(node))
    }
}

/// Every slot changed by one translate pass, in the order they were changed.
#[derive(Debug, Default)]
pub struct CaptureSet {
    records: Vec<Capture>,
}

/// Outcome of [`restore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// Slots written back to their original value.
    pub restored: usize,
    /// Captures whose node was dropped or whose slot refused the write.
    pub skipped: usize,
}

impl CaptureSet {
    pub(crate) fn record(
        &mut self,
        node: &NodeRef,
        slot: TextSlot,
        original: String,
        translated: String,
        kind: CaptureKind,
    ) {
        self.records.push(Capture { node: Rc::downgrade(node), slot, original, translated, kind });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Capture> {
        self.records.iter()
    }

    /// Captures recorded for `node`.
    pub fn for_node<'a>(&'a self, node: &'a NodeRef) -> impl Iterator<Item = &'a Capture> {
        self.records.iter().filter(move |capture| capture.is_for(node))
    }

    /// Writes every original value back. See [`restore`].
    pub fn restore(self) -> RestoreReport {
        restore(self)
    }
}

/// Restores every slot captured by a translate pass to its original value.
///
/// Consumes the captures. Records are replayed newest first. Nodes that no
/// longer exist and slots that refuse the write are skipped; restoring is
/// best-effort against a tree that may have changed since the pass.
pub fn restore(captures: CaptureSet) -> RestoreReport {
    let mut report = RestoreReport::default();

    for capture in captures.records.into_iter().rev() {
        let Some(node) = capture.node.upgrade() else {
            tracing::debug!(slot = %capture.slot, "Skipping restore of a dropped node");
            report.skipped += 1;
            continue;
        };

        // Auxiliary items always restore through their own text slot.
        let slot = match capture.kind {
            CaptureKind::AuxiliaryItem => TextSlot::Text,
            CaptureKind::Property => capture.slot,
        };

        match node.set_text(slot, &capture.original) {
            Ok(()) => report.restored += 1,
            Err(e) => {
                tracing::debug!(?node, "Failed to restore {}: {}", slot, e);
                report.skipped += 1;
            }
        }
    }

    tracing::debug!(restored = report.restored, skipped = report.skipped, "Restore finished");
    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;
    use crate::language::Language;
    use crate::test_utils::sample_lookup;
    use crate::tree::{
        Element,
        Layout,
        TreeTranslator,
    };

    fn settings_page() -> (Rc<Element>, Rc<Element>, Rc<Element>) {
        let name = Element::new("Entry")
            .with_text(TextSlot::Placeholder, "Name")
            .with_text(TextSlot::Text, "Save")
            .into_rc();
        let toolbar_item = Element::new("ToolbarItem").with_text(TextSlot::Text, "Help").into_rc();
        let page = Element::new("Page")
            .with_text(TextSlot::Title, "Settings")
            .with_layout(Layout::Multi)
            .with_child(name.clone())
            .with_child(Element::new("Button").with_text(TextSlot::Text, "OK").into_rc())
            .with_auxiliary(toolbar_item.clone())
            .into_rc();
        (page, name, toolbar_item)
    }

    fn translate(root: &NodeRef) -> CaptureSet {
        let lookup = sample_lookup();
        TreeTranslator::new(&lookup, Language::Hungarian).translate(root)
    }

    #[googletest::test]
    fn test_restore_returns_tree_to_original_state() {
        let (page, _, _) = settings_page();
        let before = page.describe();
        let root: NodeRef = page.clone();

        let captures = translate(&root);
        expect_that!(captures.len(), eq(4));
        expect_that!(page.describe() == before, eq(false));

        let report = restore(captures);

        expect_that!(report, eq(RestoreReport { restored: 4, skipped: 0 }));
        assert_eq!(page.describe(), before);
    }

    #[googletest::test]
    fn test_restore_leaves_uncaptured_slots_alone() {
        let (page, name, _) = settings_page();
        let root: NodeRef = page;
        let captures = translate(&root);

        name.set_text(TextSlot::Text, "Mentés").unwrap();
        let _report = captures.restore();

        expect_that!(name.value(TextSlot::Text), some(eq("Mentés")));
        expect_that!(name.value(TextSlot::Placeholder), some(eq("Name")));
    }

    #[googletest::test]
    fn test_captures_do_not_keep_nodes_alive() {
        let (page, name, toolbar_item) = settings_page();
        let root: NodeRef = page;
        let captures = translate(&root);
        drop((root, name, toolbar_item));

        expect_that!(captures.iter().all(|capture| capture.node().is_none()), eq(true));

        let report = restore(captures);

        expect_that!(report, eq(RestoreReport { restored: 0, skipped: 4 }));
    }

    #[googletest::test]
    fn test_restore_skips_removed_slot() {
        let (page, name, _) = settings_page();
        let root: NodeRef = page.clone();
        let captures = translate(&root);

        name.remove_slot(TextSlot::Placeholder);
        let report = restore(captures);

        expect_that!(report, eq(RestoreReport { restored: 3, skipped: 1 }));
        expect_that!(page.value(TextSlot::Title), some(eq("Settings")));
    }

    #[googletest::test]
    fn test_auxiliary_item_restores_its_text() {
        let (page, _, toolbar_item) = settings_page();
        let root: NodeRef = page;
        let captures = translate(&root);
        expect_that!(toolbar_item.value(TextSlot::Text), some(eq("Súgó")));

        let _report = restore(captures);

        expect_that!(toolbar_item.value(TextSlot::Text), some(eq("Help")));
    }

    #[googletest::test]
    fn test_captures_for_node() {
        let (page, name, toolbar_item) = settings_page();
        let root: NodeRef = page;
        let captures = translate(&root);
        let name_node: NodeRef = name;
        let item_node: NodeRef = toolbar_item;

        let for_name: Vec<TextSlot> = captures.for_node(&name_node).map(Capture::slot).collect();
        let for_item: Vec<CaptureKind> = captures.for_node(&item_node).map(Capture::kind).collect();

        assert_eq!(for_name, [TextSlot::Placeholder]);
        assert_eq!(for_item, [CaptureKind::AuxiliaryItem]);
    }

    #[googletest::test]
    fn test_second_pass_starts_a_fresh_capture() {
        let (page, _, _) = settings_page();
        let before = page.describe();
        let root: NodeRef = page.clone();

        let _report = restore(translate(&root));
        let captures = translate(&root);

        expect_that!(captures.len(), eq(4));
        let _report = restore(captures);
        assert_eq!(page.describe(), before);
    }
}
