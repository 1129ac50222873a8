//! A general purpose [`UiNode`] with dynamically declared slots.
//!
//! `Element` adapts UI models that are not compiled against [`UiNode`]: the
//! slots a node exposes are data rather than fields. It can be described as JSON
//! through [`ElementDescription`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{
    Deserialize,
    Serialize,
};

use super::node::{
    NodeRef,
    NodeShape,
    PropertyError,
    TextSlot,
    UiNode,
};

/// How an [`Element`] nests its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    #[default]
    Leaf,
    /// Content container; only the first child is used.
    Single,
    Multi,
    /// Items view whose children are its items.
    Collection,
    Enumerable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SlotValue {
    value: String,
    writable: bool,
}

/// A UI node whose text slots, layout and children are configured at runtime.
#[derive(Debug, Default)]
pub struct Element {
    kind: String,
    slots: RefCell<BTreeMap<TextSlot, SlotValue>>,
    single_slot: bool,
    layout: Layout,
    children: Vec<Rc<Self>>,
    auxiliary: Vec<Rc<Self>>,
}

impl Element {
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into(), ..Self::default() }
    }

    /// Adds a writable slot.
    #[must_use]
    pub fn with_text(self, slot: TextSlot, value: impl Into<String>) -> Self {
        self.with_slot(slot, value.into(), true)
    }

    /// Adds a slot that can be read but not written.
    #[must_use]
    pub fn with_read_only(self, slot: TextSlot, value: impl Into<String>) -> Self {
        self.with_slot(slot, value.into(), false)
    }

    fn with_slot(self, slot: TextSlot, value: String, writable: bool) -> Self {
        self.slots.borrow_mut().insert(slot, SlotValue { value, writable });
        self
    }

    #[must_use]
    pub const fn with_single_slot(mut self, single_slot: bool) -> Self {
        self.single_slot = single_slot;
        self
    }

    #[must_use]
    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Rc<Self>) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Rc<Self>>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn with_auxiliary(mut self, item: Rc<Self>) -> Self {
        self.auxiliary.push(item);
        self
    }

    /// Wraps the element for sharing in a tree.
    #[must_use]
    pub fn into_rc(self) -> Rc<Self> {
        Rc::new(self)
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Current value of `slot`, writable or not.
    #[must_use]
    pub fn value(&self, slot: TextSlot) -> Option<String> {
        self.slots.borrow().get(&slot).map(|slot| slot.value.clone())
    }

    /// Removes a slot, as a toolkit would when a property disappears.
    pub fn remove_slot(&self, slot: TextSlot) {
        self.slots.borrow_mut().remove(&slot);
    }

    #[must_use]
    pub fn children(&self) -> &[Rc<Self>] {
        &self.children
    }

    #[must_use]
    pub fn auxiliary(&self) -> &[Rc<Self>] {
        &self.auxiliary
    }

    /// Builds an element tree from its description.
    #[must_use]
    pub fn from_description(description: ElementDescription) -> Rc<Self> {
        let read_only = description.read_only;
        let slots = description
            .slots
            .into_iter()
            .map(|(slot, value)| (slot, SlotValue { value, writable: !read_only.contains(&slot) }))
            .collect();

        Rc::new(Self {
            kind: description.kind,
            slots: RefCell::new(slots),
            single_slot: description.single_slot,
            layout: description.layout,
            children: description.children.into_iter().map(Self::from_description).collect(),
            auxiliary: description.auxiliary.into_iter().map(Self::from_description).collect(),
        })
    }

    /// Describes the element tree with its current slot values.
    #[must_use]
    pub fn describe(&self) -> ElementDescription {
        let slots = self.slots.borrow();
        ElementDescription {
            kind: self.kind.clone(),
            slots: slots.iter().map(|(slot, value)| (*slot, value.value.clone())).collect(),
            read_only: slots
                .iter()
                .filter(|(_, value)| !value.writable)
                .map(|(slot, _)| *slot)
                .collect(),
            single_slot: self.single_slot,
            layout: self.layout,
            children: self.children.iter().map(|child| child.describe()).collect(),
            auxiliary: self.auxiliary.iter().map(|item| item.describe()).collect(),
        }
    }

    fn node_refs(elements: &[Rc<Self>]) -> Vec<NodeRef> {
        elements.iter().map(|element| -> NodeRef { element.clone() }).collect()
    }
}

impl UiNode for Element {
    fn text(&self, slot: TextSlot) -> Result<Option<String>, PropertyError> {
        Ok(self.value(slot))
    }

    fn set_text(&self, slot: TextSlot, value: &str) -> Result<(), PropertyError> {
        let mut slots = self.slots.borrow_mut();
        let entry = slots.get_mut(&slot).ok_or(PropertyError::Missing(slot))?;
        if !entry.writable {
            return Err(PropertyError::ReadOnly(slot));
        }
        value.clone_into(&mut entry.value);
        Ok(())
    }

    fn is_writable(&self, slot: TextSlot) -> bool {
        self.slots.borrow().get(&slot).is_none_or(|entry| entry.writable)
    }

    fn single_slot(&self) -> bool {
        self.single_slot
    }

    fn shape(&self) -> NodeShape {
        match self.layout {
            Layout::Leaf => NodeShape::Leaf,
            Layout::Single => NodeShape::SingleChild(
                self.children.first().map(|child| -> NodeRef { child.clone() }),
            ),
            Layout::Multi => NodeShape::MultiChild(Self::node_refs(&self.children)),
            Layout::Collection => NodeShape::CollectionView(Self::node_refs(&self.children)),
            Layout::Enumerable => NodeShape::Enumerable(Self::node_refs(&self.children)),
        }
    }

    fn auxiliary_items(&self) -> Vec<NodeRef> {
        Self::node_refs(&self.auxiliary)
    }
}

/// Serializable description of an [`Element`] tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementDescription {
    pub kind: String,
    pub slots: BTreeMap<TextSlot, String>,
    pub read_only: Vec<TextSlot>,
    pub single_slot: bool,
    pub layout: Layout,
    pub children: Vec<ElementDescription>,
    pub auxiliary: Vec<ElementDescription>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn test_set_text_respects_writability() {
        let element = Element::new("Entry")
            .with_text(TextSlot::Placeholder, "Name")
            .with_read_only(TextSlot::Title, "Fixed");

        expect_that!(element.set_text(TextSlot::Placeholder, "Név"), ok(anything()));
        expect_that!(element.value(TextSlot::Placeholder), some(eq("Név")));
        assert_eq!(
            element.set_text(TextSlot::Title, "x"),
            Err(PropertyError::ReadOnly(TextSlot::Title))
        );
        assert_eq!(
            element.set_text(TextSlot::Label, "x"),
            Err(PropertyError::Missing(TextSlot::Label))
        );
        expect_that!(element.value(TextSlot::Title), some(eq("Fixed")));
    }

    #[googletest::test]
    fn test_layout_maps_to_shape() {
        let child = Element::new("Label").with_text(TextSlot::Text, "OK").into_rc();
        let single = Element::new("ContentView").with_layout(Layout::Single).with_child(child);

        let shape = single.shape();

        expect_that!(matches!(shape, NodeShape::SingleChild(Some(_))), eq(true));
        expect_that!(matches!(Element::new("Empty").shape(), NodeShape::Leaf), eq(true));
    }

    #[googletest::test]
    fn test_description_round_trip_through_json() {
        let json = r#"{
            "kind": "Page",
            "slots": { "title": "Settings" },
            "layout": "multi",
            "children": [
                { "kind": "Entry", "slots": { "placeholder": "Name", "text": "" }, "readOnly": ["text"] }
            ],
            "auxiliary": [ { "kind": "ToolbarItem", "slots": { "text": "Save" } } ]
        }"#;
        let description: ElementDescription = serde_json::from_str(json).unwrap();

        let element = Element::from_description(description.clone());

        expect_that!(element.value(TextSlot::Title), some(eq("Settings")));
        expect_that!(element.children().len(), eq(1));
        expect_that!(element.auxiliary().len(), eq(1));
        assert_eq!(element.describe(), description);
    }
}
