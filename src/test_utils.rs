//! Shared fixtures for unit tests.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use crate::language::Language;
use crate::lookup::Lookup;
use crate::table::{
    TableBuilder,
    TranslationTable,
};
use crate::tree::{
    PropertyError,
    TextSlot,
    UiNode,
};

/// English, Hungarian and a few German entries.
///
/// `Open` has two variants in English and Hungarian; `Save` exists only in
/// English.
pub(crate) fn sample_table() -> TranslationTable {
    let rows: &[(Language, &str, &str)] = &[
        (Language::English, "OK", "OK"),
        (Language::English, "Cancel", "Cancel"),
        (Language::English, "Close", "Close"),
        (Language::English, "Save", "Save"),
        (Language::English, "Open", "Open"),
        (Language::English, "Open", "Open…"),
        (Language::English, "{0} files", "{0} files"),
        (Language::English, "Settings", "Settings"),
        (Language::English, "Name", "Name"),
        (Language::English, "Search", "Search"),
        (Language::English, "Help", "Help"),
        (Language::English, "Items", "Items"),
        (Language::English, "No items", "No items"),
        (Language::Hungarian, "OK", "Rendben"),
        (Language::Hungarian, "Cancel", "Mégse"),
        (Language::Hungarian, "Close", "Bezárás"),
        (Language::Hungarian, "Open", "Megnyitás"),
        (Language::Hungarian, "Open", "Nyitás"),
        (Language::Hungarian, "{0} files", "{0} fájl"),
        (Language::Hungarian, "Settings", "Beállítások"),
        (Language::Hungarian, "Name", "Név"),
        (Language::Hungarian, "Search", "Keresés"),
        (Language::Hungarian, "Help", "Súgó"),
        (Language::Hungarian, "Items", "Elemek"),
        (Language::Hungarian, "No items", "Nincs elem"),
        (Language::German, "Cancel", "Abbrechen"),
        (Language::German, "Settings", "Einstellungen"),
    ];

    let mut builder = TableBuilder::new();
    for (language, identifier, value) in rows {
        builder.add(*language, *identifier, *value).unwrap();
    }
    builder.build()
}

pub(crate) fn sample_lookup() -> Lookup {
    Lookup::new(sample_table())
}

/// A node whose every property access fails.
#[derive(Debug, Default)]
pub(crate) struct BrokenNode;

impl UiNode for BrokenNode {
    fn text(&self, slot: TextSlot) -> Result<Option<String>, PropertyError> {
        Err(PropertyError::Unavailable { slot, reason: "getter failed".to_string() })
    }

    fn set_text(&self, slot: TextSlot, _value: &str) -> Result<(), PropertyError> {
        Err(PropertyError::Unavailable { slot, reason: "setter failed".to_string() })
    }
}
