//! Translation key and the immutable multi-language table.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::language::Language;

/// Canonical lookup key: a language and the English text of the concept.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TranslationKey {
    language: Language,
    identifier: String,
}

impl TranslationKey {
    #[must_use]
    pub fn new(language: Language, identifier: impl Into<String>) -> Self {
        Self { language, identifier: identifier.into() }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// A value was inserted twice under the same key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Variant '{value}' already present for '{}' in {}", key.identifier, key.language)]
pub struct DuplicateVariant {
    pub key: TranslationKey,
    pub value: String,
}

/// Read-only dictionary from [`TranslationKey`] to its ordered variants.
///
/// Every key maps to at least one variant; index 0 is the default one.
/// Built once through [`TableBuilder`] and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: BTreeMap<TranslationKey, Vec<String>>,
}

impl TranslationTable {
    /// Variants stored under `key`.
    #[must_use]
    pub fn get(&self, key: &TranslationKey) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Variants stored for `identifier` in `language`.
    #[must_use]
    pub fn variants(&self, language: Language, identifier: &str) -> Option<&[String]> {
        self.get(&TranslationKey::new(language, identifier))
    }

    /// Iterates over `(identifier, variants)` of one language in identifier order.
    pub fn entries_for(&self, language: Language) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .range(TranslationKey::new(language, String::new())..)
            .take_while(move |(key, _)| key.language == language)
            .map(|(key, variants)| (key.identifier.as_str(), variants.as_slice()))
    }

    /// Iterates over every entry in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&TranslationKey, &[String])> {
        self.entries.iter().map(|(key, variants)| (key, variants.as_slice()))
    }

    /// Languages that have at least one entry, in enum order.
    #[must_use]
    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.entries.keys().map(|key| key.language).collect();
        languages.dedup();
        languages
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accumulates variants while enforcing the table invariants.
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    entries: BTreeMap<TranslationKey, Vec<String>>,
}

impl TableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` as the next variant of `(language, identifier)`.
    ///
    /// # Errors
    /// Returns [`DuplicateVariant`] if the value is already stored under the key.
    pub fn add(
        &mut self,
        language: Language,
        identifier: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, DuplicateVariant> {
        let key = TranslationKey::new(language, identifier);
        let value = value.into();
        let variants = self.entries.entry(key.clone()).or_default();
        if variants.contains(&value) {
            return Err(DuplicateVariant { key, value });
        }
        variants.push(value);
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> TranslationTable {
        TranslationTable { entries: self.entries }
    }
}
