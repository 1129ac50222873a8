//! Lookup engine: resolves canonical identifiers to display strings.
mod convert;
mod format;

use std::fmt::Display;
use std::sync::Arc;

use thiserror::Error;

pub use convert::Described;
pub use format::{
    FormatError,
    format_positional,
};

use crate::language::Language;
use crate::table::TranslationTable;

/// Errors a caller can cause while resolving.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Variant {index} requested for '{identifier}' in {language}, only {available} available")]
    VariantOutOfRange { language: Language, identifier: String, index: usize, available: usize },
}

/// Resolves identifiers against a shared, read-only [`TranslationTable`].
///
/// Cheap to clone; clones share the table.
#[derive(Debug, Clone, Default)]
pub struct Lookup {
    table: Arc<TranslationTable>,
}

impl Lookup {
    #[must_use]
    pub fn new(table: TranslationTable) -> Self {
        Self { table: Arc::new(table) }
    }

    #[must_use]
    pub const fn from_shared(table: Arc<TranslationTable>) -> Self {
        Self { table }
    }

    #[must_use]
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Default variant of `identifier` in `language`.
    ///
    /// Falls back to the base language, then to `identifier` itself, so a
    /// missing translation shows the canonical text instead of failing.
    #[must_use]
    pub fn resolve<'a>(&'a self, language: Language, identifier: &'a str) -> &'a str {
        self.variants_with_fallback(language, identifier)
            .and_then(|(_, variants)| variants.first())
            .map_or(identifier, String::as_str)
    }

    /// Variant `index` of `identifier` in `language`, with the same fallback as
    /// [`Lookup::resolve`].
    ///
    /// # Errors
    /// Returns [`LookupError::VariantOutOfRange`] if the entry found has fewer
    /// than `index + 1` variants.
    pub fn resolve_variant<'a>(
        &'a self,
        language: Language,
        identifier: &'a str,
        index: usize,
    ) -> Result<&'a str, LookupError> {
        let Some((found_in, variants)) = self.variants_with_fallback(language, identifier) else {
            return Ok(identifier);
        };

        variants.get(index).map(String::as_str).ok_or_else(|| LookupError::VariantOutOfRange {
            language: found_in,
            identifier: identifier.to_string(),
            index,
            available: variants.len(),
        })
    }

    /// Resolves variant `index` and substitutes `{n}` placeholders with `args`.
    ///
    /// A malformed template is logged and the resolved text is returned unformatted.
    ///
    /// # Errors
    /// Returns [`LookupError::VariantOutOfRange`] like [`Lookup::resolve_variant`].
    pub fn resolve_formatted(
        &self,
        language: Language,
        identifier: &str,
        index: usize,
        args: &[&dyn Display],
    ) -> Result<String, LookupError> {
        let template = self.resolve_variant(language, identifier, index)?;
        Ok(format_positional(template, args).unwrap_or_else(|e| {
            tracing::warn!(identifier, %language, "Failed to format translation: {}", e);
            template.to_string()
        }))
    }

    /// Translate `text` written in `from` into `to`.
    ///
    /// Searches the entries of `from` for one whose variants contain `text`
    /// exactly. Returns the canonical identifier when `to` is the base
    /// language, otherwise the identifier resolved in `to`. Returns `text`
    /// unchanged when nothing matches.
    ///
    /// When several identifiers share the text, the identifier that sorts first
    /// wins, not the first row of the source table.
    ///
    /// Scans the whole language; intended for occasional interactive use.
    #[must_use]
    pub fn translate_between<'a>(&'a self, from: Language, text: &'a str, to: Language) -> &'a str {
        let found = self
            .table
            .entries_for(from)
            .find(|(_, variants)| variants.iter().any(|variant| variant == text));

        match found {
            Some((identifier, _)) if to.is_base() => identifier,
            Some((identifier, _)) => self.resolve(to, identifier),
            None => text,
        }
    }

    /// The language and variants an identifier resolves through, if any.
    fn variants_with_fallback(
        &self,
        language: Language,
        identifier: &str,
    ) -> Option<(Language, &[String])> {
        self.table
            .variants(language, identifier)
            .map(|variants| (language, variants))
            .or_else(|| {
                self.table
                    .variants(Language::BASE, identifier)
                    .map(|variants| (Language::BASE, variants))
            })
    }
}

/// A [`Lookup`] bound to the display language chosen by the caller.
#[derive(Debug, Clone)]
pub struct Localizer {
    lookup: Lookup,
    language: Language,
}

impl Localizer {
    #[must_use]
    pub const fn new(lookup: Lookup, language: Language) -> Self {
        Self { lookup, language }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn lookup(&self) -> &Lookup {
        &self.lookup
    }

    /// Same lookup, another language.
    #[must_use]
    pub fn with_language(&self, language: Language) -> Self {
        Self { lookup: self.lookup.clone(), language }
    }

    #[must_use]
    pub fn resolve<'a>(&'a self, identifier: &'a str) -> &'a str {
        self.lookup.resolve(self.language, identifier)
    }

    /// # Errors
    /// See [`Lookup::resolve_variant`].
    pub fn resolve_variant<'a>(
        &'a self,
        identifier: &'a str,
        index: usize,
    ) -> Result<&'a str, LookupError> {
        self.lookup.resolve_variant(self.language, identifier, index)
    }

    /// # Errors
    /// See [`Lookup::resolve_formatted`].
    pub fn resolve_formatted(
        &self,
        identifier: &str,
        index: usize,
        args: &[&dyn Display],
    ) -> Result<String, LookupError> {
        self.lookup.resolve_formatted(self.language, identifier, index, args)
    }
}
