use thiserror::Error;

use crate::table::DuplicateVariant;

/// Errors raised while building a translation table from a source.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A sheet name is not the literal name of a supported language.
    #[error("Sheet '{sheet}' does not name a known language")]
    UnknownLanguage { sheet: String },

    /// The source has no base-language sheet to take identifiers from.
    #[error("Source has no '{sheet}' sheet to read canonical identifiers from")]
    MissingBaseSheet { sheet: String },

    /// The source could be parsed but does not have the expected shape.
    #[error("Malformed table source: {0}")]
    Malformed(String),

    /// The same value appears twice under one key.
    #[error("Element already present in dictionary: {value}, Sheet: {sheet}, Row: {row}")]
    DuplicateVariant {
        value: String,
        sheet: String,
        /// 1-based row number.
        row: usize,
        #[source]
        source: DuplicateVariant,
    },

    #[error("Failed to read table source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse table source: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    /// Returns true for errors caused by the translation data itself rather
    /// than by the shape of the source.
    #[must_use]
    pub const fn is_data_integrity(&self) -> bool {
        matches!(self, Self::DuplicateVariant { .. })
    }
}
