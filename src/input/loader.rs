//! Builds a [`TranslationTable`] from row-aligned sheets.

use std::collections::BTreeSet;
use std::io::{
    self,
    Read,
};
use std::path::Path;

use super::{
    LoadError,
    SheetReader,
    SheetSet,
};
use crate::language::Language;
use crate::table::{
    TableBuilder,
    TranslationTable,
};

/// Default extension of the temporary file used for stream fallback.
pub const DEFAULT_TEMP_EXTENSION: &str = "json";

/// Turns the literal escape sequences `\r`, `\n` and `\t` into control characters.
#[must_use]
pub fn normalize_cell(raw: &str) -> String {
    raw.replace("\\r", "\r").replace("\\n", "\n").replace("\\t", "\t")
}

/// Build a translation table from sheets aligned row by row with the base sheet.
///
/// Row `i` of every sheet translates row `i` of the `English` sheet, whose text
/// becomes the canonical identifier. Empty cells are skipped.
///
/// # Errors
/// - [`LoadError::UnknownLanguage`] for a sheet name that is not a language
/// - [`LoadError::MissingBaseSheet`] when there is no `English` sheet
/// - [`LoadError::DuplicateVariant`] when a value repeats under one key
pub fn build_table(sheets: &SheetSet) -> Result<TranslationTable, LoadError> {
    let base_name = Language::BASE.name();
    let base = sheets
        .sheet(base_name)
        .ok_or_else(|| LoadError::MissingBaseSheet { sheet: base_name.to_string() })?;

    let mut builder = TableBuilder::new();
    let mut seen = BTreeSet::new();
    for sheet in sheets.iter() {
        let language: Language = sheet
            .name()
            .parse()
            .map_err(|_| LoadError::UnknownLanguage { sheet: sheet.name().to_string() })?;
        if !seen.insert(language) {
            return Err(LoadError::Malformed(format!(
                "sheet '{}' appears more than once",
                sheet.name()
            )));
        }
        tracing::debug!(sheet = sheet.name(), rows = sheet.row_count(), "Loading sheet");

        for index in 0..sheet.row_count() {
            let value = normalize_cell(sheet.cell(index).unwrap_or_default());
            if value.is_empty() {
                continue;
            }

            let identifier = normalize_cell(base.cell(index).unwrap_or_default());
            if identifier.is_empty() {
                tracing::warn!(
                    sheet = sheet.name(),
                    row = index + 1,
                    "Skipping row without a canonical identifier"
                );
                continue;
            }

            builder.add(language, identifier, value.clone()).map_err(|source| {
                LoadError::DuplicateVariant {
                    value,
                    sheet: sheet.name().to_string(),
                    row: index + 1,
                    source,
                }
            })?;
        }
    }

    let table = builder.build();
    tracing::info!(entries = table.len(), sheets = sheets.len(), "Translation table loaded");
    Ok(table)
}

/// Loads translation tables through a [`SheetReader`].
#[derive(Debug, Clone)]
pub struct TableLoader<R> {
    reader: R,
    temp_extension: String,
}

impl<R: SheetReader> TableLoader<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self { reader, temp_extension: DEFAULT_TEMP_EXTENSION.to_string() }
    }

    /// Sets the extension given to the temporary file of the stream fallback.
    /// A leading dot is ignored.
    #[must_use]
    pub fn with_temp_extension(mut self, extension: &str) -> Self {
        extension.trim_start_matches('.').clone_into(&mut self.temp_extension);
        self
    }

    /// Loads the table stored in the file at `path`.
    ///
    /// # Errors
    /// Returns an error if reading fails or the data violates the table invariants.
    pub fn load_path(&self, path: &Path) -> Result<TranslationTable, LoadError> {
        let sheets = self.reader.read_path(path)?;
        build_table(&sheets)
    }

    /// Loads the table from a byte stream positioned at the start of the data.
    ///
    /// Readers without stream support get the content through a temporary file,
    /// which is removed afterwards on a best-effort basis.
    ///
    /// # Errors
    /// Returns an error if reading fails or the data violates the table invariants.
    pub fn load_stream(&self, stream: &mut dyn Read) -> Result<TranslationTable, LoadError> {
        if let Some(sheets) = self.reader.read_stream(stream)? {
            return build_table(&sheets);
        }

        tracing::debug!("Reader has no stream support, loading through a temporary file");
        let mut temp_file = tempfile::Builder::new()
            .prefix("ui-i18n-")
            .suffix(&format!(".{}", self.temp_extension))
            .tempfile()?;
        io::copy(stream, &mut temp_file)?;

        // The path guard deletes the file on drop, including while unwinding.
        let temp_path = temp_file.into_temp_path();
        let result = self.load_path(&temp_path);
        if let Err(e) = temp_path.close() {
            tracing::warn!("Failed to delete temporary table file: {}", e);
        }
        result
    }
}
