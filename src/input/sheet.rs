//! Tabular source model and the reader seam.

use std::io::Read;
use std::path::Path;

use super::LoadError;

/// One sheet of a tabular source: a name and one optional text cell per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    name: String,
    rows: Vec<Option<String>>,
}

impl Sheet {
    #[must_use]
    pub fn new(name: impl Into<String>, rows: Vec<Option<String>>) -> Self {
        Self { name: name.into(), rows }
    }

    /// Convenience constructor where every row has a cell.
    #[must_use]
    pub fn from_cells<S: Into<String>>(name: impl Into<String>, cells: impl IntoIterator<Item = S>) -> Self {
        Self::new(name, cells.into_iter().map(|cell| Some(cell.into())).collect())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cell text at `index`; `None` for a missing cell or a row past the end.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.rows.get(index).and_then(Option::as_deref)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Named sheets in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetSet {
    sheets: Vec<Sheet>,
}

impl SheetSet {
    #[must_use]
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn push(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    /// First sheet with the given name.
    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

/// Parses a tabular file format into a [`SheetSet`].
pub trait SheetReader {
    /// Reads the sheets of the file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn read_path(&self, path: &Path) -> Result<SheetSet, LoadError>;

    /// Reads the sheets directly from a byte stream.
    ///
    /// Returns `Ok(None)` when the reader only works on files; the loader then
    /// goes through a temporary file.
    ///
    /// # Errors
    /// Returns an error if the stream cannot be read or parsed.
    fn read_stream(&self, _stream: &mut dyn Read) -> Result<Option<SheetSet>, LoadError> {
        Ok(None)
    }
}
