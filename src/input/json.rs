//! JSON sheet document reader.
//!
//! ```json
//! {
//!   "sheets": [
//!     { "name": "English", "rows": ["OK", "Cancel"] },
//!     { "name": "Hungarian", "rows": ["Rendben", null] }
//!   ]
//! }
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::{
    LoadError,
    Sheet,
    SheetReader,
    SheetSet,
};

/// Top level of a sheet document.
#[derive(Debug, Deserialize)]
struct SheetDocument {
    sheets: Vec<SheetRecord>,
}

#[derive(Debug, Deserialize)]
struct SheetRecord {
    name: String,
    #[serde(default)]
    rows: Vec<Value>,
}

impl From<SheetRecord> for Sheet {
    fn from(record: SheetRecord) -> Self {
        // Non-text cells read as missing, like spreadsheet readers report them.
        let rows = record.rows.into_iter().map(|cell| cell.as_str().map(str::to_string)).collect();
        Self::new(record.name, rows)
    }
}

/// Reads sheet documents from files and streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSheetReader;

impl JsonSheetReader {
    /// Parses a sheet document from text.
    ///
    /// # Errors
    /// Returns [`LoadError::Json`] if the text is not a sheet document.
    pub fn parse(text: &str) -> Result<SheetSet, LoadError> {
        let document: SheetDocument = serde_json::from_str(text)?;
        Ok(Self::into_sheets(document))
    }

    fn into_sheets(document: SheetDocument) -> SheetSet {
        SheetSet::new(document.sheets.into_iter().map(Sheet::from).collect())
    }
}

impl SheetReader for JsonSheetReader {
    fn read_path(&self, path: &Path) -> Result<SheetSet, LoadError> {
        tracing::debug!("Reading sheet document from: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    fn read_stream(&self, stream: &mut dyn Read) -> Result<Option<SheetSet>, LoadError> {
        let document: SheetDocument = serde_json::from_reader(stream)?;
        Ok(Some(Self::into_sheets(document)))
    }
}
