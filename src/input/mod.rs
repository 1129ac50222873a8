//! Table sources: the sheet model, readers and the table loader.
mod error;
mod json;
mod loader;
mod sheet;

pub use error::LoadError;
pub use json::JsonSheetReader;
pub use loader::{
    DEFAULT_TEMP_EXTENSION,
    TableLoader,
    build_table,
    normalize_cell,
};
pub use sheet::{
    Sheet,
    SheetReader,
    SheetSet,
};
