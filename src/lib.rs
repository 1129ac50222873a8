//! ui-i18n
//!
//! Runtime translation of UI text: a multi-language translation table built
//! from tabular sources, a lookup engine over it, and a tree translator that
//! rewrites the display text of a UI tree in place and can restore it.
//!
//! ```
//! use ui_i18n::{Element, Language, Lookup, NodeRef, TableBuilder, TextSlot, TreeTranslator};
//!
//! let mut builder = TableBuilder::new();
//! builder.add(Language::English, "OK", "OK")?;
//! builder.add(Language::Hungarian, "OK", "Rendben")?;
//! let lookup = Lookup::new(builder.build());
//!
//! let button = Element::new("Button").with_text(TextSlot::Text, "OK").into_rc();
//! let root: NodeRef = button.clone();
//!
//! let captures = TreeTranslator::new(&lookup, Language::Hungarian).translate(&root);
//! assert_eq!(button.value(TextSlot::Text).as_deref(), Some("Rendben"));
//!
//! let _report = captures.restore();
//! assert_eq!(button.value(TextSlot::Text).as_deref(), Some("OK"));
//! # Ok::<(), ui_i18n::table::DuplicateVariant>(())
//! ```

pub mod config;
pub mod input;
pub mod language;
pub mod locale;
pub mod lookup;
pub mod table;
pub mod tree;

mod test_utils;

pub use input::{
    JsonSheetReader,
    LoadError,
    TableLoader,
};
pub use language::Language;
pub use lookup::{
    Localizer,
    Lookup,
    LookupError,
};
pub use table::{
    TableBuilder,
    TranslationTable,
};
pub use tree::{
    Element,
    NodeRef,
    TextSlot,
    TreeTranslator,
    restore,
};
