//! Project configuration: settings, the `.ui-i18n.json` loader and table discovery.
mod loader;
mod manager;
mod matcher;
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_from_dir,
};
pub use manager::ConfigManager;
pub use matcher::{
    DiscoveryError,
    TableMatcher,
};
pub use types::{
    ConfigError,
    TranslatorSettings,
    ValidationError,
};
