//! Reads project settings from disk.

use std::path::Path;

use super::{
    ConfigError,
    TranslatorSettings,
};

/// Name of the settings file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".ui-i18n.json";

/// Loads `.ui-i18n.json` from `root`.
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and parsed
/// - `Ok(None)`: there is no settings file
///
/// # Errors
/// - The file could not be read
/// - The file is not valid settings JSON
pub fn load_from_dir(root: &Path) -> Result<Option<TranslatorSettings>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: TranslatorSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
