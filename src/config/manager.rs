//! Holds the active settings of a project.

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    TranslatorSettings,
    loader,
};
use crate::language::Language;
use crate::locale;

#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    current_settings: TranslatorSettings,
    root: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the settings of the project at `root`, or the defaults without one.
    ///
    /// The current settings are kept if loading or validation fails.
    ///
    /// # Errors
    /// - The settings file could not be read or parsed
    /// - The settings are invalid
    pub fn load_settings(&mut self, root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for project: {:?}", root);

        let settings = if let Some(root) = &root {
            loader::load_from_dir(root)?.map_or_else(TranslatorSettings::default, |loaded| {
                tracing::debug!("Loaded project settings: {:?}", loaded);
                loaded
            })
        } else {
            TranslatorSettings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.root = root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// Replaces the settings after validating them.
    ///
    /// # Errors
    /// Returns the validation errors; the current settings are kept.
    pub fn update_settings(&mut self, new_settings: TranslatorSettings) -> Result<(), ConfigError> {
        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &TranslatorSettings {
        &self.current_settings
    }

    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// The configured default language, or the one detected from the environment.
    #[must_use]
    pub fn default_language(&self) -> Language {
        self.current_settings.default_language.unwrap_or_else(locale::detect_language)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::CONFIG_FILE_NAME;

    #[rstest]
    fn test_new_creates_default_settings() {
        let manager = ConfigManager::new();

        assert_that!(manager.get_settings().table_file_pattern, eq("**/Languages.json"));
        assert_that!(manager.root(), none());
    }

    #[rstest]
    fn test_load_settings_without_root() {
        let mut manager = ConfigManager::new();

        let result = manager.load_settings(None);

        assert_that!(result, ok(anything()));
        assert_eq!(manager.get_settings(), &TranslatorSettings::default());
    }

    #[rstest]
    fn test_load_settings_with_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"defaultLanguage": "German"}"#)
            .unwrap();

        let mut manager = ConfigManager::new();
        manager.load_settings(Some(temp_dir.path().to_path_buf())).unwrap();

        assert_that!(manager.get_settings().default_language, some(eq(Language::German)));
        assert_that!(manager.default_language(), eq(Language::German));
        assert_that!(manager.root() == Some(temp_dir.path()), eq(true));
    }

    #[rstest]
    fn test_load_settings_invalid_file_keeps_previous() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"tableFilePattern": ""}"#).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert_that!(manager.get_settings().table_file_pattern, eq("**/Languages.json"));
        assert_that!(manager.root(), none());
    }

    #[rstest]
    fn test_update_settings_valid() {
        let mut manager = ConfigManager::new();
        let new_settings = TranslatorSettings {
            default_language: Some(Language::French),
            ..TranslatorSettings::default()
        };

        manager.update_settings(new_settings).unwrap();

        assert_that!(manager.default_language(), eq(Language::French));
    }

    #[rstest]
    fn test_update_settings_invalid() {
        let mut manager = ConfigManager::new();
        let new_settings =
            TranslatorSettings { temp_file_extension: String::new(), ..TranslatorSettings::default() };

        let result = manager.update_settings(new_settings);

        assert_that!(result, err(anything()));
        assert_that!(manager.get_settings().temp_file_extension, eq("json"));
    }
}
