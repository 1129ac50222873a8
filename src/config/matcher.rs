//! Locates translation table files under a project root.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;

use super::TranslatorSettings;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Invalid table file pattern '{pattern}': {source}")]
    InvalidTablePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Matches table files against `tableFilePattern` and `excludePatterns`.
#[derive(Debug, Clone)]
pub struct TableMatcher {
    table_set: GlobSet,
    exclude_set: GlobSet,
}

impl TableMatcher {
    /// # Errors
    /// Returns an error if a pattern is not a valid glob.
    pub fn new(settings: &TranslatorSettings) -> Result<Self, DiscoveryError> {
        let table_patterns = std::slice::from_ref(&settings.table_file_pattern);
        let table_set = Self::build_glob_set(table_patterns, |pattern, source| {
            DiscoveryError::InvalidTablePattern { pattern, source }
        })?;

        let exclude_set = Self::build_glob_set(&settings.exclude_patterns, |pattern, source| {
            DiscoveryError::InvalidExcludePattern { pattern, source }
        })?;

        Ok(Self { table_set, exclude_set })
    }

    fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, DiscoveryError>
    where
        F: Fn(String, globset::Error) -> DiscoveryError,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| make_error(pattern.clone(), e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    /// Returns true if the path, relative to the project root, is a table file.
    #[must_use]
    pub fn is_table_file(&self, relative_path: &Path) -> bool {
        self.table_set.is_match(relative_path) && !self.exclude_set.is_match(relative_path)
    }

    /// Every table file under `root`, sorted by path.
    ///
    /// Honours `.gitignore`; unreadable entries are skipped.
    #[must_use]
    pub fn find_table_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut found = Vec::new();

        for result in WalkBuilder::new(root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false)
            .build()
        {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(?err, "Failed to read directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            let Ok(relative_path) = path.strip_prefix(root) else {
                continue;
            };

            if self.is_table_file(relative_path) {
                found.push(path.to_path_buf());
            }
        }

        found.sort();
        tracing::debug!(count = found.len(), "Discovered table files under {:?}", root);
        found
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

    fn settings(table: &str, exclude: &[&str]) -> TranslatorSettings {
        TranslatorSettings {
            table_file_pattern: table.to_string(),
            exclude_patterns: exclude.iter().copied().map(String::from).collect(),
            ..TranslatorSettings::default()
        }
    }

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "{}").unwrap();
    }

    #[rstest]
    #[case("Languages.json", true)]
    #[case("app/resources/Languages.json", true)]
    #[case("target/debug/Languages.json", false)]
    #[case("app/Strings.json", false)]
    fn is_table_file_with_default_patterns(#[case] path: &str, #[case] expected: bool) {
        let matcher = TableMatcher::new(&TranslatorSettings::default()).unwrap();

        assert_that!(matcher.is_table_file(Path::new(path)), eq(expected));
    }

    #[rstest]
    fn find_table_files_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "ui/b/Languages.json");
        touch(root, "ui/a/Languages.json");
        touch(root, "target/Languages.json");
        touch(root, "ui/a/Other.json");

        let matcher = TableMatcher::new(&TranslatorSettings::default()).unwrap();
        let found = matcher.find_table_files(root);

        assert_eq!(found, [root.join("ui/a/Languages.json"), root.join("ui/b/Languages.json")]);
    }

    #[rstest]
    fn find_table_files_with_custom_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "i18n/strings.json");
        touch(root, "i18n/legacy/strings.json");

        let matcher = TableMatcher::new(&settings("i18n/**/*.json", &["i18n/legacy/**"])).unwrap();

        assert_eq!(matcher.find_table_files(root), [root.join("i18n/strings.json")]);
    }

    #[rstest]
    fn find_table_files_empty_root() {
        let temp_dir = TempDir::new().unwrap();
        let matcher = TableMatcher::new(&TranslatorSettings::default()).unwrap();

        assert!(matcher.find_table_files(temp_dir.path()).is_empty());
    }

    #[rstest]
    fn new_with_invalid_table_pattern() {
        let result = TableMatcher::new(&settings("**/*.{json", &[]));

        assert!(matches!(result, Err(DiscoveryError::InvalidTablePattern { .. })));
    }

    #[rstest]
    fn new_with_invalid_exclude_pattern() {
        let result = TableMatcher::new(&settings("**/*.json", &["[invalid"]));

        assert!(matches!(result, Err(DiscoveryError::InvalidExcludePattern { .. })));
    }
}
