//! Default display language detection.

use crate::language::{
    LANGUAGE_ENV_VAR,
    Language,
};

/// Detect the display language for this process.
///
/// Checks `UI_I18N_LANG`, then the system locale, and falls back to the base
/// language when neither names a supported language.
#[must_use]
pub fn detect_language() -> Language {
    let override_tag = std::env::var(LANGUAGE_ENV_VAR).ok();
    let system_tag = sys_locale::get_locale();
    language_from_candidates([override_tag.as_deref(), system_tag.as_deref()])
}

/// Returns the first candidate tag that names a supported language.
///
/// Unrecognized or missing tags fall through to the next candidate.
pub fn language_from_candidates<'a>(
    candidates: impl IntoIterator<Item = Option<&'a str>>,
) -> Language {
    for tag in candidates.into_iter().flatten() {
        if let Some(language) = Language::from_locale_tag(tag) {
            tracing::debug!(tag, %language, "Detected display language");
            return language;
        }
        tracing::debug!(tag, "Ignoring unsupported locale");
    }

    Language::BASE
}
