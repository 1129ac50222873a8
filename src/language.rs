//! Supported display languages.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Environment variable that overrides the detected display language.
pub const LANGUAGE_ENV_VAR: &str = "UI_I18N_LANG";

/// A human language the translation table can hold.
///
/// The literal variant name (e.g. `Hungarian`) is the sheet name used by table
/// sources. `English` is the base language: its text is the canonical identifier
/// of every translatable concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Hungarian,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Polish,
    Czech,
    Slovak,
    Romanian,
    Croatian,
    Serbian,
    Slovenian,
    Bulgarian,
    Russian,
    Ukrainian,
    Greek,
    Turkish,
    Swedish,
    Norwegian,
    Danish,
    Finnish,
    Japanese,
    Chinese,
    Korean,
}

/// Returned when a string is not the literal name of a [`Language`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown language '{0}'")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// The language whose text serves as canonical identifier.
    pub const BASE: Self = Self::English;

    /// Every supported language, base language first.
    pub const ALL: [Self; 27] = [
        Self::English,
        Self::Hungarian,
        Self::German,
        Self::French,
        Self::Spanish,
        Self::Italian,
        Self::Portuguese,
        Self::Dutch,
        Self::Polish,
        Self::Czech,
        Self::Slovak,
        Self::Romanian,
        Self::Croatian,
        Self::Serbian,
        Self::Slovenian,
        Self::Bulgarian,
        Self::Russian,
        Self::Ukrainian,
        Self::Greek,
        Self::Turkish,
        Self::Swedish,
        Self::Norwegian,
        Self::Danish,
        Self::Finnish,
        Self::Japanese,
        Self::Chinese,
        Self::Korean,
    ];

    /// Literal English name, also the sheet name in table sources.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hungarian => "Hungarian",
            Self::German => "German",
            Self::French => "French",
            Self::Spanish => "Spanish",
            Self::Italian => "Italian",
            Self::Portuguese => "Portuguese",
            Self::Dutch => "Dutch",
            Self::Polish => "Polish",
            Self::Czech => "Czech",
            Self::Slovak => "Slovak",
            Self::Romanian => "Romanian",
            Self::Croatian => "Croatian",
            Self::Serbian => "Serbian",
            Self::Slovenian => "Slovenian",
            Self::Bulgarian => "Bulgarian",
            Self::Russian => "Russian",
            Self::Ukrainian => "Ukrainian",
            Self::Greek => "Greek",
            Self::Turkish => "Turkish",
            Self::Swedish => "Swedish",
            Self::Norwegian => "Norwegian",
            Self::Danish => "Danish",
            Self::Finnish => "Finnish",
            Self::Japanese => "Japanese",
            Self::Chinese => "Chinese",
            Self::Korean => "Korean",
        }
    }

    /// ISO 639-1 code.
    #[must_use]
    pub const fn iso_code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hungarian => "hu",
            Self::German => "de",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::Italian => "it",
            Self::Portuguese => "pt",
            Self::Dutch => "nl",
            Self::Polish => "pl",
            Self::Czech => "cs",
            Self::Slovak => "sk",
            Self::Romanian => "ro",
            Self::Croatian => "hr",
            Self::Serbian => "sr",
            Self::Slovenian => "sl",
            Self::Bulgarian => "bg",
            Self::Russian => "ru",
            Self::Ukrainian => "uk",
            Self::Greek => "el",
            Self::Turkish => "tr",
            Self::Swedish => "sv",
            Self::Norwegian => "nb",
            Self::Danish => "da",
            Self::Finnish => "fi",
            Self::Japanese => "ja",
            Self::Chinese => "zh",
            Self::Korean => "ko",
        }
    }

    /// Returns true for the base language.
    #[must_use]
    pub const fn is_base(self) -> bool {
        matches!(self, Self::English)
    }

    /// Detect a language from a locale tag.
    ///
    /// Accepts POSIX locales (`hu_HU.UTF-8`, `de_DE@euro`), BCP 47 tags
    /// (`hu-HU`, `zh-Hant-TW`), bare codes (`hu`) and culture display names whose
    /// first word is a language name (`Hungarian (Hungary)`).
    ///
    /// # Examples
    /// - `hu_HU.UTF-8` → `Hungarian`
    /// - `nn-NO` → `Norwegian`
    /// - `German (Austria)` → `German`
    /// - `C` → `None`
    #[must_use]
    pub fn from_locale_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        let first_word = tag.split_whitespace().next()?;
        if let Ok(language) = first_word.parse::<Self>() {
            return Some(language);
        }

        let normalized = normalize_locale_tag(first_word);
        let primary = normalized.split('_').next()?;
        match primary {
            // Norwegian Bokmål, Nynorsk and the macro language share one sheet.
            "no" | "nn" => Some(Self::Norwegian),
            _ => Self::ALL.into_iter().find(|language| language.iso_code() == primary),
        }
    }
}

/// Lowercases the tag, drops encoding and modifier suffixes and replaces `-` with `_`.
fn normalize_locale_tag(tag: &str) -> String {
    let tag = tag.split(['.', '@']).next().unwrap_or(tag);
    tag.to_lowercase().replace('-', "_")
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.name() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("English", Some(Language::English))]
    #[case("Hungarian", Some(Language::Hungarian))]
    #[case("hungarian", None)]
    #[case(" Hungarian", None)]
    #[case("Klingon", None)]
    fn test_from_str_is_exact(#[case] input: &str, #[case] expected: Option<Language>) {
        assert_eq!(input.parse::<Language>().ok(), expected);
    }

    #[rstest]
    #[case("hu_HU.UTF-8", Some(Language::Hungarian))]
    #[case("hu-HU", Some(Language::Hungarian))]
    #[case("hu", Some(Language::Hungarian))]
    #[case("de_DE@euro", Some(Language::German))]
    #[case("zh-Hant-TW", Some(Language::Chinese))]
    #[case("nn-NO", Some(Language::Norwegian))]
    #[case("nb_NO", Some(Language::Norwegian))]
    #[case("EN-us", Some(Language::English))]
    #[case("German (Austria)", Some(Language::German))]
    #[case("C", None)]
    #[case("POSIX", None)]
    #[case("", None)]
    fn test_from_locale_tag(#[case] tag: &str, #[case] expected: Option<Language>) {
        assert_eq!(Language::from_locale_tag(tag), expected);
    }

    #[googletest::test]
    fn test_names_round_trip_through_from_str() {
        for language in Language::ALL {
            assert_eq!(language.name().parse::<Language>(), Ok(language));
            expect_that!(language.to_string(), eq(language.name()));
        }
    }

    #[googletest::test]
    fn test_iso_codes_are_unique() {
        let mut codes: Vec<&str> = Language::ALL.iter().map(|l| l.iso_code()).collect();
        codes.sort_unstable();
        codes.dedup();

        expect_that!(codes.len(), eq(Language::ALL.len()));
    }

    #[googletest::test]
    fn test_only_english_is_base() {
        expect_that!(Language::BASE, eq(Language::English));
        expect_that!(Language::ALL.iter().filter(|l| l.is_base()).count(), eq(1));
    }

    #[googletest::test]
    fn test_unknown_language_error_message() {
        let err = "Elvish".parse::<Language>().unwrap_err();

        expect_that!(err.to_string(), eq("Unknown language 'Elvish'"));
    }
}
