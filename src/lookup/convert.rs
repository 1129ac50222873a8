//! Conversions for values bound into UI text.

use std::fmt::Display;

use super::Lookup;
use crate::language::Language;

/// A value with a human readable description, typically an enum member.
///
/// The description is the canonical identifier it is translated through.
pub trait Described {
    fn description(&self) -> &str;
}

impl Lookup {
    /// Translate an arbitrary bound value through its text rendering.
    ///
    /// `None` and values rendering to an empty string produce an empty string.
    #[must_use]
    pub fn convert_value(&self, language: Language, value: Option<&dyn Display>) -> String {
        let Some(value) = value else {
            return String::new();
        };
        let key = value.to_string();
        if key.is_empty() {
            return key;
        }
        self.resolve(language, &key).to_string()
    }

    /// Translate a value through its [`Described::description`].
    #[must_use]
    pub fn convert_described<'a, D>(&'a self, language: Language, value: &'a D) -> &'a str
    where
        D: Described + ?Sized,
    {
        self.resolve(language, value.description())
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;
    use crate::test_utils::sample_lookup;

    #[derive(Debug, Clone, Copy)]
    enum Answer {
        Accept,
        Reject,
    }

    impl Described for Answer {
        fn description(&self) -> &str {
            match self {
                Self::Accept => "OK",
                Self::Reject => "Cancel",
            }
        }
    }

    #[googletest::test]
    fn test_convert_value() {
        let lookup = sample_lookup();

        expect_that!(lookup.convert_value(Language::Hungarian, Some(&"OK")), eq("Rendben"));
        expect_that!(lookup.convert_value(Language::Hungarian, Some(&42)), eq("42"));
        expect_that!(lookup.convert_value(Language::Hungarian, Some(&"")), eq(""));
        expect_that!(lookup.convert_value(Language::Hungarian, None), eq(""));
    }

    #[googletest::test]
    fn test_convert_described() {
        let lookup = sample_lookup();

        expect_that!(lookup.convert_described(Language::Hungarian, &Answer::Accept), eq("Rendben"));
        expect_that!(lookup.convert_described(Language::German, &Answer::Reject), eq("Abbrechen"));
    }
}
