//! Positional `{n}` template substitution.

use std::fmt::Display;

use thiserror::Error;

/// A template that cannot be formatted with the given arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unclosed placeholder starting at byte {position}")]
    UnclosedPlaceholder { position: usize },

    #[error("Unmatched '}}' at byte {position}")]
    UnmatchedClosingBrace { position: usize },

    #[error("Invalid placeholder '{{{placeholder}}}'")]
    InvalidPlaceholder { placeholder: String },

    #[error("Placeholder {{{index}}} has no argument ({available} given)")]
    MissingArgument { index: usize, available: usize },
}

/// Replace `{0}`, `{1}`, ... with the matching argument.
///
/// `{{` and `}}` produce literal braces. Placeholders may repeat and appear in
/// any order; unused arguments are ignored.
///
/// # Examples
/// ```
/// use ui_i18n::lookup::format_positional;
///
/// let text = format_positional("{1} of {0} {{items}}", &[&10, &"3"]).unwrap();
/// assert_eq!(text, "3 of 10 {items}");
/// ```
///
/// # Errors
/// Returns [`FormatError`] for unbalanced braces, non-numeric placeholders and
/// indexes beyond `args`.
pub fn format_positional(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' if chars.next_if(|&(_, next)| next == '{').is_some() => output.push('{'),
            '}' if chars.next_if(|&(_, next)| next == '}').is_some() => output.push('}'),
            '}' => return Err(FormatError::UnmatchedClosingBrace { position }),
            '{' => {
                let mut placeholder = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, inner)) => placeholder.push(inner),
                        None => return Err(FormatError::UnclosedPlaceholder { position }),
                    }
                }
                let index = parse_index(&placeholder)
                    .ok_or(FormatError::InvalidPlaceholder { placeholder })?;
                let arg = args
                    .get(index)
                    .ok_or(FormatError::MissingArgument { index, available: args.len() })?;
                output.push_str(&arg.to_string());
            }
            _ => output.push(c),
        }
    }

    Ok(output)
}

/// Parses the index of a placeholder body, allowing surrounding spaces.
fn parse_index(placeholder: &str) -> Option<usize> {
    let trimmed = placeholder.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("No placeholders", "No placeholders")]
    #[case("{0} files", "3 files")]
    #[case("{1}/{0}", "Anna/3")]
    #[case("{0}{0}", "33")]
    #[case("{ 1 }!", "Anna!")]
    #[case("{{0}}", "{0}")]
    #[case("{{{0}}}", "{3}")]
    #[case("", "")]
    fn test_format_positional(#[case] template: &str, #[case] expected: &str) {
        let result = format_positional(template, &[&3, &"Anna"]).unwrap();

        assert_eq!(result, expected);
    }

    #[rstest]
    #[case("{0", FormatError::UnclosedPlaceholder { position: 0 })]
    #[case("a } b", FormatError::UnmatchedClosingBrace { position: 2 })]
    #[case("{name}", FormatError::InvalidPlaceholder { placeholder: "name".to_string() })]
    #[case("{}", FormatError::InvalidPlaceholder { placeholder: String::new() })]
    #[case("{-1}", FormatError::InvalidPlaceholder { placeholder: "-1".to_string() })]
    #[case("{2}", FormatError::MissingArgument { index: 2, available: 2 })]
    fn test_format_positional_errors(#[case] template: &str, #[case] expected: FormatError) {
        let result = format_positional(template, &[&3, &"Anna"]);

        assert_eq!(result, Err(expected));
    }

    #[googletest::test]
    fn test_error_messages() {
        expect_that!(
            FormatError::MissingArgument { index: 2, available: 1 }.to_string(),
            eq("Placeholder {2} has no argument (1 given)")
        );
        expect_that!(
            FormatError::InvalidPlaceholder { placeholder: "x".to_string() }.to_string(),
            eq("Invalid placeholder '{x}'")
        );
    }
}
