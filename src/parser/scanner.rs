//! Placeholder Scanner
//!
//! Finds `{{n}}` tokens in free-form template text.
//! Only ASCII decimal digits are accepted between the braces.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

// `[0-9]` instead of `\d`: `\d` would also match non-ASCII digits.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([0-9]+)\}\}").expect("placeholder pattern is valid"));

static BRACE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]*)\}\}").expect("brace token pattern is valid"));

/// A placeholder occurrence found in text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// The whole token, braces included (e.g. `{{01}}`)
    pub token: &'a str,
    /// The digits between the braces, as typed
    pub digits: &'a str,
    /// Byte span of the token in the scanned text
    pub span: Range<usize>,
}

impl<'a> Placeholder<'a> {
    /// Numeric value of the placeholder.
    ///
    /// `None` only when the digits do not fit in a `usize`; such a
    /// placeholder can never address a slot.
    pub fn number(&self) -> Option<usize> {
        self.digits.parse().ok()
    }

    /// Digits with leading zeros stripped, so `{{01}}` and `{{1}}` share a key
    pub fn key(&self) -> &'a str {
        let trimmed = self.digits.trim_start_matches('0');
        if trimmed.is_empty() { "0" } else { trimmed }
    }
}

/// Scan text for placeholders, left to right
pub fn scan(text: &str) -> Vec<Placeholder<'_>> {
    PLACEHOLDER_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let token = caps.get(0)?;
            let digits = caps.get(1)?;
            Some(Placeholder {
                token: token.as_str(),
                digits: digits.as_str(),
                span: token.range(),
            })
        })
        .collect()
}

/// Find `{{...}}` tokens that are not numbered placeholders (e.g. `{{name}}`).
///
/// These are plain text to the engine; validation reports them so the
/// author knows they will not be substituted.
pub fn scan_unnumbered(text: &str) -> Vec<(&str, Range<usize>)> {
    BRACE_TOKEN_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let token = caps.get(0)?;
            let inner = caps.get(1)?.as_str();
            let numbered = !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit());
            (!numbered).then(|| (token.as_str(), token.range()))
        })
        .collect()
}

/// Format the canonical token for a placeholder number
pub fn placeholder_token(number: usize) -> String {
    format!("{{{{{number}}}}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(text: &str) -> Vec<Option<usize>> {
        scan(text).iter().map(Placeholder::number).collect()
    }

    #[test]
    fn test_scan_simple() {
        let found = scan("Hi {{1}}, your code is {{2}}");

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].token, "{{1}}");
        assert_eq!(found[0].span, 3..8);
        assert_eq!(found[1].number(), Some(2));
    }

    #[test]
    fn test_scan_preserves_typed_order() {
        assert_eq!(numbers("{{3}} {{1}} {{3}} {{0}}"), vec![Some(3), Some(1), Some(3), Some(0)]);
    }

    #[test]
    fn test_scan_leading_zeros() {
        let found = scan("{{007}}");

        assert_eq!(found[0].number(), Some(7));
        assert_eq!(found[0].digits, "007");
        assert_eq!(found[0].key(), "7");
        assert_eq!(scan("{{000}}")[0].key(), "0");
    }

    #[test]
    fn test_scan_rejects_malformed() {
        assert!(scan("{{}}").is_empty());
        assert!(scan("{{1}").is_empty());
        assert!(scan("{1}}").is_empty());
        assert!(scan("{{ 1 }}").is_empty());
        assert!(scan("{{a}}").is_empty());
        assert!(scan("{{-1}}").is_empty());
        assert!(scan("no placeholders here").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_scan_rejects_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits
        assert!(scan("{{\u{0661}}}").is_empty());
        assert!(scan("{{\u{FF11}}}").is_empty());
    }

    #[test]
    fn test_scan_extra_braces() {
        let found = scan("{{{1}}}");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span, 1..6);
    }

    #[test]
    fn test_scan_adjacent_tokens() {
        assert_eq!(numbers("{{1}}{{2}}"), vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_scan_oversized_number() {
        let found = scan("{{99999999999999999999999999}}");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].number(), None);
    }

    #[test]
    fn test_scan_multibyte_text_spans() {
        let text = "héllo {{1}} wörld";
        let found = scan(text);

        assert_eq!(&text[found[0].span.clone()], "{{1}}");
    }

    #[test]
    fn test_scan_unnumbered() {
        let found = scan_unnumbered("Hi {{name}}, order {{1}} ships {{ 2 }}{{}}");
        let tokens: Vec<&str> = found.iter().map(|(token, _)| *token).collect();

        assert_eq!(tokens, vec!["{{name}}", "{{ 2 }}", "{{}}"]);
    }

    #[test]
    fn test_placeholder_token() {
        assert_eq!(placeholder_token(12), "{{12}}");
    }
}
