//! Placeholder Parsing
//!
//! Tokenization of template text into numbered placeholders.
//! No reconciliation or rendering concerns here.

pub mod scanner;

pub use scanner::{Placeholder, placeholder_token, scan, scan_unnumbered};

/// Distinct placeholder keys in order of first appearance
///
/// A number seen again later refers to the same slot, so only its first
/// occurrence counts.
pub fn first_appearance_order<'s, 'a>(
    placeholders: &'s [Placeholder<'a>],
) -> Vec<&'s Placeholder<'a>> {
    let mut seen = std::collections::HashSet::new();
    placeholders
        .iter()
        .filter(|placeholder| seen.insert(placeholder.key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_appearance_order() {
        let found = scan("{{2}} {{1}} {{2}} {{02}} {{3}}");
        let distinct: Vec<&str> = first_appearance_order(&found)
            .iter()
            .map(|p| p.key())
            .collect();

        assert_eq!(distinct, vec!["2", "1", "3"]);
    }

    #[test]
    fn test_first_appearance_order_empty() {
        assert!(first_appearance_order(&scan("plain text")).is_empty());
    }
}
