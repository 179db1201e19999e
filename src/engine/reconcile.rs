//! Variable-Set Reconciler
//!
//! Re-derives a canonical (text, slots) pair from whatever placeholders
//! the text currently contains:
//! - distinct numbers are ordered by first appearance
//! - each is renumbered to its position (`{{1}}`, `{{2}}`, ...)
//! - values follow their original number when it is still present
//!
//! Whitespace outside placeholder tokens is never touched here.

use std::collections::HashMap;

use super::document::VariableSlot;
use crate::parser::{Placeholder, first_appearance_order, placeholder_token, scan};

/// Outcome of a reconciliation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled {
    /// Input was already normalized
    Unchanged,
    /// Normalized replacement for the input
    Changed {
        text: String,
        slots: Vec<VariableSlot>,
    },
}

impl Reconciled {
    pub fn is_changed(&self) -> bool {
        matches!(self, Reconciled::Changed { .. })
    }
}

/// Reconcile text against the previous slots
pub fn reconcile(text: &str, slots: &[VariableSlot]) -> Reconciled {
    let placeholders = scan(text);
    let distinct = first_appearance_order(&placeholders);

    let positions: HashMap<&str, usize> = distinct
        .iter()
        .enumerate()
        .map(|(index, placeholder)| (placeholder.key(), index + 1))
        .collect();

    let new_slots: Vec<VariableSlot> = distinct
        .iter()
        .map(|placeholder| carried_slot(placeholder, slots))
        .collect();

    let new_text = renumber(text, &placeholders, |placeholder| {
        positions.get(placeholder.key()).copied()
    });

    if new_text == text && new_slots == slots {
        Reconciled::Unchanged
    } else {
        Reconciled::Changed {
            text: new_text,
            slots: new_slots,
        }
    }
}

/// Reconcile and always return the resulting pair
pub fn normalize(text: &str, slots: &[VariableSlot]) -> (String, Vec<VariableSlot>) {
    match reconcile(text, slots) {
        Reconciled::Unchanged => (text.to_string(), slots.to_vec()),
        Reconciled::Changed { text, slots } => (text, slots),
    }
}

/// Check the contiguity invariant: distinct numbers read left to right are
/// exactly `1..=slots.len()` and every token is written canonically.
pub fn is_normalized(text: &str, slots: &[VariableSlot]) -> bool {
    !reconcile(text, slots).is_changed()
}

/// Value previously bound to this placeholder's number, or an empty slot
fn carried_slot(placeholder: &Placeholder<'_>, slots: &[VariableSlot]) -> VariableSlot {
    placeholder
        .number()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| slots.get(index))
        .cloned()
        .unwrap_or_default()
}

/// Rewrite each placeholder token with the number chosen by `assign`.
///
/// Placeholders for which `assign` returns `None` keep their original token.
pub(crate) fn renumber<'a, F>(text: &str, placeholders: &[Placeholder<'a>], assign: F) -> String
where
    F: Fn(&Placeholder<'a>) -> Option<usize>,
{
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for placeholder in placeholders {
        out.push_str(&text[cursor..placeholder.span.start]);
        match assign(placeholder) {
            Some(number) if placeholder.digits != number.to_string() => {
                out.push_str(&placeholder_token(number));
            }
            _ => out.push_str(placeholder.token),
        }
        cursor = placeholder.span.end;
    }
    out.push_str(&text[cursor..]);

    out
}
