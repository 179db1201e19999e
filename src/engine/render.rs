//! Substitution Renderer

use super::document::VariableSlot;
use crate::parser::scan;

/// Substitute every bound placeholder with its slot value.
///
/// Unresolved placeholders (no slot, or an empty value) stay verbatim so
/// the author can see what still needs a value.
pub fn render(text: &str, slots: &[VariableSlot]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for placeholder in scan(text) {
        out.push_str(&text[cursor..placeholder.span.start]);

        let bound = placeholder
            .number()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| slots.get(index))
            .filter(|slot| slot.is_bound());

        match bound {
            Some(slot) => out.push_str(&slot.value),
            None => out.push_str(placeholder.token),
        }
        cursor = placeholder.span.end;
    }
    out.push_str(&text[cursor..]);

    out
}
