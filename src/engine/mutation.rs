//! Mutation Operations
//!
//! Explicit add/remove-variable actions. Both rewrite the text and the
//! slot list together and leave the document normalized.

use super::document::{Document, VariableSlot};
use super::error::EngineError;
use crate::parser::{placeholder_token, scan};

/// Append an empty slot and a `{{K+1}}` token at the end of the text
pub fn append_variable(doc: &mut Document) {
    // Numbering below assumes `1..=K` is what the text already holds.
    doc.reconcile();

    let next = doc.slots.len() + 1;
    let trimmed_len = doc.text.trim_end().len();
    doc.text.truncate(trimmed_len);
    if !doc.text.is_empty() {
        doc.text.push(' ');
    }
    doc.text.push_str(&placeholder_token(next));
    doc.slots.push(VariableSlot::empty());

    log::debug!("appended variable {{{{{next}}}}}");
}

/// Remove the slot at `index` and every `{{index+1}}` token from the text.
///
/// Higher placeholders shift down by one; whitespace orphaned by a
/// deleted token collapses to a single space.
pub fn remove_variable(doc: &mut Document, index: usize) -> Result<(), EngineError> {
    let len = doc.slots.len();
    if index >= len {
        return Err(EngineError::IndexOutOfRange { index, len });
    }

    doc.text = strip_placeholder(&doc.text, index + 1);
    doc.slots.remove(index);
    doc.reconcile();

    log::debug!("removed variable {{{{{}}}}}", index + 1);
    Ok(())
}

/// What separates the output from the next pushed segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Junction {
    /// Original text continues unchanged
    Contiguous,
    /// A deleted token left whitespace behind that still needs one separator
    Gap,
    /// A token was deleted with nothing around it; the two sides now touch
    Seam,
}

/// Delete `{{target}}`, renumber `{{m}}` (m > target) to `{{m-1}}`
fn strip_placeholder(text: &str, target: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut junction = Junction::Contiguous;

    for placeholder in scan(text) {
        push_segment(&mut out, &text[cursor..placeholder.span.start], &mut junction);

        match placeholder.number() {
            Some(number) if number == target => {
                let before = out.len();
                out.truncate(out.trim_end().len());

                let rest = &text[placeholder.span.end..];
                let trailing = rest.len() - rest.trim_start().len();

                junction = if junction == Junction::Gap || out.len() < before || trailing > 0 {
                    Junction::Gap
                } else {
                    Junction::Seam
                };
                cursor = placeholder.span.end + trailing;
            }
            Some(number) if number > target => {
                push_segment(&mut out, &placeholder_token(number - 1), &mut junction);
                cursor = placeholder.span.end;
            }
            _ => {
                push_segment(&mut out, placeholder.token, &mut junction);
                cursor = placeholder.span.end;
            }
        }
    }
    push_segment(&mut out, &text[cursor..], &mut junction);

    out
}

fn push_segment(out: &mut String, segment: &str, junction: &mut Junction) {
    if segment.is_empty() {
        return;
    }
    let separate = match *junction {
        Junction::Contiguous => false,
        Junction::Gap => !out.is_empty(),
        Junction::Seam => splices_token(out, segment),
    };
    if separate {
        out.push(' ');
    }
    *junction = Junction::Contiguous;
    out.push_str(segment);
}

/// Whether joining `left` and `right` would scan differently from the two
/// sides apart, e.g. `{{3` + `}}` forming a new `{{3}}`.
///
/// Placeholders never contain anything but braces and digits, so only the
/// runs of those characters touching the seam need to be compared.
fn splices_token(left: &str, right: &str) -> bool {
    let is_token_char = |c: char| c == '{' || c == '}' || c.is_ascii_digit();

    let tail = &left[left.trim_end_matches(is_token_char).len()..];
    let head = &right[..right.len() - right.trim_start_matches(is_token_char).len()];
    if tail.is_empty() || head.is_empty() {
        return false;
    }

    let joined = format!("{tail}{head}");
    let tokens = |text: &str| -> Vec<String> {
        scan(text).iter().map(|p| p.token.to_string()).collect()
    };

    let mut apart = tokens(tail);
    apart.extend(tokens(head));
    tokens(&joined) != apart
}
