//! Keystroke formatting
//!
//! Pure, total, idempotent. Formatting only shapes acceptable content and
//! never fails: a character that cannot legally appear at the next output
//! position is dropped without consuming that position. Rejection of
//! incomplete values happens at validation time, not here.

use crate::fields::{is_plate_letter, FieldKind};

/// Sanitize raw input for a field of the given kind.
pub fn format(kind: FieldKind, raw: &str) -> String {
    match kind {
        FieldKind::PlateNumber => format_plate(raw),
        FieldKind::PassportSeries => format_digits(raw, 4),
        FieldKind::PassportNumber => format_digits(raw, 6),
        FieldKind::FreeText => raw.to_string(),
    }
}

/// Build a plate value position-by-position: positions 0, 4 and 5 take plate
/// alphabet letters, positions 1-3 take ASCII digits. Input is upper-cased
/// first and consumed in order; anything illegal for the next open position
/// vanishes without shifting later characters.
pub fn format_plate(raw: &str) -> String {
    let mut out = String::new();
    let mut len = 0;
    for ch in raw.to_uppercase().chars() {
        if len == 6 {
            break;
        }
        let accepted = match len {
            0 | 4 | 5 => is_plate_letter(ch),
            _ => ch.is_ascii_digit(),
        };
        if accepted {
            out.push(ch);
            len += 1;
        }
    }
    out
}

/// Strip non-digits and truncate to `max` characters.
pub fn format_digits(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}
