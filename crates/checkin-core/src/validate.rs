//! Submit-time validation
//!
//! Every rule runs on every attempt; the result lists each violated field's
//! message in the catalog's declared order so the user sees the complete
//! picture in one pass. An empty result means the record is submittable.

use crate::fields::{is_plate_letter, FieldKind, FieldSpec, FIELDS};
use crate::record::DraftRecord;

/// Whether `value` satisfies the shape rule for `kind`.
pub fn field_is_valid(kind: FieldKind, value: &str) -> bool {
    match kind {
        FieldKind::PlateNumber => plate_is_valid(value),
        FieldKind::PassportSeries => all_digits(value, 4),
        FieldKind::PassportNumber => all_digits(value, 6),
        FieldKind::FreeText => !value.trim().is_empty(),
    }
}

/// Full match against letter, three digits, two letters over the plate
/// alphabet. Anything shorter or longer than 6 characters fails, even when
/// every typed character was individually legal.
fn plate_is_valid(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    chars.len() == 6
        && chars.iter().enumerate().all(|(i, ch)| match i {
            0 | 4 | 5 => is_plate_letter(*ch),
            _ => ch.is_ascii_digit(),
        })
}

fn all_digits(value: &str, len: usize) -> bool {
    value.chars().count() == len && value.chars().all(|c| c.is_ascii_digit())
}

/// Collect the message of every field whose current value fails its rule.
pub fn validate(draft: &DraftRecord) -> Vec<String> {
    FIELDS
        .iter()
        .filter(|spec| !field_is_valid(spec.kind, draft.value(spec.identity)))
        .map(|spec| spec.error.to_string())
        .collect()
}

/// Identities of fields whose values fail, in declared order. The server
/// pairs these with its own messages.
pub fn failing_fields<'a>(value_of: impl Fn(&'static FieldSpec) -> &'a str) -> Vec<&'static str> {
    FIELDS
        .iter()
        .filter(|spec| !field_is_valid(spec.kind, value_of(spec)))
        .map(|spec| spec.identity)
        .collect()
}
