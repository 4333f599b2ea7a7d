//! Static field catalog
//!
//! One [`FieldSpec`] per form field, declared once in validation order. The
//! identity strings double as the wire field names on the submission POST.

/// The 12 Cyrillic letters permitted in license-plate letter positions.
pub const PLATE_ALPHABET: &str = "АВЕКМНОРСТУХ";

/// Shape rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Letter, three digits, two letters over [`PLATE_ALPHABET`].
    PlateNumber,
    /// Exactly four digits.
    PassportSeries,
    /// Exactly six digits.
    PassportNumber,
    /// Free-form text, required non-blank.
    FreeText,
}

/// A form field: stable identity, shape rule, and the message shown when the
/// submitted value violates the rule.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub identity: &'static str,
    pub kind: FieldKind,
    pub max_length: Option<usize>,
    pub error: &'static str,
}

/// All form fields, in validation (and error display) order.
pub const FIELDS: [FieldSpec; 8] = [
    FieldSpec {
        identity: "plateNumber",
        kind: FieldKind::PlateNumber,
        max_length: Some(6),
        error: "Гос-номер должен состоять из 6 символов.",
    },
    FieldSpec {
        identity: "passportSeries",
        kind: FieldKind::PassportSeries,
        max_length: Some(4),
        error: "Серия паспорта должна состоять из 4 цифр.",
    },
    FieldSpec {
        identity: "passportNumber",
        kind: FieldKind::PassportNumber,
        max_length: Some(6),
        error: "Номер паспорта должен состоять из 6 цифр.",
    },
    FieldSpec {
        identity: "arrivalDate",
        kind: FieldKind::FreeText,
        max_length: None,
        error: "Укажите ориентировочную дату прибытия.",
    },
    FieldSpec {
        identity: "driverName",
        kind: FieldKind::FreeText,
        max_length: None,
        error: "Введите ФИО водителя.",
    },
    FieldSpec {
        identity: "vehicle",
        kind: FieldKind::FreeText,
        max_length: None,
        error: "Введите название транспортного средства.",
    },
    FieldSpec {
        identity: "issuedBy",
        kind: FieldKind::FreeText,
        max_length: None,
        error: "Укажите, кем был выдан паспорт.",
    },
    FieldSpec {
        identity: "issueDate",
        kind: FieldKind::FreeText,
        max_length: None,
        error: "Укажите дату выдачи паспорта.",
    },
];

impl FieldSpec {
    /// Look up a field by identity.
    pub fn find(identity: &str) -> Option<&'static FieldSpec> {
        FIELDS.iter().find(|f| f.identity == identity)
    }
}

/// Whether `ch` may appear in a plate letter position.
pub(crate) fn is_plate_letter(ch: char) -> bool {
    PLATE_ALPHABET.contains(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_has_twelve_letters() {
        assert_eq!(PLATE_ALPHABET.chars().count(), 12);
    }

    #[test]
    fn test_find_by_identity() {
        assert_eq!(FieldSpec::find("plateNumber").unwrap().kind, FieldKind::PlateNumber);
        assert!(FieldSpec::find("unknown").is_none());
    }
}
