//! Draft and wire record types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::fields::FieldSpec;

/// In-progress field values, keyed by field identity.
///
/// Values are written exclusively through the controller, which formats them
/// first, so a draft never holds characters a field's charset forbids.
#[derive(Debug, Default, Clone)]
pub struct DraftRecord {
    values: HashMap<&'static str, String>,
}

impl DraftRecord {
    /// Current value for a field; empty string when never edited.
    pub fn value(&self, identity: &str) -> &str {
        self.values.get(identity).map(String::as_str).unwrap_or("")
    }

    /// Store a (pre-sanitized) value for a known field.
    pub fn set(&mut self, spec: &'static FieldSpec, value: String) {
        self.values.insert(spec.identity, value);
    }

    /// Drop every field value.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Snapshot into the wire record.
    pub fn to_record(&self) -> CheckinRecord {
        CheckinRecord {
            plate_number: self.value("plateNumber").to_string(),
            vehicle: self.value("vehicle").to_string(),
            arrival_date: self.value("arrivalDate").to_string(),
            driver_name: self.value("driverName").to_string(),
            passport_series: self.value("passportSeries").to_string(),
            passport_number: self.value("passportNumber").to_string(),
            issued_by: self.value("issuedBy").to_string(),
            issue_date: self.value("issueDate").to_string(),
        }
    }
}

/// One complete check-in submission, field names matching the wire form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckinRecord {
    pub plate_number: String,
    pub vehicle: String,
    pub arrival_date: String,
    pub driver_name: String,
    pub passport_series: String,
    pub passport_number: String,
    pub issued_by: String,
    pub issue_date: String,
}

impl CheckinRecord {
    /// Value of a field by its wire identity. Identities outside the catalog
    /// yield an empty string.
    pub fn value(&self, identity: &str) -> &str {
        match identity {
            "plateNumber" => &self.plate_number,
            "vehicle" => &self.vehicle,
            "arrivalDate" => &self.arrival_date,
            "driverName" => &self.driver_name,
            "passportSeries" => &self.passport_series,
            "passportNumber" => &self.passport_number,
            "issuedBy" => &self.issued_by,
            "issueDate" => &self.issue_date,
            _ => "",
        }
    }
}

/// JSON response body of the submission endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl SubmitResponse {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self { success: true, message: Some(message.into()), errors: None }
    }

    pub fn rejected(errors: Vec<String>) -> Self {
        Self { success: false, message: None, errors: Some(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FIELDS;

    #[test]
    fn test_draft_round_trip_to_record() {
        let mut draft = DraftRecord::default();
        draft.set(FieldSpec::find("plateNumber").unwrap(), "А123ВВ".into());
        draft.set(FieldSpec::find("driverName").unwrap(), "Иванов И.И.".into());

        let record = draft.to_record();
        assert_eq!(record.plate_number, "А123ВВ");
        assert_eq!(record.driver_name, "Иванов И.И.");
        assert_eq!(record.vehicle, "");
    }

    #[test]
    fn test_record_serializes_wire_names() {
        let record = CheckinRecord { plate_number: "А123ВВ".into(), ..Default::default() };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["plateNumber"], "А123ВВ");
        assert!(json.get("plate_number").is_none());
        for spec in &FIELDS {
            assert!(json.get(spec.identity).is_some(), "missing {}", spec.identity);
        }
    }
}
