//! Record submission boundary

use async_trait::async_trait;

use crate::record::{CheckinRecord, SubmitResponse};

/// Result of one submit attempt against the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Backend accepted and stored the record.
    Accepted(String),
    /// Backend re-validated and refused; messages are shown verbatim.
    Rejected(Vec<String>),
    /// Network error, non-success status, or malformed response.
    TransportFailure,
}

/// The backend endpoint that accepts a submitted record.
///
/// Implementations absorb every transport-level problem into
/// [`SubmissionOutcome::TransportFailure`]; `submit` never panics and never
/// returns an error the controller would have to interpret.
#[async_trait]
pub trait RecordSink {
    async fn submit(&self, record: &CheckinRecord) -> SubmissionOutcome;
}

impl SubmitResponse {
    /// Map the wire body onto the outcome the controller handles.
    pub fn into_outcome(self) -> SubmissionOutcome {
        if self.success {
            SubmissionOutcome::Accepted(
                self.message.unwrap_or_else(|| "Данные успешно сохранены".to_string()),
            )
        } else {
            SubmissionOutcome::Rejected(self.errors.unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_maps_to_outcome() {
        let ok = SubmitResponse::accepted("Данные успешно сохранены");
        assert_eq!(
            ok.into_outcome(),
            SubmissionOutcome::Accepted("Данные успешно сохранены".into())
        );

        let bad = SubmitResponse::rejected(vec!["Некорректный гос-номер".into()]);
        assert_eq!(
            bad.into_outcome(),
            SubmissionOutcome::Rejected(vec!["Некорректный гос-номер".into()])
        );
    }
}
