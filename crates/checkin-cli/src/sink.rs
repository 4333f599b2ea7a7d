//! HTTP record sink
//!
//! Sends the record as a form-encoded POST and maps the JSON body onto the
//! submission outcome. Connection errors, non-success statuses, and bodies
//! that fail to parse all collapse to a transport failure; details go to the
//! debug log, the user only ever sees the generic message.

use async_trait::async_trait;

use checkin_core::{CheckinRecord, RecordSink, SubmissionOutcome, SubmitResponse};

pub struct HttpRecordSink {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRecordSink {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string(), client: reqwest::Client::new() }
    }
}

#[async_trait]
impl RecordSink for HttpRecordSink {
    async fn submit(&self, record: &CheckinRecord) -> SubmissionOutcome {
        let url = format!("{}/checkins", self.base_url);

        let response = match self.client.post(&url).form(record).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(%err, %url, "submit request failed");
                return SubmissionOutcome::TransportFailure;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), %url, "submit answered non-success");
            return SubmissionOutcome::TransportFailure;
        }

        match response.json::<SubmitResponse>().await {
            Ok(body) => body.into_outcome(),
            Err(err) => {
                tracing::debug!(%err, %url, "submit response was not valid JSON");
                SubmissionOutcome::TransportFailure
            }
        }
    }
}
