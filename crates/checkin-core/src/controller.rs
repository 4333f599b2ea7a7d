//! Form controller
//!
//! State machine over Editing and Submitting. Edits format-then-mirror on
//! every keystroke; submit validates locally before any network is touched;
//! outcomes resolve against a per-attempt token so a response that arrives
//! after Cancel (or after being superseded) is discarded instead of clobbering
//! the reset form.

use crate::draft::DraftStore;
use crate::fields::{FieldSpec, FIELDS};
use crate::format::format;
use crate::record::{CheckinRecord, DraftRecord};
use crate::sink::{RecordSink, SubmissionOutcome};
use crate::validate::validate;

/// Shown when the submit round trip itself fails.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Произошла ошибка при отправке данных";

/// Controller lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
}

/// Outcome of a submit trigger before any network I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// A submission is already in flight; the trigger is ignored.
    InFlight,
    /// Local validation failed; errors are on display, nothing was sent.
    Invalid(Vec<String>),
    /// Record is well-formed; caller sends it and resolves with the token.
    Ready { token: u64, record: CheckinRecord },
}

/// Orchestrates formatting, validation, draft persistence, and the
/// submission protocol for one form instance.
pub struct FormController<S: DraftStore> {
    draft: DraftRecord,
    store: S,
    state: FormState,
    errors: Vec<String>,
    notice: Option<String>,
    next_token: u64,
    active_token: Option<u64>,
}

impl<S: DraftStore> FormController<S> {
    /// Hydrate from the store: values present there were sanitized when
    /// saved, so they seed the live draft without re-formatting.
    pub fn new(store: S) -> Self {
        let mut draft = DraftRecord::default();
        for spec in &FIELDS {
            if let Some(saved) = store.load(spec.identity) {
                draft.set(spec, saved);
            }
        }
        Self {
            draft,
            store,
            state: FormState::Editing,
            errors: Vec::new(),
            notice: None,
            next_token: 0,
            active_token: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Current sanitized value of a field.
    pub fn value(&self, identity: &str) -> &str {
        self.draft.value(identity)
    }

    /// Validation or server errors currently on display, in order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Success notice currently on display.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Apply one edit: format the raw input for the field's kind, keep the
    /// result, and mirror it to the draft store immediately. Returns the
    /// sanitized value, or `None` when the identity is unknown or a
    /// submission is in flight.
    pub fn input(&mut self, identity: &str, raw: &str) -> Option<&str> {
        if self.state != FormState::Editing {
            return None;
        }
        let spec = FieldSpec::find(identity)?;
        let sanitized = format(spec.kind, raw);
        self.store.save(spec.identity, &sanitized);
        self.draft.set(spec, sanitized);
        Some(self.draft.value(identity))
    }

    /// Start a submit attempt. Invalid records never produce a token, so
    /// they never reach the network.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.state == FormState::Submitting {
            tracing::debug!("submit ignored: already in flight");
            return SubmitStart::InFlight;
        }

        let errors = validate(&self.draft);
        if !errors.is_empty() {
            self.notice = None;
            self.errors = errors.clone();
            return SubmitStart::Invalid(errors);
        }

        self.next_token += 1;
        let token = self.next_token;
        self.active_token = Some(token);
        self.state = FormState::Submitting;
        SubmitStart::Ready { token, record: self.draft.to_record() }
    }

    /// Resolve an in-flight submission. Responses whose token no longer
    /// matches the active attempt (cancelled or superseded) are dropped.
    pub fn resolve_submit(&mut self, token: u64, outcome: SubmissionOutcome) {
        if self.active_token != Some(token) {
            tracing::debug!(token, "discarding stale submission outcome");
            return;
        }
        self.active_token = None;
        self.state = FormState::Editing;

        match outcome {
            SubmissionOutcome::Accepted(message) => {
                self.store.clear();
                self.draft.reset();
                self.errors.clear();
                self.notice = Some(message);
            }
            SubmissionOutcome::Rejected(errors) => {
                // server messages shown as-is, never merged with local ones
                self.notice = None;
                self.errors = errors;
            }
            SubmissionOutcome::TransportFailure => {
                self.notice = None;
                self.errors = vec![TRANSPORT_FAILURE_MESSAGE.to_string()];
            }
        }
    }

    /// Validate and, when clean, run the full round trip against `sink`.
    pub async fn submit(&mut self, sink: &impl RecordSink) -> SubmitStart {
        let start = self.begin_submit();
        if let SubmitStart::Ready { token, ref record } = start {
            let outcome = sink.submit(record).await;
            self.resolve_submit(token, outcome);
        }
        start
    }

    /// Cancel: wipe the draft, the mirror, and the message area. An in-flight
    /// request is left to finish on its own; its token is invalidated here so
    /// the late response is discarded.
    pub fn cancel(&mut self) {
        self.active_token = None;
        self.state = FormState::Editing;
        self.store.clear();
        self.draft.reset();
        self.errors.clear();
        self.notice = None;
    }

    /// Hand the store back, consuming the controller.
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::MemoryDraftStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedSink {
        outcome: SubmissionOutcome,
        calls: AtomicUsize,
    }

    impl ScriptedSink {
        fn new(outcome: SubmissionOutcome) -> Self {
            Self { outcome, calls: AtomicUsize::new(0) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RecordSink for ScriptedSink {
        async fn submit(&self, _record: &CheckinRecord) -> SubmissionOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    fn filled_controller() -> FormController<MemoryDraftStore> {
        let mut c = FormController::new(MemoryDraftStore::default());
        c.input("plateNumber", "а123вв99");
        c.input("passportSeries", "1234");
        c.input("passportNumber", "567890");
        c.input("arrivalDate", "2026-09-01");
        c.input("driverName", "Иванов Иван Иванович");
        c.input("vehicle", "КамАЗ 5320");
        c.input("issuedBy", "ОВД г. Москвы");
        c.input("issueDate", "2015-03-12");
        c
    }

    #[test]
    fn test_input_formats_and_mirrors() {
        let mut c = FormController::new(MemoryDraftStore::default());
        assert_eq!(c.input("plateNumber", "а123вв99"), Some("А123ВВ"));
        let store = c.into_store();
        assert_eq!(store.load("plateNumber").as_deref(), Some("А123ВВ"));
    }

    #[test]
    fn test_hydration_seeds_saved_values() {
        let mut store = MemoryDraftStore::default();
        store.save("driverName", "Иванов");
        let c = FormController::new(store);
        assert_eq!(c.value("driverName"), "Иванов");
        assert_eq!(c.value("vehicle"), "");
    }

    #[tokio::test]
    async fn test_invalid_record_never_reaches_sink() {
        let mut c = filled_controller();
        c.input("driverName", "");
        let sink = ScriptedSink::new(SubmissionOutcome::Accepted("ok".into()));

        let start = c.submit(&sink).await;
        assert!(matches!(start, SubmitStart::Invalid(_)));
        assert_eq!(sink.calls(), 0);
        assert!(c.errors().contains(&"Введите ФИО водителя.".to_string()));
        assert_eq!(c.state(), FormState::Editing);
    }

    #[tokio::test]
    async fn test_accept_clears_draft_and_shows_notice() {
        let mut c = filled_controller();
        let sink =
            ScriptedSink::new(SubmissionOutcome::Accepted("Данные успешно сохранены".into()));

        c.submit(&sink).await;
        assert_eq!(sink.calls(), 1);
        assert_eq!(c.notice(), Some("Данные успешно сохранены"));
        assert!(c.errors().is_empty());
        assert_eq!(c.value("plateNumber"), "");
        let store = c.into_store();
        assert_eq!(store.load("plateNumber"), None);
    }

    #[tokio::test]
    async fn test_rejection_shows_server_errors_and_keeps_draft() {
        let mut c = filled_controller();
        let sink = ScriptedSink::new(SubmissionOutcome::Rejected(vec![
            "Некорректный гос-номер".into(),
        ]));

        c.submit(&sink).await;
        assert_eq!(c.errors(), vec!["Некорректный гос-номер".to_string()]);
        assert_eq!(c.value("plateNumber"), "А123ВВ");
        let store = c.into_store();
        assert_eq!(store.load("plateNumber").as_deref(), Some("А123ВВ"));
    }

    #[tokio::test]
    async fn test_transport_failure_shows_generic_message() {
        let mut c = filled_controller();
        let sink = ScriptedSink::new(SubmissionOutcome::TransportFailure);

        c.submit(&sink).await;
        assert_eq!(c.errors(), vec![TRANSPORT_FAILURE_MESSAGE.to_string()]);
        assert_eq!(c.value("driverName"), "Иванов Иван Иванович");
    }

    #[test]
    fn test_cancel_resets_everything() {
        let mut c = filled_controller();
        c.begin_submit(); // leaves errors empty, goes Submitting
        c.cancel();
        assert_eq!(c.state(), FormState::Editing);
        assert!(c.errors().is_empty());
        assert_eq!(c.notice(), None);
        for spec in &FIELDS {
            assert_eq!(c.value(spec.identity), "");
        }
        let store = c.into_store();
        assert_eq!(store.load("plateNumber"), None);
    }

    #[test]
    fn test_stale_outcome_after_cancel_is_discarded() {
        let mut c = filled_controller();
        let token = match c.begin_submit() {
            SubmitStart::Ready { token, .. } => token,
            other => panic!("expected Ready, got {other:?}"),
        };
        c.cancel();
        c.resolve_submit(token, SubmissionOutcome::Accepted("late".into()));
        assert_eq!(c.notice(), None);
        assert_eq!(c.value("plateNumber"), "");
    }

    #[test]
    fn test_second_submit_while_in_flight_is_refused() {
        let mut c = filled_controller();
        assert!(matches!(c.begin_submit(), SubmitStart::Ready { .. }));
        assert_eq!(c.begin_submit(), SubmitStart::InFlight);
        // edits are ignored mid-flight too
        assert_eq!(c.input("vehicle", "другое"), None);
        assert_eq!(c.value("vehicle"), "КамАЗ 5320");
    }

    #[test]
    fn test_resolution_reopens_editing() {
        let mut c = filled_controller();
        let token = match c.begin_submit() {
            SubmitStart::Ready { token, .. } => token,
            other => panic!("expected Ready, got {other:?}"),
        };
        c.resolve_submit(token, SubmissionOutcome::TransportFailure);
        assert_eq!(c.state(), FormState::Editing);
        assert!(matches!(c.begin_submit(), SubmitStart::Ready { .. }));
    }
}
