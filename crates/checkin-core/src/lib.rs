//! Vehicle check-in form core
//!
//! Everything the check-in form needs short of actual I/O: the static field
//! catalog, keystroke formatting, submit-time validation, draft persistence,
//! and the [`FormController`] state machine that ties them to a
//! [`RecordSink`] backend.
//!
//! ## Data flow
//!
//! ```text
//! keystroke ──▶ format() ──▶ DraftRecord ──▶ DraftStore.save
//!                                   │
//!                        submit ──▶ validate() ──▶ RecordSink.submit
//!                                   │                     │
//!                            errors shown          Accepted / Rejected /
//!                            (no network)          TransportFailure
//! ```

pub mod controller;
pub mod draft;
pub mod fields;
pub mod format;
pub mod record;
pub mod sink;
pub mod validate;

pub use controller::{FormController, FormState, SubmitStart};
pub use draft::{DraftError, DraftStore, FileDraftStore, MemoryDraftStore};
pub use fields::{FieldKind, FieldSpec, FIELDS, PLATE_ALPHABET};
pub use format::format;
pub use record::{CheckinRecord, DraftRecord, SubmitResponse};
pub use sink::{RecordSink, SubmissionOutcome};
pub use validate::validate;
