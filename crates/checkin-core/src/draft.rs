//! Draft persistence
//!
//! The draft store mirrors every accepted edit so a half-filled form survives
//! a restart. Stored values were already formatted when written, so hydration
//! does not re-run formatting.
//!
//! Keys live in a namespace owned by the form; `clear()` removes only that
//! namespace and leaves unrelated entries in the same file alone.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure opening a durable draft store.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("failed to read draft file: {0}")]
    Io(#[from] std::io::Error),
    #[error("draft file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Key-value persistence of in-progress field values.
///
/// `save` and `clear` never fail from the caller's point of view: the editing
/// loop must not block or surface errors on a keystroke. Durable
/// implementations log persistence problems instead.
pub trait DraftStore {
    fn save(&mut self, identity: &str, value: &str);
    fn load(&self, identity: &str) -> Option<String>;
    fn clear(&mut self);
}

/// In-process store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    entries: HashMap<String, String>,
}

impl DraftStore for MemoryDraftStore {
    fn save(&mut self, identity: &str, value: &str) {
        self.entries.insert(identity.to_string(), value.to_string());
    }

    fn load(&self, identity: &str) -> Option<String> {
        self.entries.get(identity).cloned()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Durable store: one JSON object on disk, keys namespaced per form.
#[derive(Debug)]
pub struct FileDraftStore {
    path: PathBuf,
    namespace: String,
    entries: HashMap<String, String>,
}

impl FileDraftStore {
    /// Open (or start) the store at `path`, scoped to `namespace`.
    pub fn open(path: impl Into<PathBuf>, namespace: &str) -> Result<Self, DraftError> {
        let path = path.into();
        let entries = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            HashMap::new()
        };
        Ok(Self { path, namespace: namespace.to_string(), entries })
    }

    /// Where the store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn key(&self, identity: &str) -> String {
        format!("{}.{}", self.namespace, identity)
    }

    fn persist(&self) {
        if let Err(err) = self.try_persist() {
            tracing::warn!(path = %self.path.display(), %err, "failed to persist draft");
        }
    }

    fn try_persist(&self) -> Result<(), DraftError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

impl DraftStore for FileDraftStore {
    fn save(&mut self, identity: &str, value: &str) {
        let key = self.key(identity);
        self.entries.insert(key, value.to_string());
        self.persist();
    }

    fn load(&self, identity: &str) -> Option<String> {
        self.entries.get(&self.key(identity)).cloned()
    }

    fn clear(&mut self) {
        let prefix = format!("{}.", self.namespace);
        self.entries.retain(|key, _| !key.starts_with(&prefix));
        self.persist();
    }
}
