//! CLI Commands

pub mod config;
pub mod draft;
pub mod submit;

use checkin_core::{DraftError, FileDraftStore, FormController};

use crate::config::Config;

/// Namespace owned by the check-in form inside the draft file.
pub const DRAFT_NAMESPACE: &str = "checkin";

/// Open the durable draft store and hydrate a controller from it.
pub fn open_controller(config: &Config) -> Result<FormController<FileDraftStore>, String> {
    let path = config.draft_path()?;
    let store = open_store(&path)?;
    Ok(FormController::new(store))
}

fn open_store(path: &std::path::Path) -> Result<FileDraftStore, String> {
    match FileDraftStore::open(path, DRAFT_NAMESPACE) {
        Ok(store) => Ok(store),
        // a corrupt draft is not worth blocking the user over
        Err(DraftError::Corrupt(err)) => {
            tracing::warn!(%err, path = %path.display(), "draft file corrupt, starting fresh");
            std::fs::remove_file(path).map_err(|e| e.to_string())?;
            FileDraftStore::open(path, DRAFT_NAMESPACE).map_err(|e| e.to_string())
        }
        Err(err) => Err(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkin_core::DraftStore;

    #[test]
    fn test_corrupt_draft_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = open_store(&path).unwrap();
        store.save("vehicle", "КамАЗ");
        assert_eq!(store.load("vehicle").as_deref(), Some("КамАЗ"));
    }
}
