//! Append-only record store
//!
//! Each accepted submission becomes one human-readable multi-line entry in a
//! flat file. A mutex is held across the whole append so concurrent
//! submissions cannot interleave partial entries.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use parking_lot::Mutex;
use thiserror::Error;

use checkin_core::CheckinRecord;

/// Failure appending to the record file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to append record: {0}")]
    Io(#[from] std::io::Error),
}

/// Flat-file record store.
pub struct RecordStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, stamped with the current local time.
    pub fn append(&self, record: &CheckinRecord) -> Result<(), StoreError> {
        self.append_at(record, Local::now())
    }

    fn append_at(&self, record: &CheckinRecord, at: DateTime<Local>) -> Result<(), StoreError> {
        let entry = format_entry(record, at);
        let _guard = self.write_lock.lock();
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(entry.as_bytes())?;
        Ok(())
    }
}

/// Render one record entry: timestamp, every field, trailing blank line.
fn format_entry(record: &CheckinRecord, at: DateTime<Local>) -> String {
    format!(
        "Дата записи: {}\nГос-номер: {}\nТранспортное средство: {}\nДата прибытия: {}\n\
         Водитель: {}\nПаспорт: {} {}\nКем выдан: {}\nКогда выдан: {}\n\n",
        at.format("%Y-%m-%d %H:%M:%S"),
        record.plate_number,
        record.vehicle,
        record.arrival_date,
        record.driver_name,
        record.passport_series,
        record.passport_number,
        record.issued_by,
        record.issue_date,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> CheckinRecord {
        CheckinRecord {
            plate_number: "А123ВВ".into(),
            vehicle: "КамАЗ 5320".into(),
            arrival_date: "2026-09-01".into(),
            driver_name: "Иванов Иван Иванович".into(),
            passport_series: "1234".into(),
            passport_number: "567890".into(),
            issued_by: "ОВД г. Москвы".into(),
            issue_date: "2015-03-12".into(),
        }
    }

    #[test]
    fn test_entry_layout() {
        let at = Local.with_ymd_and_hms(2026, 8, 26, 12, 30, 0).unwrap();
        let entry = format_entry(&sample_record(), at);
        assert_eq!(
            entry,
            "Дата записи: 2026-08-26 12:30:00\n\
             Гос-номер: А123ВВ\n\
             Транспортное средство: КамАЗ 5320\n\
             Дата прибытия: 2026-09-01\n\
             Водитель: Иванов Иван Иванович\n\
             Паспорт: 1234 567890\n\
             Кем выдан: ОВД г. Москвы\n\
             Когда выдан: 2015-03-12\n\n"
        );
    }

    #[test]
    fn test_append_accumulates_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.txt");
        let store = RecordStore::new(&path);

        store.append(&sample_record()).unwrap();
        store.append(&sample_record()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("Гос-номер: А123ВВ").count(), 2);
        assert!(content.ends_with("\n\n"));
    }

    #[test]
    fn test_append_to_unwritable_path_fails() {
        let store = RecordStore::new("/nonexistent-dir/records.txt");
        assert!(matches!(store.append(&sample_record()), Err(StoreError::Io(_))));
    }
}
