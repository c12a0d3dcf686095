use super::stamp_kind::StampKind;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Storage format of every timestamp column (store-local wall clock).
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StampEvent {
    pub id: i64,                                   // ⇔ attendance.id
    pub user_id: i64,                              // ⇔ attendance.user_id
    pub store_id: String,                          // ⇔ attendance.store_id
    pub kind: StampKind,                           // ⇔ attendance.kind
    pub timestamp: NaiveDateTime,                  // ⇔ attendance.timestamp
    pub note: Option<String>,                      // ⇔ attendance.note
    pub is_modified: bool,                         // ⇔ attendance.is_modified
    pub original_timestamp: Option<NaiveDateTime>, // ⇔ attendance.original_timestamp
    pub modified_by: Option<i64>,                  // ⇔ attendance.modified_by
    pub modified_at: Option<NaiveDateTime>,        // ⇔ attendance.modified_at

    /// Joined from `stores.name` when loaded; never written back.
    pub store_name: Option<String>,
}

impl StampEvent {
    /// A fresh, not yet persisted stamp (`id = 0`).
    pub fn new(user_id: i64, store_id: &str, kind: StampKind, timestamp: NaiveDateTime) -> Self {
        Self {
            id: 0,
            user_id,
            store_id: store_id.to_string(),
            kind,
            timestamp,
            note: None,
            is_modified: false,
            original_timestamp: None,
            modified_by: None,
            modified_at: None,
            store_name: None,
        }
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note.filter(|n| !n.trim().is_empty());
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FMT).to_string()
    }

    /// Overwrite the effective timestamp keeping the audit trail.
    ///
    /// The first correction captures the pristine value in
    /// `original_timestamp`; later corrections leave it untouched.
    pub fn apply_correction(&mut self, new_timestamp: NaiveDateTime, modifier: i64, now: NaiveDateTime) {
        if self.original_timestamp.is_none() {
            self.original_timestamp = Some(self.timestamp);
        }
        self.timestamp = new_timestamp;
        self.is_modified = true;
        self.modified_by = Some(modifier);
        self.modified_at = Some(now);
    }
}
