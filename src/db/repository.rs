//! Data-access capability handed to the core.
//!
//! The aggregator and the correction authority never open connections on
//! their own: they receive something implementing [`AttendanceRepository`].

use crate::db::pool::DbPool;
use crate::db::queries::{self, LogFilter};
use crate::errors::{AppError, AppResult};
use crate::export::model::EventExport;
use crate::models::stamp_event::StampEvent;
use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::info;

pub trait AttendanceRepository {
    /// Stamps of one user whose local date lies in `[start, end]`.
    fn fetch_for_user(&self, user_id: i64, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<StampEvent>>;

    /// Flat rows for one store (or every store when `None`), oldest first.
    fn fetch_for_store(
        &self,
        store_id: Option<&str>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> AppResult<Vec<EventExport>>;

    /// Overwrite the timestamp of `log_id`, keeping the first original value.
    fn correct(&self, log_id: i64, new_timestamp: NaiveDateTime, modifier: i64) -> AppResult<StampEvent>;
}

impl AttendanceRepository for DbPool {
    fn fetch_for_user(&self, user_id: i64, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<StampEvent>> {
        queries::load_stamps_for_user(&self.conn, user_id, start, end)
    }

    fn fetch_for_store(
        &self,
        store_id: Option<&str>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> AppResult<Vec<EventExport>> {
        let filter = LogFilter {
            store_id: store_id.map(str::to_string),
            start,
            end,
            ..Default::default()
        };
        queries::load_event_rows(&self.conn, &filter)
    }

    fn correct(&self, log_id: i64, new_timestamp: NaiveDateTime, modifier: i64) -> AppResult<StampEvent> {
        let tx = self.conn.unchecked_transaction()?;

        let mut ev = queries::load_stamp(&tx, log_id)?
            .ok_or_else(|| AppError::not_found(format!("Attendance log #{log_id}")))?;

        ev.apply_correction(new_timestamp, modifier, Local::now().naive_local());
        queries::save_correction(&tx, &ev)?;

        tx.commit()?;

        info!(log_id, modifier, timestamp = %ev.timestamp_str(), "attendance log corrected");
        Ok(ev)
    }
}
