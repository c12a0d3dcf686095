use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::identity::Identity;
use crate::models::stamp_event::StampEvent;
use crate::models::stamp_kind::StampKind;
use chrono::NaiveDateTime;
use tracing::info;

pub struct StampLogic;

impl StampLogic {
    /// Record one stamp for the caller at its working store.
    ///
    /// Sequence problems (two clock-ins in a row, a lone clock-out) are not
    /// refused here: the aggregator flags them.
    pub fn apply(
        pool: &DbPool,
        identity: &Identity,
        kind: StampKind,
        at: NaiveDateTime,
        note: Option<String>,
    ) -> AppResult<StampEvent> {
        let p = identity.principal();

        let mut ev = StampEvent::new(p.user_id, &p.working_store_id, kind, at).with_note(note);
        ev.id = queries::insert_stamp(&pool.conn, &ev)?;

        ttlog_soft(
            &pool.conn,
            "stamp",
            &format!("#{}", ev.id),
            &format!("{} {} at {} ({})", p.code, kind.label(), ev.timestamp_str(), p.working_store_id),
        );
        info!(id = ev.id, user = %p.code, kind = kind.to_db_str(), store = %p.working_store_id, "stamp recorded");

        Ok(ev)
    }
}
