use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::db::repository::AttendanceRepository;
use crate::errors::{AppError, AppResult};
use crate::models::identity::Identity;
use crate::models::stamp_event::StampEvent;
use chrono::NaiveDateTime;
use tracing::warn;

/// Audited overwrite of a stamp's timestamp.
pub struct CorrectionLogic;

impl CorrectionLogic {
    /// Headquarters may correct any stamp, a store manager only stamps of
    /// its home store, staff nothing. Last writer wins.
    pub fn apply(
        pool: &DbPool,
        identity: &Identity,
        log_id: i64,
        new_timestamp: NaiveDateTime,
    ) -> AppResult<StampEvent> {
        if let Identity::Staff(p) = identity {
            warn!(code = %p.code, log_id, "staff attempted a correction");
            return Err(AppError::Unauthorized("staff cannot correct attendance logs".into()));
        }

        let current = queries::load_stamp(&pool.conn, log_id)?
            .ok_or_else(|| AppError::not_found(format!("Attendance log #{log_id}")))?;

        if !identity.can_correct(&current.store_id) {
            warn!(code = %identity.principal().code, log_id, store = %current.store_id, "correction outside home store");
            return Err(AppError::Unauthorized(format!(
                "attendance log #{log_id} belongs to store '{}'",
                current.store_id
            )));
        }

        let updated = pool.correct(log_id, new_timestamp, identity.user_id())?;

        ttlog_soft(
            &pool.conn,
            "correct",
            &format!("#{log_id}"),
            &format!(
                "{} → {} by {}",
                current.timestamp_str(),
                updated.timestamp_str(),
                identity.principal().code
            ),
        );

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::AuthLogic;
    use crate::core::seed::SeedLogic;
    use crate::core::stamp::StampLogic;
    use crate::db::stores;
    use crate::models::stamp_kind::StampKind;
    use crate::models::store::Store;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn setup() -> DbPool {
        let pool = DbPool::open_in_memory().unwrap();
        crate::db::initialize::init_db(&pool.conn).unwrap();
        SeedLogic::apply(&pool).unwrap();
        stores::insert_store(
            &pool.conn,
            &Store {
                id: "branch".into(),
                name: "Branch".into(),
                address: String::new(),
            },
        )
        .unwrap();
        pool
    }

    #[test]
    fn manager_corrects_home_store_only() {
        let pool = setup();
        let staff_home = AuthLogic::login(&pool, "9999", "1234", None).unwrap();
        let staff_branch = AuthLogic::login(&pool, "9999", "1234", Some("branch")).unwrap();
        let manager = AuthLogic::login(&pool, "manager", "manager", None).unwrap();

        let home = StampLogic::apply(&pool, &staff_home, StampKind::ClockIn, at("2025-05-02 09:10"), None).unwrap();
        let away = StampLogic::apply(&pool, &staff_branch, StampKind::ClockIn, at("2025-05-03 09:10"), None).unwrap();

        let fixed = CorrectionLogic::apply(&pool, &manager, home.id, at("2025-05-02 09:00")).unwrap();
        assert_eq!(fixed.original_timestamp, Some(at("2025-05-02 09:10")));
        assert_eq!(fixed.modified_by, Some(manager.user_id()));

        let err = CorrectionLogic::apply(&pool, &manager, away.id, at("2025-05-03 09:00")).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn staff_is_refused_and_headquarters_reaches_everywhere() {
        let pool = setup();
        let staff = AuthLogic::login(&pool, "9999", "1234", Some("branch")).unwrap();
        let hq = AuthLogic::login(&pool, "admin", "admin", None).unwrap();

        let ev = StampLogic::apply(&pool, &staff, StampKind::ClockOut, at("2025-05-03 18:20"), None).unwrap();

        assert!(matches!(
            CorrectionLogic::apply(&pool, &staff, ev.id, at("2025-05-03 18:00")),
            Err(AppError::Unauthorized(_))
        ));
        assert!(CorrectionLogic::apply(&pool, &hq, ev.id, at("2025-05-03 18:00")).is_ok());
        assert!(matches!(
            CorrectionLogic::apply(&pool, &hq, 999, at("2025-05-03 18:00")),
            Err(AppError::NotFound(_))
        ));
    }
}
