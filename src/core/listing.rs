use crate::db::pool::DbPool;
use crate::db::queries::{self, LogFilter};
use crate::errors::AppResult;
use crate::export::model::EventExport;
use crate::models::identity::{Identity, StoreScope};
use crate::utils::colors::{GREY, RESET, YELLOW, colorize_in_out};
use crate::utils::table::Table;
use chrono::NaiveDate;

/// Row filter restricted to what `identity` may see.
pub fn scoped_filter(identity: &Identity) -> LogFilter {
    match identity.store_scope() {
        StoreScope::AllStores => LogFilter::default(),
        StoreScope::Store(id) => LogFilter {
            store_id: Some(id),
            ..Default::default()
        },
        StoreScope::OwnRecords(user_id) => LogFilter {
            user_id: Some(user_id),
            ..Default::default()
        },
    }
}

/// Latest stamps visible to the caller, newest first.
pub struct ListingLogic;

impl ListingLogic {
    pub fn latest(
        pool: &DbPool,
        identity: &Identity,
        user_code: Option<&str>,
        range: Option<(NaiveDate, NaiveDate)>,
        limit: usize,
    ) -> AppResult<Vec<EventExport>> {
        let filter = LogFilter {
            user_code: user_code.map(str::to_string),
            start: range.map(|r| r.0),
            end: range.map(|r| r.1),
            limit: Some(limit),
            newest_first: true,
            ..scoped_filter(identity)
        };
        queries::load_event_rows(&pool.conn, &filter)
    }

    pub fn render(rows: &[EventExport]) -> String {
        let mut table = Table::new(&["ID", "Timestamp", "Employee", "Store", "Kind", "Status"]);

        for r in rows {
            let status = match (&r.original_timestamp, r.modified) {
                (Some(orig), true) => format!("{YELLOW}edited{RESET} (was {orig})"),
                (None, true) => format!("{YELLOW}edited{RESET}"),
                _ => format!("{GREY}-{RESET}"),
            };
            table.add_row(vec![
                r.id.to_string(),
                r.timestamp.clone(),
                format!("{} ({})", r.name, r.code),
                r.store.clone(),
                colorize_in_out(&r.kind, r.kind == "CLOCK_IN"),
                status,
            ]);
        }

        table.render()
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
    use crate::utils::table::strip_ansi;
    use chrono::NaiveDateTime;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn each_role_sees_its_scope() {
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

        let staff_home = AuthLogic::login(&pool, "9999", "1234", None).unwrap();
        let staff_branch = AuthLogic::login(&pool, "9999", "1234", Some("branch")).unwrap();
        let manager = AuthLogic::login(&pool, "manager", "manager", None).unwrap();
        let hq = AuthLogic::login(&pool, "admin", "admin", None).unwrap();

        StampLogic::apply(&pool, &staff_home, StampKind::ClockIn, at("2025-05-02 09:00"), None).unwrap();
        StampLogic::apply(&pool, &staff_branch, StampKind::ClockIn, at("2025-05-03 09:00"), None).unwrap();
        StampLogic::apply(&pool, &manager, StampKind::ClockIn, at("2025-05-03 08:00"), None).unwrap();

        assert_eq!(ListingLogic::latest(&pool, &hq, None, None, 100).unwrap().len(), 3);
        assert_eq!(ListingLogic::latest(&pool, &manager, None, None, 100).unwrap().len(), 2);
        assert_eq!(ListingLogic::latest(&pool, &staff_home, None, None, 100).unwrap().len(), 2);

        let only_staff = ListingLogic::latest(&pool, &hq, Some("99"), None, 100).unwrap();
        assert_eq!(only_staff.len(), 2);
        assert_eq!(only_staff[0].timestamp, "2025-05-03 09:00:00");

        let limited = ListingLogic::latest(&pool, &hq, None, None, 1).unwrap();
        assert_eq!(limited.len(), 1);

        let rendered = strip_ansi(&ListingLogic::render(&only_staff));
        assert!(rendered.contains("Test Staff (9999)"));
    }
}
