use crate::core::aggregate::aggregate_for_user;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::export::weekday::{weekday_index, weekday_label};
use crate::models::day_summary::DaySummary;
use crate::models::stamp_event::StampEvent;
use crate::utils::colors::{RESET, color_for_weekday, colorize_in_out, colorize_optional};
use crate::utils::formatting::{day_flags, mins2readable};
use crate::utils::table::Table;
use chrono::NaiveDate;

/// Personal attendance views: the monthly day-by-day table and the raw
/// list of latest stamps.
pub struct HistoryLogic;

impl HistoryLogic {
    pub fn monthly(
        pool: &DbPool,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
        break_minutes: i64,
    ) -> AppResult<Vec<DaySummary>> {
        aggregate_for_user(pool, user_id, start, end, break_minutes)
    }

    pub fn recent(pool: &DbPool, user_id: i64, limit: usize) -> AppResult<Vec<StampEvent>> {
        queries::load_recent_for_user(&pool.conn, user_id, limit)
    }

    pub fn render_monthly(days: &[DaySummary]) -> String {
        let mut table = Table::new(&["Date", "Day", "In", "Out", "Break", "Worked", "Store", "Flags"]);

        for day in days {
            let color = color_for_weekday(weekday_index(day.date));
            let clock_in = day.first_clock_in().map(|e| e.time_str()).unwrap_or_else(|| "--:--".into());
            let clock_out = day.last_clock_out().map(|e| e.time_str()).unwrap_or_else(|| "--:--".into());
            let worked = if day.timeline.periods.is_empty() {
                "-".to_string()
            } else {
                mins2readable(day.worked_minutes)
            };

            table.add_row(vec![
                format!("{color}{}{RESET}", day.date.format("%Y-%m-%d")),
                format!("{color}{}{RESET}", weekday_label(day.date)),
                colorize_in_out(&clock_in, true),
                colorize_in_out(&clock_out, false),
                colorize_optional(&if day.break_minutes > 0 { mins2readable(day.break_minutes) } else { "-".into() }),
                colorize_optional(&worked),
                colorize_optional(day.store_name().unwrap_or("-")),
                day_flags(day.has_open_period(), day.anomaly, day.order_violation, day.has_modified()),
            ]);
        }

        let total: i64 = days.iter().map(|d| d.worked_minutes).sum();
        let worked_days = days.iter().filter(|d| !d.timeline.periods.is_empty()).count();

        let mut out = table.render();
        out.push_str(&format!(
            "\nWorked days: {}   Total worked: {}\n",
            worked_days,
            mins2readable(total)
        ));
        out
    }

    pub fn render_recent(events: &[StampEvent]) -> String {
        let mut table = Table::new(&["ID", "Timestamp", "Kind", "Store", "Note", "Original"]);

        for ev in events {
            let original = ev
                .original_timestamp
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".into());
            table.add_row(vec![
                ev.id.to_string(),
                ev.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                colorize_in_out(ev.kind.label(), ev.kind.is_clock_in()),
                ev.store_name.clone().unwrap_or_else(|| ev.store_id.clone()),
                colorize_optional(ev.note.as_deref().unwrap_or("-")),
                colorize_optional(&original),
            ]);
        }

        table.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::aggregate;
    use crate::models::stamp_kind::StampKind;
    use crate::utils::table::strip_ansi;
    use chrono::NaiveDateTime;

    fn stamp(id: i64, kind: StampKind, ts: &str) -> StampEvent {
        let ts = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M").unwrap();
        let mut ev = StampEvent::new(1, "default-store", kind, ts);
        ev.id = id;
        ev
    }

    #[test]
    fn monthly_table_lists_every_day_and_totals() {
        let events = vec![
            stamp(1, StampKind::ClockIn, "2025-05-01 09:00"),
            stamp(2, StampKind::ClockOut, "2025-05-01 18:00"),
            stamp(3, StampKind::ClockIn, "2025-05-02 09:00"),
        ];
        let start = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 5, 3).unwrap();
        let days: Vec<DaySummary> = aggregate(&events, start, end, 60).unwrap().collect();

        let out = strip_ansi(&HistoryLogic::render_monthly(&days));

        assert!(out.contains("2025-05-01  Thu"));
        assert!(out.contains("08h 00m"));
        assert!(out.contains("open"));
        assert!(out.contains("Worked days: 2   Total worked: 08h 00m"));
    }

    #[test]
    fn lone_clock_out_shows_its_time() {
        let events = vec![stamp(1, StampKind::ClockOut, "2025-05-03 17:00")];
        let day = NaiveDate::from_ymd_opt(2025, 5, 3).unwrap();
        let days: Vec<DaySummary> = aggregate(&events, day, day, 60).unwrap().collect();

        let out = strip_ansi(&HistoryLogic::render_monthly(&days));

        assert!(out.contains("17:00"));
        assert!(out.contains("extra-out"));
    }
}
