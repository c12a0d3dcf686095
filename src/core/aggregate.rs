//! Monthly attendance aggregation: flat stamps in, one summary per date out.

use crate::core::calculator::timeline::build_timeline;
use crate::db::repository::AttendanceRepository;
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DaySummary;
use crate::models::stamp_event::StampEvent;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Lazy, finite sequence of per-day summaries over an inclusive date range.
///
/// Cloning the iterator restarts nothing and shares nothing mutable: each
/// clone walks the same dates over the same borrowed stamps.
#[derive(Debug, Clone)]
pub struct DaySummaries<'a> {
    by_date: BTreeMap<NaiveDate, Vec<&'a StampEvent>>,
    next: Option<NaiveDate>,
    end: NaiveDate,
    break_minutes: i64,
}

impl Iterator for DaySummaries<'_> {
    type Item = DaySummary;

    fn next(&mut self) -> Option<DaySummary> {
        let date = self.next.filter(|d| *d <= self.end)?;
        self.next = date.succ_opt();

        let day_events = self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[]);
        let timeline = build_timeline(day_events.iter().copied(), self.break_minutes);

        Some(DaySummary::new(date, timeline, self.break_minutes))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = match self.next {
            Some(d) if d <= self.end => (self.end - d).num_days() as usize + 1,
            _ => 0,
        };
        (left, Some(left))
    }
}

impl ExactSizeIterator for DaySummaries<'_> {}

/// Group `events` per calendar date and expose one summary per date of
/// `[start, end]`, ascending. Stamps outside the range are ignored.
pub fn aggregate(
    events: &[StampEvent],
    start: NaiveDate,
    end: NaiveDate,
    break_minutes: i64,
) -> AppResult<DaySummaries<'_>> {
    if start > end {
        return Err(AppError::invalid_range(start, end));
    }

    let mut by_date: BTreeMap<NaiveDate, Vec<&StampEvent>> = BTreeMap::new();
    for ev in events {
        let d = ev.date();
        if d >= start && d <= end {
            by_date.entry(d).or_default().push(ev);
        }
    }

    Ok(DaySummaries {
        by_date,
        next: Some(start),
        end,
        break_minutes,
    })
}

/// Fetch one user's stamps and aggregate them.
///
/// The range is validated before the repository is touched; repository
/// failures surface as `UpstreamFetchFailed` carrying the original error.
pub fn aggregate_for_user<R: AttendanceRepository + ?Sized>(
    repo: &R,
    user_id: i64,
    start: NaiveDate,
    end: NaiveDate,
    break_minutes: i64,
) -> AppResult<Vec<DaySummary>> {
    if start > end {
        return Err(AppError::invalid_range(start, end));
    }

    let events = repo
        .fetch_for_user(user_id, start, end)
        .map_err(|e| AppError::UpstreamFetchFailed(Box::new(e)))?;

    debug!(user_id, %start, %end, stamps = events.len(), "aggregating attendance");

    Ok(aggregate(&events, start, end, break_minutes)?.collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::model::EventExport;
    use crate::models::day_summary::DayKind;
    use crate::models::stamp_kind::StampKind;
    use chrono::NaiveDateTime;
    use std::cell::Cell;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn stamp(id: i64, kind: StampKind, ts: &str) -> StampEvent {
        let ts = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M").unwrap();
        let mut ev = StampEvent::new(1, "default-store", kind, ts);
        ev.id = id;
        ev
    }

    #[derive(Default)]
    struct CountingRepo {
        fetches: Cell<usize>,
        events: Vec<StampEvent>,
        fail: bool,
    }

    impl AttendanceRepository for CountingRepo {
        fn fetch_for_user(&self, _user_id: i64, _s: NaiveDate, _e: NaiveDate) -> AppResult<Vec<StampEvent>> {
            self.fetches.set(self.fetches.get() + 1);
            if self.fail {
                return Err(AppError::Other("disk on fire".into()));
            }
            Ok(self.events.clone())
        }

        fn fetch_for_store(
            &self,
            _store_id: Option<&str>,
            _s: Option<NaiveDate>,
            _e: Option<NaiveDate>,
        ) -> AppResult<Vec<EventExport>> {
            Ok(Vec::new())
        }

        fn correct(&self, log_id: i64, _ts: NaiveDateTime, _by: i64) -> AppResult<StampEvent> {
            Err(AppError::not_found(format!("Attendance log {log_id}")))
        }
    }

    #[test]
    fn one_summary_per_date_in_ascending_order() {
        let events = vec![
            stamp(1, StampKind::ClockIn, "2024-02-27 09:00"),
            stamp(2, StampKind::ClockOut, "2024-02-27 18:00"),
            stamp(3, StampKind::ClockIn, "2024-03-05 09:00"),
        ];

        let days: Vec<DaySummary> = aggregate(&events, d("2024-02-26"), d("2024-03-02"), 60)
            .unwrap()
            .collect();

        assert_eq!(days.len(), 6);
        assert_eq!(days[0].date, d("2024-02-26"));
        assert_eq!(days[3].date, d("2024-02-29"));
        assert_eq!(days[5].date, d("2024-03-02"));
        assert!(days.windows(2).all(|w| w[0].date < w[1].date));

        assert_eq!(days[1].kind(), DayKind::Worked);
        assert_eq!(days[1].worked_minutes, 480);
        assert_eq!(days[1].break_minutes, 60);
        assert!(days[0].is_no_attendance());
        // 2024-03-05 is outside the range
        assert!(days.iter().all(|s| s.date != d("2024-03-05")));
    }

    #[test]
    fn single_day_range_yields_one_summary() {
        let days = aggregate(&[], d("2025-01-01"), d("2025-01-01"), 60).unwrap();
        assert_eq!(days.len(), 1);
    }

    #[test]
    fn sequence_is_restartable() {
        let events = vec![stamp(1, StampKind::ClockIn, "2025-05-02 09:00")];
        let days = aggregate(&events, d("2025-05-01"), d("2025-05-31"), 60).unwrap();

        let first: Vec<DaySummary> = days.clone().collect();
        let second: Vec<DaySummary> = days.collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 31);
        assert!(first[1].has_open_period());
    }

    #[test]
    fn anomaly_day_is_reported() {
        let events = vec![
            stamp(1, StampKind::ClockOut, "2025-05-02 12:00"),
            stamp(2, StampKind::ClockOut, "2025-05-02 18:00"),
        ];
        let days: Vec<DaySummary> = aggregate(&events, d("2025-05-02"), d("2025-05-02"), 60)
            .unwrap()
            .collect();

        assert!(days[0].anomaly);
        assert_eq!(days[0].kind(), DayKind::Stray);
        assert_eq!(days[0].timeline.unmatched_outs.len(), 2);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = aggregate(&[], d("2025-05-02"), d("2025-05-01"), 60).unwrap_err();
        assert!(matches!(err, AppError::InvalidRange { .. }));
    }

    #[test]
    fn reversed_range_never_fetches() {
        let repo = CountingRepo::default();
        let err = aggregate_for_user(&repo, 1, d("2025-05-02"), d("2025-05-01"), 60).unwrap_err();

        assert!(matches!(err, AppError::InvalidRange { .. }));
        assert_eq!(repo.fetches.get(), 0);
    }

    #[test]
    fn fetch_failure_is_wrapped() {
        let repo = CountingRepo {
            fail: true,
            ..Default::default()
        };
        let err = aggregate_for_user(&repo, 1, d("2025-05-01"), d("2025-05-02"), 60).unwrap_err();

        match err {
            AppError::UpstreamFetchFailed(inner) => assert!(matches!(*inner, AppError::Other(_))),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(repo.fetches.get(), 1);
    }

    #[test]
    fn fetched_events_are_aggregated() {
        let repo = CountingRepo {
            events: vec![
                stamp(1, StampKind::ClockIn, "2025-05-01 09:00"),
                stamp(2, StampKind::ClockOut, "2025-05-01 09:30"),
            ],
            ..Default::default()
        };

        let days = aggregate_for_user(&repo, 1, d("2025-05-01"), d("2025-05-03"), 60).unwrap();

        assert_eq!(days.len(), 3);
        assert_eq!(days[0].worked_minutes, 0);
        assert_eq!(days[0].kind(), DayKind::Worked);
    }
}
