use crate::core::calculator::timeline::Timeline;
use crate::models::stamp_event::StampEvent;
use chrono::NaiveDate;

/// How a day is treated by the timesheet export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// At least one work period (open or closed).
    Worked,
    /// Stamps exist but none of them opens a period (e.g. a lone clock-out).
    Stray,
    /// No stamp at all: eligible for a leave/holiday annotation.
    NoAttendance,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub timeline: Timeline,
    pub worked_minutes: i64,
    pub break_minutes: i64,
    /// More clock-outs than clock-ins.
    pub anomaly: bool,
    /// A clock-out precedes the clock-in it was paired with.
    pub order_violation: bool,
}

impl DaySummary {
    pub fn new(date: NaiveDate, timeline: Timeline, fixed_break_minutes: i64) -> Self {
        Self {
            date,
            worked_minutes: timeline.total_worked_minutes(),
            break_minutes: fixed_break_minutes * timeline.closed_periods() as i64,
            anomaly: timeline.has_excess_clock_out(),
            order_violation: timeline.has_order_violation(),
            timeline,
        }
    }

    pub fn kind(&self) -> DayKind {
        if self.timeline.events.is_empty() {
            DayKind::NoAttendance
        } else if self.timeline.periods.is_empty() {
            DayKind::Stray
        } else {
            DayKind::Worked
        }
    }

    pub fn is_no_attendance(&self) -> bool {
        self.kind() == DayKind::NoAttendance
    }

    pub fn first_clock_in(&self) -> Option<&StampEvent> {
        self.timeline.periods.first().map(|p| &p.in_event)
    }

    /// Clock-out of the last closed period, else the first unmatched
    /// clock-out of the day.
    pub fn last_clock_out(&self) -> Option<&StampEvent> {
        self.timeline
            .periods
            .iter()
            .rev()
            .find_map(|p| p.out_event.as_ref())
            .or_else(|| self.timeline.unmatched_outs.first())
    }

    /// Any stamp of the day was corrected.
    pub fn has_modified(&self) -> bool {
        self.timeline.events.iter().any(|e| e.is_modified)
    }

    pub fn has_open_period(&self) -> bool {
        self.timeline.periods.iter().any(|p| p.is_open)
    }

    /// Store of the first clock-in, falling back to the first stamp of the day.
    pub fn store_name(&self) -> Option<&str> {
        self.first_clock_in()
            .or_else(|| self.timeline.events.first())
            .and_then(|e| e.store_name.as_deref())
    }

    pub fn note(&self) -> Option<&str> {
        self.first_clock_in().and_then(|e| e.note.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::aggregate::aggregate;
    use crate::models::stamp_event::StampEvent;
    use crate::models::stamp_kind::StampKind;
    use chrono::{NaiveDate, NaiveDateTime};

    fn stamp(id: i64, kind: StampKind, ts: &str) -> StampEvent {
        let ts = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M").unwrap();
        let mut ev = StampEvent::new(1, "default-store", kind, ts);
        ev.id = id;
        ev
    }

    #[test]
    fn lone_clock_out_is_still_shown() {
        let events = vec![stamp(1, StampKind::ClockOut, "2024-02-03 17:00")];
        let day = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();
        let summary = aggregate(&events, day, day, 60).unwrap().next().unwrap();

        assert!(summary.anomaly);
        assert!(summary.first_clock_in().is_none());
        assert_eq!(summary.last_clock_out().map(|e| e.time_str()), Some("17:00".to_string()));
    }

    #[test]
    fn paired_clock_out_wins_over_excess_one() {
        let events = vec![
            stamp(1, StampKind::ClockIn, "2024-02-01 09:00"),
            stamp(2, StampKind::ClockOut, "2024-02-01 18:00"),
            stamp(3, StampKind::ClockOut, "2024-02-01 18:30"),
        ];
        let day = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let mut modified = events.clone();
        modified[0].is_modified = true;

        let plain = aggregate(&events, day, day, 60).unwrap().next().unwrap();
        let edited = aggregate(&modified, day, day, 60).unwrap().next().unwrap();

        assert_eq!(plain.last_clock_out().map(|e| e.id), Some(2));
        assert!(!plain.has_modified());
        assert!(edited.has_modified());
    }
}
