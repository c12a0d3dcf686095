use crate::core::calculator::worked::worked_minutes;
use crate::models::stamp_event::StampEvent;
use crate::models::stamp_kind::StampKind;

/// One CLOCK_IN matched with the CLOCK_OUT of the same rank on its day.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkPeriod {
    pub in_event: StampEvent,
    pub out_event: Option<StampEvent>,
    pub worked_minutes: i64,
    /// No CLOCK_OUT yet (still clocked in, or forgotten).
    pub is_open: bool,
    /// The paired CLOCK_OUT is earlier than its CLOCK_IN.
    pub out_of_order: bool,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Timeline {
    /// Every stamp of the day, chronological (break stamps included).
    pub events: Vec<StampEvent>,
    pub periods: Vec<WorkPeriod>,
    /// CLOCK_OUTs left over once every CLOCK_IN is paired.
    pub unmatched_outs: Vec<StampEvent>,
    pub clock_ins: usize,
    pub clock_outs: usize,
}

impl Timeline {
    pub fn total_worked_minutes(&self) -> i64 {
        self.periods.iter().map(|p| p.worked_minutes).sum()
    }

    pub fn closed_periods(&self) -> usize {
        self.periods.iter().filter(|p| !p.is_open).count()
    }

    /// More CLOCK_OUT than CLOCK_IN on the day.
    pub fn has_excess_clock_out(&self) -> bool {
        self.clock_outs > self.clock_ins
    }

    pub fn has_order_violation(&self) -> bool {
        self.periods.iter().any(|p| p.out_of_order)
    }
}

/// Pair the stamps of a single day.
///
/// Index based: after sorting by timestamp, the i-th CLOCK_IN takes the
/// i-th CLOCK_OUT. Trailing CLOCK_INs become open periods, trailing
/// CLOCK_OUTs are kept in `unmatched_outs`. Break stamps are carried along
/// in `events` but never paired.
pub fn build_timeline<'a, I>(events: I, break_minutes: i64) -> Timeline
where
    I: IntoIterator<Item = &'a StampEvent>,
{
    let mut sorted: Vec<StampEvent> = events.into_iter().cloned().collect();
    if sorted.is_empty() {
        return Timeline::default();
    }

    // -----------------------------
    // Sort events chronologically
    // -----------------------------
    sorted.sort_by_key(|e| (e.timestamp, e.id));

    let ins: Vec<&StampEvent> = sorted.iter().filter(|e| e.kind == StampKind::ClockIn).collect();
    let outs: Vec<&StampEvent> = sorted.iter().filter(|e| e.kind == StampKind::ClockOut).collect();

    // -----------------------------
    // Build periods
    // -----------------------------
    let periods = ins
        .iter()
        .enumerate()
        .map(|(i, in_ev)| match outs.get(i) {
            Some(out_ev) => WorkPeriod {
                in_event: (*in_ev).clone(),
                out_event: Some((*out_ev).clone()),
                worked_minutes: worked_minutes(in_ev.timestamp, out_ev.timestamp, break_minutes),
                is_open: false,
                out_of_order: out_ev.timestamp < in_ev.timestamp,
            },
            None => WorkPeriod {
                in_event: (*in_ev).clone(),
                out_event: None,
                worked_minutes: 0,
                is_open: true,
                out_of_order: false,
            },
        })
        .collect();

    let unmatched_outs = outs.iter().skip(ins.len()).map(|e| (*e).clone()).collect();

    Timeline {
        clock_ins: ins.len(),
        clock_outs: outs.len(),
        periods,
        unmatched_outs,
        events: sorted,
    }
}
