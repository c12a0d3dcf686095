// src/export/weekday.rs

use chrono::NaiveDate;

const LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weekday with Sunday = 0 … Saturday = 6, counted from 1970-01-01 (a Thursday).
pub fn weekday_index(date: NaiveDate) -> u32 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN);
    let days = (date - epoch).num_days();
    (days + 4).rem_euclid(7) as u32
}

pub fn weekday_label(date: NaiveDate) -> &'static str {
    LABELS[weekday_index(date) as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekendMark {
    Sunday,
    Saturday,
    Weekday,
}

pub fn weekend_mark(date: NaiveDate) -> WeekendMark {
    match weekday_index(date) {
        0 => WeekendMark::Sunday,
        6 => WeekendMark::Saturday,
        _ => WeekendMark::Weekday,
    }
}
