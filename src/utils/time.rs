//! Time utilities: parsing user-typed timestamps and converting minutes.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Accepts `YYYY-MM-DD HH:MM` or `YYYY-MM-DD HH:MM:SS`.
pub fn parse_timestamp(input: &str) -> AppResult<NaiveDateTime> {
    let s = input.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .map_err(|_| AppError::InvalidTime(input.to_string()))
}

/// Decimal hours with two digits, as written in the timesheet.
pub fn minutes_to_hours(mins: i64) -> f64 {
    (mins as f64 / 60.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_with_or_without_seconds() {
        let a = parse_timestamp("2025-05-02 09:00").unwrap();
        let b = parse_timestamp(" 2025-05-02 09:00:00 ").unwrap();
        assert_eq!(a, b);
        assert!(matches!(parse_timestamp("09:00"), Err(AppError::InvalidTime(_))));
    }

    #[test]
    fn minutes_are_rendered() {
        assert_eq!(minutes_to_hours(450), 7.5);
        assert_eq!(minutes_to_hours(20), 0.33);
    }
}
