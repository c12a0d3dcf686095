use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Last calendar day of `year-month`, or `None` for an invalid month.
pub fn month_last_day(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// First and last day of a month.
pub fn month_bounds(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(format!("{year:04}-{month:02}"));
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let last = month_last_day(year, month).ok_or_else(invalid)?;
    Ok((first, last))
}

/// `YYYY-MM` to the month's inclusive bounds; `None` means the current month.
pub fn resolve_month(month: Option<&str>) -> AppResult<(NaiveDate, NaiveDate)> {
    match month {
        None => {
            let t = today();
            month_bounds(t.year(), t.month())
        }
        Some(raw) => {
            let first = NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(raw.to_string()))?;
            month_bounds(first.year(), first.month())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_bounds_follow_leap_years() {
        let (s, e) = month_bounds(2024, 2).unwrap();
        assert_eq!(s, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let (_, e) = month_bounds(2025, 2).unwrap();
        assert_eq!(e.day(), 28);

        let (_, e) = month_bounds(2025, 12).unwrap();
        assert_eq!(e, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn bad_month_is_invalid_date() {
        assert!(matches!(resolve_month(Some("2025-13")), Err(AppError::InvalidDate(_))));
        assert!(matches!(month_bounds(2025, 0), Err(AppError::InvalidDate(_))));
    }
}
