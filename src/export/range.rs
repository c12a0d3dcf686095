// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::{Datelike, NaiveDate};

/// Parse `--range` into inclusive bounds.
///
/// Accepted forms: `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and `start:end` with both
/// sides in the same form.
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, end) = match r.split_once(':') {
        Some((s, e)) => {
            let (s, e) = (s.trim(), e.trim());
            if s.len() != e.len() {
                return Err(AppError::InvalidDate(format!(
                    "{r}: start and end must use the same format"
                )));
            }
            (parse_bound(s)?.0, parse_bound(e)?.1)
        }
        None => parse_bound(r.trim())?,
    };

    if start > end {
        return Err(AppError::invalid_range(start, end));
    }
    Ok((start, end))
}

/// First and last day covered by one year, month or day token.
fn parse_bound(token: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(token.to_string());

    match token.len() {
        4 => {
            let y: i32 = token.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{token}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            let last = month_last_day(first.year(), first.month()).ok_or_else(invalid)?;
            Ok((first, last))
        }
        10 => {
            let d = NaiveDate::parse_from_str(token, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}
