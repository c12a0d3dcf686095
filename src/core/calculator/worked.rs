use chrono::NaiveDateTime;

/// Worked minutes of one closed period, net of the fixed break.
/// Never negative: a 30 minute stint with a 60 minute break yields 0.
pub fn worked_minutes(clock_in: NaiveDateTime, clock_out: NaiveDateTime, break_minutes: i64) -> i64 {
    ((clock_out - clock_in).num_minutes() - break_minutes).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn full_day_minus_one_hour_break() {
        assert_eq!(worked_minutes(at(9, 0), at(18, 0), 60), 480);
    }

    #[test]
    fn short_stint_clamps_to_zero() {
        assert_eq!(worked_minutes(at(9, 0), at(9, 30), 60), 0);
    }

    #[test]
    fn reversed_pair_clamps_to_zero() {
        assert_eq!(worked_minutes(at(18, 0), at(9, 0), 0), 0);
    }
}
