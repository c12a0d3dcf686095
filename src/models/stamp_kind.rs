use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What a single stamp records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StampKind {
    #[value(name = "in", alias = "clock-in")]
    ClockIn,
    #[value(name = "out", alias = "clock-out")]
    ClockOut,
    #[value(name = "break-start")]
    BreakStart,
    #[value(name = "break-end")]
    BreakEnd,
}

impl StampKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            StampKind::ClockIn => "CLOCK_IN",
            StampKind::ClockOut => "CLOCK_OUT",
            StampKind::BreakStart => "BREAK_START",
            StampKind::BreakEnd => "BREAK_END",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "CLOCK_IN" => Some(StampKind::ClockIn),
            "CLOCK_OUT" => Some(StampKind::ClockOut),
            "BREAK_START" => Some(StampKind::BreakStart),
            "BREAK_END" => Some(StampKind::BreakEnd),
            _ => None,
        }
    }

    /// Human label used in tables and success messages.
    pub fn label(&self) -> &'static str {
        match self {
            StampKind::ClockIn => "Clock in",
            StampKind::ClockOut => "Clock out",
            StampKind::BreakStart => "Break start",
            StampKind::BreakEnd => "Break end",
        }
    }

    pub fn is_clock_in(&self) -> bool {
        matches!(self, StampKind::ClockIn)
    }

    pub fn is_clock_out(&self) -> bool {
        matches!(self, StampKind::ClockOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_strings_are_stable() {
        for kind in [
            StampKind::ClockIn,
            StampKind::ClockOut,
            StampKind::BreakStart,
            StampKind::BreakEnd,
        ] {
            assert_eq!(StampKind::from_db_str(kind.to_db_str()), Some(kind));
        }
        assert_eq!(StampKind::from_db_str("in"), None);
    }
}
