// src/export/policy.rs

use crate::models::day_summary::DayKind;

/// Timesheet columns, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Date,
    Weekday,
    ClockIn,
    ClockOut,
    BreakHours,
    WorkedHours,
    Store,
    Status,
    Note,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::Date,
        Column::Weekday,
        Column::ClockIn,
        Column::ClockOut,
        Column::BreakHours,
        Column::WorkedHours,
        Column::Store,
        Column::Status,
        Column::Note,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Date => "Date",
            Column::Weekday => "Weekday",
            Column::ClockIn => "ClockIn",
            Column::ClockOut => "ClockOut",
            Column::BreakHours => "BreakHours",
            Column::WorkedHours => "WorkedHours",
            Column::Store => "Store",
            Column::Status => "Status",
            Column::Note => "Note",
        }
    }

    pub fn index(self) -> u16 {
        self as u16
    }

    pub fn width(self) -> f64 {
        match self {
            Column::Date => 12.0,
            Column::Weekday => 9.0,
            Column::ClockIn | Column::ClockOut => 10.0,
            Column::BreakHours | Column::WorkedHours => 12.0,
            Column::Store => 20.0,
            Column::Status => 22.0,
            Column::Note => 30.0,
        }
    }
}

/// What the person filling the sheet may do with a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAccess {
    Locked,
    Editable,
    /// Editable, restricted to the configured status list.
    Choice,
}

use CellAccess::{Choice, Editable, Locked};

/// Rows: columns in sheet order. Cells: worked, stray, no-attendance.
const POLICY: [[CellAccess; 3]; 9] = [
    [Locked, Locked, Locked],   // Date
    [Locked, Locked, Locked],   // Weekday
    [Locked, Locked, Locked],   // ClockIn
    [Locked, Locked, Locked],   // ClockOut
    [Locked, Locked, Locked],   // BreakHours
    [Locked, Locked, Locked],   // WorkedHours
    [Locked, Locked, Locked],   // Store
    [Locked, Locked, Choice],   // Status
    [Locked, Locked, Editable], // Note
];

pub fn access(column: Column, kind: DayKind) -> CellAccess {
    let k = match kind {
        DayKind::Worked => 0,
        DayKind::Stray => 1,
        DayKind::NoAttendance => 2,
    };
    POLICY[column as usize][k]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_no_attendance_days_unlock_status_and_note() {
        for col in Column::ALL {
            assert_eq!(access(col, DayKind::Worked), CellAccess::Locked);
            assert_eq!(access(col, DayKind::Stray), CellAccess::Locked);
        }

        assert_eq!(access(Column::Status, DayKind::NoAttendance), CellAccess::Choice);
        assert_eq!(access(Column::Note, DayKind::NoAttendance), CellAccess::Editable);
        assert_eq!(access(Column::ClockIn, DayKind::NoAttendance), CellAccess::Locked);
    }

    #[test]
    fn header_order_is_fixed() {
        let headers: Vec<&str> = Column::ALL.iter().map(|c| c.header()).collect();
        assert_eq!(
            headers,
            [
                "Date",
                "Weekday",
                "ClockIn",
                "ClockOut",
                "BreakHours",
                "WorkedHours",
                "Store",
                "Status",
                "Note"
            ]
        );
        assert_eq!(Column::Note.index(), 8);
    }
}
