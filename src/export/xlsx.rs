// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::policy::{CellAccess, Column, access};
use crate::export::weekday::{WeekendMark, weekday_label, weekend_mark};
use crate::models::day_summary::{DayKind, DaySummary};
use crate::utils::formatting::day_flags;
use crate::utils::time::minutes_to_hours;
use rust_xlsxwriter::{Color, DataValidation, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use tracing::debug;

pub const SHEET_NAME: &str = "Attendance";

/// Rendering switches taken from the configuration.
#[derive(Debug, Clone, Copy)]
pub struct SheetOptions<'a> {
    /// Protect the sheet so that only the policy's editable cells change.
    pub lock_editing: bool,
    pub password: Option<&'a str>,
    /// Choices of the Status drop-down on no-attendance days.
    pub statuses: &'a [String],
}

struct Formats {
    header: Format,
    locked: Format,
    unlocked: Format,
    hours: Format,
    sunday: Format,
    saturday: Format,
}

impl Formats {
    fn new() -> Self {
        Self {
            header: Format::new()
                .set_bold()
                .set_font_color(Color::RGB(0xFFFFFF))
                .set_background_color(Color::RGB(0x4F81BD))
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin),
            locked: Format::new(),
            unlocked: Format::new().set_unlocked(),
            hours: Format::new().set_num_format("0.00"),
            sunday: Format::new().set_font_color(Color::RGB(0xFF0000)),
            saturday: Format::new().set_font_color(Color::RGB(0x0000FF)),
        }
    }

    fn for_date(&self, mark: WeekendMark) -> &Format {
        match mark {
            WeekendMark::Sunday => &self.sunday,
            WeekendMark::Saturday => &self.saturday,
            WeekendMark::Weekday => &self.locked,
        }
    }
}

/// Render the day summaries as a single-sheet workbook.
///
/// Returns the file bytes and the suggested file name
/// `attendance_<subject>_<first date>.xlsx`. Nothing is written to disk.
pub fn format_spreadsheet(
    days: &[DaySummary],
    subject: &str,
    opts: &SheetOptions<'_>,
) -> AppResult<(Vec<u8>, String)> {
    let first = days
        .first()
        .ok_or_else(|| AppError::ExportFailed("no days to render".to_string()))?;
    let filename = format!("attendance_{}_{}.xlsx", subject, first.date.format("%Y-%m-%d"));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(AppError::export)?;

    let formats = Formats::new();

    // ---------------------------
    // Header
    // ---------------------------
    for col in Column::ALL {
        worksheet
            .write_string_with_format(0, col.index(), col.header(), &formats.header)
            .map_err(AppError::export)?;
        worksheet
            .set_column_width(col.index(), col.width())
            .map_err(AppError::export)?;
    }
    worksheet.set_freeze_panes(1, 0).map_err(AppError::export)?;

    let status_list = if opts.statuses.is_empty() {
        None
    } else {
        let choices: Vec<&str> = opts.statuses.iter().map(String::as_str).collect();
        Some(
            DataValidation::new()
                .allow_list_strings(&choices)
                .map_err(AppError::export)?,
        )
    };

    // ---------------------------
    // One row per date
    // ---------------------------
    for (i, day) in days.iter().enumerate() {
        let row = (i + 1) as u32;
        write_day(worksheet, row, day, &formats, status_list.as_ref())?;
    }

    if opts.lock_editing {
        match opts.password {
            Some(pw) if !pw.is_empty() => {
                worksheet.protect_with_password(pw);
            }
            _ => {
                worksheet.protect();
            }
        }
    }

    let bytes = workbook.save_to_buffer().map_err(AppError::export)?;
    debug!(rows = days.len(), bytes = bytes.len(), %filename, "timesheet rendered");

    Ok((bytes, filename))
}

fn write_day(
    ws: &mut Worksheet,
    row: u32,
    day: &DaySummary,
    formats: &Formats,
    status_list: Option<&DataValidation>,
) -> AppResult<()> {
    let kind = day.kind();
    let date_fmt = formats.for_date(weekend_mark(day.date));

    ws.write_string_with_format(row, Column::Date.index(), day.date.format("%Y-%m-%d").to_string(), date_fmt)
        .map_err(AppError::export)?;
    ws.write_string_with_format(row, Column::Weekday.index(), weekday_label(day.date), date_fmt)
        .map_err(AppError::export)?;

    if let Some(ev) = day.first_clock_in() {
        ws.write_string(row, Column::ClockIn.index(), ev.time_str())
            .map_err(AppError::export)?;
    }
    if let Some(ev) = day.last_clock_out() {
        ws.write_string(row, Column::ClockOut.index(), ev.time_str())
            .map_err(AppError::export)?;
    }

    if kind == DayKind::Worked {
        ws.write_number_with_format(
            row,
            Column::BreakHours.index(),
            minutes_to_hours(day.break_minutes),
            &formats.hours,
        )
        .map_err(AppError::export)?;
        ws.write_number_with_format(
            row,
            Column::WorkedHours.index(),
            minutes_to_hours(day.worked_minutes),
            &formats.hours,
        )
        .map_err(AppError::export)?;
    }

    if let Some(store) = day.store_name() {
        ws.write_string(row, Column::Store.index(), store)
            .map_err(AppError::export)?;
    }

    // Status and Note follow the access policy; locked cells carry data.
    match access(Column::Status, kind) {
        CellAccess::Choice => {
            ws.write_blank(row, Column::Status.index(), &formats.unlocked)
                .map_err(AppError::export)?;
            if let Some(dv) = status_list {
                ws.add_data_validation(row, Column::Status.index(), row, Column::Status.index(), dv)
                    .map_err(AppError::export)?;
            }
        }
        CellAccess::Editable => {
            ws.write_blank(row, Column::Status.index(), &formats.unlocked)
                .map_err(AppError::export)?;
        }
        CellAccess::Locked => {
            let flags = day_flags(day.has_open_period(), day.anomaly, day.order_violation, day.has_modified());
            if !flags.is_empty() {
                ws.write_string(row, Column::Status.index(), flags)
                    .map_err(AppError::export)?;
            }
        }
    }

    match access(Column::Note, kind) {
        CellAccess::Locked => {
            if let Some(note) = day.note() {
                ws.write_string(row, Column::Note.index(), note)
                    .map_err(AppError::export)?;
            }
        }
        CellAccess::Editable | CellAccess::Choice => {
            ws.write_blank(row, Column::Note.index(), &formats.unlocked)
                .map_err(AppError::export)?;
        }
    }

    Ok(())
}
