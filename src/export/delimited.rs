// src/export/delimited.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{EventExport, event_to_row, get_headers};
use csv::Writer;

/// Excel opens UTF-8 CSV files correctly only when they start with a BOM.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One row per raw stamp, no pairing.
pub fn format_delimited_text(events: &[EventExport]) -> AppResult<Vec<u8>> {
    let mut wtr = Writer::from_writer(UTF8_BOM.to_vec());

    wtr.write_record(get_headers()).map_err(AppError::export)?;
    for ev in events {
        wtr.write_record(event_to_row(ev)).map_err(AppError::export)?;
    }

    wtr.into_inner().map_err(AppError::export)
}
