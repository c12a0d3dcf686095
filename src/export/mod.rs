// src/export/mod.rs

pub mod delimited;
pub(crate) mod fs_utils;
pub mod json;
pub mod logic;
pub mod model;
pub mod policy;
pub(crate) mod range;
pub mod weekday;
pub mod xlsx;

pub use delimited::format_delimited_text;
pub use logic::ExportLogic;
pub use model::EventExport;
pub use xlsx::{SheetOptions, format_spreadsheet};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for every export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// Formats of the flat log dump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
