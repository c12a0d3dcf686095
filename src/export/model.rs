// src/export/model.rs

use serde::Serialize;

/// Flat attendance row: one raw stamp with its store and employee joined in.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventExport {
    pub id: i64,
    pub timestamp: String,
    pub store: String,
    pub name: String,
    pub kind: String,
    #[serde(rename = "employee_code")]
    pub code: String,
    pub modified: bool,
    pub original_timestamp: Option<String>,
}

/// Header for the delimited-text dump.
pub(crate) fn get_headers() -> [&'static str; 8] {
    [
        "ID",
        "Timestamp",
        "Store",
        "Name",
        "Kind",
        "EmployeeCode",
        "Modified",
        "OriginalTimestamp",
    ]
}

pub(crate) fn event_to_row(e: &EventExport) -> [String; 8] {
    [
        e.id.to_string(),
        e.timestamp.clone(),
        e.store.clone(),
        e.name.clone(),
        e.kind.clone(),
        e.code.clone(),
        if e.modified { "1" } else { "0" }.to_string(),
        e.original_timestamp.clone().unwrap_or_default(),
    ]
}
