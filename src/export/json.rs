// src/export/json.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::EventExport;

/// Pretty-printed JSON array of flat rows.
pub fn format_json(events: &[EventExport]) -> AppResult<Vec<u8>> {
    serde_json::to_vec_pretty(events).map_err(AppError::export)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_serialize_with_employee_code_key() {
        let ev = EventExport {
            id: 3,
            timestamp: "2025-05-02 18:00:00".into(),
            store: "North".into(),
            name: "Kim".into(),
            kind: "CLOCK_OUT".into(),
            code: "1001".into(),
            modified: false,
            original_timestamp: None,
        };

        let bytes = format_json(&[ev]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value[0]["employee_code"], "1001");
        assert_eq!(value[0]["kind"], "CLOCK_OUT");
        assert!(value[0]["original_timestamp"].is_null());
    }
}
