// src/export/model.rs

use crate::models::record::AttendanceRecord;
use serde::Serialize;

/// Flat record shape shared by all export formats.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
}

impl From<&AttendanceRecord> for RecordExport {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            key: r.submitted_key.clone(),
            name: r.display_name.clone(),
            date: r.date_str(),
            time: r.time_str(),
        }
    }
}

/// Headers for CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["Key", "Name", "Date", "Time"]
}

pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![r.key.clone(), r.name.clone(), r.date.clone(), r.time.clone()]
}
