// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::models::record::AttendanceRecord;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Resolve a range expression to date bounds.
    ///
    /// `None` or `"all"` disables filtering; otherwise expressions like
    /// `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and `start:end` ranges apply.
    pub fn date_bounds(range: &Option<String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
        match range {
            None => Ok(None),
            Some(r) if r.eq_ignore_ascii_case("all") => Ok(None),
            Some(r) => Ok(Some(parse_range(r)?)),
        }
    }

    /// Export the log snapshot.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute path of the output file
    /// - `range`: optional date filter (see `date_bounds`)
    pub fn export(
        log: &[AttendanceRecord],
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let bounds = Self::date_bounds(range)?;

        let records: Vec<RecordExport> = log
            .iter()
            .filter(|r| match bounds {
                None => true,
                Some((start, end)) => r.date >= start && r.date <= end,
            })
            .map(RecordExport::from)
            .collect();

        if records.is_empty() {
            warning("No records found for the selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
            ExportFormat::Xlsx => export_xlsx(&records, path)?,
        }

        Ok(())
    }
}
