//! CSV export for fetched dashboard tables.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::error::DashboardError;

/// Write a fetched table to `path` as CSV and return the number of rows
/// written. The header row is taken from the row type's field names; an
/// empty table produces an empty file.
pub fn export_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<u64, DashboardError> {
    let file = File::create(path)
        .map_err(|e| DashboardError::Export(format!("Failed to create file: {}", e)))?;

    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    let mut rows_exported: u64 = 0;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| DashboardError::Export(format!("Failed to write row: {}", e)))?;
        rows_exported += 1;
    }

    writer
        .flush()
        .map_err(|e| DashboardError::Export(format!("Failed to flush writer: {}", e)))?;

    Ok(rows_exported)
}
