//! Historical quote CSV loading.
//!
//! The file needs a header with `Date` and `Close` columns; other columns
//! are ignored. Rows with any empty cell are skipped. Rows are kept in file
//! order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use pricer_core::types::Date;
use pricer_volatility::PriceSeries;
use tracing::{debug, info};

use crate::{CliError, Result};

const DATE_COLUMN: &str = "Date";
const CLOSE_COLUMN: &str = "Close";

/// Load a [`PriceSeries`] from a quote CSV file
pub fn load_quotes(path: &Path) -> Result<PriceSeries> {
    let file = File::open(path).map_err(|e| {
        CliError::quotes(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let series = read_quotes(file)?;
    info!(path = %path.display(), rows = series.len(), "Loaded quotes");
    Ok(series)
}

/// Read a [`PriceSeries`] from quote CSV data
pub fn read_quotes<R: Read>(reader: R) -> Result<PriceSeries> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let date_idx = column_index(&headers, DATE_COLUMN)?;
    let close_idx = column_index(&headers, CLOSE_COLUMN)?;

    let mut series = PriceSeries::default();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if is_incomplete(&record, headers.len()) {
            debug!(row = row + 1, "Skipping incomplete quote row");
            continue;
        }

        let date = Date::parse_quote(&record[date_idx])
            .map_err(|e| CliError::quotes(format!("row {}: {}", row + 1, e)))?;
        let close: f64 = record[close_idx].parse().map_err(|_| {
            CliError::quotes(format!(
                "row {}: invalid close '{}'",
                row + 1,
                &record[close_idx]
            ))
        })?;
        series.push(date, close);
    }

    Ok(series)
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}') == name)
        .ok_or_else(|| CliError::quotes(format!("missing '{}' column", name)))
}

fn is_incomplete(record: &StringRecord, width: usize) -> bool {
    record.len() < width || record.iter().any(str::is_empty)
}
