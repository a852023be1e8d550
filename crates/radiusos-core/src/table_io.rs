//! CSV import and export for facility tables.
//!
//! Exports keep the uploaded row shape: original headers in original order,
//! coordinates written back into existing latitude/longitude columns (or
//! appended as `latitude`/`longitude` when the upload had none), and
//! `distance_miles` appended for radius results.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::TableIoError;
use crate::facility::{FacilityRecord, RankedResult, Table};
use crate::normalize::{normalize_with, ColumnConventions, RawTable};

/// Reads a headed CSV into a [`RawTable`]. Ragged rows are accepted.
///
/// # Errors
///
/// Returns [`TableIoError::Csv`] if the input is not valid CSV.
pub fn read_raw_csv<R: Read>(reader: R) -> Result<RawTable, TableIoError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let headers = csv_reader
        .headers()?
        .iter()
        .map(str::to_owned)
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(RawTable { headers, rows })
}

/// Reads and normalizes the CSV file at `path`.
///
/// # Errors
///
/// Returns [`TableIoError::Io`] if the file cannot be opened,
/// [`TableIoError::Csv`] on malformed CSV, or [`TableIoError::Normalize`]
/// if required columns are missing.
pub fn load_table(path: &Path, conventions: &ColumnConventions) -> Result<Table, TableIoError> {
    let file = File::open(path).map_err(|source| TableIoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = read_raw_csv(file)?;
    let table = normalize_with(&raw, conventions)?;

    tracing::info!(
        path = %path.display(),
        records = table.records.len(),
        locatable = table.locatable_count(),
        "loaded facility table"
    );

    Ok(table)
}

/// Writes the unfiltered table, including records that are not locatable.
///
/// # Errors
///
/// Returns [`TableIoError`] if writing fails.
pub fn write_table_csv<W: Write>(table: &Table, writer: W) -> Result<(), TableIoError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(export_headers(table, false))?;
    for record in &table.records {
        out.write_record(export_row(table, record, None))?;
    }
    out.flush()?;
    Ok(())
}

/// Writes radius results in ranked order, each row augmented with
/// `distance_miles` rounded to two decimals.
///
/// # Errors
///
/// Returns [`TableIoError`] if writing fails.
pub fn write_results_csv<W: Write>(
    table: &Table,
    results: &[RankedResult<'_>],
    writer: W,
) -> Result<(), TableIoError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(export_headers(table, true))?;
    for result in results {
        out.write_record(export_row(table, result.record, Some(result.distance_miles)))?;
    }
    out.flush()?;
    Ok(())
}

fn export_headers(table: &Table, with_distance: bool) -> Vec<String> {
    let mut headers: Vec<String> = table.columns.iter().map(|c| c.header.clone()).collect();
    if !table.has_coordinate_columns() {
        headers.push("latitude".to_owned());
        headers.push("longitude".to_owned());
    }
    if with_distance {
        headers.push("distance_miles".to_owned());
    }
    headers
}

fn export_row(table: &Table, record: &FacilityRecord, distance_miles: Option<f64>) -> Vec<String> {
    let format_degrees = |v: Option<f64>| v.map(|d| d.to_string()).unwrap_or_default();

    let mut row = record.cells.clone();
    row.resize(table.columns.len(), String::new());

    match (table.roles.latitude, table.roles.longitude) {
        (Some(lat_idx), Some(lng_idx)) => {
            // Geocoded values fill cells the upload left blank or malformed.
            if let Some(coords) = record.coordinates() {
                row[lat_idx] = coords.latitude.to_string();
                row[lng_idx] = coords.longitude.to_string();
            }
        }
        _ => {
            row.push(format_degrees(record.latitude));
            row.push(format_degrees(record.longitude));
        }
    }

    if let Some(d) = distance_miles {
        row.push(format!("{d:.2}"));
    }
    row
}
