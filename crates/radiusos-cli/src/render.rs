//! Console tables for facility listings and radius results.

use std::io::{self, Write};

use radiusos_core::{FacilityRecord, Table};
use radiusos_geocode::SearchOutcome;

const NAME_WIDTH: usize = 32;

/// Truncates `value` to [`NAME_WIDTH`] characters, marking the cut with `...`.
fn clip(value: &str) -> String {
    if value.chars().count() > NAME_WIDTH {
        format!("{}...", value.chars().take(NAME_WIDTH - 3).collect::<String>())
    } else {
        value.to_owned()
    }
}

fn fmt_degrees(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.5}"))
}

fn place(record: &FacilityRecord) -> String {
    match (&record.city, &record.state) {
        (Some(city), Some(state)) => format!("{city}, {state}"),
        (Some(only), None) | (None, Some(only)) => only.clone(),
        (None, None) => String::new(),
    }
}

/// Writes every record, locatable or not, in input order.
pub(crate) fn write_listing<W: Write>(out: &mut W, table: &Table) -> io::Result<()> {
    if table.records.is_empty() {
        writeln!(out, "no facilities in input")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<34}{:<24}{:>11}{:>12}",
        "FACILITY", "LOCATION", "LATITUDE", "LONGITUDE"
    )?;
    for record in &table.records {
        writeln!(
            out,
            "{:<34}{:<24}{:>11}{:>12}",
            clip(&record.name),
            place(record),
            fmt_degrees(record.latitude),
            fmt_degrees(record.longitude)
        )?;
    }
    writeln!(
        out,
        "{} of {} facilities located",
        table.locatable_count(),
        table.records.len()
    )
}

/// Writes ranked results, nearest first.
pub(crate) fn write_results<W: Write>(out: &mut W, outcome: &SearchOutcome<'_>) -> io::Result<()> {
    let query = &outcome.query;
    let point = query.search_point;

    if outcome.results.is_empty() {
        return writeln!(
            out,
            "no facilities within {} mi of ({:.5}, {:.5})",
            query.radius_miles, point.latitude, point.longitude
        );
    }

    writeln!(
        out,
        "{} facilities within {} mi of ({:.5}, {:.5})",
        outcome.results.len(),
        query.radius_miles,
        point.latitude,
        point.longitude
    )?;
    writeln!(out, "{:>4}  {:<34}{:>10}  ADDRESS", "#", "FACILITY", "MILES")?;
    for (i, result) in outcome.results.iter().enumerate() {
        writeln!(
            out,
            "{:>4}  {:<34}{:>10.2}  {}",
            i + 1,
            clip(&result.record.name),
            result.distance_miles,
            result.record.address.as_deref().unwrap_or("")
        )?;
    }
    Ok(())
}
