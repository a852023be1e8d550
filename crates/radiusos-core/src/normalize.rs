//! Normalization from uploaded spreadsheet rows to a facility [`Table`].
//!
//! One normalizer serves every naming convention: column roles are matched
//! through [`ColumnConventions`] aliases after case and whitespace folding.

use std::collections::HashSet;

use crate::error::NormalizeError;
use crate::facility::{Column, ColumnRoles, FacilityRecord, Table};

/// A header row plus data rows, exactly as read from the input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Accepted column names for each role, in priority order.
///
/// Aliases are compared after [`normalize_column_name`], so `"Facility Name"`
/// and `"facility_name"` are the same alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnConventions {
    pub address: Vec<String>,
    pub name: Vec<String>,
    pub city: Vec<String>,
    pub state: Vec<String>,
    pub latitude: Vec<String>,
    pub longitude: Vec<String>,
}

impl Default for ColumnConventions {
    fn default() -> Self {
        fn names(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| (*s).to_owned()).collect()
        }

        Self {
            address: names(&["full_address", "address"]),
            name: names(&["facility_name", "name", "facility"]),
            city: names(&["city"]),
            state: names(&["state"]),
            latitude: names(&["lat", "latitude"]),
            longitude: names(&["lng", "lon", "long", "longitude"]),
        }
    }
}

/// Folds a header to its matching key: trimmed, lower-cased, with runs of
/// whitespace replaced by a single underscore. A leading UTF-8 BOM is dropped.
#[must_use]
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}')
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Normalizes `raw` using the default [`ColumnConventions`].
///
/// # Errors
///
/// Returns [`NormalizeError::MissingColumns`] when no address can be built.
pub fn normalize(raw: &RawTable) -> Result<Table, NormalizeError> {
    normalize_with(raw, &ColumnConventions::default())
}

/// Normalizes `raw` into a [`Table`] using the given column conventions.
///
/// - Duplicate headers (after folding) collapse to their first occurrence.
/// - A composite address comes from the address column when present and
///   non-blank, otherwise it is derived as `"{name}, {city}, {state}"`.
/// - Latitude/longitude cells that are blank, unparsable or out of range
///   leave the record unlocatable; they never fail the table.
/// - Rows whose cells are all blank are dropped.
///
/// # Errors
///
/// Returns [`NormalizeError::MissingColumns`] when the table has neither an
/// address column nor all of the name, city and state columns.
pub fn normalize_with(
    raw: &RawTable,
    conventions: &ColumnConventions,
) -> Result<Table, NormalizeError> {
    let (columns, source_index) = dedupe_columns(&raw.headers);
    let roles = resolve_roles(&columns, conventions);
    check_required(&roles)?;

    let mut records = Vec::with_capacity(raw.rows.len());
    let mut skipped_blank = 0usize;

    for row in &raw.rows {
        let cells: Vec<String> = source_index
            .iter()
            .map(|&i| row.get(i).map_or_else(String::new, |v| v.trim().to_owned()))
            .collect();

        if cells.iter().all(String::is_empty) {
            skipped_blank += 1;
            continue;
        }

        records.push(build_record(cells, &roles));
    }

    let locatable = records.iter().filter(|r| r.is_locatable()).count();
    tracing::debug!(
        columns = columns.len(),
        records = records.len(),
        locatable,
        skipped_blank,
        "normalized facility table"
    );

    Ok(Table {
        columns,
        roles,
        records,
    })
}

/// Folds headers and drops later duplicates. Returns the kept columns and,
/// for each, its index in the source row.
fn dedupe_columns(headers: &[String]) -> (Vec<Column>, Vec<usize>) {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    let mut source_index = Vec::new();

    for (i, header) in headers.iter().enumerate() {
        let mut key = normalize_column_name(header);
        if key.is_empty() {
            key = format!("unnamed_{}", i + 1);
        }
        if !seen.insert(key.clone()) {
            tracing::debug!(header = %header, key = %key, "dropping duplicate column");
            continue;
        }
        columns.push(Column {
            key,
            header: header.trim_start_matches('\u{feff}').trim().to_owned(),
        });
        source_index.push(i);
    }

    (columns, source_index)
}

fn resolve_roles(columns: &[Column], conventions: &ColumnConventions) -> ColumnRoles {
    let find = |aliases: &[String]| -> Option<usize> {
        aliases.iter().find_map(|alias| {
            let alias = normalize_column_name(alias);
            columns.iter().position(|c| c.key == alias)
        })
    };

    ColumnRoles {
        address: find(&conventions.address),
        name: find(&conventions.name),
        city: find(&conventions.city),
        state: find(&conventions.state),
        latitude: find(&conventions.latitude),
        longitude: find(&conventions.longitude),
    }
}

fn check_required(roles: &ColumnRoles) -> Result<(), NormalizeError> {
    if roles.address.is_some() {
        return Ok(());
    }

    let missing: Vec<String> = [
        ("facility_name", roles.name),
        ("city", roles.city),
        ("state", roles.state),
    ]
    .into_iter()
    .filter(|(_, idx)| idx.is_none())
    .map(|(field, _)| field.to_owned())
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(NormalizeError::MissingColumns { missing })
    }
}

fn build_record(cells: Vec<String>, roles: &ColumnRoles) -> FacilityRecord {
    let cell = |idx: Option<usize>| -> Option<String> {
        idx.and_then(|i| cells.get(i))
            .filter(|v| !v.is_empty())
            .cloned()
    };

    let name = cell(roles.name);
    let city = cell(roles.city);
    let state = cell(roles.state);

    let address = cell(roles.address).or_else(|| match (&name, &city, &state) {
        (Some(n), Some(c), Some(s)) => Some(format!("{n}, {c}, {s}")),
        _ => None,
    });

    let latitude = cell(roles.latitude).and_then(|v| parse_degrees(&v, 90.0));
    // A lone valid component is kept but never makes the record locatable.
    let longitude = cell(roles.longitude).and_then(|v| parse_degrees(&v, 180.0));

    FacilityRecord {
        name: name.or_else(|| address.clone()).unwrap_or_default(),
        address,
        city,
        state,
        latitude,
        longitude,
        cells,
    }
}

/// Parses a decimal-degree cell, rejecting non-finite or out-of-range values.
fn parse_degrees(raw: &str, limit: f64) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    (value.is_finite() && value.abs() <= limit).then_some(value)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
