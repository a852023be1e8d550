//! Process-wide facility dataset for the interactive shell.
//!
//! The table is loaded and geocoded once, then shared read-only for the life
//! of the process.

use std::path::Path;
use std::sync::OnceLock;

use radiusos_core::Table;
use radiusos_geocode::Geocoder;

use crate::geocode;

static DATASET: OnceLock<Table> = OnceLock::new();

/// Returns the loaded dataset, loading and geocoding `input` on first use.
///
/// Later calls return the first table regardless of `input`.
///
/// # Errors
///
/// Returns an error if the first load fails; nothing is cached in that case.
pub(crate) async fn get_or_load<G: Geocoder>(
    geocoder: &G,
    input: &Path,
) -> anyhow::Result<&'static Table> {
    if let Some(table) = DATASET.get() {
        return Ok(table);
    }

    let (table, report) = geocode::load_and_geocode(geocoder, input).await?;
    geocode::print_report(&report);
    Ok(DATASET.get_or_init(|| table))
}
