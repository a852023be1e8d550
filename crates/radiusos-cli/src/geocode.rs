//! `radiusos geocode`: bulk-geocode an upload and print the full listing.

use std::path::Path;

use anyhow::Context;
use radiusos_core::{ColumnConventions, Table};
use radiusos_geocode::{geocode_missing, BulkGeocodeReport, Geocoder};

use crate::{export, render};

/// Loads `input` and fills in coordinates for every record that lacks them.
pub(crate) async fn load_and_geocode<G: Geocoder>(
    geocoder: &G,
    input: &Path,
) -> anyhow::Result<(Table, BulkGeocodeReport)> {
    let mut table = radiusos_core::load_table(input, &ColumnConventions::default())
        .with_context(|| format!("failed to load {}", input.display()))?;
    let report = geocode_missing(geocoder, &mut table).await;
    Ok((table, report))
}

pub(crate) fn print_report(report: &BulkGeocodeReport) {
    println!(
        "geocoded {} of {} lookups ({} already located, {} without address)",
        report.resolved, report.attempted, report.already_located, report.missing_address
    );
}

/// # Errors
///
/// Returns an error if the input cannot be loaded or normalized, or an
/// output file cannot be written. Geocoding failures are reported, not
/// propagated.
pub(crate) async fn run_geocode<G: Geocoder>(
    geocoder: &G,
    input: &Path,
    output: Option<&Path>,
    markers: Option<&Path>,
) -> anyhow::Result<()> {
    let (table, report) = load_and_geocode(geocoder, input).await?;

    print_report(&report);
    render::write_listing(&mut std::io::stdout().lock(), &table)?;

    if let Some(path) = output {
        export::write_table_file(path, &table)?;
    }
    if let Some(path) = markers {
        let view = radiusos_core::map_view(table.records.iter().map(|r| (r, None)));
        export::write_markers_file(path, view.as_ref())?;
    }

    Ok(())
}
