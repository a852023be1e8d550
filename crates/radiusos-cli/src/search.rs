//! `radiusos search`: the full upload → geocode → rank pipeline.

use std::path::PathBuf;

use anyhow::Context;
use radiusos_core::{ColumnConventions, Table};
use radiusos_geocode::{Geocoder, SearchOutcome};

use crate::{export, geocode, render};

/// Parsed arguments of one `search` invocation, with the radius default
/// already applied.
#[derive(Debug, Clone)]
pub(crate) struct SearchRequest {
    pub(crate) input: PathBuf,
    pub(crate) address: String,
    pub(crate) radius_miles: f64,
    pub(crate) output: Option<PathBuf>,
    pub(crate) markers: Option<PathBuf>,
    pub(crate) skip_geocode: bool,
}

/// # Errors
///
/// Returns an error if the input cannot be loaded, the radius is invalid,
/// the search address cannot be geocoded, or an output file cannot be
/// written. Nothing is rendered when the search address is unresolved.
pub(crate) async fn run_search<G: Geocoder>(
    geocoder: &G,
    request: &SearchRequest,
) -> anyhow::Result<()> {
    let table = if request.skip_geocode {
        radiusos_core::load_table(&request.input, &ColumnConventions::default())
            .with_context(|| format!("failed to load {}", request.input.display()))?
    } else {
        let (table, report) = geocode::load_and_geocode(geocoder, &request.input).await?;
        geocode::print_report(&report);
        table
    };

    let outcome = radiusos_geocode::search(
        geocoder,
        &table,
        &request.address,
        request.radius_miles,
    )
    .await?;

    present(&table, &outcome, request)
}

fn present(
    table: &Table,
    outcome: &SearchOutcome<'_>,
    request: &SearchRequest,
) -> anyhow::Result<()> {
    render::write_results(&mut std::io::stdout().lock(), outcome)?;

    if let Some(path) = &request.output {
        export::write_results_file(path, table, &outcome.results)?;
    }
    if let Some(path) = &request.markers {
        let view = radiusos_core::map_view(
            outcome
                .results
                .iter()
                .map(|r| (r.record, Some(r.distance_miles))),
        );
        export::write_markers_file(path, view.as_ref())?;
    }

    Ok(())
}
