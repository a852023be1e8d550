//! File outputs: CSV tables and map marker JSON.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context;
use radiusos_core::{MapView, RankedResult, Table};

pub(crate) fn write_table_file(path: &Path, table: &Table) -> anyhow::Result<()> {
    let file = create(path)?;
    radiusos_core::write_table_csv(table, file)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote {} rows to {}", table.records.len(), path.display());
    Ok(())
}

pub(crate) fn write_results_file(
    path: &Path,
    table: &Table,
    results: &[RankedResult<'_>],
) -> anyhow::Result<()> {
    let file = create(path)?;
    radiusos_core::write_results_csv(table, results, file)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote {} results to {}", results.len(), path.display());
    Ok(())
}

/// Writes `view` as JSON, or reports that there is nothing to map.
pub(crate) fn write_markers_file(path: &Path, view: Option<&MapView>) -> anyhow::Result<()> {
    let Some(view) = view else {
        println!("No locatable facilities; skipped {}", path.display());
        return Ok(());
    };
    let file = create(path)?;
    radiusos_core::write_map_json(view, file)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote {} markers to {}", view.markers.len(), path.display());
    Ok(())
}

fn create(path: &Path) -> anyhow::Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}
