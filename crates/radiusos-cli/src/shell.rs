//! `radiusos shell`: answer repeated searches against one loaded dataset.
//!
//! Each stdin line is either `address` or `radius|address`. Blank lines are
//! ignored and input ends at EOF.

use std::path::Path;

use radiusos_geocode::Geocoder;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{dataset, render};

/// One parsed shell query.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ShellQuery<'a> {
    pub(crate) radius_miles: f64,
    pub(crate) address: &'a str,
}

/// Parses a shell line. Returns `None` for blank lines.
///
/// A prefix before `|` is treated as the radius only when it parses as a
/// number, so addresses containing `|` still work.
pub(crate) fn parse_query_line(line: &str, default_radius: f64) -> Option<ShellQuery<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some((head, tail)) = line.split_once('|') {
        if let Ok(radius_miles) = head.trim().parse::<f64>() {
            let address = tail.trim();
            return (!address.is_empty()).then_some(ShellQuery {
                radius_miles,
                address,
            });
        }
    }

    Some(ShellQuery {
        radius_miles: default_radius,
        address: line,
    })
}

/// # Errors
///
/// Returns an error if the dataset cannot be loaded or stdin cannot be read.
/// Per-query failures are printed and the shell keeps going.
pub(crate) async fn run_shell<G: Geocoder>(
    geocoder: &G,
    input: &Path,
    default_radius: f64,
) -> anyhow::Result<()> {
    let table = dataset::get_or_load(geocoder, input).await?;
    println!(
        "{} facilities loaded, {} locatable; enter `address` or `radius|address`",
        table.records.len(),
        table.locatable_count()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(query) = parse_query_line(&line, default_radius) else {
            continue;
        };

        match radiusos_geocode::search(geocoder, table, query.address, query.radius_miles).await
        {
            Ok(outcome) => render::write_results(&mut std::io::stdout().lock(), &outcome)?,
            Err(e) => println!("error: {e}"),
        }
    }

    Ok(())
}
