//! Search pipeline: geocode the user's address once, then rank the table.

use radiusos_core::{rank, CoreError, RadiusQuery, RankedResult, Table};
use thiserror::Error;

use crate::geocoder::Geocoder;

#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    /// The search address did not geocode. Nothing was ranked or rendered.
    #[error("search address could not be resolved: {address}")]
    SearchAddressUnresolved { address: String },

    #[error(transparent)]
    InvalidRadius(#[from] CoreError),
}

/// A resolved query and its ranked results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<'a> {
    pub query: RadiusQuery,
    pub results: Vec<RankedResult<'a>>,
}

/// Runs one radius search against an already-geocoded table.
///
/// The radius is validated before any provider call. The search address is
/// geocoded once, without the bulk-pass delay.
///
/// # Errors
///
/// - [`SearchError::InvalidRadius`] for a zero, negative or non-finite radius.
/// - [`SearchError::SearchAddressUnresolved`] when the address does not
///   geocode; the ranker is not invoked.
pub async fn search<'a, G: Geocoder>(
    geocoder: &G,
    table: &'a Table,
    address: &str,
    radius_miles: f64,
) -> Result<SearchOutcome<'a>, SearchError> {
    let radius_miles = RadiusQuery::validate_radius(radius_miles)?;

    let Some(search_point) = geocoder.geocode(address).await else {
        tracing::warn!(address, "search address could not be resolved");
        return Err(SearchError::SearchAddressUnresolved {
            address: address.to_owned(),
        });
    };

    let query = RadiusQuery::new(search_point, radius_miles)?;
    let results = rank(table, &query);

    tracing::info!(
        address,
        radius_miles,
        latitude = search_point.latitude,
        longitude = search_point.longitude,
        matches = results.len(),
        "radius search complete"
    );

    Ok(SearchOutcome { query, results })
}
