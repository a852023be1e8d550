//! Facility data model shared by the normalizer, the ranker and the
//! geocoding pipeline.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A WGS-84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Builds a coordinate pair, returning `None` when either component is
    /// non-finite or outside `[-90, 90]` / `[-180, 180]`.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Self {
            latitude,
            longitude,
        })
    }
}

/// The resolved location of a user's search address.
pub type SearchPoint = Coordinates;

/// A table column after header normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Lower-case, underscore-joined name used for role matching.
    pub key: String,
    /// Header text as it appeared in the source file (first occurrence).
    pub header: String,
}

/// Positions of the columns the pipeline cares about, as indexes into
/// [`Table::columns`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    pub address: Option<usize>,
    pub name: Option<usize>,
    pub city: Option<usize>,
    pub state: Option<usize>,
    pub latitude: Option<usize>,
    pub longitude: Option<usize>,
}

/// One facility row.
///
/// `cells` keeps every source value aligned with [`Table::columns`] so that
/// exports reproduce the uploaded row shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityRecord {
    pub name: String,
    /// Composite address, either supplied or derived as `"{name}, {city}, {state}"`.
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub cells: Vec<String>,
}

impl FacilityRecord {
    /// Returns the record's coordinates when both components are present and valid.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::new(self.latitude?, self.longitude?)
    }

    #[must_use]
    pub fn is_locatable(&self) -> bool {
        self.coordinates().is_some()
    }

    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.latitude = Some(coordinates.latitude);
        self.longitude = Some(coordinates.longitude);
    }
}

/// A normalized facility table. Record order is the input row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
    pub roles: ColumnRoles,
    pub records: Vec<FacilityRecord>,
}

impl Table {
    /// Iterates the records that can take part in distance computation.
    pub fn locatable(&self) -> impl Iterator<Item = &FacilityRecord> {
        self.records.iter().filter(|r| r.is_locatable())
    }

    #[must_use]
    pub fn locatable_count(&self) -> usize {
        self.locatable().count()
    }

    #[must_use]
    pub fn has_coordinate_columns(&self) -> bool {
        self.roles.latitude.is_some() && self.roles.longitude.is_some()
    }
}

/// A search point plus the maximum distance a result may lie from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusQuery {
    pub search_point: SearchPoint,
    pub radius_miles: f64,
}

impl RadiusQuery {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRadius`] unless `radius_miles` is finite
    /// and strictly positive. No upper bound is enforced.
    pub fn new(search_point: SearchPoint, radius_miles: f64) -> Result<Self, CoreError> {
        Ok(Self {
            search_point,
            radius_miles: Self::validate_radius(radius_miles)?,
        })
    }

    /// Checks a radius without needing a search point, so callers can reject
    /// bad input before spending a geocoding call.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRadius`] for zero, negative or non-finite values.
    pub fn validate_radius(radius_miles: f64) -> Result<f64, CoreError> {
        if radius_miles.is_finite() && radius_miles > 0.0 {
            Ok(radius_miles)
        } else {
            Err(CoreError::InvalidRadius(radius_miles))
        }
    }
}

/// A locatable facility within a radius query, with its distance from the
/// search point. Borrows the source record; ranking never mutates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedResult<'a> {
    pub record: &'a FacilityRecord,
    pub distance_miles: f64,
}
