//! Core domain for RadiusOS facility radius search.
//!
//! Holds the facility data model, the column normalizer, the geodesic
//! distance engine, the radius ranker, CSV import/export, map marker
//! emission, and application configuration. Nothing in this crate performs
//! network I/O; geocoding lives in `radiusos-geocode`.

pub mod app_config;
pub mod config;
pub mod distance;
pub mod error;
pub mod facility;
pub mod markers;
pub mod normalize;
pub mod rank;
pub mod table_io;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use distance::{distance_miles, METRES_PER_MILE};
pub use error::{ConfigError, CoreError, NormalizeError, TableIoError};
pub use facility::{
    Column, ColumnRoles, Coordinates, FacilityRecord, RadiusQuery, RankedResult, SearchPoint, Table,
};
pub use markers::{map_view, write_map_json, MapMarker, MapView};
pub use normalize::{normalize, normalize_column_name, normalize_with, ColumnConventions, RawTable};
pub use rank::{filter_within_radius, rank};
pub use table_io::{load_table, read_raw_csv, write_results_csv, write_table_csv};
