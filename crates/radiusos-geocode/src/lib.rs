//! Geocoding for RadiusOS: the [`Geocoder`] capability, a Nominatim-compatible
//! HTTP client, the throttled bulk pass over a facility table, and the
//! search pipeline that ties a geocoded search address to the radius ranker.

pub mod batch;
pub mod client;
pub mod config;
pub mod error;
pub mod geocoder;
pub mod search;
pub(crate) mod types;

pub use batch::{geocode_missing, BulkGeocodeReport};
pub use client::NominatimClient;
pub use config::GeocoderConfig;
pub use error::GeocodeError;
pub use geocoder::Geocoder;
pub use search::{search, SearchError, SearchOutcome};
