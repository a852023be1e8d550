//! HTTP client for Nominatim-compatible geocoding APIs.
//!
//! Works against the public OpenStreetMap Nominatim service or any hosted
//! service that speaks the same `/search?format=json` dialect and accepts a
//! static `key` parameter. Provider errors are surfaced by
//! [`NominatimClient::lookup`] and collapsed to "unresolved" by the
//! [`Geocoder`] implementation.

use std::time::Duration;

use radiusos_core::Coordinates;
use reqwest::{Client, Url};

use crate::config::GeocoderConfig;
use crate::error::GeocodeError;
use crate::geocoder::Geocoder;
use crate::types::NominatimPlace;

/// Client for a Nominatim-compatible search endpoint.
///
/// Use [`NominatimClient::new`] with a [`GeocoderConfig`]; point `base_url`
/// at a mock server in tests.
pub struct NominatimClient {
    client: Client,
    search_url: Url,
    api_key: Option<String>,
    country_codes: Option<String>,
    min_delay: Duration,
}

impl NominatimClient {
    /// Creates a client from explicit provider configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        // Ensure exactly one trailing slash so `join` appends rather than
        // replacing the last path segment.
        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let search_url = Url::parse(&normalised)
            .and_then(|base| base.join("search"))
            .map_err(|e| GeocodeError::InvalidBaseUrl {
                base_url: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            search_url,
            api_key: config.api_key.clone(),
            country_codes: config.country_codes.clone(),
            min_delay: config.min_delay,
        })
    }

    /// Resolves `address` to its best match.
    ///
    /// Returns `Ok(None)` when the provider has no match or `address` is blank
    /// (no request is sent for a blank address).
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure or timeout.
    /// - [`GeocodeError::UnexpectedStatus`] on any non-2xx status.
    /// - [`GeocodeError::Deserialize`] if the body is not a JSON place list.
    /// - [`GeocodeError::InvalidCoordinates`] if the first match has
    ///   unparsable or out-of-range coordinates.
    pub async fn lookup(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let address = address.trim();
        if address.is_empty() {
            return Ok(None);
        }

        let url = self.build_url(address);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("search(q={address})"),
                source: e,
            })?;

        let Some(place) = places.into_iter().next() else {
            return Ok(None);
        };

        let coordinates = parse_place(&place)?;
        tracing::debug!(
            address,
            matched = place.display_name.as_deref().unwrap_or(""),
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            "geocoded address"
        );
        Ok(Some(coordinates))
    }

    /// Builds the search URL with percent-encoded query parameters.
    fn build_url(&self, address: &str) -> Url {
        let mut url = self.search_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", address);
            pairs.append_pair("format", "json");
            pairs.append_pair("limit", "1");
            if let Some(codes) = &self.country_codes {
                pairs.append_pair("countrycodes", codes);
            }
            if let Some(key) = &self.api_key {
                pairs.append_pair("key", key);
            }
        }
        url
    }
}

impl Geocoder for NominatimClient {
    async fn geocode(&self, address: &str) -> Option<Coordinates> {
        match self.lookup(address).await {
            Ok(Some(coordinates)) => Some(coordinates),
            Ok(None) => {
                tracing::debug!(address, "no geocoding match");
                None
            }
            Err(e) => {
                tracing::warn!(address, error = %e, "geocoding provider error; treating as unresolved");
                None
            }
        }
    }

    fn min_delay(&self) -> Duration {
        self.min_delay
    }
}

fn parse_place(place: &NominatimPlace) -> Result<Coordinates, GeocodeError> {
    let invalid = || GeocodeError::InvalidCoordinates {
        lat: place.lat.clone(),
        lon: place.lon.clone(),
    };

    let lat = place.lat.trim().parse::<f64>().map_err(|_| invalid())?;
    let lon = place.lon.trim().parse::<f64>().map_err(|_| invalid())?;
    Coordinates::new(lat, lon).ok_or_else(invalid)
}
