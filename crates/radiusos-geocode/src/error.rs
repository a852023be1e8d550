use thiserror::Error;

/// Provider-side failures. These never escape the [`crate::Geocoder`]
/// boundary: the client logs them and reports the address as unresolved.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from geocoding provider")]
    UnexpectedStatus { status: u16 },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("provider returned unusable coordinates lat={lat:?} lon={lon:?}")]
    InvalidCoordinates { lat: String, lon: String },

    #[error("invalid geocoder base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
