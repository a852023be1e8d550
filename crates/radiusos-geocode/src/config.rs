use std::time::Duration;

use radiusos_core::AppConfig;

/// Provider settings handed to [`crate::NominatimClient::new`].
#[derive(Clone)]
pub struct GeocoderConfig {
    /// Root of a Nominatim-compatible API; `/search` is appended.
    pub base_url: String,
    /// Sent as the `key` query parameter when set (hosted Nominatim services).
    pub api_key: Option<String>,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Comma-separated ISO country codes restricting matches.
    pub country_codes: Option<String>,
    pub min_delay: Duration,
}

impl GeocoderConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.geocoder_base_url.clone(),
            api_key: config.geocoder_api_key.clone(),
            user_agent: config.geocoder_user_agent.clone(),
            timeout_secs: config.geocoder_timeout_secs,
            country_codes: config.geocoder_country_codes.clone(),
            min_delay: config.geocoder_min_delay(),
        }
    }
}

impl std::fmt::Debug for GeocoderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocoderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .field("country_codes", &self.country_codes)
            .field("min_delay", &self.min_delay)
            .finish()
    }
}
