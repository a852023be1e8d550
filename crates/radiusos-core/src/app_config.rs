use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// Log filter used when `RADIUSOS_LOG_LEVEL` is unset. Development shows
    /// pipeline progress; test and production only show warnings.
    #[must_use]
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Development => "info",
            Environment::Test | Environment::Production => "warn",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub geocoder_base_url: String,
    pub geocoder_api_key: Option<String>,
    pub geocoder_user_agent: String,
    pub geocoder_timeout_secs: u64,
    /// Minimum spacing between consecutive provider calls in a bulk pass.
    pub geocoder_min_delay_ms: u64,
    /// Comma-separated ISO 3166-1 alpha-2 codes passed to the provider.
    pub geocoder_country_codes: Option<String>,
    pub default_radius_miles: f64,
}

impl AppConfig {
    #[must_use]
    pub fn geocoder_min_delay(&self) -> Duration {
        Duration::from_millis(self.geocoder_min_delay_ms)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("geocoder_base_url", &self.geocoder_base_url)
            .field(
                "geocoder_api_key",
                &self.geocoder_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("geocoder_user_agent", &self.geocoder_user_agent)
            .field("geocoder_timeout_secs", &self.geocoder_timeout_secs)
            .field("geocoder_min_delay_ms", &self.geocoder_min_delay_ms)
            .field("geocoder_country_codes", &self.geocoder_country_codes)
            .field("default_radius_miles", &self.default_radius_miles)
            .finish()
    }
}
