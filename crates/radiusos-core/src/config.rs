use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_GEOCODER_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_GEOCODER_USER_AGENT: &str = "radiusos_mapper/0.1";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; parsing is decoupled from the process
/// environment so it can be tested with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("RADIUSOS_ENV", "development"))?;
    let log_level = or_default("RADIUSOS_LOG_LEVEL", env.default_log_level());

    let geocoder_base_url = or_default("RADIUSOS_GEOCODER_BASE_URL", DEFAULT_GEOCODER_BASE_URL);
    let geocoder_api_key = optional("RADIUSOS_GEOCODER_API_KEY");
    let geocoder_user_agent = or_default("RADIUSOS_GEOCODER_USER_AGENT", DEFAULT_GEOCODER_USER_AGENT);
    let geocoder_timeout_secs = parse_u64("RADIUSOS_GEOCODER_TIMEOUT_SECS", "10")?;
    let geocoder_min_delay_ms = parse_u64("RADIUSOS_GEOCODER_MIN_DELAY_MS", "1000")?;
    let geocoder_country_codes = optional("RADIUSOS_GEOCODER_COUNTRY_CODES");

    let default_radius_miles =
        parse_radius(&or_default("RADIUSOS_DEFAULT_RADIUS_MILES", "25"))?;

    Ok(AppConfig {
        env,
        log_level,
        geocoder_base_url,
        geocoder_api_key,
        geocoder_user_agent,
        geocoder_timeout_secs,
        geocoder_min_delay_ms,
        geocoder_country_codes,
        default_radius_miles,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s.trim() {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "RADIUSOS_ENV".to_string(),
            reason: format!("expected development, test or production, got '{other}'"),
        }),
    }
}

fn parse_radius(raw: &str) -> Result<f64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: "RADIUSOS_DEFAULT_RADIUS_MILES".to_string(),
        reason,
    };

    let radius = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| invalid(e.to_string()))?;
    if !radius.is_finite() || radius <= 0.0 {
        return Err(invalid(format!("must be a positive number, got {raw}")));
    }
    Ok(radius)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
