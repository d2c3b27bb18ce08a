use systembolaget::config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Clone)]
pub(crate) struct CliConfig {
    pub client: ClientConfig,
    pub log_level: String,
}

/// Load CLI configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric setting does not parse.
pub(crate) fn load_config() -> Result<CliConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function, so tests
/// can pass a plain `HashMap` instead of touching the process environment.
fn build_config<F>(lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let client = ClientConfig {
        base_url: or_default("SYSTEMBOLAGET_BASE_URL", DEFAULT_BASE_URL),
        user_agent: or_default("SYSTEMBOLAGET_USER_AGENT", DEFAULT_USER_AGENT),
        request_timeout_secs: parse_u64(
            "SYSTEMBOLAGET_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?,
        connect_timeout_secs: parse_u64(
            "SYSTEMBOLAGET_CONNECT_TIMEOUT_SECS",
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?,
    };
    let log_level = or_default("SYSTEMBOLAGET_LOG_LEVEL", "info");

    Ok(CliConfig { client, log_level })
}
