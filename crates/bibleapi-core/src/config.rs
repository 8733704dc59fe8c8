use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    load_app_config_with_base_url(None)
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load application configuration, with `base_url` (when given) taking the
/// place of `BIBLEAPI_BASE_URL` before any validation runs.
///
/// Loads `.env` like [`load_app_config`].
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed,
/// including an empty `base_url` override.
pub fn load_app_config_with_base_url(base_url: Option<&str>) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(with_base_url_override(|key| std::env::var(key), base_url))
}

/// Wraps `lookup` so that `BIBLEAPI_BASE_URL` resolves to `base_url` when one
/// is given, whatever the environment holds.
fn with_base_url_override<'a, F>(
    lookup: F,
    base_url: Option<&'a str>,
) -> impl Fn(&str) -> Result<String, std::env::VarError> + 'a
where
    F: Fn(&str) -> Result<String, std::env::VarError> + 'a,
{
    move |key| match base_url {
        Some(url) if key == "BIBLEAPI_BASE_URL" => Ok(url.to_string()),
        _ => lookup(key),
    }
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; unset variables fall back to
/// [`AppConfig::default`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: u32| -> Result<u32, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.trim().parse::<u32>().map_err(|e| invalid(var, e.to_string())),
            Err(_) => Ok(default),
        }
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| invalid(var, e.to_string())),
            Err(_) => Ok(default),
        }
    };

    let base_url = match lookup("BIBLEAPI_BASE_URL") {
        Ok(raw) if raw.trim().is_empty() => {
            return Err(invalid("BIBLEAPI_BASE_URL", "must not be empty".to_string()));
        }
        Ok(raw) => raw.trim().to_string(),
        Err(_) => defaults.base_url,
    };

    let log_level = lookup("BIBLEAPI_LOG_LEVEL").unwrap_or(defaults.log_level);
    let user_agent = lookup("BIBLEAPI_USER_AGENT").unwrap_or(defaults.user_agent);

    let request_timeout_secs =
        parse_u64("BIBLEAPI_REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "BIBLEAPI_REQUEST_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let max_retries = parse_u32("BIBLEAPI_MAX_RETRIES", defaults.max_retries)?;
    let retry_backoff_base_ms =
        parse_u64("BIBLEAPI_RETRY_BACKOFF_BASE_MS", defaults.retry_backoff_base_ms)?;

    Ok(AppConfig {
        base_url,
        log_level,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
