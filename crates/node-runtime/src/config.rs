//! # Runtime Configuration
//!
//! Builds a [`GatewayConfig`] from defaults plus environment overrides.
//!
//! | Variable | Field |
//! |----------|-------|
//! | `PORT` | `http.port` |
//! | `NS_HTTP_PORT` | `http.port` (wins over `PORT`) |
//! | `NS_HTTP_HOST` | `http.host` |
//! | `NS_MAX_SUBMISSIONS` | `store.max_submissions` |
//! | `NS_WINDOW_SECS` | `report.window_secs` |
//! | `NS_MAX_REQUEST_SIZE` | `limits.max_request_size` |
//! | `NS_CORS_ORIGINS` | `cors.allowed_origins` (comma-separated) |

use ns_04_api_gateway::GatewayConfig;
use std::fmt::Display;
use std::str::FromStr;

/// Environment override errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigLoadError {
    /// A variable was set but could not be parsed.
    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Load configuration from the process environment.
pub fn load_config() -> Result<GatewayConfig, ConfigLoadError> {
    load_config_from(|name| std::env::var(name).ok())
}

/// Load configuration using `lookup` to read variables.
pub fn load_config_from<F>(lookup: F) -> Result<GatewayConfig, ConfigLoadError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = GatewayConfig::default();

    if let Some(port) = parse_var(&lookup, "PORT")? {
        config.http.port = port;
    }
    if let Some(port) = parse_var(&lookup, "NS_HTTP_PORT")? {
        config.http.port = port;
    }
    if let Some(host) = parse_var(&lookup, "NS_HTTP_HOST")? {
        config.http.host = host;
    }
    if let Some(max) = parse_var(&lookup, "NS_MAX_SUBMISSIONS")? {
        config.store.max_submissions = Some(max);
    }
    if let Some(secs) = parse_var(&lookup, "NS_WINDOW_SECS")? {
        config.report.window_secs = secs;
    }
    if let Some(size) = parse_var(&lookup, "NS_MAX_REQUEST_SIZE")? {
        config.limits.max_request_size = size;
    }
    if let Some(origins) = lookup("NS_CORS_ORIGINS") {
        config.cors.allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();
    }

    Ok(config)
}

fn parse_var<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigLoadError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let Some(value) = lookup(name) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigLoadError::InvalidVar {
            name,
            value,
            reason: e.to_string(),
        })
}
