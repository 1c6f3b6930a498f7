//! Environment variable parsing for server-level knobs.
//!
//! Vendor credentials and hosts are never read from the environment; only
//! process tuning such as the outbound request timeout lives here.

use std::time::Duration;

use crate::constants::DEFAULT_HTTP_TIMEOUT_SECS;

/// Environment variable overriding the vendor request timeout.
pub const HTTP_TIMEOUT_ENV: &str = "VANTAGE_DASH_HTTP_TIMEOUT_SECS";

/// Parse an environment variable, falling back to `default`.
///
/// An unset variable is the expected case and stays silent. A value that
/// fails to parse is logged at warn level and ignored.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    let Ok(raw) = std::env::var(var) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                var,
                value = %raw,
                default = %default,
                "invalid env var value, using default"
            );
            default
        },
    }
}

/// Timeout applied to every vendor HTTP call.
///
/// A zero value would disable progress entirely, so it is treated like an
/// invalid value.
#[must_use]
pub fn http_timeout() -> Duration {
    let secs = env_parse_with_default(HTTP_TIMEOUT_ENV, DEFAULT_HTTP_TIMEOUT_SECS);
    if secs == 0 {
        tracing::warn!(var = HTTP_TIMEOUT_ENV, "zero timeout ignored");
        return Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS);
    }
    Duration::from_secs(secs)
}
