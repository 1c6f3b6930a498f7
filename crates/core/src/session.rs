use serde::Serialize;

use crate::error::{DashError, Result};
use crate::secret::SecretString;

/// Login input. Never persisted.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub host: String,
    pub client_id: String,
    pub client_secret: SecretString,
}

impl Credentials {
    /// Builds credentials from raw form input, trimming every field.
    #[must_use]
    pub fn new(host: &str, client_id: &str, client_secret: &str) -> Self {
        Self {
            host: normalize_host(host),
            client_id: client_id.trim().to_owned(),
            client_secret: SecretString::new(client_secret.trim()),
        }
    }
}

/// The single active vendor session.
///
/// Construction enforces a non-empty host and token, so holding a `Session`
/// means vendor calls are allowed.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub host: String,
    #[serde(skip)]
    pub bearer_token: SecretString,
}

impl Session {
    pub fn new(host: &str, bearer_token: SecretString) -> Result<Self> {
        let host = normalize_host(host);
        if host.is_empty() || bearer_token.is_empty() {
            return Err(DashError::NotAuthenticated);
        }
        Ok(Self { host, bearer_token })
    }

    /// Base URL for vendor requests.
    #[must_use]
    pub fn base_url(&self) -> String {
        vendor_base_url(&self.host)
    }

    /// `Authorization` header value.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.bearer_token.expose())
    }
}

/// Trims whitespace and trailing slashes from a host typed into the login form.
#[must_use]
pub fn normalize_host(host: &str) -> String {
    host.trim().trim_end_matches('/').to_owned()
}

/// Hosts are entered without a scheme and reached over HTTPS. A host that
/// already carries a scheme is used as given.
#[must_use]
pub fn vendor_base_url(host: &str) -> String {
    let host = normalize_host(host);
    if host.starts_with("http://") || host.starts_with("https://") {
        host
    } else {
        format!("https://{host}")
    }
}
