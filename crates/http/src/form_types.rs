//! Form bodies posted by the dashboard (Deserialize)

use serde::Deserialize;
use vantage_dash_core::Credentials;
use vantage_dash_service::FetchRequest;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
}

impl LoginForm {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.url, &self.client_id, &self.client_secret)
    }
}

#[derive(Debug, Deserialize)]
pub struct FetchForm {
    #[serde(default)]
    pub skill_id: String,
    #[serde(default)]
    pub transaction_type: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// Page-size override. Browsers send an empty string for a blank field.
    pub limit: Option<String>,
}

impl FetchForm {
    /// Blank or non-numeric `limit` falls back to the default page size.
    pub fn into_request(self) -> FetchRequest {
        let limit = self.limit.as_deref().map(str::trim).filter(|s| !s.is_empty()).and_then(|s| {
            s.parse::<usize>()
                .inspect_err(|e| tracing::warn!(limit = s, error = %e, "ignoring invalid limit"))
                .ok()
        });
        FetchRequest {
            skill_id: self.skill_id.trim().to_owned(),
            transaction_type: self.transaction_type,
            start_date: self.start_date,
            end_date: self.end_date,
            limit,
        }
    }
}
