//! Transaction types: the raw vendor item and the normalized record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DashError;
use crate::json_utils::{coerce_count, get_kv, scalar_to_string};
use crate::review::ReviewInfo;

/// Status filter accepted by the completed-transactions endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[default]
    Processed,
    Succeeded,
    Failed,
    All,
}

impl TransactionStatus {
    pub const ALL_VARIANTS: &'static [TransactionStatus] =
        &[Self::Processed, Self::Succeeded, Self::Failed, Self::All];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Processed => "Processed",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::All => "All",
        }
    }

    /// Value of the `TransactionStatus` query parameter. `All` sends nothing;
    /// the server treats an absent filter as every status.
    #[must_use]
    pub const fn query_value(&self) -> Option<&'static str> {
        match *self {
            Self::All => None,
            other => Some(other.as_str()),
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "processed" => Ok(Self::Processed),
            "succeeded" => Ok(Self::Succeeded),
            "failed" => Ok(Self::Failed),
            "all" => Ok(Self::All),
            other => Err(DashError::InvalidTransactionStatus(other.to_owned())),
        }
    }
}

/// One item of the completed-transactions listing, as sent by the vendor.
///
/// Loosely typed fields stay as [`Value`] and are coerced when the record is
/// built, so a malformed item never fails a whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    #[serde(default)]
    pub transaction_id: Value,
    #[serde(default)]
    pub create_time_utc: Value,
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub page_count: Value,
    #[serde(default)]
    pub skill_id: Value,
    #[serde(default)]
    pub skill_version: Value,
    #[serde(default)]
    pub document_count: Value,
    #[serde(default)]
    pub file_parameters: Value,
    #[serde(default)]
    pub transaction_parameters: Value,
}

impl RawTransaction {
    #[must_use]
    pub fn id(&self) -> String {
        scalar_to_string(&self.transaction_id)
    }
}

/// A vendor transaction joined with its review-report entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub created: String,
    pub status: String,
    pub page_count: u64,
    pub source_file_name: String,
    pub document_skill_name: String,
    pub manual_review: bool,
    pub skill_id: String,
    pub skill_version: String,
    pub document_count: u64,
    pub source_type: String,
    pub app: String,
}

impl TransactionRecord {
    /// Builds a record from a raw item. A missing review entry means the
    /// transaction went straight through with no known document skill.
    #[must_use]
    pub fn from_raw(raw: &RawTransaction, review: Option<&ReviewInfo>) -> Self {
        Self {
            id: raw.id(),
            created: scalar_to_string(&raw.create_time_utc),
            status: scalar_to_string(&raw.status),
            page_count: coerce_count(&raw.page_count),
            source_file_name: get_kv(&raw.file_parameters, "SourceFileName"),
            document_skill_name: review
                .map(|info| info.document_skill_name.clone())
                .unwrap_or_default(),
            manual_review: review.is_some_and(|info| info.manual_review),
            skill_id: scalar_to_string(&raw.skill_id),
            skill_version: scalar_to_string(&raw.skill_version),
            document_count: coerce_count(&raw.document_count),
            source_type: get_kv(&raw.file_parameters, "SourceType"),
            app: get_kv(&raw.transaction_parameters, "App"),
        }
    }

    /// `Yes`/`No` label used by the table and the CSV export.
    #[must_use]
    pub const fn manual_review_label(&self) -> &'static str {
        if self.manual_review { "Yes" } else { "No" }
    }
}
