//! Review-report join data and the report schema strategy.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashError;

/// What the review report says about one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewInfo {
    pub manual_review: bool,
    pub document_skill_name: String,
}

impl ReviewInfo {
    /// Folds another report row for the same transaction into this entry.
    ///
    /// Rows are not unique per transaction: manual review is sticky once any
    /// row reports it, and the latest non-empty document skill name wins.
    pub fn merge_row(&mut self, manual_review: bool, document_skill_name: &str) {
        self.manual_review |= manual_review;
        let name = document_skill_name.trim();
        if !name.is_empty() {
            name.clone_into(&mut self.document_skill_name);
        }
    }
}

/// Transaction id -> review info.
pub type ReviewMap = HashMap<String, ReviewInfo>;

/// Upstream report schema used to decide manual review.
///
/// The vendor exposes two reporting endpoints with different columns; which
/// one a tenant has access to varies, so the choice is configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewReportKind {
    /// QA process-skill documents report with a `HasManualReview` flag column.
    #[default]
    QaDocuments,
    /// Transaction steps report; reviewed when an operator name or email is set.
    TransactionSteps,
}

/// Values of the `HasManualReview` column that count as reviewed.
const TRUTHY_FLAGS: [&str; 3] = ["true", "1", "yes"];

impl ReviewReportKind {
    pub const ALL_VARIANTS_STR: &'static str = "qa-documents|transaction-steps";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::QaDocuments => "qa-documents",
            Self::TransactionSteps => "transaction-steps",
        }
    }

    /// Endpoint path relative to the vendor base URL.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match *self {
            Self::QaDocuments => "/api/reporting/v1/qa/process-skills/documents",
            Self::TransactionSteps => "/api/reporting/v1/transaction-steps",
        }
    }

    /// Name of the query parameter carrying the process skill id.
    #[must_use]
    pub const fn skill_param(&self) -> &'static str {
        match *self {
            Self::QaDocuments => "processSkillId",
            Self::TransactionSteps => "skillId",
        }
    }

    /// Decides manual review for one CSV row. `field` looks a column up by
    /// header name.
    pub fn row_is_reviewed<'a>(&self, field: impl Fn(&str) -> Option<&'a str>) -> bool {
        match *self {
            Self::QaDocuments => field("HasManualReview").is_some_and(|flag| {
                let flag = flag.trim().to_lowercase();
                TRUTHY_FLAGS.contains(&flag.as_str())
            }),
            Self::TransactionSteps => ["ManualReviewOperatorName", "ManualReviewOperatorEmail"]
                .iter()
                .any(|column| field(column).is_some_and(|v| !v.trim().is_empty())),
        }
    }
}

impl fmt::Display for ReviewReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewReportKind {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "qa-documents" => Ok(Self::QaDocuments),
            "transaction-steps" => Ok(Self::TransactionSteps),
            other => Err(DashError::InvalidReviewReportKind(other.to_owned())),
        }
    }
}
