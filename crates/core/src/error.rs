use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while validating dashboard input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DashError {
    #[error("Invalid dates: {0}")]
    InvalidDate(String),

    #[error("Invalid transaction status: {0}")]
    InvalidTransactionStatus(String),

    #[error("Invalid review report kind: {0}")]
    InvalidReviewReportKind(String),

    #[error("Not authenticated.")]
    NotAuthenticated,
}

impl DashError {
    /// Text shown in the dashboard error banner.
    #[must_use]
    pub fn banner_message(&self) -> String {
        self.to_string()
    }
}

pub type Result<T> = StdResult<T, DashError>;
