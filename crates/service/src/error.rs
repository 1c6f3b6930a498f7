//! Typed error enum for the service layer.

use thiserror::Error;
use vantage_dash_core::DashError;
use vantage_dash_vendor::VendorError;

/// Failure of a dashboard action.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Vendor call failed (auth, non-200, transport, parse).
    #[error(transparent)]
    Vendor(#[from] VendorError),

    /// Form input rejected or no active session.
    #[error(transparent)]
    Input(#[from] DashError),

    /// CSV export could not be written.
    #[error("csv export: {0}")]
    Export(#[from] csv::Error),

    /// CSV export buffer could not be finalized.
    #[error("csv export: {0}")]
    ExportBuffer(String),
}

impl ServiceError {
    /// Text shown in the dashboard error banner.
    #[must_use]
    pub fn banner_message(&self) -> String {
        match self {
            Self::Vendor(e) => e.banner_message(),
            Self::Input(e) => e.banner_message(),
            Self::Export(_) | Self::ExportBuffer(_) => self.to_string(),
        }
    }
}
