//! Observability seam for the dashboard pipeline.
//!
//! The service reports what it does through a [`PipelineObserver`] instead of
//! logging directly. Secret-bearing fields are carried as [`SecretString`],
//! whose formatting is masked, so an observer cannot leak them by accident.

use crate::review::ReviewReportKind;
use crate::secret::SecretString;

/// Something worth reporting during a dashboard action.
#[derive(Debug)]
pub enum PipelineEvent<'a> {
    LoginStarted { host: &'a str, client_id: &'a str, client_secret: &'a SecretString },
    LoginSucceeded { host: &'a str, token: &'a SecretString },
    SkillsLoaded { count: usize },
    TransactionsFetched { items: usize },
    ReviewReportLoaded { kind: ReviewReportKind, transactions: usize },
    ReviewReportDegraded { kind: ReviewReportKind, reason: &'a str },
    FetchCompleted { records: usize, with_manual_review: u64, straight_through: u64 },
    ActionFailed { action: &'a str, message: &'a str },
    LoggedOut,
}

/// Receives pipeline events.
pub trait PipelineObserver: Send + Sync {
    fn observe(&self, event: &PipelineEvent<'_>);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {
    fn observe(&self, _event: &PipelineEvent<'_>) {}
}
