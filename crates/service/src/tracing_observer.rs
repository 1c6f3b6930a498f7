//! Default observer that forwards pipeline events to `tracing`.

use vantage_dash_core::{PipelineEvent, PipelineObserver};

/// Emits each pipeline event as a structured log line. Secret fields are
/// formatted through their masked `Display`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn observe(&self, event: &PipelineEvent<'_>) {
        match *event {
            PipelineEvent::LoginStarted { host, client_id, client_secret } => {
                tracing::info!(host, client_id, client_secret = %client_secret, "authenticating");
            },
            PipelineEvent::LoginSucceeded { host, token } => {
                tracing::info!(host, token = %token, "authenticated");
            },
            PipelineEvent::SkillsLoaded { count } => {
                tracing::info!(count, "skills loaded");
            },
            PipelineEvent::TransactionsFetched { items } => {
                tracing::info!(items, "transactions fetched");
            },
            PipelineEvent::ReviewReportLoaded { kind, transactions } => {
                tracing::info!(kind = %kind, transactions, "review report loaded");
            },
            PipelineEvent::ReviewReportDegraded { kind, reason } => {
                tracing::warn!(kind = %kind, reason, "review report unavailable, treating all as straight-through");
            },
            PipelineEvent::FetchCompleted { records, with_manual_review, straight_through } => {
                tracing::info!(records, with_manual_review, straight_through, "aggregation complete");
            },
            PipelineEvent::ActionFailed { action, message } => {
                tracing::warn!(action, message, "dashboard action failed");
            },
            PipelineEvent::LoggedOut => {
                tracing::info!("logged out");
            },
        }
    }
}
