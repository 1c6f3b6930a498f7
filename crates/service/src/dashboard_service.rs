use std::sync::Arc;

use futures_util::TryStreamExt;
use tokio::sync::{RwLock, RwLockReadGuard};
use vantage_dash_core::{
    Credentials, DashError, DateWindow, PipelineEvent, PipelineObserver, RawTransaction,
    ReviewMap, Session, TransactionStatus, aggregate,
};
use vantage_dash_vendor::{TransactionQuery, VendorClient};

use crate::error::ServiceError;
use crate::export::export_records_csv;
use crate::state::DashboardState;
use crate::tracing_observer::TracingObserver;

/// Raw fetch-form input.
#[derive(Debug, Clone, Default)]
pub struct FetchRequest {
    pub skill_id: String,
    pub transaction_type: String,
    pub start_date: String,
    pub end_date: String,
    pub limit: Option<usize>,
}

/// Runs dashboard actions against the vendor and keeps their results.
///
/// The state lock is held only to read the session and to commit results,
/// never across a vendor call. Two overlapping actions therefore both run to
/// completion and the later commit wins; readers may observe the state from
/// before an in-flight action commits.
pub struct DashboardService {
    client: VendorClient,
    state: RwLock<DashboardState>,
    observer: Arc<dyn PipelineObserver>,
}

impl DashboardService {
    #[must_use]
    pub fn new(client: VendorClient) -> Self {
        Self {
            client,
            state: RwLock::new(DashboardState::default()),
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replaces the observer that receives pipeline events.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Read access for rendering. Do not hold across an await.
    pub async fn state(&self) -> RwLockReadGuard<'_, DashboardState> {
        self.state.read().await
    }

    /// Exchanges credentials for a session, then reloads skills.
    ///
    /// On failure the banner is set and any prior session is kept.
    pub async fn login(&self, credentials: Credentials) -> Result<(), ServiceError> {
        self.state.write().await.clear_error();
        self.observer.observe(&PipelineEvent::LoginStarted {
            host: &credentials.host,
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
        });

        let session = match self.client.authenticate(&credentials).await {
            Ok(session) => session,
            Err(e) => return Err(self.fail("authenticate", e.into()).await),
        };
        self.observer.observe(&PipelineEvent::LoginSucceeded {
            host: &session.host,
            token: &session.bearer_token,
        });
        self.state.write().await.session = Some(session);

        self.reload_skills().await
    }

    /// Repopulates the skill cache; clears it on failure.
    pub async fn reload_skills(&self) -> Result<(), ServiceError> {
        let session = self.begin_action().await?;

        match self.client.list_skills(&session).await {
            Ok(skills) => {
                self.observer.observe(&PipelineEvent::SkillsLoaded { count: skills.len() });
                self.state.write().await.skills = skills;
                Ok(())
            },
            Err(e) => {
                self.state.write().await.skills.clear();
                Err(self.fail("load skills", e.into()).await)
            },
        }
    }

    /// Runs the fetch and aggregate pipeline and replaces cached results.
    ///
    /// Input errors set the banner and leave the cache alone. A failed
    /// transaction listing also clears the cached results. A failed review
    /// report only downgrades every record to straight-through.
    pub async fn fetch_transactions(&self, request: FetchRequest) -> Result<(), ServiceError> {
        let session = self.begin_action().await?;

        let status: TransactionStatus = match request.transaction_type.parse() {
            Ok(status) => status,
            Err(e) => return Err(self.fail("fetch transactions", ServiceError::Input(e)).await),
        };
        let window = match DateWindow::from_local_dates(&request.start_date, &request.end_date) {
            Ok(window) => window,
            Err(e) => return Err(self.fail("fetch transactions", ServiceError::Input(e)).await),
        };
        let query =
            TransactionQuery::new(&request.skill_id, status, window).with_page_size(request.limit);

        let items: Vec<RawTransaction> =
            match self.client.list_transactions(&session, &query).try_collect().await {
                Ok(items) => items,
                Err(e) => {
                    self.state.write().await.clear_results();
                    return Err(self.fail("fetch transactions", e.into()).await);
                },
            };
        self.observer.observe(&PipelineEvent::TransactionsFetched { items: items.len() });

        let review_map = self.review_map(&session, &query).await;
        let aggregation = aggregate(&items, &review_map);
        self.observer.observe(&PipelineEvent::FetchCompleted {
            records: aggregation.records.len(),
            with_manual_review: aggregation.review_summary.with_manual_review,
            straight_through: aggregation.review_summary.straight_through,
        });

        self.state.write().await.apply(aggregation);
        Ok(())
    }

    /// Clears the session and every cache.
    pub async fn logout(&self) {
        self.state.write().await.reset();
        self.observer.observe(&PipelineEvent::LoggedOut);
    }

    /// CSV of the first cached records.
    pub async fn export_csv(&self) -> Result<String, ServiceError> {
        let state = self.state.read().await;
        export_records_csv(&state.records)
    }

    /// Best-effort review lookup: any failure yields an empty map.
    async fn review_map(&self, session: &Session, query: &TransactionQuery) -> ReviewMap {
        let kind = self.client.review_kind();
        match self.client.fetch_review_report(session, &query.skill_id, &query.window).await {
            Ok(map) => {
                self.observer.observe(&PipelineEvent::ReviewReportLoaded {
                    kind,
                    transactions: map.len(),
                });
                map
            },
            Err(e) => {
                let reason = e.to_string();
                self.observer.observe(&PipelineEvent::ReviewReportDegraded { kind, reason: &reason });
                ReviewMap::new()
            },
        }
    }

    /// Clears the banner and returns the active session, or records the
    /// "not authenticated" banner.
    async fn begin_action(&self) -> Result<Session, ServiceError> {
        let mut state = self.state.write().await;
        state.clear_error();
        match state.session.clone() {
            Some(session) => Ok(session),
            None => {
                let err = DashError::NotAuthenticated;
                state.set_error(err.banner_message());
                Err(err.into())
            },
        }
    }

    async fn fail(&self, action: &str, error: ServiceError) -> ServiceError {
        let message = error.banner_message();
        self.observer.observe(&PipelineEvent::ActionFailed { action, message: &message });
        self.state.write().await.set_error(message);
        error
    }
}
