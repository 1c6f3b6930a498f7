use std::sync::{Arc, Mutex};

use serde_json::json;
use vantage_dash_core::{Credentials, PipelineEvent, PipelineObserver};
use vantage_dash_vendor::VendorClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{DashboardService, FetchRequest};

const SECRET: &str = "client-secret-do-not-log";
const TOKEN: &str = "bearer-token-do-not-log";

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl PipelineObserver for RecordingObserver {
    fn observe(&self, event: &PipelineEvent<'_>) {
        self.events.lock().unwrap().push(format!("{event:?}"));
    }
}

async fn mount_auth(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth2/connect/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": TOKEN})))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/publicapi/v1/skills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "p1", "name": "Invoice Processing", "type": "Process"},
            {"id": "d1", "name": "Invoice", "type": "Document"}
        ])))
        .mount(server)
        .await;
}

async fn mount_transactions(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/publicapi/v1/transactions/completed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalItemCount": 3,
            "items": [
                {"transactionId": "tx-1", "status": "Processed", "pageCount": 2,
                 "fileParameters": [{"key": "SourceFileName", "value": "a.pdf"}]},
                {"transactionId": "tx-2", "status": "Processed", "pageCount": "5"},
                {"transactionId": "tx-3", "status": "Processed", "pageCount": null}
            ]
        })))
        .mount(server)
        .await;
}

fn fetch_request() -> FetchRequest {
    FetchRequest {
        skill_id: "p1".to_owned(),
        transaction_type: "Processed".to_owned(),
        start_date: "2024-01-01".to_owned(),
        end_date: "2024-01-07".to_owned(),
        limit: None,
    }
}

async fn logged_in(server: &MockServer) -> DashboardService {
    let service = DashboardService::new(VendorClient::new().unwrap());
    service.login(Credentials::new(&server.uri(), "id", SECRET)).await.unwrap();
    service
}

#[tokio::test]
async fn test_login_establishes_session_and_loads_skills() {
    let server = MockServer::start().await;
    mount_auth(&server).await;

    let service = logged_in(&server).await;
    let state = service.state().await;
    assert!(state.is_authenticated());
    assert_eq!(state.host(), Some(server.uri().as_str()));
    assert_eq!(state.skills.len(), 2);
    assert_eq!(state.process_skills().count(), 1);
    assert!(state.last_error.is_none());
}

#[tokio::test]
async fn test_failed_login_sets_banner_without_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth2/connect/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "Invalid client"})))
        .mount(&server)
        .await;

    let service = DashboardService::new(VendorClient::new().unwrap());
    let result = service.login(Credentials::new(&server.uri(), "id", "bad")).await;
    assert!(result.is_err());

    let state = service.state().await;
    assert!(!state.is_authenticated());
    assert_eq!(state.last_error.as_deref(), Some("Invalid client"));
}

#[tokio::test]
async fn test_failed_relogin_keeps_prior_session() {
    let good = MockServer::start().await;
    mount_auth(&good).await;
    let service = logged_in(&good).await;

    let bad = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth2/connect/token"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&bad)
        .await;
    assert!(service.login(Credentials::new(&bad.uri(), "id", "x")).await.is_err());

    let state = service.state().await;
    assert_eq!(state.host(), Some(good.uri().as_str()));
    assert_eq!(state.last_error.as_deref(), Some("HTTP 401"));
}

#[tokio::test]
async fn test_skills_failure_clears_cache() {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    let service = logged_in(&server).await;

    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/api/publicapi/v1/skills"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"title": "Server Error"})))
        .mount(&server)
        .await;
    assert!(service.reload_skills().await.is_err());

    let state = service.state().await;
    assert!(state.skills.is_empty());
    assert!(state.is_authenticated());
    assert_eq!(state.last_error.as_deref(), Some("Server Error"));
}

#[tokio::test]
async fn test_fetch_joins_review_report() {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    mount_transactions(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/reporting/v1/qa/process-skills/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "TransactionId,DocumentSkillName,HasManualReview\n\
             tx-1,Invoice,true\n\
             tx-2,Invoice,false\n\
             tx-2,,false\n",
        ))
        .mount(&server)
        .await;

    let service = logged_in(&server).await;
    service.fetch_transactions(fetch_request()).await.unwrap();

    let state = service.state().await;
    assert_eq!(state.records.len(), 3);
    assert_eq!(state.review_summary.with_manual_review, 1);
    assert_eq!(state.review_summary.straight_through, 2);
    assert_eq!(state.total_pages(), 7);
    let invoice = state.docskill_summary["Invoice"];
    assert_eq!(invoice.transaction_count, 2);
    assert_eq!(invoice.page_total, 7);
    assert_eq!(state.records[0].source_file_name, "a.pdf");
}

#[tokio::test]
async fn test_review_report_failure_degrades_to_straight_through() {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    mount_transactions(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/reporting/v1/qa/process-skills/documents"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let service = logged_in(&server).await;
    service.fetch_transactions(fetch_request()).await.unwrap();

    let state = service.state().await;
    assert_eq!(state.records.len(), 3);
    assert!(state.records.iter().all(|r| !r.manual_review));
    assert_eq!(state.review_summary.with_manual_review, 0);
    assert!(state.docskill_summary.is_empty());
    assert!(state.last_error.is_none());
}

#[tokio::test]
async fn test_malformed_review_report_degrades_to_straight_through() {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    mount_transactions(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/reporting/v1/qa/process-skills/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not a report</html>"))
        .mount(&server)
        .await;

    let service = logged_in(&server).await;
    service.fetch_transactions(fetch_request()).await.unwrap();

    let state = service.state().await;
    assert_eq!(state.records.len(), 3);
    assert_eq!(state.review_summary.straight_through, 3);
}

#[tokio::test]
async fn test_fetch_failure_clears_results_and_sets_banner() {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    mount_transactions(&server).await;
    let service = logged_in(&server).await;
    service.fetch_transactions(fetch_request()).await.unwrap();
    assert_eq!(service.state().await.records.len(), 3);

    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/api/publicapi/v1/transactions/completed"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "Date range too wide"})))
        .mount(&server)
        .await;
    assert!(service.fetch_transactions(fetch_request()).await.is_err());

    let state = service.state().await;
    assert!(state.records.is_empty());
    assert_eq!(state.review_summary.total(), 0);
    assert_eq!(state.last_error.as_deref(), Some("Date range too wide"));
}

#[tokio::test]
async fn test_fetch_rejects_bad_input() {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    let service = logged_in(&server).await;

    let request = FetchRequest { transaction_type: "Pending".to_owned(), ..fetch_request() };
    assert!(service.fetch_transactions(request).await.is_err());
    let banner = service.state().await.last_error.clone().unwrap();
    assert!(banner.contains("Invalid transaction status"));

    let request = FetchRequest { start_date: "yesterday".to_owned(), ..fetch_request() };
    assert!(service.fetch_transactions(request).await.is_err());
    let banner = service.state().await.last_error.clone().unwrap();
    assert!(banner.starts_with("Invalid dates:"));
}

#[tokio::test]
async fn test_actions_require_session() {
    let service = DashboardService::new(VendorClient::new().unwrap());
    assert!(service.fetch_transactions(fetch_request()).await.is_err());
    assert_eq!(service.state().await.last_error.as_deref(), Some("Not authenticated."));
    assert!(service.reload_skills().await.is_err());
}

#[tokio::test]
async fn test_logout_resets_state_and_export() {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    mount_transactions(&server).await;
    let service = logged_in(&server).await;
    service.fetch_transactions(fetch_request()).await.unwrap();
    assert_eq!(service.export_csv().await.unwrap().lines().count(), 4);

    service.logout().await;

    let state = service.state().await;
    assert!(!state.is_authenticated());
    assert!(state.skills.is_empty());
    assert!(state.records.is_empty());
    assert_eq!(state.review_summary.total(), 0);
    assert!(state.docskill_summary.is_empty());
    drop(state);
    assert_eq!(service.export_csv().await.unwrap().lines().count(), 1);
}

#[tokio::test]
async fn test_observer_never_sees_raw_secrets() {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    mount_transactions(&server).await;

    let observer = Arc::new(RecordingObserver::default());
    let service =
        DashboardService::new(VendorClient::new().unwrap()).with_observer(observer.clone());
    service.login(Credentials::new(&server.uri(), "id", SECRET)).await.unwrap();
    service.fetch_transactions(fetch_request()).await.unwrap();
    service.logout().await;

    let events = observer.events.lock().unwrap();
    assert!(
        events
            .iter()
            .any(|e| e.starts_with("LoginStarted") && e.contains("[REDACTED 24 bytes]"))
    );
    assert!(events.iter().any(|e| e.starts_with("ReviewReportDegraded")));
    assert!(events.iter().any(|e| e.starts_with("LoggedOut")));
    for event in events.iter() {
        assert!(!event.contains(SECRET), "secret leaked: {event}");
        assert!(!event.contains(TOKEN), "token leaked: {event}");
    }
}
