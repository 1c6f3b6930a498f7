use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use vantage_dash_core::ReviewReportKind;
use vantage_dash_http::{AppState, create_router};
use vantage_dash_service::DashboardService;
use vantage_dash_vendor::VendorClient;

pub(crate) async fn run(
    port: u16,
    host: String,
    static_dir: PathBuf,
    review_report: ReviewReportKind,
) -> Result<()> {
    if !static_dir.is_dir() {
        tracing::warn!(path = %static_dir.display(), "static directory not found, stylesheet will 404");
    }

    let client = VendorClient::new()
        .context("failed to build vendor HTTP client")?
        .with_review_kind(review_report);
    tracing::info!(review_report = %review_report, "review report source configured");

    let state = Arc::new(AppState::new(DashboardService::new(client)));
    let router = create_router(state, &static_dir);

    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router).await?;

    Ok(())
}
