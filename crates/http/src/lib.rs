//! HTTP dashboard server for vantage-dash.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::shadow_reuse, reason = "Shadowing for Arc clones is idiomatic")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod form_types;
mod handlers;
mod viewer;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use axum::routing::post;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use vantage_dash_service::DashboardService;

pub use viewer::escape_html;

/// Shared application state for all HTTP handlers.
///
/// Holds the single dashboard service; its state object is created empty at
/// startup and reset on logout.
pub struct AppState {
    pub service: DashboardService,
}

impl AppState {
    #[must_use]
    pub const fn new(service: DashboardService) -> Self {
        Self { service }
    }
}

pub fn create_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard::index))
        .route("/health", get(health))
        .route("/authenticate", post(handlers::session::authenticate))
        .route("/logout", get(handlers::session::logout).post(handlers::session::logout))
        .route("/skills", get(handlers::transactions::reload_skills))
        .route("/transactions", post(handlers::transactions::fetch_transactions))
        .route("/export.csv", get(handlers::transactions::export_csv))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
