use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use chrono::Local;

use crate::AppState;
use crate::viewer;

/// Login form without a session, the dashboard otherwise.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let today = Local::now().date_naive();
    let dashboard = state.service.state().await;
    Html(viewer::render_page(&dashboard, today))
}
