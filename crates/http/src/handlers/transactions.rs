use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Redirect};
use vantage_dash_core::constants::EXPORT_FILENAME;

use crate::AppState;
use crate::api_error::ApiError;
use crate::form_types::FetchForm;

pub async fn reload_skills(State(state): State<Arc<AppState>>) -> Redirect {
    if let Err(e) = state.service.reload_skills().await {
        tracing::debug!(error = %e, "skills reload failed");
    }
    Redirect::to("/")
}

pub async fn fetch_transactions(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FetchForm>,
) -> Redirect {
    if let Err(e) = state.service.fetch_transactions(form.into_request()).await {
        tracing::debug!(error = %e, "transaction fetch failed");
    }
    Redirect::to("/")
}

pub async fn export_csv(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let body = state.service.export_csv().await?;
    let disposition = format!("attachment; filename={EXPORT_FILENAME}");
    Ok((
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()), (header::CONTENT_DISPOSITION, disposition)],
        body,
    ))
}
