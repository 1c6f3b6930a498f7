use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;

use crate::AppState;
use crate::form_types::LoginForm;

/// Logs in and reloads skills. Failures end up in the banner.
pub async fn authenticate(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Redirect {
    if let Err(e) = state.service.login(form.credentials()).await {
        tracing::debug!(error = %e, "authenticate action failed");
    }
    Redirect::to("/")
}

pub async fn logout(State(state): State<Arc<AppState>>) -> Redirect {
    state.service.logout().await;
    Redirect::to("/")
}
