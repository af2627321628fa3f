use crate::utils::flash::{mark_listing_current, push_notice};
use crate::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

#[derive(Deserialize)]
pub struct DeleteForm {
    pub doc_id: String,
}

/// Delete one document; the listing is updated locally on success and left
/// untouched on failure. Either way the next render shows it without a refetch.
pub async fn delete_handler(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<DeleteForm>,
) -> impl IntoResponse {
    if let Err(e) = state.console.delete(&form.doc_id).await {
        tracing::error!(doc_id = %form.doc_id, error = %e, "Failed to delete document");
        push_notice(&session, e.notice()).await;
    }
    mark_listing_current(&session).await;

    Redirect::to("/")
}
