use crate::utils::flash::{take_listing_current, take_notices};
use crate::views::DocumentTable;
use crate::AppState;
use askama::Template;
use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;

#[derive(Template)]
#[template(path = "pages/documents.html")]
pub struct DocumentsTemplate {
    pub table: DocumentTable,
    pub notices: Vec<String>,
}

/// Console page: refresh the listing, then render it with pending notices.
///
/// Right after a delete or upload the store already holds what the user
/// should see, so the refresh is skipped for that one render.
pub async fn index(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let mut notices = take_notices(&session).await;

    if take_listing_current(&session).await {
        tracing::debug!("Rendering listing left by the previous action");
    } else if let Err(e) = state.console.refresh().await {
        tracing::error!(error = %e, "Failed to refresh document listing");
        notices.push(e.notice().to_string());
    }

    let records = state.console.snapshot().await;
    DocumentsTemplate {
        table: DocumentTable::project(&records, &state.display),
        notices,
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}
