use crate::error::{ConsoleError, ExportKind};
use crate::services::export::{to_csv, to_identifier_list, CSV_FILE_NAME};
use crate::utils::flash::push_notice;
use crate::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

/// Refresh, then send the listing as `documents.csv`.
pub async fn csv_download(State(state): State<AppState>, session: Session) -> Response {
    if let Err(e) = state.console.refresh().await {
        tracing::warn!(error = %e, "Exporting CSV from the last known listing");
    }

    let records = state.console.snapshot().await;
    if records.is_empty() {
        push_notice(&session, ConsoleError::NothingToExport(ExportKind::Csv).notice()).await;
        return Redirect::to("/").into_response();
    }

    match to_csv(&records, &state.display) {
        Ok(csv) => {
            tracing::info!(rows = records.len(), "CSV export generated");
            (
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", CSV_FILE_NAME),
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to build CSV export");
            push_notice(&session, e.notice()).await;
            Redirect::to("/").into_response()
        }
    }
}

/// Newline-joined identifiers for page script to put on the clipboard.
pub async fn identifier_list(State(state): State<AppState>) -> Result<String, ConsoleError> {
    let records = state.console.snapshot().await;
    if records.is_empty() {
        return Err(ConsoleError::NothingToExport(ExportKind::Identifiers));
    }
    Ok(to_identifier_list(&records))
}

/// Page script reports a rejected clipboard write here so the notice is
/// rendered like every other failure.
pub async fn clipboard_denied(session: Session) -> StatusCode {
    let err = ConsoleError::ClipboardAccess;
    tracing::warn!(error = %err, "Browser refused clipboard access");
    push_notice(&session, err.notice()).await;
    StatusCode::NO_CONTENT
}
