use crate::error::ConsoleError;
use crate::services::document_client::UploadFile;
use crate::utils::flash::{mark_listing_current, push_notice};
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Redirect},
};
use tower_sessions::Session;

const FILE_FIELD: &str = "file";

/// Accept one or more `file` fields, forward them as a concurrent batch and
/// refresh the listing once every upload has finished.
pub async fn upload_handler(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> impl IntoResponse {
    let files = match read_files(multipart).await {
        Ok(files) => files,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read upload form");
            push_notice(&session, e.notice()).await;
            return Redirect::to("/");
        }
    };

    if files.is_empty() {
        tracing::debug!("Upload form submitted without files");
        return Redirect::to("/");
    }

    let outcome = state.console.upload_batch(files).await;
    tracing::info!(
        attempted = outcome.report.attempted(),
        uploaded = outcome.report.uploaded.len(),
        "Batch upload complete"
    );

    for notice in outcome.notices() {
        push_notice(&session, notice).await;
    }
    // The batch already refreshed the store
    mark_listing_current(&session).await;

    Redirect::to("/")
}

async fn read_files(mut multipart: Multipart) -> Result<Vec<UploadFile>, ConsoleError> {
    let mut files = Vec::new();

    loop {
        let field = multipart.next_field().await.map_err(|e| ConsoleError::Upload {
            file_name: "-".to_string(),
            reason: e.to_string(),
        })?;
        let Some(field) = field else {
            break;
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        // An empty file input still submits a part with no file name.
        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field.bytes().await.map_err(|e| ConsoleError::Upload {
            file_name: file_name.clone(),
            reason: e.to_string(),
        })?;

        files.push(UploadFile {
            file_name,
            content_type,
            data: data.to_vec(),
        });
    }

    Ok(files)
}
