use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Everything that can go wrong between a user action and the rendered page.
///
/// Handlers turn these into exactly one notice each; nothing here is retried.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("upload of {file_name} failed: {reason}")]
    Upload { file_name: String, reason: String },

    #[error("listing documents failed: {0}")]
    List(String),

    #[error("malformed document listing: {0}")]
    MalformedResponse(String),

    #[error("delete of {doc_id} failed: {reason}")]
    Delete { doc_id: String, reason: String },

    #[error("clipboard write was denied by the browser")]
    ClipboardAccess,

    #[error("nothing to export: {0}")]
    NothingToExport(ExportKind),

    #[error("CSV export failed: {0}")]
    Csv(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Csv,
    Identifiers,
}

impl std::fmt::Display for ExportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportKind::Csv => f.write_str("csv"),
            ExportKind::Identifiers => f.write_str("identifiers"),
        }
    }
}

impl ConsoleError {
    /// Text shown to the user for this failure.
    pub fn notice(&self) -> &'static str {
        match self {
            ConsoleError::Upload { .. } => "Some or all files failed to upload",
            ConsoleError::List(_) => "Failed to load the document list",
            ConsoleError::MalformedResponse(_) => {
                "The document list could not be read; showing no documents"
            }
            ConsoleError::Delete { .. } => "Failed to delete the document",
            ConsoleError::ClipboardAccess => {
                "Failed to copy document IDs. Clipboard access may be restricted on non-HTTPS sites."
            }
            ConsoleError::NothingToExport(ExportKind::Csv) => "No documents to download.",
            ConsoleError::NothingToExport(ExportKind::Identifiers) => {
                "No documents available to copy."
            }
            ConsoleError::Csv(_) => "Failed to build the CSV export",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ConsoleError::Upload { .. }
            | ConsoleError::List(_)
            | ConsoleError::MalformedResponse(_)
            | ConsoleError::Delete { .. } => StatusCode::BAD_GATEWAY,
            ConsoleError::ClipboardAccess => StatusCode::FORBIDDEN,
            ConsoleError::NothingToExport(_) => StatusCode::NOT_FOUND,
            ConsoleError::Csv(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<csv::Error> for ConsoleError {
    fn from(err: csv::Error) -> Self {
        ConsoleError::Csv(err.to_string())
    }
}

/// Plain-text body so page script can hand it straight to the user.
impl IntoResponse for ConsoleError {
    fn into_response(self) -> Response {
        (self.status(), self.notice()).into_response()
    }
}
