use crate::error::ConsoleError;
use crate::services::document_client::{DocumentClient, UploadFile};
use futures::future::join_all;

/// Result of pushing a batch of files to the API.
#[derive(Debug, Default)]
pub struct UploadReport {
    pub uploaded: Vec<String>,
    pub failed: Vec<ConsoleError>,
}

impl UploadReport {
    pub fn attempted(&self) -> usize {
        self.uploaded.len() + self.failed.len()
    }

    /// One summary notice for the whole batch, however many files failed.
    pub fn failure_notice(&self) -> Option<&'static str> {
        self.failed.first().map(ConsoleError::notice)
    }
}

/// Issue one upload per file, all at once, and wait for every one of them.
///
/// A failing file never cancels its siblings; completion order is irrelevant.
pub async fn upload_all(client: &DocumentClient, files: Vec<UploadFile>) -> UploadReport {
    let names: Vec<String> = files.iter().map(|f| f.file_name.clone()).collect();
    let results = join_all(files.into_iter().map(|file| client.upload_file(file))).await;

    let mut report = UploadReport::default();
    for (name, result) in names.into_iter().zip(results) {
        match result {
            Ok(_) => report.uploaded.push(name),
            Err(e) => report.failed.push(e),
        }
    }

    if !report.failed.is_empty() {
        tracing::warn!(
            uploaded = report.uploaded.len(),
            failed = report.failed.len(),
            "Batch upload finished with failures"
        );
    }
    report
}
