//! HTTP client for the remote document-storage API.
//!
//! Each call is one round trip carrying the `x-api-key` credential. Nothing
//! is cached, deduplicated or retried.

use crate::config::DocumentApiSettings;
use crate::error::ConsoleError;
use crate::models::{AddFileResponse, DeleteRequest, DocumentRecord};
use crate::services::metrics::record_api_call;
use console_core::observability::TracedClientExt;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use secrecy::ExposeSecret;

pub const API_KEY_HEADER: &str = "x-api-key";

const UPLOAD_PATH: &str = "v1/sources/add-file";
const LIST_PATH: &str = "v1/uploaded";
const DELETE_PATH: &str = "v1/sources/delete";

/// A file picked in the browser, ready to forward.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

pub struct DocumentClient {
    client: Client,
    settings: DocumentApiSettings,
}

impl DocumentClient {
    pub fn new(settings: DocumentApiSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.settings.page_size
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    fn api_key(&self) -> &str {
        self.settings.api_key.expose_secret()
    }

    /// Send one file as multipart field `file`.
    ///
    /// Returns the `sourceId` the API assigned, when it reports one.
    pub async fn upload_file(&self, file: UploadFile) -> Result<Option<String>, ConsoleError> {
        let result = self.send_upload(file).await;
        record_api_call("upload", result.is_ok());
        result
    }

    async fn send_upload(&self, file: UploadFile) -> Result<Option<String>, ConsoleError> {
        let url = self.url(UPLOAD_PATH);
        let file_name = file.file_name;

        let part = Part::bytes(file.data)
            .file_name(file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| ConsoleError::Upload {
                file_name: file_name.clone(),
                reason: format!("invalid content type {}: {}", file.content_type, e),
            })?;

        let response = self
            .client
            .traced_post(&url)
            .header(API_KEY_HEADER, self.api_key())
            .multipart(Form::new().part("file", part))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(file_name = %file_name, error = %e, "Upload request failed");
                ConsoleError::Upload {
                    file_name: file_name.clone(),
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                file_name = %file_name,
                status = %status,
                body = %body,
                "Upload rejected by document API"
            );
            return Err(ConsoleError::Upload {
                file_name,
                reason: format!("status {}", status),
            });
        }

        // The body is informational; an unexpected shape doesn't fail the upload.
        let source_id = response
            .json::<AddFileResponse>()
            .await
            .unwrap_or_default()
            .source_id;

        tracing::info!(
            file_name = %file_name,
            source_id = source_id.as_deref().unwrap_or("-"),
            "File uploaded"
        );
        Ok(source_id)
    }

    /// Fetch one page of the listing.
    ///
    /// A body without a `documents` array, or with records missing fields,
    /// is a [`ConsoleError::MalformedResponse`].
    pub async fn list_documents(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<DocumentRecord>, ConsoleError> {
        let result = self.send_list(page, page_size).await;
        record_api_call("list", result.is_ok());
        result
    }

    async fn send_list(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<DocumentRecord>, ConsoleError> {
        let url = self.url(LIST_PATH);

        let response = self
            .client
            .traced_get(&url)
            .header(API_KEY_HEADER, self.api_key())
            .query(&[("page", page), ("page_size", page_size)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "List request failed");
                ConsoleError::List(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "Listing rejected by document API");
            return Err(ConsoleError::List(format!("status {}", status)));
        }

        let mut body: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Listing body is not JSON");
            ConsoleError::MalformedResponse(e.to_string())
        })?;

        let documents = body
            .get_mut("documents")
            .map(serde_json::Value::take)
            .ok_or_else(|| {
                tracing::error!("Listing body has no documents field");
                ConsoleError::MalformedResponse("missing `documents`".to_string())
            })?;

        let records: Vec<DocumentRecord> = serde_json::from_value(documents).map_err(|e| {
            tracing::error!(error = %e, "Listing records are malformed");
            ConsoleError::MalformedResponse(e.to_string())
        })?;

        tracing::info!(count = records.len(), page, page_size, "Fetched document listing");
        Ok(records)
    }

    /// Ask the API to delete a single document.
    pub async fn delete_document(&self, doc_id: &str) -> Result<(), ConsoleError> {
        let result = self.send_delete(doc_id).await;
        record_api_call("delete", result.is_ok());
        result
    }

    async fn send_delete(&self, doc_id: &str) -> Result<(), ConsoleError> {
        let url = self.url(DELETE_PATH);

        let response = self
            .client
            .traced_post(&url)
            .header(API_KEY_HEADER, self.api_key())
            .json(&DeleteRequest { sources: [doc_id] })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(doc_id = %doc_id, error = %e, "Delete request failed");
                ConsoleError::Delete {
                    doc_id: doc_id.to_string(),
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(doc_id = %doc_id, status = %status, "Delete rejected by document API");
            return Err(ConsoleError::Delete {
                doc_id: doc_id.to_string(),
                reason: format!("status {}", status),
            });
        }

        tracing::info!(doc_id = %doc_id, "Document deleted");
        Ok(())
    }
}
