#![allow(dead_code)]

use docs_console::config::{DisplaySettings, DocumentApiSettings};
use docs_console::services::console::DocumentConsole;
use docs_console::services::document_client::{DocumentClient, UploadFile};
use docs_console::startup::{build_router, DEFAULT_MAX_UPLOAD_BYTES};
use docs_console::AppState;
use secrecy::Secret;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::{Match, MockServer, Request};

pub const TEST_API_KEY: &str = "sk_test_key";

pub fn settings_for(server: &MockServer) -> DocumentApiSettings {
    DocumentApiSettings {
        base_url: format!("{}/", server.uri()),
        api_key: Secret::new(TEST_API_KEY.to_string()),
        page_size: 10,
    }
}

pub fn client_for(server: &MockServer) -> DocumentClient {
    DocumentClient::new(settings_for(server))
}

pub fn console_for(server: &MockServer) -> Arc<DocumentConsole> {
    Arc::new(DocumentConsole::new(client_for(server)))
}

pub fn router_for(server: &MockServer) -> axum::Router {
    let state = AppState::new(console_for(server), DisplaySettings::default());
    build_router(state, DEFAULT_MAX_UPLOAD_BYTES)
}

pub fn document_json(id: &str, name: &str) -> Value {
    json!({
        "doc_id": id,
        "doc_name": name,
        "doc_type": "text/plain",
        "file_size": 1536,
        "state": "INDEX_BUILT",
        "create_at": 1_700_000_000
    })
}

pub fn listing(documents: &[(&str, &str)]) -> Value {
    json!({
        "documents": documents
            .iter()
            .map(|(id, name)| document_json(id, name))
            .collect::<Vec<_>>()
    })
}

pub fn text_file(name: &str, body: &str) -> UploadFile {
    UploadFile {
        file_name: name.to_string(),
        content_type: "text/plain".to_string(),
        data: body.as_bytes().to_vec(),
    }
}

/// Matches an upload whose multipart body carries the given file name.
pub struct UploadOf(pub &'static str);

impl Match for UploadOf {
    fn matches(&self, request: &Request) -> bool {
        multipart_file_name_is(request, self.0)
    }
}

/// Matches an upload for any file other than the given one.
pub struct UploadNotOf(pub &'static str);

impl Match for UploadNotOf {
    fn matches(&self, request: &Request) -> bool {
        !multipart_file_name_is(request, self.0)
    }
}

fn multipart_file_name_is(request: &Request, name: &str) -> bool {
    String::from_utf8_lossy(&request.body).contains(&format!("filename=\"{}\"", name))
}

pub const BOUNDARY: &str = "console-test-boundary";

/// Hand-built `multipart/form-data` body with one `file` part per entry.
pub fn multipart_body(files: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, content) in files {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{name}\"\r\nContent-Type: text/plain\r\n\r\n{content}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}
