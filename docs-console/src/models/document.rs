use serde::{Deserialize, Serialize};

/// One file's metadata as the remote document store reports it.
///
/// Field names follow the wire format of `GET v1/uploaded`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub doc_id: String,
    pub doc_name: String,
    pub doc_type: String,
    /// Bytes.
    pub file_size: u64,
    /// Opaque lifecycle state, shown verbatim.
    pub state: String,
    /// Seconds since the Unix epoch.
    pub create_at: i64,
}

/// Body of `POST v1/sources/delete`.
#[derive(Debug, Serialize)]
pub struct DeleteRequest<'a> {
    pub sources: [&'a str; 1],
}

/// Body returned by `POST v1/sources/add-file`.
#[derive(Debug, Default, Deserialize)]
pub struct AddFileResponse {
    #[serde(rename = "sourceId")]
    pub source_id: Option<String>,
}
