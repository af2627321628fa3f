pub mod document;

pub use document::{AddFileResponse, DeleteRequest, DocumentRecord};
