pub mod console;
pub mod document_client;
pub mod export;
pub mod metrics;
pub mod store;
pub mod upload;
