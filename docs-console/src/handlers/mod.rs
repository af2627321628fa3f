pub mod app;
pub mod documents;
pub mod export;
pub mod metrics;
pub mod upload;
