//! console-core: shared plumbing for the document console.
//!
//! Tracing setup, outbound trace-context propagation and request correlation
//! live here so the service crate only deals with documents.
pub mod middleware;
pub mod observability;

pub use tracing;
