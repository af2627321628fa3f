pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;
pub mod views;

use crate::config::DisplaySettings;
use crate::services::console::DocumentConsole;
use std::sync::Arc;

/// Shared application state: the console owning the document store, and the
/// display settings every projection is rendered with.
#[derive(Clone)]
pub struct AppState {
    pub console: Arc<DocumentConsole>,
    pub display: Arc<DisplaySettings>,
}

impl AppState {
    pub fn new(console: Arc<DocumentConsole>, display: DisplaySettings) -> Self {
        Self {
            console,
            display: Arc::new(display),
        }
    }
}
