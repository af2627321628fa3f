use console_core::observability::init_tracing;
use docs_console::config::get_configuration;
use docs_console::services::console::DocumentConsole;
use docs_console::services::document_client::DocumentClient;
use docs_console::startup::build_router;
use docs_console::AppState;
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "docs-console",
        &configuration.telemetry.log_level,
        configuration.telemetry.otlp_endpoint.as_deref(),
    )?;

    docs_console::services::metrics::init_metrics()?;

    let client = DocumentClient::new(configuration.document_api.clone());
    let console = Arc::new(DocumentConsole::new(client));
    let state = AppState::new(console, configuration.display.clone());

    let app = build_router(state, configuration.server.max_upload_bytes);

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!(
        address = %address,
        document_api = %configuration.document_api.base_url,
        page_size = configuration.document_api.page_size,
        "Starting docs-console"
    );
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
