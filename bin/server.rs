// FinScope - Web Server
// REST API with Axum

use anyhow::{Context, Result};
use finscope::{api, audit, logger, Settings, VERSION};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    logger::init();

    let settings = Settings::from_env().context("Failed to load settings")?;
    log::info!("🌐 {} v{} starting", settings.app_name, VERSION);

    // Tables are served as-is; incomplete entries fail at render time
    let defects = audit();
    for defect in &defects {
        log::warn!("incomplete locale entry {}", defect);
    }
    if defects.is_empty() {
        log::info!("✓ All locale tables complete");
    }

    let addr = settings.bind_addr;
    let app = api::router(Arc::new(settings));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    log::info!("🚀 Server running on http://{}", addr);
    log::info!("   POST /v1/educate  GET /health");

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
