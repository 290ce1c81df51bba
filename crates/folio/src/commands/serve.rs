//! Preview server command.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use folio_site::SiteGenerator;
use tower_http::services::ServeDir;

use crate::commands::build::load_store;
use crate::config::load_config;

/// Run the serve command.
pub async fn run(config_path: &Path, port: u16, dir: PathBuf) -> Result<()> {
    let config = load_config(config_path)?;
    let store = load_store(config_path, &config, None)?;

    let generator = SiteGenerator::new(config.generate_options())?;
    let site = generator.generate(store.record(), store.theme())?;
    site.write_to(&dir)?;
    tracing::info!("Generated site into {}", dir.display());

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    tracing::info!("Serving {} at http://{}", dir.display(), addr);

    let app = Router::new().fallback_service(ServeDir::new(&dir));

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Open browser
    let url = format!("http://{}", addr);
    if let Err(e) = open::that(&url) {
        tracing::debug!("Could not open browser: {}", e);
    }

    axum::serve(listener, app).await?;

    Ok(())
}
