//! Build command: export the portfolio archive.

use std::path::{Path, PathBuf};

use anyhow::Result;
use folio_model::Store;
use folio_site::{Exporter, Notice, SiteGenerator};

use crate::config::{data_path, load_config, ConfigFile};
use crate::source::load_source;

/// Command line values that override folio.toml.
#[derive(Debug, Default)]
pub struct Overrides {
    pub output: Option<PathBuf>,
    pub theme: Option<String>,
    pub minify: Option<bool>,
    pub escape_html: Option<bool>,
}

/// Load config and data file into a store ready for generation.
pub fn load_store(config_path: &Path, config: &ConfigFile, theme: Option<&str>) -> Result<Store> {
    let data = data_path(config_path, config);
    let base_dir = data.parent().map(Path::to_path_buf).unwrap_or_default();

    load_source(&data)?.into_store(&base_dir, theme, config.portfolio.theme.as_deref())
}

/// Run the build command.
pub async fn run(config_path: &Path, overrides: Overrides) -> Result<()> {
    tracing::info!("Building portfolio...");

    let config = load_config(config_path)?;
    let store = load_store(config_path, &config, overrides.theme.as_deref())?;

    let mut options = config.generate_options();
    if let Some(minify) = overrides.minify {
        options.minify = minify;
    }
    if let Some(escape_html) = overrides.escape_html {
        options.escape_html = escape_html;
    }
    let output = overrides.output.unwrap_or(config.build.output);

    tracing::debug!("Theme: {}, options: {:?}", store.theme(), options);

    let exporter = Exporter::new(SiteGenerator::new(options)?);
    let result = exporter.export_store(&store, &output).await;

    Notice::from_result(&result).log();
    let result = result?;

    tracing::info!(
        "Output: {} ({} bytes in {}ms)",
        result.path.display(),
        result.bytes,
        result.duration_ms
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn builds_archive_from_config() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("folio.toml");
        fs::write(
            &config_path,
            "[portfolio]\ndata = \"me.json\"\n\n[build]\noutput = \"out\"\n",
        )
        .unwrap();
        fs::write(temp.path().join("me.json"), r#"{"name": "Ada Lovelace"}"#).unwrap();

        let overrides = Overrides {
            output: Some(temp.path().join("out")),
            theme: Some("dark".to_string()),
            ..Default::default()
        };
        run(&config_path, overrides).await.unwrap();

        assert!(temp.path().join("out/ada-lovelace-portfolio.zip").exists());
    }

    #[tokio::test]
    async fn missing_data_file_fails() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("folio.toml");

        let result = run(&config_path, Overrides::default()).await;

        assert!(result.is_err());
    }
}
