//! Configuration file structure (folio.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_site::GenerateOptions;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub portfolio: PortfolioSettings,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct PortfolioSettings {
    /// Portfolio data file, relative to the config file
    #[serde(default = "default_data")]
    pub data: PathBuf,
    /// Theme used when neither the data file nor the command line names one
    pub theme: Option<String>,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            data: default_data(),
            theme: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub minify: bool,
    #[serde(default = "default_escape_html")]
    pub escape_html: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            minify: false,
            escape_html: default_escape_html(),
        }
    }
}

fn default_data() -> PathBuf {
    PathBuf::from("portfolio.toml")
}
fn default_output() -> PathBuf {
    PathBuf::from("dist")
}
fn default_escape_html() -> bool {
    true
}

impl ConfigFile {
    /// Generator options from the `[build]` table.
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            minify: self.build.minify,
            escape_html: self.build.escape_html,
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No {} found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

/// Resolve the data file path against the directory holding the config file.
pub fn data_path(config_path: &Path, config: &ConfigFile) -> PathBuf {
    match config_path.parent() {
        Some(dir) if !config.portfolio.data.is_absolute() => dir.join(&config.portfolio.data),
        _ => config.portfolio.data.clone(),
    }
}
