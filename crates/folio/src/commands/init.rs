//! Initialize a portfolio project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use folio_model::sample_record;

const DATA_FILE: &str = "portfolio.toml";

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing folio...");

    let dir = config_path.parent().unwrap_or_else(|| Path::new(""));
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir).context("Failed to create project directory")?;
    }

    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    } else {
        tracing::warn!("{} already exists. Use --yes to overwrite.", config_path.display());
    }

    let data_path = dir.join(DATA_FILE);
    if !data_path.exists() || yes {
        fs::write(&data_path, sample_data()?)
            .with_context(|| format!("Failed to write {}", data_path.display()))?;
        tracing::info!("Created {}", data_path.display());
    } else {
        tracing::warn!("{} already exists. Use --yes to overwrite.", data_path.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Edit {} and run 'folio build'.", DATA_FILE);

    Ok(())
}

/// The sample portfolio serialized as TOML, followed by a commented assets table.
fn sample_data() -> Result<String> {
    let body = toml::to_string_pretty(&sample_record()).context("Failed to serialize sample")?;
    Ok(format!("theme = \"light\"\n{}\n{}", body, ASSETS_HINT))
}

const DEFAULT_CONFIG: &str = r#"# Folio Configuration

[portfolio]
# Portfolio data file (.toml, .yaml, .yml or .json)
data = "portfolio.toml"

# Theme used when the data file does not set one
# theme = "light"

[build]
# Directory the zip archive is written to
output = "dist"

# Minify the stylesheet
minify = false

# HTML-escape portfolio text
escape_html = true
"#;

const ASSETS_HINT: &str = r#"# Images to embed, relative to this file.
#
# [assets]
# profileImage = "me.jpg"
#
# [[assets.projects]]
# project = "E-Commerce Platform"
# images = ["screens/home.png", "screens/cart.png"]
"#;
