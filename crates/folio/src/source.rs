//! Portfolio data files and the assets they reference.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use folio_model::{load_images, PortfolioRecord, Store, Theme};
use serde::Deserialize;

/// A portfolio data file: the record itself plus build-time extras.
#[derive(Debug, Default, Deserialize)]
pub struct PortfolioSource {
    #[serde(flatten)]
    pub record: PortfolioRecord,

    /// Theme name
    #[serde(default)]
    pub theme: Option<String>,

    /// Image files to embed
    #[serde(default)]
    pub assets: Assets,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assets {
    pub profile_image: Option<PathBuf>,
    #[serde(default)]
    pub projects: Vec<ProjectAssets>,
}

/// Gallery images for the project with the given title.
#[derive(Debug, Deserialize)]
pub struct ProjectAssets {
    pub project: String,
    #[serde(default)]
    pub images: Vec<PathBuf>,
}

/// Parse a data file, choosing the format from its extension.
pub fn load_source(path: &Path) -> Result<PortfolioSource> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let source = match ext.as_str() {
        "toml" => toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
        _ => bail!(
            "Unsupported data file {}: expected .toml, .yaml, .yml or .json",
            path.display()
        ),
    };

    tracing::info!("Loaded portfolio from {}", path.display());
    Ok(source)
}

impl PortfolioSource {
    /// Build a store from this source.
    ///
    /// `theme` takes precedence over the theme named in the file, which in
    /// turn beats `fallback_theme`. Asset paths are resolved against
    /// `base_dir`; unreadable images are logged and skipped.
    pub fn into_store(
        self,
        base_dir: &Path,
        theme: Option<&str>,
        fallback_theme: Option<&str>,
    ) -> Result<Store> {
        let mut store = Store::from_record(self.record, Theme::default());

        if let Some(name) = theme.or(self.theme.as_deref()).or(fallback_theme) {
            store.set_theme(name)?;
        }

        if let Some(path) = &self.assets.profile_image {
            let path = base_dir.join(path);
            match fs::read(&path) {
                Ok(bytes) => store.set_profile_image(&bytes),
                Err(e) => tracing::warn!("Skipping profile image {}: {}", path.display(), e),
            }
        }

        for entry in &self.assets.projects {
            let Some(id) = store
                .record()
                .projects
                .iter()
                .find(|p| p.title == entry.project)
                .map(|p| p.id.clone())
            else {
                tracing::warn!("No project titled {:?}, skipping its images", entry.project);
                continue;
            };

            let paths: Vec<PathBuf> = entry.images.iter().map(|p| base_dir.join(p)).collect();
            for result in load_images(&paths) {
                match result {
                    Ok(uri) => {
                        store.add_project_image(&id, uri);
                    }
                    Err(e) => tracing::warn!("Skipping image: {}", e),
                }
            }
        }

        Ok(store)
    }
}
