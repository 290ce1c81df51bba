//! Zip packaging of a generated site.

use std::io::{Cursor, Write};
use std::sync::{Arc, LazyLock};

use regex::Regex;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::generator::GeneratedSite;

/// Errors that can occur while building an archive.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Packaging task failed: {0}")]
    Task(String),
}

/// Compresses generated artifacts into a single archive.
pub trait Packager: Send + Sync {
    /// Package the site into archive bytes.
    fn package(&self, site: &GeneratedSite) -> Result<Vec<u8>, ArchiveError>;
}

/// Deflate-compressed zip with fixed entry timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipPackager;

impl Packager for ZipPackager {
    fn package(&self, site: &GeneratedSite) -> Result<Vec<u8>, ArchiveError> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        // A fixed timestamp keeps archives byte-identical across runs.
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644);

        for (name, contents) in site.files() {
            tracing::debug!("Adding {} ({} bytes)", name, contents.len());
            zip.start_file(name, options)?;
            zip.write_all(contents.as_bytes())?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

/// Package on the blocking thread pool so compression does not stall the runtime.
pub async fn package_async(
    packager: Arc<dyn Packager>,
    site: GeneratedSite,
) -> Result<Vec<u8>, ArchiveError> {
    tokio::task::spawn_blocking(move || packager.package(&site))
        .await
        .map_err(|e| ArchiveError::Task(e.to_string()))?
}

/// Filename-safe form of a display name: trimmed, whitespace runs collapsed to
/// `-`, lowercased. Path separators are replaced as well.
pub fn slugify(name: &str) -> String {
    static WHITESPACE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

    WHITESPACE
        .replace_all(name.trim(), "-")
        .to_lowercase()
        .replace(['/', '\\', '\0'], "-")
}

/// Download name for a portfolio owner, e.g. `ada-lovelace-portfolio.zip`.
pub fn download_filename(name: &str) -> String {
    let slug = slugify(name);
    if slug.is_empty() {
        "portfolio.zip".to_string()
    } else {
        format!("{}-portfolio.zip", slug)
    }
}
