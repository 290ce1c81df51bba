//! Generate, package and deliver a portfolio archive.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use folio_model::{PortfolioRecord, Store, Theme};

use crate::archive::{download_filename, ArchiveError, Packager, ZipPackager};
use crate::generator::{GenerateError, SiteGenerator};

/// Errors that can occur during export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to generate site: {0}")]
    Generate(#[from] GenerateError),

    #[error("Download failed: {0}")]
    DownloadFailed(String),
}

impl From<ArchiveError> for ExportError {
    fn from(e: ArchiveError) -> Self {
        ExportError::DownloadFailed(e.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::DownloadFailed(e.to_string())
    }
}

/// Result of a successful export.
#[derive(Debug)]
pub struct ExportResult {
    /// Where the archive was written
    pub path: PathBuf,

    /// Archive file name
    pub filename: String,

    /// Archive size in bytes
    pub bytes: usize,

    /// Total export time in milliseconds
    pub duration_ms: u64,
}

/// Generates a site and delivers it as an archive file.
pub struct Exporter {
    generator: SiteGenerator,
    packager: Arc<dyn Packager>,
}

impl Exporter {
    /// Create an exporter producing zip archives.
    pub fn new(generator: SiteGenerator) -> Self {
        Self::with_packager(generator, Arc::new(ZipPackager))
    }

    pub fn with_packager(generator: SiteGenerator, packager: Arc<dyn Packager>) -> Self {
        Self {
            generator,
            packager,
        }
    }

    /// Export the store's current record and theme into `output_dir`.
    pub async fn export_store(
        &self,
        store: &Store,
        output_dir: &Path,
    ) -> Result<ExportResult, ExportError> {
        self.export(store.record(), store.theme(), output_dir).await
    }

    /// Generate, package and write the archive.
    ///
    /// The archive is written to a temporary file next to its destination and
    /// only renamed into place once complete, so a failed export never leaves
    /// a partial file behind.
    pub async fn export(
        &self,
        record: &PortfolioRecord,
        theme: Theme,
        output_dir: &Path,
    ) -> Result<ExportResult, ExportError> {
        let start = Instant::now();

        let site = self.generator.generate(record, theme)?;
        tracing::debug!(
            "Generated site: {} bytes HTML, {} bytes CSS, {} bytes JS",
            site.html.len(),
            site.css.len(),
            site.js.len()
        );

        let filename = download_filename(&record.name);

        // Compression and delivery both block.
        let packager = Arc::clone(&self.packager);
        let dir = output_dir.to_path_buf();
        let name = filename.clone();
        let (path, bytes) = tokio::task::spawn_blocking(move || {
            let bytes = packager.package(&site)?;
            let path = deliver(&bytes, &dir, &name)?;
            Ok::<_, ExportError>((path, bytes.len()))
        })
        .await
        .map_err(|e| ExportError::DownloadFailed(e.to_string()))??;

        tracing::info!("Wrote {} ({} bytes)", path.display(), bytes);

        Ok(ExportResult {
            path,
            filename,
            bytes,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Write `bytes` to `dir/filename` through a temporary file that is removed
/// on every failure path.
fn deliver(bytes: &[u8], dir: &Path, filename: &str) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".folio-")
        .suffix(".part")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;

    let target = dir.join(filename);
    tmp.persist(&target)
        .map_err(|e| ExportError::DownloadFailed(e.error.to_string()))?;

    Ok(target)
}

/// Whether a notice reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A short user-facing message about an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn from_result(result: &Result<ExportResult, ExportError>) -> Self {
        match result {
            Ok(done) => Notice {
                kind: NoticeKind::Success,
                title: "Portfolio Downloaded!".to_string(),
                description: format!(
                    "Your portfolio website has been packaged as {}.",
                    done.filename
                ),
            },
            Err(_) => Notice {
                kind: NoticeKind::Failure,
                title: "Download Failed".to_string(),
                description: "There was an error creating your portfolio. Please try again."
                    .to_string(),
            },
        }
    }

    /// Log the notice at a level matching its kind.
    pub fn log(&self) {
        match self.kind {
            NoticeKind::Success => tracing::info!("{} {}", self.title, self.description),
            NoticeKind::Failure => tracing::error!("{} {}", self.title, self.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Mutex;
    use std::thread::{self, ThreadId};

    use folio_model::ScalarField;
    use tempfile::tempdir;
    use zip::ZipArchive;

    use crate::generator::{GenerateOptions, GeneratedSite};

    struct FailingPackager;

    impl Packager for FailingPackager {
        fn package(&self, _site: &GeneratedSite) -> Result<Vec<u8>, ArchiveError> {
            Err(ArchiveError::Io(std::io::Error::other("compression failed")))
        }
    }

    fn generator() -> SiteGenerator {
        SiteGenerator::new(GenerateOptions::default()).unwrap()
    }

    fn ada() -> Store {
        let mut store = Store::new();
        store.set_field(ScalarField::Name, "Ada Lovelace").unwrap();
        store
    }

    #[tokio::test]
    async fn exports_named_archive() {
        let temp = tempdir().unwrap();
        let store = ada();

        let result = Exporter::new(generator())
            .export_store(&store, temp.path())
            .await
            .unwrap();

        assert_eq!(result.filename, "ada-lovelace-portfolio.zip");
        assert_eq!(result.path, temp.path().join("ada-lovelace-portfolio.zip"));

        let bytes = fs::read(&result.path).unwrap();
        assert_eq!(bytes.len(), result.bytes);
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut names: Vec<&str> = archive.file_names().collect();
        names.sort();
        assert_eq!(names, vec!["index.html", "scripts.js", "styles.css"]);

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1, "temporary file was not cleaned up");
    }

    #[tokio::test]
    async fn failed_packaging_reports_and_writes_nothing() {
        let temp = tempdir().unwrap();
        let store = ada();
        let before = store.record().clone();
        let exporter = Exporter::with_packager(generator(), Arc::new(FailingPackager));

        let result = exporter.export_store(&store, temp.path()).await;

        assert!(matches!(result, Err(ExportError::DownloadFailed(_))));
        let notice = Notice::from_result(&result);
        assert_eq!(notice.kind, NoticeKind::Failure);
        assert_eq!(notice.title, "Download Failed");
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
        assert_eq!(store.record(), &before);
    }

    struct ThreadRecorder(Mutex<Option<ThreadId>>);

    impl Packager for ThreadRecorder {
        fn package(&self, site: &GeneratedSite) -> Result<Vec<u8>, ArchiveError> {
            *self.0.lock().unwrap() = Some(thread::current().id());
            ZipPackager.package(site)
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn packaging_and_delivery_leave_the_runtime_thread() {
        let temp = tempdir().unwrap();
        let recorder = Arc::new(ThreadRecorder(Mutex::new(None)));
        let exporter = Exporter::with_packager(generator(), recorder.clone());

        let result = exporter.export_store(&ada(), temp.path()).await.unwrap();

        let used = recorder.0.lock().unwrap().unwrap();
        assert_ne!(used, thread::current().id());
        assert!(result.path.exists());
    }

    #[tokio::test]
    async fn export_can_be_retried() {
        let temp = tempdir().unwrap();
        let store = ada();
        let exporter = Exporter::new(generator());

        let first = exporter.export_store(&store, temp.path()).await.unwrap();
        let first_bytes = fs::read(&first.path).unwrap();
        let second = exporter.export_store(&store, temp.path()).await.unwrap();

        assert_eq!(fs::read(&second.path).unwrap(), first_bytes);
    }

    #[test]
    fn success_notice_names_the_file() {
        let result = Ok(ExportResult {
            path: PathBuf::from("out/ada-portfolio.zip"),
            filename: "ada-portfolio.zip".to_string(),
            bytes: 10,
            duration_ms: 1,
        });

        let notice = Notice::from_result(&result);

        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.title, "Portfolio Downloaded!");
        assert!(notice.description.contains("ada-portfolio.zip"));
    }
}
