//! Static site generator for folio portfolios.
//!
//! Turns a [`PortfolioRecord`](folio_model::PortfolioRecord) and a
//! [`Theme`](folio_model::Theme) into `index.html`, `styles.css` and
//! `scripts.js`, and packages them into a downloadable zip archive.

pub mod archive;
pub mod assets;
pub mod export;
pub mod generator;
pub mod palette;
pub mod templates;

pub use archive::{download_filename, package_async, slugify, ArchiveError, Packager, ZipPackager};
pub use export::{ExportError, ExportResult, Exporter, Notice, NoticeKind};
pub use generator::{GenerateError, GenerateOptions, GeneratedSite, SiteGenerator};
pub use palette::Palette;
