//! Image loading and `data:` URI encoding.

use std::fs;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use rayon::prelude::*;

/// Errors that can occur while reading an uploaded image.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Failed to read image {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Best-effort MIME type from the leading bytes of an image.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else if looks_like_svg(bytes) {
        "image/svg+xml"
    } else {
        "application/octet-stream"
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(256)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}

/// Encode raw bytes as a base64 `data:` URI.
pub fn encode_data_uri(bytes: &[u8]) -> String {
    format!("data:{};base64,{}", sniff_mime(bytes), STANDARD.encode(bytes))
}

/// Read a single image file into a `data:` URI.
pub fn load_image(path: &Path) -> Result<String, MediaError> {
    let bytes = fs::read(path).map_err(|source| MediaError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(encode_data_uri(&bytes))
}

/// Read several images in parallel.
///
/// Results come back in the same order as `paths`, regardless of which read
/// finishes first. A failed read only affects its own slot.
pub fn load_images<P: AsRef<Path> + Sync>(paths: &[P]) -> Vec<Result<String, MediaError>> {
    paths
        .par_iter()
        .map(|path| load_image(path.as_ref()))
        .collect()
}
