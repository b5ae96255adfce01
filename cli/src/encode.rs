//! Image file to base64 data URL encoding.
//!
//! The prediction endpoint takes the same `{"image": "<data URL>"}` payload
//! the browser sends, so the CLI encodes files the way `FileReader` would.

#[cfg(test)]
#[path = "encode_test.rs"]
mod encode_test;

use std::path::Path;

use base64::Engine as _;

/// Extensions treated as images during batch scans (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff"];

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("unsupported image extension in `{0}`")]
    UnsupportedExtension(String),
    #[error("failed to read `{path}`: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
}

/// MIME type for a known image extension.
pub fn mime_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "bmp" => Some("image/bmp"),
        "tiff" => Some("image/tiff"),
        _ => None,
    }
}

/// Whether a path looks like an image file, case-insensitively.
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Build a `data:<mime>;base64,...` URL from raw bytes.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{mime};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Read a file and encode it as a base64 data URL.
///
/// # Errors
///
/// Fails when the extension is not a known image type or the file cannot
/// be read.
pub fn file_to_data_url(path: &Path) -> Result<String, EncodeError> {
    let mime = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_for_extension)
        .ok_or_else(|| EncodeError::UnsupportedExtension(path.display().to_string()))?;
    let bytes = std::fs::read(path).map_err(|source| EncodeError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(data_url(mime, &bytes))
}
