//! Certificate template acquisition
//!
//! The template is downloaded once and cached on disk by file name. There
//! is a single download attempt; any failure is fatal to the caller.

use crate::config::TemplateSource;
use cert_core::CertError;
use image::RgbImage;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Google Drive file ID of the certificate template
pub const TEMPLATE_FILE_ID: &str = "1SnVrwMx07fuR0-mofW1DmPjXiPoBjAr1";

/// Direct download link for a Google Drive file
pub fn drive_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?id={file_id}")
}

/// Errors that can occur while loading the template
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("download failed: {0}")]
    Download(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Decode(#[from] CertError),
}

impl From<reqwest::Error> for TemplateError {
    fn from(err: reqwest::Error) -> Self {
        TemplateError::Download(err.to_string())
    }
}

/// Load the template, downloading it over HTTP if it is not cached yet
pub fn ensure_template(source: &TemplateSource) -> Result<RgbImage, TemplateError> {
    ensure_template_with(source, http_fetch)
}

/// Load the template, calling `fetch` with the URL if it is not cached yet
pub fn ensure_template_with<F>(source: &TemplateSource, fetch: F) -> Result<RgbImage, TemplateError>
where
    F: FnOnce(&str) -> Result<Vec<u8>, TemplateError>,
{
    let cache_path = source.cache_path.as_path();

    if cache_path.exists() {
        log::debug!("using cached template {}", cache_path.display());
    } else {
        log::info!("downloading template from {}", source.url);
        let data = fetch(&source.url)?;
        write_cache(cache_path, &data)?;
        log::info!(
            "cached template at {} ({} bytes)",
            cache_path.display(),
            data.len()
        );
    }

    let data = fs::read(cache_path)?;
    Ok(cert_core::decode_template(&data)?)
}

fn http_fetch(url: &str) -> Result<Vec<u8>, TemplateError> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}

/// Write through a temporary file so a failed write leaves no partial cache
fn write_cache(path: &Path, data: &[u8]) -> Result<(), TemplateError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let partial = path.with_extension("part");
    fs::write(&partial, data)?;
    fs::rename(&partial, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::cell::Cell;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("certgen-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn png_bytes() -> Vec<u8> {
        let image = RgbImage::from_pixel(6, 4, Rgb([240, 230, 200]));
        let mut data = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut data), image::ImageFormat::Png)
            .unwrap();
        data
    }

    fn source(dir: &Path) -> TemplateSource {
        TemplateSource {
            url: "https://example.com/template.png".to_string(),
            cache_path: dir.join("template.png"),
        }
    }

    #[test]
    fn test_drive_url() {
        assert_eq!(drive_url("abc"), "https://drive.google.com/uc?id=abc");
    }

    #[test]
    fn test_downloads_once_and_caches() {
        let dir = scratch_dir("cache");
        let source = source(&dir);
        let calls = Cell::new(0);

        let first = ensure_template_with(&source, |url: &str| {
            assert_eq!(url, "https://example.com/template.png");
            calls.set(calls.get() + 1);
            Ok(png_bytes())
        })
        .unwrap();
        assert_eq!(first.dimensions(), (6, 4));
        assert!(source.cache_path.exists());

        let second = ensure_template_with(&source, |_: &str| {
            calls.set(calls.get() + 1);
            Ok(Vec::new())
        })
        .unwrap();
        assert_eq!(second, first);
        assert_eq!(calls.get(), 1);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_failed_download_leaves_no_cache() {
        let dir = scratch_dir("fail");
        let source = source(&dir);

        let result = ensure_template_with(&source, |_: &str| {
            Err(TemplateError::Download("connection refused".to_string()))
        });
        assert!(matches!(result, Err(TemplateError::Download(_))));
        assert!(!source.cache_path.exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_undecodable_template() {
        let dir = scratch_dir("decode");
        let source = source(&dir);

        let result = ensure_template_with(&source, |_: &str| Ok(b"<html>quota</html>".to_vec()));
        assert!(matches!(
            result,
            Err(TemplateError::Decode(CertError::ImageError(_)))
        ));

        fs::remove_dir_all(&dir).unwrap();
    }
}
