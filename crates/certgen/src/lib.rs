//! certgen - certificate generator
//!
//! Ties the pieces together for the command line: configuration, template
//! acquisition, rendering and PDF output.

pub mod config;
pub mod template;

pub use config::{Config, ConfigError, FontDef, TemplateSource};
pub use template::{ensure_template, ensure_template_with, TemplateError};

use anyhow::Context;
use cert_core::{certificate_file_name, CertError, CertificateRenderer, FontTable, RenderRequest};
use pdf_export::ImageEncoding;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Message shown when a submitted form is rejected
pub fn form_error_message(err: &CertError) -> String {
    match err {
        CertError::MissingField(_) => err.to_string(),
        _ if err.is_form_error() => format!("Please correct the form: {err}"),
        _ => format!("Failed to generate certificate: {err}"),
    }
}

/// Render a request onto a copy of the template and write the PDF
///
/// # Returns
/// Path of the written `certificate_<name>.pdf`
pub fn generate_certificate(
    fonts: &FontTable,
    template: &RgbImage,
    request: &RenderRequest,
    encoding: ImageEncoding,
    out_dir: &Path,
) -> anyhow::Result<PathBuf> {
    let certificate = CertificateRenderer::new(fonts)
        .render(template.clone(), request)
        .context("failed to render certificate")?;

    let pdf = pdf_export::encode_pdf_with(&certificate, encoding).context("failed to encode PDF")?;

    let path = out_dir.join(certificate_file_name(&request.name));
    std::fs::write(&path, pdf).with_context(|| format!("failed to write {}", path.display()))?;

    log::info!("wrote {}", path.display());
    Ok(path)
}
