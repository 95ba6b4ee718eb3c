//! Cert Core - Certificate text layout and rendering
//!
//! This crate provides functionality for:
//! - Registering TrueType font families and loading them at a pixel size
//! - Measuring text bounding boxes
//! - Laying out a centered name and a `BRANCH (Nth Year)` line with a
//!   superscript ordinal suffix
//! - Rasterizing that text onto a copy of the certificate template
//! - Validating the certificate form into a render request
//!
//! # Example
//!
//! ```ignore
//! use cert_core::{CertificateForm, CertificateRenderer, FontTable};
//!
//! let mut fonts = FontTable::new();
//! fonts.register("serif", &std::fs::read("fonts/DejaVuSerif.ttf")?)?;
//!
//! let template = cert_core::decode_template(&std::fs::read("template.png")?)?;
//! let request = form.validate()?;
//! let certificate = CertificateRenderer::new(&fonts).render(template.clone(), &request)?;
//! ```

mod canvas;
mod font;
pub mod form;
pub mod layout;
mod ordinal;
mod renderer;
mod request;

pub use canvas::draw_text;
pub use font::{FontTable, SizedFont, TextBox, Typeface};
pub use form::{certificate_file_name, CertificateForm, FieldEntry};
pub use layout::{FontRole, PlacedText, YearLine};
pub use ordinal::{split_ordinal, Ordinal};
pub use renderer::CertificateRenderer;
pub use request::{FontChoice, RenderRequest};

use image::RgbImage;
use thiserror::Error;

/// Errors that can occur while preparing or rendering a certificate
#[derive(Debug, Error)]
pub enum CertError {
    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Font already exists: {0}")]
    FontAlreadyExists(String),

    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("Please fill all fields: {0} is empty")]
    MissingField(&'static str),

    #[error("Unknown {field} option: {value}")]
    UnknownOption { field: &'static str, value: String },

    #[error("Font size {0} is outside the allowed range")]
    FontSizeOutOfRange(u32),

    #[error("Image error: {0}")]
    ImageError(String),
}

impl CertError {
    /// Whether the user can fix this error by correcting the form
    pub fn is_form_error(&self) -> bool {
        matches!(
            self,
            CertError::MissingField(_)
                | CertError::UnknownOption { .. }
                | CertError::FontSizeOutOfRange(_)
        )
    }
}

impl From<image::ImageError> for CertError {
    fn from(err: image::ImageError) -> Self {
        CertError::ImageError(err.to_string())
    }
}

/// Result type for certificate operations
pub type Result<T> = std::result::Result<T, CertError>;

/// Anchor points on the certificate template, in template pixels
///
/// Each text block is centered on its anchor.
pub mod anchor {
    /// Center of the recipient name
    pub const NAME: (f32, f32) = (807.0, 474.0);
    /// Center of the `BRANCH (Nth Year)` line
    pub const COURSE: (f32, f32) = (605.0, 533.0);
}

/// Decode template bytes (PNG or JPEG) into an RGB image
pub fn decode_template(data: &[u8]) -> Result<RgbImage> {
    let image = image::load_from_memory(data)?;
    Ok(image.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_constants() {
        assert_eq!(anchor::NAME, (807.0, 474.0));
        assert_eq!(anchor::COURSE, (605.0, 533.0));
    }

    #[test]
    fn test_form_errors_are_recoverable() {
        assert!(CertError::MissingField("name").is_form_error());
        assert!(CertError::FontSizeOutOfRange(99).is_form_error());
        assert!(!CertError::FontNotFound("serif".to_string()).is_form_error());
    }

    #[test]
    fn test_decode_template_rejects_garbage() {
        let result = decode_template(&[0u8; 16]);
        assert!(matches!(result, Err(CertError::ImageError(_))));
    }

    #[test]
    fn test_decode_template_png() {
        let image = RgbImage::from_pixel(4, 3, image::Rgb([10, 20, 30]));
        let mut png = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let decoded = decode_template(&png).unwrap();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(2, 1), &image::Rgb([10, 20, 30]));
    }
}
