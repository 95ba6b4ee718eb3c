//! PDF Export - Raster certificates as PDF documents
//!
//! This crate provides functionality for:
//! - Embedding RGB rasters as image XObjects (FlateDecode or DCTDecode)
//! - Building documents whose pages are full-page images
//! - Saving to a file or to bytes for download
//!
//! # Example
//!
//! ```ignore
//! use pdf_export::encode_pdf;
//!
//! let certificate: image::RgbImage = render_certificate()?;
//! let bytes = encode_pdf(&certificate)?;
//! std::fs::write("certificate_Asha_Rao.pdf", bytes)?;
//! ```

mod document;
mod image;

pub use crate::image::{generate_image_operators, ImageEncoding, ImageXObject};
pub use document::ImageDocument;

use ::image::RgbImage;
use thiserror::Error;

/// Errors that can occur during PDF export
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Encode one image as a single-page PDF, one pixel per point
pub fn encode_pdf(image: &RgbImage) -> Result<Vec<u8>> {
    encode_pdf_with(image, ImageEncoding::default())
}

/// Like [`encode_pdf`], with the given image compression
pub fn encode_pdf_with(image: &RgbImage, encoding: ImageEncoding) -> Result<Vec<u8>> {
    let mut doc = ImageDocument::new().with_encoding(encoding);
    doc.set_title("Certificate");
    doc.add_image_page(image)?;
    doc.to_bytes()
}
