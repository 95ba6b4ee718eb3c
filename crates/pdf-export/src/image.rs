//! Image XObjects for PDF embedding

use crate::{PdfError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use lopdf::{Dictionary, Object, Stream};
use std::io::Write;

impl From<image::ImageError> for PdfError {
    fn from(err: image::ImageError) -> Self {
        PdfError::ImageError(err.to_string())
    }
}

/// How raster data is compressed inside the PDF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageEncoding {
    /// Lossless zlib (FlateDecode)
    #[default]
    Flate,
    /// Lossy JPEG (DCTDecode) at the given quality (1-100)
    Jpeg { quality: u8 },
}

/// Image XObject for PDF embedding
#[derive(Debug, Clone)]
pub struct ImageXObject {
    /// Image width
    pub width: u32,
    /// Image height
    pub height: u32,
    /// Color space ("DeviceRGB")
    pub color_space: String,
    /// Bits per component
    pub bits_per_component: u8,
    /// PDF filter ("FlateDecode" or "DCTDecode")
    pub filter: String,
    /// Compressed image data
    pub data: Vec<u8>,
}

impl ImageXObject {
    /// Create an XObject from an RGB raster
    pub fn from_rgb8(image: &RgbImage, encoding: ImageEncoding) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(PdfError::ImageError(format!(
                "Cannot embed an empty image ({width}x{height})"
            )));
        }

        let (filter, data) = match encoding {
            ImageEncoding::Flate => {
                let mut encoder =
                    flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
                encoder.write_all(image.as_raw())?;
                ("FlateDecode", encoder.finish()?)
            }
            ImageEncoding::Jpeg { quality } => {
                let mut data = Vec::new();
                JpegEncoder::new_with_quality(&mut data, quality.clamp(1, 100)).write_image(
                    image.as_raw(),
                    width,
                    height,
                    ExtendedColorType::Rgb8,
                )?;
                ("DCTDecode", data)
            }
        };

        log::debug!(
            "encoded {width}x{height} image with {filter}: {} bytes",
            data.len()
        );

        Ok(Self {
            width,
            height,
            color_space: "DeviceRGB".to_string(),
            bits_per_component: 8,
            filter: filter.to_string(),
            data,
        })
    }

    /// Convert to lopdf Stream object
    pub fn to_pdf_stream(&self) -> Stream {
        let mut dict = Dictionary::new();

        dict.set("Type", Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", Object::Name(b"Image".to_vec()));
        dict.set("Width", self.width as i64);
        dict.set("Height", self.height as i64);
        dict.set(
            "ColorSpace",
            Object::Name(self.color_space.as_bytes().to_vec()),
        );
        dict.set("BitsPerComponent", self.bits_per_component as i64);
        dict.set("Filter", Object::Name(self.filter.as_bytes().to_vec()));
        dict.set("Length", self.data.len() as i64);

        Stream::new(dict, self.data.clone())
    }
}

/// Generate operators to draw an image at position
///
/// # Arguments
/// * `image_name` - Image resource name (e.g., "Im1")
/// * `x` - X coordinate in points
/// * `y` - Y coordinate in points (from bottom, PDF coordinates)
/// * `width` - Image width in points
/// * `height` - Image height in points
pub fn generate_image_operators(
    image_name: &str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Vec<u8> {
    format!("q\n{width} 0 0 {height} {x} {y} cm\n/{image_name} Do\nQ\n").into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use image::Rgb;
    use std::io::Read;

    #[test]
    fn test_generate_image_operators() {
        let ops = generate_image_operators("Im1", 0.0, 0.0, 1200.0, 800.0);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.starts_with("q\n"));
        assert!(ops_str.contains("1200 0 0 800 0 0 cm"));
        assert!(ops_str.contains("/Im1 Do"));
        assert!(ops_str.ends_with("Q\n"));
    }

    #[test]
    fn test_from_rgb8_flate_roundtrips_pixels() {
        let image = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8 * 40, y as u8 * 90, 7]));
        let xobject = ImageXObject::from_rgb8(&image, ImageEncoding::Flate).unwrap();

        assert_eq!(xobject.width, 3);
        assert_eq!(xobject.height, 2);
        assert_eq!(xobject.filter, "FlateDecode");

        let mut raw = Vec::new();
        ZlibDecoder::new(xobject.data.as_slice())
            .read_to_end(&mut raw)
            .unwrap();
        assert_eq!(raw, image.into_raw());
    }

    #[test]
    fn test_from_rgb8_jpeg() {
        let image = RgbImage::from_pixel(16, 16, Rgb([200, 10, 10]));
        let xobject = ImageXObject::from_rgb8(&image, ImageEncoding::Jpeg { quality: 90 }).unwrap();

        assert_eq!(xobject.filter, "DCTDecode");
        // JPEG SOI marker
        assert_eq!(&xobject.data[..3], &[0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn test_from_rgb8_rejects_empty_image() {
        let image = RgbImage::new(0, 10);
        let result = ImageXObject::from_rgb8(&image, ImageEncoding::Flate);
        assert!(matches!(result, Err(PdfError::ImageError(_))));
    }

    #[test]
    fn test_image_xobject_to_pdf_stream() {
        let xobject = ImageXObject {
            width: 100,
            height: 50,
            color_space: "DeviceRGB".to_string(),
            bits_per_component: 8,
            filter: "FlateDecode".to_string(),
            data: vec![1, 2, 3, 4, 5],
        };

        let stream = xobject.to_pdf_stream();
        let dict = stream.dict;

        assert_eq!(dict.get(b"Type").unwrap().as_name().unwrap(), b"XObject");
        assert_eq!(dict.get(b"Subtype").unwrap().as_name().unwrap(), b"Image");
        assert_eq!(dict.get(b"Width").unwrap().as_i64().unwrap(), 100);
        assert_eq!(dict.get(b"Height").unwrap().as_i64().unwrap(), 50);
        assert_eq!(
            dict.get(b"ColorSpace").unwrap().as_name().unwrap(),
            b"DeviceRGB"
        );
        assert_eq!(
            dict.get(b"Filter").unwrap().as_name().unwrap(),
            b"FlateDecode"
        );
        assert_eq!(stream.content, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_image_encoding_default() {
        assert_eq!(ImageEncoding::default(), ImageEncoding::Flate);
    }
}
