//! Image-only PDF document builder

use crate::image::{generate_image_operators, ImageEncoding, ImageXObject};
use crate::{PdfError, Result};
use image::RgbImage;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::path::Path;

/// Points per inch in PDF user space
const POINTS_PER_INCH: f64 = 72.0;

/// A PDF document whose pages are full-page raster images
pub struct ImageDocument {
    /// The underlying lopdf document
    inner: Document,
    /// Root Pages object (written on save)
    pages_id: ObjectId,
    /// Page object IDs in order
    page_ids: Vec<ObjectId>,
    /// Image resolution in dots per inch
    resolution: f64,
    /// Compression for embedded images
    encoding: ImageEncoding,
    /// Next image resource number
    next_image_resource: u32,
}

impl Default for ImageDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageDocument {
    /// Create an empty document at 72 dpi (one pixel per point)
    pub fn new() -> Self {
        let mut inner = Document::with_version("1.5");
        let pages_id = inner.new_object_id();
        let catalog_id = inner.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        inner.trailer.set("Root", catalog_id);

        Self {
            inner,
            pages_id,
            page_ids: Vec::new(),
            resolution: POINTS_PER_INCH,
            encoding: ImageEncoding::default(),
            next_image_resource: 1,
        }
    }

    /// Set the image resolution used to size pages
    pub fn with_resolution(mut self, dpi: f64) -> Self {
        self.resolution = dpi;
        self
    }

    /// Set the compression for images added afterwards
    pub fn with_encoding(mut self, encoding: ImageEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the document title (Info dictionary)
    pub fn set_title(&mut self, title: &str) {
        let info_id = self.inner.add_object(dictionary! {
            "Title" => Object::string_literal(title),
            "Producer" => Object::string_literal("certgen"),
        });
        self.inner.trailer.set("Info", info_id);
    }

    /// Get the number of pages in the document
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Append a page showing `image` edge to edge
    ///
    /// # Returns
    /// New page number (1-indexed)
    pub fn add_image_page(&mut self, image: &RgbImage) -> Result<usize> {
        if self.resolution <= 0.0 {
            return Err(PdfError::ImageError(format!(
                "Invalid resolution: {}",
                self.resolution
            )));
        }

        let xobject = ImageXObject::from_rgb8(image, self.encoding)?;
        let scale = POINTS_PER_INCH / self.resolution;
        let width = xobject.width as f64 * scale;
        let height = xobject.height as f64 * scale;

        let image_id = self.inner.add_object(xobject.to_pdf_stream());
        let resource_name = format!("Im{}", self.next_image_resource);
        self.next_image_resource += 1;

        let operators = generate_image_operators(&resource_name, 0.0, 0.0, width, height);
        let contents_id = self
            .inner
            .add_object(Stream::new(Dictionary::new(), operators));

        let page_id = self.inner.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Resources" => dictionary! {
                "XObject" => dictionary! {
                    resource_name.as_str() => image_id,
                },
            },
            "Contents" => contents_id,
        });
        self.page_ids.push(page_id);

        log::debug!(
            "added page {} ({width:.1}x{height:.1} pt)",
            self.page_ids.len()
        );
        Ok(self.page_ids.len())
    }

    /// Save the document to a file
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.write_pages_tree();
        self.inner
            .save(path)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Save the document to bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        self.write_pages_tree();

        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        Ok(buffer)
    }

    fn write_pages_tree(&mut self) {
        let kids: Vec<Object> = self.page_ids.iter().map(|id| (*id).into()).collect();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.inner.objects.insert(self.pages_id, Object::Dictionary(pages));
    }
}
