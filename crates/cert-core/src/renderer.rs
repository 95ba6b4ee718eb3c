//! Certificate rendering

use crate::canvas::draw_text;
use crate::layout::{place_certificate, superscript_size, FontRole};
use crate::{FontTable, RenderRequest, Result, SizedFont};
use image::{Rgb, RgbImage};

/// Colour of all certificate text
pub const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Fonts resolved for one request
struct RequestFonts {
    name: SizedFont,
    course: SizedFont,
    superscript: SizedFont,
}

impl RequestFonts {
    fn for_role(&self, role: FontRole) -> &SizedFont {
        match role {
            FontRole::Name => &self.name,
            FontRole::Course => &self.course,
            FontRole::Superscript => &self.superscript,
        }
    }
}

/// Draws the name and the branch/year line onto a certificate template
pub struct CertificateRenderer<'a> {
    /// Font families available to requests
    fonts: &'a FontTable,
}

impl<'a> CertificateRenderer<'a> {
    /// Create a new renderer over a font table
    pub fn new(fonts: &'a FontTable) -> Self {
        Self { fonts }
    }

    /// Render a request onto `image` and hand the image back
    ///
    /// The image is taken by value; pass a clone of the template to keep
    /// the template itself untouched.
    ///
    /// # Errors
    /// `FontNotFound` if a requested family is not in the font table.
    pub fn render(&self, mut image: RgbImage, request: &RenderRequest) -> Result<RgbImage> {
        let fonts = self.load_fonts(request)?;

        let runs = place_certificate(request, &fonts.name, &fonts.course, &fonts.superscript);
        for run in &runs {
            draw_text(
                &mut image,
                fonts.for_role(run.role),
                run.origin,
                &run.text,
                TEXT_COLOR,
            );
        }

        log::info!(
            "rendered certificate for '{}' ({} text runs)",
            request.name,
            runs.len()
        );
        Ok(image)
    }

    fn load_fonts(&self, request: &RenderRequest) -> Result<RequestFonts> {
        let course = &request.branch_font;
        Ok(RequestFonts {
            name: self
                .fonts
                .load(&request.name_font.family, request.name_font.size)?,
            course: self.fonts.load(&course.family, course.size)?,
            superscript: self
                .fonts
                .load(&course.family, superscript_size(course.size))?,
        })
    }
}
