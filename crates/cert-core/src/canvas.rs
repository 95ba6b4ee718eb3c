//! Glyph rasterization onto the certificate image

use crate::SizedFont;
use image::{Rgb, RgbImage};

/// Draw `text` onto `image` with its origin at the ascender line
///
/// Glyph coverage is alpha-blended over the existing pixels; anything
/// outside the image is clipped.
pub fn draw_text(
    image: &mut RgbImage,
    font: &SizedFont,
    origin: (f32, f32),
    text: &str,
    color: Rgb<u8>,
) {
    let (width, height) = image.dimensions();
    let (glyphs, _) = font.layout(text, origin);

    for glyph in glyphs {
        let Some(outlined) = font.outline(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();

        outlined.draw(|gx, gy, coverage| {
            let px = bounds.min.x as i32 + gx as i32;
            let py = bounds.min.y as i32 + gy as i32;
            if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                return;
            }

            let alpha = coverage.clamp(0.0, 1.0);
            if alpha <= 0.0 {
                return;
            }

            let pixel = image.get_pixel_mut(px as u32, py as u32);
            for channel in 0..3 {
                let blended =
                    color.0[channel] as f32 * alpha + pixel.0[channel] as f32 * (1.0 - alpha);
                pixel.0[channel] = blended.round() as u8;
            }
        });
    }
}
