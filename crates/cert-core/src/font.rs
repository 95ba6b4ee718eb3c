//! Font handling for certificate text

use crate::{CertError, Result};
use ab_glyph::{point, Font, FontArc, Glyph, GlyphId, OutlinedGlyph, PxScale, ScaleFont};
use std::collections::HashMap;
use std::fmt;

/// Bounding box of a string drawn with its origin at (0, 0)
///
/// Coordinates are in pixels, y grows downwards. The origin is the top of
/// the font's ascender line, so `top` is usually positive. Horizontally the
/// box runs from `min(0, ink left)` to `max(advance, ink right)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl TextBox {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Smallest box enclosing both boxes
    pub fn union(self, other: TextBox) -> TextBox {
        TextBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Text measurement backend used by the layout code
pub trait Typeface {
    /// Nominal (em) size in pixels
    fn size(&self) -> f32;

    /// Bounding box of `text` drawn at origin (0, 0)
    fn text_box(&self, text: &str) -> TextBox;
}

/// Registered font families, keyed by family name
#[derive(Clone, Default)]
pub struct FontTable {
    families: HashMap<String, FontArc>,
}

impl fmt::Debug for FontTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontTable")
            .field("families", &self.families())
            .finish()
    }
}

impl FontTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a TrueType/OpenType font under a family name
    ///
    /// # Arguments
    /// * `family` - Family name shown in the font selection lists
    /// * `ttf_data` - Font file bytes
    pub fn register(&mut self, family: &str, ttf_data: &[u8]) -> Result<()> {
        if self.families.contains_key(family) {
            return Err(CertError::FontAlreadyExists(family.to_string()));
        }

        let font = FontArc::try_from_vec(ttf_data.to_vec())
            .map_err(|e| CertError::FontParseError(format!("{family}: {e}")))?;
        self.families.insert(family.to_string(), font);

        log::debug!("registered font family '{family}'");
        Ok(())
    }

    /// Check if a family has been registered
    pub fn contains(&self, family: &str) -> bool {
        self.families.contains_key(family)
    }

    /// Registered family names, sorted
    pub fn families(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.families.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Load a family at the given nominal pixel size
    pub fn load(&self, family: &str, size: u32) -> Result<SizedFont> {
        let font = self
            .families
            .get(family)
            .ok_or_else(|| CertError::FontNotFound(family.to_string()))?;

        Ok(SizedFont {
            family: family.to_string(),
            font: font.clone(),
            size: size as f32,
        })
    }
}

/// A font family loaded at one nominal size
#[derive(Clone)]
pub struct SizedFont {
    family: String,
    font: FontArc,
    size: f32,
}

impl fmt::Debug for SizedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizedFont")
            .field("family", &self.family)
            .field("size", &self.size)
            .finish()
    }
}

impl SizedFont {
    pub fn family(&self) -> &str {
        &self.family
    }

    /// ab_glyph scale for this size
    ///
    /// `PxScale` is the ascent-to-descent height, so the em size is
    /// converted through the font's unscaled height.
    pub fn scale(&self) -> PxScale {
        let units_per_em = self.font.units_per_em().unwrap_or(1000.0);
        PxScale::from(self.size * self.font.height_unscaled() / units_per_em)
    }

    /// Position the glyphs of `text` with the origin at the ascender line
    ///
    /// Returns the glyphs and the pen position after the last advance.
    pub(crate) fn layout(&self, text: &str, origin: (f32, f32)) -> (Vec<Glyph>, f32) {
        let scale = self.scale();
        let scaled = self.font.as_scaled(scale);
        let baseline = origin.1 + scaled.ascent();

        let mut glyphs = Vec::with_capacity(text.len());
        let mut caret = origin.0;
        let mut previous: Option<GlyphId> = None;

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            glyphs.push(id.with_scale_and_position(scale, point(caret, baseline)));
            caret += scaled.h_advance(id);
            previous = Some(id);
        }

        (glyphs, caret)
    }

    pub(crate) fn outline(&self, glyph: Glyph) -> Option<OutlinedGlyph> {
        self.font.outline_glyph(glyph)
    }
}

impl Typeface for SizedFont {
    fn size(&self) -> f32 {
        self.size
    }

    fn text_box(&self, text: &str) -> TextBox {
        let (glyphs, advance) = self.layout(text, (0.0, 0.0));

        let ink = glyphs
            .into_iter()
            .filter_map(|glyph| self.outline(glyph))
            .map(|outlined| {
                let bounds = outlined.px_bounds();
                TextBox {
                    left: bounds.min.x,
                    top: bounds.min.y,
                    right: bounds.max.x,
                    bottom: bounds.max.y,
                }
            })
            .reduce(TextBox::union);

        // Horizontally the box spans the pen run as well as the ink, so a
        // run's width is at least its advance.
        match ink {
            Some(bounds) => TextBox {
                left: bounds.left.min(0.0),
                right: bounds.right.max(advance),
                ..bounds
            },
            None => TextBox {
                left: 0.0,
                top: 0.0,
                right: advance,
                bottom: 0.0,
            },
        }
    }
}
