//! Text placement on the certificate
//!
//! Placement is pure arithmetic over [`Typeface::text_box`]; nothing here
//! touches pixels. Origins use the same convention as the font backend:
//! x is the pen start, y is the top of the ascender line.

use crate::ordinal::split_ordinal;
use crate::{anchor, RenderRequest, Typeface};

/// Superscript size relative to the main course font size
pub const SUPERSCRIPT_SCALE: f32 = 0.6;

/// Superscript rise above the main origin, relative to the main font size
pub const SUPERSCRIPT_RISE: f32 = 0.35;

/// Text drawn after the ordinal suffix
pub const YEAR_TAIL: &str = " Year)";

/// Which of the request's fonts a placed run is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Name,
    Course,
    Superscript,
}

/// A run of text with its drawing origin
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub origin: (f32, f32),
    pub role: FontRole,
}

/// Superscript pixel size for a course font size (truncated)
pub fn superscript_size(size: u32) -> u32 {
    ((size as f32 * SUPERSCRIPT_SCALE) as u32).max(1)
}

/// Place `text` so that its bounding box is centered on `anchor`
pub fn center_text<F: Typeface>(
    text: &str,
    anchor: (f32, f32),
    font: &F,
    role: FontRole,
) -> PlacedText {
    let bounds = font.text_box(text);
    PlacedText {
        text: text.to_string(),
        origin: (
            anchor.0 - bounds.left - bounds.width() / 2.0,
            anchor.1 - bounds.top - bounds.height() / 2.0,
        ),
        role,
    }
}

/// The `BRANCH (Nth Year)` line as three separately measured runs
#[derive(Debug, Clone, PartialEq)]
pub struct YearLine {
    /// `"{branch} ({number}"` in the course font
    pub lead: PlacedText,
    /// Ordinal suffix in the superscript font
    pub suffix: PlacedText,
    /// `" Year)"` in the course font
    pub tail: PlacedText,
    /// Widths of lead, suffix and tail
    pub widths: [f32; 3],
    /// Sum of the three widths, used for centering
    pub total_width: f32,
}

impl YearLine {
    /// Lay out the line centered horizontally on `anchor`
    ///
    /// Runs are measured one by one, so there is no kerning across run
    /// boundaries. The lead is measured by its box width; suffix and tail
    /// are measured to the right edge of their box so leading blanks count.
    pub fn layout<F: Typeface>(
        anchor: (f32, f32),
        branch: &str,
        year: &str,
        main: &F,
        superscript: &F,
    ) -> Self {
        let ordinal = split_ordinal(year);
        let lead_text = format!("{branch} ({}", ordinal.number);

        let widths = [
            main.text_box(&lead_text).width(),
            superscript.text_box(&ordinal.suffix).right,
            main.text_box(YEAR_TAIL).right,
        ];
        let total_width: f32 = widths.iter().sum();

        let start_x = anchor.0 - total_width / 2.0;
        let suffix_x = start_x + widths[0];
        let tail_x = suffix_x + widths[1];
        let raised_y = anchor.1 - main.size() * SUPERSCRIPT_RISE;

        log::debug!(
            "year line '{lead_text}|{}|{YEAR_TAIL}' width {total_width:.1} starts at x={start_x:.1}",
            ordinal.suffix
        );

        Self {
            lead: PlacedText {
                text: lead_text,
                origin: (start_x, anchor.1),
                role: FontRole::Course,
            },
            suffix: PlacedText {
                text: ordinal.suffix,
                origin: (suffix_x, raised_y),
                role: FontRole::Superscript,
            },
            tail: PlacedText {
                text: YEAR_TAIL.to_string(),
                origin: (tail_x, anchor.1),
                role: FontRole::Course,
            },
            widths,
            total_width,
        }
    }

    /// Runs in drawing order
    pub fn into_runs(self) -> [PlacedText; 3] {
        [self.lead, self.suffix, self.tail]
    }
}

/// All runs of a certificate: the name, then the year line
pub fn place_certificate<F: Typeface>(
    request: &RenderRequest,
    name_font: &F,
    course_font: &F,
    superscript_font: &F,
) -> Vec<PlacedText> {
    let mut runs = vec![center_text(
        &request.name,
        anchor::NAME,
        name_font,
        FontRole::Name,
    )];
    runs.extend(
        YearLine::layout(
            anchor::COURSE,
            &request.branch,
            &request.year_ordinal,
            course_font,
            superscript_font,
        )
        .into_runs(),
    );
    runs
}
