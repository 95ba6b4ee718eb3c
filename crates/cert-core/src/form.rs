//! Certificate form values and validation
//!
//! The form is what a front end (CLI flags, browser form) collects. It is
//! validated once into a [`RenderRequest`]; the renderer never sees the form.

use crate::{CertError, FontChoice, RenderRequest, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Branches offered in the branch select list
pub const BRANCH_OPTIONS: &[&str] = &[
    "CSE", "IT", "ECE", "EE", "EEE", "ME", "CE", "BCA", "MCA", "AI", "DS", "CY", "HR", "FIN",
    "MKT",
];

/// Years offered in the year select list
pub const YEAR_OPTIONS: &[&str] = &["1st", "2nd", "3rd", "4th"];

/// Allowed font sizes for both text blocks
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 20..=80;

pub const DEFAULT_NAME_FONT_SIZE: u32 = 30;
pub const DEFAULT_COURSE_FONT_SIZE: u32 = 25;

/// A field that is either picked from a list or typed in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "camelCase")]
pub enum FieldEntry {
    /// Selected from the field's option list
    Select(String),
    /// Entered manually, any text
    Manual(String),
}

impl FieldEntry {
    pub fn value(&self) -> &str {
        match self {
            FieldEntry::Select(value) | FieldEntry::Manual(value) => value,
        }
    }

    fn check(&self, field: &'static str, options: &[&str]) -> Result<String> {
        let value = self.value();
        if value.is_empty() {
            return Err(CertError::MissingField(field));
        }
        if let FieldEntry::Select(selected) = self {
            if !options.contains(&selected.as_str()) {
                return Err(CertError::UnknownOption {
                    field,
                    value: selected.clone(),
                });
            }
        }
        Ok(value.to_string())
    }
}

/// Values entered in the certificate form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateForm {
    pub name: String,
    pub branch: FieldEntry,
    pub year: FieldEntry,
    pub name_font: FontChoice,
    pub course_font: FontChoice,
}

impl CertificateForm {
    /// A fresh form: empty name, first list entries, default sizes
    pub fn with_defaults(family: &str) -> Self {
        Self {
            name: String::new(),
            branch: FieldEntry::Select(BRANCH_OPTIONS[0].to_string()),
            year: FieldEntry::Select(YEAR_OPTIONS[0].to_string()),
            name_font: FontChoice::new(family, DEFAULT_NAME_FONT_SIZE),
            course_font: FontChoice::new(family, DEFAULT_COURSE_FONT_SIZE),
        }
    }

    /// Check the form and turn it into a render request
    ///
    /// # Errors
    /// - `MissingField` for an empty name, branch or year
    /// - `UnknownOption` for a selected value outside its list
    /// - `FontSizeOutOfRange` for a size outside [`FONT_SIZE_RANGE`]
    pub fn validate(&self) -> Result<RenderRequest> {
        if self.name.is_empty() {
            return Err(CertError::MissingField("name"));
        }
        let branch = self.branch.check("branch", BRANCH_OPTIONS)?;
        let year_ordinal = self.year.check("year", YEAR_OPTIONS)?;

        for font in [&self.name_font, &self.course_font] {
            if !FONT_SIZE_RANGE.contains(&font.size) {
                return Err(CertError::FontSizeOutOfRange(font.size));
            }
        }

        Ok(RenderRequest {
            name: self.name.clone(),
            branch,
            year_ordinal,
            name_font: self.name_font.clone(),
            branch_font: self.course_font.clone(),
        })
    }
}

/// Download file name for a recipient: `certificate_<name>.pdf`
pub fn certificate_file_name(name: &str) -> String {
    format!("certificate_{}.pdf", name.replace(' ', "_"))
}
