//! Render request types

use serde::{Deserialize, Serialize};

/// A font family from the font table at a nominal pixel size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontChoice {
    /// Font family name
    pub family: String,
    /// Font size in pixels
    pub size: u32,
}

impl FontChoice {
    pub fn new(family: &str, size: u32) -> Self {
        Self {
            family: family.to_string(),
            size,
        }
    }
}

/// Everything the renderer needs to draw one certificate
///
/// All text fields are expected to be non-empty; `CertificateForm::validate`
/// is the usual way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    /// Recipient name
    pub name: String,
    /// Branch, e.g. "CSE"
    pub branch: String,
    /// Year entry, e.g. "3rd"
    pub year_ordinal: String,
    /// Font for the name
    pub name_font: FontChoice,
    /// Font for the branch/year line
    pub branch_font: FontChoice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_json_field_names() {
        let request = RenderRequest {
            name: "Asha Rao".to_string(),
            branch: "CSE".to_string(),
            year_ordinal: "2nd".to_string(),
            name_font: FontChoice::new("serif", 30),
            branch_font: FontChoice::new("sans", 25),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["yearOrdinal"], "2nd");
        assert_eq!(json["nameFont"]["family"], "serif");
        assert_eq!(json["branchFont"]["size"], 25);
    }
}
