//! WASM bindings for certgen
//!
//! This crate provides a JavaScript-friendly API for the certificate form:
//! - Loading the certificate template and font files
//! - Listing the select options for the form
//! - Rendering a submitted form to PDF bytes for download
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { CertificateGenerator } from 'certgen-wasm';
//!
//! await init();
//!
//! const generator = new CertificateGenerator();
//! generator.loadTemplate(templateBytes);
//! generator.loadFont('serif', fontBytes);
//!
//! const pdf = generator.render({
//!   name: 'Asha Rao',
//!   branch: { mode: 'select', value: 'CSE' },
//!   year: { mode: 'manual', value: '2nd' },
//!   nameFont: { family: 'serif', size: 30 },
//!   courseFont: { family: 'serif', size: 25 },
//! });
//! download(pdf, CertificateGenerator.fileName('Asha Rao'));
//! ```

use cert_core::form::{BRANCH_OPTIONS, YEAR_OPTIONS};
use cert_core::{CertificateForm, CertificateRenderer, FontTable};
use image::RgbImage;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_strings(values: &[&str]) -> Vec<JsValue> {
    values.iter().map(|value| JsValue::from_str(value)).collect()
}

/// Certificate generator for the browser form
#[wasm_bindgen]
pub struct CertificateGenerator {
    template: Option<RgbImage>,
    fonts: FontTable,
}

#[wasm_bindgen]
impl CertificateGenerator {
    /// Create a generator with no template and no fonts
    #[wasm_bindgen(constructor)]
    pub fn new() -> CertificateGenerator {
        CertificateGenerator {
            template: None,
            fonts: FontTable::new(),
        }
    }

    /// Load the certificate template
    ///
    /// @param data - PNG or JPEG bytes (Uint8Array)
    #[wasm_bindgen(js_name = loadTemplate)]
    pub fn load_template(&mut self, data: &[u8]) -> Result<(), JsValue> {
        let template = cert_core::decode_template(data).map_err(|e| {
            to_js_error(format!("Failed to load certificate template! Error: {e}"))
        })?;
        self.template = Some(template);
        Ok(())
    }

    /// Add a font family to the font table
    ///
    /// @param family - Family name shown in the font select lists
    /// @param data - TTF file bytes (Uint8Array)
    #[wasm_bindgen(js_name = loadFont)]
    pub fn load_font(&mut self, family: &str, data: &[u8]) -> Result<(), JsValue> {
        self.fonts.register(family, data).map_err(to_js_error)
    }

    /// Registered font families, sorted
    ///
    /// @returns Array of family names
    pub fn families(&self) -> Vec<JsValue> {
        to_js_strings(&self.fonts.families())
    }

    /// Branches for the branch select list
    #[wasm_bindgen(js_name = branchOptions)]
    pub fn branch_options() -> Vec<JsValue> {
        to_js_strings(BRANCH_OPTIONS)
    }

    /// Years for the year select list
    #[wasm_bindgen(js_name = yearOptions)]
    pub fn year_options() -> Vec<JsValue> {
        to_js_strings(YEAR_OPTIONS)
    }

    /// Download file name for a recipient
    ///
    /// @param name - Recipient name
    /// @returns e.g. "certificate_Asha_Rao.pdf"
    #[wasm_bindgen(js_name = fileName)]
    pub fn file_name(name: &str) -> String {
        cert_core::certificate_file_name(name)
    }

    /// Validate the form and render the certificate
    ///
    /// @param form - Form object (see the module example)
    /// @returns PDF bytes (Uint8Array)
    pub fn render(&self, form: JsValue) -> Result<Vec<u8>, JsValue> {
        let template = self.template.as_ref().ok_or_else(|| {
            JsValue::from_str("Template not loaded. Call loadTemplate() first.")
        })?;

        let form: CertificateForm = serde_wasm_bindgen::from_value(form)?;
        let request = form.validate().map_err(to_js_error)?;

        let certificate = CertificateRenderer::new(&self.fonts)
            .render(template.clone(), &request)
            .map_err(to_js_error)?;

        pdf_export::encode_pdf(&certificate).map_err(to_js_error)
    }
}

impl Default for CertificateGenerator {
    fn default() -> Self {
        Self::new()
    }
}
