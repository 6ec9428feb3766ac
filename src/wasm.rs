//! WASM bindings for shortex
//!
//! JavaScript-accessible functions so a browser page can convert shorthand
//! as the user types and hand the result to its math renderer.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::utils::report::PassRecord;

/// Conversion options (exposed to WASM)
#[derive(Serialize, Deserialize, Default)]
pub struct ConvertOptions {
    /// Include the per-pass trace in the result
    #[serde(default)]
    pub explain: bool,
}

/// Conversion result with additional metadata
#[derive(Serialize)]
pub struct ConvertResult {
    /// Wrapped LaTeX output
    pub output: String,
    /// No shorthand was recognised in the input
    pub untouched: bool,
    /// Passes that fired, when requested
    pub passes: Vec<PassRecord>,
}

/// Safely serialize a value to JsValue, returning `null` on failure.
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert shorthand to LaTeX wrapped in `\( ... \)`
#[wasm_bindgen(js_name = "convertToLaTeX")]
pub fn convert_to_latex_wasm(input: &str) -> String {
    crate::convert_to_latex(input)
}

/// Convert shorthand with options
///
/// # Returns
/// `{ output, untouched, passes }`
#[wasm_bindgen(js_name = "convertWithOptions")]
pub fn convert_with_options_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: ConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let report = crate::convert_with_trace(input);

    let result = ConvertResult {
        output: report.output,
        untouched: report.untouched,
        passes: if opts.explain {
            report.passes
        } else {
            Vec::new()
        },
    };

    to_js_value(&result)
}

/// Syntax reference with rendered examples, for the notation help menu
#[wasm_bindgen(js_name = "syntaxReference")]
pub fn syntax_reference_wasm() -> JsValue {
    to_js_value(&crate::syntax_reference())
}

/// Get version information
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
