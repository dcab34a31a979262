//! Conversion operations for the WASM API
//!
//! - `nfoXmlToBinary`: NFOStandard XML to binary bytes
//! - `nfoBinaryToXml`: binary bytes to NFOStandard XML
//! - `nfoXmlToJson`: XML to the JSON rendering of the record
//! - `nfoValidateXml`: soft-invariant issues of an XML document
//!
//! Each export is a thin wrapper over a plain Rust function of the same
//! shape, so the logic stays usable (and testable) off the wasm target.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize, to_js_error};
use crate::converters::{self, json, ConversionSettings, Converter, Result, ValidationIssue};
use crate::{wasm_info, wasm_log};

// ============================================================================
// Plain conversions
// ============================================================================

pub fn xml_to_binary_with(xml: &str, settings: &ConversionSettings) -> Result<Vec<u8>> {
    Converter::new(settings.clone()).xml_to_binary(xml)
}

pub fn binary_to_xml_with(bytes: &[u8], settings: &ConversionSettings) -> Result<String> {
    Converter::new(settings.clone()).binary_to_xml(bytes)
}

pub fn xml_to_json(xml: &str) -> Result<String> {
    json::record_to_json(&converters::xml_to_record(xml)?)
}

pub fn validate_xml(xml: &str) -> Result<Vec<ValidationIssue>> {
    let (_, issues) = Converter::default().xml_to_record_checked(xml)?;
    Ok(issues)
}

fn settings_from_js(settings: JsValue) -> std::result::Result<ConversionSettings, JsValue> {
    if settings.is_undefined() || settings.is_null() {
        Ok(ConversionSettings::default())
    } else {
        deserialize(settings, "Invalid conversion settings")
    }
}

// ============================================================================
// WASM exports
// ============================================================================

/// Convert NFOStandard XML to the compact binary encoding
///
/// # Parameters
/// * `xml` - document text
/// * `settings` - optional `{ indent, validate }` object
#[wasm_bindgen(js_name = nfoXmlToBinary)]
pub fn nfo_xml_to_binary(
    xml: &str,
    settings: JsValue,
) -> std::result::Result<js_sys::Uint8Array, JsValue> {
    wasm_info!("nfoXmlToBinary called: {} bytes of XML", xml.len());

    let settings = settings_from_js(settings)?;
    let bytes = xml_to_binary_with(xml, &settings)
        .map_err(|e| to_js_error("NFO XML to binary error", e))?;

    wasm_log!("  binary generated: {} bytes", bytes.len());
    Ok(js_sys::Uint8Array::from(bytes.as_slice()))
}

/// Convert binary bytes back to NFOStandard XML
#[wasm_bindgen(js_name = nfoBinaryToXml)]
pub fn nfo_binary_to_xml(bytes: &[u8], settings: JsValue) -> std::result::Result<String, JsValue> {
    wasm_info!("nfoBinaryToXml called: {} bytes", bytes.len());

    let settings = settings_from_js(settings)?;
    binary_to_xml_with(bytes, &settings).map_err(|e| to_js_error("NFO binary to XML error", e))
}

#[wasm_bindgen(js_name = nfoXmlToJson)]
pub fn nfo_xml_to_json(xml: &str) -> std::result::Result<String, JsValue> {
    xml_to_json(xml).map_err(|e| to_js_error("NFO XML to JSON error", e))
}

/// List soft-invariant issues; returns an array of issue objects
#[wasm_bindgen(js_name = nfoValidateXml)]
pub fn nfo_validate_xml(xml: &str) -> std::result::Result<JsValue, JsValue> {
    let issues = validate_xml(xml).map_err(|e| to_js_error("NFO validation error", e))?;
    wasm_log!("  {} validation issue(s)", issues.len());
    serialize(&issues, "Failed to serialize validation issues")
}
