//! NFOStandard codec WASM API
//!
//! JavaScript-facing entry points. Everything here delegates to
//! [`crate::converters`]; errors cross the boundary as strings.
//!
//! # Module Structure
//!
//! - `convert`: the exported conversion functions
//! - `helpers`: logging macros, error mapping and serde bridging

pub mod convert;
pub mod helpers;

pub use convert::{nfo_binary_to_xml, nfo_validate_xml, nfo_xml_to_binary, nfo_xml_to_json};
