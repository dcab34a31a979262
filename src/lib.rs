//! NFOStandard codec
//!
//! Converts NFOStandard media metadata between its XML form and a compact
//! binary encoding, for movies, TV shows, music, audiobooks, podcasts,
//! anime, music videos and generic video. The binary form is a protobuf
//! message, so any protobuf implementation can read what this crate writes.
//!
//! ```text
//! XML ──parse──> NfoRoot ──encode──> bytes
//! XML <─write─── NfoRoot <─decode─── bytes
//! ```

pub mod api;
pub mod converters;
pub mod models;

// Re-export commonly used types
pub use converters::{
    binary_to_record, binary_to_xml, record_to_binary, record_to_xml, xml_to_binary,
    xml_to_record, ConversionSettings, ConvertError, Converter,
};
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        return;
    }

    log::info!("NFOStandard codec WASM module initialized");
}
