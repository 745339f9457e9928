//! BLHELI_32 to RTTTL Melody Converter
//!
//! Converts melody strings written in BLHELI_32 ESC beeper notation into
//! RTTTL strings playable by BlueJay ESC firmware. Conversion is tolerant:
//! tokens matching none of the accepted spellings are collected and reported
//! alongside the output instead of failing the call.

pub mod converters;
pub mod models;
pub mod parse;
pub mod renderers;

#[cfg(target_arch = "wasm32")]
pub mod api;

// Re-export the conversion entry point and its types
pub use converters::{convert_blheli32_to_rtttl, ConversionResult, ConversionSettings};
pub use models::{Note, RtttlHeader};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("BLHELI_32 to RTTTL converter module initialized");
}
