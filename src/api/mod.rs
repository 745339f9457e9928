//! Melody converter WASM API
//!
//! This module provides the JavaScript-facing API for the converter. The
//! browser form glue (DOM lookup, clipboard, generated HTML) stays on the
//! JavaScript side; this module only converts and serializes the result.

use wasm_bindgen::prelude::*;

use crate::converters::{convert_blheli32_to_rtttl, ConversionSettings};

/// Convert a BLHELI_32 melody string to RTTTL.
///
/// Returns an object with `rtttl` and `invalid_tokens` fields. Omitted or
/// empty header fields fall back to their defaults.
#[wasm_bindgen(js_name = convertBlheli32ToRtttl)]
pub fn convert_blheli32_to_rtttl_js(
    melody: &str,
    song_name: Option<String>,
    speed: Option<String>,
    duration: Option<String>,
    octave: Option<String>,
) -> Result<JsValue, JsValue> {
    let settings = ConversionSettings {
        song_name,
        speed,
        duration,
        octave,
    };
    let result = convert_blheli32_to_rtttl(melody, Some(settings));
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}
