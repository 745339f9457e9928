//! BLHELI_32 to RTTTL conversion
//!
//! The converter follows a three-stage pipeline:
//! 1. **Normalize**: strip disallowed characters, classify tokens, merge
//!    durations into their note heads
//! 2. **Build**: split the merged entries into structured notes
//! 3. **Render**: emit the RTTTL header and comma-joined note body
//!
//! Conversion is best-effort: tokens matching no accepted spelling are
//! reported alongside the output instead of failing the call, and header
//! fields fall back to their defaults silently.

use serde::{Deserialize, Serialize};

use crate::models::RtttlHeader;
use crate::parse::{build_notes, normalize};
use crate::renderers::render_rtttl;

/// Raw header inputs as supplied by the caller. Every field is optional;
/// values that do not validate fall back to the same defaults as missing
/// ones.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ConversionSettings {
    pub song_name: Option<String>,
    pub speed: Option<String>,
    pub duration: Option<String>,
    pub octave: Option<String>,
}

/// Conversion output: the final RTTTL string and every rejected input token
/// in encounter order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConversionResult {
    pub rtttl: String,
    pub invalid_tokens: Vec<String>,
}

/// Convert a BLHELI_32 melody string to an RTTTL string.
///
/// # Arguments
///
/// * `melody` - Melody in any accepted BLHELI_32 spelling
/// * `settings` - Optional header inputs (uses defaults if None)
pub fn convert_blheli32_to_rtttl(
    melody: &str,
    settings: Option<ConversionSettings>,
) -> ConversionResult {
    let settings = settings.unwrap_or_default();
    let header = RtttlHeader::resolve(
        settings.song_name.as_deref(),
        settings.speed.as_deref(),
        settings.duration.as_deref(),
        settings.octave.as_deref(),
    );
    log::debug!("resolved header prefix: {}", header.prefix());

    let normalized = normalize(melody);
    log::debug!("normalized melody: {}", normalized.notes.join(" "));

    let notes = build_notes(&normalized.notes);
    ConversionResult {
        rtttl: render_rtttl(&header, &notes),
        invalid_tokens: normalized.invalid_tokens,
    }
}
