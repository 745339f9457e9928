//! RTTTL header resolution
//!
//! Header fields never fail a conversion: each field is validated
//! independently and silently falls back to its documented default when the
//! supplied value does not parse. Valid values pass through literally,
//! without clamping.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SONG_NAME: &str = "test";
pub const DEFAULT_SPEED: &str = "210";
pub const DEFAULT_OCTAVE: &str = "5";
pub const DEFAULT_DURATION: &str = "8";

/// Resolved RTTTL header fields
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RtttlHeader {
    /// Song name (default "test")
    pub song_name: String,

    /// Beats per minute (default "210")
    pub speed: String,

    /// Default octave (default "5")
    pub octave: String,

    /// Base note duration, a power of two (default "8")
    pub duration: String,
}

impl Default for RtttlHeader {
    fn default() -> Self {
        Self::resolve(None, None, None, None)
    }
}

impl RtttlHeader {
    /// Resolve raw header inputs, substituting the default for every field
    /// that does not parse.
    pub fn resolve(
        song_name: Option<&str>,
        speed: Option<&str>,
        duration: Option<&str>,
        octave: Option<&str>,
    ) -> Self {
        Self {
            song_name: resolve_song_name(song_name),
            speed: numeric_or(speed, DEFAULT_SPEED),
            octave: numeric_or(octave, DEFAULT_OCTAVE),
            duration: resolve_duration(duration),
        }
    }

    /// Header prefix without the trailing colon, e.g. "test:b=210,o=5,d=8"
    pub fn prefix(&self) -> String {
        format!(
            "{}:b={},o={},d={}",
            self.song_name, self.speed, self.octave, self.duration
        )
    }
}

fn resolve_song_name(name: Option<&str>) -> String {
    match name {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => DEFAULT_SONG_NAME.to_string(),
    }
}

fn numeric_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if v.parse::<f64>().map_or(false, f64::is_finite) => v.to_string(),
        _ => default.to_string(),
    }
}

/// The base duration must be a power of two; anything else becomes the
/// default. `log2(x)` has no fractional part exactly for powers of two.
fn resolve_duration(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) => match v.parse::<f64>() {
            Ok(n) if n.log2().fract() == 0.0 => v.to_string(),
            _ => DEFAULT_DURATION.to_string(),
        },
        None => DEFAULT_DURATION.to_string(),
    }
}
