//! Structured note representation
//!
//! A note is the merged unit the normalizer produces: a tune (pitch plus
//! octave, sharp pitch plus octave, or the pause marker) and the duration
//! digits collected for it.

use serde::{Deserialize, Serialize};

/// A single melody note with its duration suffix
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Note {
    /// Tune of the note (e.g. "C#5", "B5", or "p" for a pause)
    pub tune: String,

    /// Duration digits; empty when the input never carried a duration
    pub duration: String,
}

impl Note {
    /// Create a new note
    pub fn new(tune: &str, duration: &str) -> Self {
        Self {
            tune: tune.to_string(),
            duration: duration.to_string(),
        }
    }

    /// RTTTL notation for this note: duration digits followed by the
    /// lowercased tune. The duration may be empty.
    pub fn notation(&self) -> String {
        format!("{}{}", self.duration, self.tune.to_lowercase())
    }
}
