//! Token recognition and classification
//!
//! This module classifies whitespace-delimited BLHELI_32 tokens against an
//! ordered pattern table; the first matching pattern wins. Durations are
//! only recognized when their value is a power of two.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Token kinds of BLHELI_32 melody notation
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Note or pause head, e.g. "C", "C#5", "P8"
    NoteHead,
    /// Bare power-of-two duration, e.g. "4"
    WholeDuration,
    /// Fractional duration, e.g. "1/4"
    FractionDuration,
    /// Combined note and fractional duration, e.g. "C4/4" (no sharp form)
    NoteWithDuration,
    /// Anything else
    Invalid,
}

static TOKEN_PATTERNS: Lazy<[(Regex, TokenKind); 4]> = Lazy::new(|| {
    [
        (
            Regex::new(r"^[A-GP]#?\d{0,4}$").unwrap(),
            TokenKind::NoteHead,
        ),
        (
            Regex::new(r"^(?:1|2|4|8|16|32|64|128)$").unwrap(),
            TokenKind::WholeDuration,
        ),
        (
            Regex::new(r"^\d/(?:1|2|4|8|16|32|64|128)$").unwrap(),
            TokenKind::FractionDuration,
        ),
        (
            Regex::new(r"^[A-GP]\d/(?:1|2|4|8|16|32|64|128)$").unwrap(),
            TokenKind::NoteWithDuration,
        ),
    ]
});

/// Classify one cleaned token
pub fn classify_token(token: &str) -> TokenKind {
    TOKEN_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(token))
        .map(|(_, kind)| *kind)
        .unwrap_or(TokenKind::Invalid)
}
