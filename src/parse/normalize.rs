//! Notation normalization
//!
//! Strips disallowed characters from a raw BLHELI_32 melody, splits it into
//! tokens, and merges duration tokens into the preceding note head. Tokens
//! matching no accepted spelling are collected in encounter order instead of
//! aborting the conversion.

use serde::{Deserialize, Serialize};

use super::tokens::{classify_token, TokenKind};

/// Characters removed from the raw melody before splitting
const STRIPPED_CHARS: [char; 4] = ['"', '\'', '`', '\n'];

/// Result of bringing a raw melody into canonical token form
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct NormalizedMelody {
    /// Merged entries, each a note head followed by its duration digits
    pub notes: Vec<String>,

    /// Rejected tokens, original spelling, encounter order
    pub invalid_tokens: Vec<String>,
}

/// Normalize a raw melody string into merged note entries.
pub fn normalize(raw: &str) -> NormalizedMelody {
    let cleaned: String = raw
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect();

    let mut result = NormalizedMelody::default();
    for token in cleaned.split(' ') {
        // Leftover whitespace (tabs and the like) is dropped silently, it is
        // not user notation
        if token.is_empty() || token.chars().any(char::is_whitespace) {
            continue;
        }
        match classify_token(token) {
            TokenKind::NoteHead => result.notes.push(token.to_string()),
            TokenKind::WholeDuration => merge_duration(&mut result, token, token),
            TokenKind::FractionDuration => {
                // Only the denominator survives; the numerator encodes dotted
                // semantics RTTTL cannot express
                merge_duration(&mut result, token, denominator(token));
            }
            TokenKind::NoteWithDuration => {
                // "C4/8" is rewritten to note letter plus denominator
                result
                    .notes
                    .push(format!("{}{}", &token[..1], denominator(token)));
            }
            TokenKind::Invalid => result.invalid_tokens.push(token.to_string()),
        }
    }
    result
}

/// Append a duration payload to the most recently opened entry. A duration
/// with no preceding note head has no merge target and counts as malformed.
fn merge_duration(result: &mut NormalizedMelody, original: &str, payload: &str) {
    match result.notes.last_mut() {
        Some(last) => last.push_str(payload),
        None => result.invalid_tokens.push(original.to_string()),
    }
}

/// Digits after the '/' of a fraction or combined token
fn denominator(token: &str) -> &str {
    token.split_once('/').map_or("", |(_, denom)| denom)
}
