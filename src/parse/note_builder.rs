//! Note building
//!
//! Splits the merged entries produced by normalization into structured
//! notes, separating the tune from the collected duration digits.

use crate::models::Note;

/// Build structured notes from merged entries, preserving order. Entries too
/// short to contain a pitch are dropped silently.
pub fn build_notes(entries: &[String]) -> Vec<Note> {
    entries.iter().filter_map(|entry| split_note(entry)).collect()
}

/// Split one merged entry into tune and duration
pub fn split_note(entry: &str) -> Option<Note> {
    if let Some(position) = entry.find('#') {
        // Sharp note: the tune runs through the octave digit after the '#',
        // which may be absent
        let end = (position + 2).min(entry.len());
        return Some(Note::new(&entry[..end], &entry[end..]));
    }
    if entry.contains('P') {
        // Pause: everything after the marker is duration
        return Some(Note::new("p", &entry[1..]));
    }
    if entry.len() >= 2 {
        Some(Note::new(&entry[..2], &entry[2..]))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_note() {
        assert_eq!(split_note("B54"), Some(Note::new("B5", "4")));
        assert_eq!(split_note("C62"), Some(Note::new("C6", "2")));
    }

    #[test]
    fn test_sharp_note() {
        assert_eq!(split_note("A#54"), Some(Note::new("A#5", "4")));
        assert_eq!(split_note("F#5"), Some(Note::new("F#5", "")));
    }

    #[test]
    fn test_sharp_note_without_octave() {
        assert_eq!(split_note("A#"), Some(Note::new("A#", "")));
    }

    #[test]
    fn test_pause() {
        assert_eq!(split_note("P8"), Some(Note::new("p", "8")));
        assert_eq!(split_note("P"), Some(Note::new("p", "")));
    }

    #[test]
    fn test_too_short_entry_is_dropped() {
        assert_eq!(split_note("C"), None);
        assert_eq!(split_note(""), None);
    }

    #[test]
    fn test_build_notes_preserves_order() {
        let entries = vec!["B54".to_string(), "C".to_string(), "P8".to_string()];
        let notes = build_notes(&entries);
        assert_eq!(notes, vec![Note::new("B5", "4"), Note::new("p", "8")]);
    }
}
