//! RTTTL notation generation
//!
//! Joins structured notes into a comma-separated RTTTL body and attaches
//! the header prefix.

use crate::models::{Note, RtttlHeader};

/// Comma-joined RTTTL body for a note sequence
pub fn render_notes(notes: &[Note]) -> String {
    notes
        .iter()
        .map(Note::notation)
        .collect::<Vec<_>>()
        .join(",")
}

/// Complete RTTTL string: header prefix, colon, note body. An empty note
/// list yields the header with a trailing colon and nothing after it.
pub fn render_rtttl(header: &RtttlHeader, notes: &[Note]) -> String {
    format!("{}:{}", header.prefix(), render_notes(notes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_are_comma_joined() {
        let notes = vec![Note::new("B5", "4"), Note::new("p", "8")];
        assert_eq!(render_notes(&notes), "4b5,8p");
    }

    #[test]
    fn test_note_without_duration_renders_bare() {
        let notes = vec![Note::new("B5", "")];
        assert_eq!(render_notes(&notes), "b5");
    }

    #[test]
    fn test_empty_note_list_renders_header_only() {
        let header = RtttlHeader::default();
        assert_eq!(render_rtttl(&header, &[]), "test:b=210,o=5,d=8:");
    }

    #[test]
    fn test_full_rtttl_string() {
        let header = RtttlHeader::resolve(Some("teest1"), Some("280"), Some("8"), Some("2"));
        let notes = vec![Note::new("B5", "4"), Note::new("p", "8")];
        assert_eq!(render_rtttl(&header, &notes), "teest1:b=280,o=2,d=8:4b5,8p");
    }
}
