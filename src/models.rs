//! Data models for the note board.
//!
//! A board is built from a fixed list of Markdown sources. Each source
//! reduces to a [`Note`]: display title, display time label, and the body
//! rendered to HTML.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

// ============================================================================
// Trusted HTML
// ============================================================================

/// HTML that is inserted into the page without sanitization.
///
/// The only constructor is [`TrustedHtml::from_renderer`], called by the
/// Markdown renderer. The trust boundary is the configured source list:
/// whoever can edit a listed document can put arbitrary markup on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn from_renderer(html: String) -> Self {
        TrustedHtml(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Notes
// ============================================================================

/// One parsed Markdown document.
///
/// The first non-blank line of the source is the title, the second the time
/// label, everything after that the rendered body. Immutable after parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub time: String,
    pub content_html: TrustedHtml,
}

impl Note {
    /// A note whose title is the untitled placeholder is invalid and never
    /// enters the collection.
    pub fn is_untitled(&self) -> bool {
        self.title == crate::markdown::UNTITLED_TITLE
    }

    /// Best-effort parse of the time label, for chronological ordering.
    ///
    /// The label is free text; only the common date and date-time layouts
    /// are recognized. Anything else yields `None` and sorts last.
    pub fn parsed_time(&self) -> Option<NaiveDateTime> {
        let label = self.time.trim();

        for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(label, format) {
                return Some(dt);
            }
        }

        NaiveDate::parse_from_str(label, "%Y-%m-%d")
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::UNTITLED_TITLE;

    fn note(title: &str, time: &str) -> Note {
        Note {
            title: title.to_string(),
            time: time.to_string(),
            content_html: TrustedHtml::from_renderer(String::new()),
        }
    }

    #[test]
    fn test_untitled_detection() {
        assert!(note(UNTITLED_TITLE, "2024-01-01").is_untitled());
        assert!(!note("Groceries", "2024-01-01").is_untitled());
    }

    #[test]
    fn test_parsed_time_formats() {
        let date = note("t", "2024-06-15");
        assert_eq!(
            date.parsed_time().unwrap().to_string(),
            "2024-06-15 00:00:00"
        );

        let minutes = note("t", "2024-06-15 09:30");
        assert_eq!(
            minutes.parsed_time().unwrap().to_string(),
            "2024-06-15 09:30:00"
        );

        let seconds = note("t", " 2024-06-15 09:30:05 ");
        assert_eq!(
            seconds.parsed_time().unwrap().to_string(),
            "2024-06-15 09:30:05"
        );
    }

    #[test]
    fn test_parsed_time_free_text() {
        assert_eq!(note("t", "sometime last spring").parsed_time(), None);
        assert_eq!(note("t", "Unknown time").parsed_time(), None);
    }
}
