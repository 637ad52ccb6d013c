//! Meeting notes and their single validation rule

/// Minimum number of characters (after trimming) accepted as meeting notes
pub const MIN_NOTES_CHARS: usize = 50;

/// Title used when the caller gives none
pub const DEFAULT_MEETING_TITLE: &str = "Untitled Meeting";

/// Raw meeting notes plus an optional title
///
/// Transient: lives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingNotes {
    /// The notes text as submitted
    pub text: String,

    /// Optional meeting title
    pub title: Option<String>,
}

impl MeetingNotes {
    /// Create meeting notes
    pub fn new(text: impl Into<String>, title: Option<String>) -> Self {
        Self {
            text: text.into(),
            title,
        }
    }

    /// Character count after trimming surrounding whitespace
    pub fn trimmed_len(&self) -> usize {
        trimmed_char_count(&self.text)
    }

    /// Check the minimum-length rule
    ///
    /// # Examples
    ///
    /// ```
    /// use docket_domain::MeetingNotes;
    ///
    /// let notes = MeetingNotes::new("   too short   ", None);
    /// assert!(!notes.meets_minimum(50));
    /// ```
    pub fn meets_minimum(&self, min_chars: usize) -> bool {
        self.trimmed_len() >= min_chars
    }

    /// The title, or [`DEFAULT_MEETING_TITLE`] when absent or blank
    pub fn title_or_default(&self) -> &str {
        title_or_default(self.title.as_deref())
    }
}

/// Characters (Unicode scalar values) after trimming surrounding whitespace
pub fn trimmed_char_count(text: &str) -> usize {
    text.trim().chars().count()
}

/// Resolve an optional title to a display title
pub fn title_or_default(title: Option<&str>) -> &str {
    match title {
        Some(t) if !t.trim().is_empty() => t,
        _ => DEFAULT_MEETING_TITLE,
    }
}
