//! Attempt records: one day's engagement with one challenge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum note length in characters.
pub const MAX_NOTE_LEN: usize = 120;

/// How the attempt felt. Set only when the user actually tried.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Feeling {
    Awkward,
    Neutral,
    Nice,
    Amazing,
}

impl Feeling {
    /// Emoji used by the reflection picker.
    pub fn emoji(&self) -> &'static str {
        match self {
            Feeling::Awkward => "\u{1F62C}", // 😬
            Feeling::Neutral => "\u{1F610}", // 😐
            Feeling::Nice => "\u{1F642}",    // 🙂
            Feeling::Amazing => "\u{1F604}", // 😄
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Feeling::Awkward => "Awkward",
            Feeling::Neutral => "Neutral",
            Feeling::Nice => "Nice",
            Feeling::Amazing => "Amazing",
        }
    }

    /// Parse the lowercase name used in storage and on the CLI.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "awkward" => Some(Feeling::Awkward),
            "neutral" => Some(Feeling::Neutral),
            "nice" => Some(Feeling::Nice),
            "amazing" => Some(Feeling::Amazing),
            _ => None,
        }
    }
}

/// Record of a user's engagement with a challenge on a given day.
///
/// Created lazily the first time the user acts on a day (accept or
/// reflect), then updated in place for the rest of that day. Never
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    pub id: String,
    pub challenge_id: String,
    /// Creation timestamp; its calendar day identifies the attempt's day.
    pub date: DateTime<Utc>,
    pub did_try: bool,
    pub feeling: Option<Feeling>,
    pub note: Option<String>,
}

impl Attempt {
    /// Create a fresh attempt for a challenge, not yet tried.
    pub fn new(challenge_id: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            challenge_id: challenge_id.into(),
            date,
            did_try: false,
            feeling: None,
            note: None,
        }
    }

    /// Whether the day's reflection has been captured.
    ///
    /// A set feeling always counts; a "maybe tomorrow" only counts when it
    /// carries a note, since an accepted-but-unreflected attempt looks the
    /// same otherwise.
    pub fn is_reflected(&self) -> bool {
        self.feeling.is_some() || (!self.did_try && self.note.is_some())
    }
}

/// Truncate a note to [`MAX_NOTE_LEN`] characters (not bytes).
pub fn clamp_note(note: &str) -> String {
    if note.chars().count() > MAX_NOTE_LEN {
        note.chars().take(MAX_NOTE_LEN).collect()
    } else {
        note.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feeling_parse_round_trip() {
        for f in [Feeling::Awkward, Feeling::Neutral, Feeling::Nice, Feeling::Amazing] {
            assert_eq!(Feeling::parse(&f.display_name().to_lowercase()), Some(f));
        }
        assert_eq!(Feeling::parse("meh"), None);
    }

    #[test]
    fn clamp_note_is_char_aware() {
        let long: String = "あ".repeat(200);
        let clamped = clamp_note(&long);
        assert_eq!(clamped.chars().count(), MAX_NOTE_LEN);

        let short = "went fine";
        assert_eq!(clamp_note(short), short);
    }

    #[test]
    fn reflected_states() {
        let mut attempt = Attempt::new("c1", Utc::now());
        assert!(!attempt.is_reflected());

        attempt.did_try = true;
        attempt.feeling = Some(Feeling::Nice);
        assert!(attempt.is_reflected());

        // Maybe-tomorrow with a note counts as reflected.
        attempt.did_try = false;
        attempt.feeling = None;
        attempt.note = Some("too rainy".to_string());
        assert!(attempt.is_reflected());

        // Maybe-tomorrow without a note does not.
        attempt.note = None;
        assert!(!attempt.is_reflected());
    }
}
