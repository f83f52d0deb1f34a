//! Challenge catalog entries.
//!
//! A challenge is a small social-courage activity ("say hi to a stranger").
//! Catalog entries are created once by the catalog loader and never mutated
//! afterwards except for retirement via `is_active`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Difficulty tier of a challenge.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a dataset difficulty string. Unrecognized values fall back
    /// to `Easy`.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    /// Plant emoji shown next to the difficulty.
    pub fn emoji(&self) -> &'static str {
        match self {
            Difficulty::Easy => "\u{1F331}",   // 🌱
            Difficulty::Medium => "\u{1F33F}", // 🌿
            Difficulty::Hard => "\u{1F333}",   // 🌳
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A social courage challenge.
///
/// `id` is unique and immutable after creation. Challenges are never
/// deleted; retirement happens by flipping `is_active` off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    pub emoji: String,
    /// Asset name for a custom illustration, if the challenge has one.
    pub illustration: Option<String>,
    pub category: String,
    /// Whether the challenge is eligible for daily selection.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Challenge {
    /// Create a new active challenge with a fresh id.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
        estimated_time: impl Into<String>,
        emoji: impl Into<String>,
        illustration: Option<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            difficulty,
            estimated_time: estimated_time.into(),
            emoji: emoji.into(),
            illustration,
            category: category.into(),
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_difficulty_known_values() {
        assert_eq!(Difficulty::parse("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::parse("Medium"), Difficulty::Medium);
        assert_eq!(Difficulty::parse("HARD"), Difficulty::Hard);
    }

    #[test]
    fn parse_difficulty_falls_back_to_easy() {
        assert_eq!(Difficulty::parse("extreme"), Difficulty::Easy);
        assert_eq!(Difficulty::parse(""), Difficulty::Easy);
    }

    #[test]
    fn default_difficulty_is_easy() {
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn new_challenge_is_active_with_fresh_id() {
        let a = Challenge::new("Say hi", "Say hi to a stranger", Difficulty::Easy, "1 min", "👋", None, "Icebreaker");
        let b = Challenge::new("Say hi", "Say hi to a stranger", Difficulty::Easy, "1 min", "👋", None, "Icebreaker");
        assert!(a.is_active);
        assert_ne!(a.id, b.id);
    }
}
