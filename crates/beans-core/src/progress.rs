//! The single per-installation profile and streak aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile and streak state. Exactly one row exists per installation,
/// created when onboarding completes and mutated by every recorded
/// reflection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProgress {
    pub id: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_attempts: u32,
    pub display_name: Option<String>,
    pub is_anonymous: bool,
    pub has_completed_onboarding: bool,
    pub last_attempt_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UserProgress {
    /// Create the profile row at onboarding completion.
    ///
    /// An empty or whitespace-only display name is treated as absent, and
    /// anonymous profiles never carry a name.
    pub fn new(display_name: Option<String>, is_anonymous: bool) -> Self {
        let display_name = if is_anonymous {
            None
        } else {
            display_name.filter(|name| !name.trim().is_empty())
        };
        Self {
            id: Uuid::new_v4().to_string(),
            current_streak: 0,
            longest_streak: 0,
            total_attempts: 0,
            display_name,
            is_anonymous,
            has_completed_onboarding: true,
            last_attempt_date: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_profile_drops_name() {
        let progress = UserProgress::new(Some("Sam".to_string()), true);
        assert!(progress.display_name.is_none());
        assert!(progress.is_anonymous);
        assert!(progress.has_completed_onboarding);
    }

    #[test]
    fn named_profile_keeps_name() {
        let progress = UserProgress::new(Some("Sam".to_string()), false);
        assert_eq!(progress.display_name.as_deref(), Some("Sam"));
    }

    #[test]
    fn blank_name_is_absent() {
        let progress = UserProgress::new(Some("   ".to_string()), false);
        assert!(progress.display_name.is_none());
    }

    #[test]
    fn fresh_profile_counters_start_at_zero() {
        let progress = UserProgress::new(None, true);
        assert_eq!(progress.current_streak, 0);
        assert_eq!(progress.longest_streak, 0);
        assert_eq!(progress.total_attempts, 0);
        assert!(progress.last_attempt_date.is_none());
    }
}
