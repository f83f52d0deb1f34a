//! Reflection outcome validation and streak bookkeeping.
//!
//! The streak update is a pure function over [`UserProgress`] so the
//! calendar rules can be tested without a store. Policy notes:
//! - every recorded outcome counts toward `total_attempts`, including a
//!   "maybe tomorrow" pass and a same-day re-record
//! - a pass can start or extend a streak just like a tried challenge
//! - a second record on the same day leaves `current_streak` unchanged

use chrono::{DateTime, FixedOffset, Utc};

use crate::attempt::{clamp_note, Feeling};
use crate::day::{day_of, yesterday};
use crate::error::{CoreError, Result};
use crate::progress::UserProgress;

/// A validated reflection outcome, ready to apply.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub did_try: bool,
    pub feeling: Option<Feeling>,
    pub note: Option<String>,
}

impl Outcome {
    /// Validate the caller's input per the reflection contract:
    /// a feeling is required when the challenge was tried and must be
    /// absent when it was not; notes are clamped to the 120-char limit.
    pub fn new(did_try: bool, feeling: Option<Feeling>, note: Option<&str>) -> Result<Self> {
        if did_try && feeling.is_none() {
            return Err(CoreError::InvalidInput(
                "a feeling is required when the challenge was tried".to_string(),
            ));
        }
        if !did_try && feeling.is_some() {
            return Err(CoreError::InvalidInput(
                "a feeling cannot be set when the challenge was not tried".to_string(),
            ));
        }
        let note = note
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(clamp_note);
        Ok(Self {
            did_try,
            feeling,
            note,
        })
    }

    /// Whether the presentation layer may fire a celebratory effect.
    pub fn celebrate(&self) -> bool {
        self.did_try && matches!(self.feeling, Some(Feeling::Nice) | Some(Feeling::Amazing))
    }
}

/// Apply one recorded outcome to the streak counters.
///
/// Uses `last_attempt_date` prior to this update:
/// - yesterday: streak continues
/// - today: already counted, streak unchanged
/// - anything else (or never): streak restarts at 1
pub fn apply_streak(progress: &mut UserProgress, now: DateTime<Utc>, offset: FixedOffset) {
    progress.total_attempts += 1;

    let today = day_of(now, offset);
    match progress.last_attempt_date.map(|d| day_of(d, offset)) {
        Some(last) if Some(last) == yesterday(today) => progress.current_streak += 1,
        Some(last) if last == today => {}
        _ => progress.current_streak = 1,
    }

    progress.longest_streak = progress.longest_streak.max(progress.current_streak);
    progress.last_attempt_date = Some(now);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn noon(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn outcome_requires_feeling_when_tried() {
        assert!(matches!(
            Outcome::new(true, None, None),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn outcome_rejects_feeling_on_pass() {
        assert!(matches!(
            Outcome::new(false, Some(Feeling::Nice), None),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn outcome_clamps_note() {
        let long = "x".repeat(500);
        let outcome = Outcome::new(true, Some(Feeling::Neutral), Some(&long)).unwrap();
        assert_eq!(outcome.note.unwrap().chars().count(), 120);

        let blank = Outcome::new(false, None, Some("   ")).unwrap();
        assert!(blank.note.is_none());
    }

    #[test]
    fn celebrate_only_on_positive_tried_outcomes() {
        assert!(Outcome::new(true, Some(Feeling::Nice), None).unwrap().celebrate());
        assert!(Outcome::new(true, Some(Feeling::Amazing), None).unwrap().celebrate());
        assert!(!Outcome::new(true, Some(Feeling::Awkward), None).unwrap().celebrate());
        assert!(!Outcome::new(false, None, None).unwrap().celebrate());
    }

    #[test]
    fn first_outcome_starts_a_streak() {
        let mut progress = UserProgress::new(None, true);
        apply_streak(&mut progress, noon(1), utc());
        assert_eq!(progress.current_streak, 1);
        assert_eq!(progress.longest_streak, 1);
        assert_eq!(progress.total_attempts, 1);
    }

    #[test]
    fn consecutive_days_extend_the_streak() {
        let mut progress = UserProgress::new(None, true);
        progress.current_streak = 3;
        progress.longest_streak = 3;
        progress.last_attempt_date = Some(noon(1));

        apply_streak(&mut progress, noon(2), utc());
        assert_eq!(progress.current_streak, 4);
        assert_eq!(progress.longest_streak, 4);
    }

    #[test]
    fn a_gap_resets_the_streak() {
        let mut progress = UserProgress::new(None, true);
        progress.current_streak = 5;
        progress.longest_streak = 5;
        progress.last_attempt_date = Some(noon(1));

        apply_streak(&mut progress, noon(4), utc());
        assert_eq!(progress.current_streak, 1);
        assert_eq!(progress.longest_streak, 5);
    }

    #[test]
    fn same_day_repeat_counts_the_attempt_but_not_the_streak() {
        let mut progress = UserProgress::new(None, true);
        apply_streak(&mut progress, noon(1), utc());
        apply_streak(&mut progress, noon(1) + Duration::hours(2), utc());

        assert_eq!(progress.current_streak, 1);
        assert_eq!(progress.total_attempts, 2);
    }

    #[test]
    fn longest_streak_never_decreases() {
        let mut progress = UserProgress::new(None, true);
        progress.current_streak = 2;
        progress.longest_streak = 9;
        progress.last_attempt_date = Some(noon(1));

        apply_streak(&mut progress, noon(2), utc());
        assert_eq!(progress.current_streak, 3);
        assert_eq!(progress.longest_streak, 9);
    }

    #[test]
    fn day_boundary_uses_the_local_offset() {
        // 23:30 UTC on Mar 1 and 01:30 UTC on Mar 2 are the same day at
        // UTC-5, so the second record is a same-day repeat there.
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let mut progress = UserProgress::new(None, true);
        apply_streak(&mut progress, Utc.with_ymd_and_hms(2026, 3, 1, 23, 30, 0).unwrap(), offset);
        apply_streak(&mut progress, Utc.with_ymd_and_hms(2026, 3, 2, 1, 30, 0).unwrap(), offset);
        assert_eq!(progress.current_streak, 1);

        // At UTC they fall on consecutive days and extend the streak.
        let mut progress = UserProgress::new(None, true);
        apply_streak(&mut progress, Utc.with_ymd_and_hms(2026, 3, 1, 23, 30, 0).unwrap(), utc());
        apply_streak(&mut progress, Utc.with_ymd_and_hms(2026, 3, 2, 1, 30, 0).unwrap(), utc());
        assert_eq!(progress.current_streak, 2);
    }
}
