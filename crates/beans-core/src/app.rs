//! Application handle wiring the store, the selection policy, and the
//! reflection engine together.
//!
//! [`Beans`] is the explicit context the presentation layer owns; there is
//! no ambient global state. Mutating calls return the updated entities so
//! callers re-render from the result instead of observing live queries.

use std::path::Path;

use chrono::{DateTime, FixedOffset, Utc};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use serde::Serialize;
use tracing::info;

use crate::attempt::{Attempt, Feeling};
use crate::catalog::seed_catalog;
use crate::challenge::Challenge;
use crate::day::{day_bounds, day_of, local_offset};
use crate::error::{CoreError, Result};
use crate::progress::UserProgress;
use crate::reflection::{apply_streak, Outcome};
use crate::selection::{pick_excluding, pick_random};
use crate::storage::Database;

/// Today's challenge plus whatever attempt state exists for the day.
#[derive(Debug, Clone, Serialize)]
pub struct DailyChallenge {
    pub challenge: Challenge,
    pub attempt: Option<Attempt>,
}

impl DailyChallenge {
    /// Whether the day's pick has been persisted (accept or reflect).
    pub fn committed(&self) -> bool {
        self.attempt.is_some()
    }

    /// Whether the day's reflection has been captured.
    pub fn reflected(&self) -> bool {
        self.attempt.as_ref().is_some_and(Attempt::is_reflected)
    }
}

/// Result of recording an outcome: the updated rows plus whether the
/// presentation layer may celebrate.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeRecord {
    pub attempt: Attempt,
    pub progress: UserProgress,
    pub celebrate: bool,
}

/// One feed entry: an attempt joined with its challenge.
#[derive(Debug, Clone, Serialize)]
pub struct FeedItem {
    pub attempt: Attempt,
    pub challenge: Challenge,
}

/// Handle over the entity store and the daily-challenge engine.
pub struct Beans {
    db: Database,
    offset: FixedOffset,
    rng: Pcg64Mcg,
}

impl Beans {
    /// Open the default database, seed the catalog on first run, and build
    /// the handle with the local timezone offset.
    pub fn open() -> Result<Self> {
        let db = Database::open()?;
        seed_catalog(&db)?;
        Ok(Self::with_database(db))
    }

    /// Open a database at an explicit path and seed the catalog.
    pub fn open_at(path: &Path) -> Result<Self> {
        let db = Database::open_at(path)?;
        seed_catalog(&db)?;
        Ok(Self::with_database(db))
    }

    /// Build a handle over an already-opened database. The catalog is left
    /// as-is; callers seed it themselves if needed.
    pub fn with_database(db: Database) -> Self {
        Self {
            db,
            offset: local_offset(),
            rng: Pcg64Mcg::from_entropy(),
        }
    }

    /// Pin the calendar-day offset (tests).
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Seed the selection RNG (tests).
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = Pcg64Mcg::seed_from_u64(seed);
        self
    }

    /// Direct access to the entity store.
    pub fn database(&self) -> &Database {
        &self.db
    }

    fn today_bounds(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        day_bounds(day_of(now, self.offset), self.offset)
    }

    /// Today's challenge.
    ///
    /// Once an attempt exists for today the challenge is pinned to it for
    /// the rest of the day, across restarts. Before that, each call may
    /// return a different random pick among active challenges.
    pub fn today_challenge(&mut self) -> Result<DailyChallenge> {
        self.today_challenge_at(Utc::now())
    }

    /// [`Self::today_challenge`] with an explicit clock.
    pub fn today_challenge_at(&mut self, now: DateTime<Utc>) -> Result<DailyChallenge> {
        let (start, end) = self.today_bounds(now);

        if let Some(attempt) = self.db.attempt_in_range(start, end)? {
            let challenge = self
                .db
                .get_challenge(&attempt.challenge_id)?
                .ok_or_else(|| CoreError::NotFound(attempt.challenge_id.clone()))?;
            return Ok(DailyChallenge {
                challenge,
                attempt: Some(attempt),
            });
        }

        let active = self.db.list_active_challenges()?;
        let challenge = pick_random(&active, &mut self.rng)
            .cloned()
            .ok_or(CoreError::EmptyCatalog)?;
        Ok(DailyChallenge {
            challenge,
            attempt: None,
        })
    }

    /// Re-roll the uncommitted pick, excluding the currently shown
    /// challenge. Creates no attempt; returns `None` when there is no
    /// other active challenge to show.
    pub fn skip_challenge(&mut self, exclude_id: &str) -> Result<Option<Challenge>> {
        let active = self.db.list_active_challenges()?;
        if active.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }
        Ok(pick_excluding(&active, exclude_id, &mut self.rng).cloned())
    }

    /// Commit today's pick by creating the day's attempt record.
    ///
    /// Idempotent: if an attempt already exists for today it is returned
    /// unchanged, whatever challenge it points at.
    pub fn accept_challenge(&mut self, challenge_id: &str) -> Result<Attempt> {
        self.accept_challenge_at(challenge_id, Utc::now())
    }

    /// [`Self::accept_challenge`] with an explicit clock.
    pub fn accept_challenge_at(
        &mut self,
        challenge_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Attempt> {
        if self.db.get_challenge(challenge_id)?.is_none() {
            return Err(CoreError::NotFound(challenge_id.to_string()));
        }

        let (start, end) = self.today_bounds(now);
        if let Some(existing) = self.db.attempt_in_range(start, end)? {
            return Ok(existing);
        }

        let attempt = Attempt::new(challenge_id, now);
        self.db.insert_attempt(&attempt)?;
        info!(challenge_id, "accepted today's challenge");
        Ok(attempt)
    }

    /// Record the day's outcome and update streak counters.
    ///
    /// Finds or creates today's attempt for the challenge and overwrites
    /// it in place; repeated calls on the same day update the same record.
    /// The attempt and progress rows are committed as one transaction.
    pub fn record_outcome(
        &mut self,
        challenge_id: &str,
        did_try: bool,
        feeling: Option<Feeling>,
        note: Option<&str>,
    ) -> Result<OutcomeRecord> {
        self.record_outcome_at(challenge_id, did_try, feeling, note, Utc::now())
    }

    /// [`Self::record_outcome`] with an explicit clock.
    pub fn record_outcome_at(
        &mut self,
        challenge_id: &str,
        did_try: bool,
        feeling: Option<Feeling>,
        note: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<OutcomeRecord> {
        if self.db.get_challenge(challenge_id)?.is_none() {
            return Err(CoreError::NotFound(challenge_id.to_string()));
        }
        let outcome = Outcome::new(did_try, feeling, note)?;
        let mut progress = self.db.get_progress()?.ok_or(CoreError::ProfileMissing)?;

        let (start, end) = self.today_bounds(now);
        let mut attempt = self
            .db
            .attempt_in_range_for(start, end, challenge_id)?
            .unwrap_or_else(|| Attempt::new(challenge_id, now));
        attempt.did_try = outcome.did_try;
        attempt.feeling = outcome.feeling;
        attempt.note = outcome.note.clone();

        apply_streak(&mut progress, now, self.offset);
        self.db.commit_outcome(&attempt, &progress)?;
        info!(
            challenge_id,
            did_try,
            streak = progress.current_streak,
            "recorded outcome"
        );

        Ok(OutcomeRecord {
            attempt,
            progress,
            celebrate: outcome.celebrate(),
        })
    }

    /// The profile/streak row, if onboarding has completed.
    pub fn progress(&self) -> Result<Option<UserProgress>> {
        Ok(self.db.get_progress()?)
    }

    /// Create the profile row. Idempotent: a second call returns the
    /// existing row untouched, keeping the single-row invariant.
    pub fn complete_onboarding(
        &mut self,
        display_name: Option<String>,
        is_anonymous: bool,
    ) -> Result<UserProgress> {
        if let Some(existing) = self.db.get_progress()? {
            return Ok(existing);
        }
        let progress = UserProgress::new(display_name, is_anonymous);
        self.db.insert_progress(&progress)?;
        info!(anonymous = is_anonymous, "onboarding completed");
        Ok(progress)
    }

    /// Most recent attempts joined with their challenges, newest first.
    pub fn recent_attempts(&self, limit: usize) -> Result<Vec<FeedItem>> {
        let mut items = Vec::new();
        for attempt in self.db.recent_attempts(limit)? {
            if let Some(challenge) = self.db.get_challenge(&attempt.challenge_id)? {
                items.push(FeedItem { attempt, challenge });
            }
        }
        Ok(items)
    }
}
