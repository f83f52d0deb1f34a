//! SQLite-based entity store.
//!
//! Single persistence boundary for the three entities:
//! - Challenge catalog rows
//! - Attempt records (one actionable record per calendar day)
//! - The single UserProgress row
//!
//! Writes commit synchronously; the reflection outcome is applied as one
//! SQL transaction so the attempt and progress rows never diverge.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::data_dir;
use crate::attempt::{Attempt, Feeling};
use crate::challenge::{Challenge, Difficulty};
use crate::error::{CoreError, DatabaseError};
use crate::progress::UserProgress;

// === Helper Functions ===

/// Format difficulty for database storage
fn format_difficulty(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "easy",
        Difficulty::Medium => "medium",
        Difficulty::Hard => "hard",
    }
}

/// Format feeling for database storage
fn format_feeling(feeling: Option<Feeling>) -> Option<&'static str> {
    feeling.map(|f| match f {
        Feeling::Awkward => "awkward",
        Feeling::Neutral => "neutral",
        Feeling::Nice => "nice",
        Feeling::Amazing => "amazing",
    })
}

/// Parse feeling from database string
fn parse_feeling(feeling_str: Option<&str>) -> Option<Feeling> {
    feeling_str.and_then(Feeling::parse)
}

/// Parse datetime from RFC3339 string with fallback to current time
fn parse_datetime_fallback(dt_str: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(dt_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Build a Challenge from a database row
fn row_to_challenge(row: &rusqlite::Row) -> Result<Challenge, rusqlite::Error> {
    let difficulty_str: String = row.get(3)?;
    let created_at_str: String = row.get(9)?;

    Ok(Challenge {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        difficulty: Difficulty::parse(&difficulty_str),
        estimated_time: row.get(4)?,
        emoji: row.get(5)?,
        illustration: row.get(6)?,
        category: row.get(7)?,
        is_active: row.get(8)?,
        created_at: parse_datetime_fallback(&created_at_str),
    })
}

/// Build an Attempt from a database row
fn row_to_attempt(row: &rusqlite::Row) -> Result<Attempt, rusqlite::Error> {
    let date_str: String = row.get(2)?;
    let feeling_str: Option<String> = row.get(4)?;

    Ok(Attempt {
        id: row.get(0)?,
        challenge_id: row.get(1)?,
        date: parse_datetime_fallback(&date_str),
        did_try: row.get(3)?,
        feeling: parse_feeling(feeling_str.as_deref()),
        note: row.get(5)?,
    })
}

/// Build a UserProgress from a database row
fn row_to_progress(row: &rusqlite::Row) -> Result<UserProgress, rusqlite::Error> {
    let last_attempt_str: Option<String> = row.get(7)?;
    let created_at_str: String = row.get(8)?;

    Ok(UserProgress {
        id: row.get(0)?,
        current_streak: row.get(1)?,
        longest_streak: row.get(2)?,
        total_attempts: row.get(3)?,
        display_name: row.get(4)?,
        is_anonymous: row.get(5)?,
        has_completed_onboarding: row.get(6)?,
        last_attempt_date: last_attempt_str.as_deref().map(parse_datetime_fallback),
        created_at: parse_datetime_fallback(&created_at_str),
    })
}

const ATTEMPT_COLUMNS: &str = "id, challenge_id, date, did_try, feeling, note";
const CHALLENGE_COLUMNS: &str =
    "id, title, description, difficulty, estimated_time, emoji, illustration, category, is_active, created_at";
const PROGRESS_COLUMNS: &str =
    "id, current_streak, longest_streak, total_attempts, display_name, is_anonymous, has_completed_onboarding, last_attempt_date, created_at";

/// SQLite database for challenge, attempt, and progress storage.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/beans/beans.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("beans.db");
        Self::open_at(&path)
    }

    /// Open the database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self, CoreError> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory()
            .map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS challenges (
                id             TEXT PRIMARY KEY,
                title          TEXT NOT NULL,
                description    TEXT NOT NULL,
                difficulty     TEXT NOT NULL DEFAULT 'easy',
                estimated_time TEXT NOT NULL DEFAULT '',
                emoji          TEXT NOT NULL DEFAULT '',
                illustration   TEXT,
                category       TEXT NOT NULL DEFAULT '',
                is_active      INTEGER NOT NULL DEFAULT 1,
                created_at     TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS attempts (
                id           TEXT PRIMARY KEY,
                challenge_id TEXT NOT NULL,
                date         TEXT NOT NULL,
                did_try      INTEGER NOT NULL DEFAULT 0,
                feeling      TEXT,
                note         TEXT
            );

            CREATE TABLE IF NOT EXISTS user_progress (
                id                       TEXT PRIMARY KEY,
                current_streak           INTEGER NOT NULL DEFAULT 0,
                longest_streak           INTEGER NOT NULL DEFAULT 0,
                total_attempts           INTEGER NOT NULL DEFAULT 0,
                display_name             TEXT,
                is_anonymous             INTEGER NOT NULL DEFAULT 1,
                has_completed_onboarding INTEGER NOT NULL DEFAULT 0,
                last_attempt_date        TEXT,
                created_at               TEXT NOT NULL
            );

            -- Create indexes for common query patterns
            CREATE INDEX IF NOT EXISTS idx_attempts_date ON attempts(date);
            CREATE INDEX IF NOT EXISTS idx_attempts_challenge_id ON attempts(challenge_id);
            CREATE INDEX IF NOT EXISTS idx_challenges_is_active ON challenges(is_active);",
        )?;
        Ok(())
    }

    // === Challenge catalog ===

    /// Insert a new catalog row.
    pub fn insert_challenge(&self, challenge: &Challenge) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO challenges (
                id, title, description, difficulty, estimated_time, emoji,
                illustration, category, is_active, created_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                challenge.id,
                challenge.title,
                challenge.description,
                format_difficulty(challenge.difficulty),
                challenge.estimated_time,
                challenge.emoji,
                challenge.illustration,
                challenge.category,
                challenge.is_active,
                challenge.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Look up one challenge by id.
    pub fn get_challenge(&self, id: &str) -> Result<Option<Challenge>, rusqlite::Error> {
        self.conn
            .query_row(
                &format!("SELECT {CHALLENGE_COLUMNS} FROM challenges WHERE id = ?1"),
                params![id],
                row_to_challenge,
            )
            .optional()
    }

    /// All catalog rows, oldest first.
    pub fn list_challenges(&self) -> Result<Vec<Challenge>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CHALLENGE_COLUMNS} FROM challenges ORDER BY created_at ASC"
        ))?;
        let rows = stmt.query_map([], row_to_challenge)?;
        rows.collect()
    }

    /// Catalog rows eligible for daily selection.
    pub fn list_active_challenges(&self) -> Result<Vec<Challenge>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CHALLENGE_COLUMNS} FROM challenges WHERE is_active = 1 ORDER BY created_at ASC"
        ))?;
        let rows = stmt.query_map([], row_to_challenge)?;
        rows.collect()
    }

    /// Number of catalog rows (the loader's emptiness check).
    pub fn challenge_count(&self) -> Result<i64, rusqlite::Error> {
        self.conn
            .query_row("SELECT COUNT(*) FROM challenges", [], |row| row.get(0))
    }

    /// Retire or reactivate a challenge. Catalog rows are never deleted.
    pub fn set_challenge_active(&self, id: &str, is_active: bool) -> Result<bool, rusqlite::Error> {
        let changed = self.conn.execute(
            "UPDATE challenges SET is_active = ?2 WHERE id = ?1",
            params![id, is_active],
        )?;
        Ok(changed > 0)
    }

    // === Attempts ===

    /// Insert a new attempt record.
    pub fn insert_attempt(&self, attempt: &Attempt) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO attempts (id, challenge_id, date, did_try, feeling, note)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                attempt.id,
                attempt.challenge_id,
                attempt.date.to_rfc3339(),
                attempt.did_try,
                format_feeling(attempt.feeling),
                attempt.note,
            ],
        )?;
        Ok(())
    }

    /// Earliest attempt whose date falls in `[start, end)`, if any.
    ///
    /// This is the day's actionable attempt: once it exists, today's
    /// challenge is pinned to its challenge id.
    pub fn attempt_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Option<Attempt>, rusqlite::Error> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {ATTEMPT_COLUMNS} FROM attempts
                     WHERE date >= ?1 AND date < ?2
                     ORDER BY date ASC LIMIT 1"
                ),
                params![start.to_rfc3339(), end.to_rfc3339()],
                row_to_attempt,
            )
            .optional()
    }

    /// The day's attempt for one specific challenge, if any.
    pub fn attempt_in_range_for(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        challenge_id: &str,
    ) -> Result<Option<Attempt>, rusqlite::Error> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {ATTEMPT_COLUMNS} FROM attempts
                     WHERE date >= ?1 AND date < ?2 AND challenge_id = ?3
                     ORDER BY date ASC LIMIT 1"
                ),
                params![start.to_rfc3339(), end.to_rfc3339(), challenge_id],
                row_to_attempt,
            )
            .optional()
    }

    /// Most recent attempts, newest first.
    pub fn recent_attempts(&self, limit: usize) -> Result<Vec<Attempt>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ATTEMPT_COLUMNS} FROM attempts ORDER BY date DESC LIMIT ?1"
        ))?;
        let rows = stmt.query_map(params![limit as i64], row_to_attempt)?;
        rows.collect()
    }

    /// Number of attempt rows.
    pub fn attempt_count(&self) -> Result<i64, rusqlite::Error> {
        self.conn
            .query_row("SELECT COUNT(*) FROM attempts", [], |row| row.get(0))
    }

    // === User progress ===

    /// The single progress row, if onboarding has completed.
    pub fn get_progress(&self) -> Result<Option<UserProgress>, rusqlite::Error> {
        self.conn
            .query_row(
                &format!("SELECT {PROGRESS_COLUMNS} FROM user_progress LIMIT 1"),
                [],
                row_to_progress,
            )
            .optional()
    }

    /// Insert the progress row created at onboarding completion.
    pub fn insert_progress(&self, progress: &UserProgress) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO user_progress (
                id, current_streak, longest_streak, total_attempts, display_name,
                is_anonymous, has_completed_onboarding, last_attempt_date, created_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                progress.id,
                progress.current_streak,
                progress.longest_streak,
                progress.total_attempts,
                progress.display_name,
                progress.is_anonymous,
                progress.has_completed_onboarding,
                progress.last_attempt_date.map(|dt| dt.to_rfc3339()),
                progress.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    // === Outcome transaction ===

    /// Commit a reflection outcome: upsert the day's attempt and update the
    /// progress row as a single transaction. Either both land or neither
    /// does.
    pub fn commit_outcome(
        &self,
        attempt: &Attempt,
        progress: &UserProgress,
    ) -> Result<(), rusqlite::Error> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT OR REPLACE INTO attempts (id, challenge_id, date, did_try, feeling, note)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                attempt.id,
                attempt.challenge_id,
                attempt.date.to_rfc3339(),
                attempt.did_try,
                format_feeling(attempt.feeling),
                attempt.note,
            ],
        )?;
        tx.execute(
            "UPDATE user_progress SET
                current_streak = ?2,
                longest_streak = ?3,
                total_attempts = ?4,
                last_attempt_date = ?5
             WHERE id = ?1",
            params![
                progress.id,
                progress.current_streak,
                progress.longest_streak,
                progress.total_attempts,
                progress.last_attempt_date.map(|dt| dt.to_rfc3339()),
            ],
        )?;
        tx.commit()
    }
}
