//! One-time seeding of the challenge catalog from the bundled dataset.
//!
//! The loader runs on every startup but only inserts rows when the
//! challenge table is empty, so it is safe to call repeatedly.

use serde::Deserialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::challenge::{Challenge, Difficulty};
use crate::error::Result;
use crate::storage::Database;

/// Bundled challenge dataset, compiled into the binary.
const BUNDLED_CHALLENGES: &str = include_str!("../assets/challenges.json");

/// One record of the bundled dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSeed {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub estimated_time: String,
    pub emoji: String,
    #[serde(default)]
    pub illustration: Option<String>,
    pub category: String,
}

impl ChallengeSeed {
    /// Convert a seed record into a catalog row.
    ///
    /// Unrecognized difficulty strings fall back to easy; source ids that
    /// are not valid UUIDs are replaced with fresh ones.
    fn into_challenge(self) -> Challenge {
        let id = match Uuid::parse_str(&self.id) {
            Ok(uuid) => uuid.to_string(),
            Err(_) => Uuid::new_v4().to_string(),
        };
        let mut challenge = Challenge::new(
            self.title,
            self.description,
            Difficulty::parse(&self.difficulty),
            self.estimated_time,
            self.emoji,
            self.illustration,
            self.category,
        );
        challenge.id = id;
        challenge
    }
}

/// Seed the catalog from the bundled dataset if it is empty.
///
/// Returns the number of challenges inserted (zero when already seeded).
pub fn seed_catalog(db: &Database) -> Result<usize> {
    let seeds: Vec<ChallengeSeed> = serde_json::from_str(BUNDLED_CHALLENGES)?;
    seed_from(db, seeds)
}

/// Seed the catalog from explicit records if it is empty.
pub fn seed_from(db: &Database, seeds: Vec<ChallengeSeed>) -> Result<usize> {
    if db.challenge_count()? > 0 {
        debug!("challenge catalog already seeded");
        return Ok(0);
    }

    let mut inserted = 0;
    for seed in seeds {
        if seed.title.trim().is_empty() {
            warn!(id = %seed.id, "skipping dataset record with empty title");
            continue;
        }
        let challenge = seed.into_challenge();
        db.insert_challenge(&challenge)?;
        inserted += 1;
    }

    info!(count = inserted, "seeded challenge catalog");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(id: &str, title: &str, difficulty: &str) -> ChallengeSeed {
        ChallengeSeed {
            id: id.to_string(),
            title: title.to_string(),
            description: "description".to_string(),
            difficulty: difficulty.to_string(),
            estimated_time: "5 min".to_string(),
            emoji: "👋".to_string(),
            illustration: None,
            category: "Icebreaker".to_string(),
        }
    }

    #[test]
    fn seeds_empty_store() {
        let db = Database::open_memory().unwrap();
        let inserted = seed_from(&db, vec![seed("c1", "Say hi", "easy")]).unwrap();
        assert_eq!(inserted, 1);

        let challenges = db.list_challenges().unwrap();
        assert_eq!(challenges.len(), 1);
        assert_eq!(challenges[0].title, "Say hi");
        assert_eq!(challenges[0].difficulty, Difficulty::Easy);
    }

    #[test]
    fn seeding_is_idempotent() {
        let db = Database::open_memory().unwrap();
        seed_from(&db, vec![seed("c1", "Say hi", "easy")]).unwrap();
        let second = seed_from(&db, vec![seed("c1", "Say hi", "easy")]).unwrap();
        assert_eq!(second, 0);
        assert_eq!(db.challenge_count().unwrap(), 1);
    }

    #[test]
    fn unknown_difficulty_defaults_to_easy() {
        let db = Database::open_memory().unwrap();
        seed_from(&db, vec![seed("c1", "Say hi", "impossible")]).unwrap();
        assert_eq!(db.list_challenges().unwrap()[0].difficulty, Difficulty::Easy);
    }

    #[test]
    fn non_uuid_source_ids_are_replaced() {
        let db = Database::open_memory().unwrap();
        seed_from(&db, vec![seed("c1", "Say hi", "easy")]).unwrap();
        let id = &db.list_challenges().unwrap()[0].id;
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[test]
    fn uuid_source_ids_are_kept() {
        let db = Database::open_memory().unwrap();
        let stable = "a1a2a3a4-b1b2-c1c2-d1d2-e1e2e3e4e5e6";
        seed_from(&db, vec![seed(stable, "Say hi", "easy")]).unwrap();
        assert_eq!(db.list_challenges().unwrap()[0].id, stable);
    }

    #[test]
    fn bundled_dataset_parses_and_seeds() {
        let db = Database::open_memory().unwrap();
        let inserted = seed_catalog(&db).unwrap();
        assert!(inserted > 0);
        assert_eq!(db.challenge_count().unwrap(), inserted as i64);
        // Every bundled challenge starts active.
        assert_eq!(db.list_active_challenges().unwrap().len(), inserted);
    }
}
