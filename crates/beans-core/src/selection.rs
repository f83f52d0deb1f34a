//! Daily challenge selection policy.
//!
//! Once an attempt exists for the day, the challenge is pinned to that
//! attempt's challenge id; until then picks are uniform random over the
//! active catalog and deliberately not persisted (a re-open before acting
//! may show a different pick).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::challenge::Challenge;

/// Uniform random pick among the given challenges.
pub fn pick_random<'a, R: Rng>(challenges: &'a [Challenge], rng: &mut R) -> Option<&'a Challenge> {
    challenges.choose(rng)
}

/// Random pick excluding one challenge id (the "skip" re-roll).
///
/// Returns `None` when no other challenge is available; the caller keeps
/// showing the current one.
pub fn pick_excluding<'a, R: Rng>(
    challenges: &'a [Challenge],
    exclude_id: &str,
    rng: &mut R,
) -> Option<&'a Challenge> {
    let available: Vec<&Challenge> = challenges
        .iter()
        .filter(|c| c.id != exclude_id)
        .collect();
    available.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::Difficulty;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn catalog(n: usize) -> Vec<Challenge> {
        (0..n)
            .map(|i| {
                Challenge::new(
                    format!("Challenge {i}"),
                    "description",
                    Difficulty::Easy,
                    "5 min",
                    "👋",
                    None,
                    "Icebreaker",
                )
            })
            .collect()
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        assert!(pick_random(&[], &mut rng).is_none());
        assert!(pick_excluding(&[], "x", &mut rng).is_none());
    }

    #[test]
    fn single_challenge_is_always_picked() {
        let challenges = catalog(1);
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(pick_random(&challenges, &mut rng).unwrap().id, challenges[0].id);
        }
    }

    #[test]
    fn excluding_never_returns_the_excluded_id() {
        let challenges = catalog(5);
        let exclude = challenges[2].id.clone();
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        for _ in 0..100 {
            let picked = pick_excluding(&challenges, &exclude, &mut rng).unwrap();
            assert_ne!(picked.id, exclude);
        }
    }

    #[test]
    fn excluding_the_only_challenge_yields_nothing() {
        let challenges = catalog(1);
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        assert!(pick_excluding(&challenges, &challenges[0].id, &mut rng).is_none());
    }

    #[test]
    fn picks_cover_the_catalog_over_time() {
        let challenges = catalog(4);
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pick_random(&challenges, &mut rng).unwrap().id.clone());
        }
        assert_eq!(seen.len(), 4);
    }
}
