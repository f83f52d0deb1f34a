//! # Beans Core Library
//!
//! This library provides the core business logic for Beans, a single-user
//! daily social-courage challenge tracker. It implements a CLI-first
//! philosophy where all operations are available via a standalone CLI
//! binary, with any GUI shell being a thin presentation layer over the
//! same core library.
//!
//! ## Architecture
//!
//! - **Entity Store**: SQLite-backed storage for challenges, attempts,
//!   and the single user-progress row
//! - **Daily Selection**: picks and pins "today's" challenge
//! - **Reflection Engine**: records a day's outcome and keeps the streak
//!   counters consistent
//! - **Catalog Loader**: one-time seed of built-in challenges from the
//!   bundled dataset
//!
//! ## Key Components
//!
//! - [`Beans`]: application handle over store and engine
//! - [`Database`]: entity persistence
//! - [`CoreError`]: error hierarchy surfaced to the presentation layer

pub mod app;
pub mod attempt;
pub mod catalog;
pub mod challenge;
pub mod day;
pub mod error;
pub mod progress;
pub mod reflection;
pub mod selection;
pub mod storage;

pub use app::{Beans, DailyChallenge, FeedItem, OutcomeRecord};
pub use attempt::{Attempt, Feeling, MAX_NOTE_LEN};
pub use catalog::{seed_catalog, ChallengeSeed};
pub use challenge::{Challenge, Difficulty};
pub use error::{CoreError, DatabaseError};
pub use progress::UserProgress;
pub use storage::Database;
