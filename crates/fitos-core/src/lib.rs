//! # FitOs Core Library
//!
//! Core logic for FitOs, a daily fitness companion. Every operation is
//! available through the `fitos-cli` binary, which is a thin layer over this
//! crate.
//!
//! ## Architecture
//!
//! - **Clock**: all "today" logic goes through an injectable [`Clock`]
//! - **Storage**: a key-value [`Store`] (SQLite or in-memory) holding JSON
//!   records, plus TOML-based configuration
//! - **Ledgers**: daily stats, the daily plan checklist and XP progression
//! - **Workout engine**: a tick-driven session state machine that awards XP
//!   exactly once per completed session
//! - **Insights**: a pluggable [`InsightGenerator`] with a day-stamped cache
//!   and a fixed fallback
//!
//! ## Key Components
//!
//! - [`WorkoutEngine`]: session state machine
//! - [`StatsLedger`]: per-day stats and the derived score
//! - [`Progression`]: profile, XP and level
//! - [`InsightService`]: one-shot insight generation with caching

pub mod clock;
pub mod error;
pub mod events;
pub mod insight;
pub mod meals;
pub mod plan;
pub mod progression;
pub mod stats;
pub mod storage;
pub mod workout;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, DatabaseError, Result, ValidationError};
pub use events::Event;
pub use insight::{
    fallback_insight, DailyInsight, GeminiInsightGenerator, InsightCache, InsightError,
    InsightGenerator, InsightOutcome, InsightService, InsightSource,
};
pub use meals::{meals_by_kind, MealKind, MealOption};
pub use plan::{DailyPlanItem, PlanTracker};
pub use progression::{LevelProgress, Onboarding, Progression, UserProfile};
pub use stats::{DailyStats, Metric, StatsLedger};
pub use storage::{Config, Database, MemoryStore, Store};
pub use workout::{ExerciseVideoCache, SessionState, WorkoutEngine, WorkoutRoutine};
