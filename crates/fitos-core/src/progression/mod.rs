//! Progression Ledger.
//!
//! Owns the user profile and the XP/level pair on it. Level is derived from
//! XP through [`LEVEL_THRESHOLDS`], advancing at most one step per award.

mod profile;

pub use profile::{FitnessLevel, Lifestyle, LocationType, Onboarding, UserProfile};

use serde::Serialize;

use crate::clock::Clock;
use crate::error::{CoreError, Result, ValidationError};
use crate::storage::{keys, load_record, save_record, Store};

/// XP needed to leave level `n` is `LEVEL_THRESHOLDS[n]`.
pub const LEVEL_THRESHOLDS: [u32; 10] = [0, 100, 250, 450, 700, 1000, 1400, 1900, 2500, 3200];

/// Threshold used once a level runs past the table.
pub const LEVEL_CAP_THRESHOLD: u32 = 99_999;

/// XP required to advance past `level`.
pub fn threshold_for(level: u32) -> u32 {
    usize::try_from(level)
        .ok()
        .and_then(|idx| LEVEL_THRESHOLDS.get(idx))
        .copied()
        .unwrap_or(LEVEL_CAP_THRESHOLD)
}

/// Where a profile sits between its current and next level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    pub level: u32,
    pub xp: u32,
    /// XP at which the current level was reached.
    pub current_threshold: u32,
    /// XP needed for the next level, `None` past the end of the table.
    pub next_threshold: Option<u32>,
}

impl LevelProgress {
    pub fn of(profile: &UserProfile) -> Self {
        let table_top = LEVEL_THRESHOLDS[LEVEL_THRESHOLDS.len() - 1];
        let current_threshold = profile
            .level
            .checked_sub(1)
            .map(|prev| threshold_for(prev).min(table_top))
            .unwrap_or(0);
        let next = threshold_for(profile.level);
        Self {
            level: profile.level,
            xp: profile.xp,
            current_threshold,
            next_threshold: (next != LEVEL_CAP_THRESHOLD).then_some(next),
        }
    }
}

/// Owns profile creation and XP awards.
pub struct Progression<'a> {
    store: &'a dyn Store,
    clock: &'a dyn Clock,
}

impl<'a> Progression<'a> {
    pub fn new(store: &'a dyn Store, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    pub fn load_profile(&self) -> Option<UserProfile> {
        load_record(self.store, keys::USER)
    }

    pub fn require_profile(&self) -> Result<UserProfile> {
        self.load_profile().ok_or(CoreError::NotOnboarded)
    }

    /// Create the profile from onboarding answers, replacing any existing one.
    pub fn create_profile(&self, onboarding: Onboarding) -> Result<UserProfile> {
        let name = onboarding.name.trim();
        if name.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "name".into(),
                message: "name must not be empty".into(),
            }
            .into());
        }
        if onboarding.age == 0 {
            return Err(ValidationError::InvalidValue {
                field: "age".into(),
                message: "age must be positive".into(),
            }
            .into());
        }

        let profile = UserProfile {
            name: name.to_string(),
            age: onboarding.age,
            gender: onboarding.gender,
            fitness_level: onboarding.fitness_level,
            location_type: onboarding.location_type,
            goals: onboarding.goals,
            lifestyle: onboarding.lifestyle,
            xp: 0,
            level: 1,
            joined_date: self.clock.today(),
        };
        save_record(self.store, keys::USER, &profile)?;
        tracing::info!(name = %profile.name, "profile created");
        Ok(profile)
    }

    /// Add XP and advance at most one level.
    ///
    /// An award that crosses several thresholds still only moves the level
    /// by one; the next award continues the climb.
    pub fn add_xp(&self, amount: u32) -> Result<UserProfile> {
        let mut profile = self.require_profile()?;
        profile.xp = profile.xp.saturating_add(amount);

        if profile.xp >= threshold_for(profile.level) {
            profile.level += 1;
            tracing::info!(level = profile.level, xp = profile.xp, "level up");
        }

        save_record(self.store, keys::USER, &profile)?;
        Ok(profile)
    }
}
