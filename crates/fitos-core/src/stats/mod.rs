//! Daily Stats Ledger.
//!
//! One [`DailyStats`] record per calendar day, stored together as a
//! date-keyed map. Today's record is created on first access. The `score`
//! field is derived: [`StatsLedger::update`] recomputes it after every
//! mutation and nothing else writes it.

mod score;

pub use score::{compute_score, BASE_SCORE};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::{Result, ValidationError};
use crate::storage::{keys, load_record, save_record, Store};

/// Number of days returned by [`StatsLedger::weekly`].
pub const WEEK_LEN: usize = 7;

/// Tracked metrics for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: String,
    pub workouts_completed: u32,
    pub water_intake_oz: u32,
    pub steps: u32,
    pub screen_time_hours: f64,
    pub junk_food_cravings: u32,
    pub sleep_hours: f64,
    /// 0..=100, derived from the fields above.
    pub score: u32,
}

impl DailyStats {
    /// Fresh record for `date`: all counters zero, neutral score.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            workouts_completed: 0,
            water_intake_oz: 0,
            steps: 0,
            screen_time_hours: 0.0,
            junk_food_cravings: 0,
            sleep_hours: 0.0,
            score: BASE_SCORE as u32,
        }
    }

    /// Add `delta` to one metric, never dropping below zero.
    pub fn adjust(&mut self, metric: Metric, delta: f64) {
        fn counter(value: u32, delta: f64) -> u32 {
            (f64::from(value) + delta).round().clamp(0.0, f64::from(u32::MAX)) as u32
        }
        match metric {
            Metric::Workouts => self.workouts_completed = counter(self.workouts_completed, delta),
            Metric::Water => self.water_intake_oz = counter(self.water_intake_oz, delta),
            Metric::Steps => self.steps = counter(self.steps, delta),
            Metric::JunkFood => self.junk_food_cravings = counter(self.junk_food_cravings, delta),
            Metric::ScreenTime => self.screen_time_hours = hours(self.screen_time_hours + delta),
            Metric::Sleep => self.sleep_hours = hours(self.sleep_hours + delta),
        }
    }

    /// Pull the float fields back into a finite, non-negative range.
    fn clamp_hours(&mut self) {
        self.screen_time_hours = hours(self.screen_time_hours);
        self.sleep_hours = hours(self.sleep_hours);
    }
}

/// Finite and non-negative. JSON cannot encode NaN or infinity.
fn hours(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, f64::MAX)
    }
}

/// A user-editable field of [`DailyStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Workouts,
    Water,
    Steps,
    ScreenTime,
    JunkFood,
    Sleep,
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "workouts" => Ok(Metric::Workouts),
            "water" => Ok(Metric::Water),
            "steps" => Ok(Metric::Steps),
            "screen_time" | "screen-time" => Ok(Metric::ScreenTime),
            "junk_food" | "junk-food" => Ok(Metric::JunkFood),
            "sleep" => Ok(Metric::Sleep),
            other => Err(format!("unknown metric: {other}")),
        }
    }
}

type StatsMap = BTreeMap<String, DailyStats>;

/// Owns per-day stats records and their score.
pub struct StatsLedger<'a> {
    store: &'a dyn Store,
    clock: &'a dyn Clock,
}

impl<'a> StatsLedger<'a> {
    pub fn new(store: &'a dyn Store, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    fn load_all(&self) -> StatsMap {
        load_record(self.store, keys::STATS).unwrap_or_default()
    }

    /// Today's record, written with defaults the first time a day is seen.
    pub fn load_today(&self) -> Result<DailyStats> {
        let today = self.clock.today();
        let mut all = self.load_all();
        if let Some(stats) = all.get(&today) {
            return Ok(stats.clone());
        }

        let stats = DailyStats::new(today.clone());
        all.insert(today.clone(), stats.clone());
        save_record(self.store, keys::STATS, &all)?;
        tracing::debug!(date = %today, "initialized daily stats");
        Ok(stats)
    }

    /// Read-modify-write today's record and recompute its score.
    pub fn update<F>(&self, transform: F) -> Result<DailyStats>
    where
        F: FnOnce(DailyStats) -> DailyStats,
    {
        let today = self.clock.today();
        let mut all = self.load_all();
        let current = all
            .get(&today)
            .cloned()
            .unwrap_or_else(|| DailyStats::new(today.clone()));

        let mut updated = transform(current);
        updated.date = today.clone();
        updated.clamp_hours();
        updated.score = compute_score(&updated);

        all.insert(today, updated.clone());
        save_record(self.store, keys::STATS, &all)?;
        Ok(updated)
    }

    /// Nudge a single metric on today's record.
    pub fn adjust(&self, metric: Metric, delta: f64) -> Result<DailyStats> {
        if !delta.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: "delta".into(),
                message: format!("must be a finite number, got {delta}"),
            }
            .into());
        }
        self.update(|mut stats| {
            stats.adjust(metric, delta);
            stats
        })
    }

    /// The most recent (up to) seven stored days, oldest first.
    pub fn weekly(&self) -> Vec<DailyStats> {
        let all = self.load_all();
        let skip = all.len().saturating_sub(WEEK_LEN);
        all.into_values().skip(skip).collect()
    }

    /// Every stored day, oldest first.
    pub fn history(&self) -> Vec<DailyStats> {
        self.load_all().into_values().collect()
    }

    /// The latest stored day strictly before today.
    pub fn previous_day(&self) -> Option<DailyStats> {
        let today = self.clock.today();
        self.load_all()
            .range(..today)
            .next_back()
            .map(|(_, stats)| stats.clone())
    }
}
