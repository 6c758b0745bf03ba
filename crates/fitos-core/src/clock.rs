//! Calendar-day source.
//!
//! Every daily-scoped record is keyed by a "YYYY-MM-DD" string. Components
//! that care about day boundaries take a [`Clock`] instead of reading the
//! wall clock themselves, so rollover can be driven from tests.

use std::sync::Mutex;

use chrono::Utc;

/// Format used for calendar-day keys.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

pub trait Clock: Send + Sync {
    /// Current calendar day as "YYYY-MM-DD".
    fn today(&self) -> String;
}

/// Wall clock, UTC calendar days.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> String {
        Utc::now().format(DAY_FORMAT).to_string()
    }
}

/// A clock pinned to a settable day.
#[derive(Debug)]
pub struct FixedClock {
    day: Mutex<String>,
}

impl FixedClock {
    pub fn new(day: impl Into<String>) -> Self {
        Self {
            day: Mutex::new(day.into()),
        }
    }

    /// Move the clock to another day.
    pub fn set(&self, day: impl Into<String>) {
        let mut guard = self.day.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = day.into();
    }
}

impl Clock for FixedClock {
    fn today(&self) -> String {
        self.day
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
