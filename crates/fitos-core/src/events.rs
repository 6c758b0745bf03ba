use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workout::SessionState;

/// Every workout session state change produces an Event.
/// The CLI prints them; nothing is persisted from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        routine_id: String,
        exercise_count: usize,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    SessionPaused {
        seconds_remaining: u32,
        at: DateTime<Utc>,
    },
    SessionResumed {
        seconds_remaining: u32,
        at: DateTime<Utc>,
    },
    ExerciseAdvanced {
        exercise_index: usize,
        exercise_id: String,
        is_rest: bool,
        duration_secs: u32,
        skipped: bool,
        at: DateTime<Utc>,
    },
    /// Routine finished and the reward was applied.
    SessionCompleted {
        routine_id: String,
        xp_awarded: u32,
        level: u32,
        workouts_completed: u32,
        at: DateTime<Utc>,
    },
    SessionClosed {
        completed: bool,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: SessionState,
        routine_id: Option<String>,
        exercise_index: usize,
        exercise_name: String,
        is_rest: bool,
        playing: bool,
        seconds_remaining: u32,
        total_secs: u32,
        session_progress_pct: f64,
        at: DateTime<Utc>,
    },
}
