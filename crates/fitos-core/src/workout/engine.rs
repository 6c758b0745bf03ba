//! Workout session engine.
//!
//! A tick-driven state machine over one routine's exercise list. It has no
//! internal thread: the caller invokes `tick()` once per elapsed second
//! while the session is playing.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Active (playing <-> paused) -> Completed -> Idle
//!           \__________ close() __________________/
//! ```
//!
//! Entering `Completed` awards the routine's XP and counts the workout for
//! today, once per `start()`. Session state itself is never persisted.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::media::ExerciseVideoCache;
use super::routine::{Exercise, WorkoutRoutine};
use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::progression::Progression;
use crate::stats::StatsLedger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Active,
    Completed,
}

/// Drives one session at a time and applies its reward on completion.
pub struct WorkoutEngine<'a> {
    progression: Progression<'a>,
    stats: StatsLedger<'a>,
    routine: Option<WorkoutRoutine>,
    state: SessionState,
    exercise_index: usize,
    seconds_remaining: u32,
    playing: bool,
}

impl<'a> WorkoutEngine<'a> {
    pub fn new(progression: Progression<'a>, stats: StatsLedger<'a>) -> Self {
        Self {
            progression,
            stats,
            routine: None,
            state: SessionState::Idle,
            exercise_index: 0,
            seconds_remaining: 0,
            playing: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn routine(&self) -> Option<&WorkoutRoutine> {
        self.routine.as_ref()
    }

    pub fn exercise_index(&self) -> usize {
        self.exercise_index
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.routine.as_ref()?.exercises.get(self.exercise_index)
    }

    /// Cached demo video for the current exercise, if one was generated.
    pub fn current_video(&self, cache: &ExerciseVideoCache<'_>) -> Option<String> {
        let exercise = self.current_exercise()?;
        if exercise.is_rest {
            return None;
        }
        cache.get(&exercise.id)
    }

    /// 0.0 .. 100.0 progress across the whole routine.
    pub fn session_progress_pct(&self) -> f64 {
        let Some(routine) = self.routine.as_ref() else {
            return 0.0;
        };
        if self.state == SessionState::Completed {
            return 100.0;
        }
        let total = routine.total_duration_sec() as f64;
        if total == 0.0 {
            return 0.0;
        }
        let current_total = self.current_exercise().map(|e| e.duration_sec).unwrap_or(0);
        let elapsed = routine.cumulative_sec(self.exercise_index) as f64
            + f64::from(current_total.saturating_sub(self.seconds_remaining));
        (elapsed / total * 100.0).min(100.0)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let exercise = self.current_exercise();
        Event::StateSnapshot {
            state: self.state,
            routine_id: self.routine.as_ref().map(|r| r.id.clone()),
            exercise_index: self.exercise_index,
            exercise_name: exercise.map(|e| e.name.clone()).unwrap_or_default(),
            is_rest: exercise.map(|e| e.is_rest).unwrap_or(false),
            playing: self.playing,
            seconds_remaining: self.seconds_remaining,
            total_secs: exercise.map(|e| e.duration_sec).unwrap_or(0),
            session_progress_pct: self.session_progress_pct(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin `routine` from its first exercise, discarding any current session.
    pub fn start(&mut self, routine: WorkoutRoutine) -> Result<Event> {
        let first = routine.exercises.first().ok_or_else(|| {
            ValidationError::EmptyCollection(format!("routine '{}' has no exercises", routine.id))
        })?;

        let event = Event::SessionStarted {
            routine_id: routine.id.clone(),
            exercise_count: routine.exercises.len(),
            duration_secs: first.duration_sec,
            at: Utc::now(),
        };
        self.seconds_remaining = first.duration_sec;
        self.exercise_index = 0;
        self.state = SessionState::Active;
        self.playing = true;
        tracing::debug!(routine = %routine.id, "workout session started");
        self.routine = Some(routine);
        Ok(event)
    }

    /// One elapsed second. Moves to the next exercise, or completes the
    /// session, when the current one runs out.
    pub fn tick(&mut self) -> Result<Option<Event>> {
        if self.state != SessionState::Active || !self.playing {
            return Ok(None);
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            return self.advance(false).map(Some);
        }
        Ok(None)
    }

    /// Jump to the next exercise now, regardless of time left.
    pub fn skip(&mut self) -> Result<Option<Event>> {
        if self.state != SessionState::Active {
            return Ok(None);
        }
        self.advance(true).map(Some)
    }

    pub fn toggle_pause(&mut self) -> Option<Event> {
        if self.state != SessionState::Active {
            return None;
        }
        self.playing = !self.playing;
        let event = if self.playing {
            Event::SessionResumed {
                seconds_remaining: self.seconds_remaining,
                at: Utc::now(),
            }
        } else {
            Event::SessionPaused {
                seconds_remaining: self.seconds_remaining,
                at: Utc::now(),
            }
        };
        Some(event)
    }

    /// Leave the session. Partial progress is dropped.
    pub fn close(&mut self) -> Option<Event> {
        if self.state == SessionState::Idle {
            return None;
        }
        let completed = self.state == SessionState::Completed;
        self.state = SessionState::Idle;
        self.routine = None;
        self.exercise_index = 0;
        self.seconds_remaining = 0;
        self.playing = false;
        Some(Event::SessionClosed {
            completed,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn advance(&mut self, skipped: bool) -> Result<Event> {
        let next_index = self.exercise_index + 1;
        let next = self
            .routine
            .as_ref()
            .and_then(|r| r.exercises.get(next_index))
            .map(|e| (e.id.clone(), e.is_rest, e.duration_sec));

        match next {
            Some((exercise_id, is_rest, duration_sec)) => {
                self.exercise_index = next_index;
                self.seconds_remaining = duration_sec;
                Ok(Event::ExerciseAdvanced {
                    exercise_index: next_index,
                    exercise_id,
                    is_rest,
                    duration_secs: duration_sec,
                    skipped,
                    at: Utc::now(),
                })
            }
            None => self.complete(),
        }
    }

    /// Only reachable from `Active`, which only `start()` enters, so each
    /// session is rewarded once.
    fn complete(&mut self) -> Result<Event> {
        self.state = SessionState::Completed;
        self.playing = false;
        self.seconds_remaining = 0;

        let (routine_id, xp_reward) = self
            .routine
            .as_ref()
            .map(|r| (r.id.clone(), r.xp_reward))
            .unwrap_or_default();

        let profile = self.progression.add_xp(xp_reward)?;
        let today = self
            .stats
            .update(|mut s| {
                s.workouts_completed = s.workouts_completed.saturating_add(1);
                s
            })
            .inspect_err(|e| {
                tracing::warn!(
                    routine = %routine_id,
                    xp = xp_reward,
                    error = %e,
                    "XP awarded but workout not counted"
                );
            })?;
        tracing::info!(
            routine = %routine_id,
            xp = xp_reward,
            level = profile.level,
            "workout completed"
        );

        Ok(Event::SessionCompleted {
            routine_id,
            xp_awarded: xp_reward,
            level: profile.level,
            workouts_completed: today.workouts_completed,
            at: Utc::now(),
        })
    }
}
