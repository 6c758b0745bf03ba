use std::time::Duration;

use clap::Subcommand;
use fitos_core::workout::{catalog, require_routine};
use fitos_core::{
    Database, Event, Progression, SessionState, StatsLedger, SystemClock, WorkoutEngine,
    WorkoutRoutine,
};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;

use super::{print_json, CliResult};

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// List routines and whether they are unlocked
    List,
    /// Print one routine with its exercises
    Show {
        /// Routine ID (e.g. "w1")
        id: String,
    },
    /// Run a routine in the foreground.
    ///
    /// Prints one JSON event per line. Type `p` to pause or resume, `s` to
    /// skip the current exercise, `q` to quit.
    Start {
        /// Routine ID (e.g. "w1")
        id: String,
    },
}

#[derive(Serialize)]
struct RoutineSummary<'r> {
    id: &'r str,
    title: &'r str,
    min_level: u32,
    duration_min: u32,
    xp_reward: u32,
    exercise_count: usize,
    unlocked: bool,
}

pub fn run(action: WorkoutAction) -> CliResult {
    let db = Database::open()?;
    let clock = SystemClock;
    let progression = Progression::new(&db, &clock);
    let level = progression.load_profile().map(|p| p.level).unwrap_or(1);

    match action {
        WorkoutAction::List => {
            let routines = catalog();
            let summaries: Vec<_> = routines
                .iter()
                .map(|r| RoutineSummary {
                    id: &r.id,
                    title: &r.title,
                    min_level: r.min_level,
                    duration_min: r.duration_min,
                    xp_reward: r.xp_reward,
                    exercise_count: r.exercises.len(),
                    unlocked: r.min_level <= level,
                })
                .collect();
            print_json(&summaries)
        }
        WorkoutAction::Show { id } => {
            print_json(&require_routine(&id)?)
        }
        WorkoutAction::Start { id } => {
            progression.require_profile()?;
            let routine = require_routine(&id)?;
            if routine.min_level > level {
                return Err(format!("routine {id} unlocks at level {}", routine.min_level).into());
            }

            let mut engine = WorkoutEngine::new(progression, StatsLedger::new(&db, &clock));
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let result = runtime.block_on(run_session(&mut engine, routine));
            // A pending stdin read cannot be cancelled.
            runtime.shutdown_background();
            result
        }
    }
}

fn emit(event: &Event) -> CliResult {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}

async fn run_session(engine: &mut WorkoutEngine<'_>, routine: WorkoutRoutine) -> CliResult {
    emit(&engine.start(routine)?)?;

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick fires immediately.
    ticker.tick().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    while engine.state() == SessionState::Active {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(event) = engine.tick()? {
                    emit(&event)?;
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(input) => match input.trim() {
                        "p" => {
                            if let Some(event) = engine.toggle_pause() {
                                emit(&event)?;
                            }
                        }
                        "s" => {
                            if let Some(event) = engine.skip()? {
                                emit(&event)?;
                            }
                        }
                        "q" => break,
                        "" => {}
                        other => tracing::warn!(input = other, "unknown command; use p, s or q"),
                    },
                    None => stdin_open = false,
                }
            }
            _ = &mut ctrl_c => break,
        }
    }

    if let Some(event) = engine.close() {
        emit(&event)?;
    }
    Ok(())
}
