//! Integration tests for a full workout session against a shared store.

use fitos_core::workout::{find_routine, Exercise};
use fitos_core::{
    Event, FixedClock, MemoryStore, Onboarding, Progression, SessionState, StatsLedger,
    WorkoutEngine, WorkoutRoutine,
};

fn exercise(id: &str, duration_sec: u32) -> Exercise {
    Exercise {
        id: id.into(),
        name: id.to_uppercase(),
        duration_sec,
        description: String::new(),
        is_rest: false,
        reps: None,
        image_url: None,
        instructions: None,
    }
}

fn short_routine() -> WorkoutRoutine {
    WorkoutRoutine {
        id: "t1".into(),
        title: "Test Circuit".into(),
        min_level: 1,
        duration_min: 1,
        tags: vec![],
        exercises: vec![exercise("a", 10), exercise("b", 5)],
        xp_reward: 50,
    }
}

#[test]
fn test_completed_session_awards_once() {
    let store = MemoryStore::new();
    let clock = FixedClock::new("2024-05-10");
    Progression::new(&store, &clock)
        .create_profile(Onboarding::new("Asha"))
        .unwrap();

    let mut engine = WorkoutEngine::new(
        Progression::new(&store, &clock),
        StatsLedger::new(&store, &clock),
    );
    engine.start(short_routine()).unwrap();

    let mut events = Vec::new();
    for _ in 0..15 {
        if let Some(event) = engine.tick().unwrap() {
            events.push(event);
        }
    }

    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], Event::ExerciseAdvanced { exercise_index: 1, .. }));
    assert!(matches!(
        events[1],
        Event::SessionCompleted { xp_awarded: 50, level: 1, workouts_completed: 1, .. }
    ));
    assert_eq!(engine.state(), SessionState::Completed);

    // Further ticks and a close do not award again.
    for _ in 0..5 {
        assert!(engine.tick().unwrap().is_none());
    }
    assert!(matches!(engine.close(), Some(Event::SessionClosed { completed: true, .. })));

    let profile = Progression::new(&store, &clock).require_profile().unwrap();
    assert_eq!(profile.xp, 50);
    let today = StatsLedger::new(&store, &clock).load_today().unwrap();
    assert_eq!(today.workouts_completed, 1);
    assert_eq!(today.score, 65);
}

#[test]
fn test_repeat_session_awards_again() {
    let store = MemoryStore::new();
    let clock = FixedClock::new("2024-05-10");
    Progression::new(&store, &clock)
        .create_profile(Onboarding::new("Asha"))
        .unwrap();

    let mut engine = WorkoutEngine::new(
        Progression::new(&store, &clock),
        StatsLedger::new(&store, &clock),
    );
    for _ in 0..2 {
        engine.start(short_routine()).unwrap();
        engine.skip().unwrap();
        engine.skip().unwrap();
        engine.close();
    }

    let profile = Progression::new(&store, &clock).require_profile().unwrap();
    assert_eq!(profile.xp, 100);
    assert_eq!(profile.level, 2);
    let today = StatsLedger::new(&store, &clock).load_today().unwrap();
    assert_eq!(today.workouts_completed, 2);
}

#[test]
fn test_catalog_routine_runs_to_completion() {
    let store = MemoryStore::new();
    let clock = FixedClock::new("2024-05-10");
    Progression::new(&store, &clock)
        .create_profile(Onboarding::new("Asha"))
        .unwrap();

    let routine = find_routine("w1").unwrap();
    let total = routine.total_duration_sec();
    let reward = routine.xp_reward;

    let mut engine = WorkoutEngine::new(
        Progression::new(&store, &clock),
        StatsLedger::new(&store, &clock),
    );
    engine.start(routine).unwrap();
    for _ in 0..total {
        engine.tick().unwrap();
    }

    assert_eq!(engine.state(), SessionState::Completed);
    assert_eq!(engine.session_progress_pct(), 100.0);
    let profile = Progression::new(&store, &clock).require_profile().unwrap();
    assert_eq!(profile.xp, reward);
}
