//! Integration tests for day rollover across the ledgers.

use fitos_core::{
    fallback_insight, FixedClock, InsightCache, MemoryStore, Metric, PlanTracker, StatsLedger,
};

#[test]
fn test_plan_resets_on_new_day() {
    let store = MemoryStore::new();
    let clock = FixedClock::new("2024-01-01");
    let tracker = PlanTracker::new(&store, &clock);

    let plan = tracker.toggle_item("dp1").unwrap();
    assert!(plan.iter().find(|i| i.id == "dp1").unwrap().completed);

    // Same day: the toggle sticks.
    let plan = tracker.load_today().unwrap();
    assert!(plan.iter().find(|i| i.id == "dp1").unwrap().completed);

    clock.set("2024-01-02");
    let plan = tracker.load_today().unwrap();
    assert_eq!(plan.len(), 5);
    assert!(plan.iter().all(|i| !i.completed));
}

#[test]
fn test_stats_roll_over_and_keep_history() {
    let store = MemoryStore::new();
    let clock = FixedClock::new("2024-01-01");
    let ledger = StatsLedger::new(&store, &clock);

    ledger.adjust(Metric::Workouts, 2.0).unwrap();
    ledger.adjust(Metric::Water, 64.0).unwrap();
    ledger.adjust(Metric::Sleep, 7.5).unwrap();
    let day_one = ledger.adjust(Metric::JunkFood, 1.0).unwrap();
    assert_eq!(day_one.score, 95);

    clock.set("2024-01-02");
    let today = ledger.load_today().unwrap();
    assert_eq!(today.date, "2024-01-02");
    assert_eq!(today.score, 50);

    let yesterday = ledger.previous_day().unwrap();
    assert_eq!(yesterday, day_one);
    assert_eq!(ledger.weekly().len(), 2);
}

#[test]
fn test_insight_expires_at_midnight() {
    let store = MemoryStore::new();
    let clock = FixedClock::new("2024-01-01");
    let cache = InsightCache::new(&store, &clock);

    cache.save(&fallback_insight("2024-01-01")).unwrap();
    assert_eq!(cache.load().unwrap().date, "2024-01-01");

    clock.set("2024-01-02");
    assert!(cache.load().is_none());
}
