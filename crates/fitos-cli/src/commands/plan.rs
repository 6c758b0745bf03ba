use clap::Subcommand;
use fitos_core::{Database, PlanTracker, SystemClock};

use super::{print_json, CliResult};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Today's checklist
    Show,
    /// Mark an item done (or undone)
    Toggle {
        /// Plan item ID (e.g. "dp1")
        id: String,
    },
}

pub fn run(action: PlanAction) -> CliResult {
    let db = Database::open()?;
    let clock = SystemClock;
    let tracker = PlanTracker::new(&db, &clock);

    match action {
        PlanAction::Show => print_json(&tracker.load_today()?),
        PlanAction::Toggle { id } => print_json(&tracker.toggle_item(&id)?),
    }
}
