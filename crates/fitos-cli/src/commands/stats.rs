use clap::Subcommand;
use fitos_core::{Config, Database, Metric, StatsLedger, SystemClock};

use super::{print_json, CliResult};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's stats
    Today,
    /// The last seven recorded days
    Week,
    /// Adjust a metric on today's record
    Add {
        /// workouts, water, steps, screen-time, junk-food or sleep
        metric: String,
        /// Amount to add (negative to subtract)
        #[arg(allow_negative_numbers = true)]
        delta: f64,
    },
    /// Log one glass of water
    Water,
}

pub fn run(action: StatsAction) -> CliResult {
    let db = Database::open()?;
    let clock = SystemClock;
    let ledger = StatsLedger::new(&db, &clock);

    match action {
        StatsAction::Today => print_json(&ledger.load_today()?),
        StatsAction::Week => print_json(&ledger.weekly()),
        StatsAction::Add { metric, delta } => {
            let metric: Metric = metric.parse()?;
            print_json(&ledger.adjust(metric, delta)?)
        }
        StatsAction::Water => {
            let step = Config::load_or_default().tracking.water_step_oz;
            print_json(&ledger.adjust(Metric::Water, f64::from(step))?)
        }
    }
}
