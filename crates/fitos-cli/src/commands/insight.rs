use clap::Subcommand;
use fitos_core::{Config, Database, GeminiInsightGenerator, InsightService, SystemClock};

use super::{print_json, CliResult};

#[derive(Subcommand)]
pub enum InsightAction {
    /// Today's insight, generating one if none is cached
    Show,
    /// Generate a fresh insight for today
    Refresh,
}

pub fn run(action: InsightAction) -> CliResult {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let clock = SystemClock;
    let service = InsightService::new(&db, &clock, config.insight.timeout());
    let generator = GeminiInsightGenerator::new(&config.insight);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(async {
        match action {
            InsightAction::Show => service.today_or_refresh(&generator).await,
            InsightAction::Refresh => service.refresh(&generator).await,
        }
    })?;
    if let Some(error) = &outcome.error {
        eprintln!("insight generation failed, showing fallback: {error}");
    }
    print_json(&outcome)
}
