use clap::{Args, Subcommand, ValueEnum};
use fitos_core::progression::{FitnessLevel, Lifestyle, LocationType};
use fitos_core::{Database, LevelProgress, Onboarding, Progression, SystemClock};

use super::{print_json, CliResult};

#[derive(Clone, Copy, ValueEnum)]
pub enum LevelArg {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LocationArg {
    Village,
    City,
}

#[derive(Args)]
pub struct OnboardArgs {
    /// Display name
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "25")]
    age: u32,
    #[arg(long, default_value = "")]
    gender: String,
    #[arg(long, value_enum, default_value = "beginner")]
    fitness_level: LevelArg,
    #[arg(long, value_enum, default_value = "city")]
    location: LocationArg,
    /// Goal (repeatable)
    #[arg(long = "goal")]
    goals: Vec<String>,
    #[arg(long)]
    sleep_type: Option<String>,
    #[arg(long)]
    screen_time: Option<String>,
    #[arg(long)]
    water_intake: Option<String>,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print the stored profile
    Show,
    /// Level, XP and the thresholds around them
    Progress,
}

pub fn onboard(args: OnboardArgs) -> CliResult {
    let db = Database::open()?;
    let clock = SystemClock;

    let defaults = Lifestyle::default();
    let onboarding = Onboarding {
        name: args.name,
        age: args.age,
        gender: args.gender,
        fitness_level: match args.fitness_level {
            LevelArg::Beginner => FitnessLevel::Beginner,
            LevelArg::Intermediate => FitnessLevel::Intermediate,
            LevelArg::Advanced => FitnessLevel::Advanced,
        },
        location_type: match args.location {
            LocationArg::Village => LocationType::Village,
            LocationArg::City => LocationType::City,
        },
        goals: args.goals,
        lifestyle: Lifestyle {
            sleep_type: args.sleep_type.unwrap_or(defaults.sleep_type),
            screen_time: args.screen_time.unwrap_or(defaults.screen_time),
            water_intake: args.water_intake.unwrap_or(defaults.water_intake),
        },
    };

    let profile = Progression::new(&db, &clock).create_profile(onboarding)?;
    print_json(&profile)
}

pub fn run(action: ProfileAction) -> CliResult {
    let db = Database::open()?;
    let clock = SystemClock;
    let profile = Progression::new(&db, &clock).require_profile()?;

    match action {
        ProfileAction::Show => print_json(&profile),
        ProfileAction::Progress => print_json(&LevelProgress::of(&profile)),
    }
}
