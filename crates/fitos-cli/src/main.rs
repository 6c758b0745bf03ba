use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "fitos-cli", version, about = "FitOs CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create (or replace) the user profile
    Onboard(commands::profile::OnboardArgs),
    /// Profile and level progress
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Daily stats
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Today's plan checklist
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Workout routines and sessions
    Workout {
        #[command(subcommand)]
        action: commands::workout::WorkoutAction,
    },
    /// Meal suggestions
    Meals(commands::meals::MealsArgs),
    /// Exercise demo video references
    Media {
        #[command(subcommand)]
        action: commands::media::MediaAction,
    },
    /// Daily coaching insight
    Insight {
        #[command(subcommand)]
        action: commands::insight::InsightAction,
    },
    /// API key management for the insight generator
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FITOS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Onboard(args) => commands::profile::onboard(args),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Workout { action } => commands::workout::run(action),
        Commands::Meals(args) => commands::meals::run(args),
        Commands::Media { action } => commands::media::run(action),
        Commands::Insight { action } => commands::insight::run(action),
        Commands::Auth { action } => commands::auth::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "fitos-cli", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
