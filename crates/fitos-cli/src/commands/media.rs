use clap::Subcommand;
use fitos_core::workout::require_exercise;
use fitos_core::{Database, ExerciseVideoCache};

use super::{print_json, CliResult};

#[derive(Subcommand)]
pub enum MediaAction {
    /// Print the stored video reference for an exercise
    Get {
        /// Exercise ID (e.g. "e1")
        exercise_id: String,
    },
    /// Store a generated video reference for an exercise
    Set {
        exercise_id: String,
        url: String,
    },
    /// All stored references
    List,
}

pub fn run(action: MediaAction) -> CliResult {
    let db = Database::open()?;
    let cache = ExerciseVideoCache::new(&db);

    match action {
        MediaAction::Get { exercise_id } => match cache.get(&exercise_id) {
            Some(url) => println!("{url}"),
            None => {
                eprintln!("no video for exercise: {exercise_id}");
                std::process::exit(1);
            }
        },
        MediaAction::Set { exercise_id, url } => {
            let exercise = require_exercise(&exercise_id)?;
            if !exercise.media_eligible() {
                return Err(format!("exercise {exercise_id} does not take demo media").into());
            }
            cache.save(&exercise_id, &url)?;
            println!("ok");
        }
        MediaAction::List => print_json(&cache.all())?,
    }
    Ok(())
}
