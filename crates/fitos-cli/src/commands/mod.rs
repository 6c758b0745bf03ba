pub mod auth;
pub mod config;
pub mod insight;
pub mod meals;
pub mod media;
pub mod plan;
pub mod profile;
pub mod stats;
pub mod workout;

use serde::Serialize;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
