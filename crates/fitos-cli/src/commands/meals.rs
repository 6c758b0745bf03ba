use clap::Args;
use fitos_core::{meals_by_kind, MealKind};

use super::{print_json, CliResult};

#[derive(Args)]
pub struct MealsArgs {
    /// healthy, balanced, budget or cheat-swap
    #[arg(long)]
    kind: Option<String>,
}

pub fn run(args: MealsArgs) -> CliResult {
    let kind = args.kind.map(|k| k.parse::<MealKind>()).transpose()?;
    print_json(&meals_by_kind(kind))
}
