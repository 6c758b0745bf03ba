//! Static meal suggestions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealKind {
    Healthy,
    Balanced,
    Budget,
    CheatSwap,
}

impl std::str::FromStr for MealKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace([' ', '_'], "-").as_str() {
            "healthy" => Ok(MealKind::Healthy),
            "balanced" => Ok(MealKind::Balanced),
            "budget" => Ok(MealKind::Budget),
            "cheat-swap" => Ok(MealKind::CheatSwap),
            other => Err(format!("unknown meal kind: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealOption {
    pub id: String,
    pub name: String,
    pub calories: u32,
    pub tags: Vec<String>,
    pub kind: MealKind,
    pub description: String,
}

fn meal(id: &str, name: &str, kind: MealKind, calories: u32, tags: &[&str], description: &str) -> MealOption {
    MealOption {
        id: id.into(),
        name: name.into(),
        calories,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        kind,
        description: description.into(),
    }
}

pub fn meal_catalog() -> Vec<MealOption> {
    vec![
        meal(
            "m1",
            "Overnight Oats",
            MealKind::Healthy,
            350,
            &["Budget", "Quick", "High Fiber"],
            "Oats soaked in milk/yogurt overnight. Add banana & honey.",
        ),
        meal(
            "m2",
            "Masala Omelette & Toast",
            MealKind::Balanced,
            400,
            &["High Protein", "Savory"],
            "2 eggs, onions, chilies, turmeric. Whole wheat toast.",
        ),
        meal(
            "m3",
            "Paneer/Chicken Wrap",
            MealKind::Healthy,
            500,
            &["High Protein", "Lunch"],
            "Grilled protein in a roti with veggies and mint chutney.",
        ),
        meal(
            "m4",
            "Air Fried Fries",
            MealKind::CheatSwap,
            200,
            &["Craving Killer", "Low Oil"],
            "Potato wedges with peri-peri, air fried instead of deep fried.",
        ),
    ]
}

/// All meals, or only those of `kind`.
pub fn meals_by_kind(kind: Option<MealKind>) -> Vec<MealOption> {
    meal_catalog()
        .into_iter()
        .filter(|m| kind.map_or(true, |k| m.kind == k))
        .collect()
}
