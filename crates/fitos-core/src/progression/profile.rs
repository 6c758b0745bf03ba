use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    Village,
    City,
}

impl std::fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

impl std::fmt::Display for LocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LocationType::Village => "Village",
            LocationType::City => "City",
        })
    }
}

/// Self-reported habits captured at onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lifestyle {
    pub sleep_type: String,
    pub screen_time: String,
    pub water_intake: String,
}

impl Default for Lifestyle {
    fn default() -> Self {
        Self {
            sleep_type: "No fixed routine".into(),
            screen_time: "3-6h".into(),
            water_intake: "Medium".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub fitness_level: FitnessLevel,
    pub location_type: LocationType,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub lifestyle: Lifestyle,
    pub xp: u32,
    pub level: u32,
    pub joined_date: String,
}

/// Answers collected by the onboarding flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Onboarding {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub fitness_level: FitnessLevel,
    pub location_type: LocationType,
    pub goals: Vec<String>,
    pub lifestyle: Lifestyle,
}

impl Onboarding {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: 25,
            gender: String::new(),
            fitness_level: FitnessLevel::Beginner,
            location_type: LocationType::City,
            goals: Vec::new(),
            lifestyle: Lifestyle::default(),
        }
    }
}
