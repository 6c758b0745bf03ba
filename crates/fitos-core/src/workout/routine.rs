use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub duration_sec: u32,
    pub description: String,
    /// Rest intervals time like any other exercise but get no demo media.
    #[serde(default)]
    pub is_rest: bool,
    #[serde(default)]
    pub reps: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
}

impl Exercise {
    fn active(id: &str, name: &str, duration_sec: u32, description: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration_sec,
            description: description.into(),
            is_rest: false,
            reps: None,
            image_url: None,
            instructions: None,
        }
    }

    fn rest(id: &str, duration_sec: u32, description: &str) -> Self {
        Self {
            is_rest: true,
            ..Self::active(id, "Rest", duration_sec, description)
        }
    }

    fn with_image(mut self, url: &str) -> Self {
        self.image_url = Some(url.into());
        self
    }

    fn with_steps(mut self, steps: &[&str]) -> Self {
        self.instructions = Some(steps.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Whether a demo video may be generated for this exercise.
    pub fn media_eligible(&self) -> bool {
        !self.is_rest && self.image_url.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRoutine {
    pub id: String,
    pub title: String,
    /// Lowest account level that unlocks this routine.
    pub min_level: u32,
    pub duration_min: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    pub exercises: Vec<Exercise>,
    pub xp_reward: u32,
}

impl WorkoutRoutine {
    pub fn total_duration_sec(&self) -> u64 {
        self.exercises.iter().map(|e| u64::from(e.duration_sec)).sum()
    }

    /// Seconds in exercises before `index`.
    pub fn cumulative_sec(&self, index: usize) -> u64 {
        self.exercises
            .iter()
            .take(index)
            .map(|e| u64::from(e.duration_sec))
            .sum()
    }

    pub fn find_exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// The built-in routine catalog.
pub fn catalog() -> Vec<WorkoutRoutine> {
    vec![
        WorkoutRoutine {
            id: "w1".into(),
            title: "Morning Glow Up".into(),
            min_level: 1,
            duration_min: 7,
            tags: tags(&["Morning", "No Equipment"]),
            xp_reward: 50,
            exercises: vec![
                Exercise::active("e1", "Jumping Jacks", 45, "Get the blood flowing!")
                    .with_image("https://images.unsplash.com/photo-1544367563-12123d8965cd?q=80&w=800&auto=format&fit=crop")
                    .with_steps(&[
                        "Stand upright with legs together, arms at your sides.",
                        "Bend your knees slightly, and jump into the air.",
                        "As you jump, spread your legs to be about shoulder-width apart.",
                        "Stretch your arms out and over your head.",
                        "Jump back to starting position.",
                    ]),
                Exercise::rest("r1", 15, "Breathe."),
                Exercise::active("e2", "High Knees", 45, "Knees to chest.")
                    .with_image("https://images.unsplash.com/photo-1518611012118-696072aa579a?q=80&w=800&auto=format&fit=crop")
                    .with_steps(&[
                        "Stand with feet hip-width apart.",
                        "Lift up your left knee to your chest.",
                        "Switch to lift your right knee to your chest.",
                        "Continue the movement, alternating legs and moving at a sprinting or running pace.",
                    ]),
                Exercise::rest("r2", 15, "Chill."),
                Exercise::active("e3", "Bodyweight Squats", 45, "Keep back straight.")
                    .with_image("https://images.unsplash.com/photo-1574680096141-1cddd32e04ca?q=80&w=800&auto=format&fit=crop")
                    .with_steps(&[
                        "Stand with feet shoulder-width apart.",
                        "Lower your hips back and down as if sitting in a chair.",
                        "Keep your chest up and back straight.",
                        "Push through heels to return to start.",
                    ]),
                Exercise::rest("r3", 15, "Shake it out."),
                Exercise::active("e4", "Plank", 30, "Hold it!")
                    .with_image("https://images.unsplash.com/photo-1566241440091-ec10de8db2e1?q=80&w=800&auto=format&fit=crop")
                    .with_steps(&[
                        "Start on the floor on your hands and knees.",
                        "Lower your forearms to the floor with elbows aligned below the shoulders.",
                        "Step your feet back one at a time.",
                        "Keep your body in a straight line from head to heels.",
                    ]),
            ],
        },
        WorkoutRoutine {
            id: "w2".into(),
            title: "Core Crusher".into(),
            min_level: 3,
            duration_min: 12,
            tags: tags(&["Core", "Abs"]),
            xp_reward: 80,
            exercises: vec![
                Exercise::active("c1", "Crunches", 45, "Squeeze the abs.")
                    .with_image("https://images.unsplash.com/photo-1601422407692-ec4eeec1d9b3?q=80&w=800&auto=format&fit=crop")
                    .with_steps(&[
                        "Lie on your back with knees bent.",
                        "Place hands behind head or crossed on chest.",
                        "Lift your shoulders off the floor using your abs.",
                        "Lower back down slowly.",
                    ]),
                Exercise::active("c2", "Leg Raises", 45, "Control the descent.")
                    .with_image("https://images.unsplash.com/photo-1599058945522-28d584b6f0ff?q=80&w=800&auto=format&fit=crop")
                    .with_steps(&[
                        "Lie on your back, legs straight.",
                        "Lift your legs upward until they are at a 90-degree angle.",
                        "Slowly lower them back down without touching the floor.",
                        "Keep your lower back pressed to the ground.",
                    ]),
                Exercise::active("c3", "Russian Twists", 45, "Twist side to side.")
                    .with_image("https://images.unsplash.com/photo-1517836357463-d25dfeac3438?q=80&w=800&auto=format&fit=crop")
                    .with_steps(&[
                        "Sit on the floor with knees bent and feet lifted.",
                        "Lean back slightly until you feel your core engage.",
                        "Twist your torso to the right, then to the left.",
                        "Keep your movement controlled.",
                    ]),
                Exercise::active("c4", "Mountain Climbers", 45, "Run on the floor.")
                    .with_image("https://images.unsplash.com/photo-1434608519344-49d77a699e6d?q=80&w=800&auto=format&fit=crop")
                    .with_steps(&[
                        "Start in a plank position.",
                        "Drive your right knee towards your chest.",
                        "Quickly switch and drive your left knee in.",
                        "Keep your hips down and run your knees in and out.",
                    ]),
            ],
        },
        WorkoutRoutine {
            id: "w3".into(),
            title: "Full Body Ignite".into(),
            min_level: 5,
            duration_min: 20,
            tags: tags(&["HIIT", "Sweat"]),
            xp_reward: 150,
            exercises: vec![
                Exercise::active("f1", "Burpees", 45, "Sorry in advance.")
                    .with_image("https://images.unsplash.com/photo-1541534741688-6078c6bfb5c5?q=80&w=800&auto=format&fit=crop")
                    .with_steps(&[
                        "Start standing.",
                        "Drop into a squat with hands on the ground.",
                        "Kick feet back into a plank.",
                        "Jump feet back to hands.",
                        "Explode up into a jump.",
                    ]),
                Exercise::active("f2", "Pushups", 45, "Chest to floor.")
                    .with_image("https://images.unsplash.com/photo-1571019614242-c5c5dee9f50b?q=80&w=800&auto=format&fit=crop")
                    .with_steps(&[
                        "Start in a plank position.",
                        "Lower your body until your chest nearly touches the floor.",
                        "Keep elbows tucked at a 45-degree angle.",
                        "Push back up to starting position.",
                    ]),
                Exercise::active("f3", "Lunges", 45, "Alternate legs.")
                    .with_image("https://images.unsplash.com/photo-1574680178050-55c6a6a96e0a?q=80&w=800&auto=format&fit=crop")
                    .with_steps(&[
                        "Stand tall.",
                        "Step forward with one leg.",
                        "Lower hips until both knees are bent at 90 degrees.",
                        "Push off the front foot to return to start.",
                        "Switch legs.",
                    ]),
                Exercise::active("f4", "Glute Bridges", 45, "Squeeze at top.")
                    .with_image("https://images.unsplash.com/photo-1599058945522-28d584b6f0ff?q=80&w=800&auto=format&fit=crop")
                    .with_steps(&[
                        "Lie on back with knees bent and feet flat.",
                        "Lift hips off the floor until knees, hips, and shoulders form a line.",
                        "Squeeze glutes hard at the top.",
                        "Lower back down slowly.",
                    ]),
            ],
        },
    ]
}

pub fn find_routine(id: &str) -> Option<WorkoutRoutine> {
    catalog().into_iter().find(|r| r.id == id)
}

/// Routines a user at `level` can start.
pub fn unlocked_routines(level: u32) -> Vec<WorkoutRoutine> {
    catalog()
        .into_iter()
        .filter(|r| r.min_level <= level)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_three_routines() {
        let all = catalog();
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|r| !r.exercises.is_empty()));
    }

    #[test]
    fn level_gates_routines() {
        let ids = |level| -> Vec<String> {
            unlocked_routines(level).into_iter().map(|r| r.id).collect()
        };
        assert_eq!(ids(1), vec!["w1"]);
        assert_eq!(ids(3), vec!["w1", "w2"]);
        assert_eq!(ids(9), vec!["w1", "w2", "w3"]);
    }

    #[test]
    fn morning_routine_duration() {
        let routine = find_routine("w1").unwrap();
        assert_eq!(routine.total_duration_sec(), 45 * 3 + 30 + 15 * 3);
        assert_eq!(routine.cumulative_sec(2), 60);
    }

    #[test]
    fn rest_is_not_media_eligible() {
        let routine = find_routine("w1").unwrap();
        assert!(routine.find_exercise("e1").unwrap().media_eligible());
        assert!(!routine.find_exercise("r1").unwrap().media_eligible());
    }
}
