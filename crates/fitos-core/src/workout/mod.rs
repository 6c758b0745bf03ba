mod engine;
mod media;
mod routine;

pub use engine::{SessionState, WorkoutEngine};
pub use media::ExerciseVideoCache;
pub use routine::{catalog, find_routine, unlocked_routines, Exercise, WorkoutRoutine};

use crate::error::{Result, ValidationError};

/// Look up an exercise anywhere in the catalog.
pub fn find_exercise(id: &str) -> Option<Exercise> {
    catalog()
        .into_iter()
        .flat_map(|r| r.exercises)
        .find(|e| e.id == id)
}

/// Like [`find_routine`], but an unknown id is an error.
pub fn require_routine(id: &str) -> Result<WorkoutRoutine> {
    find_routine(id).ok_or_else(|| unknown("routine", id))
}

/// Like [`find_exercise`], but an unknown id is an error.
pub fn require_exercise(id: &str) -> Result<Exercise> {
    find_exercise(id).ok_or_else(|| unknown("exercise", id))
}

fn unknown(kind: &str, id: &str) -> crate::error::CoreError {
    ValidationError::UnknownId {
        kind: kind.into(),
        id: id.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn require_routine_reports_unknown_id() {
        assert_eq!(require_routine("w2").unwrap().id, "w2");
        let err = require_routine("w99").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::UnknownId { ref kind, ref id })
                if kind == "routine" && id == "w99"
        ));
        assert!(err.to_string().contains("Unknown routine id: w99"));
    }

    #[test]
    fn require_exercise_searches_every_routine() {
        assert!(!require_exercise("e1").unwrap().is_rest);
        assert!(matches!(
            require_exercise("nope"),
            Err(CoreError::Validation(ValidationError::UnknownId { .. }))
        ));
    }
}
