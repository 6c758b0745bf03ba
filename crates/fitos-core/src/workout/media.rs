//! Exercise demo video cache.
//!
//! Maps exercise id to a generated media reference. Entries arrive from an
//! external generator whenever one finishes; a missing entry is normal.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::storage::{keys, load_record, save_record, Store};

pub struct ExerciseVideoCache<'a> {
    store: &'a dyn Store,
}

impl<'a> ExerciseVideoCache<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    pub fn all(&self) -> BTreeMap<String, String> {
        load_record(self.store, keys::EXERCISE_VIDEOS).unwrap_or_default()
    }

    pub fn get(&self, exercise_id: &str) -> Option<String> {
        self.all().remove(exercise_id)
    }

    pub fn save(&self, exercise_id: &str, url: &str) -> Result<()> {
        let mut videos = self.all();
        videos.insert(exercise_id.to_string(), url.to_string());
        save_record(self.store, keys::EXERCISE_VIDEOS, &videos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn missing_video_is_none() {
        let store = MemoryStore::new();
        let cache = ExerciseVideoCache::new(&store);
        assert!(cache.get("e1").is_none());
    }

    #[test]
    fn save_replaces_previous_reference() {
        let store = MemoryStore::new();
        let cache = ExerciseVideoCache::new(&store);
        cache.save("e1", "https://a").unwrap();
        cache.save("e2", "https://b").unwrap();
        cache.save("e1", "https://c").unwrap();
        assert_eq!(cache.get("e1").as_deref(), Some("https://c"));
        assert_eq!(cache.all().len(), 2);
    }

    #[test]
    fn corrupt_cache_reads_empty() {
        let store = MemoryStore::new();
        store.set(keys::EXERCISE_VIDEOS, "42").unwrap();
        let cache = ExerciseVideoCache::new(&store);
        assert!(cache.all().is_empty());
        cache.save("e1", "https://a").unwrap();
        assert_eq!(cache.all().len(), 1);
    }
}
