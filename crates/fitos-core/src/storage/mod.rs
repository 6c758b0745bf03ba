mod config;
pub mod database;
pub mod memory;

pub use config::{Config, InsightConfig, TrackingConfig};
pub use database::Database;
pub use memory::MemoryStore;

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ConfigError, Result};

/// Logical record keys. One durable value each.
pub mod keys {
    pub const USER: &str = "fitos_user";
    pub const STATS: &str = "fitos_stats";
    pub const PLAN: &str = "fitos_plan";
    pub const LAST_OPEN: &str = "fitos_last_open";
    pub const DAILY_INSIGHT: &str = "fitos_daily_insight";
    pub const EXERCISE_VIDEOS: &str = "fitos_exercise_videos";
}

/// Durable key/value storage. Absent keys are `Ok(None)`, not errors.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Read and decode a record.
///
/// A missing key, a failed read, or a value that no longer parses all come
/// back as `None`; the caller substitutes its default.
pub fn load_record<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "store read failed; treating record as absent");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "corrupt record; treating as absent");
            None
        }
    }
}

/// Encode and write a record.
pub fn save_record<T: Serialize + ?Sized>(store: &dyn Store, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

/// Returns the data directory, creating it if needed.
///
/// `FITOS_DATA_DIR` wins when set. Otherwise `~/.config/fitos`, or
/// `~/.config/fitos-dev` when `FITOS_ENV=dev`.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("FITOS_DATA_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("FITOS_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("fitos-dev")
            } else {
                base_dir.join("fitos")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_record_treats_garbage_as_absent() {
        let store = MemoryStore::new();
        store.set("k", "{not json").unwrap();
        let value: Option<Vec<u32>> = load_record(&store, "k");
        assert!(value.is_none());
    }

    #[test]
    fn save_then_load_record() {
        let store = MemoryStore::new();
        save_record(&store, "k", &vec![1u32, 2, 3]).unwrap();
        let value: Option<Vec<u32>> = load_record(&store, "k");
        assert_eq!(value, Some(vec![1, 2, 3]));
    }
}
