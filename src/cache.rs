use crate::data::models::MatchesDocument;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Local copy of the last matches document fetched from a remote base,
/// so repeated commands against the same deployment do not refetch.
#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotCache {
    pub base: String,
    pub fetched_at: DateTime<Utc>,
    pub document: MatchesDocument,
}

impl SnapshotCache {
    pub fn new(base: &str, document: MatchesDocument) -> Self {
        SnapshotCache {
            base: base.to_string(),
            fetched_at: Utc::now(),
            document,
        }
    }

    pub fn get_cache_path(base: &str) -> PathBuf {
        let cache_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dota_dash");

        let _ = fs::create_dir_all(&cache_dir);

        let key: String = base
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();

        cache_dir.join(format!("{}.matches.json", key))
    }

    pub fn load(base: &str) -> Result<Self, AppError> {
        let path = Self::get_cache_path(base);

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::IoError(format!("{}: {}", path.display(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| AppError::JsonError(format!("Failed to parse snapshot cache: {}", e)))
    }

    pub fn save(&self) -> Result<(), AppError> {
        let path = Self::get_cache_path(&self.base);
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize snapshot cache: {}", e)))?;

        fs::write(&path, json)
            .map_err(|e| AppError::IoError(format!("Failed to write snapshot cache: {}", e)))?;

        Ok(())
    }

    pub fn is_stale(&self, max_age_mins: u64) -> bool {
        let age = Utc::now().signed_duration_since(self.fetched_at);
        age.num_minutes() > max_age_mins as i64
    }
}
