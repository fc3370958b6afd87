use crate::cache::SnapshotCache;
use crate::config::{Config, MATCHES_FILE, STATISTICS_FILE};
use crate::display::output::{display_error, display_info};
use crate::error::AppError;
use chrono::Utc;
use std::fs;
use std::path::Path;

use super::models::{MatchesDocument, StatisticsDocument};

/// Resolves the two static JSON documents from the configured base path,
/// which is either a deployed URL or a local directory.
pub struct SnapshotLoader {
    config: Config,
}

impl SnapshotLoader {
    pub fn new(config: Config) -> Self {
        SnapshotLoader { config }
    }

    fn fetch_remote(&self, file: &str) -> Result<String, AppError> {
        // Cache-busting timestamp so a redeployed snapshot is not masked
        // by an intermediate HTTP cache.
        let url = format!(
            "{}/{}?t={}",
            self.config.base_path.trim_end_matches('/'),
            file,
            Utc::now().timestamp()
        );

        ureq::get(&url)
            .set("User-Agent", "dota_dash/0.1.0")
            .call()
            .map_err(|e| AppError::HttpError(e.to_string()))?
            .into_string()
            .map_err(|e| AppError::HttpError(e.to_string()))
    }

    fn read_local(&self, file: &str) -> Result<String, AppError> {
        let path = Path::new(&self.config.base_path).join(file);
        fs::read_to_string(&path).map_err(|e| AppError::IoError(format!("{}: {}", path.display(), e)))
    }

    fn load_document(&self, file: &str) -> Result<String, AppError> {
        if self.config.is_remote() {
            self.fetch_remote(file)
        } else {
            self.read_local(file)
        }
    }

    pub fn load_matches(&self, refresh: bool) -> Result<MatchesDocument, AppError> {
        if self.config.is_remote() && !refresh {
            if let Ok(cache) = SnapshotCache::load(&self.config.base_path) {
                if !cache.is_stale(self.config.cache_max_age_mins) {
                    display_info("Using cached snapshot (pass --refresh to refetch)");
                    return Ok(cache.document);
                }
            }
        }

        let body = self.load_document(MATCHES_FILE)?;
        let document: MatchesDocument = serde_json::from_str(&body)
            .map_err(|e| AppError::JsonError(e.to_string()))?;

        if self.config.is_remote() {
            let cache = SnapshotCache::new(&self.config.base_path, document.clone());
            let _ = cache.save(); // Save to disk silently
        }

        Ok(document)
    }

    /// Load failure degrades to an empty match list: the failure is shown
    /// on the error channel and every downstream table renders empty.
    pub fn load_matches_or_empty(&self, refresh: bool) -> MatchesDocument {
        match self.load_matches(refresh) {
            Ok(document) => document,
            Err(e) => {
                display_error(&AppError::LoadError(MATCHES_FILE.to_string(), e.to_string()).to_string());
                MatchesDocument::empty()
            }
        }
    }

    pub fn load_statistics(&self) -> Result<StatisticsDocument, AppError> {
        let body = self.load_document(STATISTICS_FILE)?;
        serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
    }
}
