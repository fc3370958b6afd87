use std::env;

pub const MATCHES_FILE: &str = "matches.json";
pub const STATISTICS_FILE: &str = "statistics.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base path for the static JSON documents. Either a local directory
    /// or an http(s) deployment URL.
    pub base_path: String,
    /// Cached snapshots older than this are refetched.
    pub cache_max_age_mins: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_path = env::var("DOTA_DASH_DATA").unwrap_or_else(|_| "./data".to_string());

        let cache_max_age_mins = env::var("DOTA_DASH_CACHE_MINS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Config {
            base_path,
            cache_max_age_mins,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.base_path.starts_with("http://") || self.base_path.starts_with("https://")
    }
}
