use crate::analysis::aggregate::{HeroSummary, PlayerSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSide {
    Radiant,
    Dire,
}

impl TeamSide {
    pub fn parse(s: &str) -> Option<TeamSide> {
        match s.to_ascii_lowercase().as_str() {
            "radiant" => Some(TeamSide::Radiant),
            "dire" => Some(TeamSide::Dire),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamSide::Radiant => "Radiant",
            TeamSide::Dire => "Dire",
        }
    }
}

/// One player's performance in one match. Identity fields default to the
/// empty string so a row missing them still deserializes; the aggregator
/// drops such rows instead of failing the whole load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchPlayerRecord {
    #[serde(default)]
    pub match_id: String,
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub hero: String,
    pub side: TeamSide,
    /// The match's declared winning side. A row counts as a win iff
    /// `side == winner`.
    pub winner: TeamSide,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub gpm: f64,
    pub xpm: f64,
}

impl MatchPlayerRecord {
    pub fn is_win(&self) -> bool {
        self.side == self.winner
    }

    pub fn has_identity(&self) -> bool {
        !self.player_name.is_empty() && !self.hero.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchMetadata {
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub source: String,
    pub total_matches: usize,
}

/// The matches document: one row per player per match, 10 rows per match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesDocument {
    pub metadata: MatchMetadata,
    pub matches: Vec<MatchPlayerRecord>,
}

impl MatchesDocument {
    pub fn empty() -> Self {
        MatchesDocument {
            metadata: MatchMetadata {
                generated_at: Utc::now(),
                source: String::new(),
                total_matches: 0,
            },
            matches: Vec::new(),
        }
    }

    pub fn distinct_match_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for row in &self.matches {
            if !ids.iter().any(|id| id == &row.match_id) {
                ids.push(row.match_id.clone());
            }
        }
        ids
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallStats {
    pub total_games: usize,
    pub total_players: usize,
    pub total_heroes_played: usize,
    pub average_game_length: f64,
}

/// The statistics document: precomputed summaries plus dataset-wide totals.
/// Consumed for the overview panel and produced by `export-stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsDocument {
    pub player_statistics: Vec<PlayerSummary>,
    pub hero_statistics: Vec<HeroSummary>,
    pub overall_stats: OverallStats,
}
