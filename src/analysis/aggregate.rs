use crate::data::models::MatchPlayerRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Derived totals for one player identity. Names are case-sensitive and
/// not deduplicated: same string, same player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub player_name: String,
    pub games_played: usize,
    pub wins: usize,
    pub total_kills: u32,
    pub total_deaths: u32,
    pub total_assists: u32,
    pub win_rate: f64,
    pub kda_ratio: f64,
    pub avg_gpm: f64,
    pub avg_xpm: f64,
    pub most_played_hero: String,
}

impl PlayerSummary {
    pub fn avg_kills(&self) -> f64 {
        self.total_kills as f64 / self.games_played.max(1) as f64
    }

    pub fn avg_assists(&self) -> f64 {
        self.total_assists as f64 / self.games_played.max(1) as f64
    }
}

/// Derived totals for one hero identity across every game it was picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSummary {
    pub hero: String,
    pub times_picked: usize,
    pub wins: usize,
    pub win_rate: f64,
    pub avg_gpm: f64,
    pub avg_xpm: f64,
}

#[derive(Debug, Default)]
struct PlayerAccumulator {
    games: usize,
    wins: usize,
    kills: u32,
    deaths: u32,
    assists: u32,
    gpm_sum: f64,
    xpm_sum: f64,
    // hero -> (times played, index of first row on that hero)
    heroes: HashMap<String, (usize, usize)>,
}

#[derive(Debug, Default)]
struct HeroAccumulator {
    picked: usize,
    wins: usize,
    gpm_sum: f64,
    xpm_sum: f64,
}

pub struct StatsAggregator {
    players: HashMap<String, PlayerAccumulator>,
    heroes: HashMap<String, HeroAccumulator>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        StatsAggregator {
            players: HashMap::new(),
            heroes: HashMap::new(),
        }
    }

    /// Folds the full row list into per-player and per-hero accumulators.
    /// Rows without a player or hero identity are skipped.
    pub fn aggregate(rows: &[MatchPlayerRecord]) -> Self {
        let mut agg = StatsAggregator::new();
        for (idx, row) in rows.iter().enumerate() {
            if !row.has_identity() {
                continue;
            }
            agg.add_row(row, idx);
        }
        agg
    }

    fn add_row(&mut self, row: &MatchPlayerRecord, row_index: usize) {
        let won = row.is_win();

        let player = self.players.entry(row.player_name.clone()).or_default();
        player.games += 1;
        if won {
            player.wins += 1;
        }
        player.kills += row.kills;
        player.deaths += row.deaths;
        player.assists += row.assists;
        player.gpm_sum += row.gpm;
        player.xpm_sum += row.xpm;
        player
            .heroes
            .entry(row.hero.clone())
            .or_insert((0, row_index))
            .0 += 1;

        let hero = self.heroes.entry(row.hero.clone()).or_default();
        hero.picked += 1;
        if won {
            hero.wins += 1;
        }
        hero.gpm_sum += row.gpm;
        hero.xpm_sum += row.xpm;
    }

    /// Player summaries sorted by name, so the same row list always
    /// serializes to the same bytes.
    pub fn player_summaries(&self) -> Vec<PlayerSummary> {
        let mut summaries: Vec<PlayerSummary> = self
            .players
            .iter()
            .map(|(name, acc)| {
                let games = acc.games;
                // Highest count wins; ties go to the hero seen first in
                // the input sequence.
                let most_played_hero = acc
                    .heroes
                    .iter()
                    .max_by_key(|(_, &(count, first_idx))| (count, std::cmp::Reverse(first_idx)))
                    .map(|(hero, _)| hero.clone())
                    .unwrap_or_default();

                PlayerSummary {
                    player_name: name.clone(),
                    games_played: games,
                    wins: acc.wins,
                    total_kills: acc.kills,
                    total_deaths: acc.deaths,
                    total_assists: acc.assists,
                    win_rate: acc.wins as f64 / games as f64 * 100.0,
                    // Deliberate floor: a zero-death player divides by 1,
                    // not a true zero-death statistic.
                    kda_ratio: (acc.kills + acc.assists) as f64 / acc.deaths.max(1) as f64,
                    avg_gpm: acc.gpm_sum / games as f64,
                    avg_xpm: acc.xpm_sum / games as f64,
                    most_played_hero,
                }
            })
            .collect();

        summaries.sort_by(|a, b| a.player_name.cmp(&b.player_name));
        summaries
    }

    pub fn hero_summaries(&self) -> Vec<HeroSummary> {
        let mut summaries: Vec<HeroSummary> = self
            .heroes
            .iter()
            .map(|(hero, acc)| HeroSummary {
                hero: hero.clone(),
                times_picked: acc.picked,
                wins: acc.wins,
                win_rate: acc.wins as f64 / acc.picked as f64 * 100.0,
                avg_gpm: acc.gpm_sum / acc.picked as f64,
                avg_xpm: acc.xpm_sum / acc.picked as f64,
            })
            .collect();

        summaries.sort_by(|a, b| a.hero.cmp(&b.hero));
        summaries
    }
}
