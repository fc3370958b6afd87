mod analysis;
mod cache;
mod config;
mod data;
mod display;
mod error;

use analysis::aggregate::StatsAggregator;
use analysis::attributes::normalize_profiles;
use clap::{Parser, Subcommand, ValueEnum};
use config::Config;
use data::loader::SnapshotLoader;
use data::models::{MatchesDocument, TeamSide};
use data::writer;
use display::output::{
    display_error, display_hero_summaries, display_info, display_overview,
    display_player_summaries, display_profiles, display_success,
};
use error::AppError;
use std::path::Path;

/// At most this many players can be compared side by side; the normalizer
/// itself accepts any non-empty selection.
const MAX_COMPARE: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "dota-dash")]
#[command(about = "Terminal dashboard over a static Dota match-statistics snapshot", long_about = None)]
struct Args {
    /// Base path of the JSON snapshot (local directory or http(s) URL).
    /// Overrides DOTA_DASH_DATA.
    #[arg(long, global = true)]
    data: Option<String>,

    /// Ignore the local snapshot cache and refetch remote data
    #[arg(long, global = true)]
    refresh: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortKey {
    Kda,
    Winrate,
    Kills,
    Games,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show aggregated per-player statistics
    Players {
        /// Column to sort by
        #[arg(short, long, value_enum, default_value_t = SortKey::Kda)]
        sort: SortKey,

        /// Only show the top N players
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Show aggregated per-hero statistics
    Heroes,

    /// Compare up to 5 players on the 0-100 attribute scale
    Compare {
        /// Player names, case-sensitive
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,
    },

    /// Show dataset-wide totals
    Overview,

    /// Append one match (10 player rows) and write the updated matches
    /// document for manual redeployment
    AddMatch {
        /// Unique match id
        #[arg(long)]
        match_id: String,

        /// Winning side: radiant or dire
        #[arg(long)]
        winner: String,

        /// One row per player: name,hero,side,kills,deaths,assists,gpm,xpm
        /// (repeat 10 times, 5 per side)
        #[arg(long = "player")]
        players: Vec<String>,

        /// Where to write the updated document
        #[arg(short, long, default_value = "matches_updated.json")]
        output: String,
    },

    /// Recompute the statistics document from the match list and write it
    ExportStats {
        #[arg(short, long, default_value = "statistics_updated.json")]
        output: String,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn load_documents(args: &Args) -> (SnapshotLoader, MatchesDocument) {
    let mut config = Config::from_env();
    if let Some(data) = &args.data {
        config.base_path = data.clone();
    }

    let loader = SnapshotLoader::new(config);
    let document = loader.load_matches_or_empty(args.refresh);
    (loader, document)
}

fn run(args: Args) -> Result<(), AppError> {
    match &args.command {
        Command::Players { sort, top } => {
            let (_, document) = load_documents(&args);
            let mut players = StatsAggregator::aggregate(&document.matches).player_summaries();

            match sort {
                SortKey::Kda => players.sort_by(|a, b| {
                    b.kda_ratio.partial_cmp(&a.kda_ratio).unwrap_or(std::cmp::Ordering::Equal)
                }),
                SortKey::Winrate => players.sort_by(|a, b| {
                    b.win_rate.partial_cmp(&a.win_rate).unwrap_or(std::cmp::Ordering::Equal)
                }),
                SortKey::Kills => players.sort_by(|a, b| b.total_kills.cmp(&a.total_kills)),
                SortKey::Games => players.sort_by(|a, b| b.games_played.cmp(&a.games_played)),
            }

            if let Some(top) = top {
                players.truncate(*top);
            }

            display_player_summaries(&players);
        }

        Command::Heroes => {
            let (_, document) = load_documents(&args);
            let mut heroes = StatsAggregator::aggregate(&document.matches).hero_summaries();
            heroes.sort_by(|a, b| b.times_picked.cmp(&a.times_picked));
            display_hero_summaries(&heroes);
        }

        Command::Compare { names } => {
            if names.len() > MAX_COMPARE {
                return Err(AppError::ValidationError(format!(
                    "compare at most {} players at once, got {}",
                    MAX_COMPARE,
                    names.len()
                )));
            }

            let (_, document) = load_documents(&args);
            let cohort = StatsAggregator::aggregate(&document.matches).player_summaries();

            let profiles = normalize_profiles(&cohort, names);
            for name in names {
                if !profiles.iter().any(|p| &p.player_name == name) {
                    display_info(&format!("'{}' is not in the loaded dataset, skipping", name));
                }
            }
            display_profiles(&profiles);
        }

        Command::Overview => {
            let (loader, document) = load_documents(&args);
            // Prefer the deployed statistics document; recompute from the
            // rows when it is missing or unreadable.
            let stats = match loader.load_statistics() {
                Ok(stats) => stats.overall_stats,
                Err(_) => writer::build_statistics(&document, None).overall_stats,
            };
            display_overview(&stats);
        }

        Command::AddMatch {
            match_id,
            winner,
            players,
            output,
        } => {
            let winner = TeamSide::parse(winner).ok_or_else(|| {
                AppError::ValidationError(format!(
                    "winner must be 'radiant' or 'dire', got '{}'",
                    winner
                ))
            })?;

            let (_, document) = load_documents(&args);
            let rows = writer::build_match_rows(&document, match_id, winner, players)?;
            let updated = writer::append_match(&document, rows);

            writer::write_json(Path::new(output), &updated)?;
            display_success(&format!(
                "Match {} added ({} matches total). Wrote {}",
                match_id, updated.metadata.total_matches, output
            ));
            display_info("Replace the deployed matches document with this file to publish it");
        }

        Command::ExportStats { output } => {
            let (loader, document) = load_documents(&args);
            if document.matches.is_empty() {
                return Err(AppError::NoMatches);
            }

            let previous_length = loader
                .load_statistics()
                .ok()
                .map(|s| s.overall_stats.average_game_length);

            let stats = writer::build_statistics(&document, previous_length);
            writer::write_json(Path::new(output), &stats)?;
            display_success(&format!(
                "Statistics for {} players / {} heroes written to {}",
                stats.overall_stats.total_players, stats.overall_stats.total_heroes_played, output
            ));
        }
    }

    Ok(())
}
