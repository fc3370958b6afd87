use crate::analysis::aggregate::StatsAggregator;
use crate::error::AppError;
use chrono::Utc;
use std::fs;
use std::path::Path;

use super::models::{
    MatchMetadata, MatchPlayerRecord, MatchesDocument, OverallStats, StatisticsDocument, TeamSide,
};

const PLAYERS_PER_SIDE: usize = 5;

/// Parses one `--player` argument of the form
/// `name,hero,side,kills,deaths,assists,gpm,xpm`.
pub fn parse_row_spec(match_id: &str, winner: TeamSide, spec: &str) -> Result<MatchPlayerRecord, AppError> {
    let parts: Vec<&str> = spec.split(',').map(|p| p.trim()).collect();
    if parts.len() != 8 {
        return Err(AppError::ValidationError(format!(
            "expected 8 comma-separated fields (name,hero,side,kills,deaths,assists,gpm,xpm), got {}: '{}'",
            parts.len(),
            spec
        )));
    }

    let player_name = parts[0].to_string();
    let hero = parts[1].to_string();
    if player_name.is_empty() || hero.is_empty() {
        return Err(AppError::ValidationError(format!(
            "player name and hero are required: '{}'",
            spec
        )));
    }

    let side = TeamSide::parse(parts[2]).ok_or_else(|| {
        AppError::ValidationError(format!("side must be 'radiant' or 'dire', got '{}'", parts[2]))
    })?;

    let parse_count = |label: &str, value: &str| -> Result<u32, AppError> {
        value.parse().map_err(|_| {
            AppError::ValidationError(format!("{} must be a non-negative integer, got '{}'", label, value))
        })
    };
    let parse_rate = |label: &str, value: &str| -> Result<f64, AppError> {
        let rate: f64 = value.parse().map_err(|_| {
            AppError::ValidationError(format!("{} must be a number, got '{}'", label, value))
        })?;
        if rate < 0.0 {
            return Err(AppError::ValidationError(format!(
                "{} must be non-negative, got '{}'",
                label, value
            )));
        }
        Ok(rate)
    };

    Ok(MatchPlayerRecord {
        match_id: match_id.to_string(),
        player_name,
        hero,
        side,
        winner,
        kills: parse_count("kills", parts[3])?,
        deaths: parse_count("deaths", parts[4])?,
        assists: parse_count("assists", parts[5])?,
        gpm: parse_rate("gpm", parts[6])?,
        xpm: parse_rate("xpm", parts[7])?,
    })
}

/// Validates a complete match entry: exactly 10 rows, 5 per side, and a
/// match id the dataset has not seen. Nothing is written on failure.
pub fn build_match_rows(
    document: &MatchesDocument,
    match_id: &str,
    winner: TeamSide,
    specs: &[String],
) -> Result<Vec<MatchPlayerRecord>, AppError> {
    if match_id.is_empty() {
        return Err(AppError::ValidationError("match id is required".to_string()));
    }
    if document.matches.iter().any(|r| r.match_id == match_id) {
        return Err(AppError::DuplicateMatch(match_id.to_string()));
    }
    if specs.len() != PLAYERS_PER_SIDE * 2 {
        return Err(AppError::ValidationError(format!(
            "a match needs exactly {} player rows, got {}",
            PLAYERS_PER_SIDE * 2,
            specs.len()
        )));
    }

    let rows: Vec<MatchPlayerRecord> = specs
        .iter()
        .map(|spec| parse_row_spec(match_id, winner, spec))
        .collect::<Result<_, _>>()?;

    for side in [TeamSide::Radiant, TeamSide::Dire] {
        let count = rows.iter().filter(|r| r.side == side).count();
        if count != PLAYERS_PER_SIDE {
            return Err(AppError::ValidationError(format!(
                "expected {} {} rows, got {}",
                PLAYERS_PER_SIDE,
                side.as_str(),
                count
            )));
        }
    }

    Ok(rows)
}

/// Returns a new document with the rows appended; the loaded document is
/// never patched in place.
pub fn append_match(document: &MatchesDocument, rows: Vec<MatchPlayerRecord>) -> MatchesDocument {
    let mut matches = document.matches.clone();
    matches.extend(rows);

    let mut updated = MatchesDocument {
        metadata: document.metadata.clone(),
        matches,
    };
    updated.metadata = MatchMetadata {
        generated_at: Utc::now(),
        source: document.metadata.source.clone(),
        total_matches: updated.distinct_match_ids().len(),
    };

    updated
}

/// Recomputes the statistics document from the current match list.
/// `average_game_length` is not derivable from the rows, so it is carried
/// over from the previously deployed statistics document when available.
pub fn build_statistics(
    document: &MatchesDocument,
    previous_average_game_length: Option<f64>,
) -> StatisticsDocument {
    let aggregator = StatsAggregator::aggregate(&document.matches);
    let player_statistics = aggregator.player_summaries();
    let hero_statistics = aggregator.hero_summaries();

    let overall_stats = OverallStats {
        total_games: document.distinct_match_ids().len(),
        total_players: player_statistics.len(),
        total_heroes_played: hero_statistics.len(),
        average_game_length: previous_average_game_length.unwrap_or(0.0),
    };

    StatisticsDocument {
        player_statistics,
        hero_statistics,
        overall_stats,
    }
}

pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::JsonError(e.to_string()))?;

    fs::write(path, json)
        .map_err(|e| AppError::IoError(format!("Failed to write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, side: &str) -> String {
        format!("{},Axe,{},3,2,7,410,520", name, side)
    }

    fn ten_specs() -> Vec<String> {
        let mut specs = Vec::new();
        for i in 0..5 {
            specs.push(spec(&format!("radiant_{}", i), "radiant"));
            specs.push(spec(&format!("dire_{}", i), "dire"));
        }
        specs
    }

    #[test]
    fn parses_a_well_formed_row_spec() {
        let row = parse_row_spec("m1", TeamSide::Radiant, "Alice,Lina,dire,9,3,12,615.5,701")
            .unwrap();
        assert_eq!(row.player_name, "Alice");
        assert_eq!(row.hero, "Lina");
        assert_eq!(row.side, TeamSide::Dire);
        assert_eq!(row.kills, 9);
        assert_eq!(row.gpm, 615.5);
        assert!(!row.is_win());
    }

    #[test]
    fn rejects_missing_identity() {
        let err = parse_row_spec("m1", TeamSide::Radiant, ",Lina,dire,9,3,12,615,701");
        assert!(matches!(err, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn rejects_bad_side_and_bad_numbers() {
        assert!(parse_row_spec("m1", TeamSide::Radiant, "A,Lina,blue,9,3,12,615,701").is_err());
        assert!(parse_row_spec("m1", TeamSide::Radiant, "A,Lina,dire,-1,3,12,615,701").is_err());
        assert!(parse_row_spec("m1", TeamSide::Radiant, "A,Lina,dire,9,3,12,-5,701").is_err());
    }

    #[test]
    fn requires_five_rows_per_side() {
        let document = MatchesDocument::empty();
        let mut specs = ten_specs();
        specs[1] = spec("extra_radiant", "radiant");

        let err = build_match_rows(&document, "m1", TeamSide::Radiant, &specs);
        assert!(matches!(err, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn rejects_duplicate_match_id() {
        let mut document = MatchesDocument::empty();
        let rows = build_match_rows(&document, "m1", TeamSide::Radiant, &ten_specs()).unwrap();
        document = append_match(&document, rows);

        let err = build_match_rows(&document, "m1", TeamSide::Dire, &ten_specs());
        assert!(matches!(err, Err(AppError::DuplicateMatch(_))));
    }

    #[test]
    fn append_produces_new_document_with_updated_metadata() {
        let document = MatchesDocument::empty();
        let rows = build_match_rows(&document, "m1", TeamSide::Radiant, &ten_specs()).unwrap();

        let updated = append_match(&document, rows);
        assert_eq!(document.matches.len(), 0);
        assert_eq!(updated.matches.len(), 10);
        assert_eq!(updated.metadata.total_matches, 1);
    }

    #[test]
    fn statistics_reflect_the_appended_rows() {
        let document = MatchesDocument::empty();
        let rows = build_match_rows(&document, "m1", TeamSide::Radiant, &ten_specs()).unwrap();
        let updated = append_match(&document, rows);

        let stats = build_statistics(&updated, Some(38.5));
        assert_eq!(stats.overall_stats.total_games, 1);
        assert_eq!(stats.overall_stats.total_players, 10);
        assert_eq!(stats.overall_stats.total_heroes_played, 1);
        assert_eq!(stats.overall_stats.average_game_length, 38.5);

        let radiant = stats
            .player_statistics
            .iter()
            .find(|p| p.player_name == "radiant_0")
            .unwrap();
        assert_eq!(radiant.win_rate, 100.0);
    }
}
