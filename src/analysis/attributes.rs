use super::aggregate::PlayerSummary;
use serde::{Deserialize, Serialize};

// Blend weights for the Pushing score. Arbitrary; revisit if
// requirements change.
const PUSHING_GPM_WEIGHT: f64 = 80.0;
const PUSHING_WIN_RATE_WEIGHT: f64 = 0.2;

/// Five bounded [0,100] scores for one player, scaled against the maxima
/// of the full loaded cohort rather than the displayed selection, so
/// profiles stay comparable as the selection changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeProfile {
    pub player_name: String,
    pub fighting: f64,
    pub farming: f64,
    pub supporting: f64,
    pub pushing: f64,
    pub versatility: f64,
}

#[derive(Debug, Clone, Copy)]
struct CohortMaxima {
    avg_kills: f64,
    avg_gpm: f64,
    avg_assists: f64,
    kda_ratio: f64,
}

impl CohortMaxima {
    fn of(cohort: &[PlayerSummary]) -> Self {
        let mut avg_kills: f64 = 0.0;
        let mut avg_gpm: f64 = 0.0;
        let mut avg_assists: f64 = 0.0;
        let mut kda_ratio: f64 = 0.0;

        for p in cohort {
            avg_kills = avg_kills.max(p.avg_kills());
            avg_gpm = avg_gpm.max(p.avg_gpm);
            avg_assists = avg_assists.max(p.avg_assists());
            kda_ratio = kda_ratio.max(p.kda_ratio);
        }

        // Divisors floored at 1.0 so an all-zero cohort never divides
        // by zero.
        CohortMaxima {
            avg_kills: avg_kills.max(1.0),
            avg_gpm: avg_gpm.max(1.0),
            avg_assists: avg_assists.max(1.0),
            kda_ratio: kda_ratio.max(1.0),
        }
    }
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

fn profile_for(player: &PlayerSummary, maxima: &CohortMaxima) -> AttributeProfile {
    let gpm_ratio = player.avg_gpm / maxima.avg_gpm;

    AttributeProfile {
        player_name: player.player_name.clone(),
        fighting: clamp_score(player.avg_kills() / maxima.avg_kills * 100.0),
        farming: clamp_score(gpm_ratio * 100.0),
        supporting: clamp_score(player.avg_assists() / maxima.avg_assists * 100.0),
        pushing: clamp_score(
            gpm_ratio * PUSHING_GPM_WEIGHT + player.win_rate * PUSHING_WIN_RATE_WEIGHT,
        ),
        versatility: clamp_score(player.kda_ratio / maxima.kda_ratio * 100.0),
    }
}

/// Builds one profile per selected name, in selection order. Names absent
/// from the cohort are skipped rather than reported.
pub fn normalize_profiles(cohort: &[PlayerSummary], selection: &[String]) -> Vec<AttributeProfile> {
    let maxima = CohortMaxima::of(cohort);

    selection
        .iter()
        .filter_map(|name| {
            cohort
                .iter()
                .find(|p| &p.player_name == name)
                .map(|p| profile_for(p, &maxima))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, games: usize, kills: u32, assists: u32, deaths: u32, gpm: f64, win_rate: f64) -> PlayerSummary {
        PlayerSummary {
            player_name: name.to_string(),
            games_played: games,
            wins: (win_rate / 100.0 * games as f64) as usize,
            total_kills: kills,
            total_deaths: deaths,
            total_assists: assists,
            win_rate,
            kda_ratio: (kills + assists) as f64 / deaths.max(1) as f64,
            avg_gpm: gpm,
            avg_xpm: gpm * 1.1,
            most_played_hero: "Axe".to_string(),
        }
    }

    #[test]
    fn cohort_leader_scores_hundred() {
        let cohort = vec![
            summary("A", 2, 30, 10, 2, 600.0, 100.0),
            summary("B", 2, 10, 30, 5, 300.0, 50.0),
        ];

        let profiles = normalize_profiles(&cohort, &["A".to_string(), "B".to_string()]);
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].fighting, 100.0);
        assert_eq!(profiles[0].farming, 100.0);
        assert_eq!(profiles[1].supporting, 100.0);
        assert_eq!(profiles[1].farming, 50.0);
    }

    #[test]
    fn every_score_stays_in_bounds() {
        let cohort = vec![
            summary("A", 1, 1000, 0, 0, 99999.0, 100.0),
            summary("B", 50, 0, 0, 500, 0.0, 0.0),
            summary("C", 3, 12, 40, 1, 480.0, 66.7),
        ];

        let names: Vec<String> = cohort.iter().map(|p| p.player_name.clone()).collect();
        for profile in normalize_profiles(&cohort, &names) {
            for score in [
                profile.fighting,
                profile.farming,
                profile.supporting,
                profile.pushing,
                profile.versatility,
            ] {
                assert!((0.0..=100.0).contains(&score), "out of bounds: {}", score);
            }
        }
    }

    #[test]
    fn all_zero_cohort_divides_by_floor() {
        let cohort = vec![summary("A", 1, 0, 0, 0, 0.0, 0.0)];

        let profiles = normalize_profiles(&cohort, &["A".to_string()]);
        assert_eq!(profiles[0].fighting, 0.0);
        assert_eq!(profiles[0].farming, 0.0);
        assert_eq!(profiles[0].pushing, 0.0);
    }

    #[test]
    fn pushing_blends_gpm_and_win_rate() {
        let cohort = vec![
            summary("A", 2, 10, 10, 5, 500.0, 100.0),
            summary("B", 2, 10, 10, 5, 250.0, 50.0),
        ];

        let profiles = normalize_profiles(&cohort, &["A".to_string(), "B".to_string()]);
        // A: full GPM ratio (80) plus 100 * 0.2 = 100.
        assert_eq!(profiles[0].pushing, 100.0);
        // B: half GPM ratio (40) plus 50 * 0.2 = 50.
        assert_eq!(profiles[1].pushing, 50.0);
    }

    #[test]
    fn unknown_selection_is_skipped_silently() {
        let cohort = vec![summary("A", 2, 10, 10, 5, 500.0, 50.0)];

        let profiles = normalize_profiles(
            &cohort,
            &["Nobody".to_string(), "A".to_string()],
        );
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].player_name, "A");
    }

    #[test]
    fn normalization_uses_full_cohort_not_selection() {
        let cohort = vec![
            summary("A", 2, 40, 10, 2, 800.0, 100.0),
            summary("B", 2, 20, 10, 2, 400.0, 50.0),
        ];

        // Selecting only B still scales against A's maxima.
        let profiles = normalize_profiles(&cohort, &["B".to_string()]);
        assert_eq!(profiles[0].fighting, 50.0);
        assert_eq!(profiles[0].farming, 50.0);
    }
}
