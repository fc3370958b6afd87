use crate::analysis::aggregate::{HeroSummary, PlayerSummary};
use crate::analysis::attributes::AttributeProfile;
use crate::data::models::OverallStats;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct PlayerRow {
    player: String,
    games: String,
    #[tabled(rename = "W/L")]
    record: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
    #[tabled(rename = "K/D/A")]
    kda: String,
    #[tabled(rename = "KDA ratio")]
    kda_ratio: String,
    #[tabled(rename = "avg GPM")]
    avg_gpm: String,
    #[tabled(rename = "avg XPM")]
    avg_xpm: String,
    #[tabled(rename = "top hero")]
    top_hero: String,
}

#[derive(Tabled)]
struct HeroRow {
    hero: String,
    picks: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
    #[tabled(rename = "avg GPM")]
    avg_gpm: String,
    #[tabled(rename = "avg XPM")]
    avg_xpm: String,
}

#[derive(Tabled)]
struct ProfileRow {
    player: String,
    fighting: String,
    farming: String,
    supporting: String,
    pushing: String,
    versatility: String,
}

fn win_rate_cell(rate: f64) -> String {
    let text = format!("{:.1}%", rate);
    if rate >= 50.0 {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

pub fn display_player_summaries(players: &[PlayerSummary]) {
    println!("\n{}", "📊 PLAYER STATISTICS".bold().cyan());
    println!("{}\n", "=".repeat(80).cyan());

    if players.is_empty() {
        println!("{}", "No player data loaded".yellow());
        return;
    }

    let rows: Vec<PlayerRow> = players
        .iter()
        .map(|p| PlayerRow {
            player: p.player_name.clone(),
            games: p.games_played.to_string(),
            record: format!("{}/{}", p.wins, p.games_played - p.wins),
            win_rate: win_rate_cell(p.win_rate),
            kda: format!("{}/{}/{}", p.total_kills, p.total_deaths, p.total_assists),
            kda_ratio: format!("{:.2}", p.kda_ratio),
            avg_gpm: format!("{:.0}", p.avg_gpm),
            avg_xpm: format!("{:.0}", p.avg_xpm),
            top_hero: p.most_played_hero.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_hero_summaries(heroes: &[HeroSummary]) {
    println!("\n{}", "🗡️ HERO STATISTICS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if heroes.is_empty() {
        println!("{}", "No hero data loaded".yellow());
        return;
    }

    let rows: Vec<HeroRow> = heroes
        .iter()
        .map(|h| HeroRow {
            hero: h.hero.clone(),
            picks: h.times_picked.to_string(),
            win_rate: win_rate_cell(h.win_rate),
            avg_gpm: format!("{:.0}", h.avg_gpm),
            avg_xpm: format!("{:.0}", h.avg_xpm),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_profiles(profiles: &[AttributeProfile]) {
    println!("\n{}", "🕸️ ATTRIBUTE COMPARISON".bold().cyan());
    println!("{}\n", "=".repeat(70).cyan());

    if profiles.is_empty() {
        println!("{}", "None of the selected players are in the dataset".yellow());
        return;
    }

    let rows: Vec<ProfileRow> = profiles
        .iter()
        .map(|p| ProfileRow {
            player: p.player_name.clone(),
            fighting: format!("{:.0}", p.fighting),
            farming: format!("{:.0}", p.farming),
            supporting: format!("{:.0}", p.supporting),
            pushing: format!("{:.0}", p.pushing),
            versatility: format!("{:.0}", p.versatility),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\n{}", "Interpretation".bold().yellow());
    println!("• Each score is 0-100, relative to the best value across all loaded players");
    println!("• Pushing blends farm (80%) with win rate; the rest are single-metric ratios\n");
}

pub fn display_overview(stats: &OverallStats) {
    println!("\n{}", "🎮 DATASET OVERVIEW".bold().cyan());
    println!("{}\n", "=".repeat(50).cyan());
    println!("  Matches:       {}", stats.total_games.to_string().bold());
    println!("  Players:       {}", stats.total_players.to_string().bold());
    println!("  Heroes played: {}", stats.total_heroes_played.to_string().bold());
    println!(
        "  Avg length:    {} min\n",
        format!("{:.1}", stats.average_game_length).bold()
    );
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
