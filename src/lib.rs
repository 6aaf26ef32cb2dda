pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod scoring;
pub mod services;
pub mod standings;

use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use log::info;

use crate::cli::Command;
use crate::config::{AppConfig, JudgeCount, TournamentRules};
use crate::domain::{Team, TeamId, TournamentId};
use crate::errors::NotFound;
use crate::services::server::ServerService;
use crate::services::standings::StandingsService;
use crate::standings::TeamChampionship;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_init() -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.database_path)?;
    let mut conn = database::get_connection(&pool)?;
    database::setup::reset_database(&mut conn)?;
    info!("Database schema reset at {}", config.database_path);
    Ok(())
}

pub fn handle_kata(scores: &[f64], judges: Option<u8>) -> Result<()> {
    let config = AppConfig::new();
    let judges = match judges {
        Some(count) => JudgeCount::try_from(count).map_err(|e| anyhow!(e))?,
        None => config.rules.kata_judges_count,
    };

    let final_score = scoring::compute_for_panel(scores, judges)?;
    println!("{} {:.2}", "Final score:".bold(), final_score);
    Ok(())
}

pub fn handle_standings(tournament_id: TournamentId) -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.database_path)?;

    let teams = {
        let mut conn = database::get_connection(&pool)?;
        database::roster::list_teams(&mut conn)?
    };

    let championship = StandingsService::new(pool)
        .team_championship(tournament_id)?
        .ok_or(NotFound::new("tournament", tournament_id))?;

    print!("{}", render_standings(&championship, &teams));
    Ok(())
}

pub fn handle_rules(tournament_id: TournamentId, path: &Path) -> Result<()> {
    let config = AppConfig::new();
    let rules = TournamentRules::from_json_file(path)?;

    let pool = database::create_pool(&config.database_path)?;
    let mut conn = database::get_connection(&pool)?;
    if !database::tournaments::update_rules(&mut conn, tournament_id, &rules)? {
        return Err(NotFound::new("tournament", tournament_id).into());
    }

    info!("Stored rules from {} for tournament {}", path.display(), tournament_id);
    Ok(())
}

fn render_standings(championship: &TeamChampionship, teams: &[Team]) -> String {
    if !championship.enabled {
        return format!(
            "{}\n",
            "Team championship is disabled for this tournament".yellow()
        );
    }

    let names: HashMap<TeamId, &str> = teams.iter().map(|t| (t.id, t.name.as_str())).collect();
    let mut out = format!(
        "{}\n",
        format!("{:>4}  {:<24} {:>4} {:>4} {:>4} {:>6}", "#", "Team", "G", "S", "B", "Pts").bold()
    );

    for standing in &championship.standings {
        let name = names.get(&standing.team_id).copied().unwrap_or("(unknown team)");
        let line = format!(
            "{:>4}  {:<24} {:>4} {:>4} {:>4} {:>6}",
            standing.rank,
            name,
            standing.tally.gold,
            standing.tally.silver,
            standing.tally.bronze,
            standing.tally.total_points
        );
        let line = if standing.rank == 1 { line.green().to_string() } else { line };
        out.push_str(&line);
        out.push('\n');
    }

    if !championship.unresolved.is_empty() {
        out.push_str(&format!(
            "{}\n",
            format!("{} medal results without a team were skipped", championship.unresolved.len()).yellow()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PointTable;
    use crate::standings::{TeamStanding, TeamTally, UnresolvedTeamWarning};

    fn championship(enabled: bool) -> TeamChampionship {
        TeamChampionship {
            tournament_id: 1,
            enabled,
            point_rules: PointTable::default(),
            standings: vec![TeamStanding {
                rank: 1,
                team_id: 7,
                tally: TeamTally {
                    gold: 2,
                    silver: 0,
                    bronze: 1,
                    total_points: 7,
                },
            }],
            unresolved: vec![UnresolvedTeamWarning {
                result_id: 3,
                athlete_id: 30,
            }],
        }
    }

    #[test]
    fn renders_team_names_and_skipped_results() {
        let teams = vec![Team {
            id: 7,
            name: "Kaze Karate".to_string(),
        }];
        let table = render_standings(&championship(true), &teams);
        assert!(table.contains("Kaze Karate"));
        assert!(table.contains("1 medal results without a team were skipped"));
    }

    #[test]
    fn disabled_championship_prints_notice_only() {
        let table = render_standings(&championship(false), &[]);
        assert!(table.contains("disabled"));
        assert!(!table.contains("Pts"));
    }
}
