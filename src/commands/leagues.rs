//! `fpl-nexus leagues ...` handlers.

use super::common::{ksh, timed, yes_no, CommandContext};
use crate::cli::LeaguesCmd;
use crate::models::{League, NewLeague, Standing};
use crate::Result;

fn league_line(league: &League) -> String {
    format!(
        "{:<16} {:<28} fee {:>14}  members {:>3}/{:<3}  pool {:>14}  private {}",
        league.id.as_str(),
        league.name,
        ksh(league.entry_fee),
        league.members.len(),
        league.max_members,
        ksh(league.prize_pool),
        yes_no(league.is_private),
    )
}

fn league_lines(leagues: &[League]) -> Vec<String> {
    if leagues.is_empty() {
        return vec!["No leagues found.".to_string()];
    }
    leagues.iter().map(league_line).collect()
}

fn league_detail_lines(league: &League) -> Vec<String> {
    let mut lines = vec![league_line(league)];
    for member in &league.members {
        let marker = if member.is_current_user == Some(true) { " (you)" } else { "" };
        lines.push(format!(
            "  {:<20} {:<20} {:>4} pts{}",
            member.name, member.team_name, member.points, marker
        ));
    }
    lines
}

fn standing_lines(standings: &[Standing]) -> Vec<String> {
    standings
        .iter()
        .map(|s| {
            format!(
                "{:>3}. {:<20} {:<20} {:>4} pts",
                s.rank, s.member.name, s.member.team_name, s.member.points
            )
        })
        .collect()
}

pub async fn handle_leagues(ctx: &CommandContext, cmd: LeaguesCmd) -> Result<()> {
    let service = &ctx.service;

    match cmd {
        LeaguesCmd::Public => {
            let leagues = timed("public_leagues", service.public_leagues()).await;
            ctx.emit(leagues.as_slice(), league_lines)
        }

        LeaguesCmd::Mine => {
            let leagues = timed("my_leagues", service.my_leagues()).await;
            ctx.emit(leagues.as_slice(), league_lines)
        }

        LeaguesCmd::Show { league_id } => {
            match timed("league_details", service.league_details(&league_id)).await {
                Some(league) => ctx.emit(&league, league_detail_lines),
                None => Err(crate::NexusError::LeagueNotFound {
                    league_id: league_id.to_string(),
                }),
            }
        }

        LeaguesCmd::Leaderboard { league_id } => {
            let standings = timed("leaderboard", service.leaderboard(&league_id)).await?;
            ctx.emit(standings.as_slice(), standing_lines)
        }

        LeaguesCmd::Join { league_id } => {
            let outcome = timed("join_league", service.join_league(&league_id)).await?;
            ctx.persist().await?;
            ctx.emit(&outcome, |o| {
                vec![o.message.clone(), league_line(&o.league)]
            })
        }

        LeaguesCmd::Create {
            name,
            entry_fee,
            max_members,
            private,
        } => {
            let request = NewLeague {
                name,
                entry_fee,
                is_private: private,
                max_members,
            };
            let league = timed("create_league", service.create_league(request)).await?;
            ctx.persist().await?;
            ctx.emit(&league, |l| {
                vec![format!("Created {}.", l.name), league_line(l)]
            })
        }
    }
}
