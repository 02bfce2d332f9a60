//! `fpl-nexus account ...` handlers.

use super::common::{ksh, timed, CommandContext};
use crate::cli::AccountCmd;
use crate::models::{PlayerStat, ProfileUpdate, Transaction, UserProfile};
use crate::Result;

fn profile_lines(profile: &UserProfile) -> Vec<String> {
    vec![
        format!("{} <{}>", profile.name, profile.email),
        format!("Team:        {}", profile.team_name),
        format!("FPL team ID: {}", profile.fpl_team_id),
    ]
}

fn player_lines(players: &[PlayerStat]) -> Vec<String> {
    players
        .iter()
        .map(|p| {
            let saves = p.saves.map(|s| format!("  saves {}", s)).unwrap_or_default();
            format!(
                "{:<12} {:<14} {:<3} £{:>4.1}m  G {:>2}  A {:>2}  CS {:>2}  sel {:>5.1}%{}",
                p.name, p.team, p.position, p.price, p.goals, p.assists, p.clean_sheets, p.selection_percent, saves
            )
        })
        .collect()
}

pub(crate) fn transaction_line(t: &Transaction) -> String {
    format!(
        "{}  {:<14} {:<10} {:>14}  {:<9} {}",
        t.date.format("%Y-%m-%d %H:%M"),
        t.id.as_str(),
        t.kind,
        ksh(t.amount),
        t.status,
        t.description
    )
}

pub async fn handle_account(ctx: &CommandContext, cmd: AccountCmd) -> Result<()> {
    let service = &ctx.service;

    match cmd {
        AccountCmd::Profile => {
            let profile = timed("user_profile", service.user_profile()).await;
            ctx.emit(&profile, profile_lines)
        }

        AccountCmd::UpdateProfile {
            name,
            email,
            fpl_team_id,
            avatar_url,
            team_name,
        } => {
            let update = ProfileUpdate {
                name,
                email,
                fpl_team_id,
                avatar_url,
                team_name,
            };
            let profile = timed("update_user_profile", service.update_user_profile(update)).await?;
            ctx.persist().await?;
            ctx.emit(&profile, profile_lines)
        }

        AccountCmd::Fpl => {
            let summary = timed("fpl_summary", service.fpl_summary()).await;
            ctx.emit(&summary, |s| {
                vec![
                    format!("Overall points: {}", s.overall_points),
                    format!("Overall rank:   {} of {}", s.overall_rank, s.total_players),
                ]
            })
        }

        AccountCmd::Players => {
            let players = timed("player_stats", service.player_stats()).await;
            ctx.emit(players.as_slice(), player_lines)
        }

        AccountCmd::Wallet => {
            let wallet = timed("wallet_details", service.wallet_details()).await;
            ctx.emit(&wallet, |w| {
                vec![
                    format!("Balance:          {}", ksh(w.current_balance)),
                    format!("Pending winnings: {}", ksh(w.pending_winnings)),
                ]
            })
        }

        AccountCmd::Deposit { amount } => {
            let transaction = timed("deposit", service.deposit(amount)).await?;
            ctx.persist().await?;
            ctx.emit(&transaction, |t| vec![transaction_line(t)])
        }

        AccountCmd::Withdraw { amount } => {
            let transaction = timed("withdraw", service.withdraw(amount)).await?;
            ctx.persist().await?;
            ctx.emit(&transaction, |t| vec![transaction_line(t)])
        }

        AccountCmd::Transactions => {
            let transactions = timed("transactions", service.transactions()).await;
            ctx.emit(transactions.as_slice(), |ts| ts.iter().map(transaction_line).collect())
        }
    }
}
