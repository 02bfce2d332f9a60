//! `fpl-nexus admin ...` handlers.

use super::account::transaction_line;
use super::common::{ksh, timed, CommandContext};
use crate::cli::{AdminCmd, TransactionFilterArgs, UserFilterArgs};
use crate::core::filters::{TransactionQuery, UserQuery};
use crate::models::{AdminLeague, AdminTransaction, AdminUser, FinancialSummary};
use crate::{NexusError, Result};

impl From<UserFilterArgs> for UserQuery {
    fn from(args: UserFilterArgs) -> Self {
        UserQuery::default()
            .status(args.status)
            .role(args.role)
            .search(args.search)
    }
}

impl From<TransactionFilterArgs> for TransactionQuery {
    fn from(args: TransactionFilterArgs) -> Self {
        TransactionQuery::default()
            .status(args.status)
            .kind(args.kind)
            .search(args.search)
    }
}

fn user_line(user: &AdminUser) -> String {
    format!(
        "{:<14} {:<18} {:<28} {:<9} {:<6} joined {}",
        user.id.as_str(),
        user.name,
        user.email,
        user.role,
        user.status,
        user.joined_date.format("%Y-%m-%d")
    )
}

fn admin_league_line(league: &AdminLeague) -> String {
    format!(
        "{:<16} {:<28} {:<16} {:>3}/{:<3} pool {:>14}  by {}",
        league.id.as_str(),
        league.name,
        league.status,
        league.participants,
        league.max_participants,
        ksh(league.prize_pool),
        league.creator.name
    )
}

fn admin_league_detail_lines(league: &AdminLeague) -> Vec<String> {
    let mut lines = vec![
        admin_league_line(league),
        format!(
            "  runs {} to {}, entry fee {}",
            league.start_date.format("%Y-%m-%d %H:%M"),
            league.end_date.format("%Y-%m-%d %H:%M"),
            ksh(league.entry_fee)
        ),
    ];
    for member in &league.members {
        lines.push(format!(
            "  {:<20} {:<20} {:>4} pts",
            member.name, member.team_name, member.points
        ));
    }
    lines
}

fn ledger_line(entry: &AdminTransaction) -> String {
    format!("{}  [{}]", transaction_line(&entry.transaction), entry.user.name)
}

fn finance_lines(summary: &FinancialSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Total revenue:  {}", ksh(summary.total_revenue)),
        format!("Fees collected: {}", ksh(summary.fees_collected)),
        format!("Total payouts:  {}", ksh(summary.total_payouts)),
        format!("Net profit:     {}", ksh(summary.net_profit)),
    ];
    if !summary.fraud_alerts.is_empty() {
        lines.push("Fraud alerts:".to_string());
        for alert in &summary.fraud_alerts {
            lines.push(format!(
                "  [{}] {} ({})",
                alert.level,
                alert.message,
                alert.timestamp.format("%Y-%m-%d %H:%M")
            ));
        }
    }
    lines
}

pub async fn handle_admin(ctx: &CommandContext, cmd: AdminCmd) -> Result<()> {
    let service = &ctx.service;

    match cmd {
        AdminCmd::Dashboard => {
            let stats = timed("dashboard_stats", service.dashboard_stats()).await;
            ctx.emit(&stats, |s| {
                vec![
                    format!("Users:          {}", s.total_users),
                    format!("Active leagues: {}", s.active_leagues),
                    format!("Revenue:        {}", ksh(s.total_revenue)),
                    format!("Transfers:      {}", s.total_transfers),
                ]
            })
        }

        AdminCmd::Users { filters } => {
            let query = UserQuery::from(filters);
            let users = if query.is_empty() {
                timed("users", service.users()).await
            } else {
                timed("search_users", service.search_users(query)).await
            };
            ctx.emit(users.as_slice(), |us| us.iter().map(user_line).collect())
        }

        AdminCmd::SetUserStatus { user_id, status } => {
            let user = timed("update_user_status", service.update_user_status(&user_id, status)).await?;
            ctx.persist().await?;
            ctx.emit(&user, |u| vec![user_line(u)])
        }

        AdminCmd::SetUserRole { user_id, role } => {
            let user = timed("update_user_role", service.update_user_role(&user_id, role)).await?;
            ctx.persist().await?;
            ctx.emit(&user, |u| vec![user_line(u)])
        }

        AdminCmd::AdjustBalance {
            user_id,
            delta,
            reason,
        } => {
            let adjustment =
                timed("adjust_balance", service.adjust_balance(&user_id, delta, reason)).await?;
            ctx.persist().await?;
            ctx.emit(&adjustment, |a| {
                vec![
                    ledger_line(&a.transaction),
                    format!("New balance: {}", ksh(a.balance)),
                ]
            })
        }

        AdminCmd::Leagues => {
            let leagues = timed("admin_leagues", service.admin_leagues()).await;
            ctx.emit(leagues.as_slice(), |ls| ls.iter().map(admin_league_line).collect())
        }

        AdminCmd::League { league_id } => {
            match timed("admin_league_details", service.admin_league_details(&league_id)).await {
                Some(league) => ctx.emit(&league, admin_league_detail_lines),
                None => Err(NexusError::LeagueNotFound {
                    league_id: league_id.to_string(),
                }),
            }
        }

        AdminCmd::SetLeagueStatus { league_id, status } => {
            let league = timed(
                "update_league_status",
                service.update_league_status(&league_id, status),
            )
            .await?;
            ctx.persist().await?;
            ctx.emit(&league, |l| vec![admin_league_line(l)])
        }

        AdminCmd::Recalculate { league_id } => {
            let league = timed(
                "recalculate_league_points",
                service.recalculate_league_points(&league_id),
            )
            .await?;
            ctx.persist().await?;
            ctx.emit(&league, admin_league_detail_lines)
        }

        AdminCmd::Transactions { filters } => {
            let query = TransactionQuery::from(filters);
            let ledger = if query.is_empty() {
                timed("admin_transactions", service.admin_transactions()).await
            } else {
                timed("search_transactions", service.search_transactions(query)).await
            };
            ctx.emit(ledger.as_slice(), |entries| entries.iter().map(ledger_line).collect())
        }

        AdminCmd::Finance => {
            let summary = timed("financial_summary", service.financial_summary()).await;
            ctx.emit(&summary, finance_lines)
        }
    }
}
