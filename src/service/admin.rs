//! Admin console operations: users, leagues, the platform ledger and finance.

use super::FantasyService;
use crate::cli::types::{LeagueId, LeagueStatus, TransactionType, UserId, UserRole, UserStatus};
use crate::core::filters::{TransactionQuery, UserQuery};
use crate::error::{NexusError, Result};
use crate::models::{
    sort_leaderboard, AdminLeague, AdminTransaction, AdminUser, BalanceAdjustment, DashboardStats,
    FinancialSummary, LeagueRecord,
};
use chrono::Utc;
use rand::Rng;
use tracing::{info, warn};

/// Exclusive upper bound for recalculated member points.
pub const RECALC_POINTS_MAX: u32 = 100;

fn user_not_found(user_id: &UserId) -> NexusError {
    NexusError::UserNotFound {
        user_id: user_id.to_string(),
    }
}

fn league_not_found(league_id: &LeagueId) -> NexusError {
    NexusError::LeagueNotFound {
        league_id: league_id.to_string(),
    }
}

/// Payouts can only be approved once a league has completed.
fn check_transition(league: &LeagueRecord, to: LeagueStatus) -> Result<()> {
    if to == LeagueStatus::PayoutsApproved && league.status != LeagueStatus::Completed {
        return Err(NexusError::InvalidStatusTransition {
            league_id: league.id.to_string(),
            from: league.status.to_string(),
            to: to.to_string(),
        });
    }
    Ok(())
}

impl FantasyService {
    /// Headline numbers for the admin dashboard.
    pub async fn dashboard_stats(&self) -> DashboardStats {
        self.read(|store| DashboardStats {
            total_users: store.distinct_member_count(),
            active_leagues: store.leagues.len(),
            total_revenue: store.leagues.iter().map(LeagueRecord::gross_entry_fees).sum(),
            total_transfers: store.transactions.len(),
        })
        .await
    }

    pub async fn users(&self) -> Vec<AdminUser> {
        self.read(|store| store.admin_users.clone()).await
    }

    pub async fn search_users(&self, query: UserQuery) -> Vec<AdminUser> {
        self.read(|store| {
            store
                .admin_users
                .iter()
                .filter(|u| query.matches(u))
                .cloned()
                .collect()
        })
        .await
    }

    pub async fn update_user_status(&self, user_id: &UserId, status: UserStatus) -> Result<AdminUser> {
        self.write(|store| {
            let user = store
                .admin_user_mut(user_id)
                .ok_or_else(|| user_not_found(user_id))?;
            user.status = status;
            if status == UserStatus::Banned {
                warn!(user_id = %user_id, "user banned");
            } else {
                info!(user_id = %user_id, status = %status, "updated user status");
            }
            Ok(user.clone())
        })
        .await
    }

    pub async fn update_user_role(&self, user_id: &UserId, role: UserRole) -> Result<AdminUser> {
        self.write(|store| {
            let user = store
                .admin_user_mut(user_id)
                .ok_or_else(|| user_not_found(user_id))?;
            user.role = role;
            info!(user_id = %user_id, role = %role, "updated user role");
            Ok(user.clone())
        })
        .await
    }

    pub async fn admin_leagues(&self) -> Vec<AdminLeague> {
        self.read(|store| store.leagues.iter().map(LeagueRecord::to_admin_league).collect())
            .await
    }

    /// Admin view of a league with members in leaderboard order.
    pub async fn admin_league_details(&self, league_id: &LeagueId) -> Option<AdminLeague> {
        self.read(|store| {
            store.league(league_id).map(|record| {
                let mut league = record.to_admin_league();
                sort_leaderboard(&mut league.members);
                league
            })
        })
        .await
    }

    /// Move a league to `status`.
    ///
    /// Approving payouts requires the league to be completed first; every
    /// other transition is allowed. Approval credits the prize pool to the
    /// league leader, once per league.
    pub async fn update_league_status(
        &self,
        league_id: &LeagueId,
        status: LeagueStatus,
    ) -> Result<AdminLeague> {
        self.write(|store| {
            let league = store
                .league_mut(league_id)
                .ok_or_else(|| league_not_found(league_id))?;
            check_transition(league, status)?;

            let from = league.status;
            league.status = status;
            let updated = league.to_admin_league();
            info!(league_id = %league_id, from = %from, to = %status, "updated league status");

            if status == LeagueStatus::PayoutsApproved {
                if let Some(entry) = store.pay_out_league(league_id, Utc::now()) {
                    info!(
                        league_id = %league_id,
                        user_id = %entry.user.id,
                        amount = entry.transaction.amount,
                        "paid out league winnings"
                    );
                }
            }
            Ok(updated)
        })
        .await
    }

    /// Resample every member's points, keeping the member set and order.
    pub async fn recalculate_league_points(&self, league_id: &LeagueId) -> Result<AdminLeague> {
        self.write(|store| {
            let league = store
                .league_mut(league_id)
                .ok_or_else(|| league_not_found(league_id))?;

            let mut rng = self.rng();
            for member in league.members.iter_mut() {
                member.points = rng.gen_range(0..RECALC_POINTS_MAX);
            }
            drop(rng);

            info!(
                league_id = %league_id,
                members = league.members.len(),
                "recalculated league points"
            );
            Ok(league.to_admin_league())
        })
        .await
    }

    /// Credit (positive `delta`) or debit (negative) a user's wallet.
    ///
    /// A debit can't take the balance below zero. The movement is recorded
    /// as a deposit or withdrawal with `reason` as its description.
    pub async fn adjust_balance(
        &self,
        user_id: &UserId,
        delta: f64,
        reason: Option<String>,
    ) -> Result<BalanceAdjustment> {
        if !delta.is_finite() || delta == 0.0 {
            return Err(NexusError::validation("balance adjustment", "must be a non-zero amount"));
        }

        self.write(|store| {
            if !store.admin_users.iter().any(|u| &u.id == user_id) {
                return Err(user_not_found(user_id));
            }
            let user = store.user_ref(user_id).ok_or_else(|| user_not_found(user_id))?;
            let available = store.balance_of(user_id);
            if available + delta < 0.0 {
                return Err(NexusError::InsufficientFunds {
                    required: delta.abs(),
                    available,
                });
            }

            let kind = if delta > 0.0 {
                TransactionType::Deposit
            } else {
                TransactionType::Withdrawal
            };
            let description = reason
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| "Admin balance adjustment".to_string());
            let (_, transaction) = store.post_transaction(user, kind, delta, description, Utc::now());
            let balance = store.balance_of(user_id);

            info!(user_id = %user_id, delta, balance, "adjusted user balance");
            Ok(BalanceAdjustment {
                transaction,
                balance,
            })
        })
        .await
    }

    /// Platform ledger, newest first.
    pub async fn admin_transactions(&self) -> Vec<AdminTransaction> {
        self.read(|store| store.admin_transactions.clone()).await
    }

    pub async fn search_transactions(&self, query: TransactionQuery) -> Vec<AdminTransaction> {
        self.read(|store| {
            store
                .admin_transactions
                .iter()
                .filter(|t| query.matches(t))
                .cloned()
                .collect()
        })
        .await
    }

    pub async fn financial_summary(&self) -> FinancialSummary {
        self.read(|store| {
            FinancialSummary::from_ledger(&store.admin_transactions, store.fraud_alerts.clone())
        })
        .await
    }
}
