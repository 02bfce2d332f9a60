//! Admin console models: users, the platform ledger and finance summaries.

use super::account::Transaction;
use crate::cli::types::{AlertId, AlertLevel, TransactionType, UserId, UserRole, UserStatus};
use crate::models::league::PLATFORM_FEE_PERCENT;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub joined_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: UserId,
    pub name: String,
    pub avatar_url: String,
}

impl From<&AdminUser> for UserRef {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

/// Platform-wide ledger entry: a [`Transaction`] tagged with its user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub user: UserRef,
}

/// Result of an admin balance adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceAdjustment {
    pub transaction: AdminTransaction,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudAlert {
    pub id: AlertId,
    pub level: AlertLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: usize,
    pub active_leagues: usize,
    pub total_revenue: f64,
    pub total_transfers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_revenue: f64,
    pub fees_collected: f64,
    pub total_payouts: f64,
    pub net_profit: f64,
    pub fraud_alerts: Vec<FraudAlert>,
}

impl FinancialSummary {
    /// Summarize the platform ledger.
    ///
    /// Revenue is the magnitude of every entry-fee transaction regardless of
    /// status. Net profit equals the fees collected: winnings are paid out of
    /// the 90% prize pool, so they are reported but not subtracted.
    pub fn from_ledger(transactions: &[AdminTransaction], fraud_alerts: Vec<FraudAlert>) -> Self {
        let total_revenue: f64 = transactions
            .iter()
            .filter(|t| t.transaction.kind == TransactionType::EntryFee)
            .map(|t| t.transaction.amount.abs())
            .sum();
        let fees_collected = total_revenue * PLATFORM_FEE_PERCENT / 100.0;
        let total_payouts: f64 = transactions
            .iter()
            .filter(|t| t.transaction.kind == TransactionType::Winnings)
            .map(|t| t.transaction.amount)
            .sum();

        Self {
            total_revenue,
            fees_collected,
            total_payouts,
            net_profit: fees_collected,
            fraud_alerts,
        }
    }
}
