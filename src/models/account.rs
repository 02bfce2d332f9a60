//! The acting user's profile, wallet and FPL data.

use crate::cli::types::{PlayerId, PlayerPosition, TransactionId, TransactionStatus, TransactionType, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub fpl_team_id: String,
    pub avatar_url: String,
    pub team_name: String,
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub fpl_team_id: Option<String>,
    pub avatar_url: Option<String>,
    pub team_name: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.fpl_team_id.is_none()
            && self.avatar_url.is_none()
            && self.team_name.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FplSummary {
    pub overall_points: u32,
    pub overall_rank: u64,
    pub total_players: u64,
}

/// Season statistics for a Premier League player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStat {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
    pub position: PlayerPosition,
    pub price: f64,
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saves: Option<u32>,
    pub selection_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletDetails {
    pub current_balance: f64,
    pub pending_winnings: f64,
}

/// A wallet ledger entry. `amount` is signed per [`TransactionType::signed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub date: DateTime<Utc>,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub status: TransactionStatus,
}
