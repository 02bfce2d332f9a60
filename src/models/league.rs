//! League records and the views built from them.

use crate::cli::types::{LeagueId, LeagueStatus, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Share of entry fees the platform keeps.
pub const PLATFORM_FEE_PERCENT: f64 = 10.0;

/// Share of entry fees paid back out through the prize pool.
pub const PAYOUT_PERCENT: f64 = 100.0 - PLATFORM_FEE_PERCENT;

/// Prize pool for `members` paid entries of `entry_fee` after the platform cut.
///
/// Multiplies before dividing so whole-shilling inputs give exact results
/// (`prize_pool_for(200.0, 1) == 180.0`).
pub fn prize_pool_for(entry_fee: f64, members: usize) -> f64 {
    entry_fee * members as f64 * PAYOUT_PERCENT / 100.0
}

/// A participant in a league.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: UserId,
    pub name: String,
    pub team_name: String,
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_current_user: Option<bool>,
}

/// User-facing league view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    pub entry_fee: f64,
    pub max_members: u32,
    pub members: Vec<Member>,
    pub is_private: bool,
    pub prize_pool: f64,
}

/// Minimal reference to the user who created a league.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorRef {
    pub id: UserId,
    pub name: String,
}

/// Admin console league view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLeague {
    pub id: LeagueId,
    pub name: String,
    pub creator: CreatorRef,
    pub entry_fee: f64,
    pub participants: u32,
    pub max_participants: u32,
    pub prize_pool: f64,
    pub status: LeagueStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub members: Vec<Member>,
}

/// One row of a ranked leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub rank: usize,
    #[serde(flatten)]
    pub member: Member,
}

/// Request to open a new league.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeague {
    pub name: String,
    pub entry_fee: f64,
    pub is_private: bool,
    pub max_members: u32,
}

/// Result of a successful join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinOutcome {
    pub message: String,
    pub league: League,
}

/// Stored league: the public fields plus the admin metadata.
///
/// The store holds exactly one of these per league; [`League`] and
/// [`AdminLeague`] are projections of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueRecord {
    pub id: LeagueId,
    pub name: String,
    pub entry_fee: f64,
    pub max_members: u32,
    pub members: Vec<Member>,
    pub is_private: bool,
    pub prize_pool: f64,
    pub creator: CreatorRef,
    pub status: LeagueStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl LeagueRecord {
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.max_members as usize
    }

    pub fn has_member(&self, user_id: &UserId) -> bool {
        self.members.iter().any(|m| &m.id == user_id)
    }

    /// Reset the prize pool from the current member count.
    pub fn recompute_prize_pool(&mut self) {
        self.prize_pool = prize_pool_for(self.entry_fee, self.members.len());
    }

    /// Entry fees collected before the platform cut.
    pub fn gross_entry_fees(&self) -> f64 {
        self.entry_fee * self.members.len() as f64
    }

    pub fn to_league(&self) -> League {
        League {
            id: self.id.clone(),
            name: self.name.clone(),
            entry_fee: self.entry_fee,
            max_members: self.max_members,
            members: self.members.clone(),
            is_private: self.is_private,
            prize_pool: self.prize_pool,
        }
    }

    pub fn to_admin_league(&self) -> AdminLeague {
        AdminLeague {
            id: self.id.clone(),
            name: self.name.clone(),
            creator: self.creator.clone(),
            entry_fee: self.entry_fee,
            participants: self.members.len() as u32,
            max_participants: self.max_members,
            prize_pool: self.prize_pool,
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
            members: self.members.clone(),
        }
    }
}

/// Sort members by points, highest first. Ties keep their current order.
pub fn sort_leaderboard(members: &mut [Member]) {
    members.sort_by(|a, b| b.points.cmp(&a.points));
}

/// Rank members in leaderboard order, starting at 1.
pub fn rank_members(mut members: Vec<Member>) -> Vec<Standing> {
    sort_leaderboard(&mut members);
    members
        .into_iter()
        .enumerate()
        .map(|(i, member)| Standing { rank: i + 1, member })
        .collect()
}
