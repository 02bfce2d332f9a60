//! Reporting snapshots for the admin console.

use crate::cli::types::{LeagueId, TrendPeriod, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTrendDataPoint {
    pub period: TrendPeriod,
    pub value: u32,
}

/// Weekly retention for one signup cohort, as percentages. `None` marks weeks
/// that have not happened yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionCohort {
    pub cohort: String,
    pub new_users: u32,
    pub weekly_retention: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopLeague {
    pub id: LeagueId,
    pub name: String,
    pub participants: u32,
    pub prize_pool: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPlayer {
    pub id: UserId,
    pub name: String,
    pub avatar_url: String,
    pub total_winnings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub user_trends: Vec<UserTrendDataPoint>,
    pub retention_cohorts: Vec<RetentionCohort>,
    pub top_leagues: Vec<TopLeague>,
    pub top_players: Vec<TopPlayer>,
}
