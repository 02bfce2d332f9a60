//! League browsing, joining and creation.

use super::FantasyService;
use crate::cli::types::{LeagueId, LeagueStatus};
use crate::error::{NexusError, Result};
use crate::models::{
    rank_members, sort_leaderboard, CreatorRef, JoinOutcome, League, LeagueRecord, NewLeague,
    Standing,
};
use crate::store::seed::SEED_POINTS_MAX;
use chrono::{Duration, Utc};
use tracing::info;

pub const MIN_LEAGUE_MEMBERS: u32 = 2;
pub const MAX_LEAGUE_MEMBERS: u32 = 100;

/// Length of a league from creation to its scheduled end.
pub const LEAGUE_DURATION_DAYS: i64 = 2;

fn not_found(league_id: &LeagueId) -> NexusError {
    NexusError::LeagueNotFound {
        league_id: league_id.to_string(),
    }
}

fn validate_new_league(request: &NewLeague) -> Result<()> {
    if request.name.trim().is_empty() {
        return Err(NexusError::validation("league name", "must not be empty"));
    }
    if !(request.entry_fee.is_finite() && request.entry_fee > 0.0) {
        return Err(NexusError::validation(
            "entry fee",
            "must be a positive amount",
        ));
    }
    if !(MIN_LEAGUE_MEMBERS..=MAX_LEAGUE_MEMBERS).contains(&request.max_members) {
        return Err(NexusError::validation(
            "max members",
            format!(
                "must be between {} and {}",
                MIN_LEAGUE_MEMBERS, MAX_LEAGUE_MEMBERS
            ),
        ));
    }
    Ok(())
}

impl FantasyService {
    /// Leagues anyone can browse and join.
    pub async fn public_leagues(&self) -> Vec<League> {
        self.read(|store| {
            store
                .leagues
                .iter()
                .filter(|l| !l.is_private)
                .map(LeagueRecord::to_league)
                .collect()
        })
        .await
    }

    /// Leagues the acting user belongs to.
    pub async fn my_leagues(&self) -> Vec<League> {
        self.read(|store| {
            store
                .leagues
                .iter()
                .filter(|l| store.is_joined(l))
                .map(LeagueRecord::to_league)
                .collect()
        })
        .await
    }

    /// A league with its members in leaderboard order, or `None` for an unknown ID.
    pub async fn league_details(&self, league_id: &LeagueId) -> Option<League> {
        self.read(|store| {
            store.league(league_id).map(|record| {
                let mut league = record.to_league();
                sort_leaderboard(&mut league.members);
                league
            })
        })
        .await
    }

    /// Ranked standings for a league.
    pub async fn leaderboard(&self, league_id: &LeagueId) -> Result<Vec<Standing>> {
        self.read(|store| {
            store
                .league(league_id)
                .map(|record| rank_members(record.members.clone()))
                .ok_or_else(|| not_found(league_id))
        })
        .await
    }

    /// Add the acting user to a league and debit its entry fee.
    ///
    /// Checks run in order: unknown league, league full, already a member.
    /// Any failure leaves the store untouched. The wallet is not a gate: a
    /// short balance goes negative.
    pub async fn join_league(&self, league_id: &LeagueId) -> Result<JoinOutcome> {
        let points = self.sample_points(SEED_POINTS_MAX);

        self.write(|store| {
            let league = store.league(league_id).ok_or_else(|| not_found(league_id))?;
            if league.is_full() {
                return Err(NexusError::LeagueFull {
                    league_id: league_id.to_string(),
                });
            }
            if store.is_joined(league) {
                return Err(NexusError::AlreadyMember {
                    league_id: league_id.to_string(),
                });
            }
            let entry_fee = league.entry_fee;

            let member = store.current_member(points);
            let league = store
                .league_mut(league_id)
                .ok_or_else(|| not_found(league_id))?;
            league.members.push(member);
            league.recompute_prize_pool();
            let joined = league.to_league();

            store.joined_league_ids.insert(league_id.clone());
            store.charge_entry_fee(&joined.name, entry_fee, Utc::now());

            info!(
                league_id = %league_id,
                members = joined.members.len(),
                prize_pool = joined.prize_pool,
                "joined league"
            );
            Ok(JoinOutcome {
                message: format!("Successfully joined {}!", joined.name),
                league: joined,
            })
        })
        .await
    }

    /// Open a new league with the acting user as its first member.
    pub async fn create_league(&self, request: NewLeague) -> Result<League> {
        validate_new_league(&request)?;

        let created = self.write(|store| {
            let now = Utc::now();
            let id = LeagueId::new(store.issue_id("l", now));
            let mut league = LeagueRecord {
                id: id.clone(),
                name: request.name.trim().to_string(),
                entry_fee: request.entry_fee,
                max_members: request.max_members,
                members: vec![store.current_member(0)],
                is_private: request.is_private,
                prize_pool: 0.0,
                creator: CreatorRef {
                    id: store.current_user.id.clone(),
                    name: store.current_user.name.clone(),
                },
                status: LeagueStatus::Open,
                start_date: now,
                end_date: now + Duration::days(LEAGUE_DURATION_DAYS),
            };
            league.recompute_prize_pool();
            let created = league.to_league();

            store.leagues.push(league);
            store.joined_league_ids.insert(id.clone());
            store.charge_entry_fee(&created.name, created.entry_fee, now);

            info!(
                league_id = %id,
                name = %created.name,
                entry_fee = created.entry_fee,
                private = created.is_private,
                "created league"
            );
            created
        })
        .await;
        Ok(created)
    }
}
