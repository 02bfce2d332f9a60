//! Entity store for FPL Nexus
//!
//! The store is a plain owned value holding every collection the service
//! exposes. It has no interior locking of its own: the façade in
//! [`crate::service`] wraps it and is the only thing that mutates it.
//! - `seed`: the demo data set the platform ships with

pub mod seed;


use crate::cli::types::{LeagueId, TransactionId, TransactionStatus, TransactionType, UserId};
use crate::models::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// All mutable platform state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityStore {
    pub current_user: UserProfile,
    pub leagues: Vec<LeagueRecord>,
    pub joined_league_ids: BTreeSet<LeagueId>,
    pub fpl_summary: FplSummary,
    pub player_stats: Vec<PlayerStat>,
    pub wallet: WalletDetails,
    pub transactions: Vec<Transaction>,
    pub admin_users: Vec<AdminUser>,
    pub admin_transactions: Vec<AdminTransaction>,
    pub fraud_alerts: Vec<FraudAlert>,
    pub homepage: HomepageContent,
    pub announcements: Vec<Announcement>,
    pub help_articles: Vec<HelpArticle>,
    pub analytics: AnalyticsData,
    pub settings: SystemSettingsData,
    /// Wallet balances of users other than the acting user.
    #[serde(default)]
    pub balances: BTreeMap<UserId, f64>,
    /// Leagues whose winnings have been credited.
    #[serde(default)]
    pub paid_out_league_ids: BTreeSet<LeagueId>,
    #[serde(default)]
    last_issued_id: i64,
}

impl EntityStore {
    /// Empty store for a single acting user.
    pub fn new(current_user: UserProfile) -> Self {
        Self {
            current_user,
            leagues: Vec::new(),
            joined_league_ids: BTreeSet::new(),
            fpl_summary: FplSummary {
                overall_points: 0,
                overall_rank: 0,
                total_players: 0,
            },
            player_stats: Vec::new(),
            wallet: WalletDetails {
                current_balance: 0.0,
                pending_winnings: 0.0,
            },
            transactions: Vec::new(),
            admin_users: Vec::new(),
            admin_transactions: Vec::new(),
            fraud_alerts: Vec::new(),
            homepage: HomepageContent {
                hero_title: String::new(),
                hero_subtitle: String::new(),
                banner_image_url: String::new(),
            },
            announcements: Vec::new(),
            help_articles: Vec::new(),
            analytics: AnalyticsData {
                user_trends: Vec::new(),
                retention_cohorts: Vec::new(),
                top_leagues: Vec::new(),
                top_players: Vec::new(),
            },
            settings: SystemSettingsData {
                api_keys: ApiKeys {
                    fpl: String::new(),
                    stripe_public: String::new(),
                    stripe_secret: String::new(),
                    mpesa_key: String::new(),
                    mpesa_secret: String::new(),
                },
                branding: BrandingSettings {
                    app_name: "FPL Nexus".to_string(),
                    primary_color: "#58A6FF".to_string(),
                    secondary_color: "#F778BA".to_string(),
                },
                backups: Vec::new(),
            },
            balances: BTreeMap::new(),
            paid_out_league_ids: BTreeSet::new(),
            last_issued_id: 0,
        }
    }

    pub fn league(&self, id: &LeagueId) -> Option<&LeagueRecord> {
        self.leagues.iter().find(|l| &l.id == id)
    }

    pub fn league_mut(&mut self, id: &LeagueId) -> Option<&mut LeagueRecord> {
        self.leagues.iter_mut().find(|l| &l.id == id)
    }

    pub fn admin_user_mut(&mut self, id: &UserId) -> Option<&mut AdminUser> {
        self.admin_users.iter_mut().find(|u| &u.id == id)
    }

    /// Whether the acting user belongs to the league, by the joined set or by membership.
    pub fn is_joined(&self, league: &LeagueRecord) -> bool {
        self.joined_league_ids.contains(&league.id) || league.has_member(&self.current_user.id)
    }

    /// Issue a timestamp-based ID such as `l1724140800000`.
    ///
    /// IDs are strictly increasing across all prefixes, so two records created
    /// in the same millisecond still get distinct IDs.
    pub fn issue_id(&mut self, prefix: &str, now: DateTime<Utc>) -> String {
        let next = now.timestamp_millis().max(self.last_issued_id + 1);
        self.last_issued_id = next;
        format!("{}{}", prefix, next)
    }

    /// Member record for the acting user.
    pub fn current_member(&self, points: u32) -> Member {
        Member {
            id: self.current_user.id.clone(),
            name: self.current_user.name.clone(),
            team_name: self.current_user.team_name.clone(),
            points,
            is_current_user: Some(true),
        }
    }

    /// Ledger reference for the acting user, preferring the admin record.
    pub fn current_user_ref(&self) -> UserRef {
        self.admin_users
            .iter()
            .find(|u| u.id == self.current_user.id)
            .map(UserRef::from)
            .unwrap_or_else(|| UserRef {
                id: self.current_user.id.clone(),
                name: self.current_user.name.clone(),
                avatar_url: self.current_user.avatar_url.clone(),
            })
    }

    /// Ledger reference for any user, falling back to a league member's name.
    pub fn user_ref(&self, user_id: &UserId) -> Option<UserRef> {
        if user_id == &self.current_user.id {
            return Some(self.current_user_ref());
        }
        if let Some(user) = self.admin_users.iter().find(|u| &u.id == user_id) {
            return Some(UserRef::from(user));
        }
        self.leagues
            .iter()
            .flat_map(|l| l.members.iter())
            .find(|m| &m.id == user_id)
            .map(|m| UserRef {
                id: m.id.clone(),
                name: m.name.clone(),
                avatar_url: String::new(),
            })
    }

    /// Wallet balance of any user; the acting user's comes from [`WalletDetails`].
    pub fn balance_of(&self, user_id: &UserId) -> f64 {
        if user_id == &self.current_user.id {
            self.wallet.current_balance
        } else {
            self.balances.get(user_id).copied().unwrap_or(0.0)
        }
    }

    /// Apply a money movement to `user`'s wallet and record it, newest first.
    ///
    /// `magnitude` is signed per [`TransactionType::signed`]. Every movement lands
    /// in the platform ledger; the acting user's also lands in their own ledger.
    /// Balance floors are the caller's concern. Returns the user-ledger entry
    /// and the platform-ledger entry, which carry distinct IDs.
    pub fn post_transaction(
        &mut self,
        user: UserRef,
        kind: TransactionType,
        magnitude: f64,
        description: String,
        now: DateTime<Utc>,
    ) -> (Transaction, AdminTransaction) {
        let amount = kind.signed(magnitude);
        let is_current = user.id == self.current_user.id;
        if is_current {
            self.wallet.current_balance += amount;
        } else {
            *self.balances.entry(user.id.clone()).or_insert(0.0) += amount;
        }

        let transaction = Transaction {
            id: TransactionId::new(self.issue_id("t", now)),
            date: now,
            description,
            amount,
            kind,
            status: TransactionStatus::Completed,
        };
        let ledger_entry = AdminTransaction {
            transaction: Transaction {
                id: TransactionId::new(self.issue_id("at", now)),
                ..transaction.clone()
            },
            user,
        };

        if is_current {
            self.transactions.insert(0, transaction.clone());
        }
        self.admin_transactions.insert(0, ledger_entry.clone());
        (transaction, ledger_entry)
    }

    /// Debit the acting user for a league entry.
    ///
    /// Entry never fails on funds, so the balance can go below zero here.
    pub fn charge_entry_fee(&mut self, league_name: &str, entry_fee: f64, now: DateTime<Utc>) {
        let user = self.current_user_ref();
        self.post_transaction(
            user,
            TransactionType::EntryFee,
            entry_fee,
            format!("League Entry: {}", league_name),
            now,
        );
    }

    /// Credit a league's prize pool to its leader, once per league.
    ///
    /// Returns the winnings entry, or `None` when the league is unknown, has no
    /// members or was already paid out. The acting user's pending winnings are
    /// settled into their balance.
    pub fn pay_out_league(&mut self, league_id: &LeagueId, now: DateTime<Utc>) -> Option<AdminTransaction> {
        if self.paid_out_league_ids.contains(league_id) {
            return None;
        }
        let league = self.league(league_id)?;
        let mut standings = league.members.clone();
        sort_leaderboard(&mut standings);
        let winner = standings.first()?;
        let user = self.user_ref(&winner.id)?;
        let (name, pool) = (league.name.clone(), league.prize_pool);

        if user.id == self.current_user.id {
            self.wallet.pending_winnings = (self.wallet.pending_winnings - pool).max(0.0);
        }
        self.paid_out_league_ids.insert(league_id.clone());
        let (_, ledger_entry) = self.post_transaction(
            user,
            TransactionType::Winnings,
            pool,
            format!("Winnings: {}", name),
            now,
        );
        Some(ledger_entry)
    }

    /// Distinct member IDs across every league.
    pub fn distinct_member_count(&self) -> usize {
        self.leagues
            .iter()
            .flat_map(|l| l.members.iter().map(|m| &m.id))
            .collect::<HashSet<_>>()
            .len()
    }

    /// The `limit` leagues with the largest prize pools.
    pub fn top_leagues(&self, limit: usize) -> Vec<TopLeague> {
        let mut ranked: Vec<&LeagueRecord> = self.leagues.iter().collect();
        ranked.sort_by(|a, b| {
            b.prize_pool
                .partial_cmp(&a.prize_pool)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
            .into_iter()
            .take(limit)
            .map(|l| TopLeague {
                id: l.id.clone(),
                name: l.name.clone(),
                participants: l.members.len() as u32,
                prize_pool: l.prize_pool,
            })
            .collect()
    }
}
