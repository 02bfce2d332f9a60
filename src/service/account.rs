//! The acting user's profile, wallet and FPL data.

use super::FantasyService;
use crate::cli::types::TransactionType;
use crate::error::{NexusError, Result};
use crate::models::{FplSummary, PlayerStat, ProfileUpdate, Transaction, UserProfile, WalletDetails};
use chrono::Utc;
use tracing::info;

fn validate_amount(amount: f64) -> Result<()> {
    if !(amount.is_finite() && amount > 0.0) {
        return Err(NexusError::validation("amount", "must be a positive amount"));
    }
    Ok(())
}

fn validate_profile_update(update: &ProfileUpdate) -> Result<()> {
    if update.is_empty() {
        return Err(NexusError::validation("profile", "nothing to update"));
    }
    if let Some(name) = &update.name {
        if name.trim().is_empty() {
            return Err(NexusError::validation("name", "must not be empty"));
        }
    }
    if let Some(email) = &update.email {
        let email = email.trim();
        let well_formed = email
            .split_once('@')
            .map(|(user, domain)| !user.is_empty() && domain.contains('.'))
            .unwrap_or(false);
        if !well_formed {
            return Err(NexusError::validation("email", "must look like name@domain.tld"));
        }
    }
    if let Some(team_name) = &update.team_name {
        if team_name.trim().is_empty() {
            return Err(NexusError::validation("team name", "must not be empty"));
        }
    }
    Ok(())
}

impl FantasyService {
    pub async fn user_profile(&self) -> UserProfile {
        self.read(|store| store.current_user.clone()).await
    }

    /// Apply a partial profile update.
    ///
    /// Name, email and avatar are mirrored onto the user's admin record, and
    /// name and team name onto their league memberships.
    pub async fn update_user_profile(&self, update: ProfileUpdate) -> Result<UserProfile> {
        validate_profile_update(&update)?;

        self.write(|store| {
            let profile = &mut store.current_user;
            if let Some(name) = &update.name {
                profile.name = name.trim().to_string();
            }
            if let Some(email) = &update.email {
                profile.email = email.trim().to_string();
            }
            if let Some(fpl_team_id) = &update.fpl_team_id {
                profile.fpl_team_id = fpl_team_id.trim().to_string();
            }
            if let Some(avatar_url) = &update.avatar_url {
                profile.avatar_url = avatar_url.clone();
            }
            if let Some(team_name) = &update.team_name {
                profile.team_name = team_name.trim().to_string();
            }
            let profile = profile.clone();

            if let Some(admin) = store.admin_user_mut(&profile.id) {
                admin.name = profile.name.clone();
                admin.email = profile.email.clone();
                admin.avatar_url = profile.avatar_url.clone();
            }
            for member in store
                .leagues
                .iter_mut()
                .flat_map(|l| l.members.iter_mut())
                .filter(|m| m.id == profile.id)
            {
                member.name = profile.name.clone();
                member.team_name = profile.team_name.clone();
            }

            info!(user_id = %profile.id, "updated user profile");
            Ok(profile)
        })
        .await
    }

    pub async fn fpl_summary(&self) -> FplSummary {
        self.read(|store| store.fpl_summary.clone()).await
    }

    pub async fn player_stats(&self) -> Vec<PlayerStat> {
        self.read(|store| store.player_stats.clone()).await
    }

    pub async fn wallet_details(&self) -> WalletDetails {
        self.read(|store| store.wallet.clone()).await
    }

    /// The acting user's ledger, newest first.
    pub async fn transactions(&self) -> Vec<Transaction> {
        self.read(|store| store.transactions.clone()).await
    }

    /// Credit the acting user's wallet.
    pub async fn deposit(&self, amount: f64) -> Result<Transaction> {
        validate_amount(amount)?;

        let transaction = self
            .write(|store| {
                let user = store.current_user_ref();
                let (transaction, _) = store.post_transaction(
                    user,
                    TransactionType::Deposit,
                    amount,
                    "Wallet Deposit".to_string(),
                    Utc::now(),
                );
                info!(amount, balance = store.wallet.current_balance, "deposited funds");
                transaction
            })
            .await;
        Ok(transaction)
    }

    /// Debit the acting user's wallet. The balance can't go below zero.
    pub async fn withdraw(&self, amount: f64) -> Result<Transaction> {
        validate_amount(amount)?;

        self.write(|store| {
            let available = store.wallet.current_balance;
            if amount > available {
                return Err(NexusError::InsufficientFunds {
                    required: amount,
                    available,
                });
            }
            let user = store.current_user_ref();
            let (transaction, _) = store.post_transaction(
                user,
                TransactionType::Withdrawal,
                amount,
                "Wallet Withdrawal".to_string(),
                Utc::now(),
            );
            info!(amount, balance = store.wallet.current_balance, "withdrew funds");
            Ok(transaction)
        })
        .await
    }
}
