//! Unit tests for the service façade

use super::*;
use crate::cli::types::*;
use crate::core::filters::{TransactionQuery, UserQuery};
use crate::error::NexusError;
use crate::models::*;
use crate::store::seed::CURRENT_USER_ID;

fn service() -> FantasyService {
    let mut rng = StdRng::seed_from_u64(42);
    FantasyService::new(EntityStore::seeded(&mut rng), NoLatency).with_rng_seed(42)
}

fn lid(id: &str) -> LeagueId {
    LeagueId::new(id)
}

#[tokio::test]
async fn test_public_and_my_leagues() {
    let service = service();

    let public = service.public_leagues().await;
    assert!(public.iter().all(|l| !l.is_private));
    assert!(public.iter().all(|l| l.id != lid("l6")));

    let mine: Vec<LeagueId> = service.my_leagues().await.into_iter().map(|l| l.id).collect();
    assert_eq!(mine, vec![lid("l4"), lid("l6")]);
}

#[tokio::test]
async fn test_league_details_sorts_members() {
    let service = service();
    let league = service.league_details(&lid("l3")).await.unwrap();
    assert!(league.members.windows(2).all(|w| w[0].points >= w[1].points));

    assert!(service.league_details(&lid("missing")).await.is_none());
}

#[tokio::test]
async fn test_leaderboard_ranks_from_one() {
    let service = service();
    let standings = service.leaderboard(&lid("l2")).await.unwrap();
    assert_eq!(standings.len(), 15);
    assert_eq!(standings[0].rank, 1);
    assert_eq!(standings[14].rank, 15);

    let err = service.leaderboard(&lid("nope")).await.unwrap_err();
    assert!(matches!(err, NexusError::LeagueNotFound { .. }));
}

#[tokio::test]
async fn test_join_league_updates_members_pool_and_wallet() {
    let service = service();
    let before = service.wallet_details().await.current_balance;

    let outcome = service.join_league(&lid("l2")).await.unwrap();
    assert_eq!(outcome.message, "Successfully joined Ksh 100 Pro League #2!");
    assert_eq!(outcome.league.members.len(), 16);
    assert_eq!(outcome.league.prize_pool, 100.0 * 16.0 * 0.9);

    let me = outcome.league.members.last().unwrap();
    assert_eq!(me.id.as_str(), CURRENT_USER_ID);
    assert_eq!(me.is_current_user, Some(true));
    assert!(me.points < 80);

    assert_eq!(service.wallet_details().await.current_balance, before - 100.0);

    let ledger = service.transactions().await;
    assert_eq!(ledger[0].kind, TransactionType::EntryFee);
    assert_eq!(ledger[0].amount, -100.0);
    assert_eq!(ledger[0].description, "League Entry: Ksh 100 Pro League #2");

    let platform = service.admin_transactions().await;
    assert_eq!(platform[0].user.id.as_str(), CURRENT_USER_ID);

    assert!(service.my_leagues().await.iter().any(|l| l.id == lid("l2")));
}

#[tokio::test]
async fn test_join_failures_leave_store_unchanged() {
    let service = service();
    let before = service.snapshot().await;

    let err = service.join_league(&lid("ghost")).await.unwrap_err();
    assert_eq!(err.to_string(), "League not found.");

    let err = service.join_league(&lid("l1")).await.unwrap_err();
    assert_eq!(err.to_string(), "League is full.");

    let err = service.join_league(&lid("l4")).await.unwrap_err();
    assert_eq!(err.to_string(), "Already in this league.");

    assert_eq!(service.snapshot().await, before);
}

#[tokio::test]
async fn test_short_wallet_does_not_block_entry() {
    let mut store = EntityStore::seeded(&mut StdRng::seed_from_u64(1));
    store.wallet.current_balance = 50.0;
    let service = FantasyService::new(store, NoLatency);

    let outcome = service.join_league(&lid("l2")).await.unwrap();
    assert_eq!(outcome.league.members.len(), 16);
    assert_eq!(service.wallet_details().await.current_balance, -50.0);

    let league = service
        .create_league(NewLeague {
            name: "Whales".to_string(),
            entry_fee: 50_000.0,
            is_private: false,
            max_members: 10,
        })
        .await
        .unwrap();
    assert_eq!(league.members.len(), 1);
    assert_eq!(service.wallet_details().await.current_balance, -50_050.0);
    assert_eq!(service.transactions().await[0].amount, -50_000.0);
}

#[tokio::test]
async fn test_create_league_seeds_creator() {
    let service = service();
    let league = service
        .create_league(NewLeague {
            name: "Office Bragging Rights".to_string(),
            entry_fee: 200.0,
            is_private: true,
            max_members: 10,
        })
        .await
        .unwrap();

    assert!(league.id.as_str().starts_with('l'));
    assert_eq!(league.members.len(), 1);
    assert_eq!(league.members[0].points, 0);
    assert_eq!(league.prize_pool, 180.0);
    assert!(league.is_private);

    let admin_view = service.admin_league_details(&league.id).await.unwrap();
    assert_eq!(admin_view.status, LeagueStatus::Open);
    assert_eq!(admin_view.creator.id.as_str(), CURRENT_USER_ID);

    let err = service.join_league(&league.id).await.unwrap_err();
    assert!(matches!(err, NexusError::AlreadyMember { .. }));
}

#[tokio::test]
async fn test_create_league_validation() {
    let service = service();
    let request = |name: &str, fee: f64, max: u32| NewLeague {
        name: name.to_string(),
        entry_fee: fee,
        is_private: false,
        max_members: max,
    };

    for bad in [request("  ", 100.0, 10), request("A", 0.0, 10), request("A", 100.0, 1)] {
        let err = service.create_league(bad).await.unwrap_err();
        assert!(matches!(err, NexusError::Validation { .. }));
    }
}

#[tokio::test]
async fn test_created_league_ids_are_distinct() {
    let service = service();
    let mut ids = Vec::new();
    for name in ["A", "B", "C"] {
        let league = service
            .create_league(NewLeague {
                name: name.to_string(),
                entry_fee: 10.0,
                is_private: false,
                max_members: 5,
            })
            .await
            .unwrap();
        ids.push(league.id);
    }
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn test_update_profile_mirrors_admin_record() {
    let service = service();
    let profile = service
        .update_user_profile(ProfileUpdate {
            name: Some("Alex M.".to_string()),
            team_name: Some("Mercer United".to_string()),
            ..ProfileUpdate::default()
        })
        .await
        .unwrap();
    assert_eq!(profile.name, "Alex M.");

    let users = service.users().await;
    let record = users.iter().find(|u| u.id == profile.id).unwrap();
    assert_eq!(record.name, "Alex M.");

    let l4 = service.league_details(&lid("l4")).await.unwrap();
    let me = l4.members.iter().find(|m| m.id == profile.id).unwrap();
    assert_eq!(me.team_name, "Mercer United");
}

#[tokio::test]
async fn test_update_profile_rejects_bad_input() {
    let service = service();
    let err = service
        .update_user_profile(ProfileUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, NexusError::Validation { .. }));

    let err = service
        .update_user_profile(ProfileUpdate {
            email: Some("not-an-email".to_string()),
            ..ProfileUpdate::default()
        })
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("Invalid email"));
}

#[tokio::test]
async fn test_dashboard_stats() {
    let service = service();
    let stats = service.dashboard_stats().await;
    assert_eq!(stats.total_users, 82);
    assert_eq!(stats.active_leagues, 6);
    assert_eq!(stats.total_transfers, 6);
    assert_eq!(stats.total_revenue, 2000.0 + 1500.0 + 3600.0 + 3500.0 + 19000.0 + 800.0);
}

#[tokio::test]
async fn test_user_administration() {
    let service = service();

    let banned = service
        .search_users(UserQuery::default().status(Some(UserStatus::Banned)))
        .await;
    assert_eq!(banned.len(), 2);

    let jane = UserId::new("au2");
    let updated = service.update_user_role(&jane, UserRole::Admin).await.unwrap();
    assert_eq!(updated.role, UserRole::Admin);
    let updated = service.update_user_status(&jane, UserStatus::Banned).await.unwrap();
    assert_eq!(updated.status, UserStatus::Banned);

    let err = service
        .update_user_status(&UserId::new("au404"), UserStatus::Active)
        .await
        .unwrap_err();
    assert!(matches!(err, NexusError::UserNotFound { .. }));
}

#[tokio::test]
async fn test_payouts_require_completed_league() {
    let service = service();

    let err = service
        .update_league_status(&lid("l2"), LeagueStatus::PayoutsApproved)
        .await
        .unwrap_err();
    assert!(matches!(err, NexusError::InvalidStatusTransition { .. }));

    let league = service
        .update_league_status(&lid("l1"), LeagueStatus::PayoutsApproved)
        .await
        .unwrap();
    assert_eq!(league.status, LeagueStatus::PayoutsApproved);

    // Other transitions are unconstrained.
    let league = service
        .update_league_status(&lid("l5"), LeagueStatus::Open)
        .await
        .unwrap();
    assert_eq!(league.status, LeagueStatus::Open);
}

fn with_leader(league_id: &str, leader: &str) -> FantasyService {
    let mut store = EntityStore::seeded(&mut StdRng::seed_from_u64(3));
    if let Some(league) = store.league_mut(&lid(league_id)) {
        for member in league.members.iter_mut() {
            member.points = if member.id.as_str() == leader { 99 } else { 10 };
        }
    }
    FantasyService::new(store, NoLatency)
}

#[tokio::test]
async fn test_approving_payouts_credits_acting_user() {
    let service = with_leader("l6", CURRENT_USER_ID);
    let pool = service.league_details(&lid("l6")).await.unwrap().prize_pool;
    let before = service.wallet_details().await;

    service
        .update_league_status(&lid("l6"), LeagueStatus::PayoutsApproved)
        .await
        .unwrap();

    let after = service.wallet_details().await;
    assert_eq!(after.current_balance, before.current_balance + pool);
    assert_eq!(after.pending_winnings, (before.pending_winnings - pool).max(0.0));

    let newest = &service.transactions().await[0];
    assert_eq!(newest.kind, TransactionType::Winnings);
    assert_eq!(newest.amount, pool);
    assert_eq!(newest.description, "Winnings: Weekend Warriors (Private)");

    let summary = service.financial_summary().await;
    let platform = service.admin_transactions().await;
    assert_eq!(platform[0].transaction.kind, TransactionType::Winnings);
    assert!(summary.total_payouts >= pool);
}

#[tokio::test]
async fn test_payouts_are_credited_once() {
    let service = with_leader("l6", "u100");
    let own_ledger = service.transactions().await;
    for status in [
        LeagueStatus::PayoutsApproved,
        LeagueStatus::Completed,
        LeagueStatus::PayoutsApproved,
    ] {
        service.update_league_status(&lid("l6"), status).await.unwrap();
    }

    let store = service.snapshot().await;
    let winnings: Vec<_> = store
        .admin_transactions
        .iter()
        .filter(|t| t.transaction.description == "Winnings: Weekend Warriors (Private)")
        .collect();
    assert_eq!(winnings.len(), 1);
    assert_eq!(winnings[0].user.id.as_str(), "u100");
    assert_eq!(winnings[0].user.name, "Friend 1");

    let pool = store.league(&lid("l6")).unwrap().prize_pool;
    assert_eq!(store.balance_of(&UserId::new("u100")), pool);
    assert_eq!(store.transactions, own_ledger);
}

#[tokio::test]
async fn test_seeded_paid_league_is_not_paid_again() {
    let service = service();
    let before = service.admin_transactions().await.len();
    service
        .update_league_status(&lid("l5"), LeagueStatus::Completed)
        .await
        .unwrap();
    service
        .update_league_status(&lid("l5"), LeagueStatus::PayoutsApproved)
        .await
        .unwrap();
    assert_eq!(service.admin_transactions().await.len(), before);
}

#[tokio::test]
async fn test_deposit_and_withdraw() {
    let service = service();
    let start = service.wallet_details().await.current_balance;

    let deposit = service.deposit(500.0).await.unwrap();
    assert_eq!(deposit.kind, TransactionType::Deposit);
    assert_eq!(deposit.amount, 500.0);
    assert_eq!(deposit.description, "Wallet Deposit");

    let withdrawal = service.withdraw(300.0).await.unwrap();
    assert_eq!(withdrawal.kind, TransactionType::Withdrawal);
    assert_eq!(withdrawal.amount, -300.0);

    assert_eq!(service.wallet_details().await.current_balance, start + 200.0);
    let ledger = service.transactions().await;
    assert_eq!(ledger[0].id, withdrawal.id);
    assert_eq!(ledger[1].id, deposit.id);

    let platform = service.admin_transactions().await;
    assert_eq!(platform[0].transaction.kind, TransactionType::Withdrawal);
    assert_eq!(platform[0].user.id.as_str(), CURRENT_USER_ID);
}

#[tokio::test]
async fn test_withdraw_cannot_overdraw() {
    let service = service();
    let before = service.snapshot().await;
    let balance = before.wallet.current_balance;

    let err = service.withdraw(balance + 1.0).await.unwrap_err();
    match err {
        NexusError::InsufficientFunds { required, available } => {
            assert_eq!(required, balance + 1.0);
            assert_eq!(available, balance);
        }
        other => panic!("Expected InsufficientFunds, got {:?}", other),
    }

    for bad in [0.0, -10.0, f64::NAN] {
        assert!(matches!(
            service.deposit(bad).await.unwrap_err(),
            NexusError::Validation { .. }
        ));
    }
    assert_eq!(service.snapshot().await, before);
}

#[tokio::test]
async fn test_adjust_balance() {
    let service = service();
    let jane = UserId::new("au2");

    let credit = service
        .adjust_balance(&jane, 1500.0, Some("manual credit".to_string()))
        .await
        .unwrap();
    assert_eq!(credit.balance, 1500.0);
    assert_eq!(credit.transaction.transaction.kind, TransactionType::Deposit);
    assert_eq!(credit.transaction.user.name, "Jane Doe");

    let debit = service.adjust_balance(&jane, -500.0, None).await.unwrap();
    assert_eq!(debit.balance, 1000.0);
    assert_eq!(debit.transaction.transaction.amount, -500.0);
    assert_eq!(debit.transaction.transaction.description, "Admin balance adjustment");

    let err = service.adjust_balance(&jane, -1000.01, None).await.unwrap_err();
    assert!(matches!(err, NexusError::InsufficientFunds { .. }));

    let err = service.adjust_balance(&UserId::new("au404"), 10.0, None).await.unwrap_err();
    assert!(matches!(err, NexusError::UserNotFound { .. }));

    let err = service.adjust_balance(&jane, 0.0, None).await.unwrap_err();
    assert!(matches!(err, NexusError::Validation { .. }));

    // Jane's movements stay out of the acting user's ledger.
    assert!(service
        .transactions()
        .await
        .iter()
        .all(|t| t.description != "manual credit"));
}

#[tokio::test]
async fn test_adjust_balance_for_acting_user_moves_wallet() {
    let service = service();
    let me = UserId::new(CURRENT_USER_ID);
    let before = service.wallet_details().await.current_balance;

    let adjustment = service.adjust_balance(&me, 250.0, None).await.unwrap();
    assert_eq!(adjustment.balance, before + 250.0);
    assert_eq!(service.wallet_details().await.current_balance, before + 250.0);
    assert_eq!(service.transactions().await[0].amount, 250.0);
}

#[tokio::test]
async fn test_recalculate_points_keeps_members() {
    let service = service();
    let before = service.snapshot().await;
    let before_ids: Vec<UserId> = before.leagues[2].members.iter().map(|m| m.id.clone()).collect();

    let league = service.recalculate_league_points(&lid("l3")).await.unwrap();
    let after_ids: Vec<UserId> = league.members.iter().map(|m| m.id.clone()).collect();
    assert_eq!(after_ids, before_ids);
    assert!(league.members.iter().all(|m| m.points < super::admin::RECALC_POINTS_MAX));
}

#[tokio::test]
async fn test_transaction_search_and_financials() {
    let service = service();

    let fees = service
        .search_transactions(TransactionQuery::default().kind(Some(TransactionType::EntryFee)))
        .await;
    assert!(fees.iter().all(|t| t.transaction.kind == TransactionType::EntryFee));

    let summary = service.financial_summary().await;
    let revenue: f64 = fees.iter().map(|t| t.transaction.amount.abs()).sum();
    assert_eq!(summary.total_revenue, revenue);
    assert_eq!(summary.net_profit, summary.fees_collected);
    assert_eq!(summary.fraud_alerts.len(), 3);
}

#[tokio::test]
async fn test_reads_are_copies() {
    let service = service();
    let mut leagues = service.public_leagues().await;
    leagues[0].members.clear();
    leagues[0].name = "Tampered".to_string();

    let fresh = service.public_leagues().await;
    assert_ne!(fresh[0].name, "Tampered");
    assert!(!fresh[0].members.is_empty());
}

#[tokio::test]
async fn test_announcement_upsert_and_delete() {
    let service = service();
    let original = service.announcements().await;

    let updated = service
        .save_announcement(AnnouncementDraft {
            id: Some(AnnouncementId::new("an2")),
            title: "New Payout Options".to_string(),
            content: "Now with bank transfers.".to_string(),
            status: AnnouncementStatus::Draft,
        })
        .await
        .unwrap();
    assert_eq!(updated.date, original[1].date);
    assert_eq!(service.announcements().await.len(), 3);

    let created = service
        .save_announcement(AnnouncementDraft {
            id: None,
            title: "Season kickoff".to_string(),
            content: "Gameweek 1 is live.".to_string(),
            status: AnnouncementStatus::Published,
        })
        .await
        .unwrap();
    assert!(created.id.as_str().starts_with("an"));
    assert_eq!(service.announcements().await[0].id, created.id);

    service.delete_announcement(&AnnouncementId::new("an2")).await.unwrap();
    let ids: Vec<String> = service
        .announcements()
        .await
        .into_iter()
        .map(|a| a.id.to_string())
        .collect();
    assert_eq!(ids, vec![created.id.to_string(), "an1".to_string(), "an3".to_string()]);

    let err = service
        .delete_announcement(&AnnouncementId::new("an2"))
        .await
        .unwrap_err();
    assert!(matches!(err, NexusError::AnnouncementNotFound { .. }));

    let err = service
        .save_announcement(AnnouncementDraft {
            id: None,
            title: " ".to_string(),
            content: String::new(),
            status: AnnouncementStatus::Draft,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, NexusError::Validation { .. }));
}

#[tokio::test]
async fn test_help_article_upsert_and_delete() {
    let service = service();
    let before = service.help_articles().await;

    let saved = service
        .save_help_article(HelpArticleDraft {
            id: Some(HelpArticleId::new("ha1")),
            question: before[0].question.clone(),
            answer: "Updated answer.".to_string(),
            category: before[0].category.clone(),
        })
        .await
        .unwrap();
    assert!(saved.last_updated > before[0].last_updated);

    service.delete_help_article(&HelpArticleId::new("ha3")).await.unwrap();
    let ids: Vec<String> = service
        .help_articles()
        .await
        .into_iter()
        .map(|a| a.id.to_string())
        .collect();
    assert_eq!(ids, vec!["ha1", "ha2", "ha4"]);

    let err = service
        .delete_help_article(&HelpArticleId::new("ha3"))
        .await
        .unwrap_err();
    assert!(matches!(err, NexusError::HelpArticleNotFound { .. }));
}

#[tokio::test]
async fn test_homepage_update() {
    let service = service();
    let mut content = service.homepage_content().await;
    content.hero_title = "Win big this gameweek".to_string();

    let saved = service.update_homepage_content(content.clone()).await.unwrap();
    assert_eq!(saved, content);

    content.hero_title = String::new();
    assert!(service.update_homepage_content(content).await.is_err());
}

#[tokio::test]
async fn test_analytics_top_leagues_are_live() {
    let service = service();
    let ids: Vec<LeagueId> = service
        .analytics()
        .await
        .top_leagues
        .into_iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(ids, vec![lid("l5"), lid("l3"), lid("l4"), lid("l1"), lid("l2")]);

    service.join_league(&lid("l2")).await.unwrap();
    let top = service.analytics().await.top_leagues;
    let l2 = top.iter().find(|l| l.id == lid("l2")).unwrap();
    assert_eq!(l2.participants, 16);
}

#[tokio::test]
async fn test_settings_and_backups() {
    let service = service();
    let mut branding = service.system_settings().await.branding;
    branding.primary_color = "blue".to_string();
    let err = service
        .update_system_settings(SettingsUpdate {
            branding: Some(branding.clone()),
            ..SettingsUpdate::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, NexusError::Validation { .. }));

    branding.primary_color = "#112233".to_string();
    let settings = service
        .update_system_settings(SettingsUpdate {
            branding: Some(branding),
            ..SettingsUpdate::default()
        })
        .await
        .unwrap();
    assert_eq!(settings.branding.primary_color, "#112233");

    let backup = service.create_backup().await;
    assert!(backup.id.as_str().starts_with("bkp"));
    assert!(backup.size.starts_with("15.") || backup.size == "16.0 MB");
    assert!(backup.size.ends_with(" MB"));
    assert_eq!(service.system_settings().await.backups[0].id, backup.id);

    service.delete_backup(&BackupId::new("bkp2")).await.unwrap();
    let err = service.delete_backup(&BackupId::new("bkp2")).await.unwrap_err();
    assert!(matches!(err, NexusError::BackupNotFound { .. }));
    assert_eq!(service.system_settings().await.backups.len(), 3);
}
