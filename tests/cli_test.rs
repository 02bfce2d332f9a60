//! Integration tests for CLI argument parsing

use clap::Parser;
use fpl_nexus::cli::{AccountCmd, AdminCmd, Commands, LeaguesCmd, Nexus, SystemCmd};
use fpl_nexus::cli::types::{LeagueStatus, TransactionType, UserStatus};
use std::path::PathBuf;

#[test]
fn test_parse_join_with_global_flags() {
    let app = Nexus::try_parse_from([
        "fpl-nexus",
        "--json",
        "leagues",
        "join",
        "l2",
        "--no-latency",
        "--state",
        "/tmp/state.json",
    ])
    .unwrap();

    assert!(app.global.json);
    assert!(app.global.no_latency);
    assert!(!app.global.fresh);
    assert_eq!(app.global.state, Some(PathBuf::from("/tmp/state.json")));
    match app.command {
        Commands::Leagues {
            cmd: LeaguesCmd::Join { league_id },
        } => assert_eq!(league_id.as_str(), "l2"),
        other => panic!("Expected leagues join, got {:?}", other),
    }
}

#[test]
fn test_parse_create_defaults() {
    let app = Nexus::try_parse_from([
        "fpl-nexus",
        "leagues",
        "create",
        "--name",
        "Office Bragging Rights",
        "--entry-fee",
        "200",
        "--private",
    ])
    .unwrap();

    match app.command {
        Commands::Leagues {
            cmd:
                LeaguesCmd::Create {
                    name,
                    entry_fee,
                    max_members,
                    private,
                },
        } => {
            assert_eq!(name, "Office Bragging Rights");
            assert_eq!(entry_fee, 200.0);
            assert_eq!(max_members, 10);
            assert!(private);
        }
        other => panic!("Expected leagues create, got {:?}", other),
    }
}

#[test]
fn test_parse_league_status_aliases() {
    for text in ["payouts-approved", "Payouts Approved", "paid"] {
        let app = Nexus::try_parse_from(["fpl-nexus", "admin", "set-league-status", "l1", text]).unwrap();
        match app.command {
            Commands::Admin {
                cmd: AdminCmd::SetLeagueStatus { status, .. },
            } => assert_eq!(status, LeagueStatus::PayoutsApproved),
            other => panic!("Expected set-league-status, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_admin_filters() {
    let app = Nexus::try_parse_from([
        "fpl-nexus", "admin", "users", "--status", "banned", "-s", "smith",
    ])
    .unwrap();
    match app.command {
        Commands::Admin {
            cmd: AdminCmd::Users { filters },
        } => {
            assert_eq!(filters.status, Some(UserStatus::Banned));
            assert_eq!(filters.search.as_deref(), Some("smith"));
        }
        other => panic!("Expected admin users, got {:?}", other),
    }

    let app = Nexus::try_parse_from(["fpl-nexus", "admin", "transactions", "--type", "fee"]).unwrap();
    match app.command {
        Commands::Admin {
            cmd: AdminCmd::Transactions { filters },
        } => assert_eq!(filters.kind, Some(TransactionType::EntryFee)),
        other => panic!("Expected admin transactions, got {:?}", other),
    }
}

#[test]
fn test_rejects_unknown_values() {
    assert!(Nexus::try_parse_from(["fpl-nexus", "admin", "set-user-status", "au3", "frozen"]).is_err());
    assert!(Nexus::try_parse_from(["fpl-nexus", "leagues", "join", "  "]).is_err());
    assert!(Nexus::try_parse_from(["fpl-nexus", "leagues"]).is_err());
}

#[test]
fn test_parse_system_commands() {
    let app = Nexus::try_parse_from(["fpl-nexus", "system", "delete-backup", "bkp2"]).unwrap();
    match app.command {
        Commands::System {
            cmd: SystemCmd::DeleteBackup { id },
        } => assert_eq!(id.as_str(), "bkp2"),
        other => panic!("Expected delete-backup, got {:?}", other),
    }

    let app = Nexus::try_parse_from(["fpl-nexus", "system", "set-branding", "--primary", "#112233"]).unwrap();
    match app.command {
        Commands::System {
            cmd: SystemCmd::SetBranding { primary, app_name, .. },
        } => {
            assert_eq!(primary.as_deref(), Some("#112233"));
            assert!(app_name.is_none());
        }
        other => panic!("Expected set-branding, got {:?}", other),
    }
}

#[test]
fn test_parse_wallet_commands() {
    let app = Nexus::try_parse_from(["fpl-nexus", "account", "deposit", "500"]).unwrap();
    match app.command {
        Commands::Account {
            cmd: AccountCmd::Deposit { amount },
        } => assert_eq!(amount, 500.0),
        other => panic!("Expected account deposit, got {:?}", other),
    }

    let app = Nexus::try_parse_from([
        "fpl-nexus",
        "admin",
        "adjust-balance",
        "au2",
        "-250",
        "--reason",
        "chargeback",
    ])
    .unwrap();
    match app.command {
        Commands::Admin {
            cmd: AdminCmd::AdjustBalance { user_id, delta, reason },
        } => {
            assert_eq!(user_id.as_str(), "au2");
            assert_eq!(delta, -250.0);
            assert_eq!(reason.as_deref(), Some("chargeback"));
        }
        other => panic!("Expected admin adjust-balance, got {:?}", other),
    }
}
