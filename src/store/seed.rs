//! Demo data set: six leagues, eleven platform users, a season of ledger
//! entries, CMS content and reporting snapshots.
//!
//! Member points are drawn from the supplied RNG; everything else is fixed.

use super::EntityStore;
use crate::cli::types::*;
use crate::models::*;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rand::Rng;

pub const CURRENT_USER_ID: &str = "user_current";

/// Upper bound (exclusive) for seeded and freshly joined member points.
pub const SEED_POINTS_MAX: u32 = 80;

fn ts(y: i32, m: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, mi, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or_default()
}

fn avatar(seed: &str) -> String {
    format!("https://picsum.photos/seed/{}/100/100", seed)
}

pub fn current_user() -> UserProfile {
    UserProfile {
        id: UserId::new(CURRENT_USER_ID),
        name: "Alex Mercer".to_string(),
        email: "alex.mercer@email.com".to_string(),
        fpl_team_id: "1234567".to_string(),
        avatar_url: avatar("alex"),
        team_name: "Mercer FC".to_string(),
    }
}

struct LeagueSeed {
    id: &'static str,
    name: &'static str,
    entry_fee: f64,
    max_members: u32,
    generated: usize,
    first_index: usize,
    member_name: &'static str,
    team_name: &'static str,
    is_private: bool,
    creator: (&'static str, &'static str),
    status: LeagueStatus,
    start: DateTime<Utc>,
    with_current_user: bool,
}

fn league_seeds() -> Vec<LeagueSeed> {
    vec![
        LeagueSeed {
            id: "l1",
            name: "Ksh 100 Pro League #1",
            entry_fee: 100.0,
            max_members: 20,
            generated: 20,
            first_index: 0,
            member_name: "Player",
            team_name: "Team",
            is_private: false,
            creator: ("au5", "Michael Brown"),
            status: LeagueStatus::Completed,
            start: ts(2024, 8, 10, 12, 0),
            with_current_user: false,
        },
        LeagueSeed {
            id: "l2",
            name: "Ksh 100 Pro League #2",
            entry_fee: 100.0,
            max_members: 20,
            generated: 15,
            first_index: 20,
            member_name: "Player",
            team_name: "Team",
            is_private: false,
            creator: ("au2", "Jane Doe"),
            status: LeagueStatus::Ongoing,
            start: ts(2024, 8, 17, 12, 0),
            with_current_user: false,
        },
        LeagueSeed {
            id: "l3",
            name: "Ksh 200 Elite Challenge",
            entry_fee: 200.0,
            max_members: 20,
            generated: 18,
            first_index: 40,
            member_name: "User",
            team_name: "FC",
            is_private: false,
            creator: ("au6", "Sarah Green"),
            status: LeagueStatus::Ongoing,
            start: ts(2024, 8, 17, 12, 0),
            with_current_user: false,
        },
        LeagueSeed {
            id: "l4",
            name: "Ksh 500 High Rollers",
            entry_fee: 500.0,
            max_members: 20,
            generated: 6,
            first_index: 60,
            member_name: "Manager",
            team_name: "Winners",
            is_private: false,
            creator: ("au9", "Chris Blue"),
            status: LeagueStatus::Open,
            start: ts(2024, 8, 24, 12, 0),
            with_current_user: true,
        },
        LeagueSeed {
            id: "l5",
            name: "Ksh 1000 Legends Arena",
            entry_fee: 1000.0,
            max_members: 20,
            generated: 19,
            first_index: 80,
            member_name: "Legend",
            team_name: "Legends",
            is_private: false,
            creator: ("au1", "Admin User"),
            status: LeagueStatus::PayoutsApproved,
            start: ts(2024, 8, 3, 12, 0),
            with_current_user: false,
        },
        LeagueSeed {
            id: "l6",
            name: "Weekend Warriors (Private)",
            entry_fee: 200.0,
            max_members: 10,
            generated: 3,
            first_index: 100,
            member_name: "Friend",
            team_name: "Buddies",
            is_private: true,
            creator: (CURRENT_USER_ID, "Alex Mercer"),
            status: LeagueStatus::Completed,
            start: ts(2024, 8, 10, 12, 0),
            with_current_user: true,
        },
    ]
}

fn build_leagues<R: Rng>(store: &EntityStore, rng: &mut R) -> Vec<LeagueRecord> {
    league_seeds()
        .into_iter()
        .map(|seed| {
            // "Friend" members are numbered from 1, the rest continue the global user numbering.
            let number_base = if seed.member_name == "Friend" {
                1
            } else {
                seed.first_index + 1
            };
            let mut members: Vec<Member> = (0..seed.generated)
                .map(|i| Member {
                    id: UserId::new(format!("u{}", seed.first_index + i)),
                    name: format!("{} {}", seed.member_name, number_base + i),
                    team_name: format!("{} {}", seed.team_name, number_base + i),
                    points: rng.gen_range(0..SEED_POINTS_MAX),
                    is_current_user: None,
                })
                .collect();
            if seed.with_current_user {
                members.push(store.current_member(rng.gen_range(0..SEED_POINTS_MAX)));
            }

            let mut league = LeagueRecord {
                id: LeagueId::new(seed.id),
                name: seed.name.to_string(),
                entry_fee: seed.entry_fee,
                max_members: seed.max_members,
                members,
                is_private: seed.is_private,
                prize_pool: 0.0,
                creator: CreatorRef {
                    id: UserId::new(seed.creator.0),
                    name: seed.creator.1.to_string(),
                },
                status: seed.status,
                start_date: seed.start,
                end_date: seed.start + Duration::days(2),
            };
            league.recompute_prize_pool();
            league
        })
        .collect()
}

fn admin_users(profile: &UserProfile) -> Vec<AdminUser> {
    let user = |id: &str, name: &str, seed: &str, role, status, joined| AdminUser {
        id: UserId::new(id),
        name: name.to_string(),
        email: format!("{}@email.com", name.to_lowercase().replace(' ', ".")),
        avatar_url: avatar(seed),
        role,
        status,
        joined_date: joined,
    };

    let mut admin = user("au1", "Admin User", "admin", UserRole::Admin, UserStatus::Active, ts(2023, 1, 15, 10, 0));
    admin.email = "admin@fplnexus.com".to_string();

    vec![
        admin,
        AdminUser {
            id: profile.id.clone(),
            name: profile.name.clone(),
            email: profile.email.clone(),
            avatar_url: profile.avatar_url.clone(),
            role: UserRole::User,
            status: UserStatus::Active,
            joined_date: ts(2023, 5, 20, 14, 30),
        },
        user("au2", "Jane Doe", "jane", UserRole::Moderator, UserStatus::Active, ts(2023, 6, 1, 11, 0)),
        user("au3", "John Smith", "john", UserRole::User, UserStatus::Banned, ts(2023, 7, 10, 9, 0)),
        user("au4", "Emily White", "emily", UserRole::User, UserStatus::Active, ts(2023, 8, 22, 18, 45)),
        user("au5", "Michael Brown", "michael", UserRole::User, UserStatus::Active, ts(2023, 9, 5, 12, 0)),
        user("au6", "Sarah Green", "sarah", UserRole::Moderator, UserStatus::Active, ts(2023, 10, 11, 16, 20)),
        user("au7", "David Black", "david", UserRole::User, UserStatus::Banned, ts(2023, 11, 30, 20, 0)),
        user("au8", "Laura Grey", "laura", UserRole::User, UserStatus::Active, ts(2024, 1, 2, 13, 10)),
        user("au9", "Chris Blue", "chris", UserRole::User, UserStatus::Active, ts(2024, 2, 14, 11, 55)),
        user("au10", "Patricia Yellow", "patricia", UserRole::User, UserStatus::Active, ts(2024, 3, 19, 8, 30)),
    ]
}

fn tx(
    id: &str,
    date: DateTime<Utc>,
    description: &str,
    amount: f64,
    kind: TransactionType,
    status: TransactionStatus,
) -> Transaction {
    Transaction {
        id: TransactionId::new(id),
        date,
        description: description.to_string(),
        amount,
        kind,
        status,
    }
}

fn transactions() -> Vec<Transaction> {
    use TransactionStatus::*;
    use TransactionType::*;
    vec![
        tx("t1", ts(2024, 8, 26, 10, 0), "Gameweek 2 Winnings", 1800.0, Winnings, Completed),
        tx("t2", ts(2024, 8, 25, 15, 30), "Withdrawal to M-Pesa", -2000.0, Withdrawal, Completed),
        tx("t3", ts(2024, 8, 20, 11, 0), "League Entry: High Rollers", -500.0, EntryFee, Completed),
        tx("t4", ts(2024, 8, 19, 9, 0), "Gameweek 1 Winnings", 900.0, Winnings, Pending),
        tx("t5", ts(2024, 8, 18, 14, 0), "Deposit from Card", 1000.0, Deposit, Completed),
        tx("t6", ts(2024, 8, 17, 18, 0), "League Entry: Weekend Warriors", -200.0, EntryFee, Completed),
    ]
}

fn admin_transactions(users: &[AdminUser]) -> Vec<AdminTransaction> {
    use TransactionStatus::*;
    use TransactionType::*;
    let entries = [
        tx("at1", ts(2024, 8, 26, 10, 0), "Gameweek 2 Winnings", 1800.0, Winnings, Completed),
        tx("at2", ts(2024, 8, 26, 9, 0), "Deposit via M-Pesa", 500.0, Deposit, Completed),
        tx("at3", ts(2024, 8, 25, 18, 0), "Withdrawal Request", -1000.0, Withdrawal, Pending),
        tx("at4", ts(2024, 8, 25, 11, 0), "League Entry: Elite", -200.0, EntryFee, Completed),
        tx("at5", ts(2024, 8, 24, 14, 20), "League Entry: Pro", -100.0, EntryFee, Completed),
        tx("at6", ts(2024, 8, 23, 16, 0), "Deposit via Card", 2000.0, Deposit, Completed),
        tx("at7", ts(2024, 8, 22, 10, 0), "Deposit via Card", 500.0, Deposit, Failed),
        tx("at8", ts(2024, 8, 21, 12, 0), "Gameweek 1 Winnings", 450.0, Winnings, Completed),
        tx("at9", ts(2024, 8, 20, 8, 45), "Withdrawal to Bank", -5000.0, Withdrawal, Completed),
        tx("at10", ts(2024, 8, 19, 20, 0), "League Entry: High Roller", -500.0, EntryFee, Completed),
    ];

    // Entry N belongs to the user at index N (the first platform user never transacts).
    entries
        .into_iter()
        .zip(users.iter().skip(1))
        .map(|(transaction, user)| AdminTransaction {
            transaction,
            user: UserRef::from(user),
        })
        .collect()
}

fn fraud_alerts() -> Vec<FraudAlert> {
    vec![
        FraudAlert {
            id: AlertId::new("fa1"),
            level: AlertLevel::High,
            message: "User au3 attempted 5 failed withdrawals in 1 hour.".to_string(),
            timestamp: ts(2024, 8, 26, 11, 5),
            user_id: UserId::new("au3"),
        },
        FraudAlert {
            id: AlertId::new("fa2"),
            level: AlertLevel::Medium,
            message: "Multiple accounts (au4, au8) logged in from the same IP address.".to_string(),
            timestamp: ts(2024, 8, 26, 8, 20),
            user_id: UserId::new("au4"),
        },
        FraudAlert {
            id: AlertId::new("fa3"),
            level: AlertLevel::Low,
            message: "Unusual deposit amount from user au9.".to_string(),
            timestamp: ts(2024, 8, 25, 19, 30),
            user_id: UserId::new("au9"),
        },
    ]
}

fn player_stats() -> Vec<PlayerStat> {
    use PlayerPosition::*;
    let stat = |id: &str, name: &str, team: &str, position, price, goals, assists, clean_sheets, saves, selection_percent| PlayerStat {
        id: PlayerId::new(id),
        name: name.to_string(),
        team: team.to_string(),
        position,
        price,
        goals,
        assists,
        clean_sheets,
        saves,
        selection_percent,
    };
    vec![
        stat("p1", "Erling Haaland", "Man City", Forward, 14.2, 27, 7, 10, None, 58.1),
        stat("p2", "Cole Palmer", "Chelsea", Midfielder, 7.9, 22, 11, 8, None, 45.3),
        stat("p3", "Bukayo Saka", "Arsenal", Midfielder, 9.2, 16, 9, 16, None, 62.5),
        stat("p4", "William Saliba", "Arsenal", Defender, 6.1, 2, 1, 18, None, 55.2),
        stat("p5", "Alisson Becker", "Liverpool", Goalkeeper, 5.8, 0, 1, 9, Some(76), 12.0),
        stat("p6", "Son Heung-min", "Spurs", Midfielder, 9.9, 17, 10, 7, None, 30.7),
        stat("p7", "Ollie Watkins", "Aston Villa", Forward, 8.5, 19, 13, 9, None, 40.1),
        stat("p8", "Gabriel Magalhães", "Arsenal", Defender, 5.4, 4, 0, 17, None, 28.9),
        stat("p9", "André Onana", "Man Utd", Goalkeeper, 5.0, 0, 0, 9, Some(149), 20.3),
        stat("p10", "Mohamed Salah", "Liverpool", Midfielder, 13.3, 18, 10, 8, None, 25.4),
    ]
}

fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: AnnouncementId::new("an1"),
            title: "New Season, New Features!".to_string(),
            content: "Welcome to the 2024/2025 season! We've rolled out a new user dashboard and improved performance across the site. Good luck managers!".to_string(),
            date: ts(2024, 8, 15, 10, 0),
            status: AnnouncementStatus::Published,
        },
        Announcement {
            id: AnnouncementId::new("an2"),
            title: "Gameweek 3 Payouts Processed".to_string(),
            content: "All winnings for Gameweek 3 have been processed. Please check your wallets. Contact support if you have any issues.".to_string(),
            date: ts(2024, 8, 28, 14, 0),
            status: AnnouncementStatus::Published,
        },
        Announcement {
            id: AnnouncementId::new("an3"),
            title: "Upcoming System Maintenance".to_string(),
            content: "We will be undergoing scheduled maintenance on September 5th from 02:00 to 04:00. The platform may be unavailable during this time.".to_string(),
            date: ts(2024, 9, 1, 18, 0),
            status: AnnouncementStatus::Draft,
        },
    ]
}

fn help_articles() -> Vec<HelpArticle> {
    let article = |id: &str, question: &str, answer: &str, category: &str, last_updated| HelpArticle {
        id: HelpArticleId::new(id),
        question: question.to_string(),
        answer: answer.to_string(),
        category: category.to_string(),
        last_updated,
    };
    vec![
        article(
            "ha1",
            "How are winners determined?",
            "Winners are determined based on the highest Fantasy Premier League points accumulated for that specific gameweek. In case of a tie, the prize is split equally.",
            "Gameplay",
            ts(2024, 7, 20, 11, 0),
        ),
        article(
            "ha2",
            "How do I withdraw my winnings?",
            "Navigate to your Wallet page, click the \"Withdraw\" button, and follow the instructions. We support withdrawals via M-Pesa and Bank Transfer.",
            "Payments",
            ts(2024, 8, 1, 9, 30),
        ),
        article(
            "ha3",
            "Is this app affiliated with the official FPL?",
            "No, FPL Nexus is a third-party application and is not affiliated with the official Fantasy Premier League (FPL).",
            "General",
            ts(2024, 6, 10, 15, 0),
        ),
        article(
            "ha4",
            "What is the 10% service fee for?",
            "The 10% service fee helps us cover operational costs, including server maintenance, payment processing fees, and continuous development to bring you new features and a better experience.",
            "Payments",
            ts(2024, 7, 25, 16, 45),
        ),
    ]
}

fn analytics(profile: &UserProfile) -> AnalyticsData {
    let cohort = |name: &str, new_users, retention: &[f64]| {
        let mut weekly: Vec<Option<f64>> = retention.iter().copied().map(Some).collect();
        weekly.resize(8, None);
        RetentionCohort {
            cohort: name.to_string(),
            new_users,
            weekly_retention: weekly,
        }
    };
    let player = |id: &str, name: &str, avatar_url: String, total_winnings| TopPlayer {
        id: UserId::new(id),
        name: name.to_string(),
        avatar_url,
        total_winnings,
    };

    AnalyticsData {
        user_trends: vec![
            UserTrendDataPoint { period: TrendPeriod::Dau, value: 152 },
            UserTrendDataPoint { period: TrendPeriod::Wau, value: 876 },
            UserTrendDataPoint { period: TrendPeriod::Mau, value: 2450 },
        ],
        retention_cohorts: vec![
            cohort("Aug 1 - Aug 7", 250, &[100.0, 62.4, 51.2, 45.6, 40.0, 35.2, 31.8, 28.1]),
            cohort("Aug 8 - Aug 14", 310, &[100.0, 65.1, 53.5, 48.2, 42.1, 38.7, 34.5]),
            cohort("Aug 15 - Aug 21", 285, &[100.0, 60.7, 50.1, 44.3, 39.8, 36.1]),
            cohort("Aug 22 - Aug 28", 350, &[100.0, 68.2, 55.9, 50.1, 45.3]),
            cohort("Aug 29 - Sep 4", 320, &[100.0, 64.5, 52.8, 47.0]),
            cohort("Sep 5 - Sep 11", 410, &[100.0, 70.1, 58.2]),
            cohort("Sep 12 - Sep 18", 380, &[100.0, 66.8]),
            cohort("Sep 19 - Today", 290, &[100.0]),
        ],
        // Recomputed from the live leagues on every read.
        top_leagues: Vec::new(),
        top_players: vec![
            player("au1", "Admin User", avatar("admin"), 18000.0),
            player("au9", "Chris Blue", avatar("chris"), 12500.0),
            player("au2", "Jane Doe", avatar("jane"), 9800.0),
            player("au6", "Sarah Green", avatar("sarah"), 7200.0),
            player(profile.id.as_str(), profile.name.as_str(), profile.avatar_url.clone(), 5500.0),
        ],
    }
}

fn system_settings(now: DateTime<Utc>) -> SystemSettingsData {
    let backup = |id: &str, days: i64, size: &str| Backup {
        id: BackupId::new(id),
        timestamp: now - Duration::days(days),
        size: size.to_string(),
    };
    SystemSettingsData {
        api_keys: ApiKeys {
            fpl: "fpl_live_xxxxxxxxxxxx".to_string(),
            stripe_public: "pk_test_xxxxxxxxxxxx".to_string(),
            stripe_secret: "sk_test_xxxxxxxxxxxx".to_string(),
            mpesa_key: "mpesa_key_xxxxxxxx".to_string(),
            mpesa_secret: "mpesa_secret_xxxxxxxx".to_string(),
        },
        branding: BrandingSettings {
            app_name: "FPL Nexus".to_string(),
            primary_color: "#58A6FF".to_string(),
            secondary_color: "#F778BA".to_string(),
        },
        backups: vec![
            backup("bkp1", 1, "15.2 MB"),
            backup("bkp2", 7, "14.8 MB"),
            backup("bkp3", 30, "14.5 MB"),
        ],
    }
}

impl EntityStore {
    /// Store populated with the demo data set.
    pub fn seeded<R: Rng>(rng: &mut R) -> Self {
        let profile = current_user();
        let mut store = EntityStore::new(profile.clone());

        store.leagues = build_leagues(&store, rng);
        store.joined_league_ids = [LeagueId::new("l4"), LeagueId::new("l6")].into_iter().collect();
        store.paid_out_league_ids = [LeagueId::new("l5")].into_iter().collect();
        store.fpl_summary = FplSummary {
            overall_points: 1850,
            overall_rank: 123_456,
            total_players: 11_000_000,
        };
        store.player_stats = player_stats();
        store.wallet = WalletDetails {
            current_balance: 1200.0,
            pending_winnings: 450.0,
        };
        store.transactions = transactions();
        store.admin_users = admin_users(&profile);
        store.admin_transactions = admin_transactions(&store.admin_users);
        store.fraud_alerts = fraud_alerts();
        store.homepage = HomepageContent {
            hero_title: "Where Fantasy Football<br />Meets <span class=\"text-brand-primary-accent\">Real Winnings</span>".to_string(),
            hero_subtitle: "Join weekly competitive leagues, challenge other managers, and win cash prizes based on your FPL team's performance.".to_string(),
            banner_image_url: "/img/hero-banner.jpg".to_string(),
        };
        store.announcements = announcements();
        store.help_articles = help_articles();
        store.analytics = analytics(&profile);
        store.settings = system_settings(Utc::now());
        store
    }
}
