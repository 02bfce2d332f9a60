//! CLI argument definitions and parsing structures.

use super::types::{
    AnnouncementId, AnnouncementStatus, BackupId, HelpArticleId, LeagueId, LeagueStatus,
    TransactionStatus, TransactionType, UserId, UserRole, UserStatus,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Options that apply to every subcommand
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    /// State file to load and save (or set `FPL_NEXUS_STATE`).
    #[clap(long, global = true)]
    pub state: Option<PathBuf>,

    /// Ignore any saved state and start from the demo data set.
    #[clap(long, global = true)]
    pub fresh: bool,

    /// Skip the simulated network delay.
    #[clap(long, global = true)]
    pub no_latency: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "fpl-nexus", about = "FPL Nexus fantasy league platform")]
pub struct Nexus {
    #[clap(flatten)]
    pub global: GlobalOptions,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse, join and create leagues
    Leagues {
        #[clap(subcommand)]
        cmd: LeaguesCmd,
    },

    /// Your profile, wallet and FPL data
    Account {
        #[clap(subcommand)]
        cmd: AccountCmd,
    },

    /// Administer users, leagues and finances
    Admin {
        #[clap(subcommand)]
        cmd: AdminCmd,
    },

    /// Manage homepage, announcements and help articles
    Content {
        #[clap(subcommand)]
        cmd: ContentCmd,
    },

    /// Analytics, settings and backups
    System {
        #[clap(subcommand)]
        cmd: SystemCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum LeaguesCmd {
    /// List public leagues.
    Public,

    /// List leagues you have joined.
    Mine,

    /// Show a league with its members in leaderboard order.
    Show { league_id: LeagueId },

    /// Ranked standings for a league.
    Leaderboard { league_id: LeagueId },

    /// Join a league and pay its entry fee.
    Join { league_id: LeagueId },

    /// Create a league with yourself as the first member.
    Create {
        /// League name.
        #[clap(long)]
        name: String,

        /// Entry fee in Ksh.
        #[clap(long)]
        entry_fee: f64,

        /// Maximum number of members (2-100).
        #[clap(long, default_value_t = 10)]
        max_members: u32,

        /// Only joinable by invitation.
        #[clap(long)]
        private: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum AccountCmd {
    /// Show your profile.
    Profile,

    /// Update one or more profile fields.
    UpdateProfile {
        #[clap(long)]
        name: Option<String>,

        #[clap(long)]
        email: Option<String>,

        #[clap(long)]
        fpl_team_id: Option<String>,

        #[clap(long)]
        avatar_url: Option<String>,

        #[clap(long)]
        team_name: Option<String>,
    },

    /// Overall FPL points and rank.
    Fpl,

    /// Player statistics.
    Players,

    /// Wallet balance and pending winnings.
    Wallet,

    /// Add funds to your wallet.
    Deposit {
        /// Amount in Ksh.
        amount: f64,
    },

    /// Withdraw funds from your wallet.
    Withdraw {
        /// Amount in Ksh.
        amount: f64,
    },

    /// Your transactions, newest first.
    Transactions,
}

/// Search arguments for the admin user list
#[derive(Debug, Clone, Default, Args)]
pub struct UserFilterArgs {
    /// Filter by account status.
    #[clap(long)]
    pub status: Option<UserStatus>,

    /// Filter by role.
    #[clap(long)]
    pub role: Option<UserRole>,

    /// Case-insensitive match on name or email.
    #[clap(long, short)]
    pub search: Option<String>,
}

/// Search arguments for the platform ledger
#[derive(Debug, Clone, Default, Args)]
pub struct TransactionFilterArgs {
    /// Filter by transaction status.
    #[clap(long)]
    pub status: Option<TransactionStatus>,

    /// Filter by transaction type (deposit, withdrawal, entry_fee, winnings).
    #[clap(long = "type")]
    pub kind: Option<TransactionType>,

    /// Case-insensitive match on user name or description.
    #[clap(long, short)]
    pub search: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum AdminCmd {
    /// Headline platform numbers.
    Dashboard,

    /// List platform users.
    Users {
        #[clap(flatten)]
        filters: UserFilterArgs,
    },

    /// Ban or reinstate a user.
    SetUserStatus { user_id: UserId, status: UserStatus },

    /// Change a user's role.
    SetUserRole { user_id: UserId, role: UserRole },

    /// Credit or debit a user's wallet.
    AdjustBalance {
        user_id: UserId,

        /// Ksh to add; negative to deduct.
        #[clap(allow_negative_numbers = true)]
        delta: f64,

        /// Ledger description.
        #[clap(long)]
        reason: Option<String>,
    },

    /// List all leagues with admin metadata.
    Leagues,

    /// Show one league with admin metadata.
    League { league_id: LeagueId },

    /// Move a league to a new status. Payouts need a completed league and
    /// credit the prize pool to the leader.
    SetLeagueStatus {
        league_id: LeagueId,
        status: LeagueStatus,
    },

    /// Resample every member's points.
    Recalculate { league_id: LeagueId },

    /// List platform transactions.
    Transactions {
        #[clap(flatten)]
        filters: TransactionFilterArgs,
    },

    /// Revenue, fees, payouts and fraud alerts.
    Finance,
}

#[derive(Debug, Subcommand)]
pub enum ContentCmd {
    /// Show the homepage hero.
    Homepage,

    /// Update homepage hero fields. Omitted fields are kept.
    UpdateHomepage {
        #[clap(long)]
        title: Option<String>,

        #[clap(long)]
        subtitle: Option<String>,

        #[clap(long)]
        banner_url: Option<String>,
    },

    /// List announcements.
    Announcements,

    /// Create an announcement, or update one when `--id` matches.
    SaveAnnouncement {
        #[clap(long)]
        id: Option<AnnouncementId>,

        #[clap(long)]
        title: String,

        #[clap(long, default_value = "")]
        content: String,

        #[clap(long, default_value_t = AnnouncementStatus::Draft)]
        status: AnnouncementStatus,
    },

    /// Delete an announcement.
    DeleteAnnouncement { id: AnnouncementId },

    /// List help-center articles.
    Help,

    /// Create a help article, or update one when `--id` matches.
    SaveHelp {
        #[clap(long)]
        id: Option<HelpArticleId>,

        #[clap(long)]
        question: String,

        #[clap(long)]
        answer: String,

        #[clap(long, default_value = "General")]
        category: String,
    },

    /// Delete a help article.
    DeleteHelp { id: HelpArticleId },
}

#[derive(Debug, Subcommand)]
pub enum SystemCmd {
    /// User trends, retention and top performers.
    Analytics,

    /// Show API keys, branding and backups.
    Settings,

    /// Update branding. Omitted fields are kept.
    SetBranding {
        #[clap(long)]
        app_name: Option<String>,

        /// Primary colour as #RRGGBB.
        #[clap(long)]
        primary: Option<String>,

        /// Secondary colour as #RRGGBB.
        #[clap(long)]
        secondary: Option<String>,
    },

    /// Update API keys. Omitted keys are kept.
    SetApiKeys {
        #[clap(long)]
        fpl: Option<String>,

        #[clap(long)]
        stripe_public: Option<String>,

        #[clap(long)]
        stripe_secret: Option<String>,

        #[clap(long)]
        mpesa_key: Option<String>,

        #[clap(long)]
        mpesa_secret: Option<String>,
    },

    /// Take a backup.
    Backup,

    /// Delete a backup.
    DeleteBackup { id: BackupId },
}
