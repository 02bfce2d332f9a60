//! Domain models for FPL Nexus
//!
//! Every type here is a plain owned value that serializes with the camelCase
//! field names the web client expects:
//! - `league`: leagues, members, leaderboards and prize-pool math
//! - `account`: the acting user's profile, wallet, transactions and FPL data
//! - `admin`: admin users, the platform ledger and finance summaries
//! - `content`: homepage, announcements and help articles
//! - `analytics`: reporting snapshots
//! - `settings`: API keys, branding and backups

pub mod account;
pub mod admin;
pub mod analytics;
pub mod content;
pub mod league;
pub mod settings;


pub use account::*;
pub use admin::*;
pub use analytics::*;
pub use content::*;
pub use league::*;
pub use settings::*;
