//! FPL Nexus Library
//!
//! The service core of a fantasy-football league platform: an in-memory
//! entity store seeded with demo data, and an async façade that every client
//! goes through to browse, join and create leagues, manage the acting user's
//! account, and administer users, finances, CMS content and system settings.
//!
//! ## Features
//!
//! - **Leagues**: public and joined leagues, leaderboards, joining with capacity and membership checks
//! - **Account**: profile, FPL summary, player stats, wallet deposits and withdrawals, ledger
//! - **Admin**: user moderation and balance adjustments, league status with payouts, point recalculation, financial summary
//! - **Content**: homepage hero, announcements and help articles
//! - **System**: analytics, branding, API keys and backups
//! - **Simulated latency**: every call waits out a pluggable delay before touching the store
//!
//! ## Quick Start
//!
//! ```rust
//! use fpl_nexus::{FantasyService, LeagueId, NoLatency};
//!
//! # async fn example() -> fpl_nexus::Result<()> {
//! let service = FantasyService::seeded(NoLatency);
//!
//! let outcome = service.join_league(&LeagueId::new("l2")).await?;
//! println!("{}", outcome.message);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The CLI reads its latency, seed and state file from the environment:
//! ```bash
//! export FPL_NEXUS_LATENCY_MS=0
//! export FPL_NEXUS_STATE=/tmp/fpl-nexus.json
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use cli::types::{LeagueId, LeagueStatus, UserId};
pub use error::{NexusError, Result};
pub use service::{FantasyService, FixedLatency, LatencyStrategy, NoLatency, RandomLatency};
pub use store::EntityStore;

pub use crate::core::config::{JITTER_ENV_VAR, LATENCY_ENV_VAR, SEED_ENV_VAR, STATE_ENV_VAR};
pub use crate::core::logging::LOG_ENV_VAR;
