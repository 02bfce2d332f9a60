//! Core utilities for the FPL Nexus CLI
//!
//! This module consolidates the ambient plumbing used by the binary:
//! - `config`: layered service configuration (flags, env, file, defaults)
//! - `files`: file locations and the JSON state file
//! - `filters`: admin search filters
//! - `logging`: tracing subscriber setup

pub mod config;
pub mod files;
pub mod filters;
pub mod logging;

// Re-export commonly used items for convenience
pub use config::{ConfigFile, ServiceConfig};
pub use files::{default_config_path, default_state_path, load_store, save_store};
pub use filters::{TransactionQuery, UserQuery};
