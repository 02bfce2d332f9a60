//! Runtime configuration for the service.
//!
//! Settings are layered, highest priority first:
//! 1. command-line flags (applied by the CLI on top of [`ServiceConfig`])
//! 2. `FPL_NEXUS_*` environment variables
//! 3. the JSON config file (`~/.config/fpl-nexus/config.json`)
//! 4. built-in defaults

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::files::{default_config_path, default_state_path, try_read_to_string};
use crate::error::{NexusError, Result};
use crate::service::latency::{RandomLatency, DEFAULT_BASE_LATENCY, DEFAULT_JITTER};

pub const LATENCY_ENV_VAR: &str = "FPL_NEXUS_LATENCY_MS";
pub const JITTER_ENV_VAR: &str = "FPL_NEXUS_JITTER_MS";
pub const SEED_ENV_VAR: &str = "FPL_NEXUS_SEED";
pub const STATE_ENV_VAR: &str = "FPL_NEXUS_STATE";

/// Contents of the optional config file. Every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub latency_ms: Option<u64>,
    #[serde(default)]
    pub jitter_ms: Option<u64>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub state_path: Option<PathBuf>,
}

impl ConfigFile {
    /// Read a config file. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let Some(json) = try_read_to_string(path) else {
            return Ok(None);
        };
        let file = serde_json::from_str(&json).map_err(|e| NexusError::Config {
            message: format!("{}: {}", path.display(), e),
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(Some(file))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub latency_ms: u64,
    pub jitter_ms: u64,
    /// Seed for point sampling; `None` draws from entropy.
    pub seed: Option<u64>,
    pub state_path: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_BASE_LATENCY.as_millis() as u64,
            jitter_ms: DEFAULT_JITTER.as_millis() as u64,
            seed: None,
            state_path: default_state_path(),
        }
    }
}

fn env_number(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Result<Option<u64>> {
    match lookup(var) {
        Some(raw) if !raw.trim().is_empty() => Ok(Some(raw.trim().parse::<u64>()?)),
        _ => Ok(None),
    }
}

impl ServiceConfig {
    /// Layer environment values over the config file over the defaults.
    ///
    /// `lookup` reads one environment variable; the CLI passes `std::env::var`.
    pub fn resolve(file: Option<ConfigFile>, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let latency_ms = env_number(&lookup, LATENCY_ENV_VAR)?
            .or(file.latency_ms)
            .unwrap_or(defaults.latency_ms);
        let jitter_ms = env_number(&lookup, JITTER_ENV_VAR)?
            .or(file.jitter_ms)
            .unwrap_or(defaults.jitter_ms);
        let seed = env_number(&lookup, SEED_ENV_VAR)?.or(file.seed);
        let state_path = lookup(STATE_ENV_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .or(file.state_path)
            .unwrap_or(defaults.state_path);

        Ok(Self {
            latency_ms,
            jitter_ms,
            seed,
            state_path,
        })
    }

    /// Resolve from the process environment and the default config file.
    pub fn load() -> Result<Self> {
        let file = ConfigFile::load(&default_config_path())?;
        Self::resolve(file, |var| std::env::var(var).ok())
    }

    pub fn latency(&self) -> RandomLatency {
        RandomLatency::new(
            Duration::from_millis(self.latency_ms),
            Duration::from_millis(self.jitter_ms),
        )
    }
}
