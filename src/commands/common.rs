//! Common utilities and helper functions shared across commands.

use std::path::PathBuf;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    cli::GlobalOptions,
    core::{files, ServiceConfig},
    service::{FantasyService, NoLatency},
    store::EntityStore,
    Result,
};

/// Demo data, reproducible when a seed is configured.
pub(crate) fn demo_store(seed: Option<u64>) -> EntityStore {
    match seed {
        Some(seed) => EntityStore::seeded(&mut StdRng::seed_from_u64(seed)),
        None => EntityStore::seeded(&mut rand::thread_rng()),
    }
}

/// Context containing the service and output settings for one CLI run
pub struct CommandContext {
    pub service: FantasyService,
    pub state_path: PathBuf,
    pub as_json: bool,
}

impl CommandContext {
    /// Build the service from saved state (or the demo data) and the resolved config.
    ///
    /// `--state` overrides the configured state file; `--fresh` ignores it.
    pub fn new(options: &GlobalOptions, config: ServiceConfig) -> Result<Self> {
        let state_path = options.state.clone().unwrap_or(config.state_path.clone());

        let saved = if options.fresh {
            None
        } else {
            files::load_store(&state_path)?
        };
        let store = match saved {
            Some(store) => {
                debug!(path = %state_path.display(), "restored saved state");
                store
            }
            None => demo_store(config.seed),
        };

        let service = if options.no_latency {
            FantasyService::new(store, NoLatency)
        } else {
            FantasyService::new(store, config.latency())
        };
        let service = match config.seed {
            Some(seed) => service.with_rng_seed(seed),
            None => service,
        };

        Ok(Self {
            service,
            state_path,
            as_json: options.json,
        })
    }

    /// Write the current store to the state file.
    pub async fn persist(&self) -> Result<()> {
        let store = self.service.snapshot().await;
        files::save_store(&self.state_path, &store)?;
        info!(path = %self.state_path.display(), "saved state");
        Ok(())
    }

    /// Print `value` as pretty JSON, or as text lines produced by `render`.
    pub fn emit<T: Serialize + ?Sized>(&self, value: &T, render: impl FnOnce(&T) -> Vec<String>) -> Result<()> {
        if self.as_json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            for line in render(value) {
                println!("{}", line);
            }
        }
        Ok(())
    }
}

/// Await a façade call and log how long it took.
pub async fn timed<T>(label: &str, call: impl std::future::Future<Output = T>) -> T {
    let started = Instant::now();
    let value = call.await;
    debug!(call = label, elapsed_ms = started.elapsed().as_millis() as u64, "service call finished");
    value
}

/// Format an amount in Kenyan shillings, e.g. `Ksh 1,350.00`.
pub fn ksh(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{}Ksh {}.{}", sign, grouped, cents)
}

/// Render a yes/no flag.
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
