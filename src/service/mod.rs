//! The Fantasy Data Service façade
//!
//! [`FantasyService`] is the single access point to the [`EntityStore`]. Every
//! operation is async: it first waits out the configured latency strategy,
//! then reads or mutates the store under its lock and hands back an owned
//! copy of the result. Nothing returned by the façade aliases the store, so
//! callers can only change platform state through façade operations.
//!
//! The store is touched only after the delay, inside one lock acquisition.
//! Dropping a pending call therefore has no effect on the store, and two
//! racing mutations are applied one after the other.
//!
//! Operations are grouped by audience:
//! - `leagues`: browsing, joining and creating leagues
//! - `account`: the acting user's profile, wallet and FPL data
//! - `admin`: user, league and finance administration
//! - `content`: homepage, announcements and help articles
//! - `system`: analytics, settings and backups

pub mod account;
pub mod admin;
pub mod content;
pub mod latency;
pub mod leagues;
pub mod system;

#[cfg(test)]
mod tests;

pub use latency::{FixedLatency, LatencyStrategy, NoLatency, RandomLatency};

use crate::store::EntityStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::RwLock;
use tracing::debug;

/// Async façade over a shared [`EntityStore`].
///
/// Cloning is cheap; clones share the same store.
#[derive(Clone)]
pub struct FantasyService {
    store: Arc<RwLock<EntityStore>>,
    latency: Arc<dyn LatencyStrategy>,
    rng: Arc<Mutex<StdRng>>,
}

impl FantasyService {
    /// Wrap `store`, delaying every call by `latency`.
    pub fn new(store: EntityStore, latency: impl LatencyStrategy + 'static) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            latency: Arc::new(latency),
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
        }
    }

    /// Service over the demo data set.
    pub fn seeded(latency: impl LatencyStrategy + 'static) -> Self {
        Self::new(EntityStore::seeded(&mut rand::thread_rng()), latency)
    }

    /// Make point sampling (joins, recalculation, backup sizes) reproducible.
    pub fn with_rng_seed(self, seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
            ..self
        }
    }

    /// Full copy of the store, taken without simulated latency.
    pub async fn snapshot(&self) -> EntityStore {
        self.store.read().await.clone()
    }

    async fn simulate_latency(&self) {
        let delay = self.latency.next_delay();
        if !delay.is_zero() {
            debug!(delay_ms = delay.as_millis() as u64, "simulating network latency");
            tokio::time::sleep(delay).await;
        }
    }

    /// Wait, then run `f` against a shared view of the store.
    async fn read<T>(&self, f: impl FnOnce(&EntityStore) -> T) -> T {
        self.simulate_latency().await;
        let store = self.store.read().await;
        f(&store)
    }

    /// Wait, then run `f` with exclusive access to the store.
    async fn write<T>(&self, f: impl FnOnce(&mut EntityStore) -> T) -> T {
        self.simulate_latency().await;
        let mut store = self.store.write().await;
        f(&mut store)
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn sample_points(&self, upper: u32) -> u32 {
        self.rng().gen_range(0..upper)
    }
}
