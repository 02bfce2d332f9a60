//! Simulated network latency for façade calls.

use rand::Rng;
use std::time::Duration;

/// Default fixed part of every simulated call.
pub const DEFAULT_BASE_LATENCY: Duration = Duration::from_millis(500);

/// Default upper bound of the random part added on top of the base.
pub const DEFAULT_JITTER: Duration = Duration::from_millis(800);

/// Source of the delay each façade call waits before touching the store.
pub trait LatencyStrategy: Send + Sync {
    fn next_delay(&self) -> Duration;
}

/// Resolve immediately. Used by tests and `--no-latency`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

impl LatencyStrategy for NoLatency {
    fn next_delay(&self) -> Duration {
        Duration::ZERO
    }
}

/// Same delay for every call.
#[derive(Debug, Clone, Copy)]
pub struct FixedLatency(pub Duration);

impl LatencyStrategy for FixedLatency {
    fn next_delay(&self) -> Duration {
        self.0
    }
}

/// `base` plus a uniformly random amount in `[0, jitter)`.
#[derive(Debug, Clone, Copy)]
pub struct RandomLatency {
    pub base: Duration,
    pub jitter: Duration,
}

impl RandomLatency {
    pub fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }
}

impl Default for RandomLatency {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_LATENCY, DEFAULT_JITTER)
    }
}

impl LatencyStrategy for RandomLatency {
    fn next_delay(&self) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.base;
        }
        self.base + Duration::from_millis(rand::thread_rng().gen_range(0..jitter_ms))
    }
}
