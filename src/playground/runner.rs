//! Runner seam between the playground session and whatever produces output.

use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::simulator::{simulate, SimulationError};
use crate::models::constants::{MAX_DELAY_MS, MAX_SOURCE_BYTES, MIN_DELAY_MS};
use crate::models::RunLanguage;

/// Produces a transcript for a piece of source code.
pub trait CodeRunner {
    fn run(&self, code: &str, language: RunLanguage) -> Result<String, SimulationError>;
}

/// Artificial latency bounds, inclusive, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for DelayRange {
    fn default() -> Self {
        Self {
            min_ms: MIN_DELAY_MS,
            max_ms: MAX_DELAY_MS,
        }
    }
}

impl DelayRange {
    pub const NONE: DelayRange = DelayRange { min_ms: 0, max_ms: 0 };

    /// Pick a delay in `[min_ms, max_ms]`.
    pub fn sample(&self) -> Duration {
        let span = self.max_ms.saturating_sub(self.min_ms);
        let jitter = if span == 0 {
            0
        } else {
            // v4 uuids are random enough for latency jitter.
            (uuid::Uuid::new_v4().as_u128() % (u128::from(span) + 1)) as u64
        };
        Duration::from_millis(self.min_ms + jitter)
    }
}

/// Sleeps for a sampled delay, then simulates the program's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedRunner {
    pub delay: DelayRange,
    pub max_source_bytes: usize,
}

impl Default for SimulatedRunner {
    fn default() -> Self {
        Self {
            delay: DelayRange::default(),
            max_source_bytes: MAX_SOURCE_BYTES,
        }
    }
}

impl SimulatedRunner {
    pub fn new(delay: DelayRange, max_source_bytes: usize) -> Self {
        Self {
            delay,
            max_source_bytes,
        }
    }

    /// No latency; used by `--no-delay` and tests.
    pub fn instant() -> Self {
        Self {
            delay: DelayRange::NONE,
            ..Default::default()
        }
    }
}

impl CodeRunner for SimulatedRunner {
    fn run(&self, code: &str, language: RunLanguage) -> Result<String, SimulationError> {
        let delay = self.delay.sample();
        debug!(%language, delay_ms = delay.as_millis() as u64, "simulating execution");
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        simulate(code, language, self.max_source_bytes)
    }
}
