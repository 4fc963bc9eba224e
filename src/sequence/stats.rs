//! Run statistics.

use std::time::{Duration, Instant};

use serde::Serialize;

/// Counters for the current run.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    /// Comparisons made so far (monotonic within a run)
    pub comparisons: u64,
    /// Swaps made so far (monotonic within a run)
    pub swaps: u64,
    /// Delay intervals paid so far
    pub steps: u64,
    /// Wall clock instant the run started
    pub started_at: Option<Instant>,
    /// Elapsed time, refreshed at every step
    pub elapsed: Duration,
}

impl Statistics {
    /// Zero all counters and start the clock.
    pub fn start(&mut self) {
        *self = Self {
            started_at: Some(Instant::now()),
            ..Self::default()
        };
    }

    /// Refresh `elapsed` from the start instant.
    pub fn tick(&mut self) {
        if let Some(started) = self.started_at {
            self.elapsed = started.elapsed();
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            comparisons: self.comparisons,
            swaps: self.swaps,
            steps: self.steps,
            elapsed_ms: self.elapsed.as_millis() as u64,
        }
    }
}

/// Plain copy of the counters handed to observers and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatsSnapshot {
    pub comparisons: u64,
    pub swaps: u64,
    pub steps: u64,
    pub elapsed_ms: u64,
}
