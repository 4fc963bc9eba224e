//! Animation speed and the pause strategy used between steps.
//!
//! `SleepPacer` blocks the executor thread for real time. `InstantPacer`
//! returns immediately and only counts pauses, for headless runs and tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use super::cancel::CancelToken;
use crate::error::{Result, SortError};

/// Animation speed on the 1..=10 slider scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u8);

impl Speed {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SortError::InvalidSpeed(value))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Delay per step: 100ms at speed 1 down to 10ms at speed 10.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(110 - 10 * self.0 as u64)
    }

    /// One notch faster, saturating at `MAX`.
    pub fn faster(&self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    /// One notch slower, saturating at `MIN`.
    pub fn slower(&self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(5)
    }
}

/// Strategy for waiting out one delay interval.
///
/// Implementations must return `SortError::Cancelled` once `cancel` is set.
pub trait Pacer: Send + Sync {
    fn pause(&self, delay: Duration, cancel: &CancelToken) -> Result<()>;
}

/// Real-time pacer. Sleeps in short slices so cancellation is noticed quickly.
#[derive(Debug, Clone, Copy)]
pub struct SleepPacer {
    slice: Duration,
}

impl SleepPacer {
    pub fn new() -> Self {
        Self {
            slice: Duration::from_millis(5),
        }
    }
}

impl Default for SleepPacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pacer for SleepPacer {
    fn pause(&self, delay: Duration, cancel: &CancelToken) -> Result<()> {
        let deadline = Instant::now() + delay;
        loop {
            if cancel.is_cancelled() {
                return Err(SortError::Cancelled);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            std::thread::sleep(self.slice.min(deadline - now));
        }
    }
}

/// Pacer that never sleeps. Counts pauses.
#[derive(Debug, Default)]
pub struct InstantPacer {
    pauses: AtomicU64,
}

impl InstantPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> u64 {
        self.pauses.load(Ordering::Relaxed)
    }
}

impl Pacer for InstantPacer {
    fn pause(&self, _delay: Duration, cancel: &CancelToken) -> Result<()> {
        if cancel.is_cancelled() {
            return Err(SortError::Cancelled);
        }
        self.pauses.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
