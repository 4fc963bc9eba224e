//! Sequence state: the array being sorted plus its markers and counters.
//!
//! - `markers`: per-position tag sets (comparing, current, pivot, sorted)
//! - `stats`: comparison/swap/step counters and elapsed time
//!
//! The `Session` bundles all three. It has exactly one owner at a time:
//! the playback controller while idle, the executor worker while running.

mod markers;
mod stats;

pub use markers::{Marker, MarkerSet, Markers};
pub use stats::{Statistics, StatsSnapshot};

use rand::Rng;
use serde::Serialize;

use crate::error::{Result, SortError};

/// Inclusive range random values are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: u32,
    pub max: u32,
}

impl ValueRange {
    /// Create a range, rejecting zero minimums and inverted bounds.
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min == 0 || min > max {
            return Err(SortError::InvalidValueRange { min, max });
        }
        Ok(Self { min, max })
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { min: 5, max: 104 }
    }
}

/// A single bar as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    /// Raw value at this position
    pub value: u32,
    /// `value / max value in the sequence`, in `0.0..=1.0`
    pub height: f64,
}

/// Ordered, mutable list of positive integers.
///
/// Every index-taking method bounds-checks and reports
/// `SortError::IndexOutOfBounds` instead of panicking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<u32>,
}

impl Sequence {
    /// Hard upper bound on the number of values, whatever the configured limits.
    pub const MAX_LEN: usize = 10_000;

    /// Build a sequence from explicit values. Zero is not a valid bar height.
    pub fn from_values(values: Vec<u32>) -> Result<Self> {
        if values.len() > Self::MAX_LEN {
            return Err(SortError::InvalidSize {
                size: values.len(),
                min: 0,
                max: Self::MAX_LEN,
            });
        }
        if values.contains(&0) {
            let max = values.iter().copied().max().unwrap_or(0);
            return Err(SortError::InvalidValueRange { min: 0, max });
        }
        Ok(Self { values })
    }

    /// Fill a new sequence with `size` uniform random values from `range`.
    pub fn generate<R: Rng + ?Sized>(size: usize, range: ValueRange, rng: &mut R) -> Self {
        let values = (0..size)
            .map(|_| rng.random_range(range.min..=range.max))
            .collect();
        Self { values }
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check that `index` addresses an element.
    pub fn check(&self, index: usize) -> Result<()> {
        if index < self.values.len() {
            Ok(())
        } else {
            Err(SortError::IndexOutOfBounds {
                index,
                len: self.values.len(),
            })
        }
    }

    pub fn get(&self, index: usize) -> Result<u32> {
        self.check(index)?;
        Ok(self.values[index])
    }

    pub fn set(&mut self, index: usize, value: u32) -> Result<()> {
        self.check(index)?;
        self.values[index] = value;
        Ok(())
    }

    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.check(i)?;
        self.check(j)?;
        self.values.swap(i, j);
        Ok(())
    }

    /// Copy of the inclusive range `start..=end`.
    pub fn snapshot(&self, start: usize, end: usize) -> Result<Vec<u32>> {
        self.check(start)?;
        self.check(end)?;
        if start > end {
            return Ok(Vec::new());
        }
        Ok(self.values[start..=end].to_vec())
    }

    pub fn max_value(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Raw values paired with their height relative to the tallest bar.
    pub fn bars(&self) -> Vec<Bar> {
        let max = self.max_value();
        self.values
            .iter()
            .map(|&value| Bar {
                value,
                height: if max == 0 {
                    0.0
                } else {
                    value as f64 / max as f64
                },
            })
            .collect()
    }

    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

/// Sequence, markers and statistics moved as a unit between owners.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub sequence: Sequence,
    pub markers: Markers,
    pub stats: Statistics,
}

impl Session {
    /// Start a fresh session around `sequence` with cleared markers and counters.
    pub fn new(sequence: Sequence) -> Self {
        let markers = Markers::new(sequence.len());
        Self {
            sequence,
            markers,
            stats: Statistics::default(),
        }
    }
}
