//! Sorting algorithm executors.
//!
//! Each executor is a sequencing strategy over the step primitives in
//! `engine::step`. Executors never touch the sequence directly: they learn
//! about values only through `compare` results (merge additionally reads
//! snapshots of its sub-ranges).

mod bubble;
mod info;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use info::{AlgorithmInfo, Complexity};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::Stepper;
use crate::error::Result;

/// The selectable sorting algorithms.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    /// All algorithms in menu order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Short identifier used on the command line and in config files.
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    /// Static description and complexity table entry.
    pub fn info(&self) -> &'static AlgorithmInfo {
        info::lookup(*self)
    }

    pub fn next(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|a| a == self).unwrap_or(0)
    }

    /// Run this algorithm over the full sequence behind `step`.
    ///
    /// On success every position has been marked sorted.
    pub fn execute(&self, step: &mut Stepper<'_>) -> Result<()> {
        match self {
            Algorithm::Bubble => bubble::sort(step),
            Algorithm::Selection => selection::sort(step),
            Algorithm::Insertion => insertion::sort(step),
            Algorithm::Merge => merge::sort(step),
            Algorithm::Quick => quick::sort(step),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown algorithm '{}'", s))
    }
}
