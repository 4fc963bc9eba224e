//! UI-side mirror of the executor's state.
//!
//! The executor thread owns the session during a run, so the UI draws from
//! this copy, kept current by applying `SortEvent`s in arrival order.

use std::time::Instant;

use crate::engine::{RunState, SortEvent};
use crate::sequence::{Bar, MarkerSet, StatsSnapshot};

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub bars: Vec<Bar>,
    pub markers: Vec<MarkerSet>,
    pub stats: StatsSnapshot,
    pub run_state: RunState,
    /// Set when a run starts, so elapsed time advances between steps
    started_at: Option<Instant>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: SortEvent) {
        match event {
            SortEvent::Bars(bars) => self.bars = bars,
            SortEvent::Markers(markers) => self.markers = markers,
            SortEvent::Stats(stats) => self.stats = stats,
            SortEvent::RunState(state) => {
                self.started_at = match state {
                    RunState::Running => Some(Instant::now()),
                    RunState::Idle => None,
                };
                self.run_state = state;
            }
        }
    }

    /// Elapsed milliseconds, sampled continuously while running.
    pub fn elapsed_ms(&self) -> u64 {
        match self.started_at {
            Some(started) => (started.elapsed().as_millis() as u64).max(self.stats.elapsed_ms),
            None => self.stats.elapsed_ms,
        }
    }

    pub fn marker(&self, index: usize) -> MarkerSet {
        self.markers.get(index).copied().unwrap_or_default()
    }
}
