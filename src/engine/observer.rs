//! Observer callbacks emitted by step primitives.
//!
//! Primitives mutate the session first and notify afterwards, so an observer
//! always sees a consistent snapshot of a single step.

use std::sync::mpsc::Sender;

use crate::sequence::{Bar, MarkerSet, StatsSnapshot};

/// Whether a sort is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

/// Receiver of rendering and statistics updates.
///
/// All methods default to no-ops so subscribers implement only what they draw.
pub trait SortObserver: Send + Sync {
    /// Values changed: every position's raw value and normalized height.
    fn on_bars(&self, _bars: &[Bar]) {}

    /// Marker tags changed.
    fn on_markers(&self, _markers: &[MarkerSet]) {}

    /// Counters changed.
    fn on_stats(&self, _stats: &StatsSnapshot) {}

    fn on_run_state(&self, _state: RunState) {}
}

/// Observer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SortObserver for NoopObserver {}

/// Event forwarded by `ChannelObserver`.
#[derive(Debug, Clone, PartialEq)]
pub enum SortEvent {
    Bars(Vec<Bar>),
    Markers(Vec<MarkerSet>),
    Stats(StatsSnapshot),
    RunState(RunState),
}

/// Forwards every callback as a `SortEvent` over a channel.
///
/// Send errors are ignored: the receiving UI may already have exited.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: Sender<SortEvent>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<SortEvent>) -> Self {
        Self { tx }
    }
}

impl SortObserver for ChannelObserver {
    fn on_bars(&self, bars: &[Bar]) {
        let _ = self.tx.send(SortEvent::Bars(bars.to_vec()));
    }

    fn on_markers(&self, markers: &[MarkerSet]) {
        let _ = self.tx.send(SortEvent::Markers(markers.to_vec()));
    }

    fn on_stats(&self, stats: &StatsSnapshot) {
        let _ = self.tx.send(SortEvent::Stats(*stats));
    }

    fn on_run_state(&self, state: RunState) {
        let _ = self.tx.send(SortEvent::RunState(state));
    }
}
