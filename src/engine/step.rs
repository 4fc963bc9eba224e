//! Step primitives.
//!
//! A `Stepper` wraps the session for the duration of one run. Each primitive
//! updates session state, notifies the observer, and pays exactly one delay
//! interval through the pacer (the merge helpers `clear_range` and
//! `record_comparison` pay none). Executors drive the sort exclusively
//! through these calls.

use std::time::Duration;

use super::cancel::CancelToken;
use super::observer::SortObserver;
use super::pacing::Pacer;
use crate::error::Result;
use crate::sequence::{Marker, Session};

/// Step primitives over a borrowed session.
pub struct Stepper<'a> {
    session: &'a mut Session,
    pacer: &'a dyn Pacer,
    observer: &'a dyn SortObserver,
    cancel: &'a CancelToken,
    delay: Duration,
}

impl<'a> Stepper<'a> {
    pub fn new(
        session: &'a mut Session,
        pacer: &'a dyn Pacer,
        observer: &'a dyn SortObserver,
        cancel: &'a CancelToken,
        delay: Duration,
    ) -> Self {
        Self {
            session,
            pacer,
            observer,
            cancel,
            delay,
        }
    }

    /// Length of the sequence being sorted.
    pub fn len(&self) -> usize {
        self.session.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.session.sequence.is_empty()
    }

    /// Mark `i` and `j` current, pause, count a comparison.
    ///
    /// Returns whether the value at `i` is strictly greater than at `j`.
    pub fn compare(&mut self, i: usize, j: usize) -> Result<bool> {
        let a = self.session.sequence.get(i)?;
        let b = self.session.sequence.get(j)?;

        self.session.markers.add(i, Marker::Current);
        self.session.markers.add(j, Marker::Current);
        self.notify_markers();

        self.pause()?;

        self.session.stats.comparisons += 1;
        self.session.markers.remove(i, Marker::Current);
        self.session.markers.remove(j, Marker::Current);
        self.notify_markers();
        self.notify_stats();

        Ok(a > b)
    }

    /// Mark `i` and `j` comparing, pause, exchange their values, count a swap.
    ///
    /// `i == j` leaves the values unchanged but still pays the delay and
    /// counts the swap.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.session.sequence.check(i)?;
        self.session.sequence.check(j)?;

        self.session.markers.add(i, Marker::Comparing);
        self.session.markers.add(j, Marker::Comparing);
        self.notify_markers();

        self.pause()?;

        self.session.sequence.swap(i, j)?;
        self.notify_bars();

        self.session.markers.remove(i, Marker::Comparing);
        self.session.markers.remove(j, Marker::Comparing);
        self.notify_markers();

        self.session.stats.swaps += 1;
        self.notify_stats();
        Ok(())
    }

    /// Apply a marker and hold it for one delay.
    pub fn mark(&mut self, index: usize, marker: Marker) -> Result<()> {
        self.session.sequence.check(index)?;
        self.session.markers.add(index, marker);
        self.notify_markers();
        self.pause()?;
        self.notify_stats();
        Ok(())
    }

    /// Remove a marker, then pause for one delay.
    pub fn unmark(&mut self, index: usize, marker: Marker) -> Result<()> {
        self.session.sequence.check(index)?;
        self.session.markers.remove(index, marker);
        self.notify_markers();
        self.pause()?;
        self.notify_stats();
        Ok(())
    }

    /// Apply the persistent `Sorted` marker. Idempotent apart from the delay.
    pub fn mark_sorted(&mut self, index: usize) -> Result<()> {
        self.mark(index, Marker::Sorted)
    }

    /// Mark every position sorted at once, without a delay.
    pub fn mark_all_sorted(&mut self) {
        self.session.markers.mark_all(Marker::Sorted);
        self.notify_markers();
    }

    /// Mark the inclusive span `start..=end` current and pause once.
    pub fn highlight_range(&mut self, start: usize, end: usize) -> Result<()> {
        self.session.sequence.check(start)?;
        self.session.sequence.check(end)?;
        for index in start..=end {
            self.session.markers.add(index, Marker::Current);
        }
        self.notify_markers();
        self.pause()?;
        self.notify_stats();
        Ok(())
    }

    /// Remove the `Current` marker from `start..=end`. No delay.
    pub fn clear_range(&mut self, start: usize, end: usize) -> Result<()> {
        self.session.sequence.check(start)?;
        self.session.sequence.check(end)?;
        for index in start..=end {
            self.session.markers.remove(index, Marker::Current);
        }
        self.notify_markers();
        Ok(())
    }

    /// Copy of the values in `start..=end`.
    pub fn snapshot(&self, start: usize, end: usize) -> Result<Vec<u32>> {
        self.session.sequence.snapshot(start, end)
    }

    /// Store `value` at `index` and pause once.
    pub fn write(&mut self, index: usize, value: u32) -> Result<()> {
        self.session.sequence.set(index, value)?;
        self.notify_bars();
        self.pause()?;
        self.notify_stats();
        Ok(())
    }

    /// Count a comparison the executor made on snapshot values. No delay.
    pub fn record_comparison(&mut self) {
        self.session.stats.comparisons += 1;
        self.session.stats.tick();
        self.notify_stats();
    }

    fn pause(&mut self) -> Result<()> {
        self.pacer.pause(self.delay, self.cancel)?;
        self.session.stats.steps += 1;
        self.session.stats.tick();
        Ok(())
    }

    fn notify_bars(&self) {
        self.observer.on_bars(&self.session.sequence.bars());
    }

    fn notify_markers(&self) {
        self.observer.on_markers(self.session.markers.as_slice());
    }

    fn notify_stats(&self) {
        self.observer.on_stats(&self.session.stats.snapshot());
    }
}
