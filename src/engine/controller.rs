//! Playback controller.
//!
//! Owns the run state machine (`Idle -> Running -> Idle`). While idle the
//! controller holds the session; `start` moves it into an executor thread,
//! and `poll`/`wait` take it back once the executor returns. Every mutating
//! request made while a run is in flight is rejected with `SortError::Busy`
//! and changes nothing.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use super::cancel::CancelToken;
use super::observer::{RunState, SortObserver};
use super::pacing::{Pacer, Speed};
use super::step::Stepper;
use crate::algorithms::Algorithm;
use crate::error::{Result, SortError};
use crate::sequence::{Marker, Sequence, Session, StatsSnapshot, ValueRange};

/// Allowed array sizes for `generate`. `max` never exceeds `Sequence::MAX_LEN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimits {
    pub min: usize,
    pub max: usize,
}

impl SizeLimits {
    pub fn check(&self, size: usize) -> Result<usize> {
        let max = self.max.min(Sequence::MAX_LEN);
        if size == 0 || size < self.min || size > max {
            return Err(SortError::InvalidSize {
                size,
                min: self.min,
                max,
            });
        }
        Ok(size)
    }
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self { min: 5, max: 200 }
    }
}

/// Validated playback configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub algorithm: Algorithm,
    pub speed: Speed,
    /// Size used by `generate`-on-reset
    pub size: usize,
    pub size_limits: SizeLimits,
    pub values: ValueRange,
    /// Seed for reproducible sequences; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            speed: Speed::default(),
            size: 50,
            size_limits: SizeLimits::default(),
            values: ValueRange::default(),
            seed: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.size_limits.min == 0
            || self.size_limits.min > self.size_limits.max
            || self.size_limits.max > Sequence::MAX_LEN
        {
            return Err(SortError::InvalidSize {
                size: self.size,
                min: self.size_limits.min,
                max: self.size_limits.max,
            });
        }
        self.size_limits.check(self.size)?;
        ValueRange::new(self.values.min, self.values.max)?;
        Ok(())
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub len: usize,
    #[serde(flatten)]
    pub stats: StatsSnapshot,
    pub sorted: Vec<u32>,
}

struct Worker {
    handle: JoinHandle<(Session, Result<()>)>,
    cancel: CancelToken,
    algorithm: Algorithm,
}

/// Drives one sort at a time on a dedicated executor thread.
pub struct PlaybackController {
    settings: Settings,
    session: Option<Session>,
    worker: Option<Worker>,
    pacer: Arc<dyn Pacer>,
    observer: Arc<dyn SortObserver>,
    rng: StdRng,
}

impl PlaybackController {
    /// Create a controller and generate the initial sequence.
    pub fn new(
        settings: Settings,
        pacer: Arc<dyn Pacer>,
        observer: Arc<dyn SortObserver>,
    ) -> Result<Self> {
        settings.validate()?;
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let sequence = Sequence::generate(settings.size, settings.values, &mut rng);

        let controller = Self {
            settings,
            session: Some(Session::new(sequence)),
            worker: None,
            pacer,
            observer,
            rng,
        };
        controller.publish_session();
        Ok(controller)
    }

    pub fn run_state(&self) -> RunState {
        if self.worker.is_some() {
            RunState::Running
        } else {
            RunState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state() == RunState::Running
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The session, unavailable while a run owns it.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Snapshot of the current values, unavailable while running.
    pub fn values(&self) -> Option<&[u32]> {
        self.session.as_ref().map(|s| s.sequence.values())
    }

    /// Replace the sequence with `size` random values and reset statistics.
    pub fn generate(&mut self, size: usize) -> Result<()> {
        self.ensure_idle()?;
        let size = self.settings.size_limits.check(size)?;
        self.settings.size = size;
        let sequence = Sequence::generate(size, self.settings.values, &mut self.rng);
        tracing::debug!(size, "generated sequence");
        self.replace_session(Session::new(sequence));
        Ok(())
    }

    /// Regenerate with the last-used size.
    pub fn reset(&mut self) -> Result<()> {
        self.generate(self.settings.size)
    }

    /// Replace the sequence with explicit values. Empty input is accepted.
    pub fn load(&mut self, values: Vec<u32>) -> Result<()> {
        self.ensure_idle()?;
        let sequence = Sequence::from_values(values)?;
        tracing::debug!(len = sequence.len(), "loaded sequence");
        self.replace_session(Session::new(sequence));
        Ok(())
    }

    pub fn set_speed(&mut self, speed: u8) -> Result<()> {
        self.ensure_idle()?;
        self.settings.speed = Speed::new(speed)?;
        Ok(())
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<()> {
        self.ensure_idle()?;
        self.settings.algorithm = algorithm;
        Ok(())
    }

    /// Start sorting with the configured algorithm.
    ///
    /// Rejected with `Busy` while a run is in flight and with `EmptySequence`
    /// when there is nothing to sort; a rejection changes no state.
    pub fn start(&mut self) -> Result<()> {
        self.ensure_idle()?;
        let Some(mut session) = self.session.take() else {
            return Err(SortError::EmptySequence);
        };
        if session.sequence.is_empty() {
            self.session = Some(session);
            return Err(SortError::EmptySequence);
        }

        let algorithm = self.settings.algorithm;
        let delay = self.settings.speed.delay();
        let cancel = CancelToken::new();

        session.stats.start();
        session.markers.clear_transient();
        self.observer.on_stats(&session.stats.snapshot());
        self.observer.on_run_state(RunState::Running);
        tracing::debug!(
            %algorithm,
            len = session.sequence.len(),
            delay_ms = delay.as_millis() as u64,
            "starting sort"
        );

        let pacer = Arc::clone(&self.pacer);
        let observer = Arc::clone(&self.observer);
        let token = cancel.clone();
        let handle = thread::spawn(move || {
            let result = {
                let mut step = Stepper::new(&mut session, &*pacer, &*observer, &token, delay);
                algorithm.execute(&mut step)
            };
            (session, result)
        });

        self.worker = Some(Worker {
            handle,
            cancel,
            algorithm,
        });
        Ok(())
    }

    /// Ask the running sort to stop at its next step.
    ///
    /// Returns false when nothing is running. The run still has to be
    /// collected with `poll` or `wait`.
    pub fn cancel(&self) -> bool {
        match &self.worker {
            Some(worker) => {
                worker.cancel.cancel();
                tracing::debug!(algorithm = %worker.algorithm, "cancellation requested");
                true
            }
            None => false,
        }
    }

    /// Collect a finished run without blocking.
    ///
    /// Returns `None` while idle or while the executor is still working.
    pub fn poll(&mut self) -> Option<Result<RunReport>> {
        let finished = self
            .worker
            .as_ref()
            .is_some_and(|worker| worker.handle.is_finished());
        if finished {
            self.wait()
        } else {
            None
        }
    }

    /// Block until the current run ends and collect it. `None` when idle.
    pub fn wait(&mut self) -> Option<Result<RunReport>> {
        let worker = self.worker.take()?;
        Some(self.finish(worker))
    }

    fn finish(&mut self, worker: Worker) -> Result<RunReport> {
        let algorithm = worker.algorithm;
        let outcome = match worker.handle.join() {
            Ok((mut session, result)) => {
                session.stats.tick();
                let outcome = match result {
                    Ok(()) => {
                        session.markers.mark_all(Marker::Sorted);
                        let report = RunReport {
                            algorithm,
                            len: session.sequence.len(),
                            stats: session.stats.snapshot(),
                            sorted: session.sequence.values().to_vec(),
                        };
                        tracing::info!(
                            %algorithm,
                            len = report.len,
                            comparisons = report.stats.comparisons,
                            swaps = report.stats.swaps,
                            elapsed_ms = report.stats.elapsed_ms,
                            "sort finished"
                        );
                        Ok(report)
                    }
                    Err(err) => {
                        session.markers.clear_transient();
                        if err == SortError::Cancelled {
                            tracing::info!(%algorithm, "sort cancelled");
                        } else {
                            tracing::warn!(%algorithm, error = %err, "sort aborted");
                        }
                        Err(err)
                    }
                };
                self.session = Some(session);
                outcome
            }
            Err(_) => {
                tracing::warn!(%algorithm, "sort worker panicked, regenerating sequence");
                let sequence =
                    Sequence::generate(self.settings.size, self.settings.values, &mut self.rng);
                self.session = Some(Session::new(sequence));
                Err(SortError::WorkerPanicked)
            }
        };

        self.publish_session();
        self.observer.on_run_state(RunState::Idle);
        outcome
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.is_running() {
            tracing::debug!("request rejected: sort in progress");
            return Err(SortError::Busy);
        }
        Ok(())
    }

    fn replace_session(&mut self, session: Session) {
        self.session = Some(session);
        self.publish_session();
    }

    /// Push the full idle-state picture to the observer.
    fn publish_session(&self) {
        if let Some(session) = &self.session {
            self.observer.on_bars(&session.sequence.bars());
            self.observer.on_markers(session.markers.as_slice());
            self.observer.on_stats(&session.stats.snapshot());
        }
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.cancel.cancel();
            let _ = worker.handle.join();
        }
    }
}
