//! Animation-synchronized sort execution.
//!
//! # Architecture
//!
//! - `step`: the `Stepper` primitives (compare, swap, mark, ...) that mutate
//!   the session, notify observers and pause once per step
//! - `pacing`: `Speed` and the `Pacer` strategies that implement the pause
//! - `cancel`: the `CancelToken` checked at every pause
//! - `observer`: callbacks consumed by renderers
//! - `controller`: the `PlaybackController` run state machine
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use sortviz::engine::{InstantPacer, NoopObserver, PlaybackController, Settings};
//!
//! let mut controller = PlaybackController::new(
//!     Settings::default(),
//!     Arc::new(InstantPacer::new()),
//!     Arc::new(NoopObserver),
//! )
//! .unwrap();
//! controller.start().unwrap();
//! let report = controller.wait().unwrap().unwrap();
//! println!("{} comparisons", report.stats.comparisons);
//! ```

mod cancel;
mod controller;
mod observer;
mod pacing;
mod step;

pub use cancel::CancelToken;
pub use controller::{PlaybackController, RunReport, Settings, SizeLimits};
pub use observer::{ChannelObserver, NoopObserver, RunState, SortEvent, SortObserver};
pub use pacing::{InstantPacer, Pacer, SleepPacer, Speed};
pub use step::Stepper;
