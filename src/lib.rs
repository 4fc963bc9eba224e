//! sortviz - step-by-step sorting algorithm visualizer.
//!
//! The library holds the sorting engine (sequence state, step primitives,
//! algorithm executors and the playback controller), configuration and the
//! terminal UI. The `sortviz` binary is a thin command dispatcher on top.

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod sequence;
pub mod tui;

pub use algorithms::Algorithm;
pub use config::Config;
pub use engine::{PlaybackController, RunReport, Settings};
pub use error::SortError;
pub use sequence::{Marker, Sequence, Session};
