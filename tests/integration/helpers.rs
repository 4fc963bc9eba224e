//! Shared fixtures for the integration tests

use std::path::Path;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use assert_cmd::Command;
use sortviz::engine::{ChannelObserver, InstantPacer, NoopObserver, SortEvent};
use sortviz::{Algorithm, PlaybackController, Settings};

/// The sortviz binary with an isolated config file and no colors.
pub fn sortviz(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sortviz"));
    cmd.env("SORTVIZ_CONFIG", config)
        .env("NO_COLOR", "1")
        .env_remove("SORTVIZ_LOG_FILE")
        .env_remove("RUST_LOG");
    cmd
}

/// Instant-paced controller loaded with `values`.
pub fn controller(algorithm: Algorithm, values: &[u32]) -> PlaybackController {
    let settings = Settings {
        algorithm,
        seed: Some(11),
        ..Settings::default()
    };
    let mut controller = PlaybackController::new(
        settings,
        Arc::new(InstantPacer::new()),
        Arc::new(NoopObserver),
    )
    .unwrap();
    controller.load(values.to_vec()).unwrap();
    controller
}

/// Instant-paced controller whose events are delivered to the receiver.
pub fn observed_controller(settings: Settings) -> (PlaybackController, Receiver<SortEvent>) {
    let (tx, rx) = mpsc::channel();
    let controller = PlaybackController::new(
        settings,
        Arc::new(InstantPacer::new()),
        Arc::new(ChannelObserver::new(tx)),
    )
    .unwrap();
    (controller, rx)
}

/// Deterministic pseudo-random values in 5..=104.
pub fn scrambled(n: usize, seed: u32) -> Vec<u32> {
    let mut val = seed;
    (0..n)
        .map(|_| {
            val = val.wrapping_mul(1103515245).wrapping_add(12345);
            (val >> 16) % 100 + 5
        })
        .collect()
}

pub fn sorted_copy(values: &[u32]) -> Vec<u32> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}
