//! Playback controller behavior seen from outside the crate

use sortviz::engine::{RunState, SortEvent};
use sortviz::{Algorithm, PlaybackController, Settings, SortError};

use crate::helpers::{controller, observed_controller, scrambled, sorted_copy};

#[test]
fn small_sizes_sort_for_every_algorithm() {
    for algorithm in Algorithm::ALL {
        for n in 1..=12 {
            let input = scrambled(n, 5);
            let mut ctl = controller(algorithm, &input);
            ctl.start().unwrap();
            let report = ctl.wait().unwrap().unwrap();
            assert_eq!(report.sorted, sorted_copy(&input), "{} n={}", algorithm, n);
            assert_eq!(report.len, n);
        }
    }
}

#[test]
fn empty_sequence_is_rejected_without_a_run() {
    let mut ctl = controller(Algorithm::Quick, &[]);
    assert_eq!(ctl.start(), Err(SortError::EmptySequence));
    assert_eq!(ctl.run_state(), RunState::Idle);
    assert_eq!(ctl.values(), Some(&[][..]));
}

#[test]
fn same_seed_generates_same_sequence() {
    let settings = Settings {
        seed: Some(2024),
        size: 40,
        ..Settings::default()
    };
    let (a, _rx_a) = observed_controller(settings.clone());
    let (b, _rx_b) = observed_controller(settings);
    assert_eq!(a.values(), b.values());
    assert!(a
        .values()
        .unwrap()
        .iter()
        .all(|v| (5..=104).contains(v)));
}

#[test]
fn run_events_start_running_and_end_idle() {
    let settings = Settings {
        seed: Some(8),
        size: 10,
        algorithm: Algorithm::Selection,
        ..Settings::default()
    };
    let (mut ctl, rx) = observed_controller(settings);
    // initial publish: bars, markers, stats
    let initial: Vec<SortEvent> = rx.try_iter().collect();
    assert!(matches!(initial.first(), Some(SortEvent::Bars(bars)) if bars.len() == 10));

    ctl.start().unwrap();
    ctl.wait().unwrap().unwrap();

    let events: Vec<SortEvent> = rx.try_iter().collect();
    let first_state = events.iter().find_map(|e| match e {
        SortEvent::RunState(state) => Some(*state),
        _ => None,
    });
    assert_eq!(first_state, Some(RunState::Running));
    assert_eq!(events.last(), Some(&SortEvent::RunState(RunState::Idle)));

    let final_markers = events
        .iter()
        .rev()
        .find_map(|e| match e {
            SortEvent::Markers(markers) => Some(markers.clone()),
            _ => None,
        })
        .unwrap();
    assert!(final_markers
        .iter()
        .all(|m| m.contains(sortviz::Marker::Sorted)));

    let final_bars = events
        .iter()
        .rev()
        .find_map(|e| match e {
            SortEvent::Bars(bars) => Some(bars.clone()),
            _ => None,
        })
        .unwrap();
    let values: Vec<u32> = final_bars.iter().map(|b| b.value).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn invalid_speed_leaves_settings_unchanged() {
    let mut ctl = controller(Algorithm::Bubble, &[3, 2, 1]);
    assert_eq!(ctl.set_speed(0), Err(SortError::InvalidSpeed(0)));
    assert_eq!(ctl.set_speed(11), Err(SortError::InvalidSpeed(11)));
    assert_eq!(ctl.settings().speed.get(), 5);
    ctl.set_speed(10).unwrap();
    assert_eq!(ctl.settings().speed.get(), 10);
}

#[test]
fn statistics_reset_on_generate() {
    let mut ctl = controller(Algorithm::Bubble, &[4, 3, 2, 1]);
    ctl.start().unwrap();
    ctl.wait().unwrap().unwrap();
    assert!(ctl.session().unwrap().stats.comparisons > 0);

    ctl.generate(8).unwrap();
    let session = ctl.session().unwrap();
    assert_eq!(session.stats.comparisons, 0);
    assert_eq!(session.stats.swaps, 0);
    assert_eq!(session.sequence.len(), 8);
}

#[test]
fn controller_can_run_again_after_completion() {
    let mut ctl: PlaybackController = controller(Algorithm::Insertion, &[9, 1, 5]);
    ctl.start().unwrap();
    ctl.wait().unwrap().unwrap();

    ctl.set_algorithm(Algorithm::Merge).unwrap();
    ctl.load(vec![6, 2, 4]).unwrap();
    ctl.start().unwrap();
    let report = ctl.wait().unwrap().unwrap();
    assert_eq!(report.algorithm, Algorithm::Merge);
    assert_eq!(report.sorted, vec![2, 4, 6]);
}
