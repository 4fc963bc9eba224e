//! Every executor sorts every input into a permutation of itself

use sortviz::{Algorithm, Marker};

use crate::helpers::{controller, scrambled, sorted_copy};

fn sort_with(algorithm: Algorithm, values: &[u32]) -> sortviz::RunReport {
    let mut ctl = controller(algorithm, values);
    ctl.start().unwrap();
    ctl.wait().unwrap().unwrap()
}

#[test]
fn all_algorithms_sort_every_size_up_to_200() {
    for algorithm in Algorithm::ALL {
        for n in 1..=200 {
            let input = scrambled(n, n as u32 * 31 + 7);
            let report = sort_with(algorithm, &input);
            assert_eq!(report.sorted, sorted_copy(&input), "{} n={}", algorithm, n);

            let n = n as u64;
            match algorithm {
                Algorithm::Bubble => assert_eq!(report.stats.comparisons, n * (n - 1) / 2),
                Algorithm::Selection => assert!(report.stats.swaps < n.max(1)),
                _ => {}
            }
        }
    }
}

#[test]
fn all_algorithms_handle_duplicates_and_constant_input() {
    let dups = vec![4, 4, 1, 4, 1, 9, 9, 1];
    let constant = vec![7; 12];
    for algorithm in Algorithm::ALL {
        assert_eq!(sort_with(algorithm, &dups).sorted, sorted_copy(&dups));
        let report = sort_with(algorithm, &constant);
        assert_eq!(report.sorted, constant);
    }
}

#[test]
fn sorted_input_needs_no_swaps_for_bubble_and_insertion() {
    let input: Vec<u32> = (1..=20).collect();
    for algorithm in [Algorithm::Bubble, Algorithm::Insertion] {
        let report = sort_with(algorithm, &input);
        assert_eq!(report.stats.swaps, 0, "{}", algorithm);
    }
}

#[test]
fn bubble_counts_every_pair_once() {
    let report = sort_with(Algorithm::Bubble, &[5, 3, 8, 1]);
    assert_eq!(report.sorted, vec![1, 3, 5, 8]);
    assert_eq!(report.stats.comparisons, 6);
    assert_eq!(report.stats.swaps, 4);
}

#[test]
fn quick_sort_handles_long_ascending_input() {
    // last-element pivot is always the maximum here
    let input: Vec<u32> = (1..=4000).collect();
    let report = sort_with(Algorithm::Quick, &input);
    assert_eq!(report.sorted, input);
    assert_eq!(report.stats.comparisons, 4000 * 3999 / 2);
}

#[test]
fn merge_sort_writes_without_swapping() {
    let report = sort_with(Algorithm::Merge, &[5, 3, 8, 1]);
    assert_eq!(report.sorted, vec![1, 3, 5, 8]);
    assert_eq!(report.stats.comparisons, 5);
    assert_eq!(report.stats.swaps, 0);
}

#[test]
fn completed_run_marks_every_bar_sorted() {
    for algorithm in Algorithm::ALL {
        let mut ctl = controller(algorithm, &scrambled(25, 3));
        ctl.start().unwrap();
        ctl.wait().unwrap().unwrap();
        let session = ctl.session().unwrap();
        assert_eq!(session.markers.count(Marker::Sorted), 25);
        assert_eq!(session.markers.count(Marker::Comparing), 0);
        assert_eq!(session.markers.count(Marker::Current), 0);
        assert_eq!(session.markers.count(Marker::Pivot), 0);
    }
}

#[test]
fn same_input_gives_same_statistics() {
    let input = scrambled(60, 99);
    for algorithm in Algorithm::ALL {
        let a = sort_with(algorithm, &input);
        let b = sort_with(algorithm, &input);
        assert_eq!(a.stats.comparisons, b.stats.comparisons);
        assert_eq!(a.stats.swaps, b.stats.swaps);
        assert_eq!(a.stats.steps, b.stats.steps);
    }
}
