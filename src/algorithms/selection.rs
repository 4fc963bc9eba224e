//! Selection sort.

use crate::engine::Stepper;
use crate::error::Result;
use crate::sequence::Marker;

/// Select the minimum of the unsorted suffix and move it to the front.
///
/// The running minimum carries the `Pivot` marker while the suffix is scanned.
pub(super) fn sort(step: &mut Stepper<'_>) -> Result<()> {
    let len = step.len();

    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;
        step.mark(min_index, Marker::Pivot)?;

        for j in (i + 1)..len {
            // strictly greater keeps the earliest of equal minimums
            if step.compare(min_index, j)? {
                step.unmark(min_index, Marker::Pivot)?;
                min_index = j;
                step.mark(min_index, Marker::Pivot)?;
            }
        }

        if min_index != i {
            step.swap(i, min_index)?;
        }

        step.mark_sorted(i)?;
        step.unmark(min_index, Marker::Pivot)?;
    }

    if len > 0 {
        step.mark_sorted(len - 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::{run, scrambled};

    #[test]
    fn sorts_small_example() {
        let session = run(&[5, 3, 8, 1], sort);
        assert_eq!(session.sequence.values(), &[1, 3, 5, 8]);
        assert_eq!(session.stats.comparisons, 6);
    }

    #[test]
    fn swaps_at_most_n_minus_one() {
        for seed in 1..6 {
            let input = scrambled(40, seed);
            let session = run(&input, sort);
            assert!(session.sequence.is_sorted());
            assert!(session.stats.swaps <= 39);
        }
    }

    #[test]
    fn reverse_input_swaps_half() {
        let session = run(&[6, 5, 4, 3, 2, 1], sort);
        assert_eq!(session.sequence.values(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(session.stats.swaps, 3);
    }

    #[test]
    fn leaves_no_pivot_markers() {
        let session = run(&scrambled(25, 9), sort);
        assert_eq!(session.markers.count(Marker::Pivot), 0);
        assert_eq!(session.markers.count(Marker::Sorted), 25);
    }
}
