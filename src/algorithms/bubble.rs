//! Bubble sort.

use crate::engine::Stepper;
use crate::error::Result;

/// Adjacent compare-and-swap passes; each pass settles the largest
/// remaining value at the end of the unsorted prefix.
pub(super) fn sort(step: &mut Stepper<'_>) -> Result<()> {
    let len = step.len();

    for i in 0..len.saturating_sub(1) {
        for j in 0..len - i - 1 {
            if step.compare(j, j + 1)? {
                step.swap(j, j + 1)?;
            }
        }
        step.mark_sorted(len - 1 - i)?;
    }

    step.mark_all_sorted();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::{run, scrambled};
    use crate::sequence::Marker;

    #[test]
    fn sorts_small_example() {
        let session = run(&[5, 3, 8, 1], sort);
        assert_eq!(session.sequence.values(), &[1, 3, 5, 8]);
        assert_eq!(session.stats.comparisons, 6);
        // one swap per inversion: (5,3) (5,1) (3,1) (8,1)
        assert_eq!(session.stats.swaps, 4);
    }

    #[test]
    fn comparisons_are_n_choose_two() {
        for n in [1usize, 2, 7, 30] {
            let session = run(&scrambled(n, 3), sort);
            assert_eq!(session.stats.comparisons as usize, n * (n - 1) / 2);
            assert!(session.sequence.is_sorted());
        }
    }

    #[test]
    fn sorted_input_needs_no_swaps() {
        let session = run(&[1, 2, 3, 4, 5], sort);
        assert_eq!(session.stats.swaps, 0);
        assert_eq!(session.markers.count(Marker::Sorted), 5);
    }

    #[test]
    fn single_element_is_marked_sorted() {
        let session = run(&[42], sort);
        assert_eq!(session.stats.comparisons, 0);
        assert_eq!(session.markers.count(Marker::Sorted), 1);
    }
}
