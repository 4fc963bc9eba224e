//! Insertion sort.

use crate::engine::Stepper;
use crate::error::Result;
use crate::sequence::Marker;

/// Sink each element left through the sorted prefix by adjacent swaps.
pub(super) fn sort(step: &mut Stepper<'_>) -> Result<()> {
    let len = step.len();

    for i in 1..len {
        let mut j = i;
        step.mark(j, Marker::Current)?;

        while j > 0 && step.compare(j - 1, j)? {
            step.swap(j - 1, j)?;
            j -= 1;
        }

        step.unmark(j, Marker::Current)?;
        step.mark_sorted(j)?;
    }

    step.mark_all_sorted();
    Ok(())
}
