//! Quick sort with Lomuto partitioning.

use crate::engine::Stepper;
use crate::error::Result;
use crate::sequence::Marker;

pub(super) fn sort(step: &mut Stepper<'_>) -> Result<()> {
    let len = step.len();
    if len > 0 {
        sort_range(step, 0, len - 1)?;
    }

    for index in 0..len {
        step.mark_sorted(index)?;
    }
    Ok(())
}

/// Recurse into the smaller side and loop on the larger one, so the stack
/// depth stays logarithmic even when every pivot lands at an edge.
fn sort_range(step: &mut Stepper<'_>, mut start: usize, mut end: usize) -> Result<()> {
    while start < end {
        let pivot = partition(step, start, end)?;
        if pivot - start < end - pivot {
            if pivot > start {
                sort_range(step, start, pivot - 1)?;
            }
            start = pivot + 1;
        } else {
            sort_range(step, pivot + 1, end)?;
            if pivot == start {
                break;
            }
            end = pivot - 1;
        }
    }
    Ok(())
}

/// Partition `start..=end` around the value at `end`; returns its final index.
///
/// Values strictly smaller than the pivot move to the front.
fn partition(step: &mut Stepper<'_>, start: usize, end: usize) -> Result<usize> {
    step.mark(end, Marker::Pivot)?;

    let mut store = start;
    for i in start..end {
        if step.compare(end, i)? {
            if i != store {
                step.swap(i, store)?;
            }
            store += 1;
        }
    }

    // paid even when store == end
    step.swap(store, end)?;
    step.unmark(end, Marker::Pivot)?;

    Ok(store)
}
