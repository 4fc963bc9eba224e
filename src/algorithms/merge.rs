//! Merge sort.
//!
//! Top-down recursion on inclusive bounds. Each merge snapshots both halves
//! and writes back one element per step, so the bars visibly rebuild.

use crate::engine::Stepper;
use crate::error::Result;

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

fn sort_range(step: &mut Stepper<'_>, start: usize, end: usize) -> Result<()> {
    if start >= end {
        return Ok(());
    }

    let mid = start + (end - start) / 2;
    sort_range(step, start, mid)?;
    sort_range(step, mid + 1, end)?;
    merge(step, start, mid, end)
}

/// Stable merge of `start..=mid` and `mid+1..=end`. Ties take the left value.
fn merge(step: &mut Stepper<'_>, start: usize, mid: usize, end: usize) -> Result<()> {
    let left = step.snapshot(start, mid)?;
    let right = step.snapshot(mid + 1, end)?;

    step.highlight_range(start, end)?;

    let (mut i, mut j, mut k) = (0, 0, start);
    while i < left.len() && j < right.len() {
        step.record_comparison();
        let value = if left[i] <= right[j] {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        step.write(k, value)?;
        k += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        step.write(k, value)?;
        k += 1;
    }

    step.clear_range(start, end)
}
