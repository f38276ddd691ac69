use crate::core::{AxisRange, Sample};

/// Returns samples whose position falls inside the range, inclusive at both bounds.
///
/// An inverted range (`min > max`) keeps nothing.
#[must_use]
pub fn samples_in_range(samples: &[Sample], range: AxisRange) -> Vec<Sample> {
    samples
        .iter()
        .copied()
        .filter(|sample| range.contains(sample.x))
        .collect()
}
