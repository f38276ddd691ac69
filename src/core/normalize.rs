use indexmap::IndexMap;
use indexmap::map::Entry;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{AxisKind, RawSample, Sample};
use crate::error::{ChartError, ChartResult};

/// Canonical sample list together with the axis kind it was derived from.
///
/// `samples` is strictly increasing in `x`. `axis_kind` is `None` only for an
/// empty series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedSeries {
    pub axis_kind: Option<AxisKind>,
    pub samples: Vec<Sample>,
}

impl NormalizedSeries {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }
}

/// Validates raw pairs and converts them into a sorted, deduplicated series.
///
/// The first sample fixes the axis kind; every later position must share it.
/// When several samples land on the same `x`, the first one seen is kept.
pub fn normalize(raw_samples: &[RawSample]) -> ChartResult<NormalizedSeries> {
    let Some(first) = raw_samples.first() else {
        return Ok(NormalizedSeries::default());
    };
    let axis_kind = first.position.kind();

    let mut by_position: IndexMap<OrderedFloat<f64>, f64> =
        IndexMap::with_capacity(raw_samples.len());
    for raw in raw_samples {
        let x = raw.position.to_linear_on(axis_kind)?;
        let y = checked_value(raw.value)?;
        if let Entry::Vacant(slot) = by_position.entry(OrderedFloat(x)) {
            slot.insert(y);
        }
    }

    let duplicate_count = raw_samples.len() - by_position.len();
    let mut samples: Vec<Sample> = by_position
        .into_iter()
        .map(|(x, y)| Sample::new(x.into_inner(), y))
        .collect();
    samples.sort_by(|a, b| a.x.total_cmp(&b.x));

    if duplicate_count > 0 {
        warn!(
            duplicate_count,
            canonical_count = samples.len(),
            "dropped samples sharing a position"
        );
    }
    debug!(
        original_count = raw_samples.len(),
        canonical_count = samples.len(),
        axis_kind = %axis_kind,
        "normalized samples"
    );

    Ok(NormalizedSeries {
        axis_kind: Some(axis_kind),
        samples,
    })
}

fn checked_value(value: f64) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidValueType(format!(
            "sample value must be a finite number, got {value}"
        )))
    }
}
