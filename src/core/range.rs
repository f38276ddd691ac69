use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{AxisKind, AxisRange, NormalizedSeries, RawPosition};
use crate::error::{ChartError, ChartResult};

/// Caller override for the x-axis bounds. Each bound applies independently.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Window {
    #[serde(default)]
    pub min: Option<RawPosition>,
    #[serde(default)]
    pub max: Option<RawPosition>,
}

impl Window {
    #[must_use]
    pub fn new(min: Option<RawPosition>, max: Option<RawPosition>) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn from_min(min: impl Into<RawPosition>) -> Self {
        Self::new(Some(min.into()), None)
    }

    #[must_use]
    pub fn from_max(max: impl Into<RawPosition>) -> Self {
        Self::new(None, Some(max.into()))
    }

    #[must_use]
    pub fn between(min: impl Into<RawPosition>, max: impl Into<RawPosition>) -> Self {
        Self::new(Some(min.into()), Some(max.into()))
    }

    #[must_use]
    pub fn is_unbounded(self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Overrides the bounds of `range` present in this window.
    pub fn apply(self, range: AxisRange, axis_kind: AxisKind) -> ChartResult<AxisRange> {
        let min = match self.min {
            Some(bound) => bound.to_linear_on(axis_kind)?,
            None => range.min,
        };
        let max = match self.max {
            Some(bound) => bound.to_linear_on(axis_kind)?,
            None => range.max,
        };
        Ok(AxisRange::new(min, max))
    }
}

/// Data-derived x bounds with `window` applied, before any widening.
///
/// These are the bounds a sample must fall inside (inclusive) to be drawn.
pub fn windowed_x_range(
    series: &NormalizedSeries,
    window: Option<&Window>,
) -> ChartResult<AxisRange> {
    let Some(axis_kind) = series.axis_kind else {
        return Err(empty_series_error());
    };
    let data_x = AxisRange::from_values(series.samples.iter().map(|sample| sample.x))
        .ok_or_else(empty_series_error)?;
    match window {
        Some(window) => window.apply(data_x, axis_kind),
        None => Ok(data_x),
    }
}

/// Computes the x and y ranges used for mapping.
///
/// The x-range is data-derived, then overridden by `window`, then widened if
/// it still has zero width. The widening pivot is the first sample kept by
/// the window, or the first sample when the window keeps none. The y-range is
/// data-derived and widened around the first sample's value when flat.
pub fn resolve_ranges(
    series: &NormalizedSeries,
    window: Option<&Window>,
) -> ChartResult<(AxisRange, AxisRange)> {
    let visible_x = windowed_x_range(series, window)?;
    let Some(first) = series.samples.first() else {
        return Err(empty_series_error());
    };
    let data_y = AxisRange::from_values(series.samples.iter().map(|sample| sample.y))
        .unwrap_or(AxisRange::new(first.y, first.y));

    let x_pivot = series
        .samples
        .iter()
        .find(|sample| visible_x.contains(sample.x))
        .unwrap_or(first)
        .x;
    let x_range = visible_x.widened_around(x_pivot);
    let y_range = data_y.widened_around(first.y);

    trace!(
        x_min = x_range.min,
        x_max = x_range.max,
        y_min = y_range.min,
        y_max = y_range.max,
        "resolved axis ranges"
    );
    Ok((x_range, y_range))
}

fn empty_series_error() -> ChartError {
    ChartError::InvalidData("cannot resolve axis ranges for an empty series".to_owned())
}
