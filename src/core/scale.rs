use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Input-space bounds of one axis.
///
/// `min > max` is representable: a window may ask for bounds that exclude
/// every sample, and the range then simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Scans values for their bounds. Returns `None` for an empty iterator.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |range, value| match range {
            None => Some(Self::new(value, value)),
            Some(range) => Some(Self::new(range.min.min(value), range.max.max(value))),
        })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max == self.min
    }

    /// Inclusive at both bounds.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Widens a zero-width range around `pivot`.
    ///
    /// A nonzero pivot yields the range between `0` and `2 * pivot`; a zero
    /// pivot yields `(-1, 1)`. Non-degenerate ranges are returned unchanged.
    /// Bounds are stored in order, so a negative pivot gives `(2 * pivot, 0)`.
    #[must_use]
    pub fn widened_around(self, pivot: f64) -> Self {
        if !self.is_degenerate() {
            return self;
        }
        if pivot == 0.0 {
            return Self::new(-1.0, 1.0);
        }
        let doubled = 2.0 * pivot;
        Self::new(doubled.min(0.0), doubled.max(0.0))
    }

    /// Maps `value` to its fraction of the range, `0.0` at `min` and `1.0` at `max`.
    pub fn fraction(self, value: f64) -> ChartResult<f64> {
        let span = self.span();
        if span == 0.0 || !span.is_finite() {
            return Err(ChartError::InvalidData(
                "axis range must be finite and non-zero".to_owned(),
            ));
        }
        Ok((value - self.min) / span)
    }
}
