use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::ViewportPoint;
use crate::error::{ChartError, ChartResult};

/// Statistic a horizontal reference line is drawn at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefLineKind {
    Max,
    Min,
    Avg,
    Median,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefLine {
    pub kind: RefLineKind,
    #[serde(default = "default_ref_line_color")]
    pub color: String,
    #[serde(default = "default_ref_line_width")]
    pub width: f64,
}

impl RefLine {
    #[must_use]
    pub fn new(kind: RefLineKind) -> Self {
        Self {
            kind,
            color: default_ref_line_color(),
            width: default_ref_line_width(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{:?} reference line width must be finite and > 0",
                self.kind
            )));
        }
        Ok(())
    }
}

fn default_ref_line_color() -> String {
    "rgba(0, 0, 0, 0.5)".to_owned()
}

fn default_ref_line_width() -> f64 {
    0.25
}

/// Viewport y of the statistic over the mapped points.
///
/// Works in viewport space: the y mapping is affine, so averages and medians
/// commute with it, while max and min swap because the axis is inverted.
#[must_use]
pub fn reference_y(kind: RefLineKind, points: &[ViewportPoint]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }

    let ys = points.iter().map(|point| point.y);
    match kind {
        RefLineKind::Max => ys.map(OrderedFloat).min().map(OrderedFloat::into_inner),
        RefLineKind::Min => ys.map(OrderedFloat).max().map(OrderedFloat::into_inner),
        RefLineKind::Avg => Some(ys.sum::<f64>() / points.len() as f64),
        RefLineKind::Median => {
            let mut sorted: Vec<OrderedFloat<f64>> = ys.map(OrderedFloat).collect();
            sorted.sort_unstable();
            let mid = sorted.len() / 2;
            if sorted.len() % 2 == 0 {
                Some((sorted[mid - 1].0 + sorted[mid].0) / 2.0)
            } else {
                Some(sorted[mid].0)
            }
        }
    }
}
