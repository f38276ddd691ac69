use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{AxisKind, CoordinateMapper, RawPosition};
use crate::error::{ChartError, ChartResult};

/// Highlight on the position axis.
///
/// `At` draws a vertical line; `Span` shades the region between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Marker {
    At { at: RawPosition },
    Span { start: RawPosition, end: RawPosition },
}

impl Marker {
    #[must_use]
    pub fn at(position: impl Into<RawPosition>) -> Self {
        Self::At {
            at: position.into(),
        }
    }

    #[must_use]
    pub fn span(start: impl Into<RawPosition>, end: impl Into<RawPosition>) -> Self {
        Self::Span {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Stroke and fill used for every marker of a chart. Values are passed through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub stroke_color: String,
    pub stroke_width: f64,
    pub fill_color: String,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            stroke_color: "red".to_owned(),
            stroke_width: 0.25,
            fill_color: "rgba(255, 0, 0, 0.1)".to_owned(),
        }
    }
}

impl MarkerStyle {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Marker resolved to viewport x coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlacedMarker {
    Line { x: f64 },
    Span { left: f64, right: f64 },
}

/// Resolves markers against the chart's x-range.
///
/// Marker positions must share the series axis kind. Spans are clipped to the
/// range; markers entirely outside it are dropped. Output is ordered by left edge.
pub fn place_markers(
    markers: &[Marker],
    axis_kind: AxisKind,
    mapper: CoordinateMapper,
) -> ChartResult<Vec<PlacedMarker>> {
    let range = mapper.x_range();
    let mut placed = Vec::with_capacity(markers.len());

    for marker in markers {
        match *marker {
            Marker::At { at } => {
                let x = at.to_linear_on(axis_kind)?;
                if range.contains(x) {
                    placed.push(PlacedMarker::Line {
                        x: mapper.map_x(x),
                    });
                }
            }
            Marker::Span { start, end } => {
                let start = start.to_linear_on(axis_kind)?;
                let end = end.to_linear_on(axis_kind)?;
                let (low, high) = if start <= end {
                    (start, end)
                } else {
                    (end, start)
                };
                if high < range.min || low > range.max || range.min > range.max {
                    continue;
                }
                placed.push(PlacedMarker::Span {
                    left: mapper.map_x(low.max(range.min)),
                    right: mapper.map_x(high.min(range.max)),
                });
            }
        }
    }

    placed.sort_by_key(|marker| match *marker {
        PlacedMarker::Line { x } => OrderedFloat(x),
        PlacedMarker::Span { left, .. } => OrderedFloat(left),
    });
    Ok(placed)
}
