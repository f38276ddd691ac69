use crate::core::{AxisRange, Sample, Viewport, ViewportPoint, samples_in_range};
use crate::error::ChartResult;

/// Affine projection from data space into a padded viewport.
///
/// The y-axis is inverted: larger values sit closer to the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    x_range: AxisRange,
    y_range: AxisRange,
    viewport: Viewport,
}

impl CoordinateMapper {
    pub fn new(x_range: AxisRange, y_range: AxisRange, viewport: Viewport) -> ChartResult<Self> {
        let viewport = viewport.validate()?;
        // Zero-width ranges are rejected before any point is mapped.
        x_range.fraction(x_range.min)?;
        y_range.fraction(y_range.min)?;
        Ok(Self {
            x_range,
            y_range,
            viewport,
        })
    }

    #[must_use]
    pub fn x_range(self) -> AxisRange {
        self.x_range
    }

    #[must_use]
    pub fn y_range(self) -> AxisRange {
        self.y_range
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn map_x(self, x: f64) -> f64 {
        let fraction = (x - self.x_range.min) / self.x_range.span();
        fraction * self.viewport.inner_width() + self.viewport.padding
    }

    #[must_use]
    pub fn map_y(self, y: f64) -> f64 {
        let fraction = (y - self.y_range.min) / self.y_range.span();
        self.viewport.height - fraction * self.viewport.inner_height() - self.viewport.padding
    }

    #[must_use]
    pub fn map_sample(self, sample: Sample) -> ViewportPoint {
        ViewportPoint::new(self.map_x(sample.x), self.map_y(sample.y))
    }

    /// Maps the samples inside `visible` (all of them for `None`).
    #[must_use]
    pub fn map_visible(self, samples: &[Sample], visible: Option<AxisRange>) -> Vec<ViewportPoint> {
        match visible {
            Some(range) => samples_in_range(samples, range)
                .into_iter()
                .map(|sample| self.map_sample(sample))
                .collect(),
            None => samples.iter().map(|sample| self.map_sample(*sample)).collect(),
        }
    }
}

/// Maps samples into viewport coordinates.
///
/// With `visible` bounds, samples strictly outside them are dropped first.
/// The mapping itself always spans `x_range`, holes included.
pub fn map_samples(
    samples: &[Sample],
    x_range: AxisRange,
    y_range: AxisRange,
    viewport: Viewport,
    visible: Option<AxisRange>,
) -> ChartResult<Vec<ViewportPoint>> {
    let mapper = CoordinateMapper::new(x_range, y_range, viewport)?;
    Ok(mapper.map_visible(samples, visible))
}
