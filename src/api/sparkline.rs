use tracing::debug;

use crate::core::{
    AxisKind, CoordinateMapper, RawSample, ViewportPoint, map_samples, normalize, resolve_ranges,
    windowed_x_range,
};
use crate::error::ChartResult;
use crate::render::{Document, RenderFrame, Renderer, SvgRenderer};

use super::json_contract::samples_from_json_str;
use super::render_frame_builder::build_frame;
use super::SparklineConfig;

/// Mapped sample positions plus the projection that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub axis_kind: AxisKind,
    pub mapper: CoordinateMapper,
    pub points: Vec<ViewportPoint>,
}

/// Runs validation, normalization, range resolution and mapping.
///
/// Returns `Ok(None)` for empty input. Every check happens before any point
/// is mapped, and the first failure is returned.
pub fn project_geometry(
    raw_samples: &[RawSample],
    config: &SparklineConfig,
) -> ChartResult<Option<ChartGeometry>> {
    config.validate()?;

    let series = normalize(raw_samples)?;
    let Some(axis_kind) = series.axis_kind else {
        return Ok(None);
    };

    let window = config.window.filter(|window| !window.is_unbounded());
    let (x_range, y_range) = resolve_ranges(&series, window.as_ref())?;
    let visible_x = match window {
        Some(window) => Some(windowed_x_range(&series, Some(&window))?),
        None => None,
    };

    let viewport = config.viewport();
    let mapper = CoordinateMapper::new(x_range, y_range, viewport)?;
    let points = map_samples(&series.samples, x_range, y_range, viewport, visible_x)?;
    if points.is_empty() {
        debug!(canonical_count = series.len(), "window excludes every sample");
    }

    Ok(Some(ChartGeometry {
        axis_kind,
        mapper,
        points,
    }))
}

/// Builds the backend-agnostic frame for `raw_samples`.
pub fn build_render_frame(
    raw_samples: &[RawSample],
    config: &SparklineConfig,
) -> ChartResult<RenderFrame> {
    let geometry = project_geometry(raw_samples, config)?;
    build_frame(geometry.as_ref(), config)
}

/// Renders `raw_samples` into an SVG document.
pub fn render_chart(raw_samples: &[RawSample], config: &SparklineConfig) -> ChartResult<Document> {
    let frame = build_render_frame(raw_samples, config)?;
    SvgRenderer::new(config.precision).render(&frame)
}

/// Owned samples and configuration, rendered on demand.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sparkline {
    samples: Vec<RawSample>,
    config: SparklineConfig,
}

impl Sparkline {
    #[must_use]
    pub fn new(samples: Vec<RawSample>, config: SparklineConfig) -> Self {
        Self { samples, config }
    }

    /// Parses samples from a JSON array, see [`RawSample::from_json`].
    pub fn from_json_str(samples_json: &str, config: SparklineConfig) -> ChartResult<Self> {
        Ok(Self::new(samples_from_json_str(samples_json)?, config))
    }

    #[must_use]
    pub fn samples(&self) -> &[RawSample] {
        &self.samples
    }

    #[must_use]
    pub fn config(&self) -> &SparklineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SparklineConfig) {
        self.config = config;
    }

    pub fn set_samples(&mut self, samples: Vec<RawSample>) {
        self.samples = samples;
    }

    pub fn project_geometry(&self) -> ChartResult<Option<ChartGeometry>> {
        project_geometry(&self.samples, &self.config)
    }

    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        build_render_frame(&self.samples, &self.config)
    }

    /// Builds the frame and hands it to `renderer`.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> ChartResult<R::Output> {
        let frame = self.build_render_frame()?;
        renderer.render(&frame)
    }

    pub fn to_svg(&self) -> ChartResult<Document> {
        render_chart(&self.samples, &self.config)
    }
}
