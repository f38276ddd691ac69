mod frame;
mod null_renderer;
mod primitives;
mod svg;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, Stroke, TextHAlign,
    TextPrimitive,
};
pub use svg::{Document, SvgRenderer};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from normalization and geometry.
pub trait Renderer {
    type Output;

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<Self::Output>;
}
