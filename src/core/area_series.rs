use crate::core::primitives::round_to;
use crate::core::{PathCommand, PathCommands, Viewport};

/// Closes a curve path into a fillable area.
///
/// The outline drops from the last curve point down to the baseline, runs
/// back to the first point's x and closes. The baseline is anchored at the
/// viewport bottom (`viewport.height`). An empty curve yields an empty area.
#[must_use]
pub fn close_area_path(curve: &[PathCommand], viewport: Viewport, precision: u32) -> PathCommands {
    let Some(PathCommand::MoveTo(start)) = curve.first() else {
        return Vec::new();
    };

    let baseline_y = round_to(viewport.height, precision);
    let mut area = Vec::with_capacity(curve.len() + 3);
    area.extend_from_slice(curve);
    area.push(PathCommand::VerticalTo(baseline_y));
    area.push(PathCommand::HorizontalTo(start.x));
    area.push(PathCommand::ClosePath);
    area
}
