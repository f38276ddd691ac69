use tracing::debug;

use crate::core::{ViewportPoint, build_path_with_precision, close_area_path};
use crate::error::ChartResult;
use crate::extensions::{PlacedMarker, place_markers, reference_y};
use crate::render::{
    CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, Stroke,
    TextHAlign, TextPrimitive,
};

use super::{ChartGeometry, SparklineConfig};

/// Turns projected geometry into drawable primitives.
///
/// `None` geometry, or geometry with no visible points, becomes the
/// placeholder text.
pub(super) fn build_frame(
    geometry: Option<&ChartGeometry>,
    config: &SparklineConfig,
) -> ChartResult<RenderFrame> {
    let viewport = config.viewport();
    let mut frame = RenderFrame::new(viewport);

    let Some(geometry) = geometry.filter(|geometry| !geometry.points.is_empty()) else {
        frame.texts.push(TextPrimitive::new(
            config.placeholder.clone(),
            viewport.width / 2.0,
            viewport.height / 2.0,
            TextHAlign::Center,
        ));
        debug!("built placeholder frame");
        return Ok(frame);
    };

    append_markers(&mut frame, geometry, config)?;

    match geometry.points.as_slice() {
        [single] => append_single_point(&mut frame, *single, config),
        points => append_curve(&mut frame, points, config),
    }

    for ref_line in &config.ref_lines {
        if let Some(y) = reference_y(ref_line.kind, &geometry.points) {
            frame.lines.push(LinePrimitive::new(
                viewport.left(),
                y,
                viewport.right(),
                y,
                Stroke::new(ref_line.color.clone(), ref_line.width),
            ));
        }
    }

    if config.dot.show {
        for point in &geometry.points {
            frame.circles.push(CirclePrimitive::new(
                point.x,
                point.y,
                config.dot.radius,
                config.dot.color.clone(),
            ));
        }
    }

    debug!(
        points = geometry.points.len(),
        paths = frame.paths.len(),
        lines = frame.lines.len(),
        rects = frame.rects.len(),
        circles = frame.circles.len(),
        "built sparkline frame"
    );
    Ok(frame)
}

fn append_markers(
    frame: &mut RenderFrame,
    geometry: &ChartGeometry,
    config: &SparklineConfig,
) -> ChartResult<()> {
    if config.markers.is_empty() {
        return Ok(());
    }

    let viewport = frame.viewport;
    let style = &config.marker_style;
    let stroke = Stroke::new(style.stroke_color.clone(), style.stroke_width);
    for placed in place_markers(&config.markers, geometry.axis_kind, geometry.mapper)? {
        match placed {
            PlacedMarker::Line { x } => frame.lines.push(LinePrimitive::new(
                x,
                viewport.top(),
                x,
                viewport.bottom(),
                stroke.clone(),
            )),
            PlacedMarker::Span { left, right } => frame.rects.push(
                RectPrimitive::new(
                    left,
                    viewport.top(),
                    right - left,
                    viewport.inner_height(),
                    style.fill_color.clone(),
                )
                .with_stroke(stroke.clone()),
            ),
        }
    }
    Ok(())
}

/// A lone sample gets a flat segment across the plot at its height.
fn append_single_point(frame: &mut RenderFrame, point: ViewportPoint, config: &SparklineConfig) {
    if !config.line.show {
        return;
    }
    let viewport = frame.viewport;
    frame.lines.push(LinePrimitive::new(
        viewport.left(),
        point.y,
        viewport.right(),
        point.y,
        Stroke::new(config.line.color.clone(), config.line.width),
    ));
}

fn append_curve(frame: &mut RenderFrame, points: &[ViewportPoint], config: &SparklineConfig) {
    if !config.area.show && !config.line.show {
        return;
    }

    let curve = build_path_with_precision(points, config.line.smoothing, config.precision);
    if config.area.show {
        let area = close_area_path(&curve, frame.viewport, config.precision);
        frame
            .paths
            .push(PathPrimitive::filled(area, config.area.color.clone()));
    }
    if config.line.show {
        frame.paths.push(PathPrimitive::stroked(
            curve,
            Stroke::new(config.line.color.clone(), config.line.width),
        ));
    }
}
