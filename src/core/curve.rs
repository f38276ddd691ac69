use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::ViewportPoint;
use crate::core::primitives::{DEFAULT_PRECISION, round_to};

/// One draw instruction of a vector path, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(ViewportPoint),
    CurveTo {
        cp1: ViewportPoint,
        cp2: ViewportPoint,
        end: ViewportPoint,
    },
    /// Vertical line to the given y.
    VerticalTo(f64),
    /// Horizontal line to the given x.
    HorizontalTo(f64),
    ClosePath,
}

pub type PathCommands = Vec<PathCommand>;

/// Builds a smoothed cubic Bézier path through `points`.
///
/// Fewer than two points produce no path. Coordinates are rounded to
/// [`DEFAULT_PRECISION`] decimal digits.
#[must_use]
pub fn build_path(points: &[ViewportPoint], smoothing: f64) -> PathCommands {
    build_path_with_precision(points, smoothing, DEFAULT_PRECISION)
}

/// Same as [`build_path`] with an explicit number of decimal digits.
///
/// Each segment `points[i - 1] -> points[i]` gets its outgoing control point
/// from the tangent through `points[i - 2]` and `points[i]`, and its incoming
/// control point from the reversed tangent through `points[i - 1]` and
/// `points[i + 1]`. Missing neighbors at either end are replaced by the point
/// itself. `smoothing` scales the tangent length; `0.0` yields straight
/// segments.
#[must_use]
pub fn build_path_with_precision(
    points: &[ViewportPoint],
    smoothing: f64,
    precision: u32,
) -> PathCommands {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(points.len());
    commands.push(PathCommand::MoveTo(rounded(points[0], precision)));

    for index in 1..points.len() {
        let current = points[index];
        let prev1 = points[index - 1];
        let prev2 = index.checked_sub(2).map(|i| points[i]);
        let next = points.get(index + 1).copied();

        let cp1 = control_point(prev1, prev2, Some(current), smoothing, false);
        let cp2 = control_point(current, Some(prev1), next, smoothing, true);

        commands.push(PathCommand::CurveTo {
            cp1: rounded(cp1, precision),
            cp2: rounded(cp2, precision),
            end: rounded(current, precision),
        });
    }

    commands
}

/// Control point for `current`, placed along the line from `previous` to `next`.
///
/// `reverse` flips the direction by π, giving the incoming control point.
#[must_use]
pub fn control_point(
    current: ViewportPoint,
    previous: Option<ViewportPoint>,
    next: Option<ViewportPoint>,
    smoothing: f64,
    reverse: bool,
) -> ViewportPoint {
    let previous = previous.unwrap_or(current);
    let next = next.unwrap_or(current);

    let dx = next.x - previous.x;
    let dy = next.y - previous.y;
    let angle = dy.atan2(dx) + if reverse { PI } else { 0.0 };
    let length = dx.hypot(dy) * smoothing;

    ViewportPoint::new(
        current.x + angle.cos() * length,
        current.y + angle.sin() * length,
    )
}

fn rounded(point: ViewportPoint, precision: u32) -> ViewportPoint {
    ViewportPoint::new(round_to(point.x, precision), round_to(point.y, precision))
}
