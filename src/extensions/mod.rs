//! Optional overlays drawn on top of the base sparkline.
//!
//! Both are off unless the configuration lists them.

pub mod markers;
pub mod reference_lines;

pub use markers::{Marker, MarkerStyle, PlacedMarker, place_markers};
pub use reference_lines::{RefLine, RefLineKind, reference_y};
