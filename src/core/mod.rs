pub mod area_series;
pub mod curve;
pub mod mapper;
pub mod normalize;
pub mod primitives;
pub mod range;
pub mod scale;
pub mod types;
pub mod windowing;

pub use area_series::close_area_path;
pub use curve::{
    PathCommand, PathCommands, build_path, build_path_with_precision, control_point,
};
pub use mapper::{CoordinateMapper, map_samples};
pub use normalize::{NormalizedSeries, normalize};
pub use primitives::DEFAULT_PRECISION;
pub use range::{Window, resolve_ranges, windowed_x_range};
pub use scale::AxisRange;
pub use types::{AxisKind, RawPosition, RawSample, Sample, Viewport, ViewportPoint};
pub use windowing::samples_in_range;
