mod config;
pub mod json_contract;
mod render_frame_builder;
mod sparkline;

pub use config::{AreaOptions, DotOptions, LineOptions, SparklineConfig};
pub use json_contract::samples_from_json_str;
pub use sparkline::{
    ChartGeometry, Sparkline, build_render_frame, project_geometry, render_chart,
};
