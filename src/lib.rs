//! sparkline-rs: smoothed SVG sparklines from 2-D samples.
//!
//! The pipeline is a pure function: raw samples are normalized onto a numeric
//! axis, bounded by data-derived or windowed ranges, mapped into a padded
//! viewport, smoothed into cubic Bézier segments and serialized as SVG.
//!
//! ```
//! use sparkline_rs::{RawSample, SparklineConfig, render_chart};
//!
//! let samples = vec![
//!     RawSample::new(0.0, 1.0),
//!     RawSample::new(1.0, 3.0),
//!     RawSample::new(2.0, 2.0),
//! ];
//! let document = render_chart(&samples, &SparklineConfig::default()).unwrap();
//! assert!(document.as_str().starts_with("<svg"));
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{Sparkline, SparklineConfig, render_chart};
pub use core::{RawPosition, RawSample, Window};
pub use error::{ChartError, ChartResult, ErrorKind};
pub use render::Document;
