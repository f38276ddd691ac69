use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_PRECISION, Viewport, Window};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{Marker, MarkerStyle, RefLine};

const MAX_PRECISION: u32 = 10;

/// Per-sample dot layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotOptions {
    pub show: bool,
    pub radius: f64,
    pub color: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            show: true,
            radius: 1.0,
            color: "black".to_owned(),
        }
    }
}

/// Stroked curve layer.
///
/// `smoothing` scales control-point distance; `0.0` draws straight segments
/// and values above roughly `0.5` look over-smoothed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineOptions {
    pub show: bool,
    pub width: f64,
    pub color: String,
    pub smoothing: f64,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            show: true,
            width: 0.25,
            color: "black".to_owned(),
            smoothing: 0.2,
        }
    }
}

/// Filled region under the curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaOptions {
    pub show: bool,
    pub color: String,
}

impl Default for AreaOptions {
    fn default() -> Self {
        Self {
            show: false,
            color: "rgba(0, 0, 0, 0.1)".to_owned(),
        }
    }
}

/// Rendering configuration for one sparkline.
///
/// Every field has a default, so partial JSON documents deserialize into a
/// complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparklineConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default)]
    pub dot: DotOptions,
    #[serde(default)]
    pub line: LineOptions,
    #[serde(default)]
    pub area: AreaOptions,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub window: Option<Window>,
    #[serde(default)]
    pub markers: Vec<Marker>,
    #[serde(default)]
    pub marker_style: MarkerStyle,
    #[serde(default)]
    pub ref_lines: Vec<RefLine>,
    #[serde(default = "default_precision")]
    pub precision: u32,
}

impl Default for SparklineConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding: default_padding(),
            dot: DotOptions::default(),
            line: LineOptions::default(),
            area: AreaOptions::default(),
            placeholder: default_placeholder(),
            window: None,
            markers: Vec::new(),
            marker_style: MarkerStyle::default(),
            ref_lines: Vec::new(),
            precision: default_precision(),
        }
    }
}

impl SparklineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets viewport size.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_dots(mut self, dot: DotOptions) -> Self {
        self.dot = dot;
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LineOptions) -> Self {
        self.line = line;
        self
    }

    #[must_use]
    pub fn with_area(mut self, area: AreaOptions) -> Self {
        self.area = area;
        self
    }

    #[must_use]
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.line.smoothing = smoothing;
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn with_window(mut self, window: Window) -> Self {
        self.window = Some(window);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    #[must_use]
    pub fn with_marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = style;
        self
    }

    #[must_use]
    pub fn with_ref_line(mut self, ref_line: RefLine) -> Self {
        self.ref_lines.push(ref_line);
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height, self.padding)
    }

    /// Checks dimensions first, then style numbers.
    ///
    /// Color strings are opaque and never inspected.
    pub fn validate(&self) -> ChartResult<()> {
        self.viewport().validate()?;

        if !self.dot.radius.is_finite() || self.dot.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "dot radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.line.width.is_finite() || self.line.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.line.smoothing.is_finite() || self.line.smoothing < 0.0 {
            return Err(ChartError::InvalidData(
                "line smoothing must be finite and >= 0".to_owned(),
            ));
        }
        if self.precision > MAX_PRECISION {
            return Err(ChartError::InvalidData(format!(
                "precision must be <= {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        self.marker_style.validate()?;
        for ref_line in &self.ref_lines {
            ref_line.validate()?;
        }
        Ok(())
    }
}

fn default_width() -> f64 {
    200.0
}

fn default_height() -> f64 {
    100.0
}

fn default_padding() -> f64 {
    6.0
}

fn default_placeholder() -> String {
    "No data".to_owned()
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}
