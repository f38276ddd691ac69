use crate::core::PathCommand;
use crate::error::{ChartError, ChartResult};

/// Opaque stroke description. `color` is written to the output verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

impl Stroke {
    #[must_use]
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Vector path, optionally filled and/or stroked.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub commands: Vec<PathCommand>,
    pub fill: Option<String>,
    pub stroke: Option<Stroke>,
}

impl PathPrimitive {
    #[must_use]
    pub fn stroked(commands: Vec<PathCommand>, stroke: Stroke) -> Self {
        Self {
            commands,
            fill: None,
            stroke: Some(stroke),
        }
    }

    #[must_use]
    pub fn filled(commands: Vec<PathCommand>, fill: impl Into<String>) -> Self {
        Self {
            commands,
            fill: Some(fill.into()),
            stroke: None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !matches!(self.commands.first(), Some(PathCommand::MoveTo(_))) {
            return Err(ChartError::InvalidData(
                "path must start with a move-to command".to_owned(),
            ));
        }
        for command in &self.commands {
            let finite = match *command {
                PathCommand::MoveTo(point) => point.x.is_finite() && point.y.is_finite(),
                PathCommand::CurveTo { cp1, cp2, end } => [cp1, cp2, end]
                    .iter()
                    .all(|point| point.x.is_finite() && point.y.is_finite()),
                PathCommand::VerticalTo(value) | PathCommand::HorizontalTo(value) => {
                    value.is_finite()
                }
                PathCommand::ClosePath => true,
            };
            if !finite {
                return Err(ChartError::InvalidData(
                    "path coordinates must be finite".to_owned(),
                ));
            }
        }
        match &self.stroke {
            Some(stroke) => stroke.validate(),
            None => Ok(()),
        }
    }
}

/// Dot marking one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: String,
}

impl CirclePrimitive {
    #[must_use]
    pub fn new(cx: f64, cy: f64, radius: f64, fill: impl Into<String>) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill: fill.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Straight segment in viewport space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Stroke,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        self.stroke.validate()
    }
}

/// Axis-aligned rectangle in viewport space.
#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub stroke: Option<Stroke>,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: fill.into(),
            stroke: None,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        match &self.stroke {
            Some(stroke) => stroke.validate(),
            None => Ok(()),
        }
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Label in viewport space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, h_align: TextHAlign) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
