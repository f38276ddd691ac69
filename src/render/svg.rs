use std::fmt::{self, Write};

use tracing::debug;

use crate::core::primitives::{DEFAULT_PRECISION, round_to};
use crate::core::{PathCommand, ViewportPoint};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, Renderer, Stroke,
    TextHAlign, TextPrimitive,
};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Complete, self-contained SVG markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document(String);

impl Document {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Serializes frames into SVG documents.
///
/// The root element scales to its container (`100%`) while the internal
/// `viewBox` matches the frame viewport, so all coordinates stay in viewport
/// units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgRenderer {
    precision: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    #[must_use]
    pub fn precision(self) -> u32 {
        self.precision
    }

    fn num(self, value: f64) -> String {
        format!("{}", round_to(value, self.precision))
    }

    fn point(self, point: ViewportPoint) -> String {
        format!("{},{}", self.num(point.x), self.num(point.y))
    }

    /// Formats path commands as the value of an SVG `d` attribute.
    #[must_use]
    pub fn path_data(self, commands: &[PathCommand]) -> String {
        let mut parts = Vec::with_capacity(commands.len());
        for command in commands {
            let part = match *command {
                PathCommand::MoveTo(point) => format!("M{}", self.point(point)),
                PathCommand::CurveTo { cp1, cp2, end } => format!(
                    "C{} {} {}",
                    self.point(cp1),
                    self.point(cp2),
                    self.point(end)
                ),
                PathCommand::VerticalTo(y) => format!("V{}", self.num(y)),
                PathCommand::HorizontalTo(x) => format!("H{}", self.num(x)),
                PathCommand::ClosePath => "Z".to_owned(),
            };
            parts.push(part);
        }
        parts.join(" ")
    }

    fn stroke_attrs(self, stroke: Option<&Stroke>) -> String {
        match stroke {
            Some(stroke) => format!(
                r#" stroke="{}" stroke-width="{}""#,
                escape_attr(&stroke.color),
                self.num(stroke.width)
            ),
            None => String::new(),
        }
    }

    fn write_rect(self, out: &mut String, rect: &RectPrimitive) -> fmt::Result {
        writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{} />"#,
            self.num(rect.x),
            self.num(rect.y),
            self.num(rect.width),
            self.num(rect.height),
            escape_attr(&rect.fill),
            self.stroke_attrs(rect.stroke.as_ref()),
        )
    }

    fn write_path(self, out: &mut String, path: &PathPrimitive) -> fmt::Result {
        let fill = path.fill.as_deref().unwrap_or("none");
        writeln!(
            out,
            r#"<path d="{}" fill="{}"{} />"#,
            self.path_data(&path.commands),
            escape_attr(fill),
            self.stroke_attrs(path.stroke.as_ref()),
        )
    }

    fn write_line(self, out: &mut String, line: &LinePrimitive) -> fmt::Result {
        writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{} />"#,
            self.num(line.x1),
            self.num(line.y1),
            self.num(line.x2),
            self.num(line.y2),
            self.stroke_attrs(Some(&line.stroke)),
        )
    }

    fn write_circle(self, out: &mut String, circle: &CirclePrimitive) -> fmt::Result {
        writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" />"#,
            self.num(circle.cx),
            self.num(circle.cy),
            self.num(circle.radius),
            escape_attr(&circle.fill),
        )
    }

    fn write_text(self, out: &mut String, text: &TextPrimitive) -> fmt::Result {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        writeln!(
            out,
            r#"<text x="{}" y="{}" text-anchor="{}" dominant-baseline="middle">{}</text>"#,
            self.num(text.x),
            self.num(text.y),
            anchor,
            escape_text(&text.text),
        )
    }

    fn write_document(self, frame: &RenderFrame) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(
            out,
            r#"<svg width="100%" height="100%" viewBox="0 0 {} {}" xmlns="{}">"#,
            self.num(frame.viewport.width),
            self.num(frame.viewport.height),
            SVG_NAMESPACE,
        )?;
        for rect in &frame.rects {
            self.write_rect(&mut out, rect)?;
        }
        for path in &frame.paths {
            self.write_path(&mut out, path)?;
        }
        for line in &frame.lines {
            self.write_line(&mut out, line)?;
        }
        for circle in &frame.circles {
            self.write_circle(&mut out, circle)?;
        }
        for text in &frame.texts {
            self.write_text(&mut out, text)?;
        }
        out.push_str("</svg>\n");
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    type Output = Document;

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<Document> {
        frame.validate()?;
        let markup = self
            .write_document(frame)
            .map_err(|e| ChartError::InvalidData(format!("failed to write svg markup: {e}")))?;
        debug!(
            bytes = markup.len(),
            paths = frame.paths.len(),
            circles = frame.circles.len(),
            "rendered svg document"
        );
        Ok(Document(markup))
    }
}

fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

fn escape_attr(input: &str) -> String {
    escape_text(input).replace('"', "&quot;")
}
