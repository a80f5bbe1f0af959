//! Structured vector document model.
//!
//! Shapes are built as typed geometry and joined into SVG markup once at
//! render time. The outline variant is a mechanical restyle of the colored
//! document rather than a re-generation, which guarantees the two are
//! geometrically identical shape for shape.

use serde::Serialize;
use std::fmt::Write as _;

/// A 2D coordinate in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One command of a path contour. A contour is an immutable ordered list of
/// commands joined once into the `d` attribute at render time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo {
        to: Point,
    },
    LineTo {
        to: Point,
    },
    /// Circular or elliptical arc to `to`; `rotation` is in degrees.
    Arc {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

/// Closed region geometry. Polygons are implicitly closed, circles are
/// inherently closed, and paths must end with [`PathCommand::Close`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Circle { cx: f64, cy: f64, r: f64 },
    Polygon { points: Vec<Point> },
    Path { commands: Vec<PathCommand> },
}

impl Geometry {
    /// Whether this geometry describes a closed contour.
    pub fn is_closed(&self) -> bool {
        match self {
            Geometry::Circle { .. } => true,
            Geometry::Polygon { points } => points.len() >= 3,
            Geometry::Path { commands } => {
                matches!(commands.last(), Some(PathCommand::Close))
            }
        }
    }
}

/// Join path commands into an SVG `d` attribute value.
pub fn path_data(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(|cmd| match cmd {
            PathCommand::MoveTo { to } => format!("M {:.2} {:.2}", to.x, to.y),
            PathCommand::LineTo { to } => format!("L {:.2} {:.2}", to.x, to.y),
            PathCommand::Arc {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                to,
            } => format!(
                "A {:.2} {:.2} {:.2} {} {} {:.2} {:.2}",
                rx,
                ry,
                rotation,
                i32::from(*large_arc),
                i32::from(*sweep),
                to.x,
                to.y
            ),
            PathCommand::Close => "Z".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One renderable shape node: geometry plus styling.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: String,
    pub geometry: Geometry,
    /// `None` renders as `fill="none"`.
    pub fill: Option<String>,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Shape {
    fn to_svg(&self) -> String {
        let fill = self.fill.as_deref().unwrap_or("none");
        match &self.geometry {
            Geometry::Circle { cx, cy, r } => format!(
                r#"<circle id="{}" cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
                self.id, cx, cy, r, fill, self.stroke, self.stroke_width
            ),
            Geometry::Polygon { points } => {
                let pts = points
                    .iter()
                    .map(|p| format!("{:.2},{:.2}", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(
                    r#"<polygon id="{}" points="{}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
                    self.id, pts, fill, self.stroke, self.stroke_width
                )
            }
            Geometry::Path { commands } => format!(
                r#"<path id="{}" d="{}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
                self.id,
                path_data(commands),
                fill,
                self.stroke,
                self.stroke_width
            ),
        }
    }
}

/// A renderable square vector document the host can embed directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub size: f64,
    pub background: String,
    pub shapes: Vec<Shape>,
}

impl Document {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            background: "#ffffff".to_string(),
            shapes: Vec::new(),
        }
    }

    /// Restyle every shape for the outline variant: fills removed, strokes
    /// matching `neutral_stroke` recolored to `outline_color`. Geometry and
    /// ids are untouched.
    pub fn outlined(&self, neutral_stroke: &str, outline_color: &str) -> Document {
        let shapes = self
            .shapes
            .iter()
            .map(|s| Shape {
                id: s.id.clone(),
                geometry: s.geometry.clone(),
                fill: None,
                stroke: if s.stroke == neutral_stroke {
                    outline_color.to_string()
                } else {
                    s.stroke.clone()
                },
                stroke_width: s.stroke_width,
            })
            .collect();
        Document {
            size: self.size,
            background: self.background.clone(),
            shapes,
        }
    }

    pub fn to_svg(&self) -> String {
        let mut body = String::new();
        for shape in &self.shapes {
            let _ = writeln!(body, "  {}", shape.to_svg());
        }
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {s} {s}" width="{s}" height="{s}">
  <rect width="100%" height="100%" fill="{bg}"/>
{body}</svg>"#,
            s = self.size,
            bg = self.background,
            body = body
        )
    }
}
