//! Radial primitives: star bursts, petal rosettes, spiral dot arms and pie
//! wedges.

use super::{star_polygon, PatternContext, Primitive, RegionSink};
use crate::rng::SeededRng;
use crate::svg::{Geometry, PathCommand, Point};
use std::f64::consts::PI;

/// Layered multi-point stars, outer layer first.
///
/// Element count: `1 + complexity / 3` stars of `5 + complexity` points.
/// The inner/outer radius ratio is seed-derived.
pub struct StarBurst;

impl Primitive for StarBurst {
    fn name(&self) -> &'static str {
        "star_burst"
    }

    fn draw(
        &self,
        ctx: &PatternContext,
        rng: &mut SeededRng,
        sink: &mut RegionSink,
        complexity: i64,
    ) {
        let layers = 1 + complexity / 3;
        let points = (5 + complexity) as usize;
        let max_r = ctx.max_radius();
        let ratio = rng.in_range(0.35, 0.55);
        let spin = -PI / 2.0 + rng.in_range(-0.2, 0.2);

        for layer in 0..layers {
            let outer = max_r * (layers - layer) as f64 / layers as f64;
            let rotation = spin + layer as f64 * PI / points as f64;
            sink.push(Geometry::Polygon {
                points: star_polygon(ctx.center, outer, outer * ratio, points, rotation),
            });
        }
    }
}

/// Elliptical petals around the center plus one center circle.
///
/// Element count: `6 + complexity * 2` petals and one final center circle.
/// Petal width and rotation offset are seed-derived.
pub struct PetalRosette;

impl Primitive for PetalRosette {
    fn name(&self) -> &'static str {
        "petal_rosette"
    }

    fn draw(
        &self,
        ctx: &PatternContext,
        rng: &mut SeededRng,
        sink: &mut RegionSink,
        complexity: i64,
    ) {
        let petals = 6 + complexity * 2;
        let len = ctx.max_radius();
        let width = (2.0 * PI * len / petals as f64) * rng.in_range(0.6, 0.9);
        let spin = rng.in_range(0.0, 2.0 * PI);

        for k in 0..petals {
            let angle = spin + k as f64 / petals as f64 * 2.0 * PI;
            sink.push(petal(ctx.center, angle, len, width));
        }
        sink.push(Geometry::Circle {
            cx: ctx.center.x,
            cy: ctx.center.y,
            r: len * 0.15,
        });
    }
}

/// One petal contour: two elliptical arcs from the center to the tip and
/// back, closed.
fn petal(center: Point, angle: f64, len: f64, width: f64) -> Geometry {
    let tip = Point::new(center.x + len * angle.cos(), center.y + len * angle.sin());
    let rx = len / 2.0;
    let ry = width / 2.0;
    let rotation = angle.to_degrees();
    Geometry::Path {
        commands: vec![
            PathCommand::MoveTo { to: center },
            PathCommand::Arc {
                rx,
                ry,
                rotation,
                large_arc: false,
                sweep: true,
                to: tip,
            },
            PathCommand::Arc {
                rx,
                ry,
                rotation,
                large_arc: false,
                sweep: true,
                to: center,
            },
            PathCommand::Close,
        ],
    }
}

/// Arms of dots following a spiral outward from the center.
///
/// Element count: `3 + complexity / 2` arms of `6 + complexity` dots each.
/// The spiral twist is seed-derived.
pub struct SpiralArms;

impl Primitive for SpiralArms {
    fn name(&self) -> &'static str {
        "spiral_arms"
    }

    fn draw(
        &self,
        ctx: &PatternContext,
        rng: &mut SeededRng,
        sink: &mut RegionSink,
        complexity: i64,
    ) {
        let arms = 3 + complexity / 2;
        let dots = 6 + complexity;
        let max_r = ctx.max_radius();
        let twist = rng.in_range(1.2 * PI, 2.0 * PI);

        for arm in 0..arms {
            let arm_angle = arm as f64 / arms as f64 * 2.0 * PI;
            for d in 0..dots {
                let t = (d + 1) as f64 / dots as f64;
                let angle = arm_angle + twist * t;
                let orbit = max_r * t;
                // Dots shrink toward the rim.
                let dot_r = max_r * (0.07 - 0.04 * t);
                sink.push(Geometry::Circle {
                    cx: ctx.center.x + orbit * angle.cos(),
                    cy: ctx.center.y + orbit * angle.sin(),
                    r: dot_r,
                });
            }
        }
    }
}

/// Radial pie wedges covering the full disc.
///
/// Element count: `6 + complexity` wedges. Starting rotation is seed-derived.
pub struct PieWedges;

impl Primitive for PieWedges {
    fn name(&self) -> &'static str {
        "pie_wedges"
    }

    fn draw(
        &self,
        ctx: &PatternContext,
        rng: &mut SeededRng,
        sink: &mut RegionSink,
        complexity: i64,
    ) {
        let wedges = 6 + complexity;
        let r = ctx.max_radius();
        let spin = rng.in_range(0.0, 2.0 * PI);

        for k in 0..wedges {
            let a0 = spin + k as f64 / wedges as f64 * 2.0 * PI;
            let a1 = spin + (k + 1) as f64 / wedges as f64 * 2.0 * PI;
            let p0 = Point::new(ctx.center.x + r * a0.cos(), ctx.center.y + r * a0.sin());
            let p1 = Point::new(ctx.center.x + r * a1.cos(), ctx.center.y + r * a1.sin());
            sink.push(Geometry::Path {
                commands: vec![
                    PathCommand::MoveTo { to: ctx.center },
                    PathCommand::LineTo { to: p0 },
                    PathCommand::Arc {
                        rx: r,
                        ry: r,
                        rotation: 0.0,
                        large_arc: false,
                        sweep: true,
                        to: p1,
                    },
                    PathCommand::Close,
                ],
            });
        }
    }
}
