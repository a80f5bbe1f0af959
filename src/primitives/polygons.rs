//! Polygon primitives: nested squares and hexagons, diamond rings, layered
//! triangle motifs and plus/cross motifs.

use super::{regular_polygon, PatternContext, Primitive, RegionSink};
use crate::rng::SeededRng;
use crate::svg::{Geometry, Point};
use std::f64::consts::PI;

/// Nested squares with alternating 45-degree rotation.
///
/// Element count: `2 + complexity` squares. Base rotation is seed-derived.
pub struct NestedSquares;

impl Primitive for NestedSquares {
    fn name(&self) -> &'static str {
        "nested_squares"
    }

    fn draw(
        &self,
        ctx: &PatternContext,
        rng: &mut SeededRng,
        sink: &mut RegionSink,
        complexity: i64,
    ) {
        let count = 2 + complexity;
        let max_r = ctx.max_radius();
        let spin = rng.in_range(0.0, PI / 2.0);
        for i in 0..count {
            let r = max_r * (count - i) as f64 / count as f64;
            let rotation = spin + if i % 2 == 0 { PI / 4.0 } else { 0.0 };
            sink.push(Geometry::Polygon {
                points: regular_polygon(ctx.center, r, 4, rotation),
            });
        }
    }
}

/// Nested regular hexagons with alternating half-step rotation.
///
/// Element count: `2 + complexity` hexagons.
pub struct HexagonRings;

impl Primitive for HexagonRings {
    fn name(&self) -> &'static str {
        "hexagon_rings"
    }

    fn draw(
        &self,
        ctx: &PatternContext,
        rng: &mut SeededRng,
        sink: &mut RegionSink,
        complexity: i64,
    ) {
        let count = 2 + complexity;
        let max_r = ctx.max_radius();
        let spin = rng.in_range(0.0, PI / 3.0);
        for i in 0..count {
            let r = max_r * (count - i) as f64 / count as f64;
            let rotation = spin + if i % 2 == 0 { 0.0 } else { PI / 6.0 };
            sink.push(Geometry::Polygon {
                points: regular_polygon(ctx.center, r, 6, rotation),
            });
        }
    }
}

/// Rings of rhombi orbiting the center, radially aligned.
///
/// Element count: `1 + complexity / 2` rings of `4 + complexity` rhombi each.
/// Rhombus aspect and the stagger between rings are seed-derived.
pub struct DiamondRing;

impl Primitive for DiamondRing {
    fn name(&self) -> &'static str {
        "diamond_ring"
    }

    fn draw(
        &self,
        ctx: &PatternContext,
        rng: &mut SeededRng,
        sink: &mut RegionSink,
        complexity: i64,
    ) {
        let rings = 1 + complexity / 2;
        let per_ring = 4 + complexity;
        let max_r = ctx.max_radius();
        let orbit_gap = max_r / (rings + 1) as f64;
        let aspect = rng.in_range(0.35, 0.6);
        let stagger = rng.in_range(0.0, PI);

        for ring in 0..rings {
            let orbit = orbit_gap * (ring + 1) as f64;
            let long = orbit_gap * 0.45;
            let wide = long * aspect;
            for k in 0..per_ring {
                let angle =
                    stagger + ring as f64 * PI / per_ring as f64 + k as f64 / per_ring as f64 * 2.0 * PI;
                let cx = ctx.center.x + orbit * angle.cos();
                let cy = ctx.center.y + orbit * angle.sin();
                let (dx, dy) = (angle.cos(), angle.sin());
                let (tx, ty) = (-angle.sin(), angle.cos());
                sink.push(Geometry::Polygon {
                    points: vec![
                        Point::new(cx + dx * long, cy + dy * long),
                        Point::new(cx + tx * wide, cy + ty * wide),
                        Point::new(cx - dx * long, cy - dy * long),
                        Point::new(cx - tx * wide, cy - ty * wide),
                    ],
                });
            }
        }
    }
}

/// Layers of opposed equilateral triangles, outer layers first.
///
/// Element count: `1 + complexity` layers, two triangles per layer. Base
/// rotation and the per-layer twist are seed-derived.
pub struct TriangleMotif;

impl Primitive for TriangleMotif {
    fn name(&self) -> &'static str {
        "triangle_motif"
    }

    fn draw(
        &self,
        ctx: &PatternContext,
        rng: &mut SeededRng,
        sink: &mut RegionSink,
        complexity: i64,
    ) {
        let layers = 1 + complexity;
        let max_r = ctx.max_radius();
        let spin = rng.in_range(0.0, 2.0 * PI);
        let twist = rng.in_range(0.0, PI / 6.0);

        for i in 0..layers {
            let r = max_r * (layers - i) as f64 / layers as f64;
            let rotation = spin + i as f64 * twist;
            sink.push(Geometry::Polygon {
                points: regular_polygon(ctx.center, r, 3, rotation),
            });
            sink.push(Geometry::Polygon {
                points: regular_polygon(ctx.center, r, 3, rotation + PI),
            });
        }
    }
}

/// Nested plus-shaped polygons with alternating 45-degree rotation.
///
/// Element count: `1 + complexity / 2` layers. Arm thickness is seed-derived.
pub struct CrossMotif;

impl Primitive for CrossMotif {
    fn name(&self) -> &'static str {
        "cross_motif"
    }

    fn draw(
        &self,
        ctx: &PatternContext,
        rng: &mut SeededRng,
        sink: &mut RegionSink,
        complexity: i64,
    ) {
        let layers = 1 + complexity / 2;
        let max_r = ctx.max_radius();
        let thickness = rng.in_range(0.25, 0.4);

        for i in 0..layers {
            let r = max_r * (layers - i) as f64 / layers as f64;
            let rotation = if i % 2 == 0 { 0.0 } else { PI / 4.0 };
            sink.push(Geometry::Polygon {
                points: plus_polygon(ctx.center, r, r * thickness, rotation),
            });
        }
    }
}

/// Twelve vertices of a plus shape with arm length `arm` and half-thickness
/// `half`, rotated around `center`.
fn plus_polygon(center: Point, arm: f64, half: f64, rotation: f64) -> Vec<Point> {
    let raw = [
        (arm, half),
        (half, half),
        (half, arm),
        (-half, arm),
        (-half, half),
        (-arm, half),
        (-arm, -half),
        (-half, -half),
        (-half, -arm),
        (half, -arm),
        (half, -half),
        (arm, -half),
    ];
    let (sin, cos) = rotation.sin_cos();
    raw.iter()
        .map(|(x, y)| Point::new(center.x + x * cos - y * sin, center.y + x * sin + y * cos))
        .collect()
}
