//! Ring primitives: plain concentric circles and sinusoidal wave rings.

use super::{PatternContext, Primitive, RegionSink};
use crate::rng::SeededRng;
use crate::svg::{Geometry, Point};
use std::f64::consts::PI;

/// Concentric circles painted from the outer edge inward.
///
/// Element count: `2 + complexity` rings. Purely parametric; the rng is
/// unused.
pub struct ConcentricRings;

impl Primitive for ConcentricRings {
    fn name(&self) -> &'static str {
        "concentric_rings"
    }

    fn draw(
        &self,
        ctx: &PatternContext,
        _rng: &mut SeededRng,
        sink: &mut RegionSink,
        complexity: i64,
    ) {
        let count = 2 + complexity;
        let max_r = ctx.max_radius();
        for i in 0..count {
            let r = max_r * (count - i) as f64 / count as f64;
            sink.push(Geometry::Circle {
                cx: ctx.center.x,
                cy: ctx.center.y,
                r,
            });
        }
    }
}

/// Closed sinusoidal rings sampled as polygons, outer ring first.
///
/// Element count: `2 + complexity / 2` rings. Lobe count and phase are
/// seed-derived.
pub struct WaveRings;

const WAVE_SAMPLES: usize = 96;

impl Primitive for WaveRings {
    fn name(&self) -> &'static str {
        "wave_rings"
    }

    fn draw(
        &self,
        ctx: &PatternContext,
        rng: &mut SeededRng,
        sink: &mut RegionSink,
        complexity: i64,
    ) {
        let count = 2 + complexity / 2;
        // Leave headroom for the wave crest above the base radius.
        let outer = ctx.max_radius() / 1.1;
        let phase = rng.in_range(0.0, 2.0 * PI);
        let lobes = (6.0 + rng.next() * 4.0).floor();

        for i in 0..count {
            let base = outer * (count - i) as f64 / count as f64;
            let amplitude = base * 0.1;
            let points = (0..WAVE_SAMPLES)
                .map(|s| {
                    let theta = s as f64 / WAVE_SAMPLES as f64 * 2.0 * PI;
                    let r = base + amplitude * (lobes * theta + phase).sin();
                    Point::new(
                        ctx.center.x + r * theta.cos(),
                        ctx.center.y + r * theta.sin(),
                    )
                })
                .collect();
            sink.push(Geometry::Polygon { points });
        }
    }
}
