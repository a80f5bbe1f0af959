//! Pattern primitives - each draws one family of mandala geometry.
//!
//! Primitives are pure drawing strategies behind one shared contract: given
//! a center, a canvas extent, a seeded random source and a complexity level,
//! append closed regions to the sink in paint order. The registry keeps the
//! set open for extension; new primitives are added to [`ALL`] and referenced
//! by name from the difficulty policy without touching the composer.

pub mod polygons;
pub mod radial;
pub mod rings;

use crate::rng::SeededRng;
use crate::svg::{Geometry, Point};
use serde::Serialize;
use std::f64::consts::PI;

/// One fillable, independently colorable closed area of the pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    /// Unique within one generation; strictly increasing in draw order, so
    /// ids double as paint order.
    pub id: String,
    /// Exact color value from the working palette, not an index.
    pub color: String,
    pub geometry: Geometry,
}

/// Center and canvas extent shared by every primitive invocation.
#[derive(Debug, Clone, Copy)]
pub struct PatternContext {
    pub center: Point,
    pub canvas_size: f64,
}

impl PatternContext {
    pub fn new(canvas_size: f64) -> Self {
        Self {
            center: Point::new(canvas_size / 2.0, canvas_size / 2.0),
            canvas_size,
        }
    }

    /// Largest radius that keeps the pattern inside the canvas with a small
    /// margin.
    pub fn max_radius(&self) -> f64 {
        self.canvas_size * 0.45
    }
}

/// Collects regions in draw order. The sink owns the id counter and the
/// working palette: the k-th pushed region gets id `region-k` and color
/// `palette[k % palette.len()]`, so palette cycling holds for every
/// primitive by construction.
#[derive(Debug)]
pub struct RegionSink {
    palette: Vec<String>,
    regions: Vec<Region>,
}

impl RegionSink {
    pub fn new(palette: Vec<String>) -> Self {
        Self {
            palette,
            regions: Vec::new(),
        }
    }

    /// Append one region with the next id and the next cycled color.
    pub fn push(&mut self, geometry: Geometry) {
        let k = self.regions.len();
        let color = self.palette[k % self.palette.len()].clone();
        self.regions.push(Region {
            id: format!("region-{k}"),
            color,
            geometry,
        });
    }

    pub fn into_regions(self) -> Vec<Region> {
        self.regions
    }
}

/// A pattern-drawing algorithm selectable by the composer.
pub trait Primitive: Sync {
    /// Stable identifier referenced by the difficulty policy.
    fn name(&self) -> &'static str;

    /// Append this primitive's regions to the sink. Element counts are
    /// purely parametric in `complexity` (higher complexity never produces
    /// fewer regions); the rng only drives continuous variation such as
    /// rotation, radius ratios and amplitudes.
    fn draw(
        &self,
        ctx: &PatternContext,
        rng: &mut SeededRng,
        sink: &mut RegionSink,
        complexity: i64,
    );
}

/// Registry of every available primitive.
pub static ALL: &[&dyn Primitive] = &[
    &rings::ConcentricRings,
    &rings::WaveRings,
    &polygons::NestedSquares,
    &polygons::HexagonRings,
    &polygons::DiamondRing,
    &polygons::TriangleMotif,
    &polygons::CrossMotif,
    &radial::StarBurst,
    &radial::PetalRosette,
    &radial::SpiralArms,
    &radial::PieWedges,
];

/// Look up a primitive by its policy name.
pub fn by_name(name: &str) -> Option<&'static dyn Primitive> {
    ALL.iter().copied().find(|p| p.name() == name)
}

/// Vertices of a regular polygon.
pub(crate) fn regular_polygon(
    center: Point,
    radius: f64,
    sides: usize,
    rotation: f64,
) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            let angle = rotation + (i as f64 / sides as f64) * 2.0 * PI;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Vertices of a star alternating between outer and inner radius.
pub(crate) fn star_polygon(
    center: Point,
    outer: f64,
    inner: f64,
    points: usize,
    rotation: f64,
) -> Vec<Point> {
    (0..points * 2)
        .map(|i| {
            let angle = rotation + (i as f64 / (points * 2) as f64) * 2.0 * PI;
            let r = if i % 2 == 0 { outer } else { inner };
            Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_color_palette() -> Vec<String> {
        vec!["#ff0000".to_string(), "#00ff00".to_string()]
    }

    fn draw_all(primitive: &dyn Primitive, seed: &str, complexity: i64) -> Vec<Region> {
        let ctx = PatternContext::new(400.0);
        let mut rng = SeededRng::new(seed);
        let mut sink = RegionSink::new(two_color_palette());
        primitive.draw(&ctx, &mut rng, &mut sink, complexity);
        sink.into_regions()
    }

    #[test]
    fn every_primitive_emits_closed_regions() {
        for primitive in ALL {
            let regions = draw_all(*primitive, "geometry", 6);
            assert!(
                !regions.is_empty(),
                "{} emitted no regions",
                primitive.name()
            );
            for region in &regions {
                assert!(
                    region.geometry.is_closed(),
                    "{} emitted an open contour",
                    primitive.name()
                );
            }
        }
    }

    #[test]
    fn region_ids_are_unique_and_strictly_increasing() {
        for primitive in ALL {
            let regions = draw_all(*primitive, "ids", 7);
            for (k, region) in regions.iter().enumerate() {
                assert_eq!(region.id, format!("region-{k}"), "in {}", primitive.name());
            }
        }
    }

    #[test]
    fn palette_cycles_by_region_index() {
        let palette = two_color_palette();
        for primitive in ALL {
            let regions = draw_all(*primitive, "cycle", 8);
            for (k, region) in regions.iter().enumerate() {
                assert_eq!(
                    region.color,
                    palette[k % palette.len()],
                    "in {}",
                    primitive.name()
                );
            }
        }
    }

    #[test]
    fn region_count_is_monotone_in_complexity() {
        for primitive in ALL {
            let mut previous = 0;
            for complexity in 2..=9 {
                let count = draw_all(*primitive, "monotone", complexity).len();
                assert!(
                    count >= previous,
                    "{} shrank from {previous} to {count} regions at complexity {complexity}",
                    primitive.name()
                );
                previous = count;
            }
        }
    }

    #[test]
    fn registry_names_are_unique_and_resolvable() {
        for primitive in ALL {
            let found = by_name(primitive.name()).expect("registered name resolves");
            assert_eq!(found.name(), primitive.name());
        }
        let mut names: Vec<_> = ALL.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn drawing_is_deterministic_for_a_fixed_seed() {
        for primitive in ALL {
            let a = draw_all(*primitive, "repeat", 5);
            let b = draw_all(*primitive, "repeat", 5);
            assert_eq!(a, b, "in {}", primitive.name());
        }
    }
}
