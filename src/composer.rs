//! One-shot mandala composition.
//!
//! The composer seeds a fresh random source, resolves the difficulty policy,
//! selects a primitive and complexity, optionally shuffles the working
//! palette (seed-derived), invokes the primitive and assembles the colored
//! document, the mechanically derived outline document and the region list.

use crate::difficulty::{self, Difficulty};
use crate::error::{MandalaError, Result};
use crate::primitives::{self, PatternContext, Region, RegionSink};
use crate::rng::SeededRng;
use crate::svg::{Document, Shape};
use tracing::debug;

/// Immutable inputs for one generation call.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub seed: String,
    pub canvas_size: f64,
    pub difficulty: Difficulty,
    /// Ordered color values, length >= 1; cycled when a primitive needs more
    /// regions than entries.
    pub palette: Vec<String>,
}

/// Rendering and shuffling knobs, usually sourced from configuration.
#[derive(Debug, Clone)]
pub struct ComposerOptions {
    /// Shuffle the working palette with the seeded rng before drawing.
    pub shuffle_palette: bool,
    /// Neutral stroke applied to every colored shape.
    pub stroke_color: String,
    pub stroke_width: f64,
    /// Stroke the outline variant is recolored to.
    pub outline_color: String,
}

impl Default for ComposerOptions {
    fn default() -> Self {
        Self {
            shuffle_palette: false,
            stroke_color: "#333333".to_string(),
            stroke_width: 2.0,
            outline_color: "#000000".to_string(),
        }
    }
}

/// A complete, self-consistent generation, immutable once returned.
///
/// `outline` is geometrically identical to `colored` - same shape count,
/// ids and boundaries - differing only in fill/stroke styling.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Name of the primitive that drew this pattern.
    pub primitive: &'static str,
    pub complexity: i64,
    pub regions: Vec<Region>,
    pub colored: Document,
    pub outline: Document,
}

pub struct Composer {
    options: ComposerOptions,
}

impl Composer {
    pub fn new(options: ComposerOptions) -> Self {
        Self { options }
    }

    /// Compose one mandala from the given parameters.
    pub fn compose(&self, params: &GenerationParams) -> Result<Generation> {
        validate(params)?;

        let mut rng = SeededRng::new(&params.seed);
        let policy = difficulty::resolve(params.difficulty);
        let name = *rng.choose(policy.eligible)?;
        let complexity = rng.next_int(*policy.complexity.start(), *policy.complexity.end())?;

        self.finish(params, &mut rng, name, complexity)
    }

    /// Compose with a pinned primitive and complexity instead of drawing
    /// them from the policy. Used by the showcase command and by tests that
    /// need to exercise one primitive at a time.
    pub fn compose_primitive(
        &self,
        params: &GenerationParams,
        name: &str,
        complexity: i64,
    ) -> Result<Generation> {
        validate(params)?;
        let mut rng = SeededRng::new(&params.seed);
        self.finish(params, &mut rng, name, complexity)
    }

    fn finish(
        &self,
        params: &GenerationParams,
        rng: &mut SeededRng,
        name: &str,
        complexity: i64,
    ) -> Result<Generation> {
        let primitive = primitives::by_name(name).ok_or_else(|| {
            MandalaError::invalid(format!("unknown primitive in policy: {name}"))
        })?;

        let mut palette = params.palette.clone();
        if self.options.shuffle_palette {
            rng.shuffle(&mut palette);
        }

        debug!(primitive = name, complexity, seed = %params.seed, "composing mandala");

        let ctx = PatternContext::new(params.canvas_size);
        let mut sink = RegionSink::new(palette);
        primitive.draw(&ctx, rng, &mut sink, complexity);
        let regions = sink.into_regions();

        let mut colored = Document::new(params.canvas_size);
        for region in &regions {
            colored.shapes.push(Shape {
                id: region.id.clone(),
                geometry: region.geometry.clone(),
                fill: Some(region.color.clone()),
                stroke: self.options.stroke_color.clone(),
                stroke_width: self.options.stroke_width,
            });
        }
        let outline = colored.outlined(&self.options.stroke_color, &self.options.outline_color);

        Ok(Generation {
            primitive: primitive.name(),
            complexity,
            regions,
            colored,
            outline,
        })
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(ComposerOptions::default())
    }
}

fn validate(params: &GenerationParams) -> Result<()> {
    if params.canvas_size <= 0.0 {
        return Err(MandalaError::invalid(format!(
            "canvas size must be positive, got {}",
            params.canvas_size
        )));
    }
    if params.palette.is_empty() {
        return Err(MandalaError::invalid("palette must not be empty"));
    }
    Ok(())
}
