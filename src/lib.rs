//! Mandala - deterministic symmetric line art for visual-memory training.
//!
//! A seed string plus generation parameters produce a colored design, a
//! stroke-only outline of the identical geometry, and a structured list of
//! named regions a consumer can use for interactive recoloring or scoring.

pub mod composer;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod primitives;
pub mod rng;
pub mod svg;

pub use composer::{Composer, ComposerOptions, Generation, GenerationParams};
pub use config::MandalaConfig;
pub use difficulty::Difficulty;
pub use error::{MandalaError, Result};
pub use primitives::{Primitive, Region};
pub use rng::SeededRng;
