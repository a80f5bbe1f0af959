//! Difficulty tiers and the static policy table.
//!
//! Each tier maps to a complexity range and the subset of primitives that
//! may be selected. Ranges and primitive sets grow monotonically from
//! beginner to advanced; the mapping is static configuration, not computed.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// Complexity range and primitive eligibility for one tier.
#[derive(Debug, Clone)]
pub struct DifficultyPolicy {
    pub complexity: RangeInclusive<i64>,
    pub eligible: &'static [&'static str],
}

const BEGINNER_PRIMITIVES: &[&str] = &[
    "concentric_rings",
    "nested_squares",
    "cross_motif",
    "pie_wedges",
];

const INTERMEDIATE_PRIMITIVES: &[&str] = &[
    "concentric_rings",
    "nested_squares",
    "cross_motif",
    "pie_wedges",
    "triangle_motif",
    "diamond_ring",
    "hexagon_rings",
    "star_burst",
];

const ADVANCED_PRIMITIVES: &[&str] = &[
    "concentric_rings",
    "nested_squares",
    "cross_motif",
    "pie_wedges",
    "triangle_motif",
    "diamond_ring",
    "hexagon_rings",
    "star_burst",
    "petal_rosette",
    "spiral_arms",
    "wave_rings",
];

/// Resolve a tier to its complexity range and eligible primitives.
pub fn resolve(difficulty: Difficulty) -> DifficultyPolicy {
    match difficulty {
        Difficulty::Beginner => DifficultyPolicy {
            complexity: 2..=4,
            eligible: BEGINNER_PRIMITIVES,
        },
        Difficulty::Intermediate => DifficultyPolicy {
            complexity: 4..=6,
            eligible: INTERMEDIATE_PRIMITIVES,
        },
        Difficulty::Advanced => DifficultyPolicy {
            complexity: 6..=9,
            eligible: ADVANCED_PRIMITIVES,
        },
    }
}
