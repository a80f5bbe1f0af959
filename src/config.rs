//! Configuration loading for mandala.
//!
//! Configuration is loaded from TOML files with environment variable
//! overrides. The named palette table lives here so palettes are static
//! configuration looked up by name rather than module-level constants.

use crate::difficulty::Difficulty;
use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "config.default.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct MandalaConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default = "default_palettes")]
    pub palettes: HashMap<String, Vec<String>>,
}

impl Default for MandalaConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            generator: GeneratorConfig::default(),
            palettes: default_palettes(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: String,

    #[serde(default = "default_canvas_size")]
    pub canvas_size: f64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            canvas_size: default_canvas_size(),
        }
    }
}

fn default_directory() -> String {
    "output".to_string()
}

fn default_canvas_size() -> f64 {
    400.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub shuffle_palette: bool,

    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,

    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    #[serde(default = "default_outline_color")]
    pub outline_color: String,

    #[serde(default = "default_palette_name")]
    pub default_palette: String,

    #[serde(default = "default_difficulty")]
    pub default_difficulty: Difficulty,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            shuffle_palette: false,
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
            outline_color: default_outline_color(),
            default_palette: default_palette_name(),
            default_difficulty: default_difficulty(),
        }
    }
}

fn default_stroke_color() -> String {
    "#333333".to_string()
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_outline_color() -> String {
    "#000000".to_string()
}

fn default_palette_name() -> String {
    "vivid".to_string()
}

fn default_difficulty() -> Difficulty {
    Difficulty::Beginner
}

fn default_palettes() -> HashMap<String, Vec<String>> {
    let table: [(&str, &[&str]); 4] = [
        (
            "vivid",
            &["#E63946", "#F4A261", "#2A9D8F", "#264653", "#E9C46A"],
        ),
        (
            "pastel",
            &["#FFB3BA", "#FFDFBA", "#FFFFBA", "#BAFFC9", "#BAE1FF"],
        ),
        (
            "ocean",
            &["#03045E", "#0077B6", "#00B4D8", "#90E0EF", "#CAF0F8"],
        ),
        (
            "earth",
            &["#606C38", "#283618", "#DDA15E", "#BC6C25", "#FEFAE0"],
        ),
    ];
    table
        .iter()
        .map(|(name, colors)| {
            (
                name.to_string(),
                colors.iter().map(|c| c.to_string()).collect(),
            )
        })
        .collect()
}

impl MandalaConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false))
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("MANDALA").separator("_"))
            .build()?;

        let mandala_config: MandalaConfig = config.try_deserialize().unwrap_or_default();
        Ok(mandala_config)
    }

    /// Look up a named palette from the configuration table.
    pub fn palette(&self, name: &str) -> Option<&Vec<String>> {
        self.palettes.get(name)
    }
}
