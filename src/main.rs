//! Mandala CLI - render colored/outline mandala pairs for memory training.

use anyhow::{bail, Result};
use clap::Parser;
use mandala::composer::{Composer, ComposerOptions, Generation, GenerationParams};
use mandala::config::MandalaConfig;
use mandala::difficulty::Difficulty;
use mandala::primitives;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mandala")]
#[command(about = "Generate symmetric mandala line art for a visual-memory exercise")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "mandala.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Generate one colored/outline mandala pair
    Generate {
        /// Seed for generation (any string; a fresh random seed by default)
        #[arg(short = 'S', long)]
        seed: Option<String>,

        /// Canvas size in SVG units
        #[arg(long)]
        size: Option<f64>,

        /// Difficulty tier
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,

        /// Palette name from config, or comma-separated hex colors
        /// (e.g. "#E63946,#2A9D8F")
        #[arg(short, long)]
        palette: Option<String>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Shuffle the palette order (seed-derived)
        #[arg(long)]
        shuffle_palette: bool,

        /// Also save the region list as JSON
        #[arg(long)]
        save_regions: bool,
    },

    /// Render every primitive at a fixed seed for comparison
    Showcase {
        /// Output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Seed for consistent results
        #[arg(short = 'S', long, default_value = "42")]
        seed: String,

        /// Canvas size in SVG units
        #[arg(long)]
        size: Option<f64>,

        /// Complexity passed to every primitive
        #[arg(short, long, default_value = "6")]
        complexity: i64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mandala=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = MandalaConfig::load(Path::new(&cli.config))?;

    match cli.command {
        Commands::Generate {
            seed,
            size,
            difficulty,
            palette,
            output,
            shuffle_palette,
            save_regions,
        } => {
            let seed = seed.unwrap_or_else(|| rand::random::<u32>().to_string());
            let size = size.unwrap_or(config.output.canvas_size);
            let difficulty = difficulty.unwrap_or(config.generator.default_difficulty);
            let palette = resolve_palette(&config, palette.as_deref())?;

            let composer = Composer::new(ComposerOptions {
                shuffle_palette: shuffle_palette || config.generator.shuffle_palette,
                stroke_color: config.generator.stroke_color.clone(),
                stroke_width: config.generator.stroke_width,
                outline_color: config.generator.outline_color.clone(),
            });

            let params = GenerationParams {
                seed: seed.clone(),
                canvas_size: size,
                difficulty,
                palette,
            };

            println!(
                "Generating {} mandala with seed {}...",
                difficulty.as_str(),
                seed
            );
            let generation = composer.compose(&params)?;
            println!(
                "  {} with complexity {}, {} regions",
                generation.primitive,
                generation.complexity,
                generation.regions.len()
            );

            let output_dir = output.unwrap_or_else(|| PathBuf::from(&config.output.directory));
            fs::create_dir_all(&output_dir)?;
            write_pair(&output_dir, &seed, &generation, save_regions)?;
        }

        Commands::Showcase {
            output_dir,
            seed,
            size,
            complexity,
        } => {
            let output_dir = output_dir
                .unwrap_or_else(|| PathBuf::from(&config.output.directory).join("showcase"));
            fs::create_dir_all(&output_dir)?;

            let size = size.unwrap_or(config.output.canvas_size);
            let palette = resolve_palette(&config, None)?;
            let composer = Composer::new(ComposerOptions {
                shuffle_palette: config.generator.shuffle_palette,
                stroke_color: config.generator.stroke_color.clone(),
                stroke_width: config.generator.stroke_width,
                outline_color: config.generator.outline_color.clone(),
            });

            println!("Generating showcase with seed {}...", seed);
            for primitive in primitives::ALL {
                let params = GenerationParams {
                    seed: seed.clone(),
                    canvas_size: size,
                    difficulty: Difficulty::Advanced,
                    palette: palette.clone(),
                };
                let generation =
                    composer.compose_primitive(&params, primitive.name(), complexity)?;

                let filename = format!("{}.svg", primitive.name());
                fs::write(output_dir.join(&filename), generation.colored.to_svg())?;
                let outline_name = format!("{}_outline.svg", primitive.name());
                fs::write(output_dir.join(&outline_name), generation.outline.to_svg())?;
                println!("  Created {} ({} regions)", filename, generation.regions.len());
            }
            println!("Done! Showcase saved to {}", output_dir.display());
        }
    }

    Ok(())
}

/// Resolve `--palette` as a comma-separated color list or a named palette
/// from the configuration table, falling back to the configured default.
fn resolve_palette(config: &MandalaConfig, arg: Option<&str>) -> Result<Vec<String>> {
    let selector = arg.unwrap_or(&config.generator.default_palette);
    if selector.contains(',') || selector.starts_with('#') {
        return Ok(selector.split(',').map(|s| s.trim().to_string()).collect());
    }
    match config.palette(selector) {
        Some(colors) => Ok(colors.clone()),
        None => bail!("unknown palette: {selector}"),
    }
}

fn write_pair(
    output_dir: &Path,
    seed: &str,
    generation: &Generation,
    save_regions: bool,
) -> Result<()> {
    let stem = seed.replace(|c: char| !c.is_alphanumeric(), "_");

    let colored_path = output_dir.join(format!("mandala_{stem}.svg"));
    fs::write(&colored_path, generation.colored.to_svg())?;
    println!("Saved to {}", colored_path.display());

    let outline_path = output_dir.join(format!("mandala_{stem}_outline.svg"));
    fs::write(&outline_path, generation.outline.to_svg())?;
    println!("Saved outline to {}", outline_path.display());

    if save_regions {
        let regions_path = output_dir.join(format!("mandala_{stem}_regions.json"));
        let regions_json = serde_json::to_string_pretty(&generation.regions)?;
        fs::write(&regions_path, regions_json)?;
        println!("Saved regions to {}", regions_path.display());
    }

    Ok(())
}
