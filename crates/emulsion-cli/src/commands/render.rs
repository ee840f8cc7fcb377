use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use emulsion_core::catalog::Catalog;
use emulsion_core::io::image_io::{load_image, save_image};
use emulsion_core::overrides::EffectOverrides;
use emulsion_core::pipeline::engine::render;
use emulsion_core::pipeline::Tier;

use crate::summary::print_render_summary;

use super::{parse_effect, resolve_preset};

#[derive(Args)]
pub struct RenderArgs {
    /// Input image (PNG, JPEG, TIFF)
    pub file: PathBuf,

    /// Built-in preset id (see `emulsion presets`)
    #[arg(long)]
    pub preset: Option<String>,

    /// Load the preset from a TOML file instead
    #[arg(long)]
    pub preset_file: Option<PathBuf>,

    /// Disable an effect (repeatable), e.g. --disable grain
    #[arg(long = "disable", value_name = "EFFECT")]
    pub disabled: Vec<String>,

    /// Scale an effect (repeatable), e.g. --intensity grain=0.5
    #[arg(long = "intensity", value_name = "EFFECT=VALUE")]
    pub intensities: Vec<String>,

    /// Render at the capped preview resolution instead of full quality
    #[arg(long)]
    pub preview: bool,

    /// Output file path
    #[arg(short, long, default_value = "result.png")]
    pub output: PathBuf,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let catalog = Catalog::built_in()?;
    let preset = resolve_preset(&catalog, args.preset.as_deref(), args.preset_file.as_deref())?;

    let mut overrides = EffectOverrides::default();
    overrides.load_preset(&preset);
    for name in &args.disabled {
        overrides.set_enabled(parse_effect(name)?, false);
    }
    for pair in &args.intensities {
        let (name, value) = pair
            .split_once('=')
            .with_context(|| format!("expected EFFECT=VALUE, got `{pair}`"))?;
        let value: f32 = value
            .trim()
            .parse()
            .with_context(|| format!("invalid intensity `{value}`"))?;
        overrides.set_intensity(parse_effect(name.trim())?, value);
    }

    let effective = overrides.apply_to_preset(&preset).unwrap_or_else(|| preset.clone());
    let tier = if args.preview { Tier::Preview } else { Tier::Full };

    print_render_summary(&effective, &overrides, &args.file, &args.output, tier);

    let image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message(format!("Rendering {} at {tier}...", effective.label));
    pb.enable_steady_tick(std::time::Duration::from_millis(120));

    let result = render(&image, &effective, tier)?;
    pb.finish_and_clear();

    let Some(rendered) = result else {
        bail!("render produced no result");
    };

    save_image(&rendered, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("Output saved to {}", args.output.display());

    Ok(())
}
