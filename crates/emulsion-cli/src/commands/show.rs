use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::Style;

use emulsion_core::catalog::Catalog;
use emulsion_core::overrides::{preset_stage_enabled, EffectKind};

#[derive(Args)]
pub struct ShowArgs {
    /// Preset id
    pub id: String,

    /// Print the full preset as TOML instead of a summary
    #[arg(long)]
    pub toml: bool,

    /// Write the preset to a TOML file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn run(args: &ShowArgs) -> Result<()> {
    let catalog = Catalog::built_in()?;
    let preset = catalog.get(&args.id)?;

    if let Some(ref path) = args.export {
        let contents = toml::to_string_pretty(preset).context("Failed to serialize preset")?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Exported {} to {}", preset.id, path.display());
        return Ok(());
    }

    if args.toml {
        print!("{}", toml::to_string_pretty(preset).context("Failed to serialize preset")?);
        return Ok(());
    }

    let label = Style::new().dim();
    let value = Style::new().bold().white();

    println!("{:<14}{}", label.apply_to("Id"), value.apply_to(&preset.id));
    println!("{:<14}{}", label.apply_to("Label"), value.apply_to(&preset.label));
    println!("{:<14}{}", label.apply_to("Category"), value.apply_to(preset.category));
    println!(
        "{:<14}{} {} ({}, ISO {})",
        label.apply_to("Stock"),
        preset.stock.manufacturer,
        preset.stock.name,
        preset.stock.kind,
        preset.stock.speed
    );
    if let Some(year) = preset.stock.year {
        println!("{:<14}{}", label.apply_to("Introduced"), year);
    }
    if !preset.stock.characteristics.is_empty() {
        println!(
            "{:<14}{}",
            label.apply_to("Character"),
            preset.stock.characteristics.join(", ")
        );
    }

    let active: Vec<String> = EffectKind::ALL
        .into_iter()
        .filter(|&kind| preset_stage_enabled(preset, kind))
        .map(|kind| kind.to_string())
        .collect();
    println!("{:<14}{}", label.apply_to("Stages"), active.join(", "));

    Ok(())
}
