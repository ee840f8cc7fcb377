use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::Style;

use emulsion_core::catalog::Catalog;
use emulsion_core::overrides::{preset_stage_enabled, EffectKind, EffectOverrides};

use super::resolve_preset;

#[derive(Args)]
pub struct CostArgs {
    /// Built-in preset id
    pub preset: Option<String>,

    /// Load the preset from a TOML file instead
    #[arg(long)]
    pub preset_file: Option<PathBuf>,
}

pub fn run(args: &CostArgs) -> Result<()> {
    let catalog = Catalog::built_in()?;
    let preset = resolve_preset(&catalog, args.preset.as_deref(), args.preset_file.as_deref())?;

    let mut overrides = EffectOverrides::default();
    overrides.load_preset(&preset);

    let label = Style::new().dim();
    let value = Style::new().bold().white();
    let effect = Style::new().green();

    println!(
        "{:<14}{} ({:.0}% of maximum)",
        label.apply_to("Cost"),
        value.apply_to(overrides.performance_level()),
        overrides.performance_score() * 100.0
    );
    println!();

    let mut active: Vec<EffectKind> = EffectKind::ALL
        .into_iter()
        .filter(|&kind| preset_stage_enabled(&preset, kind))
        .collect();
    active.sort_by(|a, b| {
        b.cost_weight()
            .partial_cmp(&a.cost_weight())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for kind in active {
        println!("  {:<18} {:.2}", effect.apply_to(kind), kind.cost_weight());
    }

    Ok(())
}
