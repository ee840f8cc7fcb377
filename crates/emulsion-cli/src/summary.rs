use std::path::Path;

use console::Style;

use emulsion_core::overrides::{preset_stage_enabled, EffectKind, EffectOverrides};
use emulsion_core::pipeline::Tier;
use emulsion_core::preset::Preset;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    effect: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            effect: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_render_summary(
    preset: &Preset,
    overrides: &EffectOverrides,
    input: &Path,
    output: &Path,
    tier: Tier,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Emulsion"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();
    println!("  {:<14}{}", s.label.apply_to("Input"), s.path.apply_to(input.display()));
    println!("  {:<14}{}", s.label.apply_to("Output"), s.path.apply_to(output.display()));
    println!(
        "  {:<14}{} ({})",
        s.label.apply_to("Preset"),
        s.value.apply_to(&preset.label),
        preset.category
    );
    println!("  {:<14}{}", s.label.apply_to("Tier"), s.value.apply_to(tier));
    println!(
        "  {:<14}{} ({:.0}%)",
        s.label.apply_to("Cost"),
        s.value.apply_to(overrides.performance_level()),
        overrides.performance_score() * 100.0
    );
    println!();

    for kind in EffectKind::ALL {
        let state = overrides.state(kind);
        let active = state.enabled && preset_stage_enabled(preset, kind);
        let line = if active {
            if (state.intensity - 1.0).abs() > f32::EPSILON {
                format!("{} ({:.0}%)", s.effect.apply_to(kind), state.intensity * 100.0)
            } else {
                format!("{}", s.effect.apply_to(kind))
            }
        } else {
            format!("{}", s.disabled.apply_to(kind))
        };
        println!("    {line}");
    }
    println!();
}
