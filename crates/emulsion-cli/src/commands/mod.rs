pub mod cost;
pub mod presets;
pub mod render;
pub mod show;

use anyhow::{bail, Context, Result};
use std::path::Path;

use emulsion_core::catalog::Catalog;
use emulsion_core::overrides::EffectKind;
use emulsion_core::preset::{Category, Preset};

/// Effect names accepted on the command line.
pub fn parse_effect(name: &str) -> Result<EffectKind> {
    let kind = match name.to_ascii_lowercase().as_str() {
        "color" | "adjustments" => EffectKind::ColorAdjustments,
        "curves" => EffectKind::Curves,
        "split-tone" => EffectKind::SplitTone,
        "selective-color" => EffectKind::SelectiveColor,
        "skin-tone" => EffectKind::SkinTone,
        "tone-mapping" => EffectKind::ToneMapping,
        "grain" => EffectKind::Grain,
        "bloom" => EffectKind::Bloom,
        "halation" => EffectKind::Halation,
        "vignette" => EffectKind::Vignette,
        "lens-distortion" => EffectKind::LensDistortion,
        "frame" | "instant-frame" => EffectKind::InstantFrame,
        other => bail!("unknown effect `{other}`"),
    };
    Ok(kind)
}

pub fn parse_category(name: &str) -> Result<Category> {
    let category = match name.to_ascii_lowercase().as_str() {
        "negative" => Category::Negative,
        "slide" => Category::Slide,
        "cinema" => Category::Cinema,
        "instant" => Category::Instant,
        "bw" | "black-and-white" => Category::BlackAndWhite,
        other => bail!("unknown category `{other}` (negative, slide, cinema, instant, bw)"),
    };
    Ok(category)
}

/// Resolve a preset either from the catalog by id or from a TOML file.
pub fn resolve_preset(
    catalog: &Catalog,
    id: Option<&str>,
    file: Option<&Path>,
) -> Result<Preset> {
    match (id, file) {
        (Some(_), Some(_)) => bail!("pass either a preset id or --preset-file, not both"),
        (Some(id), None) => Ok(catalog.get(id)?.clone()),
        (None, Some(path)) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read preset {}", path.display()))?;
            toml::from_str(&contents).context("Invalid preset file")
        }
        (None, None) => bail!("a preset id or --preset-file is required"),
    }
}
