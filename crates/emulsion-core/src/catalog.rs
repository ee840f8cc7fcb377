//! Built-in film-stock presets.
//!
//! Presets are constructed once at catalog build time and immutable after
//! that. Each category owns a base tone-curve table; per-preset color
//! character is layered on top with channel tweaks. The mapping from
//! category to curves is explicit and checked by [`Catalog::validate`],
//! never inferred from preset ids.

use std::collections::BTreeMap;

use crate::error::{EmulsionError, Result};
use crate::preset::{
    Bloom, Category, ColorAdjustments, CurvePoint, Curves, DensityPoint, FilmStock, FrameShadow,
    Grain, Halation, InstantFrame, Preset, SelectiveColorAdjustment, SkinToneProtection,
    SplitTone, ToneMapping, Vignette,
};

/// The built-in preset set plus the per-category base curve tables.
pub struct Catalog {
    presets: Vec<Preset>,
    curve_tables: BTreeMap<Category, Curves>,
}

impl Catalog {
    /// Build and validate the built-in catalog.
    pub fn built_in() -> Result<Self> {
        let curve_tables = curve_tables();

        let mut presets = Vec::new();
        for build in [
            portra_400,
            ektar_100,
            velvia_50,
            provia_100f,
            vision3_250d,
            eterna_500t,
            sx_70,
            instax_mini,
            tri_x_400,
            hp5_plus,
        ] {
            let mut preset = build();
            // Category base curves apply wherever the look did not bring
            // its own.
            if preset.curves.is_identity() {
                if let Some(base) = curve_tables.get(&preset.category) {
                    preset.curves = base.clone();
                }
            }
            presets.push(preset);
        }

        let catalog = Self {
            presets,
            curve_tables,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Every category must have a curve table and at least one preset,
    /// and preset ids must be unique.
    pub fn validate(&self) -> Result<()> {
        for category in Category::ALL {
            if !self.curve_tables.contains_key(&category) {
                return Err(EmulsionError::CatalogInvalid(format!(
                    "no curve table for category {category}"
                )));
            }
            if !self.presets.iter().any(|p| p.category == category) {
                return Err(EmulsionError::CatalogInvalid(format!(
                    "no presets in category {category}"
                )));
            }
        }

        let mut seen = std::collections::BTreeSet::new();
        for preset in &self.presets {
            if !seen.insert(preset.id.as_str()) {
                return Err(EmulsionError::CatalogInvalid(format!(
                    "duplicate preset id `{}`",
                    preset.id
                )));
            }
        }
        Ok(())
    }

    pub fn all(&self) -> &[Preset] {
        &self.presets
    }

    pub fn list(&self, category: Category) -> Vec<&Preset> {
        self.presets
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn get(&self, id: &str) -> Result<&Preset> {
        self.presets
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| EmulsionError::UnknownPreset(id.to_string()))
    }

    pub fn base_curves(&self, category: Category) -> Option<&Curves> {
        self.curve_tables.get(&category)
    }
}

fn points(pairs: &[(f32, f32)]) -> Vec<CurvePoint> {
    pairs
        .iter()
        .map(|&(input, output)| CurvePoint { input, output })
        .collect()
}

fn uniform_curves(pairs: &[(f32, f32)]) -> Curves {
    Curves {
        red: points(pairs),
        green: points(pairs),
        blue: points(pairs),
    }
}

/// Base tonal response per category, before per-preset color tweaks.
fn curve_tables() -> BTreeMap<Category, Curves> {
    let mut tables = BTreeMap::new();
    tables.insert(
        Category::Negative,
        uniform_curves(&[
            (0.0, 0.03),
            (0.25, 0.22),
            (0.5, 0.5),
            (0.75, 0.79),
            (1.0, 0.97),
        ]),
    );
    tables.insert(
        Category::Slide,
        uniform_curves(&[
            (0.0, 0.0),
            (0.2, 0.13),
            (0.5, 0.52),
            (0.8, 0.89),
            (1.0, 1.0),
        ]),
    );
    tables.insert(
        Category::Cinema,
        uniform_curves(&[(0.0, 0.05), (0.3, 0.29), (0.7, 0.73), (1.0, 0.93)]),
    );
    tables.insert(
        Category::Instant,
        uniform_curves(&[(0.0, 0.08), (0.5, 0.52), (1.0, 0.93)]),
    );
    tables.insert(
        Category::BlackAndWhite,
        uniform_curves(&[(0.0, 0.0), (0.3, 0.22), (0.7, 0.8), (1.0, 1.0)]),
    );
    tables
}

fn stock(
    manufacturer: &str,
    name: &str,
    kind: &str,
    speed: u32,
    year: u32,
    characteristics: &[&str],
) -> FilmStock {
    FilmStock {
        manufacturer: manufacturer.into(),
        name: name.into(),
        kind: kind.into(),
        speed,
        year: Some(year),
        characteristics: characteristics.iter().map(|c| (*c).to_string()).collect(),
    }
}

fn portra_400() -> Preset {
    let mut p = Preset::neutral("portra-400", "Portra 400", Category::Negative);
    p.stock = stock(
        "Kodak",
        "Portra 400",
        "color negative",
        400,
        1998,
        &["warm", "fine grain", "natural skin"],
    );
    p.adjustments = ColorAdjustments {
        temperature: 0.12,
        saturation: -0.08,
        fade: 0.15,
        ..ColorAdjustments::default()
    };
    p.skin_tone = SkinToneProtection {
        enabled: true,
        strength: 0.8,
        warmth: 0.03,
        ..SkinToneProtection::default()
    };
    p.grain = Grain {
        enabled: true,
        global_intensity: 0.25,
        ..Grain::default()
    };
    p.vignette = Vignette {
        enabled: true,
        intensity: 0.12,
        ..Vignette::default()
    };
    p
}

fn ektar_100() -> Preset {
    let mut p = Preset::neutral("ektar-100", "Ektar 100", Category::Negative);
    p.stock = stock(
        "Kodak",
        "Ektar 100",
        "color negative",
        100,
        2008,
        &["vivid", "ultra fine grain", "red bias"],
    );
    p.adjustments = ColorAdjustments {
        saturation: 0.18,
        contrast: 0.1,
        temperature: 0.05,
        ..ColorAdjustments::default()
    };
    p.selective_colors = vec![SelectiveColorAdjustment {
        hue: 0.0,
        range: 0.06,
        saturation: 0.2,
        luminance: 0.0,
        hue_shift: 0.0,
    }];
    p.grain = Grain {
        enabled: true,
        global_intensity: 0.12,
        ..Grain::default()
    };
    p
}

fn velvia_50() -> Preset {
    let mut p = Preset::neutral("velvia-50", "Velvia 50", Category::Slide);
    p.stock = stock(
        "Fujifilm",
        "Velvia 50",
        "slide",
        50,
        1990,
        &["saturated", "high contrast", "landscape"],
    );
    p.adjustments = ColorAdjustments {
        saturation: 0.35,
        contrast: 0.2,
        blacks: -0.05,
        ..ColorAdjustments::default()
    };
    p.selective_colors = vec![
        // Greens toward emerald, blues deepened.
        SelectiveColorAdjustment {
            hue: 0.33,
            range: 0.1,
            saturation: 0.25,
            luminance: -0.05,
            hue_shift: 0.01,
        },
        SelectiveColorAdjustment {
            hue: 0.61,
            range: 0.08,
            saturation: 0.2,
            luminance: -0.1,
            hue_shift: 0.0,
        },
    ];
    p.vignette = Vignette {
        enabled: true,
        intensity: 0.2,
        ..Vignette::default()
    };
    p.grain = Grain {
        enabled: true,
        global_intensity: 0.1,
        ..Grain::default()
    };
    p
}

fn provia_100f() -> Preset {
    let mut p = Preset::neutral("provia-100f", "Provia 100F", Category::Slide);
    p.stock = stock(
        "Fujifilm",
        "Provia 100F",
        "slide",
        100,
        2001,
        &["neutral", "fine grain"],
    );
    p.adjustments = ColorAdjustments {
        saturation: 0.12,
        contrast: 0.12,
        ..ColorAdjustments::default()
    };
    p.grain = Grain {
        enabled: true,
        global_intensity: 0.1,
        ..Grain::default()
    };
    p
}

fn vision3_250d() -> Preset {
    let mut p = Preset::neutral("vision3-250d", "Vision3 250D", Category::Cinema);
    p.stock = stock(
        "Kodak",
        "Vision3 250D",
        "cinema negative",
        250,
        2009,
        &["daylight", "halation", "wide latitude"],
    );
    p.adjustments = ColorAdjustments {
        temperature: 0.06,
        fade: 0.1,
        highlights: -0.15,
        ..ColorAdjustments::default()
    };
    p.tone_mapping = ToneMapping {
        enabled: true,
        ..ToneMapping::default()
    };
    p.halation = Halation {
        enabled: true,
        intensity: 0.35,
        threshold: 0.75,
        ..Halation::default()
    };
    p.grain = Grain {
        enabled: true,
        global_intensity: 0.2,
        ..Grain::default()
    };
    p
}

fn eterna_500t() -> Preset {
    let mut p = Preset::neutral("eterna-500t", "Eterna 500T", Category::Cinema);
    p.stock = stock(
        "Fujifilm",
        "Eterna 500T",
        "cinema negative",
        500,
        2005,
        &["tungsten", "muted", "soft highlights"],
    );
    p.adjustments = ColorAdjustments {
        temperature: -0.1,
        saturation: -0.15,
        fade: 0.18,
        ..ColorAdjustments::default()
    };
    p.split_tone = SplitTone {
        enabled: true,
        shadows_hue: 0.58,
        shadows_saturation: 0.2,
        highlights_hue: 0.1,
        highlights_saturation: 0.1,
        ..SplitTone::default()
    };
    p.tone_mapping = ToneMapping {
        enabled: true,
        ..ToneMapping::default()
    };
    p.bloom = Bloom {
        enabled: true,
        intensity: 0.2,
        threshold: 0.8,
        ..Bloom::default()
    };
    p.grain = Grain {
        enabled: true,
        global_intensity: 0.3,
        ..Grain::default()
    };
    p
}

fn sx_70() -> Preset {
    let mut p = Preset::neutral("sx-70", "SX-70", Category::Instant);
    p.stock = stock(
        "Polaroid",
        "SX-70",
        "instant",
        160,
        1972,
        &["faded", "warm cast", "soft"],
    );
    p.adjustments = ColorAdjustments {
        temperature: 0.18,
        tint: 0.05,
        saturation: -0.2,
        fade: 0.35,
        contrast: -0.1,
        ..ColorAdjustments::default()
    };
    p.vignette = Vignette {
        enabled: true,
        intensity: 0.25,
        feather: 0.6,
        ..Vignette::default()
    };
    p.grain = Grain {
        enabled: true,
        global_intensity: 0.18,
        ..Grain::default()
    };
    p.frame = InstantFrame {
        enabled: true,
        // Classic instant geometry: wide bottom lip.
        border_widths: [0.05, 0.05, 0.05, 0.18],
        border_color: [0.96, 0.95, 0.92],
        texture: None,
        shadow: FrameShadow {
            blur: 10.0,
            opacity: 0.3,
            offset: [4.0, 0.0],
        },
    };
    p
}

fn instax_mini() -> Preset {
    let mut p = Preset::neutral("instax-mini", "Instax Mini", Category::Instant);
    p.stock = stock(
        "Fujifilm",
        "Instax Mini",
        "instant",
        800,
        1998,
        &["cool", "punchy", "glossy"],
    );
    p.adjustments = ColorAdjustments {
        temperature: -0.05,
        saturation: 0.1,
        contrast: 0.08,
        fade: 0.12,
        ..ColorAdjustments::default()
    };
    p.vignette = Vignette {
        enabled: true,
        intensity: 0.15,
        ..Vignette::default()
    };
    p.frame = InstantFrame {
        enabled: true,
        border_widths: [0.06, 0.06, 0.06, 0.14],
        border_color: [0.98, 0.98, 0.98],
        texture: None,
        shadow: FrameShadow::default(),
    };
    p
}

fn tri_x_400() -> Preset {
    let mut p = Preset::neutral("tri-x-400", "Tri-X 400", Category::BlackAndWhite);
    p.stock = stock(
        "Kodak",
        "Tri-X 400",
        "black and white",
        400,
        1954,
        &["gritty", "classic reportage"],
    );
    p.adjustments = ColorAdjustments {
        saturation: -1.0,
        contrast: 0.22,
        ..ColorAdjustments::default()
    };
    p.grain = Grain {
        enabled: true,
        global_intensity: 0.45,
        density_curve: vec![
            DensityPoint {
                luma: 0.0,
                multiplier: 0.4,
            },
            DensityPoint {
                luma: 0.5,
                multiplier: 1.0,
            },
            DensityPoint {
                luma: 1.0,
                multiplier: 0.3,
            },
        ],
        ..Grain::default()
    };
    p.vignette = Vignette {
        enabled: true,
        intensity: 0.18,
        ..Vignette::default()
    };
    p
}

fn hp5_plus() -> Preset {
    let mut p = Preset::neutral("hp5-plus", "HP5 Plus", Category::BlackAndWhite);
    p.stock = stock(
        "Ilford",
        "HP5 Plus",
        "black and white",
        400,
        1989,
        &["forgiving", "medium contrast"],
    );
    p.adjustments = ColorAdjustments {
        saturation: -1.0,
        contrast: 0.12,
        shadows: 0.08,
        ..ColorAdjustments::default()
    };
    p.grain = Grain {
        enabled: true,
        global_intensity: 0.35,
        ..Grain::default()
    };
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_catalog_validates() {
        let catalog = Catalog::built_in().unwrap();
        assert!(catalog.all().len() >= 10);
    }

    #[test]
    fn every_category_has_presets_and_curves() {
        let catalog = Catalog::built_in().unwrap();
        for category in Category::ALL {
            assert!(
                !catalog.list(category).is_empty(),
                "category {category} empty"
            );
            assert!(catalog.base_curves(category).is_some());
        }
    }

    #[test]
    fn get_unknown_id_errors() {
        let catalog = Catalog::built_in().unwrap();
        assert!(matches!(
            catalog.get("kodachrome-25"),
            Err(EmulsionError::UnknownPreset(_))
        ));
    }
}
