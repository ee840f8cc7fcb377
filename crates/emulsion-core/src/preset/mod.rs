//! Immutable film-stock preset model.
//!
//! A [`Preset`] bundles one configuration value for every pipeline stage.
//! Presets are constructed once (by the catalog or deserialization) and
//! never mutated; runtime tweaks go through the override layer, which
//! derives a fresh effective preset instead of touching the base one.

pub mod curves;
pub mod effects;
pub mod grain;

use serde::{Deserialize, Serialize};

pub use curves::{CurvePoint, Curves};
pub use effects::{
    Bloom, FrameShadow, Halation, InstantFrame, LensDistortion, SelectiveColorAdjustment,
    SkinToneProtection, SplitTone, ToneMapping, Vignette,
};
pub use grain::{
    ClumpParams, DensityPoint, Grain, GrainChannel, GrainChannels, GrainNoise, NoiseKind,
    TemporalGrain,
};

/// The twelve scalar color adjustments. Zero is a no-op for every field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorAdjustments {
    /// Exposure in stops; applied as a 2^ev gain.
    #[serde(default)]
    pub exposure: f32,
    /// Contrast around the 0.5 midpoint, -1..1.
    #[serde(default)]
    pub contrast: f32,
    #[serde(default)]
    pub highlights: f32,
    #[serde(default)]
    pub shadows: f32,
    #[serde(default)]
    pub whites: f32,
    #[serde(default)]
    pub blacks: f32,
    #[serde(default)]
    pub saturation: f32,
    #[serde(default)]
    pub vibrance: f32,
    /// Warm/cool white balance shift, -1..1.
    #[serde(default)]
    pub temperature: f32,
    /// Green/magenta shift, -1..1.
    #[serde(default)]
    pub tint: f32,
    /// Lifted-blacks fade, 0..1.
    #[serde(default)]
    pub fade: f32,
    /// Local midtone contrast, -1..1.
    #[serde(default)]
    pub clarity: f32,
}

impl ColorAdjustments {
    /// True when every field is zero, i.e. the stage is an identity.
    pub fn is_neutral(&self) -> bool {
        let Self {
            exposure,
            contrast,
            highlights,
            shadows,
            whites,
            blacks,
            saturation,
            vibrance,
            temperature,
            tint,
            fade,
            clarity,
        } = *self;
        [
            exposure, contrast, highlights, shadows, whites, blacks, saturation, vibrance,
            temperature, tint, fade, clarity,
        ]
        .iter()
        .all(|v| *v == 0.0)
    }

    /// Scale every adjustment toward neutral: 0 -> identity, 1 -> unscaled.
    pub fn scaled(&self, t: f32) -> Self {
        Self {
            exposure: self.exposure * t,
            contrast: self.contrast * t,
            highlights: self.highlights * t,
            shadows: self.shadows * t,
            whites: self.whites * t,
            blacks: self.blacks * t,
            saturation: self.saturation * t,
            vibrance: self.vibrance * t,
            temperature: self.temperature * t,
            tint: self.tint * t,
            fade: self.fade * t,
            clarity: self.clarity * t,
        }
    }
}

/// Descriptive film-stock metadata. Carries no computational role.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilmStock {
    pub manufacturer: String,
    pub name: String,
    /// e.g. "color negative", "slide", "black and white".
    pub kind: String,
    /// ISO speed rating.
    pub speed: u32,
    /// Year of introduction, if known.
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub characteristics: Vec<String>,
}

/// Preset category, used for catalog grouping and default-curve lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Negative,
    Slide,
    Cinema,
    Instant,
    BlackAndWhite,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative => write!(f, "Negative"),
            Self::Slide => write!(f, "Slide"),
            Self::Cinema => write!(f, "Cinema"),
            Self::Instant => write!(f, "Instant"),
            Self::BlackAndWhite => write!(f, "Black & White"),
        }
    }
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Negative,
        Category::Slide,
        Category::Cinema,
        Category::Instant,
        Category::BlackAndWhite,
    ];
}

/// Root preset: identity plus one config value per pipeline stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub label: String,
    pub category: Category,
    /// Optional named LUT reference resolved by the host application.
    #[serde(default)]
    pub lut: Option<String>,
    #[serde(default)]
    pub stock: FilmStock,
    #[serde(default)]
    pub adjustments: ColorAdjustments,
    #[serde(default)]
    pub curves: Curves,
    #[serde(default)]
    pub split_tone: SplitTone,
    #[serde(default)]
    pub selective_colors: Vec<SelectiveColorAdjustment>,
    #[serde(default)]
    pub skin_tone: SkinToneProtection,
    #[serde(default)]
    pub tone_mapping: ToneMapping,
    #[serde(default)]
    pub grain: Grain,
    #[serde(default)]
    pub bloom: Bloom,
    #[serde(default)]
    pub halation: Halation,
    #[serde(default)]
    pub vignette: Vignette,
    #[serde(default)]
    pub lens_distortion: LensDistortion,
    #[serde(default)]
    pub frame: InstantFrame,
}

impl Preset {
    /// A preset with every stage disabled or zeroed. Rendering it is an
    /// identity transform.
    pub fn neutral(id: impl Into<String>, label: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category,
            lut: None,
            stock: FilmStock::default(),
            adjustments: ColorAdjustments::default(),
            curves: Curves::default(),
            split_tone: SplitTone::default(),
            selective_colors: Vec::new(),
            skin_tone: SkinToneProtection::default(),
            tone_mapping: ToneMapping::default(),
            grain: Grain::default(),
            bloom: Bloom::default(),
            halation: Halation::default(),
            vignette: Vignette::default(),
            lens_distortion: LensDistortion::default(),
            frame: InstantFrame::default(),
        }
    }
}
