//! Per-stage effect configurations other than the scalar adjustments,
//! curves and grain.

use serde::{Deserialize, Serialize};

/// Hue/saturation toning split between shadow and highlight bands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitTone {
    #[serde(default)]
    pub enabled: bool,
    /// Shadow tint hue in turns [0,1).
    pub shadows_hue: f32,
    /// Shadow tint saturation, 0..1.
    pub shadows_saturation: f32,
    pub highlights_hue: f32,
    pub highlights_saturation: f32,
    /// Luma pivot between the two bands, 0..1. 0.5 is symmetric.
    pub balance: f32,
    /// Attenuates the effect near mid-luminance, 0..1.
    pub midtone_protection: f32,
}

impl Default for SplitTone {
    fn default() -> Self {
        Self {
            enabled: false,
            shadows_hue: 0.6,
            shadows_saturation: 0.0,
            highlights_hue: 0.1,
            highlights_saturation: 0.0,
            balance: 0.5,
            midtone_protection: 0.5,
        }
    }
}

impl SplitTone {
    pub fn scaled(&self, t: f32) -> Self {
        Self {
            shadows_saturation: self.shadows_saturation * t,
            highlights_saturation: self.highlights_saturation * t,
            ..self.clone()
        }
    }
}

/// HSL perturbation restricted to a hue band. Applied in sequence order;
/// overlapping bands accumulate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectiveColorAdjustment {
    /// Band center hue in turns [0,1).
    pub hue: f32,
    /// Half-width of the band in turns; falloff is smooth inside it.
    pub range: f32,
    /// Saturation delta, -1..1.
    #[serde(default)]
    pub saturation: f32,
    /// Luminance delta, -1..1.
    #[serde(default)]
    pub luminance: f32,
    /// Hue shift in turns, about -0.1..0.1.
    #[serde(default)]
    pub hue_shift: f32,
}

impl SelectiveColorAdjustment {
    pub fn scaled(&self, t: f32) -> Self {
        Self {
            saturation: self.saturation * t,
            luminance: self.luminance * t,
            hue_shift: self.hue_shift * t,
            ..*self
        }
    }
}

/// Damps saturation changes inside a skin-hue window and adds a touch of
/// warmth there.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkinToneProtection {
    #[serde(default)]
    pub enabled: bool,
    /// Center of the protected hue window in turns. Defaults to skin orange.
    pub hue_center: f32,
    /// Half-width of the window in turns.
    pub hue_range: f32,
    /// How strongly in-window saturation deltas are damped, 0..1.
    pub strength: f32,
    /// Small warmth boost applied inside the window, 0..1.
    #[serde(default)]
    pub warmth: f32,
}

impl Default for SkinToneProtection {
    fn default() -> Self {
        Self {
            enabled: false,
            hue_center: 0.05,
            hue_range: 0.06,
            strength: 0.7,
            warmth: 0.02,
        }
    }
}

impl SkinToneProtection {
    pub fn scaled(&self, t: f32) -> Self {
        Self {
            strength: self.strength * t,
            warmth: self.warmth * t,
            ..*self
        }
    }
}

/// Filmic tonal compression (shoulder/linear/toe parameterization).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToneMapping {
    #[serde(default)]
    pub enabled: bool,
    /// Scene value that maps to display white.
    pub white_point: f32,
    pub shoulder_strength: f32,
    pub linear_strength: f32,
    pub toe_strength: f32,
}

impl Default for ToneMapping {
    fn default() -> Self {
        Self {
            enabled: false,
            white_point: 11.2,
            shoulder_strength: 0.15,
            linear_strength: 0.5,
            toe_strength: 0.2,
        }
    }
}

impl ToneMapping {
    /// Blend toward the identity-ish neutral by weakening the curve.
    pub fn scaled(&self, t: f32) -> Self {
        Self {
            shoulder_strength: self.shoulder_strength * t,
            toe_strength: self.toe_strength * t,
            ..*self
        }
    }
}

/// Threshold-driven soft glow, additively composited with a tint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bloom {
    #[serde(default)]
    pub enabled: bool,
    pub intensity: f32,
    /// Luma threshold above which pixels feed the glow, 0..1.
    pub threshold: f32,
    /// Blur sigma in pixels (scaled with resolution by the engine).
    pub radius: f32,
    /// Softness of the threshold knee, 0..1.
    pub softness: f32,
    pub color_tint: [f32; 3],
}

impl Default for Bloom {
    fn default() -> Self {
        Self {
            enabled: false,
            intensity: 0.3,
            threshold: 0.75,
            radius: 12.0,
            softness: 0.2,
            color_tint: [1.0, 1.0, 1.0],
        }
    }
}

impl Bloom {
    pub fn scaled(&self, t: f32) -> Self {
        Self {
            intensity: self.intensity * t,
            ..*self
        }
    }
}

/// Red-orange glow around bright regions, the CineStill look. Distinct from
/// bloom by its inner/outer color gradient and tighter falloff.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Halation {
    #[serde(default)]
    pub enabled: bool,
    pub intensity: f32,
    pub threshold: f32,
    pub radius: f32,
    pub softness: f32,
    /// Tint close to the source highlight.
    pub inner_color: [f32; 3],
    /// Tint at the outer edge of the glow.
    pub outer_color: [f32; 3],
}

impl Default for Halation {
    fn default() -> Self {
        Self {
            enabled: false,
            intensity: 0.4,
            threshold: 0.8,
            radius: 8.0,
            softness: 0.15,
            inner_color: [1.0, 0.35, 0.15],
            outer_color: [0.9, 0.1, 0.05],
        }
    }
}

impl Halation {
    pub fn scaled(&self, t: f32) -> Self {
        Self {
            intensity: self.intensity * t,
            ..*self
        }
    }
}

/// Multiplicative radial falloff toward the corners.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vignette {
    #[serde(default)]
    pub enabled: bool,
    /// Darkening strength, 0..1 (negative lightens).
    pub intensity: f32,
    /// 1.0 = circular (aspect-corrected), 0.0 = follows the frame aspect.
    pub roundness: f32,
    /// Softness of the falloff edge, 0..1.
    pub feather: f32,
    /// Normalized radius where the falloff begins, 0..1.
    pub midpoint: f32,
}

impl Default for Vignette {
    fn default() -> Self {
        Self {
            enabled: false,
            intensity: 0.3,
            roundness: 1.0,
            feather: 0.5,
            midpoint: 0.4,
        }
    }
}

impl Vignette {
    pub fn scaled(&self, t: f32) -> Self {
        Self {
            intensity: self.intensity * t,
            ..*self
        }
    }
}

/// Barrel/pincushion warp with chromatic aberration, followed by a scale
/// crop that hides the exposed edges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LensDistortion {
    #[serde(default)]
    pub enabled: bool,
    /// Primary radial coefficient. Positive = barrel.
    pub k1: f32,
    /// Secondary (edge) radial coefficient.
    pub k2: f32,
    /// Per-channel chromatic aberration strength.
    pub ca_strength: f32,
    /// Post-warp zoom factor >= 1.0 cropping the distorted border.
    pub scale: f32,
}

impl Default for LensDistortion {
    fn default() -> Self {
        Self {
            enabled: false,
            k1: 0.08,
            k2: 0.02,
            ca_strength: 0.0015,
            scale: 1.05,
        }
    }
}

impl LensDistortion {
    pub fn scaled(&self, t: f32) -> Self {
        Self {
            k1: self.k1 * t,
            k2: self.k2 * t,
            ca_strength: self.ca_strength * t,
            scale: 1.0 + (self.scale - 1.0) * t,
            ..*self
        }
    }
}

/// Drop-shadow parameters for the instant frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameShadow {
    pub blur: f32,
    pub opacity: f32,
    /// (dy, dx) offset in pixels.
    pub offset: [f32; 2],
}

impl Default for FrameShadow {
    fn default() -> Self {
        Self {
            blur: 6.0,
            opacity: 0.35,
            offset: [3.0, 0.0],
        }
    }
}

/// Polaroid-style border compositing, applied last and only at full quality.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InstantFrame {
    #[serde(default)]
    pub enabled: bool,
    /// Border widths as fractions of the image long edge:
    /// top, left, right, bottom.
    pub border_widths: [f32; 4],
    pub border_color: [f32; 3],
    /// Texture label resolved by the host application.
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default)]
    pub shadow: FrameShadow,
}

impl Default for InstantFrame {
    fn default() -> Self {
        Self {
            enabled: false,
            border_widths: [0.05, 0.05, 0.05, 0.16],
            border_color: [0.97, 0.96, 0.93],
            texture: None,
            shadow: FrameShadow::default(),
        }
    }
}
