//! Grain configuration: procedural noise, per-channel response, density
//! curve, clumping and temporal behavior.

use serde::{Deserialize, Serialize};

/// Procedural noise family used for grain synthesis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    #[default]
    Value,
    /// fBm stack of value noise octaves.
    Fractal,
}

/// Multi-octave noise descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrainNoise {
    #[serde(default)]
    pub kind: NoiseKind,
    pub octaves: u32,
    /// Amplitude falloff per octave.
    pub persistence: f32,
    /// Frequency growth per octave.
    pub lacunarity: f32,
    /// Base spatial frequency in cycles per pixel.
    pub base_frequency: f32,
}

impl Default for GrainNoise {
    fn default() -> Self {
        Self {
            kind: NoiseKind::Value,
            octaves: 3,
            persistence: 0.55,
            lacunarity: 2.0,
            base_frequency: 0.45,
        }
    }
}

/// One channel's grain response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrainChannel {
    /// Non-negative channel intensity multiplier.
    pub intensity: f32,
    /// Grain size in pixels; larger = coarser.
    pub size: f32,
    pub seed: u32,
    /// 0 = hard grain, 1 = fully softened.
    pub softness: f32,
}

impl Default for GrainChannel {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            size: 1.6,
            seed: 0,
            softness: 0.3,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GrainChannels {
    pub red: GrainChannel,
    pub green: GrainChannel,
    pub blue: GrainChannel,
}

/// Luminance -> intensity multiplier control point, ordered by `luma`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    pub luma: f32,
    pub multiplier: f32,
}

/// Spatial clumping: a low-frequency mask modulating grain amplitude so
/// grains gather instead of spreading uniformly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClumpParams {
    /// 0 disables clumping.
    pub strength: f32,
    /// Clump cell size in pixels.
    pub scale: f32,
}

impl Default for ClumpParams {
    fn default() -> Self {
        Self {
            strength: 0.0,
            scale: 24.0,
        }
    }
}

/// Temporal refresh for video: the effective seed advances once per
/// `refresh_every` frames so still frames stay bit-stable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemporalGrain {
    #[serde(default)]
    pub enabled: bool,
    pub refresh_every: u32,
}

impl Default for TemporalGrain {
    fn default() -> Self {
        Self {
            enabled: false,
            refresh_every: 1,
        }
    }
}

/// Compound grain stage configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grain {
    #[serde(default)]
    pub enabled: bool,
    /// Non-negative master intensity.
    pub global_intensity: f32,
    #[serde(default)]
    pub channels: GrainChannels,
    #[serde(default)]
    pub noise: GrainNoise,
    /// Luma response curve, ordered by `luma`. Empty = flat midtone-weighted
    /// default response.
    #[serde(default)]
    pub density_curve: Vec<DensityPoint>,
    /// Per-channel chromatic pixel shift (in pixels) applied to the noise
    /// sample position.
    #[serde(default)]
    pub chroma_shift: [f32; 3],
    #[serde(default)]
    pub clump: ClumpParams,
    #[serde(default)]
    pub temporal: TemporalGrain,
    /// Optional per-pixel color jitter amplitude, 0..1.
    #[serde(default)]
    pub color_jitter: f32,
}

impl Default for Grain {
    fn default() -> Self {
        Self {
            enabled: false,
            global_intensity: 0.25,
            channels: GrainChannels::default(),
            noise: GrainNoise::default(),
            density_curve: Vec::new(),
            chroma_shift: [0.0, 0.0, 0.0],
            clump: ClumpParams::default(),
            temporal: TemporalGrain::default(),
            color_jitter: 0.0,
        }
    }
}

impl Grain {
    pub fn scaled(&self, t: f32) -> Self {
        Self {
            global_intensity: (self.global_intensity * t).max(0.0),
            color_jitter: self.color_jitter * t,
            ..self.clone()
        }
    }

    /// Evaluate the density curve at a luma value. Points are sorted
    /// defensively; an empty curve yields the classic midtone-weighted mask.
    pub fn density_at(&self, luma: f32) -> f32 {
        let luma = luma.clamp(0.0, 1.0);
        if self.density_curve.is_empty() {
            // Peaks at mid-gray, fades in deep shadows and highlights.
            return 0.3 + 0.7 * (4.0 * luma * (1.0 - luma));
        }
        let mut pts = self.density_curve.clone();
        pts.sort_by(|a, b| a.luma.total_cmp(&b.luma));
        if luma <= pts[0].luma {
            return pts[0].multiplier.max(0.0);
        }
        if luma >= pts[pts.len() - 1].luma {
            return pts[pts.len() - 1].multiplier.max(0.0);
        }
        for pair in pts.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if luma <= b.luma {
                let span = b.luma - a.luma;
                if span < 1e-6 {
                    return b.multiplier.max(0.0);
                }
                let t = (luma - a.luma) / span;
                return (a.multiplier + (b.multiplier - a.multiplier) * t).max(0.0);
            }
        }
        pts[pts.len() - 1].multiplier.max(0.0)
    }
}
