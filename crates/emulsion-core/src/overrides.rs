//! Runtime per-effect overrides layered on top of an immutable preset.
//!
//! The override layer never mutates the loaded preset; `apply_to_preset`
//! derives a fresh effective preset on every call. Intensity scaling is
//! linear toward each stage's neutral value: 0 leaves the stage fully
//! neutral, 1 leaves the base parameters untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::preset::Preset;

/// Closed set of pipeline effects, in stage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    ColorAdjustments,
    Curves,
    SplitTone,
    SelectiveColor,
    SkinTone,
    ToneMapping,
    Grain,
    Bloom,
    Halation,
    Vignette,
    LensDistortion,
    InstantFrame,
}

impl EffectKind {
    pub const ALL: [EffectKind; 12] = [
        EffectKind::ColorAdjustments,
        EffectKind::Curves,
        EffectKind::SplitTone,
        EffectKind::SelectiveColor,
        EffectKind::SkinTone,
        EffectKind::ToneMapping,
        EffectKind::Grain,
        EffectKind::Bloom,
        EffectKind::Halation,
        EffectKind::Vignette,
        EffectKind::LensDistortion,
        EffectKind::InstantFrame,
    ];

    /// Fixed relative per-pixel cost estimate, used for the performance
    /// indicator and the preview stage-skip policy. Spatial effects
    /// (noise synthesis, blurs, resampling) dominate scalar color work.
    pub fn cost_weight(self) -> f32 {
        match self {
            EffectKind::Grain => 0.30,
            EffectKind::Halation => 0.22,
            EffectKind::Bloom => 0.20,
            EffectKind::LensDistortion => 0.15,
            EffectKind::SelectiveColor => 0.08,
            EffectKind::Curves => 0.06,
            EffectKind::SplitTone => 0.05,
            EffectKind::ToneMapping => 0.05,
            EffectKind::SkinTone => 0.04,
            EffectKind::ColorAdjustments => 0.04,
            EffectKind::Vignette => 0.03,
            EffectKind::InstantFrame => 0.02,
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ColorAdjustments => write!(f, "Color"),
            Self::Curves => write!(f, "Curves"),
            Self::SplitTone => write!(f, "Split Tone"),
            Self::SelectiveColor => write!(f, "Selective Color"),
            Self::SkinTone => write!(f, "Skin Tone"),
            Self::ToneMapping => write!(f, "Tone Mapping"),
            Self::Grain => write!(f, "Grain"),
            Self::Bloom => write!(f, "Bloom"),
            Self::Halation => write!(f, "Halation"),
            Self::Vignette => write!(f, "Vignette"),
            Self::LensDistortion => write!(f, "Lens Distortion"),
            Self::InstantFrame => write!(f, "Instant Frame"),
        }
    }
}

/// Runtime state of one effect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverrideState {
    pub enabled: bool,
    /// Blend toward neutral, clamped to [0,1].
    pub intensity: f32,
}

impl Default for OverrideState {
    fn default() -> Self {
        Self {
            enabled: false,
            intensity: 1.0,
        }
    }
}

/// Advisory device-load classification for the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Per-effect override map for the currently loaded preset.
#[derive(Clone, Debug, Default)]
pub struct EffectOverrides {
    states: BTreeMap<EffectKind, OverrideState>,
}

impl EffectOverrides {
    /// Reset every override from the preset's own enable flags, with
    /// intensity 1.0 (i.e. "as authored").
    pub fn load_preset(&mut self, preset: &Preset) {
        self.states.clear();
        for kind in EffectKind::ALL {
            self.states.insert(
                kind,
                OverrideState {
                    enabled: preset_stage_enabled(preset, kind),
                    intensity: 1.0,
                },
            );
        }
    }

    /// Clamp and store an intensity. Enabled state is untouched.
    pub fn set_intensity(&mut self, kind: EffectKind, value: f32) {
        let entry = self.states.entry(kind).or_default();
        entry.intensity = value.clamp(0.0, 1.0);
    }

    /// Flip the enabled flag without altering intensity.
    pub fn toggle(&mut self, kind: EffectKind) {
        let entry = self.states.entry(kind).or_default();
        entry.enabled = !entry.enabled;
    }

    /// Force the enabled flag, leaving intensity alone. Unlike [`toggle`],
    /// this is idempotent: disabling an already-disabled effect stays a
    /// no-op.
    ///
    /// [`toggle`]: Self::toggle
    pub fn set_enabled(&mut self, kind: EffectKind, enabled: bool) {
        let entry = self.states.entry(kind).or_default();
        entry.enabled = enabled;
    }

    pub fn state(&self, kind: EffectKind) -> OverrideState {
        self.states.get(&kind).copied().unwrap_or_default()
    }

    /// True if any override deviates from what `load_preset` would set.
    pub fn is_modified(&self, preset: &Preset) -> bool {
        EffectKind::ALL.iter().any(|&kind| {
            let s = self.state(kind);
            s.enabled != preset_stage_enabled(preset, kind) || s.intensity < 1.0
        })
    }

    /// Derive the effective preset: each stage enable-gated by its override
    /// and scaled toward neutral by its intensity. Returns `None` when no
    /// override deviates from the base preset, letting callers render the
    /// base directly.
    pub fn apply_to_preset(&self, base: &Preset) -> Option<Preset> {
        if !self.is_modified(base) {
            return None;
        }

        let mut p = base.clone();

        let s = self.state(EffectKind::ColorAdjustments);
        p.adjustments = if s.enabled {
            base.adjustments.scaled(s.intensity)
        } else {
            Default::default()
        };

        let s = self.state(EffectKind::Curves);
        p.curves = if s.enabled {
            base.curves.scaled(s.intensity)
        } else {
            Default::default()
        };

        let s = self.state(EffectKind::SplitTone);
        p.split_tone = base.split_tone.scaled(s.intensity);
        p.split_tone.enabled = s.enabled && s.intensity > 0.0;

        let s = self.state(EffectKind::SelectiveColor);
        p.selective_colors = if s.enabled && s.intensity > 0.0 {
            base.selective_colors
                .iter()
                .map(|a| a.scaled(s.intensity))
                .collect()
        } else {
            Vec::new()
        };

        let s = self.state(EffectKind::SkinTone);
        p.skin_tone = base.skin_tone.scaled(s.intensity);
        p.skin_tone.enabled = s.enabled && s.intensity > 0.0;

        let s = self.state(EffectKind::ToneMapping);
        p.tone_mapping = base.tone_mapping.scaled(s.intensity);
        p.tone_mapping.enabled = s.enabled && s.intensity > 0.0;

        let s = self.state(EffectKind::Grain);
        p.grain = base.grain.scaled(s.intensity);
        p.grain.enabled = s.enabled && s.intensity > 0.0;

        let s = self.state(EffectKind::Bloom);
        p.bloom = base.bloom.scaled(s.intensity);
        p.bloom.enabled = s.enabled && s.intensity > 0.0;

        let s = self.state(EffectKind::Halation);
        p.halation = base.halation.scaled(s.intensity);
        p.halation.enabled = s.enabled && s.intensity > 0.0;

        let s = self.state(EffectKind::Vignette);
        p.vignette = base.vignette.scaled(s.intensity);
        p.vignette.enabled = s.enabled && s.intensity > 0.0;

        let s = self.state(EffectKind::LensDistortion);
        p.lens_distortion = base.lens_distortion.scaled(s.intensity);
        p.lens_distortion.enabled = s.enabled && s.intensity > 0.0;

        let s = self.state(EffectKind::InstantFrame);
        p.frame = base.frame.clone();
        p.frame.enabled = s.enabled && s.intensity > 0.0;

        Some(p)
    }

    /// Aggregate device cost of the enabled, non-zero effects, in [0,1].
    /// Advisory only; never used to silently disable anything.
    pub fn performance_score(&self) -> f32 {
        let total: f32 = EffectKind::ALL.iter().map(|k| k.cost_weight()).sum();
        let active: f32 = EffectKind::ALL
            .iter()
            .filter(|&&k| {
                let s = self.state(k);
                s.enabled && s.intensity > 0.0
            })
            .map(|k| k.cost_weight())
            .sum();
        (active / total).clamp(0.0, 1.0)
    }

    pub fn performance_level(&self) -> PerformanceLevel {
        let score = self.performance_score();
        if score < 0.35 {
            PerformanceLevel::Low
        } else if score < 0.7 {
            PerformanceLevel::Medium
        } else {
            PerformanceLevel::High
        }
    }
}

/// Whether a preset's own configuration enables a stage. Adjustments,
/// curves and selective color have no flag; they count as enabled when
/// non-neutral.
pub fn preset_stage_enabled(preset: &Preset, kind: EffectKind) -> bool {
    match kind {
        EffectKind::ColorAdjustments => !preset.adjustments.is_neutral(),
        EffectKind::Curves => !preset.curves.is_identity(),
        EffectKind::SplitTone => preset.split_tone.enabled,
        EffectKind::SelectiveColor => !preset.selective_colors.is_empty(),
        EffectKind::SkinTone => preset.skin_tone.enabled,
        EffectKind::ToneMapping => preset.tone_mapping.enabled,
        EffectKind::Grain => preset.grain.enabled,
        EffectKind::Bloom => preset.bloom.enabled,
        EffectKind::Halation => preset.halation.enabled,
        EffectKind::Vignette => preset.vignette.enabled,
        EffectKind::LensDistortion => preset.lens_distortion.enabled,
        EffectKind::InstantFrame => preset.frame.enabled,
    }
}
