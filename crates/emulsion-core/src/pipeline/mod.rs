//! The rendering pipeline: a fixed, preset-independent sequence of stages
//! mapping (image, effective preset, tier) to an image.

pub mod adjustments;
pub mod curves_stage;
pub mod distortion;
pub mod engine;
pub mod framing;
pub mod glow;
pub mod grain_stage;
pub mod selective;
pub mod split_tone;
pub mod tone_map;
pub mod vignette;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::consts::DEFAULT_PREVIEW_MAX_DIMENSION;
use crate::overrides::EffectKind;

pub use engine::{render, render_with, RenderContext};

/// Quality tier of one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    /// Reduced stage subset at a capped working resolution.
    Preview,
    /// Every applicable stage at source resolution.
    Full,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preview => write!(f, "preview"),
            Self::Full => write!(f, "full"),
        }
    }
}

/// Tunable policy for what the preview tier executes.
///
/// The stage subset is intentionally not a fixed contract: a stage runs in
/// preview only when its cost weight is at or below `max_stage_cost`.
/// The instant frame never runs in preview regardless of cost.
#[derive(Clone, Debug)]
pub struct PreviewPolicy {
    /// Long-edge cap for the preview working buffer, in pixels.
    pub max_dimension: usize,
    /// Highest per-effect cost weight still executed in preview.
    pub max_stage_cost: f32,
}

impl Default for PreviewPolicy {
    fn default() -> Self {
        // Default keeps all scalar color work and the vignette; grain,
        // bloom, halation and lens distortion wait for the full render.
        Self {
            max_dimension: DEFAULT_PREVIEW_MAX_DIMENSION,
            max_stage_cost: 0.1,
        }
    }
}

impl PreviewPolicy {
    /// Whether `kind` executes at the given tier under this policy.
    pub fn stage_runs(&self, kind: EffectKind, tier: Tier) -> bool {
        match tier {
            Tier::Full => true,
            Tier::Preview => {
                kind != EffectKind::InstantFrame && kind.cost_weight() <= self.max_stage_cost
            }
        }
    }
}

/// Cooperative cancellation flag shared between the scheduler and a render
/// task. Cancelled renders resolve silently with no result.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// Pipeline stage identifiers in execution order, used for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Adjustments,
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

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Adjustments => write!(f, "Color adjustments"),
            Self::Curves => write!(f, "Tone curves"),
            Self::SplitTone => write!(f, "Split tone"),
            Self::SelectiveColor => write!(f, "Selective color"),
            Self::SkinTone => write!(f, "Skin tone protection"),
            Self::ToneMapping => write!(f, "Tone mapping"),
            Self::Grain => write!(f, "Grain"),
            Self::Bloom => write!(f, "Bloom"),
            Self::Halation => write!(f, "Halation"),
            Self::Vignette => write!(f, "Vignette"),
            Self::LensDistortion => write!(f, "Lens distortion"),
            Self::InstantFrame => write!(f, "Instant frame"),
        }
    }
}
