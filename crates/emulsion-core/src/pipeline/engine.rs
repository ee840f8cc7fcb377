//! Pipeline entry points.
//!
//! `render_with` is pure and owns no shared state; it may be called from
//! any number of tasks concurrently. Each stage is gated three ways: the
//! effective preset must enable it, the tier policy must include it, and
//! the cancellation token is consulted between stages.

use tracing::{debug, info};

use crate::error::{EmulsionError, Result};
use crate::frame::Image;
use crate::overrides::{preset_stage_enabled, EffectKind};
use crate::preset::Preset;

use super::{
    adjustments, curves_stage, distortion, framing, glow, grain_stage, selective, split_tone,
    tone_map, vignette, CancelToken, PipelineStage, PreviewPolicy, Tier,
};

/// Per-render options beyond the tier.
#[derive(Clone, Debug, Default)]
pub struct RenderContext {
    pub policy: PreviewPolicy,
    /// Frame counter for temporal grain; stills pass 0.
    pub frame_counter: u64,
    pub cancel: Option<CancelToken>,
}

impl RenderContext {
    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|c| c.is_cancelled())
    }
}

/// Render with default options (no cancellation, frame 0).
pub fn render(image: &Image, preset: &Preset, tier: Tier) -> Result<Option<Image>> {
    render_with(image, preset, tier, &RenderContext::default())
}

/// Apply the full stage chain. Returns `Ok(None)` when cancelled; callers
/// fall back to the untouched source on a `None` result.
pub fn render_with(
    image: &Image,
    preset: &Preset,
    tier: Tier,
    ctx: &RenderContext,
) -> Result<Option<Image>> {
    validate(image)?;
    if ctx.is_cancelled() {
        return Ok(None);
    }

    let mut work = match tier {
        Tier::Preview => image.resize_to_fit(ctx.policy.max_dimension),
        Tier::Full => image.clone(),
    };

    // Blur radii and similar pixel-space parameters are authored for a
    // ~1000 px long edge and scale with the working resolution.
    let scale = work.height().max(work.width()) as f32 / 1000.0;
    let frame_counter = ctx.frame_counter;

    // Fixed stage order; later stages must see the tonal result of
    // earlier ones, and the glow/frame stages need final color.
    let stages: [(PipelineStage, EffectKind, StageFn<'_>); 12] = [
        (PipelineStage::Adjustments, EffectKind::ColorAdjustments, &|img, p| {
            adjustments::apply(img, &p.adjustments, scale)
        }),
        (PipelineStage::Curves, EffectKind::Curves, &|img, p| {
            curves_stage::apply(img, &p.curves)
        }),
        (PipelineStage::SplitTone, EffectKind::SplitTone, &|img, p| {
            split_tone::apply(img, &p.split_tone)
        }),
        (PipelineStage::SelectiveColor, EffectKind::SelectiveColor, &|img, p| {
            selective::apply(img, &p.selective_colors, Some(&p.skin_tone))
        }),
        (PipelineStage::SkinTone, EffectKind::SkinTone, &|img, p| {
            selective::apply_skin_warmth(img, &p.skin_tone)
        }),
        (PipelineStage::ToneMapping, EffectKind::ToneMapping, &|img, p| {
            tone_map::apply(img, &p.tone_mapping)
        }),
        (PipelineStage::Grain, EffectKind::Grain, &|img, p| {
            grain_stage::apply(img, &p.grain, frame_counter)
        }),
        (PipelineStage::Bloom, EffectKind::Bloom, &|img, p| {
            glow::apply_bloom(img, &p.bloom, scale)
        }),
        (PipelineStage::Halation, EffectKind::Halation, &|img, p| {
            glow::apply_halation(img, &p.halation, scale)
        }),
        (PipelineStage::Vignette, EffectKind::Vignette, &|img, p| {
            vignette::apply(img, &p.vignette)
        }),
        (PipelineStage::LensDistortion, EffectKind::LensDistortion, &|img, p| {
            distortion::apply(img, &p.lens_distortion)
        }),
        (PipelineStage::InstantFrame, EffectKind::InstantFrame, &|img, p| {
            framing::apply(img, &p.frame)
        }),
    ];

    for (stage, kind, run) in stages {
        if ctx.is_cancelled() {
            debug!(%stage, "render cancelled");
            return Ok(None);
        }
        if !preset_stage_enabled(preset, kind) || !ctx.policy.stage_runs(kind, tier) {
            continue;
        }
        debug!(%stage, %tier, "applying stage");
        run(&mut work, preset);
    }

    if ctx.is_cancelled() {
        return Ok(None);
    }

    info!(
        preset = %preset.id,
        %tier,
        width = work.width(),
        height = work.height(),
        "render complete"
    );
    Ok(Some(work))
}

type StageFn<'a> = &'a (dyn Fn(&mut Image, &Preset) + Sync);

fn validate(image: &Image) -> Result<()> {
    if image.red.dim() != image.green.dim() || image.red.dim() != image.blue.dim() {
        return Err(EmulsionError::MismatchedPlanes);
    }
    let (h, w) = image.red.dim();
    if h == 0 || w == 0 {
        return Err(EmulsionError::InvalidDimensions {
            width: w,
            height: h,
        });
    }
    Ok(())
}
