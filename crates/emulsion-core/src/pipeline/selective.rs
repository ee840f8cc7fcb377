//! Stages 4 and 5: selective color adjustments and skin-tone protection.
//!
//! Selective adjustments are applied cumulatively in sequence order, each
//! weighted by a smooth hue-band falloff. Skin-tone protection damps the
//! saturation deltas of those adjustments inside its hue window, so skin
//! survives spillover from aggressive band edits.

use crate::color::{hsl_to_rgb, hue_band_weight, rgb_to_hsl};
use crate::consts::MAX_SELECTIVE_COLORS;
use crate::frame::Image;
use crate::preset::{SelectiveColorAdjustment, SkinToneProtection};

pub fn apply(
    image: &mut Image,
    adjustments: &[SelectiveColorAdjustment],
    skin: Option<&SkinToneProtection>,
) {
    if adjustments.is_empty() {
        return;
    }
    let adjustments = &adjustments[..adjustments.len().min(MAX_SELECTIVE_COLORS)];
    let skin = skin.filter(|s| s.enabled);

    image.map_pixels(|r, g, b| {
        let mut hsl = rgb_to_hsl(r, g, b);
        if hsl.s < 1e-4 {
            return (r, g, b);
        }

        // The protection window is anchored at the pixel's original hue.
        let skin_damp = skin
            .map(|s| 1.0 - s.strength * hue_band_weight(hsl.h, s.hue_center, s.hue_range))
            .unwrap_or(1.0);

        for adj in adjustments {
            let w = hue_band_weight(hsl.h, adj.hue, adj.range);
            if w <= 0.0 {
                continue;
            }
            hsl.h = (hsl.h + adj.hue_shift * w).rem_euclid(1.0);
            hsl.s = (hsl.s + adj.saturation * w * skin_damp).clamp(0.0, 1.0);
            hsl.l = (hsl.l + adj.luminance * w * 0.5).clamp(0.0, 1.0);
        }

        hsl_to_rgb(hsl)
    });
}

/// The warmth half of skin-tone protection: a small red/green boost inside
/// the protected window. Runs even when no selective adjustment exists.
pub fn apply_skin_warmth(image: &mut Image, skin: &SkinToneProtection) {
    if !skin.enabled || skin.warmth <= 0.0 {
        return;
    }

    image.map_pixels(|r, g, b| {
        let hsl = rgb_to_hsl(r, g, b);
        let w = hue_band_weight(hsl.h, skin.hue_center, skin.hue_range);
        if w <= 0.0 {
            return (r, g, b);
        }
        let boost = skin.warmth * w;
        (
            (r + boost).clamp(0.0, 1.0),
            (g + boost * 0.4).clamp(0.0, 1.0),
            b,
        )
    });
}
