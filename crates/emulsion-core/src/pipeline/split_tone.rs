//! Stage 3: split toning of shadow and highlight luminance bands.

use crate::color::{hsl_to_rgb, luma, Hsl};
use crate::frame::Image;
use crate::preset::SplitTone;

pub fn apply(image: &mut Image, tone: &SplitTone) {
    if !tone.enabled
        || (tone.shadows_saturation <= 0.0 && tone.highlights_saturation <= 0.0)
    {
        return;
    }

    let balance = tone.balance.clamp(0.05, 0.95);
    let (sr, sg, sb) = hsl_to_rgb(Hsl {
        h: tone.shadows_hue,
        s: 1.0,
        l: 0.5,
    });
    let (hr, hg, hb) = hsl_to_rgb(Hsl {
        h: tone.highlights_hue,
        s: 1.0,
        l: 0.5,
    });

    image.map_pixels(|r, g, b| {
        let y = luma(r, g, b).clamp(0.0, 1.0);

        // Band weights pivot at `balance`; midtone protection carves out
        // the region around the pivot.
        let shadow_w = smoothstep(balance, 0.0, y) * tone.shadows_saturation;
        let highlight_w = smoothstep(balance, 1.0, y) * tone.highlights_saturation;
        let protection = 1.0 - tone.midtone_protection * (1.0 - (2.0 * y - 1.0).abs());

        let sw = shadow_w * protection * 0.5;
        let hw = highlight_w * protection * 0.5;

        let r = r + (sr - 0.5) * sw + (hr - 0.5) * hw;
        let g = g + (sg - 0.5) * sw + (hg - 0.5) * hw;
        let b = b + (sb - 0.5) * sw + (hb - 0.5) * hw;
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    });
}

/// Smoothstep from `edge0` to `edge1`; edges may be in either order.
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
