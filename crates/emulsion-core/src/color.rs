//! RGB/HSL conversions used by the hue-band stages.

use crate::consts::{EPSILON, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};

/// HSL color. H in [0,1) turns, S and L in [0,1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// BT.601 luma of one pixel.
#[inline]
pub fn luma(r: f32, g: f32, b: f32) -> f32 {
    LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b
}

#[inline]
pub fn rgb_to_hsl(r: f32, g: f32, b: f32) -> Hsl {
    let r = r.clamp(0.0, 1.0);
    let g = g.clamp(0.0, 1.0);
    let b = b.clamp(0.0, 1.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta < EPSILON {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let h = if (max - r).abs() < EPSILON {
        let mut h = (g - b) / delta;
        if g < b {
            h += 6.0;
        }
        h
    } else if (max - g).abs() < EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl {
        h: (h / 6.0).rem_euclid(1.0),
        s,
        l,
    }
}

#[inline]
pub fn hsl_to_rgb(hsl: Hsl) -> (f32, f32, f32) {
    let Hsl { h, s, l } = hsl;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s < EPSILON {
        return (l, l, l);
    }

    let h = h.rem_euclid(1.0);
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Shortest signed hue distance between two hues in turns, in [-0.5, 0.5).
#[inline]
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(1.0);
    if d >= 0.5 {
        d - 1.0
    } else {
        d
    }
}

/// Smoothstep falloff for hue-band membership: 1 at the band center,
/// 0 at or beyond `range` from it.
#[inline]
pub fn hue_band_weight(hue: f32, center: f32, range: f32) -> f32 {
    if range <= 0.0 {
        return 0.0;
    }
    let d = hue_distance(hue, center).abs();
    if d >= range {
        return 0.0;
    }
    let t = 1.0 - d / range;
    t * t * (3.0 - 2.0 * t)
}
