//! Stage 6: filmic tonal compression.
//!
//! Rational shoulder/linear/toe curve in the Hable style, normalized so the
//! configured white point maps to 1.0. Runs after the basic adjustments by
//! pipeline order; both may be enabled together.

use crate::frame::Image;
use crate::preset::ToneMapping;

/// Fixed secondary constants of the rational curve. Only the shoulder,
/// linear and toe strengths plus the white point are preset-controlled.
const LINEAR_ANGLE: f32 = 0.10;
const TOE_NUMERATOR: f32 = 0.02;
const TOE_DENOMINATOR: f32 = 0.30;

fn curve(x: f32, m: &ToneMapping) -> f32 {
    let a = m.shoulder_strength.max(1e-3);
    let b = m.linear_strength.max(1e-3);
    let c = LINEAR_ANGLE;
    let d = m.toe_strength.max(1e-3);
    let e = TOE_NUMERATOR;
    let f = TOE_DENOMINATOR;
    ((x * (a * x + c * b) + d * e) / (x * (a * x + b) + d * f)) - e / f
}

pub fn apply(image: &mut Image, mapping: &ToneMapping) {
    if !mapping.enabled {
        return;
    }

    let white = curve(mapping.white_point.max(1e-3), mapping);
    if white <= 0.0 {
        return;
    }
    let norm = 1.0 / white;

    for plane in [&mut image.red, &mut image.green, &mut image.blue] {
        plane.mapv_inplace(|v| (curve(v.max(0.0), mapping) * norm).clamp(0.0, 1.0));
    }
}
