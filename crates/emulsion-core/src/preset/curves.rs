use serde::{Deserialize, Serialize};

/// One control point of a tone curve. Both coordinates live in [0,1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub input: f32,
    pub output: f32,
}

impl CurvePoint {
    pub fn new(input: f32, output: f32) -> Self {
        Self { input, output }
    }
}

/// Per-channel RGB tone curves. Points are conceptually sorted by `input`,
/// but nothing enforces that at construction; evaluation sorts on use.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Curves {
    #[serde(default)]
    pub red: Vec<CurvePoint>,
    #[serde(default)]
    pub green: Vec<CurvePoint>,
    #[serde(default)]
    pub blue: Vec<CurvePoint>,
}

impl Curves {
    /// True when every channel is an identity curve (empty, or a straight
    /// 0->0, 1->1 pair).
    pub fn is_identity(&self) -> bool {
        channel_is_identity(&self.red)
            && channel_is_identity(&self.green)
            && channel_is_identity(&self.blue)
    }

    /// Scale all outputs toward the identity line: 0 -> identity, 1 -> unscaled.
    pub fn scaled(&self, t: f32) -> Self {
        let scale = |pts: &[CurvePoint]| {
            pts.iter()
                .map(|p| CurvePoint::new(p.input, p.input + (p.output - p.input) * t))
                .collect()
        };
        Self {
            red: scale(&self.red),
            green: scale(&self.green),
            blue: scale(&self.blue),
        }
    }
}

fn channel_is_identity(points: &[CurvePoint]) -> bool {
    match points.len() {
        0 => true,
        2 => {
            points
                .iter()
                .all(|p| (p.output - p.input).abs() < 1e-6)
                && points.iter().any(|p| p.input < 1e-6)
                && points.iter().any(|p| p.input > 1.0 - 1e-6)
        }
        _ => points.iter().all(|p| (p.output - p.input).abs() < 1e-6),
    }
}

/// Evaluate a tone curve at `x` by piecewise-linear interpolation.
///
/// Input points are sorted defensively; coordinates outside [0,1] are
/// clamped. An empty point list is the identity.
pub fn evaluate(points: &[CurvePoint], x: f32) -> f32 {
    if points.is_empty() {
        return x.clamp(0.0, 1.0);
    }

    let mut sorted: Vec<CurvePoint> = points
        .iter()
        .map(|p| CurvePoint::new(p.input.clamp(0.0, 1.0), p.output.clamp(0.0, 1.0)))
        .collect();
    sorted.sort_by(|a, b| a.input.total_cmp(&b.input));

    let x = x.clamp(0.0, 1.0);
    if x <= sorted[0].input {
        return sorted[0].output;
    }
    if x >= sorted[sorted.len() - 1].input {
        return sorted[sorted.len() - 1].output;
    }

    for pair in sorted.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if x <= b.input {
            let span = b.input - a.input;
            if span < 1e-6 {
                return b.output;
            }
            let t = (x - a.input) / span;
            return (a.output + (b.output - a.output) * t).clamp(0.0, 1.0);
        }
    }
    sorted[sorted.len() - 1].output
}

/// Precomputed 256-entry LUT for a curve channel, for per-pixel use.
pub fn build_lut(points: &[CurvePoint]) -> [f32; 256] {
    let mut lut = [0.0f32; 256];
    for (i, slot) in lut.iter_mut().enumerate() {
        *slot = evaluate(points, i as f32 / 255.0);
    }
    lut
}

/// Sample a LUT built by [`build_lut`] with linear interpolation between bins.
#[inline]
pub fn sample_lut(lut: &[f32; 256], x: f32) -> f32 {
    let pos = x.clamp(0.0, 1.0) * 255.0;
    let i = pos.floor() as usize;
    let j = (i + 1).min(255);
    let frac = pos - i as f32;
    lut[i] + (lut[j] - lut[i]) * frac
}
