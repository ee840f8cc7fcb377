//! Stage 2: per-channel RGB tone curves.

use crate::frame::Image;
use crate::preset::curves::{build_lut, sample_lut};
use crate::preset::Curves;

pub fn apply(image: &mut Image, curves: &Curves) {
    if curves.is_identity() {
        return;
    }

    let lut_r = build_lut(&curves.red);
    let lut_g = build_lut(&curves.green);
    let lut_b = build_lut(&curves.blue);

    image.red.mapv_inplace(|v| sample_lut(&lut_r, v));
    image.green.mapv_inplace(|v| sample_lut(&lut_g, v));
    image.blue.mapv_inplace(|v| sample_lut(&lut_b, v));
}
