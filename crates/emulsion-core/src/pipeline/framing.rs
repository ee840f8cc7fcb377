//! Stage 12: instant-frame compositing. Full tier only.
//!
//! Expands the canvas by the border widths, paints the border color, draws
//! the photo's drop shadow, then places the photo on top.

use ndarray::{s, Array2};

use crate::filters::gaussian_blur::gaussian_blur;
use crate::frame::Image;
use crate::preset::InstantFrame;

pub fn apply(image: &mut Image, frame: &InstantFrame) {
    if !frame.enabled {
        return;
    }

    let (h, w) = (image.height(), image.width());
    let long_edge = h.max(w) as f32;
    let px = |fraction: f32| (fraction.max(0.0) * long_edge).round() as usize;

    let [top_f, left_f, right_f, bottom_f] = frame.border_widths;
    let (top, left, right, bottom) = (px(top_f), px(left_f), px(right_f), px(bottom_f));
    if top + left + right + bottom == 0 {
        return;
    }

    let nh = h + top + bottom;
    let nw = w + left + right;

    // Shadow mask: the photo rectangle, offset and blurred.
    let shadow = &frame.shadow;
    let mut shadow_mask = Array2::<f32>::zeros((nh, nw));
    if shadow.opacity > 0.0 {
        let oy = top as isize + shadow.offset[0].round() as isize;
        let ox = left as isize + shadow.offset[1].round() as isize;
        for y in 0..h {
            for x in 0..w {
                let sy = oy + y as isize;
                let sx = ox + x as isize;
                if sy >= 0 && (sy as usize) < nh && sx >= 0 && (sx as usize) < nw {
                    shadow_mask[[sy as usize, sx as usize]] = 1.0;
                }
            }
        }
        if shadow.blur > 0.0 {
            shadow_mask = gaussian_blur(&shadow_mask, shadow.blur);
        }
    }

    let composite = |src: &Array2<f32>, border_value: f32| -> Array2<f32> {
        let mut canvas = Array2::from_elem((nh, nw), border_value);
        // Darken the border under the shadow mask.
        if shadow.opacity > 0.0 {
            canvas.zip_mut_with(&shadow_mask, |v, &m| {
                *v *= 1.0 - shadow.opacity * m;
            });
        }
        canvas
            .slice_mut(s![top..top + h, left..left + w])
            .assign(src);
        canvas
    };

    image.red = composite(&image.red, frame.border_color[0]);
    image.green = composite(&image.green, frame.border_color[1]);
    image.blue = composite(&image.blue, frame.border_color[2]);
}
