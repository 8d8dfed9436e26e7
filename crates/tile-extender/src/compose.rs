//! Image composition utilities: paste, source-over composite, solid fills.

use image::{Rgba, RgbaImage, imageops};

/// Blend `src` over `dst` with `mask` as the effective source alpha.
///
/// Straight (non-premultiplied) source-over in 8-bit integer arithmetic:
/// `a = m + a_d * (1 - m)` and `c = (c_s * m + c_d * a_d * (1 - m)) / a`.
/// Over a fully transparent destination the result is exactly `src` with
/// alpha `mask`. A zero mask returns `dst` unchanged.
pub fn blend_source_over(dst: Rgba<u8>, src: Rgba<u8>, mask: u8) -> Rgba<u8> {
    if mask == 0 {
        return dst;
    }

    let m = u32::from(mask);
    // Destination weight scaled by 255.
    let dst_w = u32::from(dst[3]) * (255 - m);
    let total = m * 255 + dst_w;

    let channel = |i: usize| -> u8 {
        let c = u32::from(src[i]) * m * 255 + u32::from(dst[i]) * dst_w;
        ((c + total / 2) / total) as u8
    };

    Rgba([channel(0), channel(1), channel(2), ((total + 127) / 255) as u8])
}

/// Copy `top` into `base` at the given position, replacing pixels outright.
///
/// Portions of `top` outside `base` are clipped.
pub fn paste(base: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    imageops::replace(base, top, i64::from(x), i64::from(y));
}

/// Composite `top` onto `base` at the given position.
///
/// Each pixel of `top` is blended source-over using its own alpha as the
/// mask. Portions of `top` outside `base` are clipped.
pub fn composite(base: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    let (width, height) = base.dimensions();
    for (dx, dy, pixel) in top.enumerate_pixels() {
        let target_x = x.saturating_add(dx);
        let target_y = y.saturating_add(dy);
        if target_x < width && target_y < height {
            let bg = base.get_pixel_mut(target_x, target_y);
            *bg = blend_source_over(*bg, *pixel, pixel[3]);
        }
    }
}

/// A `width` x `height` buffer filled with `color`.
pub fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}
