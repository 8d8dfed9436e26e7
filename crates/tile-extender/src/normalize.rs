//! Pixel encoding normalization.

use image::{DynamicImage, RgbaImage};
use tracing::debug;

/// Whether `img` is stored as anything other than 8-bit RGBA.
pub fn needs_conversion(img: &DynamicImage) -> bool {
    !matches!(img, DynamicImage::ImageRgba8(_))
}

/// Convert any decoded image into an 8-bit RGBA buffer.
///
/// RGBA8 input is unwrapped without copying. Encodings without alpha gain a
/// fully opaque alpha channel; wider channels are scaled down to 8 bits.
pub fn to_rgba(img: DynamicImage) -> RgbaImage {
    if needs_conversion(&img) {
        debug!(
            color = ?img.color(),
            width = img.width(),
            height = img.height(),
            "Converting image to RGBA8"
        );
    }
    img.into_rgba8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, ImageBuffer, Luma, LumaA, Rgb, RgbImage, Rgba};

    #[test]
    fn test_rgba_passthrough() {
        let src = RgbaImage::from_pixel(3, 2, Rgba([9, 8, 7, 6]));
        let img = DynamicImage::ImageRgba8(src.clone());
        assert!(!needs_conversion(&img));
        assert_eq!(to_rgba(img), src);
    }

    #[test]
    fn test_rgb_gains_opaque_alpha() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([1, 2, 3])));
        assert!(needs_conversion(&img));
        let out = to_rgba(img);
        assert_eq!(out.dimensions(), (4, 4));
        assert!(out.pixels().all(|p| *p == Rgba([1, 2, 3, 255])));
    }

    #[test]
    fn test_grayscale_promoted() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([77])));
        let out = to_rgba(img);
        assert!(out.pixels().all(|p| *p == Rgba([77, 77, 77, 255])));
    }

    #[test]
    fn test_grayscale_alpha_keeps_alpha() {
        let img = DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(2, 2, LumaA([10, 20])));
        let out = to_rgba(img);
        assert!(out.pixels().all(|p| *p == Rgba([10, 10, 10, 20])));
    }

    #[test]
    fn test_sixteen_bit_scaled_down() {
        let buf: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(1, 1, Rgb([65535, 0, 65535]));
        let out = to_rgba(DynamicImage::ImageRgb16(buf));
        assert_eq!(*out.get_pixel(0, 0), Rgba([255, 0, 255, 255]));
    }
}
