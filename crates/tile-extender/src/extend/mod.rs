//! Appending a tile-high strip below a tilesheet.
//!
//! The source is normalized to RGBA8, copied onto a transparent canvas one
//! tile taller, and a uniform `(0, 0, 0, opacity)` strip is composited over
//! the bottom rows using its own alpha as the mask.

use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgba, RgbaImage};
use tracing::{debug, info};

use crate::compose::{composite, paste, solid};
use crate::normalize::to_rgba;
use crate::options::ExtendOptions;
use crate::{MAX_CANVAS_BYTES, Result, TileExtenderError, codec};

/// Suffix appended to the input stem by [`default_output_path`].
const OUTPUT_SUFFIX: &str = "tilesheet";

/// Dimensions of an extended sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedSize {
    pub width: u32,
    pub height: u32,
}

/// Extend an RGBA buffer by one strip of `options.tile_height()` rows.
pub fn extend_canvas(source: &RgbaImage, options: &ExtendOptions) -> Result<RgbaImage> {
    options.validate()?;

    let (width, height) = source.dimensions();
    let tile_height = options.tile_height();
    let new_height = check_canvas_size(width, height, tile_height)?;

    debug!(
        width,
        height,
        new_height,
        opacity = options.opacity(),
        "Extending canvas"
    );

    let mut canvas = RgbaImage::new(width, new_height);
    paste(&mut canvas, source, 0, 0);

    let filler = solid(width, tile_height, Rgba([0, 0, 0, options.opacity()]));
    composite(&mut canvas, &filler, 0, height);

    Ok(canvas)
}

/// Height of the extended canvas, or `CanvasTooLarge` when the canvas and
/// filler together would exceed [`MAX_CANVAS_BYTES`] or overflow `u32`.
fn check_canvas_size(width: u32, height: u32, tile_height: u32) -> Result<u32> {
    let (w, h, t) = (u64::from(width), u64::from(height), u64::from(tile_height));
    // Canvas plus the filler strip, 4 bytes per pixel.
    let bytes = w
        .saturating_mul(h + t)
        .saturating_add(w.saturating_mul(t))
        .saturating_mul(4);
    let too_large = TileExtenderError::CanvasTooLarge {
        width,
        height,
        tile_height,
        bytes,
        limit: MAX_CANVAS_BYTES,
    };
    if bytes > MAX_CANVAS_BYTES {
        return Err(too_large);
    }
    height.checked_add(tile_height).ok_or(too_large)
}

/// Normalize a decoded image to RGBA8 and extend it.
pub fn extend_image(image: DynamicImage, options: &ExtendOptions) -> Result<RgbaImage> {
    extend_canvas(&to_rgba(image), options)
}

/// Load `input`, extend it, and write the result to `output` as PNG.
///
/// Options are validated before the input is read, and nothing is written
/// unless every earlier step succeeds.
pub fn extend(input: &Path, output: &Path, options: &ExtendOptions) -> Result<ExtendedSize> {
    options.validate()?;

    let source = codec::load(input)?;
    let canvas = extend_image(source, options)?;
    codec::save_png(&canvas, output)?;

    let (width, height) = canvas.dimensions();
    info!(
        input = %input.display(),
        output = %output.display(),
        width,
        height,
        "Extended tilesheet"
    );
    Ok(ExtendedSize { width, height })
}

/// Output path used when none is given: `town.png` becomes
/// `towntilesheet.png` in the same directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.png"))
}
