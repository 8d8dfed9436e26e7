//! Reading source images and writing PNG output.

use std::io::Cursor;
use std::path::Path;

use image::error::UnsupportedErrorKind;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader, RgbaImage};
use tracing::debug;

use crate::{Result, TileExtenderError};

/// Decode the image at `path`.
///
/// The format is sniffed from the file contents, falling back to the
/// extension.
pub fn load(path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| map_decode_error(path, ImageError::IoError(e)))?
        .decode()
        .map_err(|e| map_decode_error(path, e))?;

    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "Decoded source image"
    );
    Ok(img)
}

/// Classify a decoder failure: an unsupported color type is a pixel
/// encoding problem, everything else a decode failure.
fn map_decode_error(path: &Path, source: ImageError) -> TileExtenderError {
    match source {
        ImageError::Unsupported(e) if matches!(e.kind(), UnsupportedErrorKind::Color(_)) => {
            TileExtenderError::UnsupportedEncoding(format!("{}: {e}", path.display()))
        }
        source => TileExtenderError::Decode {
            path: path.to_path_buf(),
            source,
        },
    }
}

/// Encode `img` as an 8-bit RGBA PNG in memory.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png)
        .map_err(TileExtenderError::Encode)?;
    Ok(cursor.into_inner())
}

/// Write `img` to `path` as PNG, creating or overwriting the file.
///
/// Encoding completes before the file is touched, so an encoder failure
/// leaves no output behind.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_png(img)?;
    std::fs::write(path, &bytes).map_err(|source| TileExtenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "Wrote PNG");
    Ok(())
}
