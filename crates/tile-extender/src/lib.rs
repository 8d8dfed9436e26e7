//! Tilesheet canvas extension.
//!
//! Loads a tilesheet, appends one tile-high strip of uniform (optionally
//! semi-transparent) black pixels to its bottom edge, and writes the result
//! as an RGBA PNG.

use std::path::PathBuf;

pub mod codec;
pub mod compose;
pub mod extend;
pub mod normalize;
pub mod options;

// Re-exports for convenience
pub use codec::{encode_png, load, save_png};
pub use compose::{blend_source_over, composite, paste, solid};
pub use extend::{ExtendedSize, default_output_path, extend, extend_canvas, extend_image};
pub use normalize::to_rgba;
pub use options::ExtendOptions;

/// Height in pixels of the appended strip when none is given.
pub const DEFAULT_TILE_HEIGHT: u32 = 32;

/// Alpha of the appended strip's fill color when none is given.
pub const DEFAULT_OPACITY: u8 = 128;

/// Upper bound on pixel memory allocated by one extend, matching the
/// `image` crate's default decoder allocation limit (512 MiB).
pub const MAX_CANVAS_BYTES: u64 = 512 * 1024 * 1024;

/// Errors that can occur while extending a tilesheet.
#[derive(Debug, thiserror::Error)]
pub enum TileExtenderError {
    #[error("Invalid parameters: {0}")]
    Validation(String),

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported pixel encoding: {0}")]
    UnsupportedEncoding(String),

    #[error(
        "Canvas too large: {width}x{height} + tile height {tile_height} needs {bytes} bytes (limit {limit})"
    )]
    CanvasTooLarge {
        width: u32,
        height: u32,
        tile_height: u32,
        bytes: u64,
        limit: u64,
    },

    #[error("Failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for tile extender operations.
pub type Result<T> = std::result::Result<T, TileExtenderError>;

#[cfg(test)]
mod test_support;
