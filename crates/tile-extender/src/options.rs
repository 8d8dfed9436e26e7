//! Parameters of a single extend operation.

use crate::{DEFAULT_OPACITY, DEFAULT_TILE_HEIGHT, Result, TileExtenderError};

/// Height and fill alpha of the strip appended below the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendOptions {
    tile_height: u32,
    opacity: u8,
}

impl Default for ExtendOptions {
    fn default() -> Self {
        Self {
            tile_height: DEFAULT_TILE_HEIGHT,
            opacity: DEFAULT_OPACITY,
        }
    }
}

impl ExtendOptions {
    /// Build options from raw integers, rejecting out-of-range values.
    ///
    /// `tile_height` must be positive and fit in a `u32`; `opacity` must lie
    /// in `0..=255`.
    pub fn new(tile_height: i64, opacity: i64) -> Result<Self> {
        if tile_height <= 0 {
            return Err(TileExtenderError::Validation(format!(
                "tile height must be positive, got {tile_height}"
            )));
        }
        let tile_height = u32::try_from(tile_height).map_err(|_| {
            TileExtenderError::Validation(format!("tile height {tile_height} is too large"))
        })?;
        let opacity = u8::try_from(opacity).map_err(|_| {
            TileExtenderError::Validation(format!(
                "opacity must be between 0 and 255, got {opacity}"
            ))
        })?;
        Ok(Self {
            tile_height,
            opacity,
        })
    }

    /// A fully transparent 32px strip.
    pub fn transparent() -> Self {
        Self {
            tile_height: DEFAULT_TILE_HEIGHT,
            opacity: 0,
        }
    }

    /// Builder: set the strip height.
    pub fn with_tile_height(mut self, tile_height: u32) -> Self {
        self.tile_height = tile_height;
        self
    }

    /// Builder: set the strip fill alpha.
    pub fn with_opacity(mut self, opacity: u8) -> Self {
        self.opacity = opacity;
        self
    }

    /// Height in pixels of the appended strip.
    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Alpha of the strip's black fill.
    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    /// Check invariants that the builders cannot enforce by type.
    pub fn validate(&self) -> Result<()> {
        if self.tile_height == 0 {
            return Err(TileExtenderError::Validation(
                "tile height must be positive, got 0".into(),
            ));
        }
        Ok(())
    }
}
