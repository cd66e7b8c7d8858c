//! Owned pixel grids shared by the codecs and the file model.

use imgref::ImgRef;
use rgb::RGB8;

use crate::error::{PhotonError, Result};

pub(crate) fn checked_area(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(PhotonError::DimensionsTooLarge { width, height })
}

// ── Raster ──────────────────────────────────────────────────────────

/// An owned row-major grid of 8-bit RGB pixels.
///
/// Backs the preview and thumbnail images. Pixel `(x, y)` lives at index
/// `y * width + x` of [`pixels`](Self::pixels).
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<RGB8>,
}

impl Raster {
    /// An all-black raster.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, RGB8::default())
    }

    /// A raster with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, fill: RGB8) -> Result<Self> {
        let area = checked_area(width, height)?;
        Ok(Raster {
            width,
            height,
            pixels: vec![fill; area],
        })
    }

    /// Wrap an existing row-major pixel buffer.
    ///
    /// The buffer must hold exactly `width * height` pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<RGB8>) -> Result<Self> {
        let area = checked_area(width, height)?;
        if pixels.len() != area {
            return Err(PhotonError::DimensionMismatch {
                width,
                height,
                pixels: pixels.len(),
            });
        }
        Ok(Raster {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixels, `width * height` long.
    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [RGB8] {
        &mut self.pixels
    }

    /// The pixel at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<RGB8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Zero-copy view for the `imgref` ecosystem.
    pub fn as_imgref(&self) -> ImgRef<'_, RGB8> {
        ImgRef::new(&self.pixels, self.width as usize, self.height as usize)
    }
}

// ── Mask ────────────────────────────────────────────────────────────

/// An owned row-major bilevel grid: every pixel is either set (cured) or
/// unset. There is no third state.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    /// An all-unset mask.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let area = checked_area(width, height)?;
        Ok(Mask {
            width,
            height,
            bits: vec![false; area],
        })
    }

    /// Wrap an existing row-major bit buffer.
    ///
    /// The buffer must hold exactly `width * height` bits.
    pub fn from_bits(width: u32, height: u32, bits: Vec<bool>) -> Result<Self> {
        let area = checked_area(width, height)?;
        if bits.len() != area {
            return Err(PhotonError::DimensionMismatch {
                width,
                height,
                pixels: bits.len(),
            });
        }
        Ok(Mask {
            width,
            height,
            bits,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major bits, `width * height` long.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub(crate) fn bits_mut(&mut self) -> &mut [bool] {
        &mut self.bits
    }

    /// The bit at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.bits[y as usize * self.width as usize + x as usize])
    }

    /// Set or clear the bit at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the grid.
    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x},{y}) outside {}x{} mask",
            self.width,
            self.height
        );
        self.bits[y as usize * self.width as usize + x as usize] = value;
    }
}
