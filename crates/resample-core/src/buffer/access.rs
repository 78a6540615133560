//! Pixel access functions
//!
//! Two flavours of per-pixel access:
//!
//! - checked: `get_rgb` / `set_rgb` report out-of-range coordinates
//!   through `Option` / `Result`
//! - direct: `rgb` / `put_rgb` assert the coordinates and panic when they
//!   are out of range
//!
//! Algorithms use the direct form. Reading outside the buffer from inside an
//! algorithm is a bug and must not be masked.

use super::{PixelBuffer, PixelBufferMut, Rgb};
use crate::error::{Error, Result};

#[inline]
fn index(width: u32, height: u32, x: u32, y: u32) -> usize {
    assert!(
        x < width && y < height,
        "pixel ({x}, {y}) out of bounds for {width}x{height} buffer"
    );
    y as usize * width as usize + x as usize
}

impl PixelBuffer {
    /// Get the color at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.rgb(x, y))
    }

    /// Get the color at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> Rgb {
        self.data()[index(self.width(), self.height(), x, y)]
    }

    /// Get the color at (x, y) packed as `0x00RRGGBB`.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.get_rgb(x, y).map(u32::from)
    }
}

impl PixelBufferMut {
    /// Get the color at (x, y), `None` if out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.rgb(x, y))
    }

    /// Get the color at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> Rgb {
        self.data()[index(self.width(), self.height(), x, y)]
    }

    /// Set the color at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgb(&mut self, x: u32, y: u32, color: Rgb) -> Result<()> {
        let (width, height) = self.dimensions();
        if x >= width || y >= height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        self.put_rgb(x, y, color);
        Ok(())
    }

    /// Set the color at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn put_rgb(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = index(self.width(), self.height(), x, y);
        self.data_mut()[idx] = color;
    }

    /// Set the color at (x, y) from a packed `0x00RRGGBB` pixel.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: u32) -> Result<()> {
        self.set_rgb(x, y, Rgb::from(pixel))
    }
}
