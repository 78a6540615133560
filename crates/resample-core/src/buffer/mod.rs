//! PixelBuffer - The RGB image container
//!
//! `PixelBuffer` is a fixed-size 2D grid of RGB triples, the one data
//! structure every resampling algorithm reads and writes.
//!
//! # Pixel layout
//!
//! - Pixels are stored row-major, one [`Rgb`] per pixel
//! - There is no row padding: pixel `(x, y)` lives at index `y * width + x`
//! - Each channel is an 8-bit unsigned integer
//!
//! # Ownership model
//!
//! `PixelBuffer` uses `Arc` for cheap cloning (shared, read-only data).
//! To modify pixel data, convert to `PixelBufferMut` via
//! [`PixelBuffer::try_into_mut`] or [`PixelBuffer::to_mut`], then convert
//! back with `Into<PixelBuffer>`.

mod access;
mod compare;

use crate::error::{Error, Result};
use std::sync::Arc;

/// One RGB triple, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, red first.
    #[inline]
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build from per-channel values, red first.
    #[inline]
    pub fn from_channels(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }
}

/// Internal buffer data
#[derive(Debug)]
struct BufferData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixels, row-major
    data: Vec<Rgb>,
}

impl BufferData {
    fn validate(width: u32, height: u32, len: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })?;
        if len != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: len,
            });
        }
        Ok(())
    }
}

/// PixelBuffer - RGB image container
///
/// # Examples
///
/// ```
/// use resample_core::{PixelBuffer, Rgb};
///
/// let buf = PixelBuffer::new(640, 480).unwrap();
/// assert_eq!(buf.width(), 640);
/// assert_eq!(buf.height(), 480);
/// assert_eq!(buf.rgb(0, 0), Rgb::BLACK);
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    inner: Arc<BufferData>,
}

impl PixelBuffer {
    /// Create a new black buffer with the specified dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_fill(width, height, Rgb::BLACK)
    }

    /// Create a buffer where every pixel is `color`.
    pub fn new_fill(width: u32, height: u32, color: Rgb) -> Result<Self> {
        Ok(PixelBufferMut::new_fill(width, height, color)?.into())
    }

    /// Wrap an existing row-major pixel vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::SizeMismatch`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<Rgb>) -> Result<Self> {
        BufferData::validate(width, height, data.len())?;
        Ok(Self::from_data(BufferData {
            width,
            height,
            data,
        }))
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel in row-major order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Rgb,
    {
        let mut buf = PixelBufferMut::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                buf.put_rgb(x, y, f(x, y));
            }
        }
        Ok(buf.into())
    }

    fn from_data(inner: BufferData) -> Self {
        PixelBuffer {
            inner: Arc::new(inner),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get raw access to the pixels, row-major.
    #[inline]
    pub fn data(&self) -> &[Rgb] {
        &self.inner.data
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgb] {
        assert!(y < self.inner.height, "row index out of bounds");
        let start = y as usize * self.inner.width as usize;
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Get the number of strong references to this buffer.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two buffers have the same width and height.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixelBufferMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelBufferMut { inner: data }),
            Err(arc) => Err(PixelBuffer { inner: arc }),
        }
    }

    /// Create a mutable copy of this buffer.
    ///
    /// Always creates a new copy; the source is left untouched.
    pub fn to_mut(&self) -> PixelBufferMut {
        PixelBufferMut {
            inner: BufferData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable PixelBuffer
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`PixelBuffer`] using `Into<PixelBuffer>`.
#[derive(Debug)]
pub struct PixelBufferMut {
    inner: BufferData,
}

impl PixelBufferMut {
    /// Create a new black, exclusively owned buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_fill(width, height, Rgb::BLACK)
    }

    /// Create an exclusively owned buffer where every pixel is `color`.
    pub fn new_fill(width: u32, height: u32, color: Rgb) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })?;
        Ok(PixelBufferMut {
            inner: BufferData {
                width,
                height,
                data: vec![color; len],
            },
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get raw access to the pixels.
    #[inline]
    pub fn data(&self) -> &[Rgb] {
        &self.inner.data
    }

    /// Get mutable access to the pixels.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Rgb] {
        &mut self.inner.data
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgb) {
        self.inner.data.fill(color);
    }
}

impl From<PixelBufferMut> for PixelBuffer {
    fn from(buf: PixelBufferMut) -> Self {
        PixelBuffer::from_data(buf.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            PixelBuffer::new(0, 10),
            Err(Error::InvalidDimension {
                width: 0,
                height: 10
            })
        ));
        assert!(PixelBuffer::new(10, 0).is_err());
    }

    #[test]
    fn test_from_vec_size_mismatch() {
        let err = PixelBuffer::from_vec(2, 2, vec![Rgb::BLACK; 3]).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_from_fn_row_major() {
        let buf = PixelBuffer::from_fn(3, 2, |x, y| Rgb::new(x as u8, y as u8, 0)).unwrap();
        assert_eq!(buf.data()[4], Rgb::new(1, 1, 0));
        assert_eq!(buf.row(1), &[
            Rgb::new(0, 1, 0),
            Rgb::new(1, 1, 0),
            Rgb::new(2, 1, 0)
        ]);
    }

    #[test]
    fn test_try_into_mut_shared() {
        let buf = PixelBuffer::new(2, 2).unwrap();
        let shared = buf.clone();
        assert_eq!(buf.ref_count(), 2);
        let buf = buf.try_into_mut().unwrap_err();
        drop(shared);
        let mut owned = buf.try_into_mut().unwrap();
        owned.fill(Rgb::WHITE);
        let frozen: PixelBuffer = owned.into();
        assert!(frozen.data().iter().all(|&p| p == Rgb::WHITE));
    }

    #[test]
    fn test_to_mut_leaves_source() {
        let buf = PixelBuffer::new_fill(2, 1, Rgb::WHITE).unwrap();
        let mut copy = buf.to_mut();
        copy.fill(Rgb::BLACK);
        assert_eq!(buf.rgb(0, 0), Rgb::WHITE);
    }

    #[test]
    fn test_rgb_channels() {
        let c = Rgb::new(1, 2, 3);
        assert_eq!(c.channels(), [1, 2, 3]);
        assert_eq!(Rgb::from_channels([1, 2, 3]), c);
    }
}
