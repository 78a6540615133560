//! Resample Core - Basic data structures for RGB resampling
//!
//! This crate provides the fundamental data structures shared by every
//! resampling algorithm:
//!
//! - [`PixelBuffer`] / [`PixelBufferMut`] - The RGB image container (immutable / mutable)
//! - [`Rgb`] - One 8-bit-per-channel color triple
//! - [`color`] - Packing helpers for `0x00RRGGBB` integer pixels
//!
//! # Ownership model
//!
//! Buffers are never written by two components at once. Algorithms fill a
//! fresh [`PixelBufferMut`] and hand it back frozen as a [`PixelBuffer`].

pub mod buffer;
pub mod error;

pub use buffer::{PixelBuffer, PixelBufferMut, Rgb};
pub use error::{Error, Result};

/// Color channel helpers for packed 24-bit RGB pixels.
///
/// # Pixel format
///
/// Packed pixels are stored as `0x00RRGGBB` (red in bits 16-23, blue in the
/// low byte). The top byte is ignored on extraction.
pub mod color {
    use crate::Rgb;

    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Extract red component from a packed pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a packed pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a packed pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a packed RGB pixel.
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT) | ((g as u32) << GREEN_SHIFT) | ((b as u32) << BLUE_SHIFT)
    }

    /// Extract RGB values from a packed pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    impl From<u32> for Rgb {
        fn from(pixel: u32) -> Self {
            let (r, g, b) = extract_rgb(pixel);
            Rgb::new(r, g, b)
        }
    }

    impl From<Rgb> for u32 {
        fn from(rgb: Rgb) -> Self {
            compose_rgb(rgb.r, rgb.g, rgb.b)
        }
    }

}
