//! Buffer comparison and color-content queries
//!
//! - Pixel equality checks
//! - Pixel difference counting
//! - Uniform-color detection
//! - Distinct color sets

use super::{PixelBuffer, Rgb};
use crate::error::{Error, Result};
use std::collections::BTreeSet;

impl PixelBuffer {
    /// Check whether two buffers have the same size and identical pixels.
    pub fn equals(&self, other: &PixelBuffer) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }

    /// Count the pixels that differ between two equally sized buffers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn count_pixel_diffs(&self, other: &PixelBuffer) -> Result<u64> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(self
            .data()
            .iter()
            .zip(other.data())
            .filter(|(a, b)| a != b)
            .count() as u64)
    }

    /// Return the single color of the buffer if every pixel has it.
    pub fn uniform_color(&self) -> Option<Rgb> {
        let first = self.data()[0];
        self.data().iter().all(|&p| p == first).then_some(first)
    }

    /// The set of distinct colors present.
    pub fn distinct_colors(&self) -> BTreeSet<Rgb> {
        self.data().iter().copied().collect()
    }
}
