//! Weighting kernels
//!
//! A [`Kernel`] is a small 2D table of weights with a designated center
//! cell. The Gaussian constructor produces the normalized table used by
//! Gaussian-weighted downsampling.
//!
//! Kernel API:
//! - `Kernel::new` - zero-filled kernel
//! - `Kernel::from_slice` - kernel from row-major values
//! - `Kernel::gaussian` - normalized odd-sized Gaussian
//! - `Kernel::get` / `Kernel::set` - element access
//! - `Kernel::weight_at` - element access relative to the center

use crate::{FilterError, FilterResult};
use std::f64::consts::PI;
use tracing::debug;

/// A 2D weighting kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Y coordinate of the center
    cy: u32,
    /// Kernel data (row-major order)
    data: Vec<f64>,
}

impl Kernel {
    /// Create a new zero-filled kernel with the given dimensions.
    ///
    /// The center is placed at `(width / 2, height / 2)`.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![0.0; (width * height) as usize],
        })
    }

    /// Create a kernel from a slice of row-major values.
    pub fn from_slice(width: u32, height: u32, data: &[f64]) -> FilterResult<Self> {
        let mut kernel = Self::new(width, height)?;
        if data.len() != kernel.data.len() {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} values for a {width}x{height} kernel, got {}",
                kernel.data.len(),
                data.len()
            )));
        }
        kernel.data.copy_from_slice(data);
        Ok(kernel)
    }

    /// Create a normalized square Gaussian kernel.
    ///
    /// For each offset `(i, j)` in `[-size/2, size/2]` the raw weight is
    /// `1/(2πσ²) · exp(-(i² + j²) / (2σ²))`. The table is then divided by its
    /// sum so the weights add up to 1.
    ///
    /// # Errors
    ///
    /// `size` must be odd and positive, `sigma` finite and positive.
    pub fn gaussian(size: u32, sigma: f64) -> FilterResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "gaussian kernel size must be odd and positive, got {size}"
            )));
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(FilterError::InvalidParameters(format!(
                "gaussian sigma must be finite and positive, got {sigma}"
            )));
        }

        let mut kernel = Self::new(size, size)?;
        let half = (size / 2) as i32;
        let two_sigma_sq = 2.0 * sigma * sigma;
        let coefficient = 1.0 / (PI * two_sigma_sq);

        for j in -half..=half {
            for i in -half..=half {
                let dist_sq = f64::from(i * i + j * j);
                let weight = coefficient * (-dist_sq / two_sigma_sq).exp();
                kernel.set((i + half) as u32, (j + half) as u32, weight);
            }
        }
        kernel.normalize();

        debug!(size, sigma, "built gaussian kernel");
        Ok(kernel)
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    /// Get the center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Set the center coordinates.
    pub fn set_center(&mut self, cx: u32, cy: u32) -> FilterResult<()> {
        if cx >= self.width || cy >= self.height {
            return Err(FilterError::InvalidKernel(format!(
                "center ({cx}, {cy}) outside {}x{} kernel",
                self.width, self.height
            )));
        }
        self.cx = cx;
        self.cy = cy;
        Ok(())
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Get the value at offset `(dx, dy)` from the center.
    #[inline]
    pub fn weight_at(&self, dx: i32, dy: i32) -> Option<f64> {
        let x = self.cx as i64 + dx as i64;
        let y = self.cy as i64 + dy as i64;
        if x < 0 || y < 0 {
            return None;
        }
        self.get(x as u32, y as u32)
    }

    /// Set a value at (x, y). Out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = value;
        }
    }

    /// Normalize the kernel so that values sum to 1.
    ///
    /// A kernel summing to zero is left unchanged.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum == 0.0 {
            return;
        }
        for v in &mut self.data {
            *v /= sum;
        }
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}
