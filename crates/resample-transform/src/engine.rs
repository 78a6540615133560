//! Resampling engine
//!
//! [`Resampler`] owns the Gaussian kernel for the lifetime of a session and
//! routes each request to one of the four algorithms through
//! [`Algorithm::select`]. It holds no per-request state, so one instance
//! can serve any number of calls, concurrently if the caller wishes.

use crate::{
    Algorithm, MethodSelector, SampleDirection, TargetSize, TransformResult, bilinear, decimate,
    gaussian_weighted, nearest_neighbor,
};
use resample_core::PixelBuffer;
use resample_filter::Kernel;
use tracing::debug;

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResampleOptions {
    /// Side length of the square Gaussian kernel; must be odd
    pub kernel_size: u32,
    /// Standard deviation of the Gaussian kernel; must be positive
    pub sigma: f64,
}

impl Default for ResampleOptions {
    fn default() -> Self {
        Self {
            kernel_size: 5,
            sigma: 1.5,
        }
    }
}

impl ResampleOptions {
    pub fn with_kernel_size(mut self, kernel_size: u32) -> Self {
        self.kernel_size = kernel_size;
        self
    }

    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }
}

/// Resampling engine with a prebuilt Gaussian kernel.
///
/// # Example
///
/// ```
/// use resample_core::{PixelBuffer, Rgb};
/// use resample_transform::{MethodSelector, Resampler, SampleDirection, TargetSize};
///
/// let engine = Resampler::default();
/// let src = PixelBuffer::new_fill(8, 8, Rgb::new(1, 2, 3)).unwrap();
/// let out = engine
///     .resample(
///         &src,
///         TargetSize::new(4, 4).unwrap(),
///         SampleDirection::Downsample,
///         MethodSelector::Alternate,
///     )
///     .unwrap();
/// assert_eq!(out.uniform_color(), Some(Rgb::new(1, 2, 3)));
/// ```
#[derive(Debug, Clone)]
pub struct Resampler {
    options: ResampleOptions,
    kernel: Kernel,
}

impl Resampler {
    /// Build an engine, constructing its kernel.
    ///
    /// # Errors
    ///
    /// Returns a filter error if the kernel size is even or zero, or sigma is
    /// not a positive finite number.
    pub fn new(options: ResampleOptions) -> TransformResult<Self> {
        let kernel = Kernel::gaussian(options.kernel_size, options.sigma)?;
        Ok(Self { options, kernel })
    }

    pub fn options(&self) -> &ResampleOptions {
        &self.options
    }

    /// The normalized Gaussian kernel used by the Gaussian-weighted path.
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Resample `source` to `target` with the algorithm picked by
    /// `direction` and `method`.
    ///
    /// `direction` is taken as given; use [`SampleDirection::for_target`] to
    /// derive it from the sizes.
    pub fn resample(
        &self,
        source: &PixelBuffer,
        target: TargetSize,
        direction: SampleDirection,
        method: MethodSelector,
    ) -> TransformResult<PixelBuffer> {
        self.apply(Algorithm::select(direction, method), source, target)
    }

    /// Run one algorithm directly, bypassing the selection policy.
    pub fn apply(
        &self,
        algorithm: Algorithm,
        source: &PixelBuffer,
        target: TargetSize,
    ) -> TransformResult<PixelBuffer> {
        debug!(
            %algorithm,
            src_width = source.width(),
            src_height = source.height(),
            dst_width = target.width(),
            dst_height = target.height(),
            "resampling"
        );
        match algorithm {
            Algorithm::Decimation => decimate(source, target),
            Algorithm::GaussianWeighted => gaussian_weighted(source, target, &self.kernel),
            Algorithm::NearestNeighbor => nearest_neighbor(source, target),
            Algorithm::Bilinear => bilinear(source, target),
        }
    }
}

impl Default for Resampler {
    fn default() -> Self {
        Self::new(ResampleOptions::default()).expect("default kernel options are valid")
    }
}
