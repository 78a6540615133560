//! resample - RGB image resampling
//!
//! Converts a fixed-size RGB buffer to another resolution with one of four
//! algorithms, chosen from the direction of the size change and a method
//! code:
//!
//! | direction | method 1 | any other method |
//! |---|---|---|
//! | Downsample | decimation | Gaussian-weighted |
//! | Upsample | nearest-neighbor | bilinear |
//!
//! # Example
//!
//! ```
//! use resample::{PixelBuffer, Resampler, Rgb, process};
//!
//! let engine = Resampler::default();
//! let src = PixelBuffer::new_fill(64, 48, Rgb::new(10, 20, 30)).unwrap();
//!
//! // "custom" keeps the source size, which classifies as an upsample
//! let result = process(&src, "custom", 2, &engine).unwrap();
//! assert_eq!(result.image.dimensions(), (64, 48));
//! assert_eq!(result.label("frame"), "Upsample_frame_type_2_64x48");
//! ```

mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use resample_core::*;

pub use pipeline::{Resampled, process};
pub use resample_transform::{
    Algorithm, MethodSelector, Preset, ResampleOptions, Resampler, SampleDirection, TargetSize,
    TransformError, TransformResult, resolve_target,
};

// Re-export domain crates as modules to avoid name conflicts
pub use resample_filter as filter;
pub use resample_io as io;
pub use resample_transform as transform;
