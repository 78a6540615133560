//! resample-filter - Kernels and neighborhood weighting
//!
//! This crate provides:
//!
//! - [`Kernel`], including the normalized Gaussian used for area-averaged
//!   downsampling
//! - [`convolve_at`], a single-point weighted average that renormalizes over
//!   the in-bounds part of the kernel

pub mod convolve;
mod error;
pub mod kernel;

pub use convolve::{TRUNCATION_EPSILON, convolve_at};
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;
