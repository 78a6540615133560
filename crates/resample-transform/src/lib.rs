//! resample-transform - Resampling algorithms and selection policies
//!
//! This crate provides:
//!
//! - Target-size policy: [`Preset`], [`resolve_target`], [`TargetSize`]
//! - Direction policy: [`SampleDirection::classify`]
//! - Algorithm selection: [`MethodSelector`], [`Algorithm::select`]
//! - The four algorithms, usable on their own:
//!   - [`decimate`] and [`gaussian_weighted`] for downsampling
//!   - [`nearest_neighbor`] and [`bilinear`] for upsampling
//! - [`Resampler`], which owns the Gaussian kernel and dispatches requests

pub mod area_map;
pub mod bilinear;
pub mod dispatch;
pub mod engine;
mod error;
pub mod policy;
pub mod scale;

pub use area_map::gaussian_weighted;
pub use bilinear::{bilinear, interpolate_at};
pub use dispatch::{Algorithm, MethodSelector};
pub use engine::{ResampleOptions, Resampler};
pub use error::{TransformError, TransformResult};
pub use policy::{Preset, SampleDirection, TargetSize, resolve_target};
pub use scale::{decimate, nearest_neighbor};
