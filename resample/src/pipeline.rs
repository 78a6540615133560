//! End-to-end request handling
//!
//! Resolves a preset tag and a method code into a concrete resample call and
//! reports every decision alongside the output image.

use resample_core::PixelBuffer;
use resample_transform::{
    Algorithm, MethodSelector, Resampler, SampleDirection, TargetSize, TransformResult,
    resolve_target,
};
use tracing::debug;

/// Output of [`process`] together with the decisions that produced it.
#[derive(Debug, Clone)]
pub struct Resampled {
    pub image: PixelBuffer,
    pub target: TargetSize,
    pub direction: SampleDirection,
    pub algorithm: Algorithm,
    /// Method code as requested, before mapping to a [`MethodSelector`]
    pub method_code: i32,
}

impl Resampled {
    /// Name for the output, e.g. `Downsample_photo_type_1_640x480`.
    pub fn label(&self, stem: &str) -> String {
        format!(
            "{}_{}_type_{}_{}",
            self.direction, stem, self.method_code, self.target
        )
    }
}

/// Resample `source` to the preset named by `preset_id`.
///
/// Unknown presets keep the source size and unknown method codes select the
/// filtered algorithm of the chosen direction; neither is an error.
pub fn process(
    source: &PixelBuffer,
    preset_id: &str,
    method_code: i32,
    resampler: &Resampler,
) -> TransformResult<Resampled> {
    let target = resolve_target(preset_id, source.width(), source.height());
    let direction = SampleDirection::for_target(source, target);
    let method = MethodSelector::from_code(method_code);
    let algorithm = Algorithm::select(direction, method);
    debug!(preset_id, method_code, %target, %direction, %algorithm, "processing request");

    let image = resampler.apply(algorithm, source, target)?;
    Ok(Resampled {
        image,
        target,
        direction,
        algorithm,
        method_code,
    })
}
