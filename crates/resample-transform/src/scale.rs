//! Pure sampling: decimation and nearest-neighbor
//!
//! Both algorithms copy one source pixel per destination pixel without any
//! averaging. They differ only in how the ratio is expressed:
//!
//! | function | ratio | source coordinate |
//! |---|---|---|
//! | [`decimate`] | `src / target` | `trunc(x * ratio)` |
//! | [`nearest_neighbor`] | `target / src` | `min(trunc(x / ratio), src - 1)` |
//!
//! Ratios are computed in single precision and coordinates are truncated,
//! never rounded.

use crate::{TargetSize, TransformResult};
use resample_core::PixelBuffer;

/// Downsample by picking every n-th source pixel.
///
/// High-frequency detail may alias; there is no low-pass step.
///
/// # Example
///
/// ```
/// use resample_core::{PixelBuffer, Rgb};
/// use resample_transform::{TargetSize, decimate};
///
/// let src = PixelBuffer::from_fn(4, 4, |x, y| Rgb::new(x as u8, y as u8, 0)).unwrap();
/// let out = decimate(&src, TargetSize::new(2, 2).unwrap()).unwrap();
/// assert_eq!(out.rgb(1, 1), Rgb::new(2, 2, 0));
/// ```
pub fn decimate(pix: &PixelBuffer, target: TargetSize) -> TransformResult<PixelBuffer> {
    let (w, h) = pix.dimensions();
    let x_ratio = w as f32 / target.width() as f32;
    let y_ratio = h as f32 / target.height() as f32;

    let out = PixelBuffer::from_fn(target.width(), target.height(), |x, y| {
        let sx = (x as f32 * x_ratio) as u32;
        let sy = (y as f32 * y_ratio) as u32;
        pix.rgb(sx, sy)
    })?;
    Ok(out)
}

/// Upsample by replicating the nearest source pixel.
pub fn nearest_neighbor(pix: &PixelBuffer, target: TargetSize) -> TransformResult<PixelBuffer> {
    let (w, h) = pix.dimensions();
    let x_ratio = target.width() as f32 / w as f32;
    let y_ratio = target.height() as f32 / h as f32;

    let out = PixelBuffer::from_fn(target.width(), target.height(), |x, y| {
        let sx = ((x as f32 / x_ratio) as u32).min(w - 1);
        let sy = ((y as f32 / y_ratio) as u32).min(h - 1);
        pix.rgb(sx, sy)
    })?;
    Ok(out)
}
