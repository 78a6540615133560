//! Two-pass bilinear upsampling
//!
//! Each destination pixel maps back to a continuous source coordinate
//! `(fx, fy)` with base index `(ix, iy) = (trunc(fx), trunc(fy))`. Two
//! horizontal passes run over the rows above and below the base row:
//!
//! ```text
//!   row iy-1:  s(ix-1) ---- upper ---- s(ix+1)     a + (b - a) * dx
//!   row iy:                 s(ix)                   (fallback only)
//!   row iy+1:  s(ix-1) ---- lower ---- s(ix+1)     a + (b - a * dx)
//! ```
//!
//! and the result is `upper + (lower - upper) * dy` per channel.
//!
//! The lower pass scales only the left sample by `dx`, unlike the upper
//! pass. This is kept as-is: it changes edge and interior output whenever
//! `dx` is nonzero. [`bilinear`] truncates the mapped coordinate before
//! interpolating, so on that path `dx = dy = 0` and the output is the upper
//! pass result.
//!
//! # Boundary fallbacks
//!
//! For each pass:
//! - both columns and the row in bounds: interpolate
//! - only the right column in bounds: that sample
//! - only the left column in bounds: that sample
//! - row out of bounds, or neither column in bounds (1-pixel-wide source):
//!   the base sample `s(ix, iy)`

use crate::{TargetSize, TransformResult};
use resample_core::{PixelBuffer, Rgb};

/// Upsample with two-pass bilinear interpolation.
///
/// # Example
///
/// ```
/// use resample_core::{PixelBuffer, Rgb};
/// use resample_transform::{TargetSize, bilinear};
///
/// let src = PixelBuffer::new_fill(3, 2, Rgb::new(10, 20, 30)).unwrap();
/// let out = bilinear(&src, TargetSize::new(7, 5).unwrap()).unwrap();
/// assert_eq!(out.uniform_color(), Some(Rgb::new(10, 20, 30)));
/// ```
pub fn bilinear(pix: &PixelBuffer, target: TargetSize) -> TransformResult<PixelBuffer> {
    let (w, h) = pix.dimensions();
    let x_ratio = target.width() as f32 / w as f32;
    let y_ratio = target.height() as f32 / h as f32;

    let out = PixelBuffer::from_fn(target.width(), target.height(), |x, y| {
        let sx = ((x as f32 / x_ratio) as u32).min(w - 1);
        let sy = ((y as f32 / y_ratio) as u32).min(h - 1);
        interpolate_at(pix, sx as f32, sy as f32)
    })?;
    Ok(out)
}

/// Interpolate the source at a continuous coordinate.
///
/// Channels are computed in `f32` and truncated into `u8`, saturating at
/// 0 and 255.
///
/// # Panics
///
/// Panics if `(fx, fy)` is negative, NaN, or its truncation lies outside
/// `pix`.
pub fn interpolate_at(pix: &PixelBuffer, fx: f32, fy: f32) -> Rgb {
    assert!(
        fx >= 0.0 && fy >= 0.0,
        "interpolation point ({fx}, {fy}) is negative or NaN"
    );
    let ix = fx as u32;
    let iy = fy as u32;
    assert!(
        ix < pix.width() && iy < pix.height(),
        "interpolation point ({fx}, {fy}) outside {}x{} buffer",
        pix.width(),
        pix.height()
    );

    let dx = fx - ix as f32;
    let dy = fy - iy as f32;
    let base = pix.rgb(ix, iy);

    let upper = row_pass(pix, ix, i64::from(iy) - 1, dx, base, lerp);
    let lower = row_pass(pix, ix, i64::from(iy) + 1, dx, base, lerp_left_weighted);

    let mut out = [0u8; 3];
    for ((o, u), l) in out.iter_mut().zip(upper).zip(lower) {
        // float -> int `as` saturates
        *o = (u + (l - u) * dy) as u8;
    }
    Rgb::from_channels(out)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn lerp_left_weighted(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a * t)
}

/// One horizontal pass over `row`, with the boundary fallbacks.
fn row_pass(
    pix: &PixelBuffer,
    ix: u32,
    row: i64,
    dx: f32,
    base: Rgb,
    blend: fn(f32, f32, f32) -> f32,
) -> [f32; 3] {
    let row = u32::try_from(row).ok().filter(|&r| r < pix.height());
    let left = ix.checked_sub(1);
    let right = Some(ix + 1).filter(|&c| c < pix.width());

    match (row, left, right) {
        (Some(r), Some(l), Some(rt)) => {
            let a = channels(pix.rgb(l, r));
            let b = channels(pix.rgb(rt, r));
            [
                blend(a[0], b[0], dx),
                blend(a[1], b[1], dx),
                blend(a[2], b[2], dx),
            ]
        }
        (Some(r), None, Some(rt)) => channels(pix.rgb(rt, r)),
        (Some(r), Some(l), None) => channels(pix.rgb(l, r)),
        _ => channels(base),
    }
}

fn channels(c: Rgb) -> [f32; 3] {
    c.channels().map(f32::from)
}
