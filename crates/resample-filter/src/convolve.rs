//! Point convolution with edge renormalization
//!
//! Evaluates a kernel-weighted average of the neighborhood around one
//! source pixel. Kernel cells that land outside the buffer are dropped from
//! both the weighted sum and the total weight, so the average is taken over
//! the in-bounds cells only. Near the border this is a renormalized partial
//! kernel rather than a padded one.

use crate::Kernel;
use resample_core::{PixelBuffer, Rgb};

/// Slack added before truncating a channel average.
///
/// A weighted mean of a constant field evaluates to a hair below the
/// constant (e.g. `199.99999999999997`); plain truncation would then drop a
/// level.
pub const TRUNCATION_EPSILON: f64 = 1e-9;

/// Kernel-weighted average of the neighborhood centered on `(x, y)`.
///
/// Each channel is averaged independently and truncated toward zero after
/// adding [`TRUNCATION_EPSILON`]. If no kernel cell is in bounds the total
/// weight is taken as 1, which yields black.
///
/// # Panics
///
/// Panics if `(x, y)` itself lies outside `pix`.
pub fn convolve_at(pix: &PixelBuffer, x: u32, y: u32, kernel: &Kernel) -> Rgb {
    assert!(
        x < pix.width() && y < pix.height(),
        "convolution center ({x}, {y}) outside {}x{} buffer",
        pix.width(),
        pix.height()
    );

    let w = pix.width() as i64;
    let h = pix.height() as i64;
    let cx = kernel.center_x() as i64;
    let cy = kernel.center_y() as i64;

    let mut sum = [0.0f64; 3];
    let mut total_weight = 0.0f64;

    // Column offsets outer, row offsets inner.
    for kx in 0..kernel.width() {
        let sx = x as i64 + kx as i64 - cx;
        if sx < 0 || sx >= w {
            continue;
        }
        for ky in 0..kernel.height() {
            let sy = y as i64 + ky as i64 - cy;
            if sy < 0 || sy >= h {
                continue;
            }
            let Some(weight) = kernel.get(kx, ky) else {
                continue;
            };
            let px = pix.rgb(sx as u32, sy as u32);
            for (acc, channel) in sum.iter_mut().zip(px.channels()) {
                *acc += f64::from(channel) * weight;
            }
            total_weight += weight;
        }
    }

    if total_weight == 0.0 {
        total_weight = 1.0;
    }

    Rgb::from_channels(sum.map(|s| (s / total_weight + TRUNCATION_EPSILON) as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_neighborhood() {
        let color = Rgb::new(200, 17, 99);
        let pix = PixelBuffer::new_fill(7, 7, color).unwrap();
        let k = Kernel::gaussian(5, 1.5).unwrap();
        for (x, y) in [(0, 0), (3, 3), (6, 0), (6, 6), (1, 5)] {
            assert_eq!(convolve_at(&pix, x, y, &k), color);
        }
    }

    #[test]
    fn test_corner_renormalizes_over_in_bounds_cells() {
        // 2x1 buffer, 3x1 box kernel: at x = 0 only cells 0 and 1 are in
        // bounds, so the result is their plain average.
        let pix = PixelBuffer::from_vec(2, 1, vec![Rgb::new(10, 0, 0), Rgb::new(20, 0, 0)])
            .unwrap();
        let k = Kernel::from_slice(3, 1, &[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(convolve_at(&pix, 0, 0, &k), Rgb::new(15, 0, 0));
    }

    #[test]
    fn test_truncates_channel_average() {
        let pix = PixelBuffer::from_vec(2, 1, vec![Rgb::new(0, 1, 255), Rgb::new(1, 2, 254)])
            .unwrap();
        let k = Kernel::from_slice(2, 1, &[0.5, 0.5]).unwrap();
        // center (1, 0): cells at x = 0 and x = 1
        assert_eq!(convolve_at(&pix, 1, 0, &k), Rgb::new(0, 1, 254));
    }

    #[test]
    fn test_zero_weight_yields_black() {
        let pix = PixelBuffer::new_fill(3, 3, Rgb::WHITE).unwrap();
        let k = Kernel::new(3, 3).unwrap();
        assert_eq!(convolve_at(&pix, 1, 1, &k), Rgb::BLACK);
    }

    #[test]
    fn test_single_pixel_source() {
        let color = Rgb::new(1, 2, 3);
        let pix = PixelBuffer::new_fill(1, 1, color).unwrap();
        let k = Kernel::gaussian(5, 1.5).unwrap();
        assert_eq!(convolve_at(&pix, 0, 0, &k), color);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_center_out_of_bounds_panics() {
        let pix = PixelBuffer::new(2, 2).unwrap();
        let k = Kernel::gaussian(3, 1.0).unwrap();
        let _ = convolve_at(&pix, 2, 0, &k);
    }
}
