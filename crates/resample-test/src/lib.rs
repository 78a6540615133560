//! resample-test - Regression test framework for resample
//!
//! Provides [`RegParams`], which numbers and records every comparison made
//! by a regression test and reports all failures at the end, plus a set of
//! synthetic test images so tests do not depend on large fixtures.
//!
//! # Usage
//!
//! ```ignore
//! use resample_test::{RegParams, checkerboard};
//!
//! let mut rp = RegParams::new("scale");
//! let pix = checkerboard(4, 4, 1, Rgb::BLACK, Rgb::WHITE).unwrap();
//! rp.compare_values(4.0, pix.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use resample_core::{PixelBuffer, Rgb};

/// Load a planar raw RGB test image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "checker8x6.rgb")
/// * `width`, `height` - Frame dimensions; raw files carry no header
pub fn load_test_image(name: &str, width: u32, height: u32) -> TestResult<PixelBuffer> {
    let path = test_data_path(name);
    resample_io::read_planar(&path, width, height).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // resample-test is at crates/resample-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// A buffer filled with one color.
pub fn uniform(width: u32, height: u32, color: Rgb) -> TestResult<PixelBuffer> {
    Ok(PixelBuffer::new_fill(width, height, color)?)
}

/// A checkerboard of `cell`-sized squares, `a` at the origin.
pub fn checkerboard(width: u32, height: u32, cell: u32, a: Rgb, b: Rgb) -> TestResult<PixelBuffer> {
    let cell = cell.max(1);
    Ok(PixelBuffer::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 { a } else { b }
    })?)
}

/// A buffer whose every pixel is distinct for sizes up to 256x256:
/// red follows x, green follows y, blue mixes both.
pub fn gradient(width: u32, height: u32) -> TestResult<PixelBuffer> {
    Ok(PixelBuffer::from_fn(width, height, |x, y| {
        Rgb::new(x as u8, y as u8, (x ^ y) as u8)
    })?)
}

/// A buffer of random colors.
pub fn random_image(width: u32, height: u32) -> TestResult<PixelBuffer> {
    Ok(PixelBuffer::from_fn(width, height, |_, _| {
        Rgb::from_channels(rand::random::<[u8; 3]>())
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_cells() {
        let pix = checkerboard(4, 4, 2, Rgb::BLACK, Rgb::WHITE).unwrap();
        assert_eq!(pix.rgb(0, 0), Rgb::BLACK);
        assert_eq!(pix.rgb(1, 1), Rgb::BLACK);
        assert_eq!(pix.rgb(2, 0), Rgb::WHITE);
        assert_eq!(pix.rgb(3, 3), Rgb::BLACK);
    }

    #[test]
    fn test_gradient_distinct() {
        let pix = gradient(16, 16).unwrap();
        assert_eq!(pix.distinct_colors().len(), 256);
    }

    #[test]
    fn test_random_image_size() {
        let pix = random_image(7, 3).unwrap();
        assert_eq!(pix.dimensions(), (7, 3));
    }

    #[test]
    fn test_load_fixture() {
        let pix = load_test_image("checker8x6.rgb", 8, 6).unwrap();
        assert_eq!(pix.dimensions(), (8, 6));
        assert!(load_test_image("missing.rgb", 8, 6).is_err());
    }
}
