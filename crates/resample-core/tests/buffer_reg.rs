//! Buffer regression test
//!
//! Construction, checked and unchecked access, copy-on-write conversion,
//! packed-pixel helpers and comparison.

use resample_core::color::{compose_rgb, extract_rgb};
use resample_core::{Error, PixelBuffer, Rgb};
use resample_test::{RegParams, checkerboard, gradient};

#[test]
fn buffer_reg() {
    let mut rp = RegParams::new("buffer");

    // --- Test 1: Construction ---
    let pix = PixelBuffer::new(17, 5).expect("new");
    rp.compare_values(17.0, pix.width() as f64, 0.0);
    rp.compare_values(5.0, pix.height() as f64, 0.0);
    rp.compare_values(85.0, pix.data().len() as f64, 0.0);
    let bad = PixelBuffer::from_vec(3, 3, vec![Rgb::BLACK; 8]);
    rp.compare_values(
        1.0,
        if matches!(bad, Err(Error::SizeMismatch { expected: 9, actual: 8 })) {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    // --- Test 2: Checked access at and past the edges ---
    let grad = gradient(6, 4).unwrap();
    rp.compare_values(1.0, grad.get_rgb(5, 3).is_some() as u8 as f64, 0.0);
    rp.compare_values(0.0, grad.get_rgb(6, 0).is_some() as u8 as f64, 0.0);
    rp.compare_values(0.0, grad.get_rgb(0, 4).is_some() as u8 as f64, 0.0);

    // --- Test 3: Packed pixels ---
    let c = Rgb::new(0x12, 0x34, 0x56);
    rp.compare_values(0x123456 as f64, u32::from(c) as f64, 0.0);
    rp.compare_values(
        u32::from(grad.rgb(3, 2)) as f64,
        grad.get_pixel(3, 2).unwrap_or(0) as f64,
        0.0,
    );
    let (r, g, b) = extract_rgb(0xff_a0_b0_c0);
    rp.compare_values(compose_rgb(r, g, b) as f64, 0x00a0_b0c0 as f64, 0.0);

    // --- Test 4: Writes go through a private copy ---
    let shared = grad.clone();
    let mut copy = grad.to_mut();
    copy.put_rgb(2, 2, Rgb::WHITE);
    let err = copy.set_rgb(6, 0, Rgb::WHITE);
    rp.compare_values(1.0, err.is_err() as u8 as f64, 0.0);
    let edited: PixelBuffer = copy.into();
    rp.compare_values(1.0, grad.count_pixel_diffs(&edited).unwrap() as f64, 0.0);
    rp.compare_pix(&grad, &shared);

    // --- Test 5: Colors of a checkerboard ---
    let board = checkerboard(6, 6, 3, Rgb::BLACK, Rgb::WHITE).unwrap();
    rp.compare_values(2.0, board.distinct_colors().len() as f64, 0.0);
    rp.compare_values(0.0, board.uniform_color().is_some() as u8 as f64, 0.0);
    let mismatch = board.count_pixel_diffs(&grad);
    rp.compare_values(1.0, mismatch.is_err() as u8 as f64, 0.0);

    assert!(rp.cleanup(), "buffer regression test failed");
}
