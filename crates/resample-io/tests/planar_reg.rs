//! Planar I/O regression test
//!
//! Fixture decoding, file and reader paths, and truncated input.

use resample_core::Rgb;
use resample_io::{IoError, decode_planar, encode_planar, read_planar, read_planar_from};
use resample_test::{RegParams, gradient, test_data_path};

#[test]
fn planar_reg() {
    let mut rp = RegParams::new("planar");

    // --- Test 1: Fixture layout ---
    let pix = read_planar(test_data_path("checker8x6.rgb"), 8, 6).expect("read checker8x6.rgb");
    rp.compare_values(8.0, pix.width() as f64, 0.0);
    rp.compare_values(6.0, pix.height() as f64, 0.0);
    let a = Rgb::new(200, 30, 40);
    let b = Rgb::new(10, 220, 120);
    for (x, y, want) in [(0, 0, a), (1, 1, a), (2, 0, b), (3, 5, b), (6, 2, a)] {
        rp.compare_values(u32::from(want) as f64, u32::from(pix.rgb(x, y)) as f64, 0.0);
    }

    let grad = read_planar(test_data_path("gradient16x12.rgb"), 16, 12).expect("read gradient");
    rp.compare_values(
        u32::from(Rgb::new(5 * 16, 3 * 20, 5 ^ 3)) as f64,
        u32::from(grad.rgb(5, 3)) as f64,
        0.0,
    );

    // --- Test 2: Encode is the inverse of decode ---
    let src = gradient(13, 7).unwrap();
    let bytes = encode_planar(&src);
    rp.compare_values((13 * 7 * 3) as f64, bytes.len() as f64, 0.0);
    let back = decode_planar(&bytes, 13, 7).unwrap();
    rp.compare_pix(&src, &back);
    let file_bytes = std::fs::read(test_data_path("checker8x6.rgb")).unwrap();
    rp.compare_strings(&file_bytes, &encode_planar(&pix));

    // --- Test 3: Reader path matches the byte path ---
    let via_reader = read_planar_from(&bytes[..], 13, 7).unwrap();
    rp.compare_pix(&back, &via_reader);

    // --- Test 4: Truncated input is rejected ---
    let short = &bytes[..bytes.len() - 1];
    let err = decode_planar(short, 13, 7).unwrap_err();
    rp.compare_values(1.0, matches!(err, IoError::InvalidData(_)) as u8 as f64, 0.0);
    let err = read_planar_from(short, 13, 7).unwrap_err();
    rp.compare_values(1.0, matches!(err, IoError::InvalidData(_)) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "planar regression test failed");
}
