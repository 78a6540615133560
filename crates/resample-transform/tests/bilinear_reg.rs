//! Bilinear upsampling regression test
//!
//! Uniform preservation, the boundary fallbacks on every edge, and the
//! single-column source.

use resample_core::{PixelBuffer, Rgb};
use resample_test::{RegParams, load_test_image, uniform};
use resample_transform::{TargetSize, bilinear, interpolate_at};

#[test]
fn bilinear_reg() {
    let mut rp = RegParams::new("bilinear");

    // --- Test 1: Uniform input stays uniform ---
    for (w, h, tw, th) in [(4, 3, 11, 7), (1, 1, 5, 5), (1, 6, 4, 9), (7, 1, 20, 2), (5, 5, 5, 5)] {
        let color = Rgb::new(3, 141, 250);
        let src = uniform(w, h, color).unwrap();
        let out = bilinear(&src, TargetSize::new(tw, th).unwrap()).expect("bilinear");
        rp.compare_values(tw as f64, out.width() as f64, 0.0);
        let same = out.uniform_color() == Some(color);
        rp.compare_values(1.0, if same { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 2: Boundary fallbacks on the gradient fixture ---
    let grad = load_test_image("gradient16x12.rgb", 16, 12).expect("load gradient16x12.rgb");
    let cases: [((f32, f32), (u32, u32)); 6] = [
        // interior: upper pass, left sample
        ((5.0, 5.0), (4, 4)),
        // top row: base sample
        ((5.0, 0.0), (5, 0)),
        ((0.0, 0.0), (0, 0)),
        // left column: right neighbor in the upper row
        ((0.0, 7.0), (1, 6)),
        // right column: left neighbor in the upper row
        ((15.0, 7.0), (14, 6)),
        // bottom row still uses the upper pass
        ((8.0, 11.0), (7, 10)),
    ];
    for ((fx, fy), (sx, sy)) in cases {
        let got = interpolate_at(&grad, fx, fy);
        let want = grad.rgb(sx, sy);
        if got != want {
            eprintln!("  ({fx}, {fy}): got {got:?}, want {want:?}");
        }
        rp.compare_values(u32::from(want) as f64, u32::from(got) as f64, 0.0);
    }

    // --- Test 3: Driver output equals the truncated-coordinate kernel ---
    let up = bilinear(&grad, TargetSize::new(32, 24).unwrap()).unwrap();
    let mut mismatches = 0;
    for y in 0..24 {
        for x in 0..32 {
            if up.rgb(x, y) != interpolate_at(&grad, (x / 2) as f32, (y / 2) as f32) {
                mismatches += 1;
            }
        }
    }
    rp.compare_values(0.0, mismatches as f64, 0.0);

    // --- Test 4: Single-column source falls back to the base sample ---
    let column = PixelBuffer::from_fn(1, 5, |_, y| Rgb::new(y as u8 * 50, 0, 0)).unwrap();
    let tall = bilinear(&column, TargetSize::new(3, 10).unwrap()).unwrap();
    for y in 0..10 {
        rp.compare_values((y / 2 * 50) as f64, tall.rgb(2, y).r as f64, 0.0);
    }

    // --- Test 5: Lower-pass weighting is asymmetric at fractional points ---
    let flat = uniform(3, 3, Rgb::new(100, 100, 100)).unwrap();
    rp.compare_values(100.0, interpolate_at(&flat, 1.5, 1.0).r as f64, 0.0);
    rp.compare_values(150.0, interpolate_at(&flat, 1.0, 1.5).r as f64, 0.0);

    assert!(rp.cleanup(), "bilinear regression test failed");
}
