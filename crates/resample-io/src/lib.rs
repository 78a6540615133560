//! resample-io - Raw frame ingestion for resample
//!
//! Raw `.rgb` frames carry no header: the caller supplies width and height.
//! The bytes are planar, one full-frame plane per channel:
//!
//! ```text
//! [ R plane: W*H bytes ][ G plane: W*H bytes ][ B plane: W*H bytes ]
//! ```
//!
//! Each plane is row-major. This crate turns such frames into
//! [`PixelBuffer`](resample_core::PixelBuffer)s and back; the resampling
//! crates never depend on it.

mod error;
pub mod planar;

pub use error::{IoError, IoResult};
pub use planar::{decode_planar, encode_planar, frame_len, read_planar, read_planar_from};
