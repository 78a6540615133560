//! Planar raw RGB frames
//!
//! Reads one frame of `3 * W * H` bytes laid out as three consecutive
//! channel planes and demultiplexes it into RGB triples. Bytes past the
//! first frame are ignored.

use crate::{IoError, IoResult};
use resample_core::{Error, PixelBuffer, Rgb};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Number of bytes in one planar frame of the given size.
///
/// # Errors
///
/// Returns a core `InvalidDimension` error for zero dimensions or sizes
/// whose byte count overflows `usize`.
pub fn frame_len(width: u32, height: u32) -> IoResult<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height }.into());
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| Error::InvalidDimension { width, height }.into())
}

/// Demultiplex one planar frame into a buffer.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if `bytes` is shorter than one frame.
pub fn decode_planar(bytes: &[u8], width: u32, height: u32) -> IoResult<PixelBuffer> {
    let len = frame_len(width, height)?;
    if bytes.len() < len {
        return Err(IoError::InvalidData(format!(
            "planar frame {width}x{height} needs {len} bytes, got {}",
            bytes.len()
        )));
    }

    let plane = len / 3;
    let (red, rest) = bytes[..len].split_at(plane);
    let (green, blue) = rest.split_at(plane);

    let pixels = red
        .iter()
        .zip(green)
        .zip(blue)
        .map(|((&r, &g), &b)| Rgb::new(r, g, b))
        .collect();

    debug!(width, height, bytes = bytes.len(), "decoded planar frame");
    Ok(PixelBuffer::from_vec(width, height, pixels)?)
}

/// Read one planar frame from a reader.
///
/// # Errors
///
/// A reader that ends before a full frame yields [`IoError::InvalidData`].
pub fn read_planar_from<R: Read>(mut reader: R, width: u32, height: u32) -> IoResult<PixelBuffer> {
    let mut bytes = vec![0u8; frame_len(width, height)?];
    reader.read_exact(&mut bytes).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => {
            IoError::InvalidData(format!("truncated planar frame for {width}x{height}"))
        }
        _ => IoError::Io(e),
    })?;
    decode_planar(&bytes, width, height)
}

/// Read one planar frame from a file.
pub fn read_planar<P: AsRef<Path>>(path: P, width: u32, height: u32) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    debug!(path = %path.display(), width, height, "reading planar frame");
    let file = File::open(path)?;
    read_planar_from(BufReader::new(file), width, height)
}

/// Multiplex a buffer back into one planar frame.
pub fn encode_planar(pix: &PixelBuffer) -> Vec<u8> {
    let plane = pix.data().len();
    let mut bytes = vec![0u8; plane * 3];
    for (i, px) in pix.data().iter().enumerate() {
        bytes[i] = px.r;
        bytes[plane + i] = px.g;
        bytes[2 * plane + i] = px.b;
    }
    bytes
}
