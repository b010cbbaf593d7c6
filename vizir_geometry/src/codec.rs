// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed 16-byte encoding of a 2D point.
//!
//! Layout: bytes `0..8` hold `x` and bytes `8..16` hold `y`, each as a big-endian IEEE-754
//! double. Raw bit patterns are preserved, including NaN payloads and signed zero.

use kurbo::Point;

use crate::GeometryError;

/// Length in bytes of an encoded point.
pub const POINT_BYTE_LEN: usize = 16;

const COORD_BYTE_LEN: usize = 8;

/// Encodes `point` into its 16-byte representation.
pub fn encode_point(point: Point) -> [u8; POINT_BYTE_LEN] {
    let mut out = [0_u8; POINT_BYTE_LEN];
    out[..COORD_BYTE_LEN].copy_from_slice(&point.x.to_be_bytes());
    out[COORD_BYTE_LEN..].copy_from_slice(&point.y.to_be_bytes());
    out
}

/// Decodes a point previously written by [`encode_point`].
///
/// Returns [`GeometryError::PointByteLength`] unless `bytes` is exactly
/// [`POINT_BYTE_LEN`] long.
pub fn decode_point(bytes: &[u8]) -> Result<Point, GeometryError> {
    if bytes.len() != POINT_BYTE_LEN {
        return Err(GeometryError::PointByteLength {
            expected: POINT_BYTE_LEN,
            actual: bytes.len(),
        });
    }
    let (x, y) = bytes.split_at(COORD_BYTE_LEN);
    Ok(Point::new(read_f64(x), read_f64(y)))
}

fn read_f64(bytes: &[u8]) -> f64 {
    let mut raw = [0_u8; COORD_BYTE_LEN];
    raw.copy_from_slice(bytes);
    f64::from_be_bytes(raw)
}
