// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between interleaved `x, y` buffers and points.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use crate::GeometryError;

/// Converts an interleaved `[x0, y0, x1, y1, ...]` buffer into points.
pub fn vertices_from_interleaved(coords: &[f64]) -> Result<Vec<Point>, GeometryError> {
    if coords.len() % 2 != 0 {
        return Err(GeometryError::OddCoordinateCount { len: coords.len() });
    }
    Ok(coords
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}

/// Flattens points into an interleaved `[x0, y0, x1, y1, ...]` buffer.
pub fn vertices_to_interleaved(vertices: &[Point]) -> Vec<f64> {
    vertices.iter().flat_map(|p| [p.x, p.y]).collect()
}
