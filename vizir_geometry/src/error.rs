// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for the byte and coordinate-array boundaries.
//!
//! Geometric operations themselves are total; only conversions from host-provided buffers
//! can fail.

/// An error converting host-provided data into geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// An encoded point did not have the expected byte length.
    #[error("encoded point must be {expected} bytes, got {actual}")]
    PointByteLength {
        /// Required length in bytes.
        expected: usize,
        /// Length of the provided buffer.
        actual: usize,
    },
    /// Interleaved coordinates did not form complete `x, y` pairs.
    #[error("interleaved coordinates must come in x/y pairs, got {len} values")]
    OddCoordinateCount {
        /// Number of values provided.
        len: usize,
    },
}
