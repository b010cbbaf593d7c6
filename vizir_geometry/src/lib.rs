// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart geometry for `vizir`: radial hit-testing and smoothed line paths.
//!
//! This crate holds the geometry that sits between a chart's data and its drawing surface:
//! - **Radial mapping** resolves a screen point to an angle and to the pie/doughnut segment
//!   that contains it.
//! - **Curve smoothing** turns a polyline into a cubic path, and **curve sampling** snaps
//!   point markers onto that path so they sit on the drawn line.
//!
//! Drawing, text and legends are out of scope; inputs are screen-space coordinates and the
//! outputs are angles, segments, `kurbo` paths and adjusted vertices.
//!
//! Angles exchanged with callers are in **degrees**, measured clockwise from the 3 o'clock
//! position in a y-down screen space.

#![no_std]

extern crate alloc;

mod codec;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod layout;
mod path;
mod radial;
mod sample;
mod segment;
mod smooth;
mod vertex;

pub use codec::{POINT_BYTE_LEN, decode_point, encode_point};
pub use error::GeometryError;
pub use layout::RadialLayout;
pub use path::{ArcLengthPath, MeasuredPath};
pub use radial::{RadialMapper, SegmentSelection};
pub use sample::CurveSampler;
pub use segment::{FULL_TURN, Segment, SegmentRegistry};
pub use smooth::{CurveSmoother, SmoothedPath};
pub use vertex::{vertices_from_interleaved, vertices_to_interleaved};
