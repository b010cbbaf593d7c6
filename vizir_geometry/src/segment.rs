// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angular segments of a pie/doughnut and the ordered registry that holds them.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Degrees in a full revolution.
pub const FULL_TURN: f64 = 360.0;

/// One angular slice of a pie or doughnut.
///
/// The slice covers the half-open interval `[start_angle, start_angle + sweep_angle)`, in
/// degrees, wrapped modulo 360.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Index of the data element this slice represents.
    pub data_index: usize,
    /// The value the slice encodes.
    pub value: f64,
    /// Start angle in degrees.
    pub start_angle: f64,
    /// Angular width in degrees.
    pub sweep_angle: f64,
}

impl Segment {
    /// Creates a segment.
    pub fn new(data_index: usize, value: f64, start_angle: f64, sweep_angle: f64) -> Self {
        Self {
            data_index,
            value,
            start_angle,
            sweep_angle,
        }
    }

    /// End angle in degrees (exclusive). May exceed 360 for the last slice of a revolution.
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// Returns `true` if `angle` (degrees) falls inside this slice.
    ///
    /// A sweep of a full turn or more contains every finite angle; an empty sweep contains
    /// nothing.
    pub fn contains_angle(&self, angle: f64) -> bool {
        if !(self.sweep_angle > 0.0) || !angle.is_finite() {
            return false;
        }
        if self.sweep_angle >= FULL_TURN {
            return true;
        }
        let offset = (angle - self.start_angle).rem_euclid(FULL_TURN);
        offset < self.sweep_angle
    }

    /// The `(start, sweep)` interval a renderer paints for this slice, leaving a gap of
    /// `margin` degrees at the start.
    ///
    /// Hit-testing keeps using the full interval.
    pub fn drawn_sweep(&self, margin: f64) -> (f64, f64) {
        (
            self.start_angle + margin,
            (self.sweep_angle - margin).max(0.0),
        )
    }
}

/// An ordered list of segments for one chart.
///
/// Registration order is significant: lookups return the first match.
#[derive(Clone, Debug, Default)]
pub struct SegmentRegistry {
    segments: Vec<Segment>,
}

impl SegmentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn add(&mut self, data_index: usize, value: f64, start_angle: f64, sweep_angle: f64) {
        self.segments
            .push(Segment::new(data_index, value, start_angle, sweep_angle));
    }

    /// Removes every segment.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Returns `true` if the registry holds exactly `expected` segments.
    ///
    /// Layout uses this to skip a rebuild when the dataset shape is unchanged.
    pub fn all_present(&self, expected: usize) -> bool {
        self.segments.len() == expected
    }

    /// Number of registered segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if no segment is registered.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments in registration order.
    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates segments in registration order.
    pub fn iter(&self) -> core::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Returns the first segment, in registration order, containing `angle` (degrees).
    pub fn find(&self, angle: f64) -> Option<&Segment> {
        self.segments.iter().find(|s| s.contains_angle(angle))
    }

    /// Registers one segment per value, with sweeps proportional to each value's share of
    /// the total, laid out clockwise from `start_angle`.
    ///
    /// If the registry already holds `values.len()` segments it is left untouched and `false`
    /// is returned. Otherwise it is rebuilt and `true` is returned. A total that is zero or
    /// not finite registers nothing.
    pub fn register_values(&mut self, values: &[f64], start_angle: f64) -> bool {
        if self.all_present(values.len()) {
            return false;
        }
        self.clear();

        let total: f64 = values.iter().sum();
        if !(total > 0.0) || !total.is_finite() {
            tracing::debug!(count = values.len(), total, "no segments for degenerate total");
            return true;
        }

        let mut current = start_angle;
        for (data_index, &value) in values.iter().enumerate() {
            let sweep = value / total * FULL_TURN;
            self.add(data_index, value, current.rem_euclid(FULL_TURN), sweep);
            current += sweep;
        }
        tracing::debug!(count = values.len(), total, start_angle, "rebuilt segments");
        true
    }
}

impl<'a> IntoIterator for &'a SegmentRegistry {
    type Item = &'a Segment;
    type IntoIter = core::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
