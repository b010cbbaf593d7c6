// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial hit-testing for pie and doughnut charts.
//!
//! A pie is a doughnut with an inner radius of zero, so both use [`RadialMapper`].

use kurbo::{Circle, CircleSegment, Point, Vec2};

use crate::segment::{FULL_TURN, Segment, SegmentRegistry};

/// The selection produced by tapping a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentSelection {
    /// Series index. Radial charts hold a single series, so this is always `0`.
    pub series_index: usize,
    /// Index of the selected data element.
    pub data_index: usize,
    /// Value of the selected data element.
    pub value: f64,
}

/// Geometry and segment registry for one pie/doughnut chart.
///
/// Dimensions are refreshed on every layout pass; segments survive layout passes until the
/// dataset size changes (see [`RadialMapper::register_values`]).
#[derive(Clone, Debug)]
pub struct RadialMapper {
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    touch_margin: f64,
    segments: SegmentRegistry,
}

impl Default for RadialMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl RadialMapper {
    /// Squared-distance slack applied to both ring boundaries so near-edge taps still hit.
    pub const DEFAULT_TOUCH_MARGIN: f64 = 500.0;

    /// Creates a mapper centered at the origin with zero radii and no segments.
    pub fn new() -> Self {
        Self {
            center: Point::ORIGIN,
            inner_radius: 0.0,
            outer_radius: 0.0,
            touch_margin: Self::DEFAULT_TOUCH_MARGIN,
            segments: SegmentRegistry::new(),
        }
    }

    /// Sets the squared-distance slack used by [`RadialMapper::is_on_chart`].
    pub fn with_touch_margin(mut self, touch_margin: f64) -> Self {
        self.touch_margin = touch_margin;
        self
    }

    /// Sets the ring geometry.
    ///
    /// Callers are expected to keep `0 <= inner_radius < outer_radius`; other values are not
    /// rejected and simply make hit-testing meaningless.
    pub fn set_dimensions(
        &mut self,
        inner_radius: f64,
        outer_radius: f64,
        center: impl Into<Point>,
    ) {
        self.inner_radius = inner_radius;
        self.outer_radius = outer_radius;
        self.center = center.into();
    }

    /// Sets pie geometry (no hole).
    pub fn set_pie_dimensions(&mut self, radius: f64, center: impl Into<Point>) {
        self.set_dimensions(0.0, radius, center);
    }

    /// Chart center in screen coordinates.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the hole (0 for a pie).
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Outer radius.
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Squared-distance slack applied to the ring boundaries.
    pub fn touch_margin(&self) -> f64 {
        self.touch_margin
    }

    /// Angle of `point` around the center, in degrees within `[0, 360)`.
    ///
    /// 0° is the 3 o'clock position and angles grow clockwise on screen, so the 6 o'clock
    /// position is 90° and 12 o'clock is 270°. Segments are registered with the same
    /// convention.
    pub fn angle_of(&self, point: Point) -> f64 {
        // Flip y so `atan2` works in a y-up frame.
        let v = Vec2::new(point.x - self.center.x, -(point.y - self.center.y));
        let theta = v.atan2();
        let radians = if theta < 0.0 {
            -theta
        } else {
            core::f64::consts::TAU - theta
        };
        let degrees = radians.to_degrees();
        if degrees >= FULL_TURN {
            degrees - FULL_TURN
        } else {
            degrees
        }
    }

    /// Returns `true` if `point` lies within the ring, widened by the touch margin.
    ///
    /// The test is on squared distances: `inner² - margin <= d² <= outer² + margin`.
    pub fn is_on_chart(&self, point: Point) -> bool {
        let d2 = (point - self.center).hypot2();
        let outer2 = self.outer_radius * self.outer_radius;
        let inner2 = self.inner_radius * self.inner_radius;
        d2 <= outer2 + self.touch_margin && d2 >= inner2 - self.touch_margin
    }

    /// Returns the first registered segment containing `point`, if `point` is on the chart.
    pub fn segment_at(&self, point: Point) -> Option<&Segment> {
        if !self.is_on_chart(point) {
            tracing::trace!(x = point.x, y = point.y, "tap outside ring");
            return None;
        }
        let angle = self.angle_of(point);
        let hit = self.segments.find(angle);
        tracing::trace!(
            x = point.x,
            y = point.y,
            angle,
            data_index = ?hit.map(|s| s.data_index),
            "radial hit test"
        );
        hit
    }

    /// Resolves `point` into the selection a chart reports for a tap.
    pub fn selection_at(&self, point: Point) -> Option<SegmentSelection> {
        self.segment_at(point).map(|s| SegmentSelection {
            series_index: 0,
            data_index: s.data_index,
            value: s.value,
        })
    }

    /// Appends a segment. Angles are in degrees.
    pub fn add_segment(&mut self, data_index: usize, value: f64, start_angle: f64, sweep: f64) {
        self.segments.add(data_index, value, start_angle, sweep);
    }

    /// Removes every registered segment.
    pub fn clear_segments(&mut self) {
        self.segments.clear();
    }

    /// Returns `true` if exactly `expected` segments are registered.
    pub fn all_segments_present(&self, expected: usize) -> bool {
        self.segments.all_present(expected)
    }

    /// Rebuilds segments from `values` unless the dataset size is unchanged.
    ///
    /// See [`SegmentRegistry::register_values`].
    pub fn register_values(&mut self, values: &[f64], start_angle: f64) -> bool {
        self.segments.register_values(values, start_angle)
    }

    /// The segment registry.
    pub fn segments(&self) -> &SegmentRegistry {
        &self.segments
    }

    /// The annular slice to paint for `segment`, with `margin` degrees left empty at its
    /// start.
    ///
    /// In a y-down scene `kurbo` angles also grow clockwise from 3 o'clock, so the degree
    /// convention carries over unchanged.
    pub fn sector(&self, segment: &Segment, margin: f64) -> CircleSegment {
        let (start, sweep) = segment.drawn_sweep(margin);
        Circle::new(self.center, self.outer_radius).segment(
            self.inner_radius,
            start.to_radians(),
            sweep.to_radians(),
        )
    }
}
