// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring sizing for radial charts.

use kurbo::{Point, Rect};

use crate::RadialMapper;

/// Center and radii of a pie/doughnut derived from the plot area.
///
/// The outer radius is 40% of the shorter side (times the chart scale). A doughnut ring is
/// one tenth of the shorter side, shared between the categories drawn as concentric rings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialLayout {
    /// Chart center in screen coordinates.
    pub center: Point,
    /// Radius of the hole (0 for a pie).
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
}

impl RadialLayout {
    /// Fraction of the shorter side used as the outer radius at scale 1.
    pub const RADIUS_FRACTION: f64 = 0.4;
    /// Fraction of the shorter side used as ring width, split across categories.
    pub const RING_FRACTION: f64 = 0.1;

    /// Lays out a pie filling `bounds`.
    pub fn pie(bounds: Rect, scale: f64) -> Self {
        let (center, side) = Self::square(bounds);
        Self::ring(center, side, scale, None)
    }

    /// Lays out a doughnut filling `bounds` with `category_count` rings.
    ///
    /// The inner radius is that of the outermost ring, which is the one taps resolve against.
    pub fn doughnut(bounds: Rect, scale: f64, category_count: usize) -> Self {
        let (center, side) = Self::square(bounds);
        let ring_width = side * Self::RING_FRACTION / category_count.max(1) as f64;
        Self::ring(center, side, scale, Some(ring_width))
    }

    /// Center and shorter side of `bounds`.
    fn square(bounds: Rect) -> (Point, f64) {
        let bounds = bounds.abs();
        (bounds.center(), bounds.width().min(bounds.height()))
    }

    /// A ring of `ring_width` inside the outer radius, or a full disc for `None`.
    fn ring(center: Point, side: f64, scale: f64, ring_width: Option<f64>) -> Self {
        let outer_radius = side * Self::RADIUS_FRACTION * scale;
        let inner_radius = ring_width.map_or(0.0, |w| (outer_radius - w).max(0.0));
        Self {
            center,
            inner_radius,
            outer_radius,
        }
    }

    /// Overrides the center (e.g. when the host has panned the chart).
    pub fn with_center(mut self, center: impl Into<Point>) -> Self {
        self.center = center.into();
        self
    }

    /// Pushes this layout into `mapper`, keeping its segments.
    pub fn apply(&self, mapper: &mut RadialMapper) {
        mapper.set_dimensions(self.inner_radius, self.outer_radius, self.center);
    }
}
