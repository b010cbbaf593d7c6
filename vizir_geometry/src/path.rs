// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc-length queries over `kurbo` paths.
//!
//! Cubic segments have no closed-form arc length, so lengths are approximated with
//! [`ParamCurveArclen`] to a caller-chosen accuracy and cached per segment.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{
    BezPath, ParamCurve, ParamCurveArclen, ParamCurveExtrema, PathEl, PathSeg, Point, Rect,
};

/// A path that can be queried by distance travelled along it.
pub trait ArcLengthPath {
    /// Total arc length.
    fn length(&self) -> f64;

    /// Position at `distance` along the path, clamped into `[0, length]`.
    ///
    /// Returns `None` for an empty path or a `NaN` distance.
    fn point_at(&self, distance: f64) -> Option<Point>;

    /// Bounding box of the path, or `None` for an empty path.
    fn bounds(&self) -> Option<Rect>;
}

/// A path with cached per-segment arc lengths.
#[derive(Clone, Debug, Default)]
pub struct MeasuredPath {
    segments: Vec<PathSeg>,
    /// Cumulative length at the end of each segment.
    ends: Vec<f64>,
    start: Option<Point>,
    bounds: Option<Rect>,
    accuracy: f64,
}

impl MeasuredPath {
    /// Default arc-length accuracy, in scene units.
    pub const DEFAULT_ACCURACY: f64 = 1e-3;

    /// Measures `path`. Zero-length segments are dropped.
    pub fn new(path: &BezPath, accuracy: f64) -> Self {
        let mut segments = Vec::new();
        let mut ends = Vec::new();
        let mut bounds: Option<Rect> = None;
        let mut total = 0.0;
        for seg in path.segments() {
            let len = seg.arclen(accuracy);
            if !(len > 0.0) {
                continue;
            }
            let b = seg.bounding_box();
            bounds = Some(bounds.map_or(b, |r| r.union(b)));
            total += len;
            segments.push(seg);
            ends.push(total);
        }

        let start = match path.elements().first() {
            Some(PathEl::MoveTo(p)) => Some(*p),
            _ => segments.first().map(|s| s.start()),
        };
        let bounds = bounds.or_else(|| start.map(|p| Rect::from_points(p, p)));

        Self {
            segments,
            ends,
            start,
            bounds,
            accuracy,
        }
    }

    /// Number of measured (non-degenerate) segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

impl ArcLengthPath for MeasuredPath {
    fn length(&self) -> f64 {
        self.ends.last().copied().unwrap_or(0.0)
    }

    fn point_at(&self, distance: f64) -> Option<Point> {
        if distance.is_nan() {
            return None;
        }
        if self.segments.is_empty() {
            return self.start;
        }
        let d = distance.clamp(0.0, self.length());
        let idx = self
            .ends
            .partition_point(|&end| end < d)
            .min(self.segments.len() - 1);
        let seg_start = if idx == 0 { 0.0 } else { self.ends[idx - 1] };
        let seg = self.segments[idx];
        let t = seg.inv_arclen(d - seg_start, self.accuracy);
        Some(seg.eval(t))
    }

    fn bounds(&self) -> Option<Rect> {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn assert_point_close(a: Point, b: Point) {
        assert!(a.distance(b) <= 1e-4, "{a:?} != {b:?}");
    }

    fn polyline(points: &[(f64, f64)]) -> BezPath {
        let mut p = BezPath::new();
        for (i, &pt) in points.iter().enumerate() {
            if i == 0 {
                p.move_to(pt);
            } else {
                p.line_to(pt);
            }
        }
        p
    }

    #[test]
    fn straight_line_is_linear_in_distance() {
        let m = MeasuredPath::new(&polyline(&[(0.0, 0.0), (10.0, 0.0)]), 1e-6);
        assert!((m.length() - 10.0).abs() < 1e-9);
        assert_point_close(m.point_at(4.0).unwrap(), Point::new(4.0, 0.0));
        assert_point_close(m.point_at(-3.0).unwrap(), Point::new(0.0, 0.0));
        assert_point_close(m.point_at(30.0).unwrap(), Point::new(10.0, 0.0));
        assert!(m.point_at(f64::NAN).is_none());
    }

    #[test]
    fn distance_crosses_segment_boundaries() {
        let m = MeasuredPath::new(&polyline(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]), 1e-6);
        assert_eq!(m.segment_count(), 2);
        assert!((m.length() - 7.0).abs() < 1e-9);
        assert_point_close(m.point_at(3.0).unwrap(), Point::new(3.0, 0.0));
        assert_point_close(m.point_at(5.0).unwrap(), Point::new(3.0, 2.0));
        assert_eq!(m.bounds(), Some(Rect::new(0.0, 0.0, 3.0, 4.0)));
    }

    #[test]
    fn cubic_length_is_approximated() {
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.curve_to((0.0, 10.0), (10.0, 10.0), (10.0, 0.0));
        let m = MeasuredPath::new(&p, 1e-6);
        // Longer than the chord, shorter than the control polygon.
        assert!(m.length() > 10.0 && m.length() < 30.0, "{}", m.length());
        let mid = m.point_at(m.length() / 2.0).unwrap();
        assert_point_close(mid, Point::new(5.0, 7.5));
    }

    #[test]
    fn degenerate_paths() {
        let empty = MeasuredPath::new(&BezPath::new(), MeasuredPath::DEFAULT_ACCURACY);
        assert_eq!(empty.length(), 0.0);
        assert!(empty.point_at(0.0).is_none());
        assert!(empty.bounds().is_none());

        let single = MeasuredPath::new(&polyline(&[(2.0, 3.0)]), MeasuredPath::DEFAULT_ACCURACY);
        assert_eq!(single.length(), 0.0);
        assert_eq!(single.point_at(5.0), Some(Point::new(2.0, 3.0)));

        let coincident = MeasuredPath::new(
            &polyline(&[(2.0, 3.0), (2.0, 3.0)]),
            MeasuredPath::DEFAULT_ACCURACY,
        );
        assert_eq!(coincident.segment_count(), 0);
        assert_eq!(coincident.length(), 0.0);
    }
}
