// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic smoothing of line-chart polylines.
//!
//! Each pair of consecutive vertices `(P_i, P_i+1)` contributes one cubic. Its first control
//! point sits at `1 - s` of the way from `P_i` to `P_i+1`, its second control point is
//! `P_i+1` itself, and it ends at `s` of the way from `P_i+1` towards `P_i+2` (or at
//! `P_i+1` for the final pair). The curve therefore starts at the first vertex, ends at the
//! last, and rounds every interior corner instead of passing through it; point markers are
//! moved onto it afterwards with [`CurveSampler`](crate::CurveSampler).

use kurbo::{BezPath, CubicBez, PathSeg, Point};
use smallvec::SmallVec;

use crate::MeasuredPath;

/// Number of trailing vertices that close a circular polyline instead of being smoothed.
///
/// A circular polyline with no more vertices than this has nothing to smooth and is drawn
/// as straight lines only.
const CLOSURE_VERTICES: usize = 2;

/// Builds smoothed paths through polylines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSmoother {
    smoothness: f64,
}

impl Default for CurveSmoother {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SMOOTHNESS)
    }
}

impl CurveSmoother {
    /// Places control points at about one third and two thirds of each segment.
    pub const DEFAULT_SMOOTHNESS: f64 = 0.33;

    /// Creates a smoother. `smoothness` is clamped into `[0, 1]`; `NaN` disables smoothing.
    pub fn new(smoothness: f64) -> Self {
        let smoothness = if smoothness.is_nan() {
            0.0
        } else {
            smoothness.clamp(0.0, 1.0)
        };
        Self { smoothness }
    }

    /// The smoothness factor.
    pub fn smoothness(&self) -> f64 {
        self.smoothness
    }

    /// Returns `false` when smoothing is disabled and paths are straight polylines.
    pub fn is_smooth(&self) -> bool {
        self.smoothness > 0.0
    }

    /// Builds the path through `vertices`.
    ///
    /// When `circular` is set, the last two vertices close the shape (typically the baseline
    /// corners of an area fill): they are joined with straight lines and the path closes back
    /// to the first vertex. Only the remaining vertices are smoothed.
    pub fn smooth(&self, vertices: &[Point], circular: bool) -> SmoothedPath {
        let (open, closure) = if circular && vertices.len() >= CLOSURE_VERTICES {
            vertices.split_at(vertices.len() - CLOSURE_VERTICES)
        } else {
            (vertices, &[][..])
        };

        let mut curve = BezPath::new();
        if let Some(&first) = open.first() {
            curve.move_to(first);
            if self.is_smooth() {
                let s = self.smoothness;
                for (i, pair) in open.windows(2).enumerate() {
                    let (from, next) = (pair[0], pair[1]);
                    let next_next = open.get(i + 2).copied().unwrap_or(next);
                    curve.curve_to(from.lerp(next, 1.0 - s), next, next.lerp(next_next, s));
                }
            } else {
                for &p in &open[1..] {
                    curve.line_to(p);
                }
            }
        }

        tracing::trace!(
            vertices = vertices.len(),
            smoothness = self.smoothness,
            circular,
            "smoothed polyline"
        );

        SmoothedPath {
            curve,
            closure: closure.iter().copied().collect(),
            circular,
        }
    }
}

/// The output of [`CurveSmoother::smooth`].
#[derive(Clone, Debug, Default)]
pub struct SmoothedPath {
    curve: BezPath,
    closure: SmallVec<[Point; CLOSURE_VERTICES]>,
    circular: bool,
}

impl SmoothedPath {
    /// The smoothed open curve, without the closing lines of a circular path.
    ///
    /// This is the part markers are snapped against.
    pub fn curve(&self) -> &BezPath {
        &self.curve
    }

    /// The cubic pieces of the curve, in order. Empty when smoothing is disabled.
    pub fn cubics(&self) -> impl Iterator<Item = CubicBez> + '_ {
        self.curve.segments().filter_map(|seg| match seg {
            PathSeg::Cubic(c) => Some(c),
            _ => None,
        })
    }

    /// Vertices joined by straight lines after the curve when the path is circular.
    pub fn closure(&self) -> &[Point] {
        &self.closure
    }

    /// Returns `true` if the path closes back to its first vertex.
    pub fn is_circular(&self) -> bool {
        self.circular
    }

    /// The full drawable path, including closing lines for a circular path.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = self.curve.clone();
        if self.circular {
            for &p in &self.closure {
                if path.elements().is_empty() {
                    path.move_to(p);
                } else {
                    path.line_to(p);
                }
            }
            if !path.elements().is_empty() {
                path.close_path();
            }
        }
        path
    }

    /// Measures the open curve for arc-length queries.
    pub fn measure(&self, accuracy: f64) -> MeasuredPath {
        MeasuredPath::new(&self.curve, accuracy)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{ParamCurve, PathEl};

    use super::*;
    use crate::ArcLengthPath;

    fn pts(coords: &[(f64, f64)]) -> std::vec::Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn zero_smoothness_draws_straight_segments() {
        let v = pts(&[(0.0, 0.0), (10.0, 5.0), (20.0, -5.0), (30.0, 0.0)]);
        let path = CurveSmoother::new(0.0).smooth(&v, false);
        let segs: std::vec::Vec<_> = path.curve().segments().collect();
        assert_eq!(segs.len(), 3);
        for (seg, pair) in segs.iter().zip(v.windows(2)) {
            let PathSeg::Line(line) = seg else {
                panic!("expected a line, got {seg:?}");
            };
            assert_eq!((line.p0, line.p1), (pair[0], pair[1]));
        }
        assert_eq!(path.cubics().count(), 0);
    }

    #[test]
    fn control_points_follow_neighbouring_segments() {
        let v = pts(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]);
        let path = CurveSmoother::new(0.25).smooth(&v, false);
        let cubics: std::vec::Vec<_> = path.cubics().collect();
        assert_eq!(cubics.len(), 2);

        let c0 = cubics[0];
        assert_eq!(c0.p0, Point::new(0.0, 0.0));
        assert_eq!(c0.p1, Point::new(7.5, 7.5));
        assert_eq!(c0.p2, Point::new(10.0, 10.0));
        assert_eq!(c0.p3, Point::new(12.5, 7.5));

        let c1 = cubics[1];
        assert_eq!(c1.p0, c0.p3);
        assert_eq!(c1.p1, Point::new(17.5, 2.5));
        assert_eq!(c1.p2, Point::new(20.0, 0.0));
        assert_eq!(c1.p3, Point::new(20.0, 0.0));
    }

    #[test]
    fn curve_is_continuous_and_spans_the_endpoints() {
        let v = pts(&[(0.0, 3.0), (7.0, 9.0), (15.0, 1.0), (22.0, 6.0), (30.0, 2.0)]);
        let path = CurveSmoother::default().smooth(&v, false);
        let cubics: std::vec::Vec<_> = path.cubics().collect();
        assert_eq!(cubics.len(), v.len() - 1);
        assert_eq!(cubics[0].start(), v[0]);
        assert_eq!(cubics[cubics.len() - 1].end(), v[v.len() - 1]);
        for w in cubics.windows(2) {
            assert_eq!(w[0].end(), w[1].start());
        }
    }

    #[test]
    fn collinear_vertices_stay_on_the_line() {
        let v = pts(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
        for s in [0.0, 0.1, 0.33, 0.5, 0.9, 1.0] {
            let measured = CurveSmoother::new(s).smooth(&v, false).measure(1e-6);
            let len = measured.length();
            let mut d = 0.0;
            while d <= len {
                let p = measured.point_at(d).unwrap();
                assert!(p.y.abs() < 1e-9, "s={s} d={d} p={p:?}");
                d += 0.5;
            }
        }
    }

    #[test]
    fn smoothness_is_clamped() {
        assert_eq!(CurveSmoother::new(-1.0).smoothness(), 0.0);
        assert_eq!(CurveSmoother::new(3.0).smoothness(), 1.0);
        assert!(!CurveSmoother::new(f64::NAN).is_smooth());
        assert!(CurveSmoother::default().is_smooth());
    }

    #[test]
    fn circular_path_closes_through_trailing_vertices() {
        // An area fill: the series, then the two baseline corners.
        let v = pts(&[
            (0.0, 5.0),
            (10.0, 2.0),
            (20.0, 6.0),
            (20.0, 10.0),
            (0.0, 10.0),
        ]);
        let path = CurveSmoother::default().smooth(&v, true);
        assert!(path.is_circular());
        assert_eq!(path.closure(), &v[3..]);
        assert_eq!(path.cubics().count(), 2);

        let full = path.to_bez_path();
        let els = full.elements();
        assert_eq!(els[els.len() - 3], PathEl::LineTo(Point::new(20.0, 10.0)));
        assert_eq!(els[els.len() - 2], PathEl::LineTo(Point::new(0.0, 10.0)));
        assert_eq!(els[els.len() - 1], PathEl::ClosePath);

        // Measuring ignores the closing lines.
        let measured = path.measure(1e-6);
        let b = measured.bounds().unwrap();
        assert!(b.y1 < 10.0, "{b:?}");
    }

    #[test]
    fn circular_straight_path_also_closes() {
        let v = pts(&[(0.0, 5.0), (10.0, 2.0), (10.0, 10.0), (0.0, 10.0)]);
        let full = CurveSmoother::new(0.0).smooth(&v, true).to_bez_path();
        assert_eq!(
            full.elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 5.0)),
                PathEl::LineTo(Point::new(10.0, 2.0)),
                PathEl::LineTo(Point::new(10.0, 10.0)),
                PathEl::LineTo(Point::new(0.0, 10.0)),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn circular_pair_is_all_closure() {
        let v = pts(&[(0.0, 10.0), (20.0, 10.0)]);
        let path = CurveSmoother::default().smooth(&v, true);
        assert!(path.curve().elements().is_empty());
        assert_eq!(path.cubics().count(), 0);
        assert_eq!(path.closure(), &v[..]);
        assert_eq!(path.measure(1e-3).length(), 0.0);
        assert_eq!(
            path.to_bez_path().elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 10.0)),
                PathEl::LineTo(Point::new(20.0, 10.0)),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn short_inputs() {
        let empty = CurveSmoother::default().smooth(&[], true);
        assert!(empty.to_bez_path().elements().is_empty());

        let single = CurveSmoother::default().smooth(&[Point::new(1.0, 2.0)], false);
        assert_eq!(
            single.curve().elements(),
            &[PathEl::MoveTo(Point::new(1.0, 2.0))]
        );
        assert_eq!(single.measure(1e-3).length(), 0.0);
    }
}
